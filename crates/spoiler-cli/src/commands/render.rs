//! `spoiler render` command implementation.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use spoiler::{RenderOptions, render_markdown};
use spoiler_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Path that selects standard input.
const STDIN_PATH: &str = "-";

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown files to render (`-` or none reads stdin).
    files: Vec<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSS class for spoiler spans (overrides config).
    #[arg(long)]
    class: Option<String>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Path to configuration file (default: auto-discover spoiler.toml).
    #[arg(short, long, env = "SPOILER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            class: self.class.clone(),
            gfm: self.no_gfm.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let options = RenderOptions {
            class: config.spoiler.class,
            gfm: config.markdown.gfm,
        };

        let html = render_inputs(&self.files, &options)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, html)?;
                Output::new().success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Render every input and concatenate the HTML in input order.
fn render_inputs(files: &[PathBuf], options: &RenderOptions) -> Result<String, CliError> {
    let stdin = [PathBuf::from(STDIN_PATH)];
    let inputs = if files.is_empty() { &stdin[..] } else { files };
    let output = Output::new();

    let mut html = String::new();
    let mut total = 0;
    for path in inputs {
        let markdown = read_input(path)?;
        let result = render_markdown(&markdown, options);
        tracing::info!(path = %path.display(), spoilers = result.spoilers, "Rendered document");
        total += result.spoilers;
        html.push_str(&result.html);
    }

    if inputs.len() > 1 {
        output.info(&format!(
            "Rendered {} documents, {total} spoilers",
            inputs.len()
        ));
    }

    Ok(html)
}

/// Read markdown from a file, or from stdin for `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    let result = if path == Path::new(STDIN_PATH) {
        io::read_to_string(io::stdin())
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
