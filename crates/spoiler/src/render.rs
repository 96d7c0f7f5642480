//! Markdown to HTML rendering with spoilers applied.

use pulldown_cmark::Options;
use spoiler_mdast::Node;

use crate::transform::{DEFAULT_CLASS, SpoilerTransform};

/// Rendering options.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// CSS class for spoiler spans.
    pub class: String,
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class: DEFAULT_CLASS.to_owned(),
            gfm: true,
        }
    }
}

impl RenderOptions {
    /// Parser options for the configured markdown dialect.
    ///
    /// With GFM enabled the parser supports tables, strikethrough
    /// (`~~text~~`), task lists and GFM blockquote tags.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML.
    pub html: String,
    /// Number of spoilers rendered.
    pub spoilers: usize,
}

/// Parse `markdown`, apply [`SpoilerTransform`] and render HTML.
#[must_use]
pub fn render_markdown(markdown: &str, options: &RenderOptions) -> RenderResult {
    let mut tree = Node::parse(markdown, options.parser_options());
    let spoilers = SpoilerTransform::new()
        .with_class(options.class.as_str())
        .apply(&mut tree);

    RenderResult {
        html: tree.to_html(),
        spoilers,
    }
}
