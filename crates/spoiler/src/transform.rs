//! Tree transform replacing spoiler syntax in text nodes.

use spoiler_mdast::{Action, Node, NodeType, visit};

use crate::scan::{Segment, split_spoilers};

/// CSS class applied to spoiler spans unless configured otherwise.
pub const DEFAULT_CLASS: &str = "spoiler";

/// Rewrites `||text||` in text nodes into raw HTML spans.
///
/// A text node is split into an ordered sequence of text and HTML nodes
/// that replaces it in its parent:
///
/// ```text
/// Text("this is a ||secret|| message")
///   => Text("this is a ")
///      Html("<span class=\"spoiler\">secret</span>")
///      Text(" message")
/// ```
///
/// Inner text is inserted as is, without HTML escaping.
#[derive(Clone, Debug)]
pub struct SpoilerTransform {
    class: String,
}

impl Default for SpoilerTransform {
    fn default() -> Self {
        Self {
            class: DEFAULT_CLASS.to_owned(),
        }
    }
}

impl SpoilerTransform {
    /// Create a transform using the `spoiler` class.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different CSS class for spoiler spans.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// CSS class applied to spoiler spans.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Wrap spoiler inner text in a span.
    #[must_use]
    pub fn span(&self, inner: &str) -> String {
        format!(r#"<span class="{}">{inner}</span>"#, self.class)
    }

    /// Replacement nodes for a text value.
    ///
    /// Empty when `value` contains no spoiler.
    #[must_use]
    pub fn replacements(&self, value: &str) -> Vec<Node> {
        let Some(segments) = split_spoilers(value) else {
            return Vec::new();
        };
        segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => Node::text(text),
                Segment::Spoiler(inner) => Node::html(self.span(inner)),
            })
            .collect()
    }

    /// Rewrite the text node at `parent.children()[index]`.
    ///
    /// The node is replaced by its replacement sequence. Non-text nodes,
    /// empty text and text without spoilers are left untouched.
    ///
    /// Returns where a [`visit`] traversal should resume: past the inserted
    /// nodes after a rewrite, [`Action::Continue`] otherwise.
    pub fn transform(&self, index: usize, parent: &mut Node) -> Action {
        let Some(Node::Text(value)) = parent.children().get(index) else {
            return Action::Continue;
        };
        if value.is_empty() {
            return Action::Continue;
        }

        let replacements = self.replacements(value);
        if replacements.is_empty() {
            return Action::Continue;
        }

        match parent.splice(index, replacements) {
            Some(inserted) => Action::SkipTo(index + inserted),
            None => Action::Continue,
        }
    }

    /// Rewrite every text node in `root`.
    ///
    /// Returns the number of spoilers rendered.
    pub fn apply(&self, root: &mut Node) -> usize {
        let mut spoilers = 0;

        visit(root, NodeType::Text, |index, parent| {
            let action = self.transform(index, parent);
            if let Action::SkipTo(next) = action {
                spoilers += parent
                    .children()
                    .get(index..next)
                    .unwrap_or_default()
                    .iter()
                    .filter(|node| node.node_type() == NodeType::Html)
                    .count();
            }
            action
        });

        tracing::debug!(spoilers, class = %self.class, "Applied spoiler transform");
        spoilers
    }
}
