//! Tree node representation for markdown documents.

use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::build::Builder;

/// Node type used to filter visitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    Root,
    Element,
    Verbatim,
    Text,
    Html,
    InlineCode,
    Leaf,
}

/// Node in a parsed markdown tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Document root.
    Root {
        /// Top-level blocks.
        children: Vec<Node>,
    },
    /// Container element (paragraph, heading, emphasis, link, list, ...).
    Element {
        /// pulldown-cmark tag that opened the element.
        tag: Tag<'static>,
        /// Child nodes.
        children: Vec<Node>,
    },
    /// Element whose content is kept as raw events and never visited.
    ///
    /// Used for code blocks, images and metadata blocks: their text is code,
    /// alt text or front matter, not document prose.
    Verbatim {
        /// pulldown-cmark tag that opened the element.
        tag: Tag<'static>,
        /// Events between the start and end tags.
        events: Vec<Event<'static>>,
    },
    /// Literal text.
    Text(String),
    /// Raw markup emitted verbatim by the renderer.
    Html(String),
    /// Inline code span.
    InlineCode(String),
    /// Any other leaf event (breaks, rules, task markers, footnote references, math).
    Leaf(Event<'static>),
}

impl Node {
    /// Create an empty document root.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Self::Root { children }
    }

    /// Create a container element.
    #[must_use]
    pub fn element(tag: Tag<'static>, children: Vec<Node>) -> Self {
        Self::Element { tag, children }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a raw HTML node.
    #[must_use]
    pub fn html(value: impl Into<String>) -> Self {
        Self::Html(value.into())
    }

    /// Parse markdown into a tree.
    #[must_use]
    pub fn parse(markdown: &str, options: Options) -> Self {
        Self::from_events(Parser::new_ext(markdown, options))
    }

    /// Build a tree from a pulldown-cmark event stream.
    ///
    /// Adjacent text events are merged into a single text node. Unbalanced
    /// end events are ignored and elements left open are closed at the end
    /// of input.
    #[must_use]
    pub fn from_events<'a>(events: impl IntoIterator<Item = Event<'a>>) -> Self {
        let mut builder = Builder::default();
        for event in events {
            builder.push(event);
        }
        builder.finish()
    }

    /// Type of this node.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Root { .. } => NodeType::Root,
            Self::Element { .. } => NodeType::Element,
            Self::Verbatim { .. } => NodeType::Verbatim,
            Self::Text(_) => NodeType::Text,
            Self::Html(_) => NodeType::Html,
            Self::InlineCode(_) => NodeType::InlineCode,
            Self::Leaf(_) => NodeType::Leaf,
        }
    }

    /// String value of a literal node (text, HTML, inline code).
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Text(value) | Self::Html(value) | Self::InlineCode(value) => {
                Some(value.as_str())
            }
            _ => None,
        }
    }

    /// Child nodes. Empty for leaves and verbatim elements.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Root { children } | Self::Element { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Mutable child list, if this node can have children.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Root { children } | Self::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Whether this node can hold children.
    #[must_use]
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Root { .. } | Self::Element { .. })
    }

    /// Replace the child at `index` with `replacements`.
    ///
    /// The child list grows by `replacements.len() - 1`. An empty
    /// `replacements` removes the child.
    ///
    /// Returns the number of inserted nodes, or `None` when this node has no
    /// children or `index` is out of bounds (nothing is changed).
    pub fn splice(&mut self, index: usize, replacements: Vec<Node>) -> Option<usize> {
        let children = self.children_mut()?;
        if index >= children.len() {
            return None;
        }
        let inserted = replacements.len();
        children.splice(index..=index, replacements);
        Some(inserted)
    }

    /// Concatenated text of all text, inline code and HTML descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(value) | Self::Html(value) | Self::InlineCode(value) => out.push_str(value),
            Self::Root { children } | Self::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Verbatim { .. } | Self::Leaf(_) => {}
        }
    }

    /// Flatten the tree back into a pulldown-cmark event stream.
    #[must_use]
    pub fn to_events(&self) -> Vec<Event<'_>> {
        let mut events = Vec::new();
        self.flatten(false, &mut events);
        events
    }

    fn flatten<'a>(&'a self, in_html_block: bool, out: &mut Vec<Event<'a>>) {
        match self {
            Self::Root { children } => {
                for child in children {
                    child.flatten(false, out);
                }
            }
            Self::Element { tag, children } => {
                let html_block = matches!(tag, Tag::HtmlBlock);
                out.push(Event::Start(tag.clone()));
                for child in children {
                    child.flatten(html_block, out);
                }
                out.push(Event::End(tag.to_end()));
            }
            Self::Verbatim { tag, events } => {
                out.push(Event::Start(tag.clone()));
                for event in events {
                    out.push(event.clone());
                }
                out.push(Event::End(tag.to_end()));
            }
            Self::Text(value) => out.push(Event::Text(value.as_str().into())),
            Self::Html(value) if in_html_block => out.push(Event::Html(value.as_str().into())),
            Self::Html(value) => out.push(Event::InlineHtml(value.as_str().into())),
            Self::InlineCode(value) => out.push(Event::Code(value.as_str().into())),
            Self::Leaf(event) => out.push(event.clone()),
        }
    }

    /// Render the tree to HTML.
    ///
    /// Text is escaped; [`Node::Html`] values are written unchanged.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, self.to_events().into_iter());
        html
    }
}
