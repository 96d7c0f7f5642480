//! Mutable markdown tree for plugin-style transforms.
//!
//! pulldown-cmark produces a flat event stream. Transforms that replace one
//! node with several (splitting a text node, for instance) are easier to
//! express against a tree, so this crate provides:
//!
//! - [`Node`]: an owned tree built from pulldown-cmark events
//! - [`visit`]: a preorder visitor that hands callbacks the node's index and
//!   its parent, so they can splice siblings in place
//! - [`Node::to_html`]: flattens the tree back into events and renders them
//!   with pulldown-cmark's HTML writer
//!
//! # Example
//!
//! ```
//! use pulldown_cmark::Options;
//! use spoiler_mdast::{Action, Node, NodeType, visit};
//!
//! let mut tree = Node::parse("Hello *world*", Options::empty());
//!
//! visit(&mut tree, NodeType::Text, |index, parent| {
//!     if parent.children()[index].value() == Some("world") {
//!         parent.splice(index, vec![Node::html("<b>world</b>")]);
//!         return Action::SkipTo(index + 1);
//!     }
//!     Action::Continue
//! });
//!
//! assert_eq!(tree.to_html(), "<p>Hello <em><b>world</b></em></p>\n");
//! ```

mod build;
mod node;
mod visit;

pub use build::is_verbatim;
pub use node::{Node, NodeType};
pub use visit::{Action, visit};
