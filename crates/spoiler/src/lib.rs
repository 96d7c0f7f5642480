//! Spoiler syntax for markdown.
//!
//! Rewrites inline `||hidden text||` into
//! `<span class="spoiler">hidden text</span>`.
//!
//! # Architecture
//!
//! - [`split_spoilers`]: scans a string and splits it into text and spoiler
//!   [`Segment`]s
//! - [`SpoilerTransform`]: replaces a text node of a [`spoiler_mdast::Node`]
//!   tree with text and raw HTML nodes, in place
//! - [`SpoilerEvents`]: the same rewrite applied to a pulldown-cmark event
//!   stream
//! - [`render_markdown`]: parse, transform and render in one call
//!
//! # Example
//!
//! ```
//! use spoiler::{RenderOptions, render_markdown};
//!
//! let result = render_markdown("this is a ||secret|| message", &RenderOptions::default());
//!
//! assert_eq!(
//!     result.html,
//!     "<p>this is a <span class=\"spoiler\">secret</span> message</p>\n"
//! );
//! assert_eq!(result.spoilers, 1);
//! ```

mod events;
mod render;
mod scan;
mod transform;

pub use events::SpoilerEvents;
pub use render::{RenderOptions, RenderResult, render_markdown};
pub use scan::{Segment, split_spoilers};
pub use transform::{DEFAULT_CLASS, SpoilerTransform};
