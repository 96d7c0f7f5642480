//! Spoiler rewriting over a pulldown-cmark event stream.

use std::collections::VecDeque;

use pulldown_cmark::{CowStr, Event};
use spoiler_mdast::is_verbatim;

use crate::scan::{Segment, split_spoilers};
use crate::transform::SpoilerTransform;

/// Iterator adapter rewriting spoilers in `Text` events.
///
/// Each text event containing spoilers is replaced by `Text` and
/// `InlineHtml` events, following the same rules as
/// [`SpoilerTransform::transform`]. Text inside code blocks, images and
/// metadata blocks passes through unchanged.
///
/// pulldown-cmark can split one run of text into several events, so wrap
/// the parser in [`pulldown_cmark::TextMergeStream`] first.
///
/// # Example
///
/// ```
/// use pulldown_cmark::{Parser, TextMergeStream, html};
/// use spoiler::{SpoilerEvents, SpoilerTransform};
///
/// let transform = SpoilerTransform::new();
/// let events = SpoilerEvents::new(TextMergeStream::new(Parser::new("a ||b||")), &transform);
///
/// let mut out = String::new();
/// html::push_html(&mut out, events);
/// assert_eq!(out, "<p>a <span class=\"spoiler\">b</span></p>\n");
/// ```
pub struct SpoilerEvents<'t, 'a, I> {
    inner: I,
    transform: &'t SpoilerTransform,
    pending: VecDeque<Event<'a>>,
    /// Depth inside elements whose text must not be rewritten.
    verbatim_depth: usize,
}

impl<'t, 'a, I> SpoilerEvents<'t, 'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    /// Wrap an event iterator.
    pub fn new(inner: I, transform: &'t SpoilerTransform) -> Self {
        Self {
            inner,
            transform,
            pending: VecDeque::new(),
            verbatim_depth: 0,
        }
    }
}

impl<'a, I> Iterator for SpoilerEvents<'_, 'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let event = self.inner.next()?;
        match &event {
            Event::Start(tag) if self.verbatim_depth > 0 || is_verbatim(tag) => {
                self.verbatim_depth += 1;
            }
            Event::End(_) if self.verbatim_depth > 0 => self.verbatim_depth -= 1,
            Event::Text(text) if self.verbatim_depth == 0 && !text.is_empty() => {
                if let Some(segments) = split_spoilers(text) {
                    for segment in segments {
                        self.pending.push_back(match segment {
                            Segment::Text(text) => Event::Text(CowStr::from(text.to_owned())),
                            Segment::Spoiler(inner) => {
                                Event::InlineHtml(CowStr::from(self.transform.span(inner)))
                            }
                        });
                    }
                    return self.pending.pop_front();
                }
            }
            _ => {}
        }
        Some(event)
    }
}
