//! Spoiler delimiter scanning.

use std::sync::LazyLock;

use regex::Regex;

/// `||`, the shortest run of non-line-terminator characters, `||`.
static SPOILER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\|([^\n\r\x{2028}\x{2029}]*?)\|\|").unwrap());

/// Piece of a scanned string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text outside any spoiler. Never empty.
    Text(&'a str),
    /// Inner text of a spoiler, without delimiters. May be empty.
    Spoiler(&'a str),
}

/// Split `value` into text and spoiler segments.
///
/// Pairs are matched left to right, non-greedily and without overlap:
/// scanning resumes right after each closing `||`. An unpaired `||` stays
/// in the surrounding text.
///
/// Returns `None` when `value` contains no spoiler.
///
/// # Examples
///
/// ```
/// use spoiler::{Segment, split_spoilers};
///
/// assert_eq!(
///     split_spoilers("a ||b|| c"),
///     Some(vec![Segment::Text("a "), Segment::Spoiler("b"), Segment::Text(" c")])
/// );
/// assert_eq!(split_spoilers("no spoilers"), None);
/// ```
#[must_use]
pub fn split_spoilers(value: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in SPOILER_RE.captures_iter(value) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(&value[last..whole.start()]));
        }
        segments.push(Segment::Spoiler(inner.as_str()));
        last = whole.end();
    }

    if segments.is_empty() {
        return None;
    }
    if last < value.len() {
        segments.push(Segment::Text(&value[last..]));
    }
    Some(segments)
}
