//! Tree construction from pulldown-cmark events.

use pulldown_cmark::{Event, Tag};

use crate::Node;

/// Whether the content of `tag` is kept as raw events instead of child nodes.
///
/// Code blocks, images and metadata blocks carry code, alt text and front
/// matter. Text inside them is not prose and must not be rewritten.
#[must_use]
pub fn is_verbatim(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::CodeBlock(_) | Tag::Image { .. } | Tag::MetadataBlock(_)
    )
}

/// Verbatim element being collected.
struct OpenVerbatim {
    tag: Tag<'static>,
    events: Vec<Event<'static>>,
    /// Nesting depth of start tags inside the verbatim element.
    depth: usize,
}

/// Incremental tree builder fed one event at a time.
#[derive(Default)]
pub(crate) struct Builder {
    root: Vec<Node>,
    open: Vec<(Tag<'static>, Vec<Node>)>,
    verbatim: Option<OpenVerbatim>,
}

impl Builder {
    pub(crate) fn push(&mut self, event: Event<'_>) {
        if let Some(open) = self.verbatim.as_mut() {
            match &event {
                Event::Start(_) => open.depth += 1,
                Event::End(_) if open.depth == 0 => {
                    self.close_verbatim();
                    return;
                }
                Event::End(_) => open.depth -= 1,
                _ => {}
            }
            open.events.push(event.into_static());
            return;
        }

        match event {
            Event::Start(tag) if is_verbatim(&tag) => {
                self.verbatim = Some(OpenVerbatim {
                    tag: tag.into_static(),
                    events: Vec::new(),
                    depth: 0,
                });
            }
            Event::Start(tag) => self.open.push((tag.into_static(), Vec::new())),
            Event::End(_) => {
                if let Some((tag, children)) = self.open.pop() {
                    self.current().push(Node::element(tag, children));
                }
            }
            Event::Text(text) => self.push_text(&text),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.current().push(Node::html(html.into_string()));
            }
            Event::Code(code) => self.current().push(Node::InlineCode(code.into_string())),
            other => self.current().push(Node::Leaf(other.into_static())),
        }
    }

    pub(crate) fn finish(mut self) -> Node {
        if self.verbatim.is_some() {
            self.close_verbatim();
        }
        while let Some((tag, children)) = self.open.pop() {
            self.current().push(Node::element(tag, children));
        }
        Node::root(self.root)
    }

    fn current(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        }
    }

    fn push_text(&mut self, text: &str) {
        let children = self.current();
        if let Some(Node::Text(last)) = children.last_mut() {
            last.push_str(text);
        } else {
            children.push(Node::text(text));
        }
    }

    fn close_verbatim(&mut self) {
        if let Some(OpenVerbatim { tag, events, .. }) = self.verbatim.take() {
            self.current().push(Node::Verbatim { tag, events });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{CodeBlockKind, Options};

    fn paragraph(children: Vec<Node>) -> Node {
        Node::element(Tag::Paragraph, children)
    }

    #[test]
    fn test_build_paragraph() {
        let tree = Node::parse("Hello world", Options::empty());
        assert_eq!(
            tree,
            Node::root(vec![paragraph(vec![Node::text("Hello world")])])
        );
    }

    #[test]
    fn test_build_nested_inline() {
        let tree = Node::parse("a **b _c_** d", Options::empty());
        assert_eq!(
            tree,
            Node::root(vec![paragraph(vec![
                Node::text("a "),
                Node::element(
                    Tag::Strong,
                    vec![
                        Node::text("b "),
                        Node::element(Tag::Emphasis, vec![Node::text("c")]),
                    ]
                ),
                Node::text(" d"),
            ])])
        );
    }

    #[test]
    fn test_build_merges_adjacent_text() {
        let events = vec![
            Event::Start(Tag::Paragraph),
            Event::Text("||sec".into()),
            Event::Text("ret||".into()),
            Event::End(Tag::Paragraph.to_end()),
        ];
        let tree = Node::from_events(events);
        assert_eq!(
            tree,
            Node::root(vec![paragraph(vec![Node::text("||secret||")])])
        );
    }

    #[test]
    fn test_build_escaped_text_is_merged() {
        // pulldown-cmark emits separate text events around backslash escapes
        let tree = Node::parse(r"a \* b", Options::empty());
        assert_eq!(tree, Node::root(vec![paragraph(vec![Node::text("a * b")])]));
    }

    #[test]
    fn test_build_code_block_is_verbatim() {
        let tree = Node::parse("```rust\nlet x = 1;\n```\n", Options::empty());
        assert_eq!(
            tree,
            Node::root(vec![Node::Verbatim {
                tag: Tag::CodeBlock(CodeBlockKind::Fenced("rust".into())),
                events: vec![Event::Text("let x = 1;\n".into())],
            }])
        );
    }

    #[test]
    fn test_build_image_is_verbatim() {
        let tree = Node::parse("![alt *text*](a.png)", Options::empty());
        let [Node::Element { children, .. }] = tree.children() else {
            panic!("expected single paragraph, got {tree:?}");
        };
        let [Node::Verbatim { tag, events }] = children.as_slice() else {
            panic!("expected verbatim image, got {children:?}");
        };
        assert!(matches!(tag, Tag::Image { .. }));
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_build_inline_code_and_breaks() {
        let tree = Node::parse("`code`\nnext", Options::empty());
        assert_eq!(
            tree,
            Node::root(vec![paragraph(vec![
                Node::InlineCode("code".to_owned()),
                Node::Leaf(Event::SoftBreak),
                Node::text("next"),
            ])])
        );
    }

    #[test]
    fn test_build_ignores_unbalanced_end() {
        let events = vec![
            Event::End(Tag::Paragraph.to_end()),
            Event::Text("text".into()),
        ];
        assert_eq!(
            Node::from_events(events),
            Node::root(vec![Node::text("text")])
        );
    }

    #[test]
    fn test_build_closes_unfinished_elements() {
        let events = vec![Event::Start(Tag::Paragraph), Event::Text("open".into())];
        assert_eq!(
            Node::from_events(events),
            Node::root(vec![paragraph(vec![Node::text("open")])])
        );
    }

    #[test]
    fn test_build_then_render_matches_pulldown_cmark() {
        let markdown = "# Title\n\n- one\n- *two*\n\n> quote\n\n```\ncode\n```\n\n<div>\nraw\n</div>\n";
        let mut expected = String::new();
        pulldown_cmark::html::push_html(&mut expected, pulldown_cmark::Parser::new(markdown));

        assert_eq!(Node::parse(markdown, Options::empty()).to_html(), expected);
    }
}
