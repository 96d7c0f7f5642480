//! Preorder tree visitor with splice-aware continuation.

use crate::{Node, NodeType};

/// What the visitor does after a callback returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Visit the node's children, then its next sibling.
    Continue,
    /// Skip the node's children and move to its next sibling.
    Skip,
    /// Resume at the given sibling index of the same parent.
    ///
    /// Callbacks that splice return the index just past the inserted nodes,
    /// so those nodes are not visited again and no sibling is skipped.
    /// Returning an index at or before the current one visits nodes again.
    SkipTo(usize),
    /// Stop the traversal.
    Exit,
}

/// Visit every descendant of `root` whose type is `test`, in preorder.
///
/// The callback receives the node's index and its parent. At call time
/// `parent.children()[index]` is the matching node, which the callback may
/// replace through [`Node::splice`]. The root itself has no parent and is
/// never passed to the callback.
pub fn visit<F>(root: &mut Node, test: NodeType, mut visitor: F)
where
    F: FnMut(usize, &mut Node) -> Action,
{
    walk(root, test, &mut visitor);
}

/// Walk the children of `parent`. Returns `false` when traversal must stop.
fn walk<F>(parent: &mut Node, test: NodeType, visitor: &mut F) -> bool
where
    F: FnMut(usize, &mut Node) -> Action,
{
    let mut index = 0;
    while let Some(child) = parent.children().get(index) {
        if child.node_type() == test {
            match visitor(index, parent) {
                Action::Continue => {}
                Action::Skip => {
                    index += 1;
                    continue;
                }
                Action::SkipTo(next) => {
                    index = next;
                    continue;
                }
                Action::Exit => return false,
            }
        }

        if let Some(child) = parent.children_mut().and_then(|c| c.get_mut(index))
            && !walk(child, test, visitor)
        {
            return false;
        }
        index += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::Tag;

    fn paragraph(children: Vec<Node>) -> Node {
        Node::element(Tag::Paragraph, children)
    }

    fn sample_tree() -> Node {
        Node::root(vec![
            paragraph(vec![
                Node::text("a"),
                Node::element(Tag::Emphasis, vec![Node::text("b")]),
                Node::text("c"),
            ]),
            paragraph(vec![Node::text("d")]),
        ])
    }

    #[test]
    fn test_visit_preorder() {
        let mut tree = sample_tree();
        let mut seen = Vec::new();

        visit(&mut tree, NodeType::Text, |index, parent| {
            seen.push(parent.children()[index].value().unwrap_or_default().to_owned());
            Action::Continue
        });

        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_visit_passes_index_and_parent() {
        let mut tree = sample_tree();
        let mut seen = Vec::new();

        visit(&mut tree, NodeType::Text, |index, parent| {
            seen.push((index, parent.children().len()));
            Action::Continue
        });

        assert_eq!(seen, vec![(0, 3), (0, 1), (2, 3), (0, 1)]);
    }

    #[test]
    fn test_visit_filters_by_type() {
        let mut tree = sample_tree();
        let mut count = 0;

        visit(&mut tree, NodeType::Element, |_, _| {
            count += 1;
            Action::Continue
        });

        assert_eq!(count, 3);
    }

    #[test]
    fn test_visit_skip_does_not_descend() {
        let mut tree = sample_tree();
        let mut texts = 0;
        let mut elements = 0;

        visit(&mut tree, NodeType::Element, |_, _| {
            elements += 1;
            Action::Skip
        });
        visit(&mut tree, NodeType::Text, |_, _| {
            texts += 1;
            Action::Continue
        });

        assert_eq!(elements, 2);
        assert_eq!(texts, 4);
    }

    #[test]
    fn test_visit_skip_to_after_splice() {
        let mut tree = sample_tree();
        let mut seen = Vec::new();

        visit(&mut tree, NodeType::Text, |index, parent| {
            let value = parent.children()[index].value().unwrap_or_default().to_owned();
            seen.push(value.clone());
            if value == "a" {
                let replacements = vec![Node::text("a1"), Node::text("a2")];
                let inserted = parent.splice(index, replacements).unwrap_or(0);
                return Action::SkipTo(index + inserted);
            }
            Action::Continue
        });

        // Inserted nodes are not revisited; the following siblings still are
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
        assert_eq!(
            tree.children()[0].children(),
            &[
                Node::text("a1"),
                Node::text("a2"),
                Node::element(Tag::Emphasis, vec![Node::text("b")]),
                Node::text("c"),
            ]
        );
    }

    #[test]
    fn test_visit_removal_does_not_skip_next_sibling() {
        let mut tree = Node::root(vec![paragraph(vec![
            Node::text("drop"),
            Node::text("keep"),
        ])]);
        let mut seen = Vec::new();

        visit(&mut tree, NodeType::Text, |index, parent| {
            let value = parent.children()[index].value().unwrap_or_default().to_owned();
            seen.push(value.clone());
            if value == "drop" {
                parent.splice(index, vec![]);
                return Action::SkipTo(index);
            }
            Action::Continue
        });

        assert_eq!(seen, vec!["drop", "keep"]);
        assert_eq!(tree.children()[0].children(), &[Node::text("keep")]);
    }

    #[test]
    fn test_visit_exit_stops_traversal() {
        let mut tree = sample_tree();
        let mut seen = 0;

        visit(&mut tree, NodeType::Text, |_, _| {
            seen += 1;
            if seen == 2 {
                Action::Exit
            } else {
                Action::Continue
            }
        });

        assert_eq!(seen, 2);
    }

    #[test]
    fn test_visit_never_offers_root() {
        let mut tree = Node::root(vec![]);
        let mut called = false;

        visit(&mut tree, NodeType::Root, |_, _| {
            called = true;
            Action::Continue
        });

        assert!(!called);
    }
}
