//! Depth-first traversal over tree-sitter syntax trees

use tree_sitter::{Node, TreeCursor};

/// Lazy pre-order walk over a node and all of its descendants.
///
/// The starting node is yielded first; siblings come out in source order.
/// Anonymous tokens are yielded too, filtering is left to the caller.
/// A pruning predicate may stop the walk from descending below matching
/// nodes (the matching node itself is still yielded). The starting node is
/// never pruned.
pub struct TreeWalk<'tree> {
    cursor: TreeCursor<'tree>,
    depth: usize,
    done: bool,
    prune: Option<fn(&Node<'tree>) -> bool>,
}

impl<'tree> TreeWalk<'tree> {
    pub fn new(node: Node<'tree>) -> Self {
        Self {
            cursor: node.walk(),
            depth: 0,
            done: false,
            prune: None,
        }
    }

    /// Walk that does not descend below nodes matching `prune`
    pub fn pruned(node: Node<'tree>, prune: fn(&Node<'tree>) -> bool) -> Self {
        Self {
            prune: Some(prune),
            ..Self::new(node)
        }
    }

    fn advance(&mut self, current: &Node<'tree>) {
        let descend = self.depth == 0 || !self.prune.map_or(false, |prune| prune(current));
        if descend && self.cursor.goto_first_child() {
            self.depth += 1;
            return;
        }

        loop {
            if self.depth == 0 {
                self.done = true;
                return;
            }
            if self.cursor.goto_next_sibling() {
                return;
            }
            self.cursor.goto_parent();
            self.depth -= 1;
        }
    }
}

impl<'tree> Iterator for TreeWalk<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.cursor.node();
        self.advance(&node);
        Some(node)
    }
}

/// Named nodes of `kind` anywhere below (and including) `node`
pub fn named_of_kind<'tree>(
    node: Node<'tree>,
    kind: &'static str,
) -> impl Iterator<Item = Node<'tree>> {
    TreeWalk::new(node).filter(move |n| n.is_named() && n.kind() == kind)
}

/// Whether a node opens a new function or class scope
pub fn is_nested_scope(node: &Node<'_>) -> bool {
    matches!(node.kind(), "function_definition" | "class_definition")
}

/// Named nodes of `kind` inside `node`, not looking into nested definitions
pub fn scoped_of_kind<'tree>(
    node: Node<'tree>,
    kind: &'static str,
) -> impl Iterator<Item = Node<'tree>> {
    TreeWalk::pruned(node, is_nested_scope).filter(move |n| n.is_named() && n.kind() == kind)
}
