use std::iter::FusedIterator;

use super::{NodeId, OpTree};

/// A position in an [`OpTree`] walk, or the end sentinel.
///
/// A cursor is a plain arena index: it borrows nothing at the type level and
/// becomes stale once the tree it came from is cleared or reassigned. Using a
/// stale cursor at worst panics on an out-of-range index; keeping cursors
/// valid across mutation is the caller's responsibility.
///
/// Two cursors are equal when they sit on the same node; every end sentinel
/// compares equal to every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(super) node: Option<NodeId>,
}

impl Cursor {
    /// True when this cursor is the end sentinel.
    pub fn is_end(self) -> bool {
        self.node.is_none()
    }
}

impl OpTree {
    /// The first position of the walk: the leftmost node under the root. When
    /// the root has no left child the walk starts at the root itself, unless
    /// the root has a right child, in which case it starts at the leftmost
    /// descendant of the right subtree. On an empty tree this is already
    /// [`end`](OpTree::end).
    pub fn begin(&self) -> Cursor {
        let root = match self.root {
            Some(root) => root,
            None => return self.end(),
        };
        let first = if self.node(root).left.is_some() {
            self.leftmost(root)
        } else if let Some(right) = self.node(root).right {
            self.leftmost(right)
        } else {
            root
        };
        Cursor { node: Some(first) }
    }

    /// The end-of-walk sentinel.
    pub fn end(&self) -> Cursor {
        Cursor { node: None }
    }

    /// The successor of `at`, computed from the tree shape alone:
    ///
    /// - a node with no parent ends the walk;
    /// - a left child hands over to the leftmost node of its parent's right
    ///   subtree (or to the parent itself when there is no right subtree);
    /// - a right child climbs back to its parent.
    ///
    /// Every node is reached exactly once between [`begin`](OpTree::begin)
    /// and [`end`](OpTree::end); an operator comes up only after both of its
    /// children, so the partial value at each position is already resolvable.
    ///
    /// # Panics
    ///
    /// Panics when `at` is already the end sentinel.
    pub fn advance(&self, at: Cursor) -> Cursor {
        let id = at.node.expect("cannot advance a cursor already at the end");
        let parent = match self.node(id).parent {
            Some(parent) => parent,
            None => return self.end(),
        };
        let next = if self.node(parent).left == Some(id) {
            match self.node(parent).right {
                Some(right) => self.leftmost(right),
                None => parent,
            }
        } else {
            parent
        };
        Cursor { node: Some(next) }
    }

    /// Iterator over every position from [`begin`](OpTree::begin) until the
    /// end sentinel.
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            tree: self,
            at: self.begin(),
        }
    }
}

/// Yields each cursor position of a tree's walk exactly once.
pub struct Positions<'a> {
    tree: &'a OpTree,
    at: Cursor,
}

impl<'a> Iterator for Positions<'a> {
    type Item = Cursor;

    fn next(&mut self) -> Option<Cursor> {
        if self.at.is_end() {
            return None;
        }
        let current = self.at;
        self.at = self.tree.advance(current);
        Some(current)
    }
}

impl<'a> FusedIterator for Positions<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(tree: &OpTree) -> Vec<String> {
        tree.positions()
            .map(|at| {
                let mut out = String::new();
                tree.print_at(&mut out, false, at).unwrap();
                out
            })
            .collect()
    }

    #[test]
    fn it_starts_at_the_leftmost_node() {
        let tree = OpTree::parse("(1+2)*3");
        let mut out = String::new();
        tree.print_at(&mut out, false, tree.begin()).unwrap();
        assert_eq!(out, "1");
    }

    #[test]
    fn it_visits_every_node_exactly_once() {
        let tree = OpTree::parse("(2+3)*4");
        assert_eq!(
            fragments(&tree),
            vec!["2", "3", "(2+3)", "4", "((2+3)*4)"]
        );
        assert_eq!(tree.positions().count(), tree.node_count());
    }

    #[test]
    fn it_resolves_both_children_before_their_operator() {
        let tree = OpTree::parse("(2+3)*4");
        let values: Vec<f64> = tree.positions().map(|at| tree.eval_at(at)).collect();
        assert_eq!(values, vec![2.0, 3.0, 5.0, 4.0, 20.0]);
    }

    #[test]
    fn it_walks_a_single_leaf() {
        let tree = OpTree::parse("7");
        assert_eq!(fragments(&tree), vec!["7"]);
        let after = tree.advance(tree.begin());
        assert!(after.is_end());
    }

    #[test]
    fn it_is_end_on_an_empty_tree() {
        let tree = OpTree::new();
        assert!(tree.begin().is_end());
        assert_eq!(tree.positions().count(), 0);
    }

    #[test]
    fn it_compares_cursors_by_node() {
        let tree = OpTree::parse("1+2");
        assert_eq!(tree.end(), tree.end());
        assert_ne!(tree.begin(), tree.end());
        assert_eq!(tree.begin(), tree.begin());
    }

    #[test]
    #[should_panic(expected = "cannot advance a cursor already at the end")]
    fn it_panics_when_advancing_the_end_cursor() {
        let tree = OpTree::parse("1+2");
        tree.advance(tree.end());
    }
}
