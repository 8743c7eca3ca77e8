mod cursor;
mod display;
mod eval;

pub use self::cursor::{Cursor, Positions};

use crate::lexer::{Lexer, Token};
use crate::postfix::to_postfix;

/// Stable handle to a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

/// Either an operand leaf (no children, a digit-string value) or a binary
/// operator application (a symbol value and exactly two children). The parent
/// link is a plain back-reference used only for traversal; the arena owns
/// every node.
#[derive(Debug)]
struct Node {
    value: Token,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

/// A binary operation tree built from an infix arithmetic expression.
///
/// The pipeline is `Lexer` -> `to_postfix` -> an explicit-stack build, after
/// which the tree can be evaluated, printed in infix or postfix form, and
/// walked one position at a time with a [`Cursor`].
#[derive(Debug, Default)]
pub struct OpTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl OpTree {
    /// An empty tree.
    pub fn new() -> OpTree {
        OpTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Builds a tree from an infix expression. An expression with no tokens
    /// yields an empty tree.
    pub fn parse(expr: &str) -> OpTree {
        let mut tree = OpTree::new();
        tree.assign(expr);
        tree
    }

    /// Replaces the whole tree with one built from `expr`. The prior node
    /// graph is released first; cursors into it are stale afterwards.
    pub fn assign(&mut self, expr: &str) {
        self.clear();
        let tokens: Vec<Token> = Lexer::new(expr).collect();
        self.build(to_postfix(tokens));
    }

    /// Releases every node. Harmless on an already empty tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        match self.root {
            Some(root) => self.count_from(root),
            None => 0,
        }
    }

    /// Consumes a postfix token sequence with an explicit node stack: an
    /// operand pushes a leaf, an operator pops its right operand first, then
    /// its left, and pushes the new internal node. The last node left on the
    /// stack becomes the root.
    ///
    /// # Panics
    ///
    /// Panics when an operator finds fewer than two nodes on the stack, which
    /// only a malformed postfix sequence can cause.
    fn build(&mut self, postfix: Vec<Token>) {
        let mut stack: Vec<NodeId> = Vec::new();
        for tok in postfix {
            if tok.is_operator() {
                let right = stack
                    .pop()
                    .expect("operator is missing its right operand");
                let left = stack
                    .pop()
                    .expect("operator is missing its left operand");
                let id = self.alloc(tok);
                self.nodes[id.0].left = Some(left);
                self.nodes[id.0].right = Some(right);
                self.nodes[left.0].parent = Some(id);
                self.nodes[right.0].parent = Some(id);
                stack.push(id);
            } else {
                let id = self.alloc(tok);
                stack.push(id);
            }
        }
        self.root = stack.pop();
    }

    fn alloc(&mut self, value: Token) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
            parent: None,
        });
        id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    fn count_from(&self, id: NodeId) -> usize {
        let node = self.node(id);
        let mut count = 1;
        if let Some(left) = node.left {
            count += self.count_from(left);
        }
        if let Some(right) = node.right {
            count += self.count_from(right);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_a_leaf_for_a_plain_number() {
        let tree = OpTree::parse("42");
        assert!(!tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.to_string(), "42");
    }

    #[test]
    fn it_builds_an_empty_tree_from_an_empty_expression() {
        assert!(OpTree::parse("").is_empty());
        assert!(OpTree::parse("  quux  ").is_empty());
        assert_eq!(OpTree::new().node_count(), 0);
    }

    #[test]
    fn it_counts_operand_and_operator_nodes() {
        // 2, 3, +, 4, *
        assert_eq!(OpTree::parse("(2+3)*4").node_count(), 5);
    }

    #[test]
    fn it_clears_idempotently() {
        let mut tree = OpTree::parse("1+2");
        tree.clear();
        assert!(tree.is_empty());
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn it_leaves_no_residue_on_assign() {
        let mut tree = OpTree::parse("1+2");
        tree.assign("(2+3)*4");
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.eval(), 20.0);
    }

    #[test]
    #[should_panic(expected = "operator is missing its left operand")]
    fn it_panics_when_an_operator_lacks_an_operand() {
        OpTree::parse("2+");
    }

    #[test]
    fn it_can_assign_onto_a_cleared_tree() {
        let mut tree = OpTree::new();
        tree.assign("7");
        assert_eq!(tree.eval(), 7.0);
    }
}
