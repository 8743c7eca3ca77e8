use num_traits::Pow;

use super::{Cursor, NodeId, OpTree};
use crate::lexer::Token;

impl OpTree {
    /// Evaluates the whole tree.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn eval(&self) -> f64 {
        let root = self.root.expect("cannot evaluate an empty tree");
        self.eval_node(root)
    }

    /// Evaluates the subtree under the cursor, or the whole tree when the
    /// cursor is the end sentinel.
    pub fn eval_at(&self, at: Cursor) -> f64 {
        match at.node {
            Some(id) => self.eval_node(id),
            None => self.eval(),
        }
    }

    /// Post-order recursion: both children resolve to `f64` before the
    /// operator combines them. A leaf parses its digit string as an integer
    /// and widens it.
    fn eval_node(&self, id: NodeId) -> f64 {
        let node = self.node(id);
        match &node.value {
            Token::Num(digits) => {
                let n: i64 = digits
                    .parse()
                    .expect("operand does not fit in an integer");
                n as f64
            }
            op => {
                let left = node.left.expect("operator node is missing its left child");
                let right = node.right.expect("operator node is missing its right child");
                let left = self.eval_node(left);
                let right = self.eval_node(right);
                match op {
                    Token::Plus => left + right,
                    Token::Minus => left - right,
                    Token::Times => left * right,
                    // IEEE division: x/0 is an infinity or a NaN, not an error
                    Token::Slash => left / right,
                    Token::Hat => left.pow(right),
                    // only reachable when unbalanced parentheses degraded into
                    // tree nodes
                    _ => panic!("grouping symbol in expression tree"),
                }
            }
        }
    }
}
