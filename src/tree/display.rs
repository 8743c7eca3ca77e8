use std::fmt;
use std::fmt::{Display, Formatter, Write};

use super::{Cursor, NodeId, OpTree};

impl OpTree {
    /// Renders the whole tree into `out`: fully parenthesized infix, or a
    /// space-separated postfix listing when `postfix` is true.
    ///
    /// # Panics
    ///
    /// Panics if the tree is empty.
    pub fn print(&self, out: &mut dyn Write, postfix: bool) -> fmt::Result {
        let root = self.root.expect("cannot print an empty tree");
        self.print_node(root, postfix, out)
    }

    /// Like [`print`](OpTree::print), but renders the subtree under the
    /// cursor; the end sentinel renders the whole tree.
    pub fn print_at(&self, out: &mut dyn Write, postfix: bool, at: Cursor) -> fmt::Result {
        match at.node {
            Some(id) => self.print_node(id, postfix, out),
            None => self.print(out, postfix),
        }
    }

    /// The infix rendering as a string.
    pub fn infix(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        self.print(&mut out, false).unwrap();
        out
    }

    /// The postfix listing as a string, one space after every token.
    pub fn postfix(&self) -> String {
        let mut out = String::new();
        self.print(&mut out, true).unwrap();
        out
    }

    /// Infix mode wraps every operator application in its own parentheses;
    /// this is the exact output shape, not a minimal parenthesization. A leaf
    /// renders as its bare numeral.
    fn print_node(&self, id: NodeId, postfix: bool, out: &mut dyn Write) -> fmt::Result {
        let node = self.node(id);
        if postfix {
            if let Some(left) = node.left {
                self.print_node(left, true, out)?;
            }
            if let Some(right) = node.right {
                self.print_node(right, true, out)?;
            }
            write!(out, "{} ", node.value)
        } else {
            if let Some(left) = node.left {
                out.write_char('(')?;
                self.print_node(left, false, out)?;
            }
            write!(out, "{}", node.value)?;
            if let Some(right) = node.right {
                self.print_node(right, false, out)?;
                out.write_char(')')?;
            }
            Ok(())
        }
    }
}

impl Display for OpTree {
    /// Infix rendering; an empty tree prints nothing.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.print_node(root, false, f),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parenthesizes_every_operation() {
        assert_eq!(OpTree::parse("2+3*4").infix(), "(2+(3*4))");
        assert_eq!(OpTree::parse("(2+3)*4").infix(), "((2+3)*4)");
        assert_eq!(OpTree::parse("5").infix(), "5");
    }

    #[test]
    fn it_lists_postfix_with_a_trailing_space() {
        assert_eq!(OpTree::parse("2+3*4").postfix(), "2 3 4 * + ");
        assert_eq!(OpTree::parse("5").postfix(), "5 ");
    }

    #[test]
    fn it_round_trips_through_the_infix_rendering() {
        const CASES: [&str; 5] = [
            "2 + 3 * 4",
            "(2 + 3) * 4",
            "2 ^ 3 ^ 2",
            "3 * -2",
            "10 / 4 - 6",
        ];
        for c in &CASES {
            let tree = OpTree::parse(c);
            let reparsed = OpTree::parse(&tree.infix());
            assert_eq!(reparsed.eval(), tree.eval());
            // a fully parenthesized rendering is a fixed point
            assert_eq!(reparsed.infix(), tree.infix());
        }
    }

    #[test]
    fn it_renders_a_cursor_fragment() {
        let tree = OpTree::parse("(1+2)*3");
        let mut out = String::new();
        tree.print_at(&mut out, false, tree.begin()).unwrap();
        assert_eq!(out, "1");
    }

    #[test]
    fn it_displays_an_empty_tree_as_nothing() {
        assert_eq!(OpTree::new().to_string(), "");
    }

    #[test]
    #[should_panic(expected = "cannot print an empty tree")]
    fn it_panics_when_printing_an_empty_tree() {
        OpTree::new().infix();
    }
}
