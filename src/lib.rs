extern crate num_traits;

pub mod lexer;
pub mod postfix;
pub mod tree;
