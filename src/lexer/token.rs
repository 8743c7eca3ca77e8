use std::fmt;
use std::fmt::{Display, Formatter};

/// Tokens are either a run of decimal digits or a single-character
/// operator/grouping symbol. Two tokens are equal when their text is equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Num(String),
    Plus,
    Minus,
    Times,
    Slash,
    Hat,
    OpenParen,
    CloseParen,
}

impl Token {
    pub fn from_single_char(c: char) -> Option<Token> {
        Some(match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Times,
            '/' => Token::Slash,
            '^' => Token::Hat,
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            _ => return None,
        })
    }

    /// The binding priority used by the postfix conversion. Higher binds
    /// tighter. `None` for operands, which never enter the operator stack.
    pub fn priority(&self) -> Option<u8> {
        Some(match self {
            Token::Num(_) => return None,
            Token::OpenParen => 0,
            Token::CloseParen => 1,
            Token::Plus | Token::Minus => 2,
            Token::Times | Token::Slash => 3,
            Token::Hat => 4,
        })
    }

    /// True for every symbol token, including the grouping parentheses.
    pub fn is_operator(&self) -> bool {
        self.priority().is_some()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Token::Num(digits) => digits,
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Times => "*",
            Token::Slash => "/",
            Token::Hat => "^",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
        })
    }
}
