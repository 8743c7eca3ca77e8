mod token;

use std::iter::FusedIterator;

pub use self::token::*;

/// A lexer reads an arithmetic expression and yields its tokens one at a time.
///
/// The lexer never fails: bytes that are neither digits nor known symbols are
/// dropped, and a numeral keeps accumulating across them, so `"12 34"` lexes
/// as the single operand `1234`.
///
/// A `+` or `-` in operand position (at the start of the expression, or right
/// after any symbol other than `)`) is turned into a binary operation on an
/// injected `0` operand: `"-5"` lexes as `0 - 5`.
pub struct Lexer<'a> {
    expr: &'a [u8],
    index: usize,
    /// True initially and after every emitted symbol token.
    was_operator: bool,
    /// The most recently emitted symbol token.
    last_operator: Option<Token>,
    /// Symbol held back while the injected zero goes out first.
    pending: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from an expression.
    pub fn new(expr: &str) -> Lexer {
        Lexer {
            expr: expr.as_bytes(),
            index: 0,
            was_operator: true,
            last_operator: None,
            pending: None,
        }
    }
}

// Once the input is exhausted the lexer keeps returning none.
impl<'a> FusedIterator for Lexer<'a> {}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(symbol) = self.pending.take() {
            return Some(symbol);
        }

        let mut numeral = String::new();
        while self.index < self.expr.len() {
            let c = self.expr[self.index] as char;

            if c.is_ascii_digit() {
                numeral.push(c);
                self.index += 1;
                continue;
            }

            if let Some(symbol) = Token::from_single_char(c) {
                if !numeral.is_empty() {
                    // flush the numeral; the symbol is picked up on the next
                    // call since the index was not advanced
                    self.was_operator = false;
                    return Some(Token::Num(numeral));
                }

                self.index += 1;

                let inject_zero = matches!(symbol, Token::Plus | Token::Minus)
                    && self.was_operator
                    && self.last_operator != Some(Token::CloseParen);

                self.was_operator = true;
                self.last_operator = Some(symbol.clone());

                if inject_zero {
                    self.pending = Some(symbol);
                    return Some(Token::Num("0".to_string()));
                }
                return Some(symbol);
            }

            // whitespace and anything else unrecognized is dropped
            self.index += 1;
        }

        if numeral.is_empty() {
            None
        } else {
            self.was_operator = false;
            Some(Token::Num(numeral))
        }
    }
}
