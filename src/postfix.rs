use crate::lexer::Token;

/// Converts an infix token sequence into postfix (reverse Polish) order with
/// the shunting-yard algorithm.
///
/// Every operator is left-associative, `^` included: a tie in priority pops
/// the stack, so `2 ^ 3 ^ 2` comes out as `2 3 ^ 2 ^`.
///
/// Unbalanced parentheses are not an error here. A `)` without a matching `(`
/// just drains the stack; a leftover `(` is popped into the output at the end
/// and degrades into garbage downstream.
pub fn to_postfix(infix: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(infix.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in infix {
        match tok {
            Token::Num(_) => out.push(tok),
            Token::OpenParen => ops.push(tok),
            Token::CloseParen => {
                // pop down to the matching open paren and discard it
                while let Some(top) = ops.pop() {
                    if top == Token::OpenParen {
                        break;
                    }
                    out.push(top);
                }
            }
            _ => {
                // an open paren on the stack has priority 0 and stops the loop
                while ops
                    .last()
                    .map_or(false, |top| top.priority() >= tok.priority())
                {
                    out.push(ops.pop().unwrap());
                }
                ops.push(tok);
            }
        }
    }

    while let Some(top) = ops.pop() {
        out.push(top);
    }
    out
}
