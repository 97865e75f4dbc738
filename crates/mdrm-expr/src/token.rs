use mdrm_model::MdrmId;

use crate::ExprError;

/// Lexical token of the rule expression language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// An MDRM element identifier appearing as a cross-reference.
    Reference(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Split an expression into tokens.
///
/// Identifiers are consumed as whole words: `RCFD1480` never matches
/// inside `RCFD14801`, because the scanner takes the full alphanumeric
/// run and only then checks it against the identifier format. A word
/// that is not a well-formed identifier is rejected.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() => {
                let mut literal = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        literal.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = literal
                    .parse()
                    .map_err(|_| ExprError::UnexpectedToken(literal.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let mut word = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        word.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if !MdrmId::is_valid(&word) {
                    return Err(ExprError::UnexpectedToken(word));
                }
                tokens.push(Token::Reference(word));
            }
            _ => return Err(ExprError::UnexpectedChar { ch, pos }),
        }
    }

    Ok(tokens)
}
