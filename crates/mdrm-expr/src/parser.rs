use crate::ast::{BinaryOp, Expr};
use crate::token::{Token, tokenize};
use crate::ExprError;

/// Parse an arithmetic rule expression into a typed tree.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := NUMBER | REFERENCE | '-' factor | '(' expression ')'
/// ```
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if let Some(token) = parser.peek() {
        return Err(ExprError::TrailingInput(format!("{token:?}")));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.term()?;
        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinaryOp::Add),
            Some(Token::Minus) => Some(BinaryOp::Sub),
            _ => None,
        } {
            self.advance();
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.factor()?;
        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinaryOp::Mul),
            Some(Token::Slash) => Some(BinaryOp::Div),
            _ => None,
        } {
            self.advance();
            let rhs = self.factor()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, ExprError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Reference(id)) => Ok(Expr::Reference(id)),
            Some(Token::Minus) => {
                let inner = self.factor()?;
                Ok(Expr::Binary {
                    op: BinaryOp::Sub,
                    lhs: Box::new(Expr::Number(0.0)),
                    rhs: Box::new(inner),
                })
            }
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(token) => Err(ExprError::UnexpectedToken(format!("{token:?}"))),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some(token) => Err(ExprError::UnexpectedToken(format!("{token:?}"))),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}
