use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("unexpected character {ch:?} at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected token {0:?} in expression")]
    UnexpectedToken(String),
    #[error("expression ended unexpectedly")]
    UnexpectedEnd,
    #[error("trailing input after expression: {0:?}")]
    TrailingInput(String),
    #[error("empty expression")]
    Empty,
    #[error("reference {0} has no bound value")]
    UnboundReference(String),
    #[error("division by zero")]
    DivisionByZero,
}
