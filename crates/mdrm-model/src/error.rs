use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid MDRM identifier: {0:?} (expected 4 uppercase letters followed by 4 digits)")]
    InvalidMdrmId(String),
    #[error("unknown data type: {0}")]
    UnknownDataType(String),
    #[error("unknown rule kind: {0}")]
    UnknownRuleKind(String),
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
