use thiserror::Error;

use mdrm_expr::ExprError;
use mdrm_model::{DataType, RuleKind};

use crate::coerce::CoercionError;

/// Failure local to one rule's evaluation.
///
/// Every variant becomes a failing verdict with this error's display text
/// as the message; none of them aborts the validation pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    #[error("element {0} referenced in expression has no metadata")]
    UnknownElement(String),
    #[error("element {0} has no submitted value in this report")]
    MissingSubmission(String),
    #[error("invalid value for referenced element {id}: {source}")]
    InvalidReferenceValue {
        id: String,
        #[source]
        source: CoercionError,
    },
    #[error("referenced element {id} is {data_type} and has no numeric form")]
    NonNumericReference { id: String, data_type: DataType },
    #[error("value {value:?} is {data_type} and has no numeric form")]
    NonNumericSubject { value: String, data_type: DataType },
    #[error("malformed {kind} expression: {expression:?}")]
    Malformed { kind: RuleKind, expression: String },
    #[error(transparent)]
    Expr(#[from] ExprError),
}
