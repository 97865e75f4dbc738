//! Typed expression language for MDRM validation rules.
//!
//! Rule text like `= RCFD2170 + RCFD3210` is split into a comparison
//! operator and an arithmetic expression. The expression is tokenized and
//! parsed into an [`Expr`] tree; element references are bound to numbers
//! by the caller and the tree is evaluated directly. No identifier text
//! is ever substituted into a string and re-parsed, which removes the
//! prefix-collision hazard (`RCFD1480` inside `RCFD14801`) and the need
//! for a general-purpose evaluator.

pub mod ast;
pub mod compare;
pub mod error;
pub mod parser;
pub mod token;

pub use ast::{BinaryOp, Expr};
pub use compare::CompareOp;
pub use error::ExprError;
pub use parser::parse;
pub use token::{Token, tokenize};
