//! Domain types for the MDRM regulatory reporting engine.
//!
//! Everything here is an immutable value snapshot for the duration of one
//! validation pass: elements and rules are read-only configuration,
//! reports and verdicts are plain data handed across the storage boundary.

pub mod element;
pub mod error;
pub mod ids;
pub mod report;
pub mod rule;
pub mod verdict;

pub use element::{DataType, MdrmElement};
pub use error::{ModelError, Result};
pub use ids::MdrmId;
pub use report::Report;
pub use rule::{RuleKind, RuleSeverity, ValidationRule};
pub use verdict::{ValidationOutcome, Verdict};
