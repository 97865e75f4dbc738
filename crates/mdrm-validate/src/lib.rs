//! Validation rule engine for MDRM report submissions.
//!
//! Given a report's submitted values, the rule library for the elements
//! involved, and the element metadata, [`validate_report`] decides for
//! each applicable rule whether the data satisfies it and assembles one
//! [`mdrm_model::Verdict`] per rule plus the aggregate validity.
//!
//! Four rule kinds are supported:
//!
//! - **range**: `>= 0`, `between 10 and 20`
//! - **comparison**: `<= RCFD2170 + RCFD3210`
//! - **formula**: `= RCFD2170 + RCFD3210`
//! - **historical**: `< previous_period * 1.1`
//!
//! Failures are always local to one rule: a malformed expression, an
//! unknown reference, or an unparseable value produces a failing verdict
//! with a diagnostic message and the remaining rules still run. Storage
//! stays outside the engine; the only read it needs beyond its inputs is
//! the [`ReportHistory`] lookup for the prior reporting period.

pub mod coerce;
pub mod engine;
pub mod error;
pub mod history;
pub mod resolve;
mod rules;

pub use coerce::{CoercionError, TypedValue, coerce};
pub use engine::validate_report;
pub use error::RuleError;
pub use history::{InMemoryHistory, PriorReport, ReportHistory};
pub use resolve::{ValueContext, resolve_references};
