use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{MdrmId, ModelError};

/// Evaluation strategy of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Bounded range or literal threshold, e.g. `>= 0` or `between 10 and 20`.
    Range,
    /// Comparison against other submitted elements, e.g. `<= RCFD2170`.
    Comparison,
    /// Algebraic derivation from other elements, e.g. `= RCFD2170 + RCFD3210`.
    Formula,
    /// Comparison against the prior reporting period, e.g. `< previous_period * 1.1`.
    Historical,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Range => "range",
            RuleKind::Comparison => "comparison",
            RuleKind::Formula => "formula",
            RuleKind::Historical => "historical",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "range" => Ok(RuleKind::Range),
            "comparison" => Ok(RuleKind::Comparison),
            "formula" => Ok(RuleKind::Formula),
            "historical" => Ok(RuleKind::Historical),
            _ => Err(ModelError::UnknownRuleKind(s.to_string())),
        }
    }
}

/// Severity recorded on a rule by its author.
///
/// Stored configuration only: the aggregate validity computation treats a
/// failing warning exactly like a failing error. Both gate acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Warning,
    Error,
}

impl RuleSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSeverity::Warning => "warning",
            RuleSeverity::Error => "error",
        }
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSeverity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warning" => Ok(RuleSeverity::Warning),
            "error" => Ok(RuleSeverity::Error),
            _ => Err(ModelError::UnknownSeverity(s.to_string())),
        }
    }
}

/// A declarative check attached to one target element.
///
/// Long-lived configuration authored outside the engine; the engine only
/// reads rules. `error_message` is the operator-authored template carried
/// for the storage layer; the evaluators generate their own diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub id: i64,
    pub element: MdrmId,
    pub kind: RuleKind,
    pub expression: String,
    pub severity: RuleSeverity,
    pub error_message: Option<String>,
}

impl ValidationRule {
    pub fn new(id: i64, element: MdrmId, kind: RuleKind, expression: impl Into<String>) -> Self {
        Self {
            id,
            element,
            kind,
            expression: expression.into(),
            severity: RuleSeverity::Error,
            error_message: None,
        }
    }

    pub fn with_severity(mut self, severity: RuleSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}
