use serde::{Deserialize, Serialize};

use crate::MdrmId;

/// Outcome of evaluating one rule against one submitted value.
///
/// Created fresh per validation pass and never mutated afterwards. The
/// message is populated only when the verdict is a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub element: MdrmId,
    pub rule_id: i64,
    pub is_valid: bool,
    pub message: Option<String>,
}

impl Verdict {
    pub fn pass(element: MdrmId, rule_id: i64) -> Self {
        Self {
            element,
            rule_id,
            is_valid: true,
            message: None,
        }
    }

    pub fn fail(element: MdrmId, rule_id: i64, message: impl Into<String>) -> Self {
        Self {
            element,
            rule_id,
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Result of one full validation pass over a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub report_id: i64,
    /// True iff every verdict passed. An empty verdict set is vacuously valid.
    pub is_valid: bool,
    pub verdicts: Vec<Verdict>,
}

impl ValidationOutcome {
    pub fn new(report_id: i64, verdicts: Vec<Verdict>) -> Self {
        let is_valid = verdicts.iter().all(|v| v.is_valid);
        Self {
            report_id,
            is_valid,
            verdicts,
        }
    }

    pub fn failure_count(&self) -> usize {
        self.verdicts.iter().filter(|v| !v.is_valid).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.is_valid)
    }
}
