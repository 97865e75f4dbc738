use mdrm_expr::CompareOp;
use mdrm_model::RuleKind;

use crate::RuleError;
use crate::rules::Check;

/// Parsed form of a range expression: an inclusive `between` interval or
/// a single operator with a literal threshold. No cross-references.
#[derive(Debug, Clone, PartialEq)]
enum RangeCheck {
    Between { min: f64, max: f64 },
    Threshold { op: CompareOp, value: f64 },
}

fn malformed(expression: &str) -> RuleError {
    RuleError::Malformed {
        kind: RuleKind::Range,
        expression: expression.to_string(),
    }
}

fn parse_range(expression: &str) -> Result<RangeCheck, RuleError> {
    let trimmed = expression.trim();
    let lowered = trimmed.to_lowercase();
    if lowered.starts_with("between") {
        // between <a> and <b>
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 4 || !parts[2].eq_ignore_ascii_case("and") {
            return Err(malformed(expression));
        }
        let min: f64 = parts[1].parse().map_err(|_| malformed(expression))?;
        let max: f64 = parts[3].parse().map_err(|_| malformed(expression))?;
        return Ok(RangeCheck::Between { min, max });
    }

    let (op, rest) = CompareOp::strip_prefix(trimmed).ok_or_else(|| malformed(expression))?;
    let value: f64 = rest.trim().parse().map_err(|_| malformed(expression))?;
    Ok(RangeCheck::Threshold { op, value })
}

/// Evaluate a range rule against the subject value.
pub(crate) fn evaluate(expression: &str, subject: f64) -> Result<Check, RuleError> {
    match parse_range(expression)? {
        RangeCheck::Between { min, max } => {
            if min <= subject && subject <= max {
                Ok(Check::Pass)
            } else {
                Ok(Check::Fail(format!(
                    "value {subject} is not between {min} and {max}"
                )))
            }
        }
        RangeCheck::Threshold { op, value } => {
            if op.apply(subject, value) {
                Ok(Check::Pass)
            } else {
                Ok(Check::Fail(format!(
                    "value {subject} does not satisfy {}",
                    expression.trim()
                )))
            }
        }
    }
}
