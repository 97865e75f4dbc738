use mdrm_expr::{BinaryOp, CompareOp};
use mdrm_model::{MdrmElement, Report, RuleKind};

use crate::RuleError;
use crate::coerce::coerce;
use crate::history::ReportHistory;
use crate::rules::Check;

/// Parsed form of `<op> previous_period [<modop> <literal>]`.
#[derive(Debug, Clone, PartialEq)]
struct HistoricalCheck {
    op: CompareOp,
    modifier: Option<(BinaryOp, f64)>,
}

fn malformed(expression: &str) -> RuleError {
    RuleError::Malformed {
        kind: RuleKind::Historical,
        expression: expression.to_string(),
    }
}

fn parse_historical(expression: &str) -> Result<HistoricalCheck, RuleError> {
    let (op, rest) = CompareOp::strip_prefix(expression).ok_or_else(|| malformed(expression))?;
    let rest = rest
        .trim_start()
        .strip_prefix("previous_period")
        .ok_or_else(|| malformed(expression))?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(HistoricalCheck { op, modifier: None });
    }

    let mut chars = rest.chars();
    let mod_op = match chars.next() {
        Some('*') => BinaryOp::Mul,
        Some('/') => BinaryOp::Div,
        Some('+') => BinaryOp::Add,
        Some('-') => BinaryOp::Sub,
        _ => return Err(malformed(expression)),
    };
    let operand: f64 = chars
        .as_str()
        .trim()
        .parse()
        .map_err(|_| malformed(expression))?;
    Ok(HistoricalCheck {
        op,
        modifier: Some((mod_op, operand)),
    })
}

/// Evaluate a historical rule against the prior reporting period.
///
/// A first-time submission cannot fail a historical check: no previous
/// report, or no prior value for the element, is a pass.
pub(crate) fn evaluate<H: ReportHistory + ?Sized>(
    expression: &str,
    subject: f64,
    element: &MdrmElement,
    report: &Report,
    history: &H,
) -> Result<Check, RuleError> {
    let check = parse_historical(expression)?;

    let Some(prior) = history.previous_report(report.series_id, report.institution_id, report.id)
    else {
        return Ok(Check::Pass);
    };
    let Some(raw) = prior.values.get(&element.id) else {
        return Ok(Check::Pass);
    };

    let typed = coerce(raw, element.data_type).map_err(|source| RuleError::InvalidReferenceValue {
        id: element.id.to_string(),
        source,
    })?;
    let previous = typed
        .as_number()
        .ok_or_else(|| RuleError::NonNumericReference {
            id: element.id.to_string(),
            data_type: element.data_type,
        })?;

    let threshold = match check.modifier {
        Some((mod_op, operand)) => mod_op.apply(previous, operand)?,
        None => previous,
    };

    if check.op.apply(subject, threshold) {
        Ok(Check::Pass)
    } else {
        Ok(Check::Fail(format!(
            "value {subject} does not satisfy historical comparison {} (compared to {threshold})",
            expression.trim()
        )))
    }
}
