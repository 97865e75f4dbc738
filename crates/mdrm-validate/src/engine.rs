use std::collections::BTreeMap;

use tracing::debug;

use mdrm_model::{
    MdrmElement, MdrmId, Report, RuleKind, ValidationOutcome, ValidationRule, Verdict,
};

use crate::RuleError;
use crate::coerce::coerce;
use crate::history::ReportHistory;
use crate::resolve::ValueContext;
use crate::rules::relational::Flavor;
use crate::rules::{Check, historical, range, relational};

/// Validate one report's submitted values against a rule library.
///
/// Rules whose target element has no submitted value are skipped, not
/// failed. Every applicable rule yields exactly one verdict, in the order
/// the rules were supplied; any parse, resolution, or coercion problem
/// becomes a failing verdict for that rule alone. The pass is a pure
/// computation: re-running it with the same inputs produces the same
/// outcome, and persistence of verdicts belongs to the caller.
pub fn validate_report<H: ReportHistory + ?Sized>(
    report: &Report,
    values: &BTreeMap<MdrmId, String>,
    rules: &[ValidationRule],
    elements: &BTreeMap<MdrmId, MdrmElement>,
    history: &H,
) -> ValidationOutcome {
    let mut verdicts = Vec::new();

    for rule in rules {
        let Some(raw) = values.get(&rule.element) else {
            debug!(
                rule_id = rule.id,
                element = rule.element.as_str(),
                "rule skipped: target element not submitted"
            );
            continue;
        };

        let verdict = match evaluate_rule(rule, raw, report, values, elements, history) {
            Ok(Check::Pass) => Verdict::pass(rule.element.clone(), rule.id),
            Ok(Check::Fail(message)) => Verdict::fail(rule.element.clone(), rule.id, message),
            Err(err) => Verdict::fail(rule.element.clone(), rule.id, err.to_string()),
        };
        debug!(
            rule_id = rule.id,
            element = rule.element.as_str(),
            kind = rule.kind.as_str(),
            is_valid = verdict.is_valid,
            "rule evaluated"
        );
        verdicts.push(verdict);
    }

    ValidationOutcome::new(report.id, verdicts)
}

fn evaluate_rule<H: ReportHistory + ?Sized>(
    rule: &ValidationRule,
    raw: &str,
    report: &Report,
    values: &BTreeMap<MdrmId, String>,
    elements: &BTreeMap<MdrmId, MdrmElement>,
    history: &H,
) -> Result<Check, RuleError> {
    let element = elements
        .get(&rule.element)
        .ok_or_else(|| RuleError::UnknownElement(rule.element.to_string()))?;

    let subject = coerce(raw, element.data_type)?;
    let subject_num = subject
        .as_number()
        .ok_or_else(|| RuleError::NonNumericSubject {
            value: subject.to_string(),
            data_type: element.data_type,
        })?;

    match rule.kind {
        RuleKind::Range => range::evaluate(&rule.expression, subject_num),
        RuleKind::Comparison => {
            let ctx = ValueContext::new(elements, values, &rule.element, subject_num);
            relational::evaluate(Flavor::Comparison, &rule.expression, subject_num, &ctx)
        }
        RuleKind::Formula => {
            let ctx = ValueContext::new(elements, values, &rule.element, subject_num);
            relational::evaluate(Flavor::Formula, &rule.expression, subject_num, &ctx)
        }
        RuleKind::Historical => {
            historical::evaluate(&rule.expression, subject_num, element, report, history)
        }
    }
}
