use mdrm_expr::CompareOp;
use mdrm_model::RuleKind;

use crate::RuleError;
use crate::resolve::{ValueContext, resolve_references};
use crate::rules::Check;

/// Comparison and formula rules share the same mechanics: strip the
/// operator, evaluate the right-hand expression over resolved references,
/// compare. Only the failure wording differs: a comparison reports how
/// the operands related, a formula reports the derived value the subject
/// was expected to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flavor {
    Comparison,
    Formula,
}

impl Flavor {
    fn kind(self) -> RuleKind {
        match self {
            Flavor::Comparison => RuleKind::Comparison,
            Flavor::Formula => RuleKind::Formula,
        }
    }
}

pub(crate) fn evaluate(
    flavor: Flavor,
    expression: &str,
    subject: f64,
    ctx: &ValueContext<'_>,
) -> Result<Check, RuleError> {
    let (op, rest) = CompareOp::strip_prefix(expression).ok_or_else(|| RuleError::Malformed {
        kind: flavor.kind(),
        expression: expression.to_string(),
    })?;

    let expr = mdrm_expr::parse(rest)?;
    let bindings = resolve_references(&expr, ctx)?;
    let expected = expr.evaluate(&bindings)?;

    if op.apply(subject, expected) {
        return Ok(Check::Pass);
    }

    let expression = expression.trim();
    let message = match flavor {
        Flavor::Comparison => format!(
            "value {subject} does not satisfy {expression} (evaluated as {subject} {op} {expected})"
        ),
        Flavor::Formula => {
            format!("value {subject} does not satisfy {expression} (expected {op} {expected})")
        }
    };
    Ok(Check::Fail(message))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use mdrm_model::{DataType, MdrmElement, MdrmId};

    use super::*;

    fn id(s: &str) -> MdrmId {
        MdrmId::new(s).unwrap()
    }

    fn numeric_element(code: &str) -> (MdrmId, MdrmElement) {
        (id(code), MdrmElement::new(id(code), code, DataType::Numeric))
    }

    struct Fixture {
        elements: BTreeMap<MdrmId, MdrmElement>,
        values: BTreeMap<MdrmId, String>,
        subject: MdrmId,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                elements: BTreeMap::from([
                    numeric_element("RCFD2170"),
                    numeric_element("RCFD3210"),
                ]),
                values: BTreeMap::from([
                    (id("RCFD2170"), "40".to_string()),
                    (id("RCFD3210"), "60".to_string()),
                ]),
                subject: id("RCFD1480"),
            }
        }

        fn ctx(&self, subject_value: f64) -> ValueContext<'_> {
            ValueContext::new(&self.elements, &self.values, &self.subject, subject_value)
        }
    }

    #[test]
    fn formula_sum_matches() {
        let fixture = Fixture::new();
        let check = evaluate(
            Flavor::Formula,
            "= RCFD2170 + RCFD3210",
            100.0,
            &fixture.ctx(100.0),
        )
        .unwrap();
        assert_eq!(check, Check::Pass);
    }

    #[test]
    fn formula_failure_cites_the_expected_value() {
        let mut fixture = Fixture::new();
        fixture.values.insert(id("RCFD3210"), "59".to_string());
        let check = evaluate(
            Flavor::Formula,
            "= RCFD2170 + RCFD3210",
            100.0,
            &fixture.ctx(100.0),
        )
        .unwrap();
        let Check::Fail(message) = check else {
            panic!("expected failure");
        };
        assert!(message.contains("99"), "message was: {message}");
    }

    #[test]
    fn comparison_failure_shows_both_operands() {
        let fixture = Fixture::new();
        let check = evaluate(Flavor::Comparison, "> RCFD2170", 10.0, &fixture.ctx(10.0)).unwrap();
        let Check::Fail(message) = check else {
            panic!("expected failure");
        };
        assert!(message.contains("10 > 40"), "message was: {message}");
    }

    #[test]
    fn operator_without_space_parses() {
        let fixture = Fixture::new();
        let check = evaluate(
            Flavor::Formula,
            "=RCFD2170+RCFD3210",
            100.0,
            &fixture.ctx(100.0),
        )
        .unwrap();
        assert_eq!(check, Check::Pass);
    }

    #[test]
    fn arithmetic_precedence_in_the_right_hand_side() {
        let fixture = Fixture::new();
        // 40 + 60 * 2 = 160, not 200
        let check = evaluate(
            Flavor::Comparison,
            "== RCFD2170 + RCFD3210 * 2",
            160.0,
            &fixture.ctx(160.0),
        )
        .unwrap();
        assert_eq!(check, Check::Pass);
    }

    #[test]
    fn missing_operator_is_malformed() {
        let fixture = Fixture::new();
        let err = evaluate(
            Flavor::Comparison,
            "RCFD2170 + RCFD3210",
            100.0,
            &fixture.ctx(100.0),
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::Malformed { .. }));
    }

    #[test]
    fn division_by_zero_is_an_error_not_a_panic() {
        let fixture = Fixture::new();
        let err = evaluate(
            Flavor::Comparison,
            "= RCFD2170 / 0",
            100.0,
            &fixture.ctx(100.0),
        )
        .unwrap_err();
        assert_eq!(err, RuleError::Expr(mdrm_expr::ExprError::DivisionByZero));
    }
}
