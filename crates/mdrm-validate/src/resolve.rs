use std::collections::BTreeMap;

use mdrm_expr::Expr;
use mdrm_model::{MdrmElement, MdrmId};

use crate::RuleError;
use crate::coerce::coerce;

/// Read-only view of one report's data for reference resolution.
///
/// The rule's own target element is carried separately as the subject: a
/// self-reference binds to the caller-supplied subject value rather than
/// going through the submission map.
pub struct ValueContext<'a> {
    elements: &'a BTreeMap<MdrmId, MdrmElement>,
    values: &'a BTreeMap<MdrmId, String>,
    subject_id: &'a MdrmId,
    subject_value: f64,
}

impl<'a> ValueContext<'a> {
    pub fn new(
        elements: &'a BTreeMap<MdrmId, MdrmElement>,
        values: &'a BTreeMap<MdrmId, String>,
        subject_id: &'a MdrmId,
        subject_value: f64,
    ) -> Self {
        Self {
            elements,
            values,
            subject_id,
            subject_value,
        }
    }
}

/// Bind every element reference in the expression to a number.
///
/// Each distinct identifier is checked against the element metadata, the
/// submitted values, and the coercion layer in turn; the first failure is
/// reported with the offending identifier.
pub fn resolve_references(
    expr: &Expr,
    ctx: &ValueContext<'_>,
) -> Result<BTreeMap<String, f64>, RuleError> {
    let mut bindings = BTreeMap::new();
    for reference in expr.references() {
        if reference == ctx.subject_id.as_str() {
            bindings.insert(reference.to_string(), ctx.subject_value);
            continue;
        }
        // The tokenizer only emits identifier-shaped references.
        let id = MdrmId::new(reference)
            .map_err(|_| RuleError::UnknownElement(reference.to_string()))?;
        let element = ctx
            .elements
            .get(&id)
            .ok_or_else(|| RuleError::UnknownElement(reference.to_string()))?;
        let raw = ctx
            .values
            .get(&id)
            .ok_or_else(|| RuleError::MissingSubmission(reference.to_string()))?;
        let typed =
            coerce(raw, element.data_type).map_err(|source| RuleError::InvalidReferenceValue {
                id: reference.to_string(),
                source,
            })?;
        let number = typed.as_number().ok_or_else(|| RuleError::NonNumericReference {
            id: reference.to_string(),
            data_type: element.data_type,
        })?;
        bindings.insert(reference.to_string(), number);
    }
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use mdrm_model::DataType;

    use super::*;

    fn id(s: &str) -> MdrmId {
        MdrmId::new(s).unwrap()
    }

    fn context() -> (BTreeMap<MdrmId, MdrmElement>, BTreeMap<MdrmId, String>) {
        let elements = BTreeMap::from([
            (
                id("RCFD2170"),
                MdrmElement::new(id("RCFD2170"), "Total assets", DataType::Numeric),
            ),
            (
                id("RCFD9999"),
                MdrmElement::new(id("RCFD9999"), "Remarks", DataType::Text),
            ),
        ]);
        let values = BTreeMap::from([
            (id("RCFD2170"), "40".to_string()),
            (id("RCFD9999"), "see attachment".to_string()),
        ]);
        (elements, values)
    }

    #[test]
    fn binds_submitted_references() {
        let (elements, values) = context();
        let subject = id("RCFD1480");
        let ctx = ValueContext::new(&elements, &values, &subject, 100.0);
        let expr = mdrm_expr::parse("RCFD2170 + 2").unwrap();
        let bindings = resolve_references(&expr, &ctx).unwrap();
        assert_eq!(bindings.get("RCFD2170"), Some(&40.0));
    }

    #[test]
    fn self_reference_binds_to_subject() {
        let (elements, values) = context();
        let subject = id("RCFD1480");
        let ctx = ValueContext::new(&elements, &values, &subject, 100.0);
        let expr = mdrm_expr::parse("RCFD1480 - RCFD2170").unwrap();
        let bindings = resolve_references(&expr, &ctx).unwrap();
        assert_eq!(bindings.get("RCFD1480"), Some(&100.0));
    }

    #[test]
    fn unknown_element_is_reported() {
        let (elements, values) = context();
        let subject = id("RCFD1480");
        let ctx = ValueContext::new(&elements, &values, &subject, 100.0);
        let expr = mdrm_expr::parse("RCON3210").unwrap();
        assert_eq!(
            resolve_references(&expr, &ctx),
            Err(RuleError::UnknownElement("RCON3210".to_string()))
        );
    }

    #[test]
    fn missing_submission_is_reported() {
        let (mut elements, values) = context();
        elements.insert(
            id("RCON3210"),
            MdrmElement::new(id("RCON3210"), "Equity", DataType::Numeric),
        );
        let subject = id("RCFD1480");
        let ctx = ValueContext::new(&elements, &values, &subject, 100.0);
        let expr = mdrm_expr::parse("RCON3210").unwrap();
        assert_eq!(
            resolve_references(&expr, &ctx),
            Err(RuleError::MissingSubmission("RCON3210".to_string()))
        );
    }

    #[test]
    fn text_reference_has_no_numeric_form() {
        let (elements, values) = context();
        let subject = id("RCFD1480");
        let ctx = ValueContext::new(&elements, &values, &subject, 100.0);
        let expr = mdrm_expr::parse("RCFD9999").unwrap();
        assert_eq!(
            resolve_references(&expr, &ctx),
            Err(RuleError::NonNumericReference {
                id: "RCFD9999".to_string(),
                data_type: DataType::Text,
            })
        );
    }
}
