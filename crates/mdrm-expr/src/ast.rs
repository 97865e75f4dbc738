use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::ExprError;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, ExprError> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Sub => Ok(lhs - rhs),
            BinaryOp::Mul => Ok(lhs * rhs),
            BinaryOp::Div => {
                if rhs == 0.0 {
                    Err(ExprError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed expression tree.
///
/// Rule expressions are parsed once into this tree and evaluated
/// directly; identifier references are bound to numbers by the caller
/// before evaluation, so no text is ever substituted or re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Reference(String),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Distinct element identifiers referenced anywhere in the tree.
    pub fn references(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Number(_) => {}
            Expr::Reference(id) => {
                out.insert(id.as_str());
            }
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_references(out);
                rhs.collect_references(out);
            }
        }
    }

    /// Evaluate the tree against pre-resolved reference bindings.
    pub fn evaluate(&self, bindings: &BTreeMap<String, f64>) -> Result<f64, ExprError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Reference(id) => bindings
                .get(id)
                .copied()
                .ok_or_else(|| ExprError::UnboundReference(id.clone())),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.evaluate(bindings)?;
                let rhs = rhs.evaluate(bindings)?;
                op.apply(lhs, rhs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_bound_references() {
        let expr = Expr::Binary {
            op: BinaryOp::Add,
            lhs: Box::new(Expr::Reference("RCFD2170".to_string())),
            rhs: Box::new(Expr::Number(2.0)),
        };
        let bindings = BTreeMap::from([("RCFD2170".to_string(), 40.0)]);
        assert_eq!(expr.evaluate(&bindings), Ok(42.0));
        assert_eq!(expr.references().into_iter().collect::<Vec<_>>(), vec!["RCFD2170"]);
    }

    #[test]
    fn unbound_reference_is_an_error() {
        let expr = Expr::Reference("RCFD9999".to_string());
        assert_eq!(
            expr.evaluate(&BTreeMap::new()),
            Err(ExprError::UnboundReference("RCFD9999".to_string()))
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), Err(ExprError::DivisionByZero));
    }
}
