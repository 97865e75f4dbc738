use std::fmt;

/// Comparison operator relating a subject value to an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,
}

/// Operator spellings in match order. Multi-character operators come
/// before their single-character prefixes so `>=` is never read as `>`,
/// and bare `=` is a synonym for `==`.
const SPELLINGS: &[(&str, CompareOp)] = &[
    (">=", CompareOp::Ge),
    ("<=", CompareOp::Le),
    ("==", CompareOp::Eq),
    ("!=", CompareOp::Ne),
    (">", CompareOp::Gt),
    ("<", CompareOp::Lt),
    ("=", CompareOp::Eq),
];

impl CompareOp {
    /// Peel a leading comparison operator off rule text, returning the
    /// operator and the remainder. A separating space is optional:
    /// `=RCFD2170 + RCFD3210` parses the same as `= RCFD2170 + RCFD3210`.
    pub fn strip_prefix(text: &str) -> Option<(CompareOp, &str)> {
        let trimmed = text.trim_start();
        for (spelling, op) in SPELLINGS {
            if let Some(rest) = trimmed.strip_prefix(spelling) {
                return Some((*op, rest));
            }
        }
        None
    }

    /// Exact floating-point comparison, no epsilon tolerance.
    pub fn apply(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            CompareOp::Gt => lhs > rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::Ge => lhs >= rhs,
            CompareOp::Le => lhs <= rhs,
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
