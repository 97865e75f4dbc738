//! Robustness checks for the expression tokenizer and parser.
//!
//! Rule expressions are operator-authored free text, so the front end has
//! to reject garbage with an error rather than panic.

use std::collections::BTreeMap;

use mdrm_expr::{parse, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokenize_never_panics(input in ".*") {
        let _ = tokenize(&input);
    }

    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = parse(&input);
    }

    #[test]
    fn literal_arithmetic_round_trips(a in 0.0..1_000_000.0f64, b in 1.0..1_000.0f64) {
        let expr = parse(&format!("{a} + {b} * 2")).unwrap();
        let value = expr.evaluate(&BTreeMap::new()).unwrap();
        prop_assert_eq!(value, a + b * 2.0);
    }
}
