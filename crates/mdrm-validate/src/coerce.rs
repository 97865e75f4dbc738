use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use mdrm_model::DataType;

/// Raw text did not match the element's declared data type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid value format for {expected}: {raw:?}")]
pub struct CoercionError {
    pub raw: String,
    pub expected: DataType,
}

/// A submitted value after conversion to its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Numeric(f64),
    Integer(i64),
    Date(NaiveDate),
    Text(String),
}

/// Convert a raw textual data value according to the declared type.
///
/// Dates use the fixed `YYYY-MM-DD` layout; text always succeeds.
pub fn coerce(raw: &str, declared: DataType) -> Result<TypedValue, CoercionError> {
    let error = || CoercionError {
        raw: raw.to_string(),
        expected: declared,
    };
    let trimmed = raw.trim();
    match declared {
        DataType::Numeric => trimmed
            .parse::<f64>()
            .map(TypedValue::Numeric)
            .map_err(|_| error()),
        DataType::Integer => trimmed
            .parse::<i64>()
            .map(TypedValue::Integer)
            .map_err(|_| error()),
        DataType::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(TypedValue::Date)
            .map_err(|_| error()),
        DataType::Text => Ok(TypedValue::Text(raw.to_string())),
    }
}

impl TypedValue {
    /// Uniform floating-point view used by every rule comparison.
    ///
    /// Integers widen, dates map to days since the Unix epoch so ordering
    /// comparisons stay meaningful, and text has no numeric form.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Numeric(value) => Some(*value),
            TypedValue::Integer(value) => Some(*value as f64),
            TypedValue::Date(date) => {
                // NaiveDate::default() is 1970-01-01.
                Some(date.signed_duration_since(NaiveDate::default()).num_days() as f64)
            }
            TypedValue::Text(_) => None,
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            TypedValue::Numeric(_) => DataType::Numeric,
            TypedValue::Integer(_) => DataType::Integer,
            TypedValue::Date(_) => DataType::Date,
            TypedValue::Text(_) => DataType::Text,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Numeric(value) => write!(f, "{value}"),
            TypedValue::Integer(value) => write!(f, "{value}"),
            TypedValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            TypedValue::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercion() {
        assert_eq!(coerce("3.25", DataType::Numeric), Ok(TypedValue::Numeric(3.25)));
        assert_eq!(coerce(" -7 ", DataType::Numeric), Ok(TypedValue::Numeric(-7.0)));
        assert!(coerce("12,5", DataType::Numeric).is_err());
        assert!(coerce("", DataType::Numeric).is_err());
    }

    #[test]
    fn integer_coercion_rejects_fractions() {
        assert_eq!(coerce("42", DataType::Integer), Ok(TypedValue::Integer(42)));
        assert!(coerce("42.5", DataType::Integer).is_err());
        assert!(coerce("forty-two", DataType::Integer).is_err());
    }

    #[test]
    fn date_coercion_is_strict_about_layout() {
        assert_eq!(
            coerce("2024-03-31", DataType::Date),
            Ok(TypedValue::Date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()))
        );
        assert!(coerce("03/31/2024", DataType::Date).is_err());
        assert!(coerce("2024-03-31T00:00:00", DataType::Date).is_err());
        assert!(coerce("2024-13-01", DataType::Date).is_err());
    }

    #[test]
    fn text_coercion_passes_through() {
        assert_eq!(
            coerce("anything at all", DataType::Text),
            Ok(TypedValue::Text("anything at all".to_string()))
        );
    }

    #[test]
    fn numeric_view_per_type() {
        assert_eq!(coerce("5", DataType::Integer).unwrap().as_number(), Some(5.0));
        assert_eq!(coerce("5.5", DataType::Numeric).unwrap().as_number(), Some(5.5));
        assert_eq!(coerce("1970-01-02", DataType::Date).unwrap().as_number(), Some(1.0));
        assert_eq!(coerce("hello", DataType::Text).unwrap().as_number(), None);
    }

    #[test]
    fn coercion_error_names_raw_text_and_type() {
        let err = coerce("abc", DataType::Numeric).unwrap_err();
        assert_eq!(err.to_string(), "invalid value format for numeric: \"abc\"");
    }
}
