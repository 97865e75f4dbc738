use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{MdrmId, ModelError};

/// Declared data type of an MDRM element.
///
/// The type drives value coercion: every submitted value arrives as raw
/// text and is converted according to the element's declared type before
/// any rule sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Floating-point quantity.
    Numeric,
    /// Whole number.
    Integer,
    /// Calendar date in the fixed `YYYY-MM-DD` layout.
    Date,
    /// Free text, passed through unconverted.
    Text,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Numeric => "numeric",
            DataType::Integer => "integer",
            DataType::Date => "date",
            DataType::Text => "text",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numeric" => Ok(DataType::Numeric),
            "integer" => Ok(DataType::Integer),
            "date" => Ok(DataType::Date),
            "text" => Ok(DataType::Text),
            _ => Err(ModelError::UnknownDataType(s.to_string())),
        }
    }
}

/// Metadata for one MDRM element (a regulatory data field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdrmElement {
    pub id: MdrmId,
    pub name: String,
    pub description: Option<String>,
    pub data_type: DataType,
}

impl MdrmElement {
    pub fn new(id: MdrmId, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            data_type,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_parses_case_insensitively() {
        assert_eq!("Numeric".parse::<DataType>().unwrap(), DataType::Numeric);
        assert_eq!(" INTEGER ".parse::<DataType>().unwrap(), DataType::Integer);
        assert_eq!("date".parse::<DataType>().unwrap(), DataType::Date);
        assert_eq!("text".parse::<DataType>().unwrap(), DataType::Text);
        assert!("decimal".parse::<DataType>().is_err());
    }

    #[test]
    fn data_type_round_trips_through_display() {
        for dt in [DataType::Numeric, DataType::Integer, DataType::Date, DataType::Text] {
            assert_eq!(dt.as_str().parse::<DataType>().unwrap(), dt);
        }
    }
}
