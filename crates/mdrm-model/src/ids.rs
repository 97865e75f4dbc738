use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A validated MDRM element identifier: exactly four ASCII uppercase
/// letters followed by four ASCII digits (e.g. `RCFD2170`).
///
/// The same token format is recognized inside rule expressions, so the
/// identifier doubles as a lookup key and an expression reference.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct MdrmId(String);

impl MdrmId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if !Self::is_valid(trimmed) {
            return Err(ModelError::InvalidMdrmId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Whether `value` matches the fixed-width identifier format.
    pub fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 8
            && bytes[..4].iter().all(u8::is_ascii_uppercase)
            && bytes[4..].iter().all(u8::is_ascii_digit)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MdrmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MdrmId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MdrmId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MdrmId> for String {
    fn from(id: MdrmId) -> Self {
        id.0
    }
}
