//! Validated identifier newtypes.
//!
//! Rule and sheet identifiers arrive as opaque strings from the backend.
//! They are the stable join key between the filtered view and the full
//! collection, so they get real types instead of bare `String`s.

use std::fmt;

use crate::error::ModelError;

/// Identifier of a rule sheet.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SheetId(String);

impl SheetId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidSheetId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single rule within a sheet.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRuleId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_trim_and_reject_empty() {
        assert_eq!(RuleId::new("  7 ").unwrap().as_str(), "7");
        assert!(matches!(
            RuleId::new("   "),
            Err(ModelError::InvalidRuleId(_))
        ));
        assert!(matches!(SheetId::new(""), Err(ModelError::InvalidSheetId(_))));
    }
}
