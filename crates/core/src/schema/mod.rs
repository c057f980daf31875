//! Record schemas.
//!
//! Every persisted record kind has a typed struct here that derives
//! `Deserialize` for its shape and defaults and `Validate` for its bounds.
//! [`Record::from_json`] runs both and reports failures as
//! [`ValidationErrors`], each naming the offending field path and the rule it
//! broke. A body that cannot be decoded (missing field, wrong type, unknown
//! enum value) is reported on its own; once decoded, every constraint
//! violation is collected.

mod checks;
mod contact;
mod newsletter;
mod order;
mod product;
mod report;
mod review;

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::types::RecordKind;

pub use contact::ContactMessage;
pub use newsletter::Newsletter;
pub use order::{Address, Order, OrderItem};
pub use product::Product;
pub use review::Review;

/// A record that can be validated from raw input and persisted.
pub trait Record: Serialize + DeserializeOwned + Validate {
    /// Kind tag selecting the collection this record is stored in.
    const KIND: RecordKind;

    /// Decode and validate a record from raw JSON input.
    ///
    /// # Errors
    ///
    /// Returns the decoding failure if `value` does not have the record's
    /// shape, otherwise every constraint the decoded record violates.
    fn from_json(value: Value) -> Result<Self, ValidationErrors> {
        let record: Self = serde_path_to_error::deserialize(value)?;
        record.validate()?;
        Ok(record)
    }
}

/// The rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A required field was absent or null.
    Missing,
    /// The value had the wrong JSON type.
    WrongType,
    /// A number fell outside its inclusive bounds.
    OutOfRange,
    /// A string was not one of the enumerated values.
    InvalidEnum,
    /// An email field was malformed.
    InvalidEmail,
    /// A value that must have content was empty.
    Empty,
    /// An identifier could not be parsed.
    MalformedIdentifier,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Path of the offending field, e.g. `items[0].quantity`.
    pub field: String,
    /// The rule that was violated.
    pub rule: Rule,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// One or more validation failures for a single input.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// The individual failures.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any failure concerns `field`.
    #[must_use]
    pub fn cites(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// The rule violated by `field`, if it failed.
    #[must_use]
    pub fn rule_for(&self, field: &str) -> Option<Rule> {
        self.0.iter().find(|e| e.field == field).map(|e| e.rule)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_errors() {
        let errors = ValidationErrors(vec![
            ValidationError::new("price", Rule::OutOfRange, "must be >= 0"),
            ValidationError::new("title", Rule::Missing, "field required"),
        ]);
        assert_eq!(
            errors.to_string(),
            "price: must be >= 0; title: field required"
        );
    }

    #[test]
    fn test_rule_serializes_snake_case() {
        let json = serde_json::to_value(Rule::MalformedIdentifier).ok();
        assert_eq!(
            json,
            Some(Value::String("malformed_identifier".to_string()))
        );
    }

    #[test]
    fn test_cites_and_rule_for() {
        let errors = ValidationErrors::from(ValidationError::new("email", Rule::InvalidEmail, "bad"));
        assert!(errors.cites("email"));
        assert!(!errors.cites("name"));
        assert_eq!(errors.rule_for("email"), Some(Rule::InvalidEmail));
    }
}
