//! Core validation traits

use crate::error::ValidationResult;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// A rule that validates a single field value.
#[async_trait]
pub trait ValidationRule: Send + Sync {
    /// Validate a single value for the named field
    async fn validate(&self, value: &Value, field: &str) -> ValidationResult<()>;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;
}

/// A rule that validates the whole candidate record.
///
/// Cross-field constraints (a phone number checked against a sibling
/// country-code field, at-least-one-of presence rules) implement this
/// instead of [`ValidationRule`] so they see every field at once rather
/// than reaching into sibling fields by reflection.
#[async_trait]
pub trait ValidateRecord: Send + Sync {
    /// Validate the entire record
    async fn validate_record(&self, record: &HashMap<String, Value>) -> ValidationResult<()>;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;
}
