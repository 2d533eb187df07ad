//! Length-based validator for strings

use crate::error::{ValidationError, ValidationResult};
use crate::traits::ValidationRule;
use async_trait::async_trait;
use serde_json::Value;

/// Validator for string length constraints
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    /// Minimum length (inclusive)
    pub min: Option<usize>,
    /// Maximum length (inclusive)
    pub max: Option<usize>,
    /// Custom error message
    pub message: Option<String>,
}

impl LengthValidator {
    /// Create a new length validator with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum length constraint
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum length constraint
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn error_message(&self, field: &str, actual: usize) -> String {
        if let Some(ref custom) = self.message {
            return custom.clone();
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!(
                "{} must be between {} and {} characters long",
                field, min, max
            ),
            (Some(min), None) => format!("{} must be at least {} characters long", field, min),
            (None, Some(max)) => format!("{} must be at most {} characters long", field, max),
            (None, None) => format!("{} has invalid length: {}", field, actual),
        }
    }
}

#[async_trait]
impl ValidationRule for LengthValidator {
    async fn validate(&self, value: &Value, field: &str) -> ValidationResult<()> {
        // Null is RequiredValidator's concern
        if value.is_null() {
            return Ok(());
        }

        let length = match value {
            Value::String(s) => s.chars().count(),
            _ => {
                return Err(ValidationError::with_code(
                    field,
                    format!("{} must be a string", field),
                    "invalid_type",
                )
                .into())
            }
        };

        let below = self.min.is_some_and(|min| length < min);
        let above = self.max.is_some_and(|max| length > max);
        if below || above {
            return Err(
                ValidationError::with_code(field, self.error_message(field, length), "length")
                    .into(),
            );
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "length"
    }
}
