//! Email format validator

use crate::error::{ValidationError, ValidationResult};
use crate::traits::ValidationRule;
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;

/// ASCII email pattern with TLD requirement, no consecutive dots.
const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9]([a-zA-Z0-9._%+-]*[a-zA-Z0-9])?@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$";

/// Validator for email address format
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    /// Custom error message
    pub message: Option<String>,
}

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self { message: None }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn is_valid(&self, email: &str) -> bool {
        if email.is_empty() || email.matches('@').count() != 1 {
            return false;
        }

        let (local, domain) = match email.split_once('@') {
            Some(parts) => parts,
            None => return false,
        };

        // RFC 5321 length limits
        if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.len() > 255 {
            return false;
        }

        match Regex::new(EMAIL_PATTERN) {
            Ok(regex) => regex.is_match(email),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl ValidationRule for EmailValidator {
    async fn validate(&self, value: &Value, field: &str) -> ValidationResult<()> {
        // Absent email passes; presence is a separate rule
        if value.is_null() {
            return Ok(());
        }

        let email = match value.as_str() {
            Some(s) => s,
            None => {
                return Err(ValidationError::with_code(
                    field,
                    format!("{} must be a string", field),
                    "invalid_type",
                )
                .into())
            }
        };

        if self.is_valid(email) {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} must be a valid email address", field));
            Err(ValidationError::with_code(field, message, "email").into())
        }
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
