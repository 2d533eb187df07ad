//! Country-aware phone number validator

use crate::error::{ValidationError, ValidationResult};
use crate::phone::{digits_only, has_ghana_prefix, GHANA_DIALING_CODE, GHANA_PREFIXES};
use crate::traits::ValidateRecord;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Validates a phone number field against the country code held in a sibling
/// field of the same record.
///
/// An absent phone passes (presence is the at-least-one-identifier rule's
/// concern), as does an absent or unsupported country code - country rules
/// are only enforced for Ghana (`233`).
#[derive(Debug, Clone)]
pub struct PhoneForCountryValidator {
    /// Name of the field holding the phone number
    pub phone_field: String,
    /// Name of the sibling field holding the country code
    pub country_field: String,
}

impl PhoneForCountryValidator {
    /// Create a validator for the given phone and country-code fields
    pub fn new(phone_field: impl Into<String>, country_field: impl Into<String>) -> Self {
        Self {
            phone_field: phone_field.into(),
            country_field: country_field.into(),
        }
    }

    fn ghana_error(&self) -> ValidationError {
        ValidationError::with_code(
            &self.phone_field,
            format!(
                "Invalid Ghana phone number. Expected 10 digits in local format \
                 (e.g. 0591234567) and prefix must be one of: {}",
                GHANA_PREFIXES.join(", ")
            ),
            "phone_for_country",
        )
    }
}

fn field_str<'a>(record: &'a HashMap<String, Value>, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[async_trait]
impl ValidateRecord for PhoneForCountryValidator {
    async fn validate_record(&self, record: &HashMap<String, Value>) -> ValidationResult<()> {
        let phone = match field_str(record, &self.phone_field) {
            Some(phone) => phone,
            None => return Ok(()),
        };
        let country_code = match field_str(record, &self.country_field) {
            Some(cc) => cc,
            None => return Ok(()),
        };

        if digits_only(country_code) != GHANA_DIALING_CODE {
            // Other countries are out of scope for structural rules
            return Ok(());
        }

        let mut normalized = digits_only(phone);
        // 233 + 9 digits supplied inline: collapse to the local leading-zero form
        if normalized.starts_with(GHANA_DIALING_CODE) && normalized.len() == 12 {
            normalized = format!("0{}", &normalized[3..]);
        }

        if normalized.len() != 10 || !has_ghana_prefix(&normalized) {
            return Err(self.ghana_error().into());
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "phone_for_country"
    }
}
