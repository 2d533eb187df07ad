//! Validation rules composition

use crate::error::{ValidationErrors, ValidationResult};
use crate::traits::{ValidateRecord, ValidationRule};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Collection of validation rules for a request payload.
///
/// Field rules run against their field's value (missing fields validate as
/// `Null`); record rules run against the whole record. All errors are
/// aggregated so a caller sees every failing field at once.
#[derive(Clone, Default)]
pub struct Rules {
    /// Field-level validation rules
    field_rules: HashMap<String, Vec<Arc<dyn ValidationRule>>>,
    /// Record-level validation rules
    record_rules: Vec<Arc<dyn ValidateRecord>>,
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("field_rules_count", &self.field_rules.len())
            .field("record_rules_count", &self.record_rules.len())
            .finish()
    }
}

impl Rules {
    /// Create a new empty rules collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation rule for a specific field
    pub fn field<R>(mut self, field: impl Into<String>, rule: R) -> Self
    where
        R: ValidationRule + 'static,
    {
        self.field_rules
            .entry(field.into())
            .or_default()
            .push(Arc::new(rule));
        self
    }

    /// Add a record-level validation rule (cross-field validation)
    pub fn record<R>(mut self, rule: R) -> Self
    where
        R: ValidateRecord + 'static,
    {
        self.record_rules.push(Arc::new(rule));
        self
    }

    /// Check if there are any rules defined
    pub fn is_empty(&self) -> bool {
        self.field_rules.is_empty() && self.record_rules.is_empty()
    }

    /// Validate a record against every field and record rule
    pub async fn validate(&self, record: &HashMap<String, Value>) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();

        for (field, rules) in &self.field_rules {
            let value = record.get(field).cloned().unwrap_or(Value::Null);
            for rule in rules {
                if let Err(rule_errors) = rule.validate(&value, field).await {
                    errors.merge(rule_errors);
                }
            }
        }

        for rule in &self.record_rules {
            if let Err(rule_errors) = rule.validate_record(record).await {
                errors.merge(rule_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
