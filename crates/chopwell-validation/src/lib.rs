//! # chopwell-validation
//!
//! Input validation for the chopwell platform. Field-level rules operate on
//! `serde_json::Value` so the same rule set can run against any request
//! payload; record-level rules see the whole candidate record and cover
//! cross-field constraints such as phone-number-for-country.

pub mod error;
pub mod phone;
pub mod rules;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use rules::Rules;
pub use traits::{ValidateRecord, ValidationRule};

// Built-in validators
pub use validators::{
    email::EmailValidator, length::LengthValidator, phone::PhoneForCountryValidator,
    required::RequiredValidator,
};
