//! Built-in validators

pub mod email;
pub mod length;
pub mod phone;
pub mod required;

pub use email::EmailValidator;
pub use length::LengthValidator;
pub use phone::PhoneForCountryValidator;
pub use required::RequiredValidator;
