//! Validation traits and common validators
//!
//! The preference store accepts whatever it is given (see the preferences
//! crate contract); pages are expected to validate first. These helpers are
//! the shared vocabulary for that caller-side validation.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Validation error with context
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Value out of range for {field}: expected {expected}, got {actual}")]
    OutOfRange {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Required field missing: {field}")]
    Required { field: String },
}

/// Trait for types that can be validated
pub trait Validatable {
    /// Validate the instance
    fn validate(&self) -> Result<(), ValidationError>;

    /// Check validity without the error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Trait for validators that check values of a given type
pub trait Validator<T> {
    /// Validate a value
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

/// Page-size validator: positive, with an upper bound to keep tables usable
pub struct PageSizeValidator {
    range: RangeInclusive<u32>,
}

impl PageSizeValidator {
    pub fn new(min: u32, max: u32) -> Self {
        Self { range: min..=max }
    }

    /// 1..=500 rows per page
    pub fn default_range() -> Self {
        Self::new(1, 500)
    }
}

impl Default for PageSizeValidator {
    fn default() -> Self {
        Self::default_range()
    }
}

impl Validator<u32> for PageSizeValidator {
    fn validate(&self, value: &u32) -> Result<(), ValidationError> {
        if !self.range.contains(value) {
            return Err(ValidationError::OutOfRange {
                field: "page_size".to_string(),
                expected: format!("{:?}", self.range),
                actual: value.to_string(),
            });
        }
        Ok(())
    }
}

/// Timezone-name validator: IANA-style names ("UTC", "Europe/Oslo")
///
/// Shape check only; resolution against a tz database is a display concern.
pub struct TimezoneNameValidator;

impl Validator<String> for TimezoneNameValidator {
    fn validate(&self, value: &String) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Required {
                field: "timezone".to_string(),
            });
        }
        let well_formed = value
            .split('/')
            .all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '+')
            });
        if !well_formed {
            return Err(ValidationError::InvalidValue {
                field: "timezone".to_string(),
                message: format!("'{}' is not a well-formed zone name", value),
            });
        }
        Ok(())
    }
}

/// Non-empty string validator
pub struct NonEmptyStringValidator {
    field_name: String,
}

impl NonEmptyStringValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl Validator<String> for NonEmptyStringValidator {
    fn validate(&self, value: &String) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: self.field_name.clone(),
            });
        }
        Ok(())
    }
}
