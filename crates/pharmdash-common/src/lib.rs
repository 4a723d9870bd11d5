//! Shared utilities for pharmdash crates
//!
//! Owns the logging pipeline setup and the caller-side validation helpers
//! the dashboard pages use before handing values to the preference store.

pub mod logging;
pub mod validation;

pub use logging::{init, try_init, LogOptions};
pub use validation::{Validatable, ValidationError, Validator};
