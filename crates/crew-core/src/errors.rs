//! Error types for building authorization configurations.
//!
//! Policy violations are not errors in this sense and live in
//! [`crate::policy::PolicyViolation`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier passed to an authorization flag could not be qualified.
    #[error("invalid value '{value}' for {flag}: {reason}")]
    InvalidIdentifier {
        flag: &'static str,
        value: String,
        reason: &'static str,
    },
}
