//! Unified error types for purl-tools.
//!
//! Parse and construction failures are fatal to the single operation and
//! surface as [`PurlError`]. Validation findings are not errors: they are
//! collected as [`crate::ValidationMessage`] values and returned as data.

use thiserror::Error;

/// Main error type for purl parsing and construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PurlError {
    /// The input string was empty or blank.
    #[error("a purl string argument is required")]
    EmptyInput,

    /// The required `pkg:` scheme prefix is missing.
    #[error("purl is missing the required \"pkg\" scheme component: {purl:?}")]
    MissingScheme { purl: String },

    /// A required component could not be extracted from a purl string.
    #[error("purl is missing the required {field} component: {purl:?}")]
    MissingComponent { field: &'static str, purl: String },

    /// A required field was empty when building from components.
    #[error("invalid purl: {field} is a required field")]
    MissingField { field: &'static str },

    /// The type component violates the purl character rules.
    #[error("invalid purl type {ptype:?}: {reason}")]
    InvalidType { ptype: String, reason: &'static str },

    /// The purl carries a `user:pass@host:port` URL authority, which the
    /// purl format prohibits.
    #[error(
        "invalid purl {purl:?}: cannot contain a \"user:pass@host:port\" URL authority component"
    )]
    AuthorityNotAllowed { purl: String },

    /// A qualifier string contains a pair without a `=` separator.
    #[error("invalid qualifier, must be a string of key=value pairs: {input:?}")]
    MalformedQualifiers { input: String },

    /// A qualifier key violates the key character rules.
    #[error("invalid qualifier key {key:?}: {reason}")]
    InvalidQualifierKey { key: String, reason: &'static str },
}

/// Convenient Result type for purl-tools operations.
pub type Result<T> = std::result::Result<T, PurlError>;
