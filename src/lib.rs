//! **Package URL (purl) parsing, normalization, validation and serialization.**
//!
//! `purl-tools` implements the purl identifier format: a compact, typed
//! string that names a software package across ecosystems (npm, PyPI,
//! Maven, Cargo, ...). It parses purl strings into an immutable value
//! object, canonicalizes every component with the ecosystem-specific rules,
//! serializes back to the canonical wire form, and checks purls against a
//! built-in registry of package-type definitions.
//!
//! ## Key Features
//!
//! - **Parsing**: [`PackageUrl::parse`] turns a purl string into its six
//!   components, percent-decoding and normalizing each one.
//! - **Construction**: [`PackageUrl::builder`] builds a purl from
//!   components with the same normalization applied, so both paths
//!   produce the identical canonical value.
//! - **Serialization**: `Display` renders the canonical string; parsing
//!   it back yields an equal value.
//! - **Validation**: [`validate`] and [`validate_str`] run structural and
//!   per-ecosystem checks and return severity-tagged findings as data
//!   instead of raising.
//! - **Type registry**: one static [`TypeDefinition`] record per
//!   ecosystem; adding an ecosystem never touches the parser.
//!
//! ## Parsing a purl
//!
//! ```
//! use purl_tools::PackageUrl;
//!
//! let purl = PackageUrl::parse("pkg:maven/org.apache.xmlgraphics/batik-anim@1.9.1")?;
//! assert_eq!(purl.ptype(), "maven");
//! assert_eq!(purl.namespace(), Some("org.apache.xmlgraphics"));
//! assert_eq!(purl.name(), "batik-anim");
//! assert_eq!(purl.version(), Some("1.9.1"));
//! # Ok::<(), purl_tools::PurlError>(())
//! ```
//!
//! ## Building the canonical form
//!
//! Components are normalized exactly like parsed text, including the
//! ecosystem rewrites (PyPI lowercases and turns `_` into `-`):
//!
//! ```
//! use purl_tools::PackageUrl;
//!
//! let purl = PackageUrl::builder("pypi", "Django_App").version("1.0").build()?;
//! assert_eq!(purl.to_string(), "pkg:pypi/django-app@1.0");
//! # Ok::<(), purl_tools::PurlError>(())
//! ```
//!
//! ## Validating
//!
//! Validation collects findings instead of failing. Strict mode checks the
//! purl exactly as written:
//!
//! ```
//! use purl_tools::{validate_str, ValidationSeverity};
//!
//! let findings = validate_str("pkg:pypi/Django_App", true);
//! assert!(!findings.is_empty());
//! assert_eq!(findings[0].severity, ValidationSeverity::Warning);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod model;
pub mod norm;
mod parse;
pub mod registry;
pub mod validate;

// Re-export main types for convenience
pub use error::{PurlError, Result};
pub use model::{FieldValue, PackageUrl, PackageUrlBuilder, QualifierInput, Qualifiers};
pub use norm::{encode_qualifiers, normalize_qualifiers, EncodeMode};
pub use registry::{
    definition_for, known_types, ExtraRules, NamespaceRequirement, TypeDefinition,
    TYPE_DEFINITIONS,
};
pub use validate::{validate, validate_str, ValidationMessage, ValidationSeverity};
