//! The purl data model.
//!
//! [`PackageUrl`] is the sole entity: an immutable record of the six purl
//! components, constructed only through validating factories (parsing or
//! the builder) and serialized back via `Display`.

mod purl;
mod qualifiers;

pub use purl::*;
pub use qualifiers::*;
