//! Field canonicalization.
//!
//! Every purl field passes through one of the `normalize_*` functions here,
//! both when building a value object and when re-serializing it. The
//! functions are pure: they take the raw field, the package type driving
//! the type-conditional rules, and an [`EncodeMode`], and return the new
//! canonical value.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{PurlError, Result};
use crate::model::{QualifierInput, Qualifiers};

/// Quoting behavior applied to field values during normalization.
///
/// Serialization percent-encodes, parsing percent-decodes, and direct
/// construction from components leaves bytes untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Percent-encode reserved characters for the wire format.
    Encode,
    /// Percent-decode wire text into its literal value.
    Decode,
    /// Leave the value exactly as given.
    Verbatim,
}

/// Bytes percent-encoded in [`EncodeMode::Encode`].
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) stay literal, and so do
/// `/` (fields are encoded segment-wise) and `:` (always literal in purls,
/// so ecosystem identifiers like `Perl::Version` survive encoding).
const FIELD_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b':');

/// Types whose namespace is lowercased in canonical form.
const LOWERCASE_NAMESPACE_TYPES: &[&str] = &[
    "alpm",
    "apk",
    "bitbucket",
    "composer",
    "github",
    "gitlab",
    "hex",
    "luarocks",
    "pypi",
    "qpkg",
];

/// Types whose name is lowercased in canonical form.
const LOWERCASE_NAME_TYPES: &[&str] = &[
    "alpm",
    "apk",
    "bitbucket",
    "composer",
    "github",
    "gitlab",
    "hex",
    "luarocks",
    "oci",
    "pypi",
    "qpkg",
];

/// Types whose version is lowercased in canonical form.
const LOWERCASE_VERSION_TYPES: &[&str] = &["huggingface", "oci"];

/// Apply the quoting half of normalization to a single token.
pub(crate) fn quote(value: &str, mode: EncodeMode) -> Cow<'_, str> {
    match mode {
        EncodeMode::Encode => utf8_percent_encode(value, FIELD_ENCODE_SET).into(),
        // Invalid escapes decode to U+FFFD rather than failing, mirroring
        // lenient URL decoding.
        EncodeMode::Decode => percent_decode_str(value).decode_utf8_lossy(),
        EncodeMode::Verbatim => Cow::Borrowed(value),
    }
}

/// Shared character rules for purl identifiers.
///
/// Both the `type` component and qualifier keys are restricted to ASCII
/// letters, digits, `.`, `-` and `_`, and must not start with a digit.
/// Keeping one checker for both prevents the two rule sets from drifting
/// apart.
pub(crate) fn check_identifier(value: &str) -> std::result::Result<(), &'static str> {
    if value.is_empty() {
        return Err("cannot be empty");
    }
    if value.contains('%') {
        return Err("cannot be percent-encoded");
    }
    if value.contains(' ') {
        return Err("cannot contain spaces");
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
    {
        return Err("may only contain ASCII letters, digits, period, dash and underscore");
    }
    if value.as_bytes()[0].is_ascii_digit() {
        return Err("cannot start with a digit");
    }
    Ok(())
}

/// Canonicalize the type component: trim, lowercase, enforce the
/// identifier character rules. Returns `Ok(None)` for blank input.
pub(crate) fn normalize_type(ptype: &str) -> Result<Option<String>> {
    let ptype = ptype.trim().to_lowercase();
    if ptype.is_empty() {
        return Ok(None);
    }
    check_identifier(&ptype).map_err(|reason| PurlError::InvalidType {
        ptype: ptype.clone(),
        reason,
    })?;
    Ok(Some(ptype))
}

/// Canonicalize a namespace: trim surrounding slashes, apply the per-type
/// case rule, drop blank segments and quote the survivors.
pub(crate) fn normalize_namespace(
    namespace: &str,
    ptype: &str,
    mode: EncodeMode,
) -> Option<String> {
    let namespace = namespace.trim().trim_matches('/');
    let cased = if ptype == "cpan" {
        namespace.to_uppercase()
    } else if LOWERCASE_NAMESPACE_TYPES.contains(&ptype) {
        namespace.to_lowercase()
    } else {
        namespace.to_string()
    };
    let segments: Vec<_> = cased
        .split('/')
        .filter(|seg| !seg.trim().is_empty())
        .map(|seg| quote(seg, mode))
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Canonicalize a name, applying the ecosystem-specific rewrite rules.
///
/// The mlflow rule needs the already-normalized qualifiers: model names on
/// Azure ML keep their case while Databricks lowercases them, and the only
/// signal is the `repository_url` qualifier value.
pub(crate) fn normalize_name(
    name: &str,
    ptype: &str,
    qualifiers: &Qualifiers,
    mode: EncodeMode,
) -> Option<String> {
    let quoted = quote(name, mode);
    let name = quoted.trim().trim_matches('/');
    if name.is_empty() {
        return None;
    }

    let name = match ptype {
        t if LOWERCASE_NAME_TYPES.contains(&t) => {
            let lowered = name.to_lowercase();
            if t == "pypi" {
                lowered.replace('_', "-")
            } else {
                lowered
            }
        }
        "hackage" => name.replace('_', "-"),
        "pub" => name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect(),
        "mlflow" => {
            let repository_url = qualifiers
                .get("repository_url")
                .map(String::as_str)
                .unwrap_or_default();
            if repository_url.contains("azureml") {
                name.to_string()
            } else if repository_url.contains("databricks") {
                name.to_lowercase()
            } else {
                name.to_string()
            }
        }
        _ => name.to_string(),
    };

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Canonicalize a version: trim, quote, and lowercase for the few types
/// whose versions are case-insensitive.
pub(crate) fn normalize_version(version: &str, ptype: &str, mode: EncodeMode) -> Option<String> {
    let version = quote(version.trim(), mode);
    if version.is_empty() {
        return None;
    }
    if LOWERCASE_VERSION_TYPES.contains(&ptype) {
        Some(version.to_lowercase())
    } else {
        Some(version.into_owned())
    }
}

/// Reduce caller-supplied qualifiers to the canonical map form.
///
/// Raw strings are split into `key=value` pairs (a pair without `=` is an
/// error), pairs with a blank key or blank value are dropped, keys are
/// trimmed and lowercased, values are quoted per `mode`, and every final
/// key is checked against the shared identifier rules. Duplicate keys keep
/// the last occurrence.
pub fn normalize_qualifiers(input: &QualifierInput, mode: EncodeMode) -> Result<Qualifiers> {
    let pairs: Vec<(&str, &str)> = match input {
        QualifierInput::Raw(s) if s.is_empty() => return Ok(Qualifiers::new()),
        QualifierInput::Raw(s) => {
            let mut pairs = Vec::with_capacity(s.matches('&').count() + 1);
            for kv in s.split('&') {
                match kv.split_once('=') {
                    Some(pair) => pairs.push(pair),
                    None => {
                        return Err(PurlError::MalformedQualifiers { input: s.clone() });
                    }
                }
            }
            pairs
        }
        QualifierInput::Map(map) => map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect(),
    };

    let mut qualifiers = Qualifiers::new();
    for (key, value) in pairs {
        if key.trim().is_empty() || value.trim().is_empty() {
            continue;
        }
        let key = key.trim().to_lowercase();
        check_identifier(&key).map_err(|reason| PurlError::InvalidQualifierKey {
            key: key.clone(),
            reason,
        })?;
        qualifiers.insert(key, quote(value, mode).into_owned());
    }
    Ok(qualifiers)
}

/// Flatten a qualifier map to the sorted, percent-encoded
/// `key=value&key=value` wire form. Returns `None` for an empty map.
pub fn encode_qualifiers(qualifiers: &Qualifiers) -> Option<String> {
    if qualifiers.is_empty() {
        return None;
    }
    let encoded: Vec<_> = qualifiers
        .iter()
        .map(|(k, v)| format!("{k}={}", quote(v, EncodeMode::Encode)))
        .collect();
    Some(encoded.join("&"))
}

/// Canonicalize a subpath: drop empty, `.` and `..` segments, quote the
/// survivors and rejoin.
pub(crate) fn normalize_subpath(subpath: &str, mode: EncodeMode) -> Option<String> {
    let segments: Vec<_> = subpath
        .split('/')
        .filter(|seg| !seg.trim().is_empty() && *seg != "." && *seg != "..")
        .map(|seg| quote(seg, mode))
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}
