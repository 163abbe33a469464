//! Qualifier representations.
//!
//! Qualifiers are an unordered key/value attribute map (`arch=x86_64`).
//! Internally they are always held as a [`Qualifiers`] map whose iteration
//! order is the lexicographic serialization order. At the API boundary a
//! caller may hand over either the encoded `key=value&...` string or a
//! ready-made map; [`QualifierInput`] keeps those two shapes explicit.

use std::collections::BTreeMap;

/// Canonical qualifier map: lowercase keys, sorted iteration order.
pub type Qualifiers = BTreeMap<String, String>;

/// Caller-supplied qualifiers: either the raw `key=value&...` wire string
/// or a key/value map. Both are reduced to a canonical [`Qualifiers`] map
/// before any further processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierInput {
    /// An `&`-joined `key=value` string, as found in a purl's query part.
    Raw(String),
    /// A key/value mapping.
    Map(Qualifiers),
}

impl QualifierInput {
    /// True when no qualifier data was provided at all.
    pub fn is_empty(&self) -> bool {
        match self {
            QualifierInput::Raw(s) => s.is_empty(),
            QualifierInput::Map(m) => m.is_empty(),
        }
    }
}

impl Default for QualifierInput {
    fn default() -> Self {
        QualifierInput::Map(Qualifiers::new())
    }
}

impl From<&str> for QualifierInput {
    fn from(value: &str) -> Self {
        QualifierInput::Raw(value.to_string())
    }
}

impl From<String> for QualifierInput {
    fn from(value: String) -> Self {
        QualifierInput::Raw(value)
    }
}

impl From<Qualifiers> for QualifierInput {
    fn from(value: Qualifiers) -> Self {
        QualifierInput::Map(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for QualifierInput {
    fn from(value: [(&str, &str); N]) -> Self {
        QualifierInput::Map(
            value
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_conversions() {
        assert_eq!(
            QualifierInput::from("a=1"),
            QualifierInput::Raw("a=1".to_string())
        );
        let input = QualifierInput::from([("arch", "x86_64")]);
        match input {
            QualifierInput::Map(m) => assert_eq!(m.get("arch").map(String::as_str), Some("x86_64")),
            QualifierInput::Raw(_) => panic!("expected map input"),
        }
    }

    #[test]
    fn test_default_is_empty_map() {
        assert!(QualifierInput::default().is_empty());
        assert!(QualifierInput::Raw(String::new()).is_empty());
        assert!(!QualifierInput::from("a=1").is_empty());
    }
}
