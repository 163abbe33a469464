//! The purl value object.
//!
//! A [`PackageUrl`] is constructed once, through a validating factory
//! (parsing or the builder), and never mutated afterwards. Every
//! transformation returns a new value, which also makes the type safe to
//! share across threads without coordination.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PurlError, Result};
use crate::norm::{self, EncodeMode};
use crate::parse::split_purl;

use super::{QualifierInput, Qualifiers};

/// An immutable package URL.
///
/// Only `type` and `name` are mandatory. Two purls are equal iff all six
/// canonicalized components match, and hashing goes through the canonical
/// string form, so a normalized purl can be used directly as a map or set
/// key.
///
/// ```
/// use purl_tools::PackageUrl;
///
/// let purl = PackageUrl::parse("pkg:npm/@angular/cli@10.1.2")?;
/// assert_eq!(purl.namespace(), Some("@angular"));
/// assert_eq!(purl.name(), "cli");
/// assert_eq!(purl.to_string(), "pkg:npm/%40angular/cli@10.1.2");
/// # Ok::<(), purl_tools::PurlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrl {
    ptype: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: Qualifiers,
    subpath: Option<String>,
}

impl PackageUrl {
    /// Parse a purl string into its canonical form.
    ///
    /// Fields are percent-decoded and normalized per the type's rules.
    pub fn parse(purl: &str) -> Result<Self> {
        let raw = split_purl(purl)?;
        Self::assemble(
            &raw.ptype,
            raw.namespace.as_deref(),
            &raw.name,
            raw.version.as_deref(),
            QualifierInput::Raw(raw.qualifiers.unwrap_or_default()),
            raw.subpath.as_deref(),
            EncodeMode::Decode,
        )
    }

    /// Parse a purl string without normalizing.
    ///
    /// All components are kept verbatim (the type is still lowercased,
    /// since it selects every type-conditional rule downstream); only the
    /// qualifiers are coerced into the canonical map form. This is the
    /// entry point for strict validation, where case deviations must stay
    /// observable.
    pub fn parse_unnormalized(purl: &str) -> Result<Self> {
        let raw = split_purl(purl)?;
        let qualifiers = norm::normalize_qualifiers(
            &QualifierInput::Raw(raw.qualifiers.unwrap_or_default()),
            EncodeMode::Decode,
        )?;
        Ok(Self {
            ptype: raw.ptype,
            namespace: raw.namespace,
            name: raw.name,
            version: raw.version.filter(|version| !version.is_empty()),
            qualifiers,
            subpath: raw.subpath.filter(|subpath| !subpath.is_empty()),
        })
    }

    /// Start building a purl from components.
    pub fn builder(ptype: impl Into<String>, name: impl Into<String>) -> PackageUrlBuilder {
        PackageUrlBuilder {
            ptype: ptype.into(),
            namespace: None,
            name: name.into(),
            version: None,
            qualifiers: QualifierInput::default(),
            subpath: None,
            normalize: true,
        }
    }

    /// Normalize components and construct the value object. `mode` selects
    /// the quoting applied along the way: decode for wire text, verbatim
    /// for components handed over directly.
    pub(crate) fn assemble(
        ptype: &str,
        namespace: Option<&str>,
        name: &str,
        version: Option<&str>,
        qualifiers: QualifierInput,
        subpath: Option<&str>,
        mode: EncodeMode,
    ) -> Result<Self> {
        let ptype =
            norm::normalize_type(ptype)?.ok_or(PurlError::MissingField { field: "type" })?;
        // Qualifiers first: the mlflow name rule reads `repository_url`.
        let qualifiers = norm::normalize_qualifiers(&qualifiers, mode)?;
        let name = norm::normalize_name(name, &ptype, &qualifiers, mode)
            .ok_or(PurlError::MissingField { field: "name" })?;
        let namespace = namespace.and_then(|ns| norm::normalize_namespace(ns, &ptype, mode));
        let version = version.and_then(|v| norm::normalize_version(v, &ptype, mode));
        let subpath = subpath.and_then(|sp| norm::normalize_subpath(sp, mode));
        Ok(Self {
            ptype,
            namespace,
            name,
            version,
            qualifiers,
            subpath,
        })
    }

    /// Return the canonical form of this purl.
    ///
    /// For purls built through the normalizing constructors this is a
    /// clone; for unnormalized ones it applies the full rule set.
    pub fn normalized(&self) -> Result<Self> {
        Self::assemble(
            &self.ptype,
            self.namespace.as_deref(),
            &self.name,
            self.version.as_deref(),
            QualifierInput::Map(self.qualifiers.clone()),
            self.subpath.as_deref(),
            EncodeMode::Decode,
        )
    }

    /// The package type (ecosystem discriminator), always lowercase.
    #[must_use]
    pub fn ptype(&self) -> &str {
        &self.ptype
    }

    /// The `/`-separated namespace prefix, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The package name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package version, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The qualifier map. Empty when the purl has no qualifiers.
    #[must_use]
    pub fn qualifiers(&self) -> &Qualifiers {
        &self.qualifiers
    }

    /// The `/`-separated subpath suffix, if any.
    #[must_use]
    pub fn subpath(&self) -> Option<&str> {
        self.subpath.as_deref()
    }

    /// Return the six components as an ordered field map.
    ///
    /// With `encode`, qualifiers are flattened to the sorted
    /// `key=value&...` string; otherwise they stay a map. Absent components
    /// become [`FieldValue::Empty`], or `empty` when a placeholder is
    /// given.
    #[must_use]
    pub fn to_fields(&self, encode: bool, empty: Option<&str>) -> IndexMap<&'static str, FieldValue> {
        let missing = match empty {
            Some(placeholder) => FieldValue::Text(placeholder.to_string()),
            None => FieldValue::Empty,
        };
        let text_or = |value: Option<&String>| {
            value.map_or_else(|| missing.clone(), |v| FieldValue::Text(v.clone()))
        };

        let qualifiers = if self.qualifiers.is_empty() {
            missing.clone()
        } else if encode {
            norm::encode_qualifiers(&self.qualifiers)
                .map_or_else(|| missing.clone(), FieldValue::Text)
        } else {
            FieldValue::Map(self.qualifiers.clone())
        };

        let mut fields = IndexMap::with_capacity(6);
        fields.insert("type", FieldValue::Text(self.ptype.clone()));
        fields.insert("namespace", text_or(self.namespace.as_ref()));
        fields.insert("name", FieldValue::Text(self.name.clone()));
        fields.insert("version", text_or(self.version.as_ref()));
        fields.insert("qualifiers", qualifiers);
        fields.insert("subpath", text_or(self.subpath.as_ref()));
        fields
    }
}

/// Serializes to the canonical purl string.
///
/// Components were normalized at construction, so serialization is a pure
/// encoding pass and calling it repeatedly is stable.
impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg:{}/", self.ptype)?;
        if let Some(namespace) = &self.namespace {
            write!(f, "{}/", norm::quote(namespace, EncodeMode::Encode))?;
        }
        write!(f, "{}", norm::quote(&self.name, EncodeMode::Encode))?;
        if let Some(version) = &self.version {
            write!(f, "@{}", norm::quote(version, EncodeMode::Encode))?;
        }
        if let Some(qualifiers) = norm::encode_qualifiers(&self.qualifiers) {
            write!(f, "?{qualifiers}")?;
        }
        if let Some(subpath) = &self.subpath {
            write!(f, "#{}", norm::quote(subpath, EncodeMode::Encode))?;
        }
        Ok(())
    }
}

impl FromStr for PackageUrl {
    type Err = PurlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Hash for PackageUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Serialize for PackageUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackageUrl {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct PurlVisitor;

        impl Visitor<'_> for PurlVisitor {
            type Value = PackageUrl;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a purl string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                PackageUrl::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PurlVisitor)
    }
}

/// One entry in the field map returned by [`PackageUrl::to_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A textual component, or the caller-provided empty placeholder.
    Text(String),
    /// The qualifier map (non-encoded form only).
    Map(Qualifiers),
    /// An absent component. Serializes as `null`.
    Empty,
}

impl FieldValue {
    /// The textual content, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The qualifier map, if this is a map field.
    #[must_use]
    pub fn as_map(&self) -> Option<&Qualifiers> {
        match self {
            FieldValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Builder for [`PackageUrl`] values.
///
/// `build` fails when a required field is blank, the type violates the
/// character rules, or the qualifiers cannot be reduced to a valid map.
/// By default components are normalized exactly like parsed ones;
/// `normalize(false)` keeps them verbatim (qualifiers are still coerced
/// to the map form).
#[derive(Debug, Clone)]
pub struct PackageUrlBuilder {
    ptype: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    qualifiers: QualifierInput,
    subpath: Option<String>,
    normalize: bool,
}

impl PackageUrlBuilder {
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Replace the qualifiers with a raw `key=value&...` string or a map.
    #[must_use]
    pub fn qualifiers(mut self, qualifiers: impl Into<QualifierInput>) -> Self {
        self.qualifiers = qualifiers.into();
        self
    }

    /// Add a single qualifier to whatever was set so far.
    #[must_use]
    pub fn qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        match &mut self.qualifiers {
            QualifierInput::Map(map) => {
                map.insert(key, value);
            }
            QualifierInput::Raw(raw) => {
                if !raw.is_empty() {
                    raw.push('&');
                }
                raw.push_str(&key);
                raw.push('=');
                raw.push_str(&value);
            }
        }
        self
    }

    #[must_use]
    pub fn subpath(mut self, subpath: impl Into<String>) -> Self {
        self.subpath = Some(subpath.into());
        self
    }

    /// Toggle normalization (on by default).
    #[must_use]
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn build(self) -> Result<PackageUrl> {
        if self.ptype.trim().is_empty() {
            return Err(PurlError::MissingField { field: "type" });
        }
        if self.name.trim().is_empty() {
            return Err(PurlError::MissingField { field: "name" });
        }

        if self.normalize {
            return PackageUrl::assemble(
                &self.ptype,
                self.namespace.as_deref(),
                &self.name,
                self.version.as_deref(),
                self.qualifiers,
                self.subpath.as_deref(),
                EncodeMode::Verbatim,
            );
        }

        norm::check_identifier(&self.ptype).map_err(|reason| PurlError::InvalidType {
            ptype: self.ptype.clone(),
            reason,
        })?;
        let qualifiers = norm::normalize_qualifiers(&self.qualifiers, EncodeMode::Verbatim)?;
        Ok(PackageUrl {
            ptype: self.ptype,
            namespace: self.namespace.filter(|ns| !ns.is_empty()),
            name: self.name,
            version: self.version.filter(|version| !version.is_empty()),
            qualifiers,
            subpath: self.subpath.filter(|subpath| !subpath.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_normalizes_components() {
        let purl = PackageUrl::builder("PyPI", "Django_App")
            .version("1.0")
            .build()
            .unwrap();
        assert_eq!(purl.ptype(), "pypi");
        assert_eq!(purl.name(), "django-app");
        assert_eq!(purl.to_string(), "pkg:pypi/django-app@1.0");
    }

    #[test]
    fn test_builder_requires_type_and_name() {
        assert!(matches!(
            PackageUrl::builder("", "name").build(),
            Err(PurlError::MissingField { field: "type" })
        ));
        assert!(matches!(
            PackageUrl::builder("npm", "  ").build(),
            Err(PurlError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn test_builder_rejects_bad_type_even_unnormalized() {
        assert!(matches!(
            PackageUrl::builder("9type", "name").normalize(false).build(),
            Err(PurlError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_builder_unnormalized_keeps_case() {
        let purl = PackageUrl::builder("pypi", "Django_App")
            .normalize(false)
            .build()
            .unwrap();
        assert_eq!(purl.name(), "Django_App");
        assert_eq!(purl.normalized().unwrap().name(), "django-app");
    }

    #[test]
    fn test_builder_qualifier_accumulation() {
        let purl = PackageUrl::builder("maven", "batik")
            .namespace("org.apache")
            .qualifiers("classifier=sources")
            .qualifier("repository_url", "repo.spring.io/release")
            .build()
            .unwrap();
        assert_eq!(purl.qualifiers().len(), 2);
    }

    #[test]
    fn test_display_percent_encodes() {
        let purl = PackageUrl::builder("npm", "cli")
            .namespace("@angular")
            .version("10.1.2")
            .build()
            .unwrap();
        assert_eq!(purl.to_string(), "pkg:npm/%40angular/cli@10.1.2");
    }

    #[test]
    fn test_equality_and_hash_follow_canonical_form() {
        use std::collections::HashSet;

        let a = PackageUrl::parse("pkg:pypi/django-app@1.0").unwrap();
        let b = PackageUrl::builder("pypi", "Django_App")
            .version("1.0")
            .build()
            .unwrap();
        assert_eq!(a, b);

        let set: HashSet<PackageUrl> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_to_fields_shapes() {
        let purl = PackageUrl::builder("maven", "commons-logging")
            .namespace("org.apache")
            .version("12.3")
            .qualifiers("this=12&that=13")
            .subpath("this/is/a/path")
            .build()
            .unwrap();

        let fields = purl.to_fields(false, None);
        assert_eq!(fields["type"].as_text(), Some("maven"));
        assert_eq!(fields["namespace"].as_text(), Some("org.apache"));
        let map = fields["qualifiers"].as_map().unwrap();
        assert_eq!(map.get("that").map(String::as_str), Some("13"));

        let fields = purl.to_fields(true, None);
        assert_eq!(fields["qualifiers"].as_text(), Some("that=13&this=12"));
    }

    #[test]
    fn test_to_fields_empty_placeholder() {
        let purl = PackageUrl::builder("maven", "commons-logging")
            .version("12.3")
            .build()
            .unwrap();

        let fields = purl.to_fields(false, None);
        assert_eq!(fields["namespace"], FieldValue::Empty);
        assert_eq!(fields["qualifiers"], FieldValue::Empty);

        let fields = purl.to_fields(false, Some(""));
        assert_eq!(fields["namespace"].as_text(), Some(""));
        assert_eq!(fields["subpath"].as_text(), Some(""));
    }

    #[test]
    fn test_serde_round_trip() {
        let purl = PackageUrl::parse("pkg:npm/lodash@4.17.21").unwrap();
        let json = serde_json::to_string(&purl).unwrap();
        assert_eq!(json, "\"pkg:npm/lodash@4.17.21\"");
        let back: PackageUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(purl, back);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: std::result::Result<PackageUrl, _> =
            serde_json::from_str("\"not-a-purl\"");
        assert!(result.is_err());
    }
}
