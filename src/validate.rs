//! Severity-tagged purl validation.
//!
//! Validation never raises for a well-formed purl: every finding is
//! collected as a [`ValidationMessage`] and returned as data. Only an
//! unparseable string or an unknown type yields an error-severity result,
//! and even those come back in the returned list.

use std::fmt;

use serde::Serialize;

use crate::model::PackageUrl;
use crate::registry::{self, ExtraRules, NamespaceRequirement, TypeDefinition};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationSeverity::Error => write!(f, "error"),
            ValidationSeverity::Warning => write!(f, "warning"),
            ValidationSeverity::Info => write!(f, "info"),
        }
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub severity: ValidationSeverity,
    pub message: String,
}

impl ValidationMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: ValidationSeverity::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Validate a purl string. An empty result means no issues were found.
///
/// The string is parsed without normalization so that, in strict mode,
/// case deviations stay observable. A parse failure yields a single
/// error-severity message instead of an `Err`.
pub fn validate_str(purl: &str, strict: bool) -> Vec<ValidationMessage> {
    match PackageUrl::parse_unnormalized(purl) {
        Ok(parsed) => validate(&parsed, strict),
        Err(err) => {
            tracing::debug!("validation could not parse purl {purl:?}: {err}");
            vec![ValidationMessage::error(format!(
                "invalid purl {purl:?}: {err}"
            ))]
        }
    }
}

/// Validate a purl value. An empty result means no issues were found.
///
/// In non-strict mode the purl is normalized first, so only deviations
/// that survive normalization are reported; strict mode checks the purl
/// exactly as given and additionally enforces the type's qualifier
/// allow-list.
pub fn validate(purl: &PackageUrl, strict: bool) -> Vec<ValidationMessage> {
    let Some(def) = registry::definition_for(purl.ptype()) else {
        return vec![ValidationMessage::error(format!(
            "unknown purl type: {:?}",
            purl.ptype()
        ))];
    };

    let normalized;
    let purl = if strict {
        purl
    } else {
        match purl.normalized() {
            Ok(canonical) => {
                normalized = canonical;
                &normalized
            }
            Err(err) => {
                return vec![ValidationMessage::error(format!("invalid purl: {err}"))];
            }
        }
    };

    let mut messages = Vec::new();
    check_namespace(purl, def, &mut messages);
    check_component_case(purl, def, &mut messages);
    if strict {
        check_qualifier_allow_list(purl, def, &mut messages);
    }
    check_extra_rules(purl, def, &mut messages);
    messages
}

fn check_namespace(purl: &PackageUrl, def: &TypeDefinition, messages: &mut Vec<ValidationMessage>) {
    match (def.namespace_requirement, purl.namespace()) {
        (NamespaceRequirement::Prohibited, Some(_)) => {
            messages.push(ValidationMessage::error(format!(
                "namespace is prohibited for purl type {:?}",
                def.ptype
            )));
        }
        (NamespaceRequirement::Required, None) => {
            messages.push(ValidationMessage::error(format!(
                "namespace is required for purl type {:?}",
                def.ptype
            )));
        }
        _ => {}
    }

    let Some(namespace) = purl.namespace() else {
        return;
    };
    if def.ptype == "cpan" {
        if namespace != namespace.to_uppercase() {
            messages.push(ValidationMessage::warning(format!(
                "namespace must be uppercase for purl type {:?}",
                def.ptype
            )));
        }
    } else if !def.namespace_case_sensitive && namespace != namespace.to_lowercase() {
        messages.push(ValidationMessage::warning(format!(
            "namespace is not lowercased for purl type {:?}",
            def.ptype
        )));
    }
}

fn check_component_case(
    purl: &PackageUrl,
    def: &TypeDefinition,
    messages: &mut Vec<ValidationMessage>,
) {
    if !def.name_case_sensitive && purl.name() != purl.name().to_lowercase() {
        messages.push(ValidationMessage::warning(format!(
            "name is not lowercased for purl type {:?}",
            def.ptype
        )));
    }
    if let Some(version) = purl.version() {
        if !def.version_case_sensitive && version != version.to_lowercase() {
            messages.push(ValidationMessage::warning(format!(
                "version is not lowercased for purl type {:?}",
                def.ptype
            )));
        }
    }
}

fn check_qualifier_allow_list(
    purl: &PackageUrl,
    def: &TypeDefinition,
    messages: &mut Vec<ValidationMessage>,
) {
    let disallowed: Vec<&str> = purl
        .qualifiers()
        .keys()
        .map(String::as_str)
        .filter(|key| !def.allows_qualifier(key))
        .collect();
    if disallowed.is_empty() {
        return;
    }

    let mut allowed: Vec<&str> = def.allowed_qualifiers.to_vec();
    allowed.sort_unstable();
    messages.push(ValidationMessage::info(format!(
        "invalid qualifiers found: {}. Allowed qualifiers are: {}",
        disallowed.join(", "),
        allowed.join(", ")
    )));
}

/// Type-specific rules, dispatched off the registry tag. These only append
/// to the generic findings above.
fn check_extra_rules(
    purl: &PackageUrl,
    def: &TypeDefinition,
    messages: &mut Vec<ValidationMessage>,
) {
    match def.extra_rules {
        ExtraRules::None => {}
        ExtraRules::Cpan => {
            if purl.namespace().is_some() && purl.name().contains("::") {
                messages.push(ValidationMessage::error(format!(
                    "name must not contain '::' when namespace is present for purl type {:?}",
                    def.ptype
                )));
            }
            if purl.namespace().is_none() && purl.name().contains('-') {
                messages.push(ValidationMessage::error(format!(
                    "name must not contain '-' when namespace is absent for purl type {:?}",
                    def.ptype
                )));
            }
        }
        ExtraRules::UnderscoreInName => {
            if purl.name().contains('_') {
                messages.push(ValidationMessage::warning(format!(
                    "name cannot contain underscores for purl type {:?}",
                    def.ptype
                )));
            }
        }
        ExtraRules::Pub => {
            if !purl
                .name()
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
            {
                messages.push(ValidationMessage::warning(format!(
                    "name should only contain letters, digits, or underscores for purl type {:?}",
                    def.ptype
                )));
            }
            if purl.name().contains(' ') {
                messages.push(ValidationMessage::warning(format!(
                    "name contains spaces but should use underscores instead for purl type {:?}",
                    def.ptype
                )));
            }
        }
    }
}
