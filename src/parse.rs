//! Purl string splitting.
//!
//! Splitting is separate from normalization: [`split_purl`] only carves the
//! input into raw components following URL syntax, and the caller decides
//! whether to canonicalize them (decode mode) or keep them verbatim.

use crate::error::{PurlError, Result};
use crate::norm::check_identifier;

/// Raw components carved out of a purl string, before normalization.
/// The type is already lowercased and character-checked because every
/// type-conditional rule downstream keys off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawPurl {
    pub ptype: String,
    pub namespace: Option<String>,
    pub name: String,
    pub version: Option<String>,
    /// The raw query part, still `&`-joined and percent-encoded.
    pub qualifiers: Option<String>,
    pub subpath: Option<String>,
}

/// Split a purl string into raw components.
pub(crate) fn split_purl(purl: &str) -> Result<RawPurl> {
    if purl.trim().is_empty() {
        return Err(PurlError::EmptyInput);
    }

    let remainder = purl.strip_prefix("pkg:").ok_or_else(|| PurlError::MissingScheme {
        purl: purl.to_string(),
    })?;

    // Leading slashes after the scheme (`pkg://`, `pkg:///`) are tolerated.
    let remainder = remainder.trim().trim_start_matches('/');

    let (ptype, rest) = remainder
        .split_once('/')
        .filter(|(ptype, _)| !ptype.is_empty())
        .ok_or_else(|| PurlError::MissingComponent {
            field: "type",
            purl: purl.to_string(),
        })?;
    let ptype = ptype.to_lowercase();
    check_identifier(&ptype).map_err(|reason| PurlError::InvalidType {
        ptype: ptype.clone(),
        reason,
    })?;

    let (path, qualifiers, subpath) = url_split(rest, purl)?;

    let mut path = path.trim_start_matches('/');

    // npm scoped names start with `@`, so the scope segment is the
    // namespace directly instead of going through the generic
    // last-segment-is-name rule below.
    let mut scope: Option<&str> = None;
    if ptype == "npm" && path.starts_with('@') {
        match path.split_once('/') {
            Some((seg, rest)) => {
                scope = Some(seg);
                path = rest;
            }
            None => {
                scope = Some(path);
                path = "";
            }
        }
    }

    let (head, version) = match path.rsplit_once('@') {
        Some((head, version)) => (head, Some(version)),
        None => (path, None),
    };

    let segments: Vec<&str> = head
        .trim()
        .trim_matches('/')
        .split('/')
        .filter(|seg| !seg.trim().is_empty())
        .collect();

    let (namespace, name) = match scope {
        Some(scope) => match segments.as_slice() {
            [name] => (Some(scope.to_string()), Some(*name)),
            _ => (Some(scope.to_string()), None),
        },
        None => match segments.split_last() {
            Some((name, rest)) if !rest.is_empty() => (Some(rest.join("/")), Some(*name)),
            Some((name, _)) => (None, Some(*name)),
            None => (None, None),
        },
    };

    let name = name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| PurlError::MissingComponent {
            field: "name",
            purl: purl.to_string(),
        })?;

    Ok(RawPurl {
        ptype,
        namespace,
        name: name.to_string(),
        version: version.map(str::to_string),
        qualifiers: qualifiers.map(str::to_string),
        subpath: subpath.map(str::to_string),
    })
}

/// URL-syntax split of everything after the type segment, in the same
/// order a generic URL splitter applies: scheme sniff, authority, fragment,
/// then query. Purls must not carry a scheme or authority at this point,
/// so both are hard errors.
fn url_split<'a>(
    rest: &'a str,
    original: &str,
) -> Result<(&'a str, Option<&'a str>, Option<&'a str>)> {
    // A `:` preceded only by scheme characters marks a URL scheme, which
    // is how `pkg:type/user:pass@host/name` gets rejected while a colon
    // deeper in the path (`ns/Perl::Version`) survives.
    if let Some(colon) = rest.find(':') {
        let head = &rest[..colon];
        if !head.is_empty()
            && head.as_bytes()[0].is_ascii_alphabetic()
            && head
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        {
            return Err(PurlError::AuthorityNotAllowed {
                purl: original.to_string(),
            });
        }
    }

    let mut rest = rest;
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
        if !after[..end].is_empty() {
            return Err(PurlError::AuthorityNotAllowed {
                purl: original.to_string(),
            });
        }
        rest = &after[end..];
    }

    let (rest, subpath) = match rest.split_once('#') {
        Some((rest, subpath)) => (rest, Some(subpath)),
        None => (rest, None),
    };
    let (path, qualifiers) = match rest.split_once('?') {
        Some((path, qualifiers)) => (path, Some(qualifiers)),
        None => (rest, None),
    };
    Ok((path, qualifiers, subpath))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(purl: &str) -> RawPurl {
        split_purl(purl).unwrap()
    }

    #[test]
    fn test_split_full_purl() {
        let raw = split("pkg:maven/org.apache/batik@1.9?classifier=sources#path/to");
        assert_eq!(raw.ptype, "maven");
        assert_eq!(raw.namespace.as_deref(), Some("org.apache"));
        assert_eq!(raw.name, "batik");
        assert_eq!(raw.version.as_deref(), Some("1.9"));
        assert_eq!(raw.qualifiers.as_deref(), Some("classifier=sources"));
        assert_eq!(raw.subpath.as_deref(), Some("path/to"));
    }

    #[test]
    fn test_split_minimal_purl() {
        let raw = split("pkg:cargo/serde");
        assert_eq!(raw.ptype, "cargo");
        assert_eq!(raw.namespace, None);
        assert_eq!(raw.name, "serde");
        assert_eq!(raw.version, None);
        assert_eq!(raw.qualifiers, None);
        assert_eq!(raw.subpath, None);
    }

    #[test]
    fn test_split_tolerates_leading_slashes() {
        assert_eq!(split("pkg://npm/lodash").name, "lodash");
        assert_eq!(split("pkg:///npm/lodash").name, "lodash");
    }

    #[test]
    fn test_split_lowercases_type() {
        assert_eq!(split("pkg:NPM/lodash").ptype, "npm");
    }

    #[test]
    fn test_split_npm_scope_is_namespace() {
        let raw = split("pkg:npm/@angular/cli@10.1.2");
        assert_eq!(raw.namespace.as_deref(), Some("@angular"));
        assert_eq!(raw.name, "cli");
        assert_eq!(raw.version.as_deref(), Some("10.1.2"));
    }

    #[test]
    fn test_split_npm_scope_without_name_fails() {
        let err = split_purl("pkg:npm/@angular").unwrap_err();
        assert!(matches!(
            err,
            PurlError::MissingComponent { field: "name", .. }
        ));
    }

    #[test]
    fn test_split_at_prefix_fails_for_other_types() {
        // Everything after the `@` reads as a version, leaving no name.
        let err = split_purl("pkg:generic/@scope/thing").unwrap_err();
        assert!(matches!(
            err,
            PurlError::MissingComponent { field: "name", .. }
        ));
    }

    #[test]
    fn test_split_rejects_blank_and_missing_scheme() {
        assert!(matches!(split_purl("   "), Err(PurlError::EmptyInput)));
        assert!(matches!(
            split_purl("npm/lodash"),
            Err(PurlError::MissingScheme { .. })
        ));
    }

    #[test]
    fn test_split_rejects_missing_type_or_name() {
        assert!(matches!(
            split_purl("pkg:npm"),
            Err(PurlError::MissingComponent { field: "type", .. })
        ));
        assert!(matches!(
            split_purl("pkg:npm/"),
            Err(PurlError::MissingComponent { field: "name", .. })
        ));
    }

    #[test]
    fn test_split_rejects_bad_type() {
        assert!(matches!(
            split_purl("pkg:2npm/lodash"),
            Err(PurlError::InvalidType { .. })
        ));
        assert!(matches!(
            split_purl("pkg:n pm/lodash"),
            Err(PurlError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_split_rejects_authority() {
        assert!(matches!(
            split_purl("pkg:type/user:pass@host/name"),
            Err(PurlError::AuthorityNotAllowed { .. })
        ));
        assert!(matches!(
            split_purl("pkg:type///host/name"),
            Err(PurlError::AuthorityNotAllowed { .. })
        ));
        // An empty authority (`////`) is not an authority at all.
        assert_eq!(split("pkg:type////name").name, "name");
    }

    #[test]
    fn test_split_keeps_colon_in_later_segments() {
        let raw = split("pkg:cpan/DROLSKY/Perl::Version@1.013");
        assert_eq!(raw.ptype, "cpan");
        assert_eq!(raw.namespace.as_deref(), Some("DROLSKY"));
        assert_eq!(raw.name, "Perl::Version");
        assert_eq!(raw.version.as_deref(), Some("1.013"));
    }

    #[test]
    fn test_split_colon_in_first_segment_looks_like_scheme() {
        // A colon-bearing first path segment is indistinguishable from a
        // URL scheme under generic URL splitting.
        assert!(matches!(
            split_purl("pkg:cpan/Perl::Version"),
            Err(PurlError::AuthorityNotAllowed { .. })
        ));
    }

    #[test]
    fn test_split_version_uses_last_at_sign() {
        let raw = split("pkg:npm/@scope/name@1.0@2.0");
        assert_eq!(raw.namespace.as_deref(), Some("@scope"));
        assert_eq!(raw.name, "name@1.0");
        assert_eq!(raw.version.as_deref(), Some("2.0"));
    }
}
