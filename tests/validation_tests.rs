//! Integration tests for the validation engine.
//!
//! Covers the strict/non-strict split, the namespace requirement matrix,
//! per-type extra rules, and the qualifier allow-list.

use purl_tools::{validate, validate_str, PackageUrl, ValidationMessage, ValidationSeverity};

fn severities(messages: &[ValidationMessage]) -> Vec<ValidationSeverity> {
    messages.iter().map(|m| m.severity).collect()
}

#[test]
fn clean_purls_produce_no_findings() {
    for purl in [
        "pkg:npm/lodash@4.17.21",
        "pkg:maven/org.apache.xmlgraphics/batik-anim@1.9.1?classifier=sources",
        "pkg:pypi/django-app@1.0",
        "pkg:cargo/serde@1.0.210",
        "pkg:cpan/DROLSKY/DateTime@1.55",
    ] {
        assert!(
            validate_str(purl, true).is_empty(),
            "unexpected findings for {purl}: {:?}",
            validate_str(purl, true)
        );
        assert!(validate_str(purl, false).is_empty());
    }
}

#[test]
fn unparseable_string_yields_one_error_as_data() {
    let messages = validate_str("pkg:maven/@1.0", false);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);

    let messages = validate_str("", true);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
}

#[test]
fn unknown_type_yields_exactly_one_error() {
    let messages = validate_str("pkg:not-a-real-type/name", false);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
    assert!(messages[0].message.contains("not-a-real-type"));

    // Same for a value object carrying an unregistered type.
    let purl = PackageUrl::builder("sometype", "name")
        .normalize(false)
        .build()
        .unwrap();
    let messages = validate(&purl, true);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
}

#[test]
fn prohibited_namespace_is_an_error() {
    let messages = validate_str("pkg:pypi/namespace/django@1.0", false);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
    assert!(messages[0].message.contains("prohibited"));
}

#[test]
fn required_namespace_must_be_present() {
    let messages = validate_str("pkg:maven/batik@1.9", false);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
    assert!(messages[0].message.contains("required"));
}

#[test]
fn pypi_uppercase_and_underscore_warn_in_strict_mode() {
    let messages = validate_str("pkg:pypi/Django_App", true);
    assert_eq!(
        severities(&messages),
        [ValidationSeverity::Warning, ValidationSeverity::Warning]
    );
    assert!(messages[0].message.contains("lowercased"));
    assert!(messages[1].message.contains("underscores"));

    // Normalization rewrites the name, so non-strict mode is clean.
    assert!(validate_str("pkg:pypi/Django_App", false).is_empty());
}

#[test]
fn hackage_underscores_warn_in_strict_mode_only() {
    let messages = validate_str("pkg:hackage/my_package@0.1", true);
    assert_eq!(severities(&messages), [ValidationSeverity::Warning]);

    assert!(validate_str("pkg:hackage/my_package@0.1", false).is_empty());
}

#[test]
fn cpan_namespace_case_is_checked() {
    let messages = validate_str("pkg:cpan/drolsky/DateTime@1.55", true);
    assert_eq!(severities(&messages), [ValidationSeverity::Warning]);
    assert!(messages[0].message.contains("uppercase"));

    // Non-strict mode normalizes the namespace to uppercase first.
    assert!(validate_str("pkg:cpan/drolsky/DateTime@1.55", false).is_empty());
}

#[test]
fn cpan_module_name_with_namespace_is_an_error() {
    let messages = validate_str("pkg:cpan/DROLSKY/Perl::Version@1.013", false);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
    assert!(messages[0].message.contains("::"));
}

#[test]
fn cpan_distribution_name_without_namespace_is_an_error() {
    // A dashed distribution name is only valid together with an author
    // namespace; parse via components because the bare string form is
    // caught earlier by URL splitting.
    let purl = PackageUrl::builder("cpan", "Perl-Version")
        .version("1.013")
        .build()
        .unwrap();
    let messages = validate(&purl, false);
    assert_eq!(severities(&messages), [ValidationSeverity::Error]);
    assert!(messages[0].message.contains('-'));
}

#[test]
fn pub_name_characters_are_checked() {
    let messages = validate_str("pkg:pub/my-app@1.0", true);
    assert_eq!(severities(&messages), [ValidationSeverity::Warning]);

    let purl = PackageUrl::builder("pub", "my app")
        .normalize(false)
        .build()
        .unwrap();
    let messages = validate(&purl, true);
    assert_eq!(
        severities(&messages),
        [ValidationSeverity::Warning, ValidationSeverity::Warning]
    );
    assert!(messages[1].message.contains("spaces"));

    // Normalization rewrites everything to identifier characters.
    assert!(validate_str("pkg:pub/my-app@1.0", false).is_empty());
}

#[test]
fn qualifier_allow_list_is_strict_only_and_info() {
    let purl = "pkg:npm/lodash@4.17.21?arch=x86_64&repository_url=registry.npmjs.org";
    let messages = validate_str(purl, true);
    assert_eq!(severities(&messages), [ValidationSeverity::Info]);
    assert!(messages[0].message.contains("arch"));
    assert!(messages[0].message.contains("repository_url"));

    assert!(validate_str(purl, false).is_empty());
}

#[test]
fn version_case_is_checked_for_case_insensitive_types() {
    let messages = validate_str("pkg:huggingface/distilbert/DistilBERT@MAIN", true);
    assert_eq!(severities(&messages), [ValidationSeverity::Warning]);
    assert!(messages[0].message.contains("version"));

    // Normalization lowercases huggingface versions.
    assert!(validate_str("pkg:huggingface/distilbert/DistilBERT@MAIN", false).is_empty());
}

#[test]
fn oci_case_findings_in_strict_mode() {
    let messages = validate_str("pkg:oci/Debian@sha256:ABCDEF", true);
    assert_eq!(
        severities(&messages),
        [ValidationSeverity::Warning, ValidationSeverity::Warning]
    );
}

#[test]
fn findings_order_is_namespace_name_version_qualifiers_rules() {
    // A purl tripping several checks at once reports them in engine order.
    let purl = PackageUrl::builder("pypi", "Bad_Name")
        .namespace("oops")
        .qualifier("unknown_key", "v")
        .normalize(false)
        .build()
        .unwrap();
    let messages = validate(&purl, true);
    assert_eq!(
        severities(&messages),
        [
            ValidationSeverity::Error,   // namespace prohibited
            ValidationSeverity::Warning, // name not lowercased
            ValidationSeverity::Info,    // qualifier allow-list
            ValidationSeverity::Warning, // underscore rule
        ]
    );
}

#[test]
fn validate_never_panics_on_odd_but_parseable_input() {
    for purl in [
        "pkg:generic/-",
        "pkg:generic/name@",
        "pkg:npm/lodash#",
        "pkg:npm/lodash?",
    ] {
        let _ = validate_str(purl, true);
        let _ = validate_str(purl, false);
    }
}
