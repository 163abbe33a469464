//! Built-in package-type definitions.
//!
//! Sorted by type key; `definition_for` relies on the order.

use super::{ExtraRules, NamespaceRequirement, TypeDefinition};

/// The built-in ecosystem definitions.
pub static TYPE_DEFINITIONS: &[TypeDefinition] = &[
    TypeDefinition {
        ptype: "alpm",
        name: "Arch Linux package",
        description: "Arch Linux packages and other users of the libalpm/pacman package manager",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url", "arch"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "apk",
        name: "APK-based packages",
        description: "Alpine Linux APK-based packages",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url", "arch"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "bitbucket",
        name: "Bitbucket",
        description: "Bitbucket-based packages",
        use_repository: true,
        default_repository_url: "https://bitbucket.org",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "bitnami",
        name: "Bitnami",
        description: "Bitnami-based packages",
        use_repository: true,
        default_repository_url: "https://downloads.bitnami.com/files/stacksmith",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["distro", "repository_url", "arch"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "cargo",
        name: "Cargo",
        description: "Cargo packages for Rust",
        use_repository: true,
        default_repository_url: "https://crates.io/",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "cocoapods",
        name: "CocoaPods",
        description: "CocoaPods pods",
        use_repository: true,
        default_repository_url: "https://cdn.cocoapods.org/",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "composer",
        name: "Composer",
        description: "Composer PHP packages",
        use_repository: true,
        default_repository_url: "https://packagist.org",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "conan",
        name: "Conan C/C++ packages",
        description: "Conan C/C++ packages, mirroring the Conan-native \
                      <name>/<version>@<user>/<channel> reference syntax",
        use_repository: true,
        default_repository_url: "https://center.conan.io",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["channel", "rrev", "user", "repository_url", "prev"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "conda",
        name: "Conda",
        description: "Conda packages",
        use_repository: true,
        default_repository_url: "https://repo.anaconda.com",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["channel", "build", "subdir", "repository_url", "type"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "cpan",
        name: "CPAN",
        description: "CPAN Perl packages",
        use_repository: true,
        default_repository_url: "https://www.cpan.org/",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["repository_url", "ext", "vcs_url", "download_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::Cpan,
    },
    TypeDefinition {
        ptype: "cran",
        name: "CRAN",
        description: "CRAN R packages",
        use_repository: true,
        default_repository_url: "https://cran.r-project.org",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "deb",
        name: "Debian package",
        description: "Debian packages, Debian derivatives, and Ubuntu packages",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url", "arch"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "docker",
        name: "Docker image",
        description: "Docker images",
        use_repository: true,
        default_repository_url: "https://hub.docker.com",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "gem",
        name: "RubyGems",
        description: "RubyGems",
        use_repository: true,
        default_repository_url: "https://rubygems.org",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url", "platform"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "generic",
        name: "Generic Package",
        description: "Plain packages that fit no other type, such as \
                      upstream-from-distro sources or a bare VCS repository",
        use_repository: false,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["checksum", "download_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "github",
        name: "GitHub",
        description: "GitHub-based packages",
        use_repository: true,
        default_repository_url: "https://github.com",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "golang",
        name: "Go package",
        description: "Go packages",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "hackage",
        name: "Haskell package",
        description: "Haskell packages",
        use_repository: true,
        default_repository_url: "https://hackage.haskell.org",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::UnderscoreInName,
    },
    TypeDefinition {
        ptype: "hex",
        name: "Hex",
        description: "Hex packages",
        use_repository: true,
        default_repository_url: "https://repo.hex.pm",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "huggingface",
        name: "HuggingFace models",
        description: "Hugging Face ML models",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: true,
        name_case_sensitive: true,
        version_case_sensitive: false,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "luarocks",
        name: "LuaRocks",
        description: "Lua packages installed with LuaRocks",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "maven",
        name: "Maven",
        description: "Maven JARs and related artifacts",
        use_repository: true,
        default_repository_url: "https://repo.maven.apache.org/maven2/",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url", "type", "classifier"],
        namespace_case_sensitive: true,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "mlflow",
        name: "MLflow model",
        description: "MLflow ML models (Azure ML, Databricks, etc.)",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url", "run_id", "model_uuid"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "npm",
        name: "npm",
        description: "npm packages",
        use_repository: true,
        default_repository_url: "https://registry.npmjs.org/",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "nuget",
        name: "NuGet",
        description: "NuGet .NET packages",
        use_repository: true,
        default_repository_url: "https://www.nuget.org",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "oci",
        name: "OCI image",
        description: "Artifacts in registries conforming to the OCI Distribution \
                      Specification, including Docker images",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url", "tag", "arch"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "pub",
        name: "Pub",
        description: "Dart and Flutter pub packages",
        use_repository: true,
        default_repository_url: "https://pub.dartlang.org",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::Pub,
    },
    TypeDefinition {
        ptype: "pypi",
        name: "PyPI",
        description: "Python packages",
        use_repository: true,
        default_repository_url: "https://pypi.org",
        namespace_requirement: NamespaceRequirement::Prohibited,
        allowed_qualifiers: &["file_name", "repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::UnderscoreInName,
    },
    TypeDefinition {
        ptype: "qpkg",
        name: "QNX package",
        description: "QNX packages",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: false,
        name_case_sensitive: false,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "rpm",
        name: "RPM",
        description: "RPM packages",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url", "arch", "epoch"],
        namespace_case_sensitive: false,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "swid",
        name: "Software Identification (SWID) Tag",
        description: "ISO-IEC 19770-2 Software Identification (SWID) tags",
        use_repository: false,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Optional,
        allowed_qualifiers: &[
            "tag_creator_name",
            "tag_creator_regid",
            "tag_version",
            "tag_id",
            "patch",
        ],
        namespace_case_sensitive: true,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
    TypeDefinition {
        ptype: "swift",
        name: "Swift packages",
        description: "Swift packages",
        use_repository: true,
        default_repository_url: "",
        namespace_requirement: NamespaceRequirement::Required,
        allowed_qualifiers: &["repository_url"],
        namespace_case_sensitive: true,
        name_case_sensitive: true,
        version_case_sensitive: true,
        extra_rules: ExtraRules::None,
    },
];
