//! Per-manifest problems collected during a build.
//!
//! Every issue is recorded and reported; the build policy decides which ones
//! block the artifact from being written.

use std::fmt;

use serde::Serialize;

/// A required manifest field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Name,
    Type,
    Files,
}

impl RequiredField {
    /// Key of the field inside a manifest document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Files => "files",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A problem found while building the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildIssue {
    /// The manifest could not be read or is not a valid manifest document.
    MalformedManifest { path: String, cause: String },

    /// A required field is absent or empty.
    MissingField { path: String, field: RequiredField },

    /// A declared file does not exist relative to the project root.
    FileNotFound { entry_name: String, file_path: String },

    /// Two or more manifests declare the same entry name.
    DuplicateName { name: String, manifests: Vec<String> },

    /// A registry dependency does not match any entry in the catalog.
    UnresolvedDependency { from_entry: String, target: String },
}

impl BuildIssue {
    /// Issues that exclude the manifest from the catalog.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedManifest { .. } | Self::MissingField { .. }
        )
    }

    /// Whether this issue prevents the artifact from being written.
    ///
    /// Structural issues always block. Missing files and duplicate names only
    /// block under the strict policy. Unresolved dependencies never block.
    pub fn is_blocking(&self, strict: bool) -> bool {
        match self {
            Self::MalformedManifest { .. } | Self::MissingField { .. } => true,
            Self::FileNotFound { .. } | Self::DuplicateName { .. } => strict,
            Self::UnresolvedDependency { .. } => false,
        }
    }
}

impl fmt::Display for BuildIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedManifest { path, cause } => write!(f, "{}: {}", path, cause),
            Self::MissingField {
                path,
                field: RequiredField::Files,
            } => write!(f, "{}: missing or empty 'files' array", path),
            Self::MissingField { path, field } => write!(f, "{}: missing '{}' field", path, field),
            Self::FileNotFound {
                entry_name,
                file_path,
            } => write!(f, "{}: file not found: {}", entry_name, file_path),
            Self::DuplicateName { name, manifests } => write!(
                f,
                "duplicate entry name '{}' declared by {}",
                name,
                manifests.join(", ")
            ),
            Self::UnresolvedDependency { from_entry, target } => {
                write!(f, "{} depends on missing component: {}", from_entry, target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn file_not_found() -> BuildIssue {
        BuildIssue::FileNotFound {
            entry_name: "button".into(),
            file_path: "registry/ui/button.tsx".into(),
        }
    }

    fn duplicate() -> BuildIssue {
        BuildIssue::DuplicateName {
            name: "shared".into(),
            manifests: vec!["a/index.json".into(), "b/index.json".into()],
        }
    }

    fn unresolved() -> BuildIssue {
        BuildIssue::UnresolvedDependency {
            from_entry: "form".into(),
            target: "https://example.com/r/ghost.json".into(),
        }
    }

    fn missing_name() -> BuildIssue {
        BuildIssue::MissingField {
            path: "ui/x/index.json".into(),
            field: RequiredField::Name,
        }
    }

    #[rstest]
    #[case(missing_name(), true, true)]
    #[case(file_not_found(), true, false)]
    #[case(duplicate(), true, false)]
    #[case(unresolved(), false, false)]
    fn blocking_depends_on_policy(
        #[case] issue: BuildIssue,
        #[case] strict: bool,
        #[case] lenient: bool,
    ) {
        assert_eq!(issue.is_blocking(true), strict);
        assert_eq!(issue.is_blocking(false), lenient);
    }

    #[test]
    fn only_parse_and_field_errors_are_structural() {
        assert!(missing_name().is_structural());
        assert!(
            BuildIssue::MalformedManifest {
                path: "x".into(),
                cause: "eof".into()
            }
            .is_structural()
        );
        assert!(!file_not_found().is_structural());
        assert!(!unresolved().is_structural());
    }

    #[test]
    fn display_messages() {
        assert_eq!(missing_name().to_string(), "ui/x/index.json: missing 'name' field");
        assert_eq!(
            BuildIssue::MissingField {
                path: "p".into(),
                field: RequiredField::Files
            }
            .to_string(),
            "p: missing or empty 'files' array"
        );
        assert_eq!(
            file_not_found().to_string(),
            "button: file not found: registry/ui/button.tsx"
        );
        assert_eq!(
            unresolved().to_string(),
            "form depends on missing component: https://example.com/r/ghost.json"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let value = serde_json::to_value(missing_name()).unwrap();
        assert_eq!(value["kind"], "missing_field");
        assert_eq!(value["field"], "name");
    }
}
