//! Project identity used to build message tags and bug-report text.

use thiserror::Error;

/// Package name used in tags when no explicit identity is configured.
const DEFAULT_PACKAGE_NAME: &str = "vite-plugin-ssr";

/// Errors from validating a [`ProjectInfo`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field was empty.
    #[error("project {field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A field contains a character that delimits message tags.
    #[error("project {field} `{value}` must not contain `{delimiter}`")]
    TagDelimiter {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// The delimiter found in the value.
        delimiter: char,
    },
    /// The process-wide context already exists.
    #[error("diagnostics were already initialized")]
    AlreadyInitialized,
}

/// Identity of the project whose diagnostics are being reported.
///
/// `package_name` and `version` form the message tags (`[name]` and
/// `[name@version]`), so they are checked for tag delimiters on construction.
/// Without that check a name like `a]b` would let the plain tag match inside
/// messages it never produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    package_name: String,
    version: String,
    project_name: String,
    repository: String,
}

impl ProjectInfo {
    /// Create a validated project identity.
    pub fn new(
        package_name: impl Into<String>,
        version: impl Into<String>,
        project_name: impl Into<String>,
        repository: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let info = ProjectInfo {
            package_name: package_name.into(),
            version: version.into(),
            project_name: project_name.into(),
            repository: repository.into(),
        };
        info.validate()?;
        Ok(info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_tag_part("package name", &self.package_name, &['[', ']'])?;
        // `@` separates name from version, so the version must not contain one.
        check_tag_part("version", &self.version, &['[', ']', '@'])?;
        if self.project_name.is_empty() {
            return Err(ConfigError::Empty {
                field: "project name",
            });
        }
        Ok(())
    }

    /// Package name as it appears in tags.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Version as it appears in the versioned tag.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Human-facing project name used in bug-report text.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Repository URL bug reports are directed to.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// The plain project tag, `[name]`.
    pub fn tag(&self) -> String {
        format!("[{}]", self.package_name)
    }

    /// The versioned project tag, `[name@version]`.
    pub fn tag_with_version(&self) -> String {
        format!("[{}@{}]", self.package_name, self.version)
    }
}

impl Default for ProjectInfo {
    fn default() -> Self {
        ProjectInfo {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            project_name: DEFAULT_PACKAGE_NAME.to_string(),
            repository: env!("CARGO_PKG_REPOSITORY").to_string(),
        }
    }
}

fn check_tag_part(field: &'static str, value: &str, delimiters: &[char]) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty { field });
    }
    match value.chars().find(|c| delimiters.contains(c)) {
        Some(delimiter) => Err(ConfigError::TagDelimiter {
            field,
            value: value.to_string(),
            delimiter,
        }),
        None => Ok(()),
    }
}
