//! Catalog runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed explicitly to the
//! validation pass. Nothing in this crate reads the environment while answering queries.

use crate::constants::{REQUIRE_TRANSLATIONS_ENV, STRICT_REFERENCES_ENV};
use crate::error::{CatalogError, CatalogResult};

/// Catalog configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    strict_references: bool,
    require_translations: bool,
}

impl CatalogConfig {
    pub fn new(strict_references: bool, require_translations: bool) -> Self {
        Self {
            strict_references,
            require_translations,
        }
    }

    /// Builds a config from raw environment values, as read by the caller.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the variable if a value is not a recognised boolean.
    pub fn from_env_values(
        strict_references: Option<String>,
        require_translations: Option<String>,
    ) -> CatalogResult<Self> {
        Ok(Self {
            strict_references: flag_from_env_value(STRICT_REFERENCES_ENV, strict_references, false)?,
            require_translations: flag_from_env_value(
                REQUIRE_TRANSLATIONS_ENV,
                require_translations,
                false,
            )?,
        })
    }

    /// Dangling cross-references are errors rather than warnings.
    pub fn strict_references(&self) -> bool {
        self.strict_references
    }

    /// Entries without a Spanish display name are reported.
    pub fn require_translations(&self) -> bool {
        self.require_translations
    }
}

/// Parses an optional boolean environment value.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, trimmed and case-insensitive. An unset or
/// blank value yields `default`.
pub fn flag_from_env_value(var: &str, value: Option<String>, default: bool) -> CatalogResult<bool> {
    let Some(raw) = value else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CatalogError::InvalidInput(format!(
            "{var} must be a boolean (true/false, 1/0, yes/no, on/off), got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_common_spellings() {
        for raw in ["true", "TRUE", " 1 ", "yes", "On"] {
            assert!(flag_from_env_value("X", Some(raw.into()), false).expect(raw));
        }
        for raw in ["false", "0", "No", "off"] {
            assert!(!flag_from_env_value("X", Some(raw.into()), true).expect(raw));
        }
    }

    #[test]
    fn unset_or_blank_uses_default() {
        assert!(flag_from_env_value("X", None, true).expect("unset"));
        assert!(!flag_from_env_value("X", Some("  ".into()), false).expect("blank"));
    }

    #[test]
    fn garbage_names_the_variable() {
        let err = flag_from_env_value(STRICT_REFERENCES_ENV, Some("maybe".into()), false)
            .expect_err("should reject");
        assert!(matches!(err, CatalogError::InvalidInput(msg) if msg.contains(STRICT_REFERENCES_ENV)));
    }

    #[test]
    fn from_env_values_defaults_to_lenient() {
        let config = CatalogConfig::from_env_values(None, None).expect("defaults");
        assert_eq!(config, CatalogConfig::default());
        assert!(!config.strict_references());

        let config = CatalogConfig::from_env_values(Some("1".into()), Some("yes".into()))
            .expect("explicit");
        assert!(config.strict_references());
        assert!(config.require_translations());
    }
}
