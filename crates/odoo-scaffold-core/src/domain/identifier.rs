//! Domain value objects: the validated module identifier and platform version.
//!
//! Both are pure value types with equality-by-value and no identity. They are
//! the only way raw user input enters the domain, so every rule about what a
//! module name or Odoo version may look like lives in this file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── ModuleName ───────────────────────────────────────────────────────────────

/// A technical module identifier such as `library_management`.
///
/// # Invariants
/// - Non-empty.
/// - First character is an ASCII letter.
/// - Every character is an ASCII letter, digit or `_`.
///
/// Names that collide with core Odoo modules (`base`, `mail`, ...) are
/// accepted; only the lexical shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and wrap a raw identifier.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Underscore-delimited segments, in order. Empty segments are kept so
    /// that `a__b` keeps its double space in the human name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('_')
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check a raw identifier without allocating a [`ModuleName`].
pub fn validate(identifier: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    };

    let Some(first) = identifier.chars().next() else {
        return Err(invalid("name cannot be empty"));
    };

    if first.is_ascii_digit() {
        return Err(invalid("name cannot start with a digit"));
    }

    if let Some(bad) = identifier
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(invalid(&format!(
            "'{bad}' is not allowed (letters, digits and underscores only)"
        )));
    }

    if !first.is_ascii_alphabetic() {
        return Err(invalid("name must start with a letter"));
    }

    Ok(())
}

// ── PlatformVersion ──────────────────────────────────────────────────────────

/// Odoo major version the bundle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformVersion(u32);

impl PlatformVersion {
    /// Version used when the caller does not pick one.
    pub const DEFAULT: Self = Self(17);

    /// First version that understands inline `invisible="..."` expressions.
    pub const EXPRESSION_SINCE: Self = Self(17);

    pub const fn new(major: u32) -> Self {
        Self(major)
    }

    pub const fn major(self) -> u32 {
        self.0
    }
}

impl Default for PlatformVersion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for PlatformVersion {
    fn from(major: u32) -> Self {
        Self(major)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlatformVersion {
    type Err = DomainError;

    /// Accepts `17` as well as the series form `17.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let major = trimmed
            .strip_suffix(".0")
            .unwrap_or(trimmed)
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidPlatformVersion(s.to_string()))?;

        if major == 0 {
            return Err(DomainError::InvalidPlatformVersion(s.to_string()));
        }

        Ok(Self(major))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_snake_case_names() {
        for name in ["library_management", "task_tracker", "a", "hr_extra2", "A_b", "x__y_"] {
            assert!(ModuleName::parse(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn rejects_leading_digit() {
        let err = ModuleName::parse("9bad").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { ref identifier, .. } if identifier == "9bad"));
    }

    #[test]
    fn rejects_empty_and_underscore_only() {
        assert!(validate("").is_err());
        assert!(validate("_").is_err());
        assert!(validate("__").is_err());
        assert!(validate("_private").is_err());
    }

    #[test]
    fn rejects_punctuation_and_spaces() {
        for name in ["my-module", "my module", "my.module", "my/module", "modülé"] {
            assert!(validate(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn segments_keep_empty_parts() {
        let name = ModuleName::parse("a__b").unwrap();
        assert_eq!(name.segments().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn platform_version_parses_series_form() {
        assert_eq!("17".parse::<PlatformVersion>().unwrap().major(), 17);
        assert_eq!("16.0".parse::<PlatformVersion>().unwrap().major(), 16);
        assert!("0".parse::<PlatformVersion>().is_err());
        assert!("seventeen".parse::<PlatformVersion>().is_err());
        assert!("-1".parse::<PlatformVersion>().is_err());
    }
}
