//! Configuration error types for raw policy parsing.
//!
//! These are construction-time failures: once a [`PolicyTable`] has been
//! built, lookups on it cannot fail.
//!
//! [`PolicyTable`]: crate::PolicyTable

use thiserror::Error;

/// Errors raised while turning raw policy sections into typed policies.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A property value could not be parsed into its typed form.
    #[error("unable to read the `{property}` property for cache `{section}`")]
    InvalidProperty {
        /// The cache section (name) the property belongs to.
        section: String,
        /// The offending property: `kind`, `ttl`, `enabled` or `encrypted`.
        property: &'static str,
    },
}

impl ConfigError {
    /// Creates a new `InvalidProperty` error.
    #[must_use]
    pub fn invalid_property(section: impl Into<String>, property: &'static str) -> Self {
        Self::InvalidProperty {
            section: section.into(),
            property,
        }
    }

    /// The cache section the error originated from.
    #[must_use]
    pub fn section(&self) -> &str {
        match self {
            Self::InvalidProperty { section, .. } => section,
        }
    }

    /// The property that failed to parse.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::InvalidProperty { property, .. } => property,
        }
    }
}

/// Convenience result type for configuration parsing.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_property_and_section() {
        let err = ConfigError::invalid_property("users", "ttl");
        assert_eq!(
            err.to_string(),
            "unable to read the `ttl` property for cache `users`"
        );
    }

    #[test]
    fn test_error_accessors() {
        let err = ConfigError::invalid_property("sessions", "enabled");
        assert_eq!(err.section(), "sessions");
        assert_eq!(err.property(), "enabled");
    }
}
