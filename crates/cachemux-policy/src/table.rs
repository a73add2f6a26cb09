//! The name-to-policy resolution table.
//!
//! A [`PolicyTable`] is built once at startup and never mutated afterwards;
//! resolution is a pure function of the table and the requested name.

use std::collections::HashMap;

use crate::error::ConfigResult;
use crate::policy::CachePolicy;
use crate::raw::RawPolicy;

/// Pseudo-entry that takes absolute precedence over every lookup.
const OVERRIDE_KEY: &str = "override";
/// Pseudo-entry returned for names with no explicit entry.
const DEFAULT_KEY: &str = "default";

/// Immutable, case-insensitive mapping from cache name to [`CachePolicy`].
///
/// Two configuration keys are pseudo-entries rather than cache names:
///
/// - `override`: when present, every lookup returns this policy verbatim,
///   regardless of the requested name.
/// - `default`: when present (and no `override` is), it is returned for any
///   name without an explicit entry. Without it, lookups for unknown names
///   fall through to [`CachePolicy::default()`].
///
/// Duplicate names in the source collapse last-write-wins before the table
/// is built.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    /// Backing map, keyed by lowercased name. Pseudo-entries included.
    entries: HashMap<String, CachePolicy>,
    /// The `override` pseudo-entry, extracted at construction.
    override_policy: Option<CachePolicy>,
    /// The `default` pseudo-entry, or the global default when absent.
    default_policy: CachePolicy,
}

impl PolicyTable {
    /// Builds a table from typed `(name, policy)` pairs.
    ///
    /// Later pairs win over earlier pairs with a case-insensitively equal
    /// name.
    #[must_use]
    pub fn from_pairs<I, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, CachePolicy)>,
        N: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (name, policy) in pairs {
            entries.insert(name.as_ref().to_lowercase(), policy);
        }

        let override_policy = entries.get(OVERRIDE_KEY).cloned();
        let default_policy = entries.get(DEFAULT_KEY).cloned().unwrap_or_default();

        Self {
            entries,
            override_policy,
            default_policy,
        }
    }

    /// Builds a table from raw string-typed configuration pairs.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`](crate::ConfigError) produced while
    /// parsing a section; the table is not built.
    pub fn from_raw<I, N>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (N, RawPolicy)>,
        N: AsRef<str>,
    {
        let mut typed = Vec::new();
        for (name, raw) in pairs {
            let policy = raw.into_policy(name.as_ref())?;
            typed.push((name.as_ref().to_string(), policy));
        }
        Ok(Self::from_pairs(typed))
    }

    /// Resolves the effective policy for a cache name.
    ///
    /// Precedence: `override` pseudo-entry, then the explicit entry for the
    /// (case-insensitively compared) name, then the `default` pseudo-entry,
    /// then [`CachePolicy::default()`]. Never fails.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &CachePolicy {
        if let Some(policy) = &self.override_policy {
            return policy;
        }
        self.entries
            .get(&name.to_lowercase())
            .unwrap_or(&self.default_policy)
    }

    /// Returns `true` if the table carries an explicit entry for `name`
    /// (case-insensitive, pseudo-entries included).
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Number of entries in the backing map, pseudo-entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
