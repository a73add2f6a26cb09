//! Typed cache policy values.
//!
//! A [`CachePolicy`] describes how one named logical cache behaves: whether it
//! is enabled at all, whether payloads are protected at rest, and what
//! expiration (if any) the guard injects into entries. Policies are immutable
//! values; a table of them is built once at startup (see
//! [`PolicyTable`](crate::PolicyTable)).

use time::Duration;

/// The expiration strategy a policy injects into cache entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExpiryKind {
    /// No expiration is injected; the caller or the backend default applies.
    #[default]
    None,
    /// Entries expire a fixed interval after they are written.
    Absolute,
    /// Entries expire a fixed interval after they were last accessed.
    Sliding,
}

/// Expiration settings for a cache policy.
///
/// The default settings inject nothing: [`ExpiryKind::None`] with an
/// effectively infinite TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirySettings {
    /// The expiration strategy.
    pub kind: ExpiryKind,
    /// How long an entry should remain in the cache.
    ///
    /// Ignored when `kind` is [`ExpiryKind::None`].
    pub ttl: Duration,
}

impl Default for ExpirySettings {
    fn default() -> Self {
        Self {
            kind: ExpiryKind::None,
            ttl: Duration::MAX,
        }
    }
}

impl ExpirySettings {
    /// Creates settings with an explicit kind and TTL.
    #[must_use]
    pub fn new(kind: ExpiryKind, ttl: Duration) -> Self {
        Self { kind, ttl }
    }

    /// Creates absolute-expiration settings with the given TTL.
    #[must_use]
    pub fn absolute(ttl: Duration) -> Self {
        Self::new(ExpiryKind::Absolute, ttl)
    }

    /// Creates sliding-expiration settings with the given TTL.
    #[must_use]
    pub fn sliding(ttl: Duration) -> Self {
        Self::new(ExpiryKind::Sliding, ttl)
    }

    /// Returns `true` if these settings inject no expiration.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.kind == ExpiryKind::None
    }
}

/// The resolved policy applied to one named cache.
///
/// `CachePolicy::default()` is the all-defaults fallback of last resort:
/// enabled, unencrypted, no injected expiration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Expiration settings injected by the guard.
    pub expiry: ExpirySettings,
    /// Whether the named cache is enabled. Disabled caches short-circuit
    /// every operation without touching the backend.
    pub enabled: bool,
    /// Whether distributed payloads are protected at rest.
    pub encrypted: bool,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            expiry: ExpirySettings::default(),
            enabled: true,
            encrypted: false,
        }
    }
}

impl CachePolicy {
    /// Creates a policy with explicit settings.
    #[must_use]
    pub fn new(expiry: ExpirySettings, enabled: bool, encrypted: bool) -> Self {
        Self {
            expiry,
            enabled,
            encrypted,
        }
    }

    /// Sets the expiration settings.
    #[must_use]
    pub fn with_expiry(mut self, expiry: ExpirySettings) -> Self {
        self.expiry = expiry;
        self
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the encrypted flag.
    #[must_use]
    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }
}
