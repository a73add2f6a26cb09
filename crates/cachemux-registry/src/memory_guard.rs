//! Policy-enforcing guard over the shared in-process backend.
//!
//! The guard namespaces every key with the cache name, injects the
//! policy's expiration into new entries and short-circuits everything when
//! the policy disables the cache.

use std::sync::Arc;

use cachemux_backend::{
    CacheResult, CacheValue, EntryKey, MemoryBackend, MemoryEntry,
};
use cachemux_policy::{CachePolicy, ExpiryKind, PolicyTable};
use time::Duration;

use crate::handle::{MemoryCache, ensure_key};

/// One named cache's view over the shared in-process backend.
pub struct MemoryCacheGuard {
    name: String,
    backend: Arc<dyn MemoryBackend>,
    policy: CachePolicy,
}

impl MemoryCacheGuard {
    /// Creates a guard for `name`, resolving its effective policy from the
    /// table.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        backend: Arc<dyn MemoryBackend>,
        policies: &PolicyTable,
    ) -> Self {
        let name = name.into();
        let policy = policies.resolve(&name).clone();
        Self {
            name,
            backend,
            policy,
        }
    }

    /// The cache name this guard was created for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn namespaced(&self, key: &str) -> EntryKey {
        EntryKey::new(&self.name, key)
    }
}

impl MemoryCache for MemoryCacheGuard {
    fn create_entry(&self, key: &str) -> CacheResult<Box<dyn MemoryEntry>> {
        ensure_key(key)?;

        if !self.policy.enabled {
            return Ok(Box::new(DetachedEntry::new(key)));
        }

        let mut inner = self.backend.create_entry(self.namespaced(key));
        match self.policy.expiry.kind {
            ExpiryKind::Absolute => inner.set_absolute_ttl(self.policy.expiry.ttl),
            ExpiryKind::Sliding => inner.set_sliding_ttl(self.policy.expiry.ttl),
            ExpiryKind::None => {}
        }

        Ok(Box::new(GuardedEntry {
            key: key.to_string(),
            inner,
        }))
    }

    fn try_get(&self, key: &str) -> CacheResult<Option<CacheValue>> {
        ensure_key(key)?;

        if !self.policy.enabled {
            return Ok(None);
        }

        Ok(self.backend.try_get(&self.namespaced(key)))
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        ensure_key(key)?;

        if self.policy.enabled {
            self.backend.remove(&self.namespaced(key));
        }

        Ok(())
    }

    fn close(&self) {
        // The backend is shared process-wide; closing it is deliberate even
        // under a disabled policy.
        self.backend.close();
    }
}

/// A backend entry wrapped so consumers see the raw caller key.
///
/// Namespacing is a contract between guard and backend; entry consumers
/// never observe the compound key. Dropping this drops the inner entry,
/// which commits it.
struct GuardedEntry {
    key: String,
    inner: Box<dyn MemoryEntry>,
}

impl MemoryEntry for GuardedEntry {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_value(&mut self, value: CacheValue) {
        self.inner.set_value(value);
    }

    fn value(&self) -> Option<&CacheValue> {
        self.inner.value()
    }

    fn set_absolute_ttl(&mut self, ttl: Duration) {
        self.inner.set_absolute_ttl(ttl);
    }

    fn set_sliding_ttl(&mut self, ttl: Duration) {
        self.inner.set_sliding_ttl(ttl);
    }
}

/// A backend-unaffiliated entry returned under a disabled policy or by the
/// no-op cache.
///
/// Accepts writes like any entry but drops without publishing anything.
pub struct DetachedEntry {
    key: String,
    value: Option<CacheValue>,
    absolute_ttl: Option<Duration>,
    sliding_ttl: Option<Duration>,
}

impl DetachedEntry {
    /// Creates a detached entry carrying the caller's key verbatim.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            absolute_ttl: None,
            sliding_ttl: None,
        }
    }
}

impl MemoryEntry for DetachedEntry {
    fn key(&self) -> &str {
        &self.key
    }

    fn set_value(&mut self, value: CacheValue) {
        self.value = Some(value);
    }

    fn value(&self) -> Option<&CacheValue> {
        self.value.as_ref()
    }

    fn set_absolute_ttl(&mut self, ttl: Duration) {
        self.absolute_ttl = Some(ttl);
    }

    fn set_sliding_ttl(&mut self, ttl: Duration) {
        self.sliding_ttl = Some(ttl);
    }
}
