//! In-process backend collaborator traits.
//!
//! The policy layer talks to the shared in-process store through
//! [`MemoryBackend`]. An in-process store has no I/O to fail, so the
//! contract is infallible; the fallible surface lives one layer up, on the
//! policy-enforcing handles.

use std::any::Any;
use std::sync::Arc;

use time::Duration;

/// The value slot of the in-process store.
///
/// The backend stores values without knowing their type; typed access is a
/// convenience layer on top of the handle.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// Compound key namespacing one logical cache's entries inside the shared
/// in-process store.
///
/// Two keys are equal iff both the cache name and the raw key are equal, so
/// two differently-named logical caches sharing one physical store cannot
/// collide on identical raw keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    name: String,
    key: String,
}

impl EntryKey {
    /// Creates a compound key from a cache name and a raw caller key.
    #[must_use]
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }

    /// The cache name component.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw caller key component.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A mutable in-process cache entry.
///
/// The caller sets a value and optional expirations on the entry; dropping
/// the entry publishes it to the backend (commit-on-drop). An entry dropped
/// without a value set is not stored.
pub trait MemoryEntry: Send {
    /// The raw caller key this entry was created for.
    fn key(&self) -> &str;

    /// Sets the value to publish on drop.
    fn set_value(&mut self, value: CacheValue);

    /// The value set so far, if any.
    fn value(&self) -> Option<&CacheValue>;

    /// Sets the absolute expiration, relative to now.
    fn set_absolute_ttl(&mut self, ttl: Duration);

    /// Sets the sliding expiration.
    fn set_sliding_ttl(&mut self, ttl: Duration);
}

impl core::fmt::Debug for dyn MemoryEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryEntry").field("key", &self.key()).finish_non_exhaustive()
    }
}

/// The shared in-process cache store.
///
/// Implementations must be thread-safe (`Send + Sync`). Exactly one
/// instance is shared by every named handle in a process; keys arrive
/// already namespaced as [`EntryKey`]s.
pub trait MemoryBackend: Send + Sync {
    /// Creates a mutable entry for the given key.
    ///
    /// The entry publishes to the store when dropped with a value set.
    fn create_entry(&self, key: EntryKey) -> Box<dyn MemoryEntry>;

    /// Looks up the value stored under the given key.
    fn try_get(&self, key: &EntryKey) -> Option<CacheValue>;

    /// Removes the value stored under the given key, if any.
    fn remove(&self, key: &EntryKey);

    /// Releases the store's resources.
    ///
    /// Process-lifetime operation; implementations should tolerate repeated
    /// calls.
    fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(key: &EntryKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_entry_keys_equal_iff_both_components_equal() {
        let a = EntryKey::new("users", "alice");
        assert_eq!(a, EntryKey::new("users", "alice"));
        assert_ne!(a, EntryKey::new("sessions", "alice"));
        assert_ne!(a, EntryKey::new("users", "bob"));
    }

    #[test]
    fn test_equal_keys_hash_identically() {
        let a = EntryKey::new("users", "alice");
        let b = EntryKey::new("users", "alice");
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_name_and_key_do_not_blur_together() {
        // "ab" + "c" must not collide with "a" + "bc".
        assert_ne!(EntryKey::new("ab", "c"), EntryKey::new("a", "bc"));
    }

    // Compile-time test that MemoryBackend is object-safe
    fn _assert_backend_object_safe(_: &dyn MemoryBackend) {}
}
