//! Consumer-facing cache handle traits.
//!
//! These are the surfaces application code sees after asking the registry
//! for a cache by name. One trait exists per backend kind; both the
//! policy-enforcing guards and the no-op stand-ins implement them, so a
//! caller can always operate on whatever handle the registry returned.

use std::sync::Arc;

use async_trait::async_trait;
use cachemux_backend::{
    CacheError, CacheResult, CacheValue, DistributedEntryOptions, MemoryEntry,
};

/// A named, policy-bound view over the in-process cache.
pub trait MemoryCache: Send + Sync {
    /// Creates a mutable entry for the given key.
    ///
    /// The entry publishes to the cache when dropped with a value set.
    /// Under a disabled policy the returned entry is detached and never
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key.
    fn create_entry(&self, key: &str) -> CacheResult<Box<dyn MemoryEntry>>;

    /// Looks up the value stored under the given key.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key.
    fn try_get(&self, key: &str) -> CacheResult<Option<CacheValue>>;

    /// Removes the value stored under the given key, if any.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key.
    fn remove(&self, key: &str) -> CacheResult<()>;

    /// Closes the shared underlying store.
    ///
    /// One store is shared by every named handle, so this is a
    /// process-lifetime operation, idempotent and rare.
    fn close(&self);
}

impl core::fmt::Debug for dyn MemoryCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryCache").finish_non_exhaustive()
    }
}

/// A named, policy-bound view over the distributed cache.
///
/// Every operation comes in a synchronous and an asynchronous form with
/// identical semantics; cancelling the asynchronous form is dropping its
/// future, which is forwarded verbatim to the backend call.
#[async_trait]
pub trait DistributedCache: Send + Sync {
    /// Reads the bytes stored under a key. `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key.
    fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Asynchronous form of [`get`](Self::get).
    async fn get_async(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;

    /// Stores bytes under a key with the given expiration options.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key or an empty
    /// value.
    fn set(&self, key: &str, value: Vec<u8>, options: DistributedEntryOptions) -> CacheResult<()>;

    /// Asynchronous form of [`set`](Self::set).
    async fn set_async(
        &self,
        key: &str,
        value: Vec<u8>,
        options: DistributedEntryOptions,
    ) -> CacheResult<()>;

    /// Resets a key's sliding expiration window without reading it.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key.
    fn refresh(&self, key: &str) -> CacheResult<()>;

    /// Asynchronous form of [`refresh`](Self::refresh).
    async fn refresh_async(&self, key: &str) -> CacheResult<()>;

    /// Removes the value stored under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty key.
    fn remove(&self, key: &str) -> CacheResult<()>;

    /// Asynchronous form of [`remove`](Self::remove).
    async fn remove_async(&self, key: &str) -> CacheResult<()>;
}

impl core::fmt::Debug for dyn DistributedCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DistributedCache").finish_non_exhaustive()
    }
}

/// Typed convenience access over any [`MemoryCache`].
pub trait MemoryCacheExt: MemoryCache {
    /// Stores a typed value under the given key.
    ///
    /// Creates an entry, sets the value and commits it in one step.
    fn set_value<T: Send + Sync + 'static>(&self, key: &str, value: T) -> CacheResult<()> {
        let mut entry = self.create_entry(key)?;
        entry.set_value(Arc::new(value));
        drop(entry);
        Ok(())
    }

    /// Reads a typed value stored under the given key.
    ///
    /// Returns `None` when the key is absent or the stored value has a
    /// different type.
    fn get_value<T: Send + Sync + 'static>(&self, key: &str) -> CacheResult<Option<Arc<T>>> {
        Ok(self.try_get(key)?.and_then(|value| value.downcast::<T>().ok()))
    }
}

impl<C: MemoryCache + ?Sized> MemoryCacheExt for C {}

/// Rejects the empty key every key-bearing handle operation refuses.
pub(crate) fn ensure_key(key: &str) -> CacheResult<()> {
    if key.is_empty() {
        return Err(CacheError::invalid_argument("'key' cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that the handle traits are object-safe
    fn _assert_memory_object_safe(_: &dyn MemoryCache) {}
    fn _assert_distributed_object_safe(_: &dyn DistributedCache) {}

    #[test]
    fn test_ensure_key_rejects_only_the_empty_key() {
        assert!(ensure_key("k").is_ok());
        let err = ensure_key("").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
