//! Inert cache handles served when no backend is configured.
//!
//! The registry never fails merely because caching was not wired up: it
//! hands out these zero-sized stand-ins instead. Reads report absent,
//! writes and removes are accepted and discarded, and nothing is
//! validated — a caller can always safely call into a returned handle.

use async_trait::async_trait;
use cachemux_backend::{CacheResult, CacheValue, DistributedEntryOptions, MemoryEntry};

use crate::handle::{DistributedCache, MemoryCache};
use crate::memory_guard::DetachedEntry;

/// Inert in-process cache handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMemoryCache;

impl MemoryCache for NoopMemoryCache {
    fn create_entry(&self, key: &str) -> CacheResult<Box<dyn MemoryEntry>> {
        Ok(Box::new(DetachedEntry::new(key)))
    }

    fn try_get(&self, _key: &str) -> CacheResult<Option<CacheValue>> {
        Ok(None)
    }

    fn remove(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    fn close(&self) {}
}

/// Inert distributed cache handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDistributedCache;

#[async_trait]
impl DistributedCache for NoopDistributedCache {
    fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn get_async(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(None)
    }

    fn set(
        &self,
        _key: &str,
        _value: Vec<u8>,
        _options: DistributedEntryOptions,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn set_async(
        &self,
        _key: &str,
        _value: Vec<u8>,
        _options: DistributedEntryOptions,
    ) -> CacheResult<()> {
        Ok(())
    }

    fn refresh(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn refresh_async(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn remove_async(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }
}
