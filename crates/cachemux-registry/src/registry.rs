//! The named-cache registry.
//!
//! A [`CacheRegistry`] is the one object application code talks to. It owns
//! the shared backends, the policy table and the two name-to-handle maps,
//! and hands out one singleton handle per name per backend kind. Its
//! lifetime is tied to application startup/shutdown; there are no
//! process-wide statics.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use cachemux_backend::{
    CacheError, CacheResult, DistributedBackend, MemoryBackend, NoopProtector,
    ProtectionProvider, Protector,
};
use cachemux_policy::PolicyTable;

use crate::distributed_guard::DistributedCacheGuard;
use crate::handle::{DistributedCache, MemoryCache};
use crate::memory_guard::MemoryCacheGuard;
use crate::noop::{NoopDistributedCache, NoopMemoryCache};

/// Multiplexes named, policy-bound caches over the shared backends.
///
/// Handles are created lazily on first request for a name and live for the
/// registry's lifetime; only cache *entries* expire, never handles. The
/// get-or-create step is atomic per name: under concurrent first access
/// exactly one handle is constructed and every caller converges on it.
///
/// # Example
///
/// ```ignore
/// use cachemux_registry::CacheRegistry;
///
/// let registry = CacheRegistry::builder()
///     .with_policies(table)
///     .with_distributed_backend(redis)
///     .build();
///
/// let sessions = registry.distributed_cache("sessions")?;
/// sessions.set("alice", payload, Default::default())?;
/// ```
pub struct CacheRegistry {
    policies: PolicyTable,
    memory_backend: Option<Arc<dyn MemoryBackend>>,
    distributed_backend: Option<Arc<dyn DistributedBackend>>,
    protection: Option<Arc<dyn ProtectionProvider>>,
    memory_handles: DashMap<String, Arc<dyn MemoryCache>>,
    distributed_handles: DashMap<String, Arc<dyn DistributedCache>>,
}

impl CacheRegistry {
    /// Creates a builder for a registry.
    #[must_use]
    pub fn builder() -> CacheRegistryBuilder {
        CacheRegistryBuilder::new()
    }

    /// Returns the in-process cache handle for `name`, creating it on
    /// first request.
    ///
    /// Names are case-sensitive here: two case-variant names get distinct
    /// handles, while policy resolution inside the handle remains
    /// case-insensitive. Without a configured in-process backend the
    /// returned handle is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty name.
    pub fn memory_cache(&self, name: &str) -> CacheResult<Arc<dyn MemoryCache>> {
        Self::ensure_name(name)?;

        let handle = self
            .memory_handles
            .entry(name.to_string())
            .or_insert_with(|| match &self.memory_backend {
                Some(backend) => {
                    debug!(cache = %name, "created memory cache handle");
                    Arc::new(MemoryCacheGuard::new(
                        name,
                        Arc::clone(backend),
                        &self.policies,
                    ))
                }
                None => {
                    info!(cache = %name, "no in-process backend configured, serving no-op cache");
                    Arc::new(NoopMemoryCache)
                }
            })
            .value()
            .clone();

        Ok(handle)
    }

    /// Returns the distributed cache handle for `name`, creating it on
    /// first request.
    ///
    /// The handle's protector is created with purpose = the exact cache
    /// name, so payloads protected for one cache cannot be replayed into
    /// another. Without a configured protection provider protection is the
    /// identity; without a configured distributed backend the returned
    /// handle is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidArgument` for an empty name.
    pub fn distributed_cache(&self, name: &str) -> CacheResult<Arc<dyn DistributedCache>> {
        Self::ensure_name(name)?;

        let handle = self
            .distributed_handles
            .entry(name.to_string())
            .or_insert_with(|| match &self.distributed_backend {
                Some(backend) => {
                    debug!(cache = %name, "created distributed cache handle");
                    Arc::new(DistributedCacheGuard::new(
                        name,
                        Arc::clone(backend),
                        self.protector_for(name),
                        &self.policies,
                    ))
                }
                None => {
                    info!(cache = %name, "no distributed backend configured, serving no-op cache");
                    Arc::new(NoopDistributedCache)
                }
            })
            .value()
            .clone();

        Ok(handle)
    }

    /// The policy table this registry resolves names against.
    #[must_use]
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Number of in-process handles created so far.
    #[must_use]
    pub fn memory_handle_count(&self) -> usize {
        self.memory_handles.len()
    }

    /// Number of distributed handles created so far.
    #[must_use]
    pub fn distributed_handle_count(&self) -> usize {
        self.distributed_handles.len()
    }

    fn protector_for(&self, name: &str) -> Box<dyn Protector> {
        match &self.protection {
            Some(provider) => provider.create_protector(name),
            None => Box::new(NoopProtector),
        }
    }

    fn ensure_name(name: &str) -> CacheResult<()> {
        if name.is_empty() {
            return Err(CacheError::invalid_argument("'name' cannot be empty"));
        }
        Ok(())
    }
}

/// Builder for [`CacheRegistry`].
///
/// Every part is optional: an empty builder yields a registry that serves
/// only no-op handles under an empty policy table.
#[derive(Default)]
pub struct CacheRegistryBuilder {
    policies: PolicyTable,
    memory_backend: Option<Arc<dyn MemoryBackend>>,
    distributed_backend: Option<Arc<dyn DistributedBackend>>,
    protection: Option<Arc<dyn ProtectionProvider>>,
}

impl CacheRegistryBuilder {
    /// Creates a builder with no backends and an empty policy table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy table names are resolved against.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    /// Sets the shared in-process backend.
    #[must_use]
    pub fn with_memory_backend(mut self, backend: Arc<dyn MemoryBackend>) -> Self {
        self.memory_backend = Some(backend);
        self
    }

    /// Sets the shared distributed backend.
    #[must_use]
    pub fn with_distributed_backend(mut self, backend: Arc<dyn DistributedBackend>) -> Self {
        self.distributed_backend = Some(backend);
        self
    }

    /// Sets the at-rest protection provider.
    #[must_use]
    pub fn with_protection(mut self, provider: Arc<dyn ProtectionProvider>) -> Self {
        self.protection = Some(provider);
        self
    }

    /// Builds the registry.
    #[must_use]
    pub fn build(self) -> CacheRegistry {
        CacheRegistry {
            policies: self.policies,
            memory_backend: self.memory_backend,
            distributed_backend: self.distributed_backend,
            protection: self.protection,
            memory_handles: DashMap::new(),
            distributed_handles: DashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let registry = CacheRegistry::builder().build();
        assert!(registry.memory_cache("").unwrap_err().is_invalid_argument());
        assert!(
            registry
                .distributed_cache("")
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn test_empty_registry_serves_noop_handles() {
        let registry = CacheRegistry::builder().build();

        let memory = registry.memory_cache("users").unwrap();
        assert!(memory.try_get("k").unwrap().is_none());

        let distributed = registry.distributed_cache("users").unwrap();
        distributed
            .set("k", b"v".to_vec(), Default::default())
            .unwrap();
        assert!(distributed.get("k").unwrap().is_none());
    }

    #[test]
    fn test_handle_counts_track_created_handles() {
        let registry = CacheRegistry::builder().build();
        assert_eq!(registry.memory_handle_count(), 0);

        registry.memory_cache("a").unwrap();
        registry.memory_cache("a").unwrap();
        registry.memory_cache("b").unwrap();
        registry.distributed_cache("a").unwrap();

        assert_eq!(registry.memory_handle_count(), 2);
        assert_eq!(registry.distributed_handle_count(), 1);
    }

    #[test]
    fn test_registry_exposes_its_policy_table() {
        let table = PolicyTable::from_pairs([(
            "users",
            cachemux_policy::CachePolicy::default().with_enabled(false),
        )]);
        let registry = CacheRegistry::builder().with_policies(table).build();
        assert!(registry.policies().has("users"));
        assert_eq!(registry.policies().len(), 1);
    }
}
