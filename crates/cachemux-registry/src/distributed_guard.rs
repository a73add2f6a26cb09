//! Policy-enforcing guard over the shared distributed backend.
//!
//! The guard prefixes every key with `"{name}:"`, injects the policy's
//! expiration into set options the caller left blank, protects and
//! unprotects payloads under an encrypted policy and short-circuits
//! everything when the policy disables the cache.
//!
//! Keys are plain strings rather than a compound structure: distributed
//! stores are externally inspectable, so the namespacing stays readable.

use std::sync::Arc;

use async_trait::async_trait;
use cachemux_backend::{
    CacheError, CacheResult, DistributedBackend, DistributedEntryOptions, Protector,
};
use cachemux_policy::{CachePolicy, ExpiryKind, PolicyTable};

use crate::handle::{DistributedCache, ensure_key};

/// One named cache's view over the shared distributed backend.
pub struct DistributedCacheGuard {
    name: String,
    backend: Arc<dyn DistributedBackend>,
    protector: Box<dyn Protector>,
    policy: CachePolicy,
}

impl DistributedCacheGuard {
    /// Creates a guard for `name`, resolving its effective policy from the
    /// table.
    ///
    /// `protector` must already be scoped to this cache's name; the
    /// registry creates it with purpose = the exact cache name.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        backend: Arc<dyn DistributedBackend>,
        protector: Box<dyn Protector>,
        policies: &PolicyTable,
    ) -> Self {
        let name = name.into();
        let policy = policies.resolve(&name).clone();
        Self {
            name,
            backend,
            protector,
            policy,
        }
    }

    /// The cache name this guard was created for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn format_key(&self, key: &str) -> String {
        format!("{}:{}", self.name, key)
    }

    /// Injects the policy expiration when the caller set none of the three
    /// fields. A field the caller set explicitly is never overridden.
    fn configure_options(&self, mut options: DistributedEntryOptions) -> DistributedEntryOptions {
        if !options.has_expiration() {
            match self.policy.expiry.kind {
                ExpiryKind::Absolute => options.absolute_ttl = Some(self.policy.expiry.ttl),
                ExpiryKind::Sliding => options.sliding_ttl = Some(self.policy.expiry.ttl),
                ExpiryKind::None => {}
            }
        }
        options
    }

    fn protect(&self, value: Vec<u8>) -> CacheResult<Vec<u8>> {
        if !self.policy.encrypted {
            return Ok(value);
        }
        self.protector
            .protect(&value)
            .map_err(|err| CacheError::protection(err.to_string()))
    }

    fn unprotect(&self, data: Option<Vec<u8>>) -> CacheResult<Option<Vec<u8>>> {
        match data {
            Some(bytes) if self.policy.encrypted => self
                .protector
                .unprotect(&bytes)
                .map(Some)
                .map_err(|err| CacheError::protection(err.to_string())),
            other => Ok(other),
        }
    }

    fn check_set_args(key: &str, value: &[u8]) -> CacheResult<()> {
        ensure_key(key)?;
        if value.is_empty() {
            return Err(CacheError::invalid_argument("'value' cannot be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl DistributedCache for DistributedCacheGuard {
    fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        ensure_key(key)?;

        if !self.policy.enabled {
            return Ok(None);
        }

        let data = self.backend.get(&self.format_key(key))?;
        self.unprotect(data)
    }

    async fn get_async(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        ensure_key(key)?;

        if !self.policy.enabled {
            return Ok(None);
        }

        let data = self.backend.get_async(&self.format_key(key)).await?;
        self.unprotect(data)
    }

    fn set(&self, key: &str, value: Vec<u8>, options: DistributedEntryOptions) -> CacheResult<()> {
        Self::check_set_args(key, &value)?;

        if !self.policy.enabled {
            return Ok(());
        }

        let options = self.configure_options(options);
        let data = self.protect(value)?;
        self.backend.set(&self.format_key(key), data, options)?;
        Ok(())
    }

    async fn set_async(
        &self,
        key: &str,
        value: Vec<u8>,
        options: DistributedEntryOptions,
    ) -> CacheResult<()> {
        Self::check_set_args(key, &value)?;

        if !self.policy.enabled {
            return Ok(());
        }

        let options = self.configure_options(options);
        let data = self.protect(value)?;
        self.backend
            .set_async(&self.format_key(key), data, options)
            .await?;
        Ok(())
    }

    fn refresh(&self, key: &str) -> CacheResult<()> {
        ensure_key(key)?;

        if self.policy.enabled {
            self.backend.refresh(&self.format_key(key))?;
        }
        Ok(())
    }

    async fn refresh_async(&self, key: &str) -> CacheResult<()> {
        ensure_key(key)?;

        if self.policy.enabled {
            self.backend.refresh_async(&self.format_key(key)).await?;
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        ensure_key(key)?;

        if self.policy.enabled {
            self.backend.remove(&self.format_key(key))?;
        }
        Ok(())
    }

    async fn remove_async(&self, key: &str) -> CacheResult<()> {
        ensure_key(key)?;

        if self.policy.enabled {
            self.backend.remove_async(&self.format_key(key)).await?;
        }
        Ok(())
    }
}
