//! Distributed backend collaborator traits.
//!
//! The distributed store is byte-oriented and remote, so every operation is
//! fallible and comes in a synchronous and an asynchronous form with
//! identical semantics. Failures are reported through the opaque
//! [`BackendError`](crate::BackendError) and propagate unchanged through
//! the policy layer.

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};

use crate::error::BackendError;

/// Expiration options attached to a distributed `set`.
///
/// The three fields are mutually independent; a policy-enforcing handle
/// only injects an expiration when the caller set none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributedEntryOptions {
    /// Expire at an absolute point in time.
    pub absolute_expiration: Option<OffsetDateTime>,
    /// Expire a fixed interval after the write, relative to now.
    pub absolute_ttl: Option<Duration>,
    /// Expire a fixed interval after the last access.
    pub sliding_ttl: Option<Duration>,
}

impl DistributedEntryOptions {
    /// Creates options with no expiration set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the absolute point-in-time expiration.
    #[must_use]
    pub fn with_absolute_expiration(mut self, at: OffsetDateTime) -> Self {
        self.absolute_expiration = Some(at);
        self
    }

    /// Sets the absolute expiration relative to now.
    #[must_use]
    pub fn with_absolute_ttl(mut self, ttl: Duration) -> Self {
        self.absolute_ttl = Some(ttl);
        self
    }

    /// Sets the sliding expiration.
    #[must_use]
    pub fn with_sliding_ttl(mut self, ttl: Duration) -> Self {
        self.sliding_ttl = Some(ttl);
        self
    }

    /// Returns `true` if any of the three expiration fields is set.
    #[must_use]
    pub fn has_expiration(&self) -> bool {
        self.absolute_expiration.is_some()
            || self.absolute_ttl.is_some()
            || self.sliding_ttl.is_some()
    }
}

/// The shared distributed cache store.
///
/// Implementations must be thread-safe (`Send + Sync`). Keys arrive already
/// formatted by the policy layer; values are opaque bytes. Cancelling an
/// asynchronous operation is dropping its future.
#[async_trait]
pub trait DistributedBackend: Send + Sync {
    /// Reads the bytes stored under a key. `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Asynchronous form of [`get`](Self::get).
    async fn get_async(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Stores bytes under a key with the given expiration options.
    fn set(
        &self,
        key: &str,
        value: Vec<u8>,
        options: DistributedEntryOptions,
    ) -> Result<(), BackendError>;

    /// Asynchronous form of [`set`](Self::set).
    async fn set_async(
        &self,
        key: &str,
        value: Vec<u8>,
        options: DistributedEntryOptions,
    ) -> Result<(), BackendError>;

    /// Resets a key's sliding expiration window without reading it.
    fn refresh(&self, key: &str) -> Result<(), BackendError>;

    /// Asynchronous form of [`refresh`](Self::refresh).
    async fn refresh_async(&self, key: &str) -> Result<(), BackendError>;

    /// Removes the value stored under a key, if any.
    fn remove(&self, key: &str) -> Result<(), BackendError>;

    /// Asynchronous form of [`remove`](Self::remove).
    async fn remove_async(&self, key: &str) -> Result<(), BackendError>;
}
