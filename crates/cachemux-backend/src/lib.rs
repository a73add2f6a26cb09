//! # cachemux-backend
//!
//! Collaborator traits for the CacheMux policy layer.
//!
//! This crate defines the interfaces the policy layer consumes but does not
//! implement: the shared in-process store ([`MemoryBackend`]), the shared
//! distributed store ([`DistributedBackend`]) and the at-rest protection
//! capability ([`ProtectionProvider`]). It contains no cache implementation
//! of its own — eviction, storage, replication and coordination all belong
//! to the backends behind these traits.
//!
//! ## Implementing a backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use cachemux_backend::{BackendError, DistributedBackend, DistributedEntryOptions};
//!
//! struct RedisBackend { /* ... */ }
//!
//! #[async_trait]
//! impl DistributedBackend for RedisBackend {
//!     fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
//!         // ...
//!     }
//!     // ... other methods
//! }
//! ```

mod distributed;
mod error;
mod memory;
mod protection;

pub use distributed::{DistributedBackend, DistributedEntryOptions};
pub use error::{BackendError, CacheError, ErrorCategory};
pub use memory::{CacheValue, EntryKey, MemoryBackend, MemoryEntry};
pub use protection::{NoopProtector, ProtectionError, ProtectionProvider, Protector};

/// Type alias for a cache operation result.
pub type CacheResult<T> = Result<T, CacheError>;

/// Type alias for a shared in-process backend trait object.
pub type DynMemoryBackend = std::sync::Arc<dyn MemoryBackend>;

/// Type alias for a shared distributed backend trait object.
pub type DynDistributedBackend = std::sync::Arc<dyn DistributedBackend>;

/// Prelude module for convenient imports.
///
/// ```
/// use cachemux_backend::prelude::*;
/// ```
pub mod prelude {
    pub use crate::distributed::{DistributedBackend, DistributedEntryOptions};
    pub use crate::error::{BackendError, CacheError, ErrorCategory};
    pub use crate::memory::{CacheValue, EntryKey, MemoryBackend, MemoryEntry};
    pub use crate::protection::{NoopProtector, ProtectionError, ProtectionProvider, Protector};
    pub use crate::{CacheResult, DynDistributedBackend, DynMemoryBackend};
}
