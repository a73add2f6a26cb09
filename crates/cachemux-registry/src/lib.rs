//! # cachemux-registry
//!
//! Named-cache resolution and policy enforcement for CacheMux.
//!
//! Application code asks a [`CacheRegistry`] for a cache by name and gets
//! back a singleton, thread-safe handle that enforces the name's effective
//! policy transparently: key namespacing, expiration injection, payload
//! protection and enable/disable short-circuiting all happen behind the
//! plain cache surface.
//!
//! ## Overview
//!
//! - [`CacheRegistry`] / [`CacheRegistryBuilder`]: maps names to handles,
//!   one per backend kind, exactly once per name even under concurrent
//!   first access. Serves inert no-op handles when no backend is wired up.
//! - [`MemoryCache`] / [`DistributedCache`]: the handle traits callers see.
//! - [`MemoryCacheGuard`] / [`DistributedCacheGuard`]: the policy-enforcing
//!   decorators behind those traits.
//! - [`MemoryCacheExt`] / [`DistributedCacheExt`]: typed convenience access
//!   on top of the untyped handle surfaces.
//!
//! ## Example
//!
//! ```ignore
//! use cachemux_registry::{CacheRegistry, DistributedCacheExt};
//! use cachemux_policy::PolicyTable;
//!
//! let registry = CacheRegistry::builder()
//!     .with_policies(PolicyTable::from_raw(raw_sections)?)
//!     .with_memory_backend(memory)
//!     .with_distributed_backend(redis)
//!     .with_protection(protection)
//!     .build();
//!
//! let sessions = registry.distributed_cache("sessions")?;
//! sessions.set_json("alice", &session, Default::default())?;
//! ```

mod codec;
mod distributed_guard;
mod handle;
mod memory_guard;
mod noop;
mod registry;

pub use codec::{DistributedCacheExt, JsonCodec, PayloadCodec};
pub use distributed_guard::DistributedCacheGuard;
pub use handle::{DistributedCache, MemoryCache, MemoryCacheExt};
pub use memory_guard::{DetachedEntry, MemoryCacheGuard};
pub use noop::{NoopDistributedCache, NoopMemoryCache};
pub use registry::{CacheRegistry, CacheRegistryBuilder};

/// Prelude module for convenient imports.
///
/// ```
/// use cachemux_registry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{DistributedCacheExt, JsonCodec, PayloadCodec};
    pub use crate::handle::{DistributedCache, MemoryCache, MemoryCacheExt};
    pub use crate::registry::{CacheRegistry, CacheRegistryBuilder};
    pub use cachemux_backend::prelude::*;
    pub use cachemux_policy::prelude::*;
}
