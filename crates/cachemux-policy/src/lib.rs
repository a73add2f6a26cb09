//! # cachemux-policy
//!
//! Cache policy model and name-to-policy resolution for CacheMux.
//!
//! This crate holds the configuration side of the named-cache layer:
//!
//! - [`CachePolicy`] / [`ExpirySettings`] / [`ExpiryKind`]: the typed,
//!   immutable policy values applied to a named cache.
//! - [`RawPolicy`] / [`RawExpiry`]: string-typed carriers a structured
//!   configuration source feeds in, with strict parsing that fails loudly.
//! - [`PolicyTable`]: the immutable, case-insensitive name-to-policy map
//!   with `override` / `default` pseudo-entry precedence.
//!
//! Tables are built once at startup; lookups on a built table cannot fail.
//!
//! ## Example
//!
//! ```
//! use cachemux_policy::{CachePolicy, ExpirySettings, PolicyTable};
//! use time::Duration;
//!
//! let table = PolicyTable::from_pairs([
//!     ("sessions", CachePolicy::default()
//!         .with_expiry(ExpirySettings::sliding(Duration::minutes(20)))),
//!     ("default", CachePolicy::default().with_enabled(false)),
//! ]);
//!
//! assert!(table.resolve("sessions").enabled);
//! assert!(!table.resolve("unconfigured").enabled);
//! ```

mod error;
mod policy;
mod raw;
mod table;

pub use error::{ConfigError, ConfigResult};
pub use policy::{CachePolicy, ExpiryKind, ExpirySettings};
pub use raw::{RawExpiry, RawPolicy, parse_ttl};
pub use table::PolicyTable;

/// Prelude module for convenient imports.
///
/// ```
/// use cachemux_policy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::policy::{CachePolicy, ExpiryKind, ExpirySettings};
    pub use crate::raw::{RawExpiry, RawPolicy, parse_ttl};
    pub use crate::table::PolicyTable;
}
