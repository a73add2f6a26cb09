//! Typed payload convenience over the byte-oriented distributed cache.
//!
//! The distributed cache deals in bytes; how a typed value becomes bytes is
//! a caller decision, not something inferred from the type at runtime. A
//! [`PayloadCodec`] is that decision made explicit, and
//! [`DistributedCacheExt`] threads it through any handle — including no-op
//! handles, where an absent read simply stays absent.

use serde::Serialize;
use serde::de::DeserializeOwned;

use cachemux_backend::{CacheError, CacheResult, DistributedEntryOptions};

use crate::handle::DistributedCache;

/// A caller-selected strategy for encoding typed payloads as bytes.
pub trait PayloadCodec {
    /// Encodes a value into bytes.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Codec` when the value cannot be encoded.
    fn encode<T: Serialize>(&self, value: &T) -> CacheResult<Vec<u8>>;

    /// Decodes a value from bytes.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Codec` when the bytes cannot be decoded as `T`.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> CacheResult<T>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl PayloadCodec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> CacheResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(|err| CacheError::codec(err.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> CacheResult<T> {
        serde_json::from_slice(data).map_err(|err| CacheError::codec(err.to_string()))
    }
}

/// Typed convenience access over any [`DistributedCache`].
///
/// Not object-safe; call these through a concrete or `dyn DistributedCache`
/// receiver.
#[allow(async_fn_in_trait)]
pub trait DistributedCacheExt: DistributedCache {
    /// Reads and decodes a typed value with an explicit codec.
    fn get_with<T, C>(&self, codec: &C, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned,
        C: PayloadCodec,
    {
        match self.get(key)? {
            Some(data) => Ok(Some(codec.decode(&data)?)),
            None => Ok(None),
        }
    }

    /// Encodes and stores a typed value with an explicit codec.
    fn set_with<T, C>(
        &self,
        codec: &C,
        key: &str,
        value: &T,
        options: DistributedEntryOptions,
    ) -> CacheResult<()>
    where
        T: Serialize,
        C: PayloadCodec,
    {
        let data = codec.encode(value)?;
        self.set(key, data, options)
    }

    /// Asynchronous form of [`get_with`](Self::get_with).
    async fn get_with_async<T, C>(&self, codec: &C, key: &str) -> CacheResult<Option<T>>
    where
        T: DeserializeOwned,
        C: PayloadCodec + Sync,
    {
        match self.get_async(key).await? {
            Some(data) => Ok(Some(codec.decode(&data)?)),
            None => Ok(None),
        }
    }

    /// Asynchronous form of [`set_with`](Self::set_with).
    async fn set_with_async<T, C>(
        &self,
        codec: &C,
        key: &str,
        value: &T,
        options: DistributedEntryOptions,
    ) -> CacheResult<()>
    where
        T: Serialize + Sync,
        C: PayloadCodec + Sync,
    {
        let data = codec.encode(value)?;
        self.set_async(key, data, options).await
    }

    /// [`get_with`](Self::get_with) using [`JsonCodec`].
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        self.get_with(&JsonCodec, key)
    }

    /// [`set_with`](Self::set_with) using [`JsonCodec`].
    fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        options: DistributedEntryOptions,
    ) -> CacheResult<()> {
        self.set_with(&JsonCodec, key, value, options)
    }

    /// [`get_with_async`](Self::get_with_async) using [`JsonCodec`].
    async fn get_json_async<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        self.get_with_async(&JsonCodec, key).await
    }

    /// [`set_with_async`](Self::set_with_async) using [`JsonCodec`].
    async fn set_json_async<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        options: DistributedEntryOptions,
    ) -> CacheResult<()> {
        self.set_with_async(&JsonCodec, key, value, options).await
    }
}

impl<C: DistributedCache + ?Sized> DistributedCacheExt for C {}
