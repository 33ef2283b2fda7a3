//! Remote store: the CRUD contract the engine persists through.
//!
//! DESIGN
//! ======
//! The engine depends only on the [`RemoteStore`] trait and receives an
//! implementation through its constructor. [`HttpStore`] talks to the real
//! endpoint; [`MemoryStore`] keeps the value in process and records every
//! write, which is what the engine tests run against.
//!
//! CONTRACT
//! ========
//! - `GET {base}/rectangle` → `{width, height}`
//! - `PUT {base}/rectangle` with `{width, height}` → updated resource
//! - `GET {base}/rectangle/download` → raw bytes of a JSON document

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::model::Dimensions;

/// Async access to the persisted rectangle dimensions.
#[async_trait::async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the current persisted dimensions.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the payload is invalid.
    async fn get_dimensions(&self) -> Result<Dimensions, StoreError>;

    /// Replace the persisted dimensions, returning the stored value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the store rejects it.
    async fn update_dimensions(&self, dims: Dimensions) -> Result<Dimensions, StoreError>;

    /// Fetch the downloadable payload as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails.
    async fn download(&self) -> Result<Vec<u8>, StoreError>;
}
