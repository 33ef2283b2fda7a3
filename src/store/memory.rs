//! In-process store that keeps the value in memory and records every call.
//!
//! Failures can be injected per operation, so the engine's degrade-silently
//! behavior can be exercised without a server.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::RemoteStore;
use crate::error::StoreError;
use crate::model::Dimensions;

#[derive(Debug, Default)]
struct Inner {
    current: Option<Dimensions>,
    updates: Vec<Dimensions>,
    loads: usize,
    fail_load: Option<u16>,
    fail_update: Option<u16>,
}

/// Memory-backed [`RemoteStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create a store holding `dims`.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self { inner: Mutex::new(Inner { current: Some(dims), ..Inner::default() }) }
    }

    /// Create a store with nothing persisted yet; loads answer 404.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make subsequent loads fail with `status` (`None` clears it).
    pub fn fail_loads(&self, status: Option<u16>) {
        self.lock().fail_load = status;
    }

    /// Make subsequent updates fail with `status` (`None` clears it).
    pub fn fail_updates(&self, status: Option<u16>) {
        self.lock().fail_update = status;
    }

    /// The currently persisted value.
    #[must_use]
    pub fn current(&self) -> Option<Dimensions> {
        self.lock().current
    }

    /// Every update request received, in order, including failed ones.
    #[must_use]
    pub fn updates(&self) -> Vec<Dimensions> {
        self.lock().updates.clone()
    }

    /// Number of load requests received.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }
}

fn status_error(status: u16) -> StoreError {
    StoreError::ApiResponse { status, body: String::new() }
}

#[async_trait::async_trait]
impl RemoteStore for MemoryStore {
    async fn get_dimensions(&self) -> Result<Dimensions, StoreError> {
        let mut inner = self.lock();
        inner.loads += 1;
        if let Some(status) = inner.fail_load {
            return Err(status_error(status));
        }
        inner.current.ok_or_else(|| status_error(404))
    }

    async fn update_dimensions(&self, dims: Dimensions) -> Result<Dimensions, StoreError> {
        let mut inner = self.lock();
        inner.updates.push(dims);
        if let Some(status) = inner.fail_update {
            return Err(status_error(status));
        }
        inner.current = Some(dims);
        Ok(dims)
    }

    async fn download(&self) -> Result<Vec<u8>, StoreError> {
        let current = self.lock().current.ok_or_else(|| status_error(404))?;
        serde_json::to_vec_pretty(&current).map_err(|e| StoreError::ApiParse(e.to_string()))
    }
}
