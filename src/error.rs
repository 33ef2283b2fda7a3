//! Error types shared across the crate.
//!
//! ERROR HANDLING
//! ==============
//! Store failures inside the engine are caught where the request is made and
//! logged; the engine never surfaces them as blocking errors. Only the export
//! helper hands its error back to the caller. The single unrecoverable error
//! is a drawing surface that cannot be mounted.

use std::path::PathBuf;

use crate::model::InvalidDimensions;

// =============================================================================
// STORE
// =============================================================================

/// Errors produced by remote store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("store request failed: {0}")]
    ApiRequest(String),

    /// The store answered with a non-success HTTP status.
    #[error("store response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not the expected JSON document.
    #[error("store response parse failed: {0}")]
    ApiParse(String),

    /// The response parsed but carried dimensions that fail validation.
    #[error("store returned invalid dimensions: {0}")]
    InvalidPayload(#[from] InvalidDimensions),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl StoreError {
    /// Stable machine-readable code, used as a structured log field.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::InvalidPayload(_) => "E_INVALID_PAYLOAD",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// Whether a later identical request could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// SURFACE
// =============================================================================

/// Errors raised by a drawing surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The host has no mount point to attach the drawing area to.
    #[error("surface mount point missing: {0}")]
    MissingMount(String),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// SYNC
// =============================================================================

/// Top-level failure kinds reported by the engine and the export helper.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The initial fetch from the store failed.
    #[error("failed to load dimensions: {0}")]
    LoadFailure(#[source] StoreError),

    /// A debounced write to the store failed.
    #[error("failed to update dimensions: {0}")]
    PersistFailure(#[source] StoreError),

    /// The export fetch failed.
    #[error("failed to download dimensions: {0}")]
    DownloadFailure(#[source] StoreError),

    /// The exported payload could not be written to disk.
    #[error("failed to write export to {path}: {source}")]
    ExportWrite { path: PathBuf, source: std::io::Error },

    /// The drawing surface could not be initialized.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
