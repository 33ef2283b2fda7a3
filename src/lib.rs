//! Rectangle dimension sync engine.
//!
//! A single rectangle is edited from three places at once: pointer gestures
//! on a drawing surface, two numeric fields (width and height), and a remote
//! store that holds the persisted value. This crate reconciles those sources
//! into one [`model::Dimensions`] value without echoing programmatic updates
//! back as user edits and without writing to the store on every keystroke or
//! pointer move.
//!
//! The host (a browser shell, a GUI, or the console binary in `main.rs`) is
//! responsible only for forwarding raw pointer callbacks and field edits.
//! Drawing primitives are supplied through [`surface::ShapeSurface`] and the
//! store through [`store::RemoteStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event loop that owns the sync state machine |
//! | [`model`] | The `{width, height}` value type and its clamp policy |
//! | [`field`] | Observable width/height cells with silent and user setters |
//! | [`surface`] | Drawing provider trait and the gesture adapter |
//! | [`debounce`] | Single-slot quiet-period timer |
//! | [`store`] | Remote store contract, HTTP and in-memory backends |
//! | [`export`] | Download of the persisted payload to a local file |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Error types shared across modules |
//! | [`consts`] | Shared numeric constants (anchor point, quiet period, etc.) |

pub mod config;
pub mod consts;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod export;
pub mod field;
pub mod model;
pub mod store;
pub mod surface;
