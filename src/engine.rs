//! Sync engine: reconciles field edits, gestures, and the remote store.
//!
//! DESIGN
//! ======
//! One task owns all mutable state: the last valid [`Dimensions`], the
//! surface adapter, and the single persist slot. It runs a `select!` loop over
//! four inputs: host commands (pointer callbacks, teardown), the initial load,
//! the user-edit stream from [`FieldState`], and the debounce deadline. Writes
//! run in a `JoinSet` so a slow store never delays gesture handling.
//!
//! Three paths feed the model:
//! - load: silent field update, then the shape is drawn;
//! - user edit: clamp, then arm the persist slot;
//! - resize gesture: silent field update on every move; the released size
//!   arms the persist slot when `persist_gesture_settles` is on.
//!
//! Drag gestures only move the shape.
//!
//! ERROR HANDLING
//! ==============
//! Load and persist failures are logged and never retried. A failed write
//! leaves the fields as the user left them; the next edit writes again.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;
use tracing::{debug, error, info, trace, warn};

use crate::config::SyncConfig;
use crate::debounce::Debouncer;
use crate::error::{StoreError, SyncError};
use crate::field::{FieldChange, FieldChanges, FieldState};
use crate::model::{Axis, Dimensions};
use crate::store::RemoteStore;
use crate::surface::{GestureEvent, PointerGesture, ShapeState, ShapeSurface, SurfaceAdapter};

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// Waiting on the initial fetch.
    Loading,
    /// Fields are set and the shape is drawn.
    Ready,
    /// The initial fetch or surface setup failed; fields and shape are unset.
    Unloaded,
    /// Teardown finished; no further writes will be issued.
    TornDown,
}

#[derive(Debug)]
enum Command {
    Pointer(PointerGesture),
    Teardown,
}

// =============================================================================
// HANDLE
// =============================================================================

/// Host-side handle to a running engine.
///
/// Dropping every handle tears the engine down, same as [`EngineHandle::teardown`].
#[derive(Clone)]
pub struct EngineHandle {
    commands: mpsc::UnboundedSender<Command>,
    status: watch::Receiver<EngineStatus>,
    shape: watch::Receiver<Option<ShapeState>>,
}

impl EngineHandle {
    /// Forward a live pointer callback from the provider.
    ///
    /// Returns `false` if the engine has already stopped.
    pub fn pointer(&self, gesture: PointerGesture) -> bool {
        self.commands.send(Command::Pointer(gesture)).is_ok()
    }

    /// Ask the engine to cancel pending work and release the surface.
    pub fn teardown(&self) {
        if self.commands.send(Command::Teardown).is_err() {
            debug!("teardown requested after engine stopped");
        }
    }

    #[must_use]
    pub fn status(&self) -> EngineStatus {
        *self.status.borrow()
    }

    /// Wait until the initial load has either succeeded or failed.
    pub async fn wait_until_settled(&self) -> EngineStatus {
        let mut status = self.status.clone();
        match status.wait_for(|s| *s != EngineStatus::Loading).await {
            Ok(s) => *s,
            Err(_) => EngineStatus::TornDown,
        }
    }

    /// The shape as last drawn, if it has been drawn.
    #[must_use]
    pub fn shape(&self) -> Option<ShapeState> {
        *self.shape.borrow()
    }

    /// Observe every shape update.
    #[must_use]
    pub fn subscribe_shape(&self) -> watch::Receiver<Option<ShapeState>> {
        self.shape.clone()
    }
}

// =============================================================================
// ENGINE
// =============================================================================

pub struct SyncEngine<S: ShapeSurface, R: RemoteStore> {
    store: Arc<R>,
    fields: FieldState,
    changes: FieldChanges,
    surface: SurfaceAdapter<S>,
    pending: Debouncer<Dimensions>,
    persists: JoinSet<()>,
    /// Last valid value from any source; the clamp fallback.
    model: Option<Dimensions>,
    persist_gesture_settles: bool,
    mirror_fields_to_shape: bool,
    commands: mpsc::UnboundedReceiver<Command>,
    status: watch::Sender<EngineStatus>,
    shape: watch::Sender<Option<ShapeState>>,
}

impl<S, R> SyncEngine<S, R>
where
    S: ShapeSurface + 'static,
    R: RemoteStore + 'static,
{
    /// Wire an engine to its store, surface, and fields.
    ///
    /// Nothing happens until [`SyncEngine::run`] is awaited.
    #[must_use]
    pub fn new(
        store: Arc<R>,
        surface: S,
        fields: FieldState,
        changes: FieldChanges,
        config: &SyncConfig,
    ) -> (Self, EngineHandle) {
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let (status, status_rx) = watch::channel(EngineStatus::Loading);
        let (shape, shape_rx) = watch::channel(None);

        let engine = Self {
            store,
            fields,
            changes,
            surface: SurfaceAdapter::new(surface),
            pending: Debouncer::new(config.persist_debounce()),
            persists: JoinSet::new(),
            model: None,
            persist_gesture_settles: config.persist_gesture_settles,
            mirror_fields_to_shape: config.mirror_fields_to_shape,
            commands,
            status,
            shape,
        };
        let handle = EngineHandle { commands: commands_tx, status: status_rx, shape: shape_rx };
        (engine, handle)
    }

    /// Run until torn down, then hand the surface back.
    pub async fn run(mut self) -> S {
        let store = Arc::clone(&self.store);
        let load = async move { store.get_dimensions().await };
        tokio::pin!(load);
        let mut loading = true;

        loop {
            let deadline = self.pending.deadline();
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    Some(Command::Pointer(gesture)) => self.on_pointer(gesture),
                    Some(Command::Teardown) | None => break,
                },
                result = &mut load, if loading => {
                    loading = false;
                    self.on_loaded(result);
                }
                Some(change) = self.changes.recv() => self.on_field_change(change),
                () = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.flush_pending();
                }
                Some(joined) = self.persists.join_next(), if !self.persists.is_empty() => log_join(joined),
            }
        }

        self.shutdown().await
    }

    // --- Inputs ---

    fn on_loaded(&mut self, result: Result<Dimensions, StoreError>) {
        let dims = match result {
            Ok(dims) => dims,
            Err(e) => {
                let code = e.error_code();
                let err = SyncError::LoadFailure(e);
                error!(error = %err, code, "failed to get dimensions");
                self.status.send_replace(EngineStatus::Unloaded);
                return;
            }
        };

        self.model = Some(dims);
        self.fields.set_pair(dims);

        if let Err(e) = self.surface.initialize(dims.width, dims.height) {
            let err = SyncError::from(e);
            error!(error = %err, "surface initialization failed");
            self.status.send_replace(EngineStatus::Unloaded);
            return;
        }
        self.publish_shape();
        self.status.send_replace(EngineStatus::Ready);
        info!(width = dims.width, height = dims.height, "dimensions loaded");
    }

    fn on_field_change(&mut self, change: FieldChange) {
        let Some(dims) = Dimensions::normalize(change.width, change.height, self.model) else {
            warn!(field = change.field.name(), width = change.width, height = change.height, "field edit rejected");
            return;
        };

        for (axis, raw) in [(Axis::Width, change.width), (Axis::Height, change.height)] {
            if raw.to_bits() != dims.get(axis).to_bits() {
                debug!(field = axis.name(), raw, clamped = dims.get(axis), "field edit clamped");
                self.fields.set(axis, dims.get(axis));
            }
        }

        self.model = Some(dims);
        if self.mirror_fields_to_shape {
            self.surface.apply_resize(dims.width, dims.height);
            self.publish_shape();
        }
        self.schedule_persist(dims, "field");
    }

    fn on_pointer(&mut self, gesture: PointerGesture) {
        let Some(event) = self.surface.handle_pointer(gesture) else {
            return;
        };

        match event {
            GestureEvent::Resized(dims) => {
                self.model = Some(dims);
                self.fields.set_pair(dims);
            }
            GestureEvent::ResizeSettled(dims) => {
                if self.persist_gesture_settles {
                    self.schedule_persist(dims, "gesture");
                } else {
                    trace!(width = dims.width, height = dims.height, "resize settled; not persisted");
                }
            }
            GestureEvent::Dragged { offset_x, offset_y, .. } => {
                trace!(offset_x, offset_y, "shape dragged");
            }
        }
        self.publish_shape();
    }

    // --- Persistence ---

    fn schedule_persist(&mut self, dims: Dimensions, source: &'static str) {
        if let Some(superseded) = self.pending.arm(dims, Instant::now()) {
            trace!(width = superseded.width, height = superseded.height, "pending write superseded");
        }
        debug!(
            source,
            width = dims.width,
            height = dims.height,
            quiet_ms = u64::try_from(self.pending.quiet_period().as_millis()).unwrap_or(u64::MAX),
            "write scheduled"
        );
    }

    fn flush_pending(&mut self) {
        let Some(dims) = self.pending.take_due(Instant::now()) else {
            return;
        };
        let store = Arc::clone(&self.store);
        self.persists.spawn(async move {
            match store.update_dimensions(dims).await {
                Ok(saved) => info!(width = saved.width, height = saved.height, "dimensions updated"),
                Err(e) => {
                    let code = e.error_code();
                    let retryable = e.retryable();
                    let err = SyncError::PersistFailure(e);
                    error!(error = %err, code, retryable, "failed to update dimensions");
                }
            }
        });
    }

    // --- Teardown ---

    async fn shutdown(self) -> S {
        let Self { changes, mut surface, mut pending, mut persists, status, shape, .. } = self;

        if let Some(dropped) = pending.cancel() {
            debug!(width = dropped.width, height = dropped.height, "pending write cancelled by teardown");
        }
        drop(changes);
        surface.teardown();
        shape.send_replace(surface.state());

        while let Some(joined) = persists.join_next().await {
            log_join(joined);
        }

        status.send_replace(EngineStatus::TornDown);
        info!("sync engine torn down");
        surface.into_surface()
    }

    fn publish_shape(&self) {
        self.shape.send_replace(self.surface.state());
    }
}

fn log_join(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        error!(error = %e, "persist task failed");
    }
}
