//! Field state: the observable width and height cells behind the numeric inputs.
//!
//! DESIGN
//! ======
//! Each cell has two write paths. [`FieldState::set`] is the external-set
//! channel: it updates the cell and any display observers but never reaches
//! the engine. [`FieldState::set_from_user`] is the user-edit channel: it
//! also emits one combined [`FieldChange`] carrying both axes. Keeping the two
//! paths as separate methods is what prevents the pointer → field → engine →
//! shape → pointer loop.
//!
//! `FieldState` is a cheap clone handle. The UI layer and the engine each
//! hold one; only the engine calls the silent setters and only the UI calls
//! `set_from_user`.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::model::{Axis, Dimensions};

/// A combined user edit: the axis that changed plus the latest value of both.
///
/// Values are raw user input and have not been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldChange {
    pub field: Axis,
    pub width: f64,
    pub height: f64,
}

struct Cells {
    width: watch::Sender<Option<f64>>,
    height: watch::Sender<Option<f64>>,
    changes: mpsc::UnboundedSender<FieldChange>,
}

impl Cells {
    fn cell(&self, field: Axis) -> &watch::Sender<Option<f64>> {
        match field {
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }
}

/// Shared handle to the two numeric fields.
#[derive(Clone)]
pub struct FieldState {
    cells: Arc<Cells>,
}

/// Receiving end of the user-edit stream. Only genuine user edits arrive here.
pub struct FieldChanges {
    rx: mpsc::UnboundedReceiver<FieldChange>,
}

impl FieldState {
    /// Create unset fields and the stream of user edits.
    #[must_use]
    pub fn new() -> (Self, FieldChanges) {
        let (tx, rx) = mpsc::unbounded_channel();
        let cells = Cells { width: watch::channel(None).0, height: watch::channel(None).0, changes: tx };
        (Self { cells: Arc::new(cells) }, FieldChanges { rx })
    }

    /// Silent update: display observers see the value, the change stream does not.
    pub fn set(&self, field: Axis, value: f64) {
        self.cells.cell(field).send_replace(Some(value));
    }

    /// Silent update of both fields.
    pub fn set_pair(&self, dims: Dimensions) {
        self.set(Axis::Width, dims.width);
        self.set(Axis::Height, dims.height);
    }

    /// User edit: update the cell and emit one combined change.
    ///
    /// No change is emitted while the other field has never held a value.
    pub fn set_from_user(&self, field: Axis, value: f64) {
        self.cells.cell(field).send_replace(Some(value));

        let Some(other) = self.value(field.other()) else {
            debug!(field = field.name(), "other field unset; edit not combined");
            return;
        };
        let (width, height) = match field {
            Axis::Width => (value, other),
            Axis::Height => (other, value),
        };
        if self.cells.changes.send(FieldChange { field, width, height }).is_err() {
            debug!(field = field.name(), "no change subscriber; edit dropped");
        }
    }

    #[must_use]
    pub fn value(&self, field: Axis) -> Option<f64> {
        *self.cells.cell(field).borrow()
    }

    /// Both fields as a raw pair, if both are set.
    #[must_use]
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        Some((self.value(Axis::Width)?, self.value(Axis::Height)?))
    }

    /// Observe every update to one field, silent or not.
    #[must_use]
    pub fn subscribe(&self, field: Axis) -> watch::Receiver<Option<f64>> {
        self.cells.cell(field).subscribe()
    }
}

impl FieldChanges {
    /// Next combined user edit, in emission order.
    ///
    /// Returns `None` once every [`FieldState`] handle has been dropped.
    pub async fn recv(&mut self) -> Option<FieldChange> {
        self.rx.recv().await
    }

    /// Non-blocking variant of [`FieldChanges::recv`].
    pub fn try_recv(&mut self) -> Option<FieldChange> {
        match self.rx.try_recv() {
            Ok(change) => Some(change),
            Err(_) => None,
        }
    }
}
