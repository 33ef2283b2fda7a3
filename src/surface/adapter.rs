//! Gesture adapter: owns the provider and the on-screen shape state.
//!
//! LIFECYCLE
//! =========
//! `initialize` mounts the drawing area, draws the shape centered on the
//! anchor point, and enables gestures. `teardown` disables them again. Pointer
//! callbacks outside that window are ignored, so a late callback from a
//! provider that has not yet released its listeners cannot touch the shape.
//!
//! GEOMETRY
//! ========
//! Programmatic resizes keep the shape's center fixed. Gesture resizes keep
//! the top-left corner fixed, matching what the provider itself does while a
//! handle is dragged. Drag offsets are accumulated here rather than stored on
//! the provider's node.

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

use tracing::{debug, trace};

use super::{GestureEvent, PointerGesture, ResizeEdges, ShapeState, ShapeSurface};
use crate::consts::{ANCHOR_X, ANCHOR_Y, SHAPE_FILL, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::error::SurfaceError;
use crate::model::Dimensions;

pub struct SurfaceAdapter<S: ShapeSurface> {
    surface: S,
    shape: Option<ShapeState>,
    interactive: bool,
    /// A `ResizeMove` has arrived and its `ResizeEnd` has not.
    resizing: bool,
}

impl<S: ShapeSurface> SurfaceAdapter<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { surface, shape: None, interactive: false, resizing: false }
    }

    /// Draw the shape centered on the anchor and start listening for gestures.
    ///
    /// Calling this again on an initialized adapter redraws the shape at the
    /// new size without registering gestures twice.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingMount`] if the provider cannot mount.
    pub fn initialize(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        if self.interactive {
            debug!("surface already initialized; redrawing");
            self.teardown();
        }

        self.surface.mount(SURFACE_WIDTH, SURFACE_HEIGHT)?;

        let x = ANCHOR_X - width / 2.0;
        let y = ANCHOR_Y - height / 2.0;
        self.surface.create_rect(width, height);
        self.surface.move_rect(x, y);
        self.surface.set_fill(SHAPE_FILL);
        self.surface.enable_gestures(ResizeEdges::ALL);

        self.shape = Some(ShapeState { x, y, width, height, offset_x: 0.0, offset_y: 0.0 });
        self.interactive = true;
        self.resizing = false;
        debug!(width, height, x, y, "surface initialized");
        Ok(())
    }

    /// Resize from an external source, growing or shrinking around the center.
    ///
    /// Never produces a gesture event. Ignored before `initialize`.
    pub fn apply_resize(&mut self, width: f64, height: f64) {
        let Some(shape) = self.shape.as_mut() else {
            debug!(width, height, "apply_resize before initialize ignored");
            return;
        };
        let (cx, cy) = shape.center();
        shape.width = width;
        shape.height = height;
        shape.x = cx - width / 2.0;
        shape.y = cy - height / 2.0;

        self.surface.resize_rect(width, height);
        self.surface.move_rect(shape.x, shape.y);
    }

    /// Apply a live pointer callback and report what it did.
    ///
    /// Returns `None` when gestures are not active, and for a `ResizeEnd`
    /// with no resize in progress. Resize sizes that are negative or
    /// non-finite are clamped to the current size per axis.
    pub fn handle_pointer(&mut self, gesture: PointerGesture) -> Option<GestureEvent> {
        if !self.interactive {
            trace!(?gesture, "gesture while inactive ignored");
            return None;
        }
        let shape = self.shape.as_mut()?;

        match gesture {
            PointerGesture::ResizeMove { width, height } => {
                let dims = Dimensions::normalize(width, height, Some(shape.dimensions()))?;
                shape.width = dims.width;
                shape.height = dims.height;
                self.surface.resize_rect(dims.width, dims.height);
                self.resizing = true;
                Some(GestureEvent::Resized(dims))
            }
            PointerGesture::ResizeEnd => {
                if !std::mem::take(&mut self.resizing) {
                    trace!("release without resize ignored");
                    return None;
                }
                Some(GestureEvent::ResizeSettled(shape.dimensions()))
            }
            PointerGesture::DragMove { dx, dy } => {
                if !dx.is_finite() || !dy.is_finite() {
                    trace!(dx, dy, "non-finite drag delta ignored");
                    return None;
                }
                shape.x += dx;
                shape.y += dy;
                shape.offset_x += dx;
                shape.offset_y += dy;
                self.surface.shift_rect(dx, dy);
                Some(GestureEvent::Dragged { dx, dy, offset_x: shape.offset_x, offset_y: shape.offset_y })
            }
        }
    }

    /// Release the provider's gesture listeners. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.interactive {
            return;
        }
        self.surface.disable_gestures();
        self.interactive = false;
        self.resizing = false;
        debug!("surface gestures released");
    }

    #[must_use]
    pub fn state(&self) -> Option<ShapeState> {
        self.shape
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the provider back, e.g. once the engine has torn down.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
