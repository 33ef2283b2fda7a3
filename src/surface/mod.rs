//! Shape surface: the drawing provider contract and the gesture adapter.
//!
//! [`ShapeSurface`] is the external 2D provider (an SVG canvas, a GUI widget,
//! or [`HeadlessSurface`] for the console host). It only draws and turns
//! pointer interaction on or off. The provider's live pointer callbacks are
//! forwarded to [`SurfaceAdapter::handle_pointer`] as [`PointerGesture`]s; the
//! adapter applies them to the surface and returns a [`GestureEvent`] for the
//! engine to act on.

mod adapter;
mod headless;

pub use adapter::SurfaceAdapter;
pub use headless::HeadlessSurface;

use crate::error::SurfaceError;
use crate::model::Dimensions;

/// Which edges of the shape can be grabbed to resize it.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ResizeEdges {
    pub const ALL: Self = Self { left: true, right: true, top: true, bottom: true };
}

/// The external drawing provider.
pub trait ShapeSurface: Send {
    /// Attach a drawing area of the given size to the host.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingMount`] if the host has nowhere to attach it.
    fn mount(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Create the rectangle with its top-left corner at the origin.
    fn create_rect(&mut self, width: f64, height: f64);

    /// Change the rectangle size, keeping its top-left corner.
    fn resize_rect(&mut self, width: f64, height: f64);

    /// Move the rectangle's top-left corner to an absolute position.
    fn move_rect(&mut self, x: f64, y: f64);

    /// Move the rectangle by a relative offset.
    fn shift_rect(&mut self, dx: f64, dy: f64);

    fn set_fill(&mut self, fill: &str);

    /// Start delivering resize (on `edges`) and drag callbacks.
    fn enable_gestures(&mut self, edges: ResizeEdges);

    /// Stop delivering callbacks and release the provider's listeners.
    fn disable_gestures(&mut self);
}

/// Raw pointer callback from the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    /// Live resize; carries the provider's in-progress rect size.
    ResizeMove { width: f64, height: f64 },
    /// The resize handle was released.
    ResizeEnd,
    /// Live drag; carries the per-event delta.
    DragMove { dx: f64, dy: f64 },
}

/// What a pointer gesture did to the shape, for the engine to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The shape was resized live to this size.
    Resized(Dimensions),
    /// A resize gesture finished at this size.
    ResizeSettled(Dimensions),
    /// The shape moved by `(dx, dy)`; `offset_*` is the cumulative drag offset.
    Dragged { dx: f64, dy: f64, offset_x: f64, offset_y: f64 },
}

/// On-screen geometry as the adapter last applied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeState {
    /// Left edge in surface pixels.
    pub x: f64,
    /// Top edge in surface pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Sum of every drag delta since initialization.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ShapeState {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions { width: self.width, height: self.height }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
