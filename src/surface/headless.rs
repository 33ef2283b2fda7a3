//! Headless surface for hosts without a drawing backend.
//!
//! Keeps the drawn geometry in plain fields and logs each primitive at
//! `trace`. The console host uses it; its pointer input is typed commands.

use tracing::trace;

use super::{ResizeEdges, ShapeSurface};
use crate::error::SurfaceError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessSurface {
    pub mounted: Option<(f64, f64)>,
    pub rect: Option<(f64, f64, f64, f64)>,
    pub fill: Option<String>,
    pub gestures: Option<ResizeEdges>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeSurface for HeadlessSurface {
    fn mount(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        trace!(width, height, "mount");
        self.mounted = Some((width, height));
        Ok(())
    }

    fn create_rect(&mut self, width: f64, height: f64) {
        trace!(width, height, "create_rect");
        self.rect = Some((0.0, 0.0, width, height));
    }

    fn resize_rect(&mut self, width: f64, height: f64) {
        trace!(width, height, "resize_rect");
        if let Some((_, _, w, h)) = self.rect.as_mut() {
            *w = width;
            *h = height;
        }
    }

    fn move_rect(&mut self, x: f64, y: f64) {
        trace!(x, y, "move_rect");
        if let Some((rx, ry, _, _)) = self.rect.as_mut() {
            *rx = x;
            *ry = y;
        }
    }

    fn shift_rect(&mut self, dx: f64, dy: f64) {
        trace!(dx, dy, "shift_rect");
        if let Some((rx, ry, _, _)) = self.rect.as_mut() {
            *rx += dx;
            *ry += dy;
        }
    }

    fn set_fill(&mut self, fill: &str) {
        self.fill = Some(fill.to_string());
    }

    fn enable_gestures(&mut self, edges: ResizeEdges) {
        trace!(?edges, "enable_gestures");
        self.gestures = Some(edges);
    }

    fn disable_gestures(&mut self) {
        trace!("disable_gestures");
        self.gestures = None;
    }
}
