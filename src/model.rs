//! Dimension model: the canonical `{width, height}` value.
//!
//! `Dimensions` is a `Copy` value; nothing in the crate mutates one in place.
//! Values coming from the store are checked with [`Dimensions::validate`],
//! while values coming from users and gestures go through
//! [`Dimensions::normalize`], which clamps a bad axis back to the last valid
//! value instead of rejecting the whole candidate.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// One of the two rectangle axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

/// A candidate value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{axis} must be a finite, non-negative number (got {value})")]
pub struct InvalidDimensions {
    pub axis: &'static str,
    pub value: f64,
}

/// Rectangle size in surface pixels. Both axes are finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Build a value, rejecting negative or non-finite axes.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensions`] naming the first offending axis.
    pub fn new(width: f64, height: f64) -> Result<Self, InvalidDimensions> {
        Self { width, height }.validate()
    }

    /// Re-check a value that bypassed the constructor (e.g. deserialized).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimensions`] naming the first offending axis.
    pub fn validate(self) -> Result<Self, InvalidDimensions> {
        for axis in [Axis::Width, Axis::Height] {
            let value = self.get(axis);
            if !is_valid_axis(value) {
                return Err(InvalidDimensions { axis: axis.name(), value });
            }
        }
        Ok(Self { width: positive_zero(self.width), height: positive_zero(self.height) })
    }

    /// Apply the clamp policy to a raw candidate.
    ///
    /// Each axis is kept when finite and non-negative, otherwise replaced by
    /// the same axis of `last_valid`. Returns `None` when an axis is invalid
    /// and there is nothing to fall back to.
    #[must_use]
    pub fn normalize(width: f64, height: f64, last_valid: Option<Self>) -> Option<Self> {
        let pick = |axis: Axis, value: f64| {
            if is_valid_axis(value) {
                Some(positive_zero(value))
            } else {
                last_valid.map(|last| last.get(axis))
            }
        };
        Some(Self { width: pick(Axis::Width, width)?, height: pick(Axis::Height, height)? })
    }

    #[must_use]
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Copy of `self` with one axis replaced. The new value is not validated.
    #[must_use]
    pub fn with_axis(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Width => Self { width: value, ..self },
            Axis::Height => Self { height: value, ..self },
        }
    }
}

fn is_valid_axis(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// `-0.0` passes the `>= 0` check; store it as `0.0`.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
