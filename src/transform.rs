// SPDX-License-Identifier: MPL-2.0
//! Pure 2D transform math for the floating overlay.
//!
//! This module handles the geometry of pinch-about-a-point:
//! - `Transform`: the overlay's affine state (scale + screen-space translation)
//! - `ScaleBounds`: validated scale limits with the soft-stop factor rule
//!
//! Everything here is stateless math; the state machine lives in
//! [`crate::feed::controller`].

use iced_core::{Point, Vector};

use crate::config::{MAX_SCALE, MIN_SCALE};

/// Scale limits for the overlay, guaranteed to satisfy `0 < min <= max`.
///
/// This type ensures that bounds are always valid, eliminating the need
/// for manual checks at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl ScaleBounds {
    /// Creates new bounds, repairing degenerate input: non-positive or
    /// non-finite values fall back to the defaults, and `min`/`max` are
    /// swapped if given in the wrong order.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() && min > 0.0 { min } else { MIN_SCALE };
        let max = if max.is_finite() && max > 0.0 { max } else { MAX_SCALE };
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Returns the minimum combined scale.
    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    /// Returns the maximum combined scale.
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps a combined scale into the bounds.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }

    /// Returns the incremental factor to actually apply so that
    /// `current * factor` stays in bounds.
    ///
    /// When the requested factor would overshoot, the boundary-reaching
    /// factor (`bound / current`) is substituted instead of rejecting the
    /// sample, so the gesture soft-stops at the limit rather than freezing.
    #[must_use]
    pub fn limit_factor(self, current: f32, factor: f32) -> f32 {
        let combined = current * factor;
        if combined < self.min {
            self.min / current
        } else if combined > self.max {
            self.max / current
        } else {
            factor
        }
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::new(MIN_SCALE, MAX_SCALE)
    }
}

/// The overlay's 2D affine state: per-axis scale plus a screen-space
/// translation. Maps a local point `p` to `scale * p + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translation: Vector,
}

impl Transform {
    /// The rest transform: unit scale, zero translation.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translation: Vector::new(0.0, 0.0),
    };

    /// Composes `translate(focal) · scale(factor) · translate(-focal)` onto
    /// this transform, so `focal` (in overlay-local coordinates) stays
    /// visually fixed while the scale changes.
    #[must_use]
    pub fn scale_about(self, focal: Point, factor: f32) -> Self {
        Self {
            scale_x: self.scale_x * factor,
            scale_y: self.scale_y * factor,
            translation: Vector::new(
                self.translation.x + self.scale_x * (1.0 - factor) * focal.x,
                self.translation.y + self.scale_y * (1.0 - factor) * focal.y,
            ),
        }
    }

    /// Composes a screen-space translation. Applied after scale, so it
    /// commutes with any further scaling of the translation itself.
    #[must_use]
    pub fn translated(self, delta: Vector) -> Self {
        Self {
            translation: Vector::new(self.translation.x + delta.x, self.translation.y + delta.y),
            ..self
        }
    }

    /// Maps an overlay-local point to screen space.
    #[must_use]
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.scale_x * point.x + self.translation.x,
            self.scale_y * point.y + self.translation.y,
        )
    }

    /// The combined uniform scale. Pinch factors are applied uniformly, so
    /// both axes carry the same value during a session.
    #[must_use]
    pub fn scale(self) -> f32 {
        self.scale_x
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
