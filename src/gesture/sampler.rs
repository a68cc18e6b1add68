// SPDX-License-Identifier: MPL-2.0
//! Cumulative-to-incremental gesture normalization.
//!
//! One sampler instance corresponds to one platform recognizer instance.
//! Each consumed sample re-baselines the sampler (pinch back to `1`, pan
//! back to zero), which is what keeps incremental factors from compounding
//! against the gesture's origin instead of its previous sample.
//!
//! Malformed samples (non-finite or non-positive scale, non-finite
//! translation, no pointers) are dropped and produce no event.

use iced_core::{Point, Vector};

use crate::error::Error;

use super::{GestureKind, GesturePhase};

/// One pinch recognizer sample as delivered by the host platform.
#[derive(Debug, Clone, Copy)]
pub struct RawPinch {
    pub phase: GesturePhase,
    /// Cumulative scale since the recognizer armed.
    pub scale: f32,
    /// Touch centroid in overlay-local coordinates.
    pub focal: Point,
    /// Number of pointers currently down.
    pub touches: u8,
}

/// One pan recognizer sample as delivered by the host platform.
#[derive(Debug, Clone, Copy)]
pub struct RawPan {
    pub phase: GesturePhase,
    /// Cumulative translation since the recognizer armed.
    pub translation: Vector,
    /// Number of pointers currently down.
    pub touches: u8,
}

/// Normalizes cumulative pinch scale into incremental factors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchSampler {
    baseline: Option<f32>,
}

impl PinchSampler {
    /// Consumes a raw sample. Returns the phase plus an incremental
    /// [`GestureKind::Pinch`], or `None` for malformed samples.
    pub fn sample(&mut self, raw: &RawPinch) -> Option<(GesturePhase, GestureKind)> {
        // Terminal samples arrive after fingers lift, so the pointer-count
        // guard only applies while the gesture is live.
        if raw.touches < 2 && !raw.phase.is_terminal() {
            log::trace!("pinch sample dropped: {}", Error::MalformedGesture);
            return None;
        }
        if !raw.scale.is_finite()
            || raw.scale <= 0.0
            || !raw.focal.x.is_finite()
            || !raw.focal.y.is_finite()
        {
            log::trace!("pinch sample dropped: {}", Error::MalformedGesture);
            return None;
        }

        let scale = match raw.phase {
            GesturePhase::Began => {
                // The begin sample's own scale is applied directly; it
                // becomes the baseline for the next incremental factor.
                self.baseline = Some(raw.scale);
                raw.scale
            }
            GesturePhase::Changed => {
                let baseline = self.baseline.unwrap_or(1.0);
                self.baseline = Some(raw.scale);
                raw.scale / baseline
            }
            _ => {
                self.baseline = None;
                1.0
            }
        };

        Some((
            raw.phase,
            GestureKind::Pinch {
                scale,
                focal: raw.focal,
            },
        ))
    }
}

/// Normalizes cumulative pan translation into per-sample deltas.
#[derive(Debug, Clone, Copy)]
pub struct PanSampler {
    baseline: Vector,
}

impl Default for PanSampler {
    fn default() -> Self {
        Self {
            baseline: Vector::new(0.0, 0.0),
        }
    }
}

impl PanSampler {
    /// Consumes a raw sample. Returns the phase plus a delta
    /// [`GestureKind::Pan`], or `None` for malformed samples.
    pub fn sample(&mut self, raw: &RawPan) -> Option<(GesturePhase, GestureKind)> {
        if raw.touches == 0 && !raw.phase.is_terminal() {
            log::trace!("pan sample dropped: {}", Error::MalformedGesture);
            return None;
        }
        if !raw.translation.x.is_finite() || !raw.translation.y.is_finite() {
            log::trace!("pan sample dropped: {}", Error::MalformedGesture);
            return None;
        }

        let delta = Vector::new(
            raw.translation.x - self.baseline.x,
            raw.translation.y - self.baseline.y,
        );

        if raw.phase.is_terminal() {
            self.baseline = Vector::new(0.0, 0.0);
        } else {
            self.baseline = raw.translation;
        }

        Some((raw.phase, GestureKind::Pan { delta }))
    }
}
