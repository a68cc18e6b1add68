// SPDX-License-Identifier: MPL-2.0
//! Normalized gesture event model.
//!
//! The host platform's recognizers report *cumulative* values (total pinch
//! scale, total pan translation since the recognizer armed). The samplers
//! in [`sampler`] re-baseline those into incremental events so consumers
//! never see runaway cumulative growth; everything downstream of this
//! module works with the [`GestureEvent`] stream only.

pub mod sampler;

pub use sampler::{PanSampler, PinchSampler, RawPan, RawPinch};

use iced_core::{Point, Vector};

/// Recognizer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// `Ended`, `Cancelled` and `Failed` all roll a session back the same
    /// way, so the state machine treats them as one terminal phase.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// Payload of a normalized gesture sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    /// Pinch sample. `scale` is the incremental factor since the previous
    /// consumed sample (at `Began`, the recognizer's scale at arm time).
    /// `focal` is the touch centroid in overlay-local coordinates.
    Pinch { scale: f32, focal: Point },
    /// Pan sample. `delta` is the translation since the previous sample.
    Pan { delta: Vector },
}

/// A normalized gesture sample, tagged with the feed row it originated
/// from by the binding that emitted it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub row: usize,
    pub phase: GesturePhase,
    pub kind: GestureKind,
}
