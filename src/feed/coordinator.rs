// SPDX-License-Identifier: MPL-2.0
//! Mediates between the zoom controller and the feed's collaborators.
//!
//! The coordinator resolves row geometry through [`RowGeometrySource`],
//! feeds the controller, and translates its effects into [`Command`]s for
//! the render collaborator. Animations are fire-and-forget: the host runs
//! them and reports completion back through
//! [`Coordinator::animation_finished`] with the token the command carried,
//! which keeps the terminal cleanup an explicit state-machine transition
//! instead of a nested completion closure.

use iced_core::Rectangle;

use crate::config::Tuning;
use crate::error::Error;
use crate::gesture::{GestureEvent, GestureKind, GesturePhase};
use crate::transform::Transform;

use super::controller;

/// Geometry lookup into the virtualized list.
pub trait RowGeometrySource {
    /// On-screen geometry of `row`'s image in the shared viewport space,
    /// or `None` when the row is not currently realized (recycled or
    /// scrolled out of the visible set).
    fn row_geometry(&self, row: usize) -> Option<Rectangle>;
}

/// Identifies a scheduled animation whose completion the host must report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationToken {
    SnapBack,
}

/// A single property write applied by the render collaborator, either
/// immediately or interpolated inside an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    OverlayFrame(Rectangle),
    OverlayTransform(Transform),
    OverlayOpacity(f32),
    RowImageOpacity { row: usize, opacity: f32 },
    BackdropOpacity(f32),
}

/// Commands emitted toward the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply immediately, outside any animation.
    Set(Update),
    /// Animate `updates` over `duration`. When `token` is present the host
    /// must call [`Coordinator::animation_finished`] with it once done.
    Animate {
        duration: std::time::Duration,
        updates: Vec<Update>,
        token: Option<AnimationToken>,
    },
    /// Enable or disable scrolling of the containing list.
    SetScrollEnabled(bool),
}

/// Coordinator state: the shared controller plus interaction tuning.
#[derive(Debug, Clone)]
pub struct Coordinator {
    controller: controller::State,
    tuning: Tuning,
}

impl Coordinator {
    #[must_use]
    pub fn new(tuning: Tuning) -> Self {
        Self {
            controller: controller::State::new(tuning.bounds),
            tuning,
        }
    }

    /// Feeds one normalized gesture event through the controller and
    /// returns the commands the host must apply, in order.
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        rows: &dyn RowGeometrySource,
    ) -> Vec<Command> {
        let message = self.to_message(event, rows);
        let effect = self.controller.handle(message);
        self.run_effect(effect)
    }

    /// Reports completion of a previously commanded animation.
    pub fn animation_finished(&mut self, token: AnimationToken) -> Vec<Command> {
        let effect = match token {
            AnimationToken::SnapBack => self.controller.handle(controller::Message::SnapBackFinished),
        };
        self.run_effect(effect)
    }

    fn to_message(
        &self,
        event: GestureEvent,
        rows: &dyn RowGeometrySource,
    ) -> controller::Message {
        let GestureEvent { row, phase, kind } = event;
        match kind {
            GestureKind::Pinch { scale, focal } => match phase {
                GesturePhase::Began => {
                    let frame = self.resolve_geometry(row, rows);
                    controller::Message::PinchBegan {
                        row,
                        scale,
                        focal,
                        frame,
                    }
                }
                GesturePhase::Changed => controller::Message::PinchChanged { row, scale, focal },
                _ => controller::Message::PinchEnded {
                    row,
                    rest_frame: self.resolve_geometry(row, rows),
                },
            },
            GestureKind::Pan { delta } => {
                if phase.is_terminal() {
                    controller::Message::PanEnded { row }
                } else {
                    controller::Message::PanChanged { row, delta }
                }
            }
        }
    }

    fn resolve_geometry(
        &self,
        row: usize,
        rows: &dyn RowGeometrySource,
    ) -> Option<Rectangle> {
        let frame = rows.row_geometry(row);
        if frame.is_none() {
            log::debug!("geometry lookup failed: {}", Error::RowNotFound(row));
        }
        frame
    }

    fn run_effect(&self, effect: controller::Effect) -> Vec<Command> {
        match effect {
            controller::Effect::None => Vec::new(),
            controller::Effect::SessionStarted(session) => vec![
                Command::Set(Update::OverlayFrame(session.base_frame)),
                Command::Set(Update::OverlayTransform(session.transform)),
                Command::Set(Update::OverlayOpacity(1.0)),
                Command::Set(Update::RowImageOpacity {
                    row: session.row,
                    opacity: 0.0,
                }),
                Command::SetScrollEnabled(false),
                Command::Animate {
                    duration: self.tuning.dim_in,
                    updates: vec![Update::BackdropOpacity(self.tuning.backdrop_opacity)],
                    token: None,
                },
            ],
            controller::Effect::TransformChanged(transform) => {
                vec![Command::Set(Update::OverlayTransform(transform))]
            }
            controller::Effect::SnapBackStarted { rest_frame, .. } => vec![Command::Animate {
                duration: self.tuning.snap_back,
                updates: vec![
                    Update::OverlayTransform(Transform::IDENTITY),
                    Update::OverlayFrame(rest_frame),
                    Update::BackdropOpacity(0.0),
                ],
                token: Some(AnimationToken::SnapBack),
            }],
            controller::Effect::Aborted { row } => vec![
                Command::Set(Update::OverlayTransform(Transform::IDENTITY)),
                Command::Set(Update::OverlayOpacity(0.0)),
                Command::Set(Update::BackdropOpacity(0.0)),
                Command::Set(Update::RowImageOpacity { row, opacity: 1.0 }),
                Command::SetScrollEnabled(true),
            ],
            controller::Effect::SessionEnded { row } => vec![
                Command::Set(Update::OverlayOpacity(0.0)),
                Command::Set(Update::RowImageOpacity { row, opacity: 1.0 }),
                Command::SetScrollEnabled(true),
            ],
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The shared controller, for state inspection.
    #[must_use]
    pub fn controller(&self) -> &controller::State {
        &self.controller
    }

    /// The interaction tuning in effect.
    #[must_use]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
