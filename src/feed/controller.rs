// SPDX-License-Identifier: MPL-2.0
//! The zoom session state machine.
//!
//! One controller instance is shared across every row of the feed. It owns
//! the single [`ZoomSession`] and decides, sample by sample, how pinch and
//! pan events move the overlay — and how the overlay gets back to rest.
//!
//! States:
//! - `Idle`: no overlay; the feed scrolls normally.
//! - `Active`: the overlay is detached and tracking the fingers; the feed
//!   is scroll-locked.
//! - `SnappingBack`: the terminal animation is running. Gestures are
//!   absorbed until the host reports completion, so the rest-state cleanup
//!   fires exactly once.
//!
//! Terminal phases (`Ended`/`Cancelled`/`Failed`) of the *pinch* close the
//! session; a pan terminal never does — while active, pan is purely
//! additive translation.

use iced_core::{Point, Rectangle, Vector};

use crate::transform::{ScaleBounds, Transform};

/// Live state while the overlay is detached from its row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSession {
    /// The row whose image the overlay mirrors.
    pub row: usize,
    /// On-screen geometry of the row image, snapshotted at gesture begin.
    /// Stays valid while active because the feed is scroll-locked.
    pub base_frame: Rectangle,
    /// Current overlay transform, relative to `base_frame`.
    pub transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Active(ZoomSession),
    SnappingBack(ZoomSession),
}

/// The controller's state: configured bounds plus the machine phase.
#[derive(Debug, Clone)]
pub struct State {
    bounds: ScaleBounds,
    phase: Phase,
}

/// Messages consumed by [`State::handle`]. Geometry-dependent variants
/// carry the frame the coordinator resolved; `None` means the lookup
/// failed (row recycled or scrolled out).
#[derive(Debug, Clone, Copy)]
pub enum Message {
    PinchBegan {
        row: usize,
        scale: f32,
        focal: Point,
        frame: Option<Rectangle>,
    },
    PinchChanged {
        row: usize,
        scale: f32,
        focal: Point,
    },
    /// End, cancel and failed collapsed into one terminal. `rest_frame`
    /// is the row geometry re-resolved at terminal time.
    PinchEnded {
        row: usize,
        rest_frame: Option<Rectangle>,
    },
    PanChanged {
        row: usize,
        delta: Vector,
    },
    PanEnded {
        row: usize,
    },
    /// The host finished the snap-back animation.
    SnapBackFinished,
}

/// Effects produced by session transitions. Exactly one per message; the
/// coordinator translates them into host commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No state change.
    None,
    /// A session started. `session.transform` already carries the begin
    /// sample's scale applied about the focal point.
    SessionStarted(ZoomSession),
    /// The overlay transform changed while active.
    TransformChanged(Transform),
    /// The terminal animation toward `rest_frame` should start.
    SnapBackStarted { row: usize, rest_frame: Rectangle },
    /// Geometry was gone at terminal time: snap to rest immediately,
    /// without animating toward stale coordinates.
    Aborted { row: usize },
    /// Snap-back completed; the session is cleared and scrolling may
    /// resume.
    SessionEnded { row: usize },
}

impl State {
    #[must_use]
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            bounds,
            phase: Phase::Idle,
        }
    }

    /// Handle a gesture or animation message.
    ///
    /// Note: Takes `Message` by value following Iced's
    /// `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PinchBegan {
                row,
                scale,
                focal,
                frame,
            } => self.on_pinch_began(row, scale, focal, frame),
            Message::PinchChanged { row, scale, focal } => {
                self.on_pinch_changed(row, scale, focal)
            }
            Message::PinchEnded { row, rest_frame } => self.on_pinch_ended(row, rest_frame),
            Message::PanChanged { row, delta } => self.on_pan_changed(row, delta),
            Message::PanEnded { row } => {
                // Pan terminals never close the session; the pinch does.
                log::trace!("pan ended on row {row}, session unaffected");
                Effect::None
            }
            Message::SnapBackFinished => self.on_snap_back_finished(),
        }
    }

    fn on_pinch_began(
        &mut self,
        row: usize,
        scale: f32,
        focal: Point,
        frame: Option<Rectangle>,
    ) -> Effect {
        if !matches!(self.phase, Phase::Idle) {
            log::debug!("pinch began on row {row} ignored: session already live");
            return Effect::None;
        }
        if !scale.is_finite() || scale < 1.0 {
            // Only expansion initiates a session.
            log::trace!("pinch began on row {row} ignored: scale {scale} < 1");
            return Effect::None;
        }
        let Some(base_frame) = frame else {
            log::debug!("pinch began on row {row} ignored: no geometry");
            return Effect::None;
        };

        let factor = self.bounds.limit_factor(1.0, scale);
        let session = ZoomSession {
            row,
            base_frame,
            transform: Transform::IDENTITY.scale_about(focal, factor),
        };
        self.phase = Phase::Active(session);
        log::debug!("session started on row {row}");
        Effect::SessionStarted(session)
    }

    fn on_pinch_changed(&mut self, row: usize, scale: f32, focal: Point) -> Effect {
        let Phase::Active(session) = &mut self.phase else {
            return Effect::None;
        };
        if session.row != row || !scale.is_finite() || scale <= 0.0 {
            return Effect::None;
        }

        let factor = self.bounds.limit_factor(session.transform.scale(), scale);
        session.transform = session.transform.scale_about(focal, factor);
        Effect::TransformChanged(session.transform)
    }

    fn on_pan_changed(&mut self, row: usize, delta: Vector) -> Effect {
        let Phase::Active(session) = &mut self.phase else {
            return Effect::None;
        };
        if session.row != row || !delta.x.is_finite() || !delta.y.is_finite() {
            return Effect::None;
        }

        session.transform = session.transform.translated(delta);
        Effect::TransformChanged(session.transform)
    }

    fn on_pinch_ended(&mut self, row: usize, rest_frame: Option<Rectangle>) -> Effect {
        let Phase::Active(session) = self.phase else {
            return Effect::None;
        };
        if session.row != row {
            return Effect::None;
        }

        match rest_frame {
            Some(rest_frame) => {
                self.phase = Phase::SnappingBack(session);
                log::debug!("session on row {row} snapping back");
                Effect::SnapBackStarted { row, rest_frame }
            }
            None => {
                self.phase = Phase::Idle;
                log::debug!("session on row {row} aborted: geometry gone");
                Effect::Aborted { row }
            }
        }
    }

    fn on_snap_back_finished(&mut self) -> Effect {
        let Phase::SnappingBack(session) = self.phase else {
            return Effect::None;
        };
        self.phase = Phase::Idle;
        log::debug!("session on row {} ended", session.row);
        Effect::SessionEnded { row: session.row }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Check if no session is live and the feed may scroll.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Check if the overlay is tracking the fingers.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    /// The live session, while active or snapping back.
    #[must_use]
    pub fn session(&self) -> Option<&ZoomSession> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Active(session) | Phase::SnappingBack(session) => Some(session),
        }
    }

    /// Whether the containing feed must not scroll. Holds from session
    /// start until the snap-back completes.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.is_idle()
    }

    /// The configured scale bounds.
    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(ScaleBounds::default())
    }
}
