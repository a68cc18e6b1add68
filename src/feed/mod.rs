// SPDX-License-Identifier: MPL-2.0
//! The pinch-to-expand feed interaction, wired together.
//!
//! [`Feed`] is the screen-owned façade: one instance per containing
//! screen, shared by every row. Rows contribute only their raw gesture
//! samples (through binding handles) and their geometry (through the
//! host's [`RowGeometrySource`]); the single controller inside decides
//! everything else.
//!
//! ## Composition
//!
//! - [`binder::RowBinder`]: per-row subscriptions with reuse teardown
//! - [`coordinator::Coordinator`]: geometry lookup and command emission
//! - [`controller::State`]: the zoom session state machine

pub mod binder;
pub mod controller;
pub mod coordinator;

pub use binder::{BindingId, RowBinder};
pub use controller::ZoomSession;
pub use coordinator::{AnimationToken, Command, Coordinator, RowGeometrySource, Update};

use crate::config::Tuning;
use crate::gesture::{RawPan, RawPinch};

/// The interaction core for one scrollable feed.
#[derive(Debug, Default)]
pub struct Feed {
    binder: RowBinder,
    coordinator: Coordinator,
}

impl Feed {
    #[must_use]
    pub fn new(tuning: Tuning) -> Self {
        Self {
            binder: RowBinder::new(),
            coordinator: Coordinator::new(tuning),
        }
    }

    /// Subscribes a newly realized row.
    pub fn bind_row(&mut self, row: usize) -> BindingId {
        self.binder.bind(row)
    }

    /// Tears down a row's subscription (row scrolled out for good).
    pub fn release_row(&mut self, id: BindingId) {
        self.binder.release(id);
    }

    /// Rebinds a recycled row to its new index; the old handle turns
    /// stale.
    pub fn rebind_row(&mut self, id: BindingId, row: usize) -> BindingId {
        self.binder.rebind(id, row)
    }

    /// Submits one raw pinch sample from a row. Returns the commands the
    /// host must apply, in order; empty when the sample was dropped or
    /// caused no state change.
    pub fn submit_pinch(
        &mut self,
        id: BindingId,
        raw: &RawPinch,
        rows: &dyn RowGeometrySource,
    ) -> Vec<Command> {
        match self.binder.submit_pinch(id, raw) {
            Some(event) => self.coordinator.handle_event(event, rows),
            None => Vec::new(),
        }
    }

    /// Submits one raw pan sample from a row.
    pub fn submit_pan(
        &mut self,
        id: BindingId,
        raw: &RawPan,
        rows: &dyn RowGeometrySource,
    ) -> Vec<Command> {
        match self.binder.submit_pan(id, raw) {
            Some(event) => self.coordinator.handle_event(event, rows),
            None => Vec::new(),
        }
    }

    /// Reports completion of a previously commanded animation.
    pub fn animation_finished(&mut self, token: AnimationToken) -> Vec<Command> {
        self.coordinator.animation_finished(token)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Whether an overlay session is live (active or snapping back).
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.coordinator.controller().is_idle()
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&ZoomSession> {
        self.coordinator.controller().session()
    }

    /// Whether the containing list must not scroll right now.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.coordinator.controller().scroll_locked()
    }
}
