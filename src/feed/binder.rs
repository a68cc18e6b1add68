// SPDX-License-Identifier: MPL-2.0
//! Per-row gesture subscriptions.
//!
//! Every realized row holds a [`BindingId`] obtained from [`RowBinder`].
//! The binding owns that row's sampler pair (one per recognizer instance)
//! and tags emitted events with the row index. When the list recycles a
//! row for different content, the host rebinds: the old handle turns
//! stale, and samples submitted through it are dropped — a recycled row
//! can never emit events under a reassigned index.

use std::collections::HashMap;

use crate::gesture::{GestureEvent, PanSampler, PinchSampler, RawPan, RawPinch};

/// Opaque subscription handle. Never reused, even after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

#[derive(Debug)]
struct Binding {
    row: usize,
    pinch: PinchSampler,
    pan: PanSampler,
}

/// Registry of live row subscriptions.
#[derive(Debug, Default)]
pub struct RowBinder {
    next_id: u64,
    bindings: HashMap<BindingId, Binding>,
}

impl RowBinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a newly realized row and returns its handle.
    pub fn bind(&mut self, row: usize) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.insert(
            id,
            Binding {
                row,
                pinch: PinchSampler::default(),
                pan: PanSampler::default(),
            },
        );
        log::trace!("row {row} bound as {id:?}");
        id
    }

    /// Tears down a subscription. Subsequent samples through `id` are
    /// dropped.
    pub fn release(&mut self, id: BindingId) {
        if self.bindings.remove(&id).is_none() {
            log::trace!("release of unknown binding {id:?}");
        }
    }

    /// Teardown plus resubscribe for a recycled row. The returned handle
    /// replaces `id`, which turns stale.
    pub fn rebind(&mut self, id: BindingId, row: usize) -> BindingId {
        self.release(id);
        self.bind(row)
    }

    /// Submits a raw pinch sample through `id`. Stale handles and
    /// malformed samples produce no event.
    pub fn submit_pinch(&mut self, id: BindingId, raw: &RawPinch) -> Option<GestureEvent> {
        let binding = self.lookup(id)?;
        let row = binding.row;
        binding
            .pinch
            .sample(raw)
            .map(|(phase, kind)| GestureEvent { row, phase, kind })
    }

    /// Submits a raw pan sample through `id`. Stale handles and malformed
    /// samples produce no event.
    pub fn submit_pan(&mut self, id: BindingId, raw: &RawPan) -> Option<GestureEvent> {
        let binding = self.lookup(id)?;
        let row = binding.row;
        binding
            .pan
            .sample(raw)
            .map(|(phase, kind)| GestureEvent { row, phase, kind })
    }

    fn lookup(&mut self, id: BindingId) -> Option<&mut Binding> {
        let binding = self.bindings.get_mut(&id);
        if binding.is_none() {
            log::trace!("sample through stale binding {id:?} dropped");
        }
        binding
    }

    /// The row a handle is currently bound to, if live.
    #[must_use]
    pub fn row_of(&self, id: BindingId) -> Option<usize> {
        self.bindings.get(&id).map(|b| b.row)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
