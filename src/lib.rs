// SPDX-License-Identifier: MPL-2.0
//! `pinch_feed` is the interaction core behind a pinch-to-expand image
//! overlay embedded in a scrollable feed.
//!
//! A pinch on a row's thumbnail detaches it into a floating overlay that
//! scales about the finger centroid and pans freely; releasing the pinch
//! snaps it back into its row. This crate owns the gesture-driven state
//! machine only: it consumes normalized gesture samples and per-row
//! geometry, and emits transform/visibility/scroll commands. Rendering,
//! list virtualization and image loading stay with the embedding host.

pub mod config;
pub mod error;
pub mod feed;
pub mod gesture;
pub mod transform;

#[cfg(test)]
mod test_utils;
