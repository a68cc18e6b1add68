// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Pinch scale bounds for the floating overlay
//! - **Backdrop**: Dimming backdrop opacity
//! - **Animation**: Durations for the dim-in and snap-back animations

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Minimum combined overlay scale. Pinching below this is reinterpreted as
/// the boundary-reaching factor (soft stop), never a frozen gesture.
pub const MIN_SCALE: f32 = 1.0;

/// Maximum combined overlay scale.
pub const MAX_SCALE: f32 = 4.0;

// ==========================================================================
// Backdrop Defaults
// ==========================================================================

/// Target opacity of the dimming backdrop while a session is active.
pub const BACKDROP_OPACITY: f32 = 0.6;

/// Minimum allowed backdrop opacity.
pub const MIN_BACKDROP_OPACITY: f32 = 0.0;

/// Maximum allowed backdrop opacity.
pub const MAX_BACKDROP_OPACITY: f32 = 1.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the backdrop dim-in when a session begins (in milliseconds).
pub const DIM_IN_DURATION_MS: u64 = 150;

/// Duration of the snap-back-to-rest animation (in milliseconds).
pub const SNAP_BACK_DURATION_MS: u64 = 300;
