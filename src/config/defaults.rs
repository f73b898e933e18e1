// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display duration, entrance length, safety-net margin
//! - **Gestures**: Swipe and tap distance thresholds
//! - **Motion**: Distances and scales used by the entrance curves

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a notification stays on screen before auto-dismissing.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Longest display duration accepted from the settings file.
/// Zero is always accepted and means "stay until dismissed".
pub const MAX_DURATION_MS: u64 = 60_000;

/// Length of the entrance animation. The exit replays it backwards.
pub const ENTRANCE_DURATION_MS: u64 = 500;

/// Minimum entrance length accepted from the settings file.
pub const MIN_ENTRANCE_DURATION_MS: u64 = 50;

/// Maximum entrance length accepted from the settings file.
pub const MAX_ENTRANCE_DURATION_MS: u64 = 2000;

/// Extra time past `duration` before the safety-net timer force-unmounts.
/// Must exceed the exit animation so it never cuts a running exit short.
pub const SETTLE_MARGIN_MS: u64 = 600;

/// Interval between animation frames while a notification is on screen.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel (in logical pixels) that turns a drag into a dismissal.
pub const SWIPE_DISMISS_DISTANCE: f32 = 64.0;

/// Pointer travel still treated as a tap rather than a drag.
pub const TAP_SLOP: f32 = 4.0;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Distance the toast slides down from during its entrance.
pub const SLIDE_DISTANCE: f32 = 96.0;

/// Scale of the toast at the very start of its entrance.
pub const MIN_SCALE: f32 = 0.85;

const _: () = {
    assert!(ENTRANCE_DURATION_MS < SETTLE_MARGIN_MS);
    assert!(MAX_ENTRANCE_DURATION_MS >= ENTRANCE_DURATION_MS);
    assert!(MIN_ENTRANCE_DURATION_MS <= ENTRANCE_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(SWIPE_DISMISS_DISTANCE > TAP_SLOP);
};
