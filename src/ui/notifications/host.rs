// SPDX-License-Identifier: MPL-2.0
//! Seam between the arbitrator and the UI toolkit hosting it.
//!
//! The arbitrator never touches widgets or timers directly. It asks a
//! [`Host`] to mount the overlay element, to measure the top safe area, and
//! to schedule or cancel the safety-net timer. Handles are moved back into
//! `unmount` and `cancel`, so each one is released at most once.

use super::notification::Generation;
use std::time::Duration;

/// Where and for whom an overlay element is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountRequest {
    pub generation: Generation,
    /// Distance from the top of the window to the toast's resting slot.
    pub top: f32,
}

/// Overlay layer and timer primitives of a host environment.
///
/// Expiry of a scheduled timer must be reported back through
/// `Manager::timer_elapsed` with the generation it was scheduled for.
pub trait Host {
    /// Opaque handle of a mounted overlay element.
    type Mount;
    /// Opaque handle of a scheduled timer.
    type Timer;

    /// Height of the system inset at the top of the window (status bar, notch).
    fn top_inset(&self) -> f32;

    fn mount(&mut self, request: MountRequest) -> Self::Mount;

    fn unmount(&mut self, mount: Self::Mount);

    fn schedule(&mut self, delay: Duration, generation: Generation) -> Self::Timer;

    fn cancel(&mut self, timer: Self::Timer);
}
