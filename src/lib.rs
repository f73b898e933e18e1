// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a single-slot animated toast notification controller
//! built with the Iced GUI framework.
//!
//! At most one toast is on screen at a time. Showing a new one replaces the
//! previous one immediately, auto-dismissal is driven by a countdown and a
//! safety-net timer, and stale timers or gestures are dropped by generation.
//! See [`ui::notifications`] for the controller and [`app`] for a demo window.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[doc(hidden)]
pub mod test_utils;
