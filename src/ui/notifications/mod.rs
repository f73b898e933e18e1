// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a single-slot toast: at most one notification is on
//! screen at any time, and showing a new one replaces the previous one
//! immediately. Each notification slides in, optionally counts down, and
//! animates out when dismissed by the user or by its timer.
//!
//! # Components
//!
//! - [`notification`] - `NotificationSpec` with category, duration and flags
//! - [`timeline`] - Clock-driven progress, countdown and easing curves
//! - [`lifecycle`] - `Entering → Visible → Exiting → Removed` state machine
//! - [`host`] - `Host` trait for mounting overlays and scheduling timers
//! - [`manager`] - `Manager`, the single-slot display arbitrator
//! - [`overlay`] - `OverlayHost`, the Iced implementation of `Host`
//! - [`toast`] - Toast widget component for rendering the active notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, NotificationSpec, OverlayHost, Toast};
//!
//! let mut host = OverlayHost::new();
//! let mut manager = Manager::new();
//!
//! // Show a notification (replaces any current one)
//! manager.show(NotificationSpec::success("Saved"), &mut host, Instant::now());
//! let task = host.take_tasks().map(Message::Notification);
//!
//! // In your view function, stack the overlay above the screen
//! let overlay = Toast::view_overlay(&manager, &host, now).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Default duration: 3s, zero keeps the toast until dismissed
//! - Safety net: forced removal at duration + 600ms
//! - Position: top center, below the window's top inset
//! - Stale timers and gestures carry a generation and are dropped on mismatch

pub mod host;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod overlay;
pub mod timeline;
mod toast;

pub use host::{Host, MountRequest};
pub use lifecycle::{ActiveNotification, Phase, TapOutcome, Trigger};
pub use manager::{Gesture, Manager, Message as NotificationMessage, Timing};
pub use notification::{Callback, Category, Generation, Icon, NotificationSpec};
pub use overlay::{Mounted, OverlayHost};
pub use timeline::{Countdown, Timeline, VisualFrame};
pub use toast::{GlyphBadge, Toast};
