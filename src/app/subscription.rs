// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// Animation frames for the toast overlay, only while something moves.
pub fn frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS))
            .map(|at| Message::Notification(NotificationMessage::Frame(at)))
    } else {
        Subscription::none()
    }
}
