// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of the notification currently on screen.
//!
//! An [`ActiveNotification`] walks `Entering → Visible → Exiting → Removed`.
//! The entrance timeline moves it to `Visible`; a reverse trigger (tap,
//! swipe, close button, action, countdown expiry, safety-net timer) starts
//! the exit; the exit timeline reaching zero makes it `Removed`.
//!
//! User gestures respect the notification's `dismissible` flag. Timer-driven and
//! programmatic exits always proceed.

use super::notification::{Generation, NotificationSpec};
use super::timeline::{Countdown, Direction, Timeline, VisualFrame};
use crate::config::{SWIPE_DISMISS_DISTANCE, TAP_SLOP};
use std::time::{Duration, Instant};

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entrance animation running.
    Entering,
    /// Entrance finished, parked at full progress.
    Visible,
    /// Exit animation running.
    Exiting,
    /// Exit finished. Terminal.
    Removed,
}

/// What started an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Tap,
    Swipe,
    CloseButton,
    Action,
    Countdown,
    SafetyNet,
}

impl Trigger {
    /// Gestures are gated by `dismissible`; timers are not.
    #[must_use]
    pub fn is_user_gesture(self) -> bool {
        matches!(
            self,
            Trigger::Tap | Trigger::Swipe | Trigger::CloseButton | Trigger::Action
        )
    }
}

/// Result of tapping the notification body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The `on_tap` callback ran instead of dismissing.
    Callback,
    /// The tap started the exit.
    Dismissing,
    /// Nothing happened (non-dismissible, or already leaving).
    Ignored,
}

#[derive(Debug, Clone, Copy, Default)]
struct Drag {
    pointer_x: Option<f32>,
    /// A press landed on the notification and has not been released yet.
    pressed: bool,
    /// Horizontal travel is being measured for a swipe.
    tracking: bool,
    /// Anchors at the first known pointer position of the press.
    origin: Option<f32>,
    offset: f32,
}

impl Drag {
    /// Ends the current press, keeping the last known pointer position.
    fn release(&mut self) {
        *self = Drag {
            pointer_x: self.pointer_x,
            ..Drag::default()
        };
    }
}

/// State machine of one displayed notification.
#[derive(Debug)]
pub struct ActiveNotification {
    spec: NotificationSpec,
    generation: Generation,
    phase: Phase,
    timeline: Timeline,
    countdown: Option<Countdown>,
    drag: Drag,
}

impl ActiveNotification {
    /// Creates the notification in `Entering` and starts its timelines at `now`.
    #[must_use]
    pub fn new(
        spec: NotificationSpec,
        generation: Generation,
        entrance: Duration,
        now: Instant,
    ) -> Self {
        let mut timeline = Timeline::new(entrance);
        timeline.forward(now);
        let countdown = Countdown::start(spec.duration(), now);

        Self {
            spec,
            generation,
            phase: Phase::Entering,
            timeline,
            countdown,
            drag: Drag::default(),
        }
    }

    #[must_use]
    pub fn spec(&self) -> &NotificationSpec {
        &self.spec
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timeline.progress()
    }

    /// Returns whether the host should keep delivering animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Removed
            && (self.timeline.is_running() || self.countdown.is_some() || self.is_dragging())
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.tracking
    }

    /// Time the running exit still needs, zero when not exiting.
    #[must_use]
    pub fn remaining_exit(&self) -> Duration {
        if self.phase == Phase::Exiting {
            self.timeline.reverse_length()
        } else {
            Duration::ZERO
        }
    }

    /// Samples the clock and applies every phase change due at `now`.
    ///
    /// Returns the phases entered during this call, in order.
    pub fn advance(&mut self, now: Instant) -> Vec<Phase> {
        let mut entered = Vec::new();
        if self.phase == Phase::Removed {
            return entered;
        }

        match self.timeline.advance(now) {
            Some(Direction::Forward) if self.phase == Phase::Entering => {
                self.phase = Phase::Visible;
                entered.push(Phase::Visible);
            }
            Some(Direction::Reverse) if self.phase == Phase::Exiting => {
                self.phase = Phase::Removed;
                entered.push(Phase::Removed);
                return entered;
            }
            _ => {}
        }

        let expired = self.countdown.is_some_and(|c| c.is_finished(now));
        if expired && matches!(self.phase, Phase::Entering | Phase::Visible) {
            self.begin_exit(Trigger::Countdown, now);
            entered.push(Phase::Exiting);
            if self.timeline.advance(now) == Some(Direction::Reverse) {
                self.phase = Phase::Removed;
                entered.push(Phase::Removed);
            }
        }

        entered
    }

    /// Starts the exit unless it is already running or the trigger is a
    /// gesture on a non-dismissible notification.
    ///
    /// Returns `true` when the exit started.
    pub fn request_exit(&mut self, trigger: Trigger, now: Instant) -> bool {
        if matches!(self.phase, Phase::Exiting | Phase::Removed) {
            return false;
        }
        if trigger.is_user_gesture() && !self.spec.is_dismissible() {
            log::debug!(
                "toast {} ignores {trigger:?}: not dismissible",
                self.generation
            );
            return false;
        }
        self.begin_exit(trigger, now);
        true
    }

    fn begin_exit(&mut self, trigger: Trigger, now: Instant) {
        // Reverse from where the toast is now, not from the last frame.
        if self.timeline.advance(now) == Some(Direction::Forward) && self.phase == Phase::Entering
        {
            self.phase = Phase::Visible;
        }
        log::debug!(
            "toast {} exiting ({trigger:?}) from progress {:.2}",
            self.generation,
            self.timeline.progress()
        );
        self.phase = Phase::Exiting;
        self.drag.release();
        self.timeline.reverse(now);
    }

    /// Tap on the body: runs `on_tap` when set, dismisses otherwise.
    pub fn tap(&mut self, now: Instant) -> TapOutcome {
        if matches!(self.phase, Phase::Exiting | Phase::Removed) {
            return TapOutcome::Ignored;
        }
        if let Some(callback) = self.spec.tap_callback() {
            callback.call();
            return TapOutcome::Callback;
        }
        if self.request_exit(Trigger::Tap, now) {
            TapOutcome::Dismissing
        } else {
            TapOutcome::Ignored
        }
    }

    /// Action button: runs `on_action_pressed`, then dismisses if allowed.
    pub fn press_action(&mut self, now: Instant) -> bool {
        if matches!(self.phase, Phase::Exiting | Phase::Removed) {
            return false;
        }
        if let Some(callback) = self.spec.action_callback() {
            callback.call();
        }
        self.request_exit(Trigger::Action, now)
    }

    pub fn press_close(&mut self, now: Instant) -> bool {
        self.request_exit(Trigger::CloseButton, now)
    }

    pub fn pointer_moved(&mut self, x: f32) {
        self.drag.pointer_x = Some(x);
        if !self.drag.tracking {
            return;
        }
        match self.drag.origin {
            Some(origin) => self.drag.offset = x - origin,
            None => self.drag.origin = Some(x),
        }
    }

    /// Records a press on the notification and, when it is dismissible,
    /// starts tracking a horizontal drag.
    ///
    /// Without a known pointer position the drag anchors at the first move
    /// after the press.
    pub fn pointer_pressed(&mut self) {
        if !matches!(self.phase, Phase::Entering | Phase::Visible) {
            return;
        }
        self.drag.pressed = true;
        if self.spec.is_dismissible() {
            self.drag.tracking = true;
            self.drag.origin = self.drag.pointer_x;
            self.drag.offset = 0.0;
        }
    }

    /// Ends a press: far enough is a swipe, barely moved is a tap, anything
    /// in between snaps back.
    ///
    /// Returns `true` when the release started the exit.
    /// A release without a matching press on the notification is ignored.
    pub fn pointer_released(&mut self, now: Instant) -> bool {
        let travel = self.drag.offset.abs();
        let was_pressed = self.drag.pressed;
        self.drag.release();

        if !was_pressed {
            return false;
        }
        if travel >= SWIPE_DISMISS_DISTANCE {
            return self.request_exit(Trigger::Swipe, now);
        }
        if travel <= TAP_SLOP {
            return self.tap(now) == TapOutcome::Dismissing;
        }
        false
    }

    /// Pointer left the notification mid-press. Completes a swipe that
    /// already travelled far enough, otherwise snaps back.
    pub fn pointer_left(&mut self, now: Instant) -> bool {
        let travel = self.drag.offset.abs();
        self.drag = Drag::default();
        travel >= SWIPE_DISMISS_DISTANCE && self.request_exit(Trigger::Swipe, now)
    }

    /// Visual parameters at `now`.
    #[must_use]
    pub fn frame(&self, now: Instant) -> VisualFrame {
        let mut frame = VisualFrame::at(self.timeline.progress());

        if self.is_dragging() {
            frame.drag_offset = self.drag.offset;
            let fade = (self.drag.offset.abs() / (SWIPE_DISMISS_DISTANCE * 2.0)).min(0.5);
            frame.opacity *= 1.0 - fade;
        }

        if self.spec.has_progress_bar() {
            frame.progress_fill = self.countdown.map(|c| c.fill(now));
        }

        frame
    }
}
