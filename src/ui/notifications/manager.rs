// SPDX-License-Identifier: MPL-2.0
//! Single-slot display arbitration.
//!
//! The `Manager` owns at most one [`ActiveNotification`] together with its
//! mounted overlay handle and safety-net timer. Showing a notification first
//! tears down whatever occupies the slot, so two notifications never coexist,
//! not even for the duration of one call.

use super::host::{Host, MountRequest};
use super::lifecycle::{ActiveNotification, Phase, Trigger};
use super::notification::{Generation, NotificationSpec};
use super::timeline::VisualFrame;
use crate::config::{ENTRANCE_DURATION_MS, SETTLE_MARGIN_MS};
use crate::ui::design_tokens::spacing;
use std::time::{Duration, Instant};

/// Animation timing shared by every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Entrance length; the exit mirrors it.
    pub entrance: Duration,
    /// Extra delay past a notification's duration before the safety net fires.
    pub settle_margin: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            entrance: Duration::from_millis(ENTRANCE_DURATION_MS),
            settle_margin: Duration::from_millis(SETTLE_MARGIN_MS),
        }
    }
}

/// User input aimed at the notification on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap,
    Action,
    Close,
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    PointerLeft,
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame.
    Frame(Instant),
    /// Safety-net timer scheduled for this generation fired.
    TimerElapsed(Generation),
    /// Input on the notification of this generation.
    Gesture(Generation, Gesture),
}

struct Slot<H: Host> {
    notification: ActiveNotification,
    mount: H::Mount,
    timer: Option<H::Timer>,
    /// Set once the safety net has been pushed back to let an exit finish.
    safety_deferred: bool,
}

/// Display arbitrator holding at most one notification.
pub struct Manager<H: Host> {
    slot: Option<Slot<H>>,
    last_generation: Generation,
    timing: Timing,
}

impl<H: Host> Default for Manager<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> std::fmt::Debug for Manager<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("active", &self.slot.as_ref().map(|s| &s.notification))
            .field("last_generation", &self.last_generation)
            .field("timing", &self.timing)
            .finish()
    }
}

impl<H: Host> Manager<H> {
    /// Creates an empty manager with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(Timing::default())
    }

    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            slot: None,
            last_generation: Generation::default(),
            timing,
        }
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Shows `spec`, replacing any notification already on screen.
    ///
    /// The previous notification's timer is cancelled and its overlay
    /// unmounted before the new one is mounted, whatever phase it was in.
    /// A non-zero duration schedules a safety-net removal at
    /// `duration + settle_margin`.
    pub fn show(&mut self, spec: NotificationSpec, host: &mut H, now: Instant) -> Generation {
        if let Some(previous) = self.slot.take() {
            log::debug!(
                "toast {} replaced while {:?}",
                previous.notification.generation(),
                previous.notification.phase()
            );
            Self::release(previous, host);
        }

        let generation = self.last_generation.next();
        self.last_generation = generation;

        let duration = spec.duration();
        log::debug!(
            "toast {generation} entering: {:?} ({}, {duration:?})",
            spec.message(),
            spec.category()
        );

        let notification = ActiveNotification::new(spec, generation, self.timing.entrance, now);
        let top = host.top_inset() + spacing::MD;
        let mount = host.mount(MountRequest { generation, top });
        let timer = (!duration.is_zero())
            .then(|| host.schedule(duration + self.timing.settle_margin, generation));

        self.slot = Some(Slot {
            notification,
            mount,
            timer,
            safety_deferred: false,
        });
        generation
    }

    /// Removes the current notification immediately, without an exit
    /// animation. Does nothing when the slot is empty.
    pub fn dismiss(&mut self, host: &mut H) {
        if let Some(slot) = self.slot.take() {
            log::debug!("toast {} dismissed", slot.notification.generation());
            Self::release(slot, host);
        }
    }

    /// Animation frame: advances the notification and unmounts it once its
    /// exit completes.
    pub fn tick(&mut self, host: &mut H, now: Instant) {
        if let Some(slot) = self.slot.as_mut() {
            for phase in slot.notification.advance(now) {
                log::debug!("toast {} -> {phase:?}", slot.notification.generation());
            }
        }
        self.collect_removed(host);
    }

    /// Safety-net timer delivery.
    ///
    /// Stale generations are ignored. A notification whose exit was already
    /// running gets one extension covering the rest of that exit; otherwise
    /// it is removed on the spot.
    pub fn timer_elapsed(&mut self, generation: Generation, host: &mut H, now: Instant) {
        let Some(slot) = self.current_mut(generation) else {
            log::trace!("dropping stale timer for toast {generation}");
            return;
        };

        slot.timer = None;
        let was_exiting = slot.notification.phase() == Phase::Exiting;
        slot.notification.advance(now);

        let remaining = slot.notification.remaining_exit();
        if was_exiting
            && slot.notification.phase() == Phase::Exiting
            && !remaining.is_zero()
            && !slot.safety_deferred
        {
            log::debug!("toast {generation} safety net deferred by {remaining:?}");
            slot.safety_deferred = true;
            slot.timer = Some(host.schedule(remaining, generation));
            return;
        }

        if slot.notification.phase() != Phase::Removed {
            log::debug!("toast {generation} force-removed by safety net");
            slot.notification.request_exit(Trigger::SafetyNet, now);
        }
        if let Some(slot) = self.slot.take() {
            Self::release(slot, host);
        }
    }

    /// Routes input to the notification of `generation`; stale input is
    /// ignored.
    pub fn gesture(&mut self, generation: Generation, gesture: Gesture, host: &mut H, now: Instant) {
        let Some(slot) = self.current_mut(generation) else {
            log::trace!("dropping {gesture:?} for stale toast {generation}");
            return;
        };

        let notification = &mut slot.notification;
        match gesture {
            Gesture::Tap => {
                notification.tap(now);
            }
            Gesture::Action => {
                notification.press_action(now);
            }
            Gesture::Close => {
                notification.press_close(now);
            }
            Gesture::PointerMoved(x) => notification.pointer_moved(x),
            Gesture::PointerPressed => notification.pointer_pressed(),
            Gesture::PointerReleased => {
                notification.pointer_released(now);
            }
            Gesture::PointerLeft => {
                notification.pointer_left(now);
            }
        }
        notification.advance(now);
        self.collect_removed(host);
    }

    /// Applies a [`Message`] produced by the host.
    pub fn handle_message(&mut self, message: &Message, host: &mut H, now: Instant) {
        match message {
            Message::Frame(at) => self.tick(host, *at),
            Message::TimerElapsed(generation) => self.timer_elapsed(*generation, host, now),
            Message::Gesture(generation, gesture) => {
                self.gesture(*generation, *gesture, host, now);
            }
        }
    }

    /// Returns the notification on screen.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveNotification> {
        self.slot.as_ref().map(|slot| &slot.notification)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.active().map(ActiveNotification::phase)
    }

    /// Generation of the notification on screen.
    #[must_use]
    pub fn generation(&self) -> Option<Generation> {
        self.active().map(ActiveNotification::generation)
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Option<VisualFrame> {
        self.active().map(|n| n.frame(now))
    }

    /// Returns whether the host should keep delivering frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active().is_some_and(ActiveNotification::is_animating)
    }

    fn current_mut(&mut self, generation: Generation) -> Option<&mut Slot<H>> {
        self.slot
            .as_mut()
            .filter(|slot| slot.notification.generation() == generation)
    }

    fn collect_removed(&mut self, host: &mut H) {
        if self.phase() == Some(Phase::Removed) {
            if let Some(slot) = self.slot.take() {
                log::debug!("toast {} removed", slot.notification.generation());
                Self::release(slot, host);
            }
        }
    }

    fn release(slot: Slot<H>, host: &mut H) {
        if let Some(timer) = slot.timer {
            host.cancel(timer);
        }
        host.unmount(slot.mount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{HostEvent, RecordingHost};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager: Manager<RecordingHost> = Manager::new();
        assert!(!manager.is_active());
        assert!(manager.phase().is_none());
        assert!(!manager.is_animating());
    }

    #[test]
    fn show_mounts_below_inset_and_schedules_safety_net() {
        let mut host = RecordingHost::with_inset(24.0);
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let generation = manager.show(NotificationSpec::new("Saved"), &mut host, t0);

        assert_eq!(manager.generation(), Some(generation));
        assert_eq!(manager.phase(), Some(Phase::Entering));
        assert_eq!(
            host.events(),
            &[
                HostEvent::Mounted {
                    mount: 0,
                    generation,
                    top: 24.0 + spacing::MD,
                },
                HostEvent::Scheduled {
                    timer: 0,
                    generation,
                    delay: ms(3600),
                },
            ]
        );
    }

    #[test]
    fn zero_duration_schedules_nothing() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        manager.show(
            NotificationSpec::new("Sticky").with_duration(Duration::ZERO),
            &mut host,
            Instant::now(),
        );
        assert_eq!(host.scheduled_count(), 0);
    }

    #[test]
    fn show_replaces_previous_notification() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let first = manager.show(NotificationSpec::new("A"), &mut host, t0);
        let second = manager.show(NotificationSpec::new("B"), &mut host, t0 + ms(10));

        assert_ne!(first, second);
        assert_eq!(host.live_mounts(), 1);
        assert_eq!(host.unmount_count(), 1);
        assert_eq!(host.cancel_count(), 1);
        assert_eq!(manager.active().map(|n| n.spec().message()), Some("B"));
    }

    #[test]
    fn dismiss_is_immediate_and_idempotent() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        manager.show(NotificationSpec::new("Bye"), &mut host, Instant::now());

        manager.dismiss(&mut host);
        manager.dismiss(&mut host);

        assert!(!manager.is_active());
        assert_eq!(host.unmount_count(), 1);
        assert_eq!(host.cancel_count(), 1);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let first = manager.show(NotificationSpec::new("A"), &mut host, t0);
        manager.show(NotificationSpec::new("B"), &mut host, t0);
        manager.timer_elapsed(first, &mut host, t0 + ms(3600));

        assert_eq!(manager.phase(), Some(Phase::Entering));
        assert_eq!(host.live_mounts(), 1);
    }

    #[test]
    fn stale_gesture_is_ignored() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let first = manager.show(NotificationSpec::new("A"), &mut host, t0);
        manager.show(NotificationSpec::new("B"), &mut host, t0);
        manager.gesture(first, Gesture::Close, &mut host, t0 + ms(50));

        assert_eq!(manager.phase(), Some(Phase::Entering));
    }

    #[test]
    fn safety_net_removes_a_stalled_notification() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let generation = manager.show(NotificationSpec::new("Stalled"), &mut host, t0);
        manager.timer_elapsed(generation, &mut host, t0 + ms(3600));

        assert!(!manager.is_active());
        assert_eq!(host.unmount_count(), 1);
        assert_eq!(host.cancel_count(), 0);
    }

    #[test]
    fn safety_net_defers_once_for_a_running_exit() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let generation = manager.show(NotificationSpec::new("Slow exit"), &mut host, t0);
        manager.tick(&mut host, t0 + ms(500));
        manager.gesture(generation, Gesture::Close, &mut host, t0 + ms(3400));

        manager.timer_elapsed(generation, &mut host, t0 + ms(3600));
        assert_eq!(manager.phase(), Some(Phase::Exiting));
        assert_eq!(host.scheduled_count(), 2);

        manager.timer_elapsed(generation, &mut host, t0 + ms(3600));
        assert!(!manager.is_active());
    }

    #[test]
    fn gesture_close_then_frames_remove_notification() {
        let mut host = RecordingHost::default();
        let mut manager = Manager::new();
        let t0 = Instant::now();

        let generation = manager.show(NotificationSpec::new("Close me"), &mut host, t0);
        manager.tick(&mut host, t0 + ms(500));
        manager.handle_message(&Message::Gesture(generation, Gesture::Close), &mut host, t0 + ms(1000));
        assert_eq!(manager.phase(), Some(Phase::Exiting));

        manager.handle_message(&Message::Frame(t0 + ms(1500)), &mut host, t0 + ms(1500));
        assert!(!manager.is_active());
        assert_eq!(host.cancel_count(), 1);
        assert_eq!(host.unmount_count(), 1);
    }
}
