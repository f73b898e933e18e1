// SPDX-License-Identifier: MPL-2.0
//! Test utilities: a recording host and a deterministic frame-driven harness.
//!
//! [`RecordingHost`] logs every mount, unmount, schedule and cancel the
//! arbitrator performs. [`Harness`] advances a synthetic clock in frame-sized
//! steps, delivers due timers and animation frames in order, and records the
//! phase sequence each notification goes through.

use crate::config::FRAME_INTERVAL_MS;
use crate::ui::notifications::{
    Generation, Gesture, Host, Manager, MountRequest, NotificationSpec, Phase, Timing,
};
use std::time::{Duration, Instant};

/// One call made by the arbitrator on its host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Mounted {
        mount: u64,
        generation: Generation,
        top: f32,
    },
    Unmounted {
        mount: u64,
    },
    Scheduled {
        timer: u64,
        generation: Generation,
        delay: Duration,
    },
    Cancelled {
        timer: u64,
    },
}

/// Mount handle handed out by [`RecordingHost`]. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedMount(u64);

/// Timer handle handed out by [`RecordingHost`]. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedTimer(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: u64,
    generation: Generation,
    due: Instant,
}

/// Host that records calls instead of rendering anything.
#[derive(Debug)]
pub struct RecordingHost {
    inset: f32,
    now: Instant,
    next_mount: u64,
    next_timer: u64,
    live: Vec<u64>,
    pending: Vec<PendingTimer>,
    events: Vec<HostEvent>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::with_inset(0.0)
    }
}

impl RecordingHost {
    #[must_use]
    pub fn with_inset(inset: f32) -> Self {
        Self {
            inset,
            now: Instant::now(),
            next_mount: 0,
            next_timer: 0,
            live: Vec::new(),
            pending: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Sets the clock used to compute timer deadlines.
    pub fn set_now(&mut self, now: Instant) {
        self.now = now;
    }

    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Number of currently mounted elements.
    #[must_use]
    pub fn live_mounts(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn unmount_count(&self) -> usize {
        self.count(|e| matches!(e, HostEvent::Unmounted { .. }))
    }

    #[must_use]
    pub fn cancel_count(&self) -> usize {
        self.count(|e| matches!(e, HostEvent::Cancelled { .. }))
    }

    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        self.count(|e| matches!(e, HostEvent::Scheduled { .. }))
    }

    /// Timers neither cancelled nor fired yet.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Generation> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= now)
            .min_by_key(|(_, timer)| timer.due)
            .map(|(index, _)| index)?;
        Some(self.pending.remove(index).generation)
    }

    fn count(&self, predicate: impl Fn(&HostEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl Host for RecordingHost {
    type Mount = RecordedMount;
    type Timer = RecordedTimer;

    fn top_inset(&self) -> f32 {
        self.inset
    }

    fn mount(&mut self, request: MountRequest) -> RecordedMount {
        let id = self.next_mount;
        self.next_mount += 1;
        self.live.push(id);
        self.events.push(HostEvent::Mounted {
            mount: id,
            generation: request.generation,
            top: request.top,
        });
        RecordedMount(id)
    }

    fn unmount(&mut self, mount: RecordedMount) {
        self.live.retain(|id| *id != mount.0);
        self.events.push(HostEvent::Unmounted { mount: mount.0 });
    }

    fn schedule(&mut self, delay: Duration, generation: Generation) -> RecordedTimer {
        let id = self.next_timer;
        self.next_timer += 1;
        self.pending.push(PendingTimer {
            id,
            generation,
            due: self.now + delay,
        });
        self.events.push(HostEvent::Scheduled {
            timer: id,
            generation,
            delay,
        });
        RecordedTimer(id)
    }

    fn cancel(&mut self, timer: RecordedTimer) {
        self.pending.retain(|pending| pending.id != timer.0);
        self.events.push(HostEvent::Cancelled { timer: timer.0 });
    }
}

/// Phase change observed by the [`Harness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    /// Time since the harness started.
    pub at: Duration,
    pub generation: Generation,
    pub phase: Phase,
}

/// Drives a [`Manager`] over a synthetic clock.
#[derive(Debug)]
pub struct Harness {
    pub manager: Manager<RecordingHost>,
    pub host: RecordingHost,
    start: Instant,
    now: Instant,
    frame: Duration,
    last_seen: Option<(Generation, Phase)>,
    observations: Vec<Observation>,
    max_live_mounts: usize,
}

impl Default for Harness {
    fn default() -> Self {
        Self::with_timing(Timing::default())
    }
}

impl Harness {
    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        let start = Instant::now();
        let mut host = RecordingHost::default();
        host.set_now(start);
        Self {
            manager: Manager::with_timing(timing),
            host,
            start,
            now: start,
            frame: Duration::from_millis(FRAME_INTERVAL_MS),
            last_seen: None,
            observations: Vec::new(),
            max_live_mounts: 0,
        }
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Time since the harness started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.now - self.start
    }

    pub fn show(&mut self, spec: NotificationSpec) -> Generation {
        self.host.set_now(self.now);
        let generation = self.manager.show(spec, &mut self.host, self.now);
        self.observe();
        generation
    }

    pub fn dismiss(&mut self) {
        self.manager.dismiss(&mut self.host);
        self.observe();
    }

    pub fn gesture(&mut self, generation: Generation, gesture: Gesture) {
        self.host.set_now(self.now);
        self.manager
            .gesture(generation, gesture, &mut self.host, self.now);
        self.observe();
    }

    /// Advances the clock by `duration` one frame at a time, firing due
    /// timers before each animation frame.
    pub fn advance(&mut self, duration: Duration) {
        let target = self.now + duration;
        while self.now < target {
            self.now = (self.now + self.frame).min(target);
            self.host.set_now(self.now);
            while let Some(generation) = self.host.pop_due(self.now) {
                self.manager
                    .timer_elapsed(generation, &mut self.host, self.now);
                self.observe();
            }
            self.manager.tick(&mut self.host, self.now);
            self.observe();
        }
    }

    /// Advances until the slot empties or `limit` passes.
    pub fn run_until_idle(&mut self, limit: Duration) {
        let deadline = self.elapsed() + limit;
        while self.manager.is_active() && self.elapsed() < deadline {
            self.advance(self.frame);
        }
    }

    /// Every phase change seen so far, in order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Phase sequence of one generation.
    #[must_use]
    pub fn phases_of(&self, generation: Generation) -> Vec<Phase> {
        self.observations
            .iter()
            .filter(|o| o.generation == generation)
            .map(|o| o.phase)
            .collect()
    }

    /// First time `generation` was seen in `phase`.
    #[must_use]
    pub fn time_of(&self, generation: Generation, phase: Phase) -> Option<Duration> {
        self.observations
            .iter()
            .find(|o| o.generation == generation && o.phase == phase)
            .map(|o| o.at)
    }

    /// Highest number of simultaneously mounted elements ever sampled.
    #[must_use]
    pub fn max_live_mounts(&self) -> usize {
        self.max_live_mounts
    }

    fn observe(&mut self) {
        self.max_live_mounts = self.max_live_mounts.max(self.host.live_mounts());
        let current = self
            .manager
            .active()
            .map(|n| (n.generation(), n.phase()));

        if current == self.last_seen {
            return;
        }
        if let Some((generation, phase)) = self.last_seen {
            let replaced = current.map_or(true, |(g, _)| g != generation);
            if replaced && phase != Phase::Removed {
                self.record(generation, Phase::Removed);
            }
        }
        if let Some((generation, phase)) = current {
            self.record(generation, phase);
        }
        self.last_seen = current;
    }

    fn record(&mut self, generation: Generation, phase: Phase) {
        let at = self.elapsed();
        self.observations.push(Observation {
            at,
            generation,
            phase,
        });
    }
}
