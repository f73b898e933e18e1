// SPDX-License-Identifier: MPL-2.0
//! Normalized animation timeline and the visual values derived from it.
//!
//! A [`Timeline`] moves a progress value between 0 and 1 over wall-clock
//! time. It never reads the clock itself: every call receives `now`, so the
//! same sequence of instants always produces the same sequence of values.
//! The visual parameters of a toast (offset, opacity, scale, icon rotation)
//! are pure functions of that progress, collected in [`VisualFrame`].

use crate::config::{MIN_SCALE, SLIDE_DISTANCE};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Easing curves, all mapping `[0, 1]` onto values starting at 0 and ending at 1.
pub mod curve {
    const BACK_OVERSHOOT: f32 = 1.701_58;

    /// Overshoots past 1 before settling.
    #[must_use]
    pub fn ease_out_back(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let c3 = BACK_OVERSHOOT + 1.0;
        let u = t - 1.0;
        1.0 + c3 * u * u * u + BACK_OVERSHOOT * u * u
    }

    #[must_use]
    pub fn ease_in_out_cubic(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            let u = -2.0 * t + 2.0;
            1.0 - u * u * u / 2.0
        }
    }

    #[must_use]
    pub fn ease_out_cubic(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        1.0 - u * u * u
    }
}

/// Direction of a running timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards progress 1 (entrance).
    Forward,
    /// Towards progress 0 (exit).
    Reverse,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    direction: Direction,
    from: f32,
    started_at: Instant,
}

/// Progress value in `[0, 1]` driven by explicit clock samples.
#[derive(Debug, Clone)]
pub struct Timeline {
    length: Duration,
    progress: f32,
    run: Option<Run>,
}

impl Timeline {
    /// Creates an idle timeline parked at progress 0.
    #[must_use]
    pub fn new(length: Duration) -> Self {
        Self {
            length,
            progress: 0.0,
            run: None,
        }
    }

    /// Starts running towards 1 from the current progress.
    pub fn forward(&mut self, now: Instant) {
        self.start(Direction::Forward, now);
    }

    /// Starts running towards 0 from the current progress.
    ///
    /// A full reverse takes the same `length` as a full forward run, so a
    /// reverse started half way finishes in half the time.
    pub fn reverse(&mut self, now: Instant) {
        self.start(Direction::Reverse, now);
    }

    fn start(&mut self, direction: Direction, now: Instant) {
        self.run = Some(Run {
            direction,
            from: self.progress,
            started_at: now,
        });
    }

    /// Samples the clock. Returns the direction that just completed, if the
    /// timeline reached its end on this sample.
    pub fn advance(&mut self, now: Instant) -> Option<Direction> {
        let run = self.run?;
        let delta = if self.length.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(run.started_at);
            (elapsed.as_secs_f64() / self.length.as_secs_f64()) as f32
        };

        let (progress, done) = match run.direction {
            Direction::Forward => {
                let p = (run.from + delta).min(1.0);
                (p, p >= 1.0)
            }
            Direction::Reverse => {
                let p = (run.from - delta).max(0.0);
                (p, p <= 0.0)
            }
        };

        self.progress = progress.clamp(0.0, 1.0);
        if done {
            self.run = None;
            Some(run.direction)
        } else {
            None
        }
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.run.map(|run| run.direction)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn length(&self) -> Duration {
        self.length
    }

    /// Time a reverse run needs from the current progress to reach 0.
    #[must_use]
    pub fn reverse_length(&self) -> Duration {
        self.length.mul_f32(self.progress)
    }
}

/// Linear countdown spanning exactly the notification's display duration.
///
/// Independent from the entrance timeline; it drives the progress bar and its
/// completion is the normal auto-dismiss trigger.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    started_at: Instant,
    length: Duration,
}

impl Countdown {
    /// Returns `None` for a zero length, which means "no countdown".
    #[must_use]
    pub fn start(length: Duration, now: Instant) -> Option<Self> {
        (!length.is_zero()).then_some(Self {
            started_at: now,
            length,
        })
    }

    /// Remaining fraction, from 1.0 at start down to 0.0 at expiry.
    #[must_use]
    pub fn fill(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let ratio = elapsed.as_secs_f64() / self.length.as_secs_f64();
        (1.0 - ratio).clamp(0.0, 1.0) as f32
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.length
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.started_at + self.length
    }
}

/// Visual parameters of a toast at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualFrame {
    /// Vertical offset from the resting slot, negative is above it.
    pub offset_y: f32,
    /// Horizontal drag travel while the user swipes.
    pub drag_offset: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Icon rotation in radians, within `[0, 2π)`.
    pub icon_rotation: f32,
    /// Countdown bar fill, present only when the bar is drawn.
    pub progress_fill: Option<f32>,
}

impl VisualFrame {
    /// Derives the animated values for the given timeline progress.
    #[must_use]
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let back = curve::ease_out_back(p);

        Self {
            offset_y: -(1.0 - back) * SLIDE_DISTANCE,
            drag_offset: 0.0,
            opacity: curve::ease_in_out_cubic(p).clamp(0.0, 1.0),
            scale: MIN_SCALE + (1.0 - MIN_SCALE) * back,
            icon_rotation: (curve::ease_out_cubic(p) * TAU).rem_euclid(TAU),
            progress_fill: None,
        }
    }
}
