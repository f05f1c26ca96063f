// SPDX-License-Identifier: MPL-2.0
//! Autoplay driver: the timer state machine behind automatic advancement.
//!
//! The driver owns the autoplay session (progress fraction, pause flag)
//! and never touches sequencer state; it only reports when a cycle has
//! elapsed so the owner can request the advance. Progress is recomputed
//! from wall-clock elapsed time on every tick, so dropped ticks lose no
//! time.

use super::SliderOptions;
use std::time::{Duration, Instant};

/// Result of advancing the driver by one host tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No active cycle, or the driver is paused.
    Idle,
    /// The cycle progressed but has not yet elapsed.
    Running,
    /// The cycle just elapsed; the owner should advance the slide. The
    /// cycle is consumed, so this is reported exactly once per cycle.
    Elapsed,
}

#[derive(Debug, Clone, Copy)]
struct Cycle {
    started_at: Instant,
    progress: f32,
}

/// Timer state machine driving automatic slide advancement.
///
/// Configuration can disable the driver entirely (autoplay off, or a zero
/// delay); a disabled driver ignores `start` and `resume` and reports
/// [`TickOutcome::Idle`] forever. That is a normal state, not a fault.
#[derive(Debug)]
pub struct AutoplayDriver {
    delay: Duration,
    enabled: bool,
    paused: bool,
    cycle: Option<Cycle>,
}

impl AutoplayDriver {
    pub fn new(options: &SliderOptions) -> Self {
        Self {
            delay: options.autoplay_delay,
            enabled: options.autoplay_enabled(),
            paused: false,
            cycle: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a cycle is active and ticking (not paused).
    pub fn is_running(&self) -> bool {
        !self.paused && self.cycle.is_some()
    }

    /// Progress fraction of the current cycle in `[0, 1]`. Retains its
    /// last value while paused; 0 when no cycle is active.
    pub fn progress(&self) -> f32 {
        self.cycle.map(|c| c.progress).unwrap_or(0.0)
    }

    /// Begins a fresh cycle with progress 0. Ignored while disabled or
    /// paused; restart after a pause goes through [`AutoplayDriver::resume`].
    pub fn start(&mut self, now: Instant) {
        if !self.enabled || self.paused {
            return;
        }
        self.cycle = Some(Cycle {
            started_at: now,
            progress: 0.0,
        });
    }

    /// Stops ticking without resetting the published progress fraction.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes ticking from the elapsed baseline captured at pause. Never
    /// advances a slide by itself; the earliest possible advance is a later
    /// tick. Ignored while disabled.
    pub fn resume(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        self.paused = false;
        match &mut self.cycle {
            Some(cycle) => {
                let elapsed = self.delay.mul_f32(cycle.progress.clamp(0.0, 1.0));
                // checked_sub only fails when the elapsed baseline predates
                // the clock's epoch; fall back to a fresh cycle.
                match now.checked_sub(elapsed) {
                    Some(started_at) => cycle.started_at = started_at,
                    None => {
                        *cycle = Cycle {
                            started_at: now,
                            progress: 0.0,
                        }
                    }
                }
            }
            None => self.start(now),
        }
    }

    /// Discards the active cycle and forces progress back to 0. Called at
    /// the start of every transition so autoplay always grants a full
    /// fresh delay after navigation, manual or automatic.
    pub fn reset(&mut self) {
        self.cycle = None;
    }

    /// Recomputes progress from elapsed time. Reports
    /// [`TickOutcome::Elapsed`] exactly once when the cycle reaches its
    /// full delay.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.paused {
            return TickOutcome::Idle;
        }
        let Some(cycle) = &mut self.cycle else {
            return TickOutcome::Idle;
        };

        let elapsed = now.saturating_duration_since(cycle.started_at);
        cycle.progress = (elapsed.as_secs_f32() / self.delay.as_secs_f32()).min(1.0);

        if cycle.progress >= 1.0 {
            self.cycle = None;
            TickOutcome::Elapsed
        } else {
            TickOutcome::Running
        }
    }
}
