// SPDX-License-Identifier: MPL-2.0
//! The layer slider core: a circular slide sequencer with an autoplay
//! driver, navigated through pagination, arrows, keyboard, and swipe.
//!
//! The core holds no timers of its own. The host schedules ticks and
//! passes the current instant into every time-sensitive operation, which
//! keeps the entire state machine deterministic under test. Anomalous
//! input (empty deck, out-of-range index, navigation during a transition)
//! degrades to a silent no-op; no operation returns an error.

pub mod autoplay;
pub mod input;
pub mod sequencer;

pub use autoplay::{AutoplayDriver, TickOutcome};
pub use input::{NavDirection, SwipeTracker};
pub use sequencer::{Sequencer, SlideTag};

use crate::config::defaults;
use std::time::{Duration, Instant};

/// Options recognized by [`LayerSlider::new`], fixed for the lifetime of
/// the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOptions {
    /// Enables the autoplay driver.
    pub autoplay: bool,
    /// Full-cycle duration before an automatic advance.
    pub autoplay_delay: Duration,
    /// Visual duration of a slide transition.
    pub animation_duration: Duration,
    /// Pause autoplay while the pointer hovers the slider.
    pub pause_on_hover: bool,
    /// Navigate with the global Left/Right arrow keys.
    pub keyboard: bool,
    /// Navigate with pointer/touch swipes.
    pub swipe: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay: defaults::DEFAULT_AUTOPLAY,
            autoplay_delay: Duration::from_millis(defaults::DEFAULT_AUTOPLAY_DELAY_MS),
            animation_duration: Duration::from_millis(defaults::DEFAULT_ANIMATION_DURATION_MS),
            pause_on_hover: defaults::DEFAULT_PAUSE_ON_HOVER,
            keyboard: defaults::DEFAULT_KEYBOARD,
            swipe: defaults::DEFAULT_SWIPE,
        }
    }
}

impl SliderOptions {
    /// Autoplay runs only when enabled with a positive delay; a zero
    /// delay is a normal "disabled" configuration, not a fault.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay && !self.autoplay_delay.is_zero()
    }
}

/// The slider facade owning the sequencer and the autoplay driver.
///
/// The driver only ever requests advances through the sequencer; the
/// sequencer never reaches into the driver except through the restart
/// rule below. Restart authority after an elapsed cycle: when the
/// auto-advance starts a transition, the transition-completion tick
/// restarts the driver; when the advance is rejected (single slide), the
/// same tick restarts the cycle directly. Exactly one path runs, so the
/// driver cannot double-start.
#[derive(Debug)]
pub struct LayerSlider {
    options: SliderOptions,
    sequencer: Sequencer,
    autoplay: AutoplayDriver,
    destroyed: bool,
}

impl LayerSlider {
    /// Builds a slider over `slide_count` slides and starts autoplay when
    /// configured. Zero slides yield a valid, inert slider.
    pub fn new(slide_count: usize, options: SliderOptions, now: Instant) -> Self {
        let sequencer = Sequencer::new(slide_count, options.animation_duration);
        let mut autoplay = AutoplayDriver::new(&options);
        if slide_count > 0 {
            autoplay.start(now);
        }
        Self {
            options,
            sequencer,
            autoplay,
            destroyed: false,
        }
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn slide_count(&self) -> usize {
        self.sequencer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequencer.is_empty()
    }

    /// Index of the active slide, or `None` for an empty slider.
    pub fn current_slide(&self) -> Option<usize> {
        self.sequencer.current()
    }

    pub fn slide_tag(&self, index: usize) -> Option<SlideTag> {
        self.sequencer.tag(index)
    }

    pub fn is_transitioning(&self) -> bool {
        self.sequencer.is_transitioning()
    }

    /// Slide fading out during the in-flight transition, for layering.
    pub fn leaving_slide(&self) -> Option<usize> {
        self.sequencer.leaving()
    }

    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        self.sequencer.transition_progress(now)
    }

    /// Autoplay progress fraction in `[0, 1]` for the progress indicator.
    pub fn autoplay_progress(&self) -> f32 {
        self.autoplay.progress()
    }

    pub fn is_autoplay_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    /// Navigates to `index`. Silently ignored while destroyed, empty,
    /// transitioning, or when `index` is current or out of range.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        self.navigate(index, now);
    }

    /// Advances to the circular successor of the current slide.
    pub fn next(&mut self, now: Instant) {
        if let Some(target) = self.sequencer.next_index() {
            self.navigate(target, now);
        }
    }

    /// Navigates to the circular predecessor of the current slide.
    pub fn previous(&mut self, now: Instant) {
        if let Some(target) = self.sequencer.previous_index() {
            self.navigate(target, now);
        }
    }

    /// Suspends autoplay ticking; the in-flight transition, if any, still
    /// completes. Progress keeps its value for the indicator.
    pub fn pause_autoplay(&mut self) {
        if !self.destroyed {
            self.autoplay.pause();
        }
    }

    /// Resumes autoplay from the point of pause. Never advances a slide
    /// by itself.
    pub fn resume_autoplay(&mut self, now: Instant) {
        if !self.destroyed {
            self.autoplay.resume(now);
        }
    }

    /// Tears the slider down: all operations become no-ops and
    /// [`LayerSlider::needs_tick`] stays false, so the host scheduler has
    /// nothing left to fire.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.autoplay.reset();
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Whether the host should keep scheduling ticks: an in-flight
    /// transition or a running autoplay cycle.
    pub fn needs_tick(&self) -> bool {
        !self.destroyed
            && !self.sequencer.is_empty()
            && (self.sequencer.is_transitioning() || self.autoplay.is_running())
    }

    /// Single host-driven entry point advancing both state machines.
    pub fn tick(&mut self, now: Instant) {
        if self.destroyed || self.sequencer.is_empty() {
            return;
        }

        if self.sequencer.tick(now) {
            // transition just completed; this path owns the autoplay
            // restart (start is a no-op while paused or disabled)
            self.autoplay.start(now);
        }

        if self.autoplay.tick(now) == TickOutcome::Elapsed {
            let advanced = self
                .sequencer
                .next_index()
                .map(|target| self.navigate(target, now))
                .unwrap_or(false);
            if !advanced {
                // rejected advance (e.g. single slide): no transition will
                // complete, so the tick path restarts the cycle itself
                self.autoplay.start(now);
            }
        }
    }

    fn navigate(&mut self, target: usize, now: Instant) -> bool {
        if self.destroyed {
            return false;
        }
        let started = self.sequencer.begin_transition(target, now);
        if started {
            self.autoplay.reset();
        }
        started
    }
}
