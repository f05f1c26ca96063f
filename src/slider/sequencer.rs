// SPDX-License-Identifier: MPL-2.0
//! Slide sequencer: the ordered, circular slide sequence and its visual tags.
//!
//! The sequencer owns the current index and the per-slide visual tag. At
//! most one transition is in flight at a time; a transition once started
//! always completes. All timestamps are supplied by the caller, so the
//! whole state machine runs without reading a clock.

use std::time::{Duration, Instant};

/// Visual state of a single slide. Exactly one slide is [`SlideTag::Active`]
/// at any instant once a non-empty sequencer is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTag {
    /// The slide currently shown (or fading in).
    Active,
    /// The slide fading out underneath the active one.
    Previous,
    /// Any other slide.
    Inactive,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    leaving: usize,
    started_at: Instant,
}

/// State machine for navigating a fixed, circular slide sequence.
#[derive(Debug)]
pub struct Sequencer {
    tags: Vec<SlideTag>,
    current: usize,
    transition: Option<Transition>,
    animation_duration: Duration,
}

impl Sequencer {
    /// Creates a sequencer over `slide_count` slides with slide 0 active.
    ///
    /// With zero slides the sequencer is inert: every operation is a no-op
    /// and [`Sequencer::current`] returns `None`.
    pub fn new(slide_count: usize, animation_duration: Duration) -> Self {
        let mut tags = vec![SlideTag::Inactive; slide_count];
        if let Some(first) = tags.first_mut() {
            *first = SlideTag::Active;
        }
        Self {
            tags,
            current: 0,
            transition: None,
            animation_duration,
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Index of the active slide, or `None` for an empty sequence.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Visual tag of the slide at `index`, or `None` when out of range.
    pub fn tag(&self, index: usize) -> Option<SlideTag> {
        self.tags.get(index).copied()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Index of the slide fading out, while a transition is in flight.
    pub fn leaving(&self) -> Option<usize> {
        self.transition.map(|t| t.leaving)
    }

    /// Index the next forward navigation would target (circular).
    pub fn next_index(&self) -> Option<usize> {
        self.current().map(|current| (current + 1) % self.len())
    }

    /// Index the next backward navigation would target (circular).
    pub fn previous_index(&self) -> Option<usize> {
        self.current()
            .map(|current| (current + self.len() - 1) % self.len())
    }

    /// Starts a transition to `target`.
    ///
    /// Rejected silently (returning `false`, no state change) while another
    /// transition is in flight, when `target` is the current slide, or when
    /// `target` is out of range. On success the old active slide becomes
    /// [`SlideTag::Previous`] and `target` becomes [`SlideTag::Active`] in
    /// the same call; no observer can see two active slides.
    pub fn begin_transition(&mut self, target: usize, now: Instant) -> bool {
        if self.transition.is_some() || target >= self.len() || target == self.current {
            return false;
        }

        self.tags[self.current] = SlideTag::Previous;
        self.tags[target] = SlideTag::Active;
        self.transition = Some(Transition {
            leaving: self.current,
            started_at: now,
        });
        self.current = target;
        true
    }

    /// Advances the in-flight transition, completing it once the animation
    /// duration has elapsed. Returns `true` exactly once per transition, on
    /// the tick that completes it.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        if now.saturating_duration_since(transition.started_at) < self.animation_duration {
            return false;
        }

        self.tags[transition.leaving] = SlideTag::Inactive;
        self.transition = None;
        true
    }

    /// Fraction of the in-flight transition's animation that has elapsed,
    /// in `[0, 1]`. `None` when no transition is in flight.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        let transition = self.transition?;
        let elapsed = now.saturating_duration_since(transition.started_at);
        Some((elapsed.as_secs_f32() / self.animation_duration.as_secs_f32()).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMATION: Duration = Duration::from_millis(1000);

    fn sequencer(n: usize) -> (Sequencer, Instant) {
        (Sequencer::new(n, ANIMATION), Instant::now())
    }

    fn active_count(seq: &Sequencer) -> usize {
        (0..seq.len())
            .filter(|&i| seq.tag(i) == Some(SlideTag::Active))
            .count()
    }

    #[test]
    fn new_sequencer_activates_first_slide() {
        let (seq, _) = sequencer(4);
        assert_eq!(seq.current(), Some(0));
        assert_eq!(seq.tag(0), Some(SlideTag::Active));
        assert_eq!(seq.tag(1), Some(SlideTag::Inactive));
        assert_eq!(active_count(&seq), 1);
    }

    #[test]
    fn empty_sequencer_is_inert() {
        let (mut seq, t0) = sequencer(0);
        assert_eq!(seq.current(), None);
        assert_eq!(seq.next_index(), None);
        assert_eq!(seq.previous_index(), None);
        assert!(!seq.begin_transition(0, t0));
        assert!(!seq.tick(t0));
    }

    #[test]
    fn begin_transition_flips_tags_synchronously() {
        let (mut seq, t0) = sequencer(3);
        assert!(seq.begin_transition(1, t0));

        assert_eq!(seq.current(), Some(1));
        assert_eq!(seq.tag(0), Some(SlideTag::Previous));
        assert_eq!(seq.tag(1), Some(SlideTag::Active));
        assert!(seq.is_transitioning());
        assert_eq!(seq.leaving(), Some(0));
        assert_eq!(active_count(&seq), 1);
    }

    #[test]
    fn transition_to_current_index_is_rejected() {
        let (mut seq, t0) = sequencer(3);
        assert!(!seq.begin_transition(0, t0));
        assert!(!seq.is_transitioning());
    }

    #[test]
    fn transition_out_of_range_is_rejected() {
        let (mut seq, t0) = sequencer(3);
        assert!(!seq.begin_transition(3, t0));
        assert!(!seq.is_transitioning());
    }

    #[test]
    fn overlapping_transition_is_rejected_without_state_change() {
        let (mut seq, t0) = sequencer(4);
        assert!(seq.begin_transition(1, t0));
        assert!(!seq.begin_transition(2, t0 + Duration::from_millis(100)));

        assert_eq!(seq.current(), Some(1));
        assert_eq!(seq.tag(2), Some(SlideTag::Inactive));
        assert_eq!(seq.leaving(), Some(0));
    }

    #[test]
    fn tick_completes_transition_after_animation_duration() {
        let (mut seq, t0) = sequencer(3);
        seq.begin_transition(2, t0);

        assert!(!seq.tick(t0 + Duration::from_millis(999)));
        assert!(seq.is_transitioning());

        assert!(seq.tick(t0 + ANIMATION));
        assert!(!seq.is_transitioning());
        assert_eq!(seq.tag(0), Some(SlideTag::Inactive));
        assert_eq!(seq.tag(2), Some(SlideTag::Active));
        assert_eq!(active_count(&seq), 1);
    }

    #[test]
    fn tick_reports_completion_only_once() {
        let (mut seq, t0) = sequencer(2);
        seq.begin_transition(1, t0);

        assert!(seq.tick(t0 + ANIMATION));
        assert!(!seq.tick(t0 + ANIMATION * 2));
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let (mut seq, t0) = sequencer(5);
        // currentIndex = 4 via a completed transition
        seq.begin_transition(4, t0);
        seq.tick(t0 + ANIMATION);

        assert_eq!(seq.next_index(), Some(0));

        let (seq3, _) = sequencer(3);
        assert_eq!(seq3.previous_index(), Some(2));
    }

    #[test]
    fn single_slide_navigation_targets_itself_and_is_rejected() {
        let (mut seq, t0) = sequencer(1);
        assert_eq!(seq.next_index(), Some(0));
        assert!(!seq.begin_transition(0, t0));
    }

    #[test]
    fn index_stays_in_range_under_arbitrary_navigation() {
        let (mut seq, t0) = sequencer(4);
        let mut now = t0;
        for step in 0..40 {
            let target = if step % 3 == 0 {
                seq.previous_index().unwrap()
            } else {
                seq.next_index().unwrap()
            };
            seq.begin_transition(target, now);
            now += ANIMATION;
            seq.tick(now);

            let current = seq.current().unwrap();
            assert!(current < seq.len());
            assert_eq!(active_count(&seq), 1);
        }
    }

    #[test]
    fn transition_progress_tracks_elapsed_time() {
        let (mut seq, t0) = sequencer(2);
        assert_eq!(seq.transition_progress(t0), None);

        seq.begin_transition(1, t0);
        let progress = seq.transition_progress(t0 + Duration::from_millis(500)).unwrap();
        assert!((progress - 0.5).abs() < 1e-3);

        let clamped = seq.transition_progress(t0 + ANIMATION * 3).unwrap();
        assert_eq!(clamped, 1.0);
    }
}
