use std::time::Instant;

use crate::config::CarouselConfig;
use crate::reviews::Review;
use crate::ui::mvi::UiState;

use super::geometry::{self, ease};

/// Whether a slide transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Settled on a real slide; navigation accepted.
    #[default]
    Idle,
    /// Animating towards `index`; navigation locked until `settles_at`.
    Transitioning {
        from: usize,
        started_at: Instant,
        settles_at: Instant,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Touch,
    Drag,
}

/// A touch swipe or pointer drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub start_x: i32,
    pub current_x: i32,
}

impl Gesture {
    /// Positive when the pointer moved left.
    pub fn distance(&self) -> i32 {
        self.start_x - self.current_x
    }
}

/// How prominently a working-list slide is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEmphasis {
    Center,
    Side,
    Far,
}

/// Looping carousel over a padded copy of the reviews.
///
/// `slides` holds the last review, every review, then the first review, so
/// index 0 and `slides.len() - 1` are clones. While [`Phase::Idle`] the index
/// always points at a real slide, `1..=len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselState {
    pub(super) slides: Vec<Review>,
    pub(super) index: usize,
    pub(super) phase: Phase,
    /// Set when a clone was swapped for its real slide; the next frame must
    /// jump instead of animating.
    pub(super) suppress_animation: bool,
    pub(super) hovering: bool,
    pub(super) gesture: Option<Gesture>,
    /// Cooldown after a gesture or press; auto-scroll stays paused until then.
    pub(super) resume_at: Option<Instant>,
    pub(super) next_auto_scroll: Option<Instant>,
    pub(super) timing: CarouselConfig,
}

impl UiState for CarouselState {}

/// Where a navigation request wants to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    Forward,
    Back,
    Slide(usize),
}

impl CarouselState {
    /// Empty carousel using the given timings.
    pub fn with_timing(timing: CarouselConfig) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    /// Working list for `reviews`: last review, all reviews, first review.
    pub fn working_list(reviews: &[Review]) -> Vec<Review> {
        match (reviews.first(), reviews.last()) {
            (Some(first), Some(last)) => {
                let mut slides = Vec::with_capacity(reviews.len() + 2);
                slides.push(last.clone());
                slides.extend_from_slice(reviews);
                slides.push(first.clone());
                slides
            }
            _ => Vec::new(),
        }
    }

    pub(super) fn loaded(timing: CarouselConfig, reviews: Vec<Review>, now: Instant) -> Self {
        let slides = Self::working_list(&reviews);
        let index = if slides.is_empty() { 0 } else { 1 };
        let mut state = Self {
            slides,
            index,
            timing,
            ..Self::default()
        };
        state.refresh_auto_scroll(now);
        state
    }

    /// Number of real reviews.
    pub fn len(&self) -> usize {
        self.slides.len().saturating_sub(2)
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The padded working list.
    pub fn slides(&self) -> &[Review] {
        &self.slides
    }

    /// Current index into the working list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn suppress_animation(&self) -> bool {
        self.suppress_animation
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Auto-scroll is suspended by hover, an active gesture or a pending
    /// resume cooldown.
    pub fn is_paused(&self) -> bool {
        self.hovering || self.gesture.is_some() || self.resume_at.is_some()
    }

    pub fn resume_at(&self) -> Option<Instant> {
        self.resume_at
    }

    pub fn next_auto_scroll(&self) -> Option<Instant> {
        self.next_auto_scroll
    }

    pub fn timing(&self) -> &CarouselConfig {
        &self.timing
    }

    /// Index of the active indicator dot.
    pub fn active_dot(&self) -> Option<usize> {
        geometry::active_dot(self.index, self.slides.len())
    }

    /// Slide at the current index.
    pub fn current(&self) -> Option<&Review> {
        self.slides.get(self.index)
    }

    pub fn emphasis(&self, slide: usize) -> SlideEmphasis {
        match (slide as isize - self.index as isize).abs() {
            0 => SlideEmphasis::Center,
            1 => SlideEmphasis::Side,
            _ => SlideEmphasis::Far,
        }
    }

    /// Fractional slide position to draw at `now`.
    ///
    /// Eases from the previous index while transitioning; jumps straight to
    /// the index when animation is suppressed.
    pub fn visual_position(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Transitioning {
                from,
                started_at,
                settles_at,
            } if !self.suppress_animation => {
                let total = settles_at.saturating_duration_since(started_at);
                let elapsed = now.saturating_duration_since(started_at);
                let t = if total.is_zero() {
                    1.0
                } else {
                    elapsed.as_secs_f32() / total.as_secs_f32()
                };
                let from = from as f32;
                from + (self.index as f32 - from) * ease(t)
            }
            _ => self.index as f32,
        }
    }

    /// Start a transition unless one is still running at `now`.
    ///
    /// An expired transition is settled first, so a press arriving between
    /// `settles_at` and the next tick is not lost.
    pub(super) fn navigate(&mut self, target: Target, now: Instant) -> bool {
        self.settle(now);
        if self.slides.is_empty() || self.is_transitioning() {
            return false;
        }
        let destination = match target {
            Target::Forward => self.index + 1,
            Target::Back => match self.index.checked_sub(1) {
                Some(index) => index,
                None => return false,
            },
            Target::Slide(slide) if slide < self.len() => slide + 1,
            Target::Slide(_) => return false,
        };
        if destination >= self.slides.len() {
            return false;
        }

        self.phase = Phase::Transitioning {
            from: self.index,
            started_at: now,
            settles_at: now + self.timing.transition(),
        };
        self.index = destination;
        self.suppress_animation = false;
        true
    }

    /// Finish an expired transition, swapping a clone for its real slide.
    pub(super) fn settle(&mut self, now: Instant) {
        let Phase::Transitioning { settles_at, .. } = self.phase else {
            return;
        };
        if now < settles_at {
            return;
        }
        self.phase = Phase::Idle;

        let last = self.slides.len() - 1;
        if self.index == 0 {
            self.index = self.len();
            self.suppress_animation = true;
        } else if self.index == last {
            self.index = 1;
            self.suppress_animation = true;
        }
    }

    /// Pause auto-scroll for a press, resuming after the cooldown.
    pub(super) fn hold(&mut self, now: Instant) {
        self.resume_at = Some(now + self.timing.resume_delay());
        self.next_auto_scroll = None;
    }

    pub(super) fn begin_gesture(&mut self, kind: GestureKind, x: i32) {
        self.gesture = Some(Gesture {
            kind,
            start_x: x,
            current_x: x,
        });
        self.resume_at = None;
        self.next_auto_scroll = None;
    }

    /// Drop a gesture whose end never arrived and start the cooldown.
    pub(super) fn abandon_gesture(&mut self, now: Instant) {
        if self.gesture.take().is_some() {
            tracing::debug!(index = self.index, "Abandoned gesture on pointer leave");
            self.hold(now);
        }
    }

    pub(super) fn move_gesture(&mut self, kind: GestureKind, x: i32) {
        if let Some(gesture) = self.gesture.as_mut().filter(|g| g.kind == kind) {
            gesture.current_x = x;
        }
    }

    pub(super) fn end_gesture(&mut self, kind: GestureKind, now: Instant) {
        let Some(gesture) = self.gesture.filter(|g| g.kind == kind) else {
            return;
        };
        self.gesture = None;

        let threshold = match kind {
            GestureKind::Touch => self.timing.swipe_threshold,
            GestureKind::Drag => self.timing.drag_threshold,
        };
        let distance = gesture.distance();
        if distance.unsigned_abs() > threshold {
            let target = if distance > 0 {
                Target::Forward
            } else {
                Target::Back
            };
            self.navigate(target, now);
        }
        self.hold(now);
    }

    /// Drop an expired cooldown.
    pub(super) fn release(&mut self, now: Instant) {
        if self.resume_at.is_some_and(|at| now >= at) {
            self.resume_at = None;
        }
    }

    /// Arm or cancel the auto-scroll deadline to match the pause state.
    pub(super) fn refresh_auto_scroll(&mut self, now: Instant) {
        if self.is_paused() || self.len() <= 1 {
            self.next_auto_scroll = None;
        } else if self.next_auto_scroll.is_none() {
            self.next_auto_scroll = Some(now + self.timing.auto_scroll());
        }
    }

    /// Advance if the auto-scroll deadline has passed.
    pub(super) fn fire_auto_scroll(&mut self, now: Instant) {
        if self.next_auto_scroll.is_some_and(|at| now >= at) {
            if !self.navigate(Target::Forward, now) {
                tracing::trace!(index = self.index, "Auto-scroll skipped during transition");
            }
            self.next_auto_scroll = Some(now + self.timing.auto_scroll());
        }
    }
}
