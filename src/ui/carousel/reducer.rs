use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{CarouselState, GestureKind, Target};

/// Reducer for the carousel.
///
/// Pure: timers are deadlines stored in the state and checked on `Tick`, so
/// replacing a deadline cancels the previous one and dropping the state
/// cancels all of them.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Load { reviews, now } => {
                return CarouselState::loaded(state.timing, reviews, now);
            }

            CarouselIntent::Next { now } => press(&mut state, Target::Forward, now),
            CarouselIntent::Prev { now } => press(&mut state, Target::Back, now),
            CarouselIntent::GoTo { slide, now } => press(&mut state, Target::Slide(slide), now),

            CarouselIntent::Tick { now } => {
                state.settle(now);
                state.release(now);
                state.refresh_auto_scroll(now);
                state.fire_auto_scroll(now);
            }
            CarouselIntent::FrameRendered => state.suppress_animation = false,

            CarouselIntent::TouchStart { x } => state.begin_gesture(GestureKind::Touch, x),
            CarouselIntent::TouchMove { x } => state.move_gesture(GestureKind::Touch, x),
            CarouselIntent::TouchEnd { now } => state.end_gesture(GestureKind::Touch, now),

            CarouselIntent::DragStart { x } => state.begin_gesture(GestureKind::Drag, x),
            CarouselIntent::DragMove { x } => state.move_gesture(GestureKind::Drag, x),
            CarouselIntent::DragEnd { now } => state.end_gesture(GestureKind::Drag, now),

            CarouselIntent::HoverEnter => {
                state.hovering = true;
                state.next_auto_scroll = None;
            }
            CarouselIntent::HoverLeave { now } => {
                state.hovering = false;
                state.abandon_gesture(now);
                state.refresh_auto_scroll(now);
            }
        }
        state
    }
}

fn press(state: &mut CarouselState, target: Target, now: std::time::Instant) {
    state.hold(now);
    state.navigate(target, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::Review;
    use std::time::{Duration, Instant};

    fn reviews(n: usize) -> Vec<Review> {
        (0..n)
            .map(|i| Review {
                id: i as i64 + 1,
                title: format!("Review {}", i + 1),
                text: "Body".to_string(),
                rating: 5,
            })
            .collect()
    }

    fn loaded(n: usize, now: Instant) -> CarouselState {
        CarouselReducer::reduce(
            CarouselState::default(),
            CarouselIntent::Load {
                reviews: reviews(n),
                now,
            },
        )
    }

    #[test]
    fn load_starts_on_first_real_slide() {
        let state = loaded(3, Instant::now());
        assert_eq!(state.index(), 1);
        assert!(!state.is_transitioning());
        assert_eq!(state.slides().len(), 5);
    }

    #[test]
    fn prev_from_first_lands_on_leading_clone_then_snaps() {
        let t0 = Instant::now();
        let state = loaded(3, t0);
        let state = CarouselReducer::reduce(state, CarouselIntent::Prev { now: t0 });
        assert_eq!(state.index(), 0);
        let state = CarouselReducer::reduce(
            state,
            CarouselIntent::Tick {
                now: t0 + Duration::from_millis(500),
            },
        );
        assert_eq!(state.index(), 3);
        assert!(state.suppress_animation());
        let state = CarouselReducer::reduce(state, CarouselIntent::FrameRendered);
        assert!(!state.suppress_animation());
    }

    #[test]
    fn tick_before_settle_keeps_lock() {
        let t0 = Instant::now();
        let state = loaded(3, t0);
        let state = CarouselReducer::reduce(state, CarouselIntent::Next { now: t0 });
        let state = CarouselReducer::reduce(
            state,
            CarouselIntent::Tick {
                now: t0 + Duration::from_millis(499),
            },
        );
        assert!(state.is_transitioning());
    }

    #[test]
    fn move_for_other_gesture_kind_is_ignored() {
        let state = loaded(3, Instant::now());
        let state = CarouselReducer::reduce(state, CarouselIntent::TouchStart { x: 100 });
        let state = CarouselReducer::reduce(state, CarouselIntent::DragMove { x: 0 });
        assert_eq!(state.gesture().map(|g| g.distance()), Some(0));
    }
}
