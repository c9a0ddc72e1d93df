use std::time::Instant;

use crate::reviews::Review;
use crate::ui::mvi::Intent;

/// Events the carousel reacts to. Positions are carousel units.
#[derive(Debug, Clone)]
pub enum CarouselIntent {
    /// Replace the reviews and start from the first real slide.
    Load { reviews: Vec<Review>, now: Instant },

    /// Next button or key. Pauses auto-scroll for the resume cooldown.
    Next { now: Instant },
    /// Previous button or key. Pauses auto-scroll for the resume cooldown.
    Prev { now: Instant },
    /// Indicator dot for real slide `slide` (zero-based).
    GoTo { slide: usize, now: Instant },

    /// Timer resolution: settles transitions, releases cooldowns and fires
    /// auto-scroll.
    Tick { now: Instant },
    /// A frame was drawn; animation may run again.
    FrameRendered,

    TouchStart { x: i32 },
    TouchMove { x: i32 },
    TouchEnd { now: Instant },

    DragStart { x: i32 },
    DragMove { x: i32 },
    DragEnd { now: Instant },

    HoverEnter,
    HoverLeave { now: Instant },
}

impl Intent for CarouselIntent {}
