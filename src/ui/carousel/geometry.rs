//! Track layout: card sizes per breakpoint and the horizontal offset that
//! centres the active slide.
//!
//! All values are carousel units. The terminal front-end maps one column to
//! [`UNITS_PER_COLUMN`] units so the breakpoints keep their proportions.

/// Carousel units per terminal column.
pub const UNITS_PER_COLUMN: u32 = 8;

/// Card width and the gap between neighbouring cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMetrics {
    pub width: u32,
    pub gap: u32,
}

impl CardMetrics {
    /// Distance between the left edges of two neighbouring cards.
    pub fn pitch(&self) -> u32 {
        self.width + self.gap
    }
}

/// Breakpoint table keyed by viewport width.
pub fn card_metrics(viewport_width: u32) -> CardMetrics {
    let (width, gap) = match viewport_width {
        w if w < 768 => (280, 16),
        w if w < 1024 => (320, 18),
        w if w < 1440 => (360, 20),
        _ => (400, 24),
    };
    CardMetrics { width, gap }
}

/// Track translation placing slide `position` at the viewport centre.
///
/// `position` is fractional while a transition is animating.
pub fn track_offset(viewport_width: u32, position: f32) -> f32 {
    let metrics = card_metrics(viewport_width);
    let center = viewport_width as f32 / 2.0 - metrics.width as f32 / 2.0;
    center - position * metrics.pitch() as f32
}

/// Left edge of working-list slide `slide`, relative to the viewport.
pub fn slide_left(viewport_width: u32, position: f32, slide: usize) -> f32 {
    let metrics = card_metrics(viewport_width);
    track_offset(viewport_width, position) + slide as f32 * metrics.pitch() as f32
}

/// Indicator dot for a working-list index.
///
/// Clones map onto the real slide they duplicate.
pub fn active_dot(index: usize, slide_count: usize) -> Option<usize> {
    if slide_count < 3 {
        return None;
    }
    let real = slide_count - 2;
    Some(if index == 0 {
        real - 1
    } else if index >= slide_count - 1 {
        0
    } else {
        index - 1
    })
}

/// Smoothstep easing for transition progress in `[0, 1]`.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_tiers() {
        assert_eq!(card_metrics(320), CardMetrics { width: 280, gap: 16 });
        assert_eq!(card_metrics(767), CardMetrics { width: 280, gap: 16 });
        assert_eq!(card_metrics(768), CardMetrics { width: 320, gap: 18 });
        assert_eq!(card_metrics(1023), CardMetrics { width: 320, gap: 18 });
        assert_eq!(card_metrics(1024), CardMetrics { width: 360, gap: 20 });
        assert_eq!(card_metrics(1440), CardMetrics { width: 400, gap: 24 });
    }

    #[test]
    fn active_slide_is_centred() {
        for viewport in [640, 900, 1200, 1600] {
            let metrics = card_metrics(viewport);
            let left = slide_left(viewport, 3.0, 3);
            let centre = left + metrics.width as f32 / 2.0;
            assert!((centre - viewport as f32 / 2.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn offset_moves_one_pitch_per_slide() {
        let a = track_offset(1000, 1.0);
        let b = track_offset(1000, 2.0);
        assert_eq!(a - b, 338.0);
    }

    #[test]
    fn dots_follow_clones() {
        // three reviews, five working slides
        assert_eq!(active_dot(0, 5), Some(2));
        assert_eq!(active_dot(1, 5), Some(0));
        assert_eq!(active_dot(3, 5), Some(2));
        assert_eq!(active_dot(4, 5), Some(0));
        assert_eq!(active_dot(0, 0), None);
    }

    #[test]
    fn ease_is_clamped() {
        assert_eq!(ease(-1.0), 0.0);
        assert_eq!(ease(0.5), 0.5);
        assert_eq!(ease(2.0), 1.0);
    }
}
