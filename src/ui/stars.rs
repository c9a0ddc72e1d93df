use crate::reviews::MAX_RATING;
use crate::ui::theme::{STAR_EMPTY, STAR_FILLED};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const STAR: &str = "★";

/// Five stars, the first `value` of them filled.
pub struct RatingStars {
    value: u8,
}

impl RatingStars {
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(MAX_RATING),
        }
    }

    pub fn line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = (1..=MAX_RATING)
            .map(|i| {
                let color = if i <= self.value { STAR_FILLED } else { STAR_EMPTY };
                Span::styled(STAR, Style::default().fg(color))
            })
            .collect();
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(line: &Line<'_>) -> usize {
        line.spans
            .iter()
            .filter(|span| span.style.fg == Some(STAR_FILLED))
            .count()
    }

    #[test]
    fn renders_five_stars() {
        let line = RatingStars::new(3).line();
        assert_eq!(line.spans.len(), 5);
        assert_eq!(filled(&line), 3);
    }

    #[test]
    fn zero_and_overflow() {
        assert_eq!(filled(&RatingStars::new(0).line()), 0);
        assert_eq!(filled(&RatingStars::new(12).line()), 5);
    }
}
