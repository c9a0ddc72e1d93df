use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STAR_FILLED};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Ratings & Reviews";
const REVIEW_COUNT: &str = "More than 53k positive reviews and ratings in the App Store";
const FEATURED: &str = "Featured App";
const FEATURED_REACH: &str = "in 100+ countries";
const SCORE: &str = "4.9";
const SCORE_SCALE: &str = "out of 5";

/// Height of the header region, borders included.
pub const HEADER_HEIGHT: u16 = 4;

/// Static banner above the carousel.
pub struct ReviewsHeader;

impl Default for ReviewsHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewsHeader {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title = Line::from(Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        let info = Line::from(vec![
            Span::styled(REVIEW_COUNT, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("❦ ", separator_style),
            Span::styled(FEATURED, text_style.add_modifier(Modifier::BOLD)),
            Span::styled(" ", text_style),
            Span::styled(FEATURED_REACH, text_style),
            Span::styled(" ❦", separator_style),
            Span::styled("  │  ", separator_style),
            Span::styled(SCORE, Style::default().fg(STAR_FILLED).add_modifier(Modifier::BOLD)),
            Span::styled(" ", text_style),
            Span::styled(SCORE_SCALE, text_style),
        ]);

        Paragraph::new(vec![title, info])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
