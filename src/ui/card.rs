use crate::reviews::Review;
use crate::ui::carousel::SlideEmphasis;
use crate::ui::stars::RatingStars;
use crate::ui::theme::{ACCENT, CARD_BORDER, CARD_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// A single review: title, stars and body in a bordered box.
pub struct ReviewCard<'a> {
    review: &'a Review,
}

impl<'a> ReviewCard<'a> {
    pub fn new(review: &'a Review) -> Self {
        Self { review }
    }

    pub fn widget(&self, emphasis: SlideEmphasis) -> Paragraph<'a> {
        let (border, text, border_type) = match emphasis {
            SlideEmphasis::Center => (
                Style::default().fg(ACCENT),
                Style::default().fg(CARD_TEXT),
                BorderType::Thick,
            ),
            SlideEmphasis::Side => (
                Style::default().fg(CARD_BORDER),
                Style::default().fg(CARD_TEXT),
                BorderType::Rounded,
            ),
            SlideEmphasis::Far => (
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                BorderType::Rounded,
            ),
        };

        let lines = vec![
            Line::from(Span::styled(
                self.review.title.as_str(),
                text.add_modifier(Modifier::BOLD),
            )),
            RatingStars::new(self.review.stars()).line(),
            Line::from(""),
            Line::from(Span::styled(self.review.text.as_str(), text)),
        ];

        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border),
        )
    }
}
