//! Draws the carousel track, navigation buttons, indicator dots and the
//! swipe hint, and maps mouse positions back onto them.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use std::time::Instant;

use crate::ui::card::ReviewCard;
use crate::ui::carousel::geometry::{card_metrics, slide_left, UNITS_PER_COLUMN};
use crate::ui::carousel::CarouselState;
use crate::ui::theme::{ACCENT, CARD_BORDER, MUTED_TEXT};

/// Drawn when the widget is handed a carousel with no slides. The section
/// screen shows its own "No reviews available" before that can happen.
pub const EMPTY_MESSAGE: &str = "No reviews to display";
const SWIPE_HINT: &str = "← Swipe →";
const PREV_LABEL: &str = " ◀ ";
const NEXT_LABEL: &str = " ▶ ";
const DOT: &str = "●";
const MAX_CARD_HEIGHT: u16 = 12;
/// Rows below the track: spacer, controls, hint.
const CONTROL_ROWS: u16 = 3;

/// What a mouse position points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselHit {
    Prev,
    Next,
    Dot(usize),
    Track,
}

/// Screen regions of the carousel inside its area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    pub area: Rect,
    pub track: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
    pub hint: Rect,
}

impl CarouselLayout {
    pub fn new(area: Rect, review_count: usize) -> Self {
        let track_height = area.height.saturating_sub(CONTROL_ROWS);
        let track = Rect {
            height: track_height,
            ..area
        };
        let controls_y = area.y + track_height + 1;
        let controls_height = u16::from(area.height > track_height + 1);
        let hint = Rect {
            x: area.x,
            y: area.y + track_height + 2,
            width: area.width,
            height: u16::from(area.height >= CONTROL_ROWS),
        };

        let button_width = PREV_LABEL.chars().count() as u16;
        let next = Rect {
            x: area.right().saturating_sub(button_width),
            y: controls_y,
            width: button_width.min(area.width),
            height: controls_height,
        };
        let prev = Rect {
            x: next.x.saturating_sub(button_width + 1).max(area.x),
            y: controls_y,
            width: button_width.min(area.width),
            height: controls_height,
        };

        let dots_width = (review_count as u16).saturating_mul(2).saturating_sub(1);
        let dots_x = area.x + area.width.saturating_sub(dots_width) / 2;
        let dots = (0..review_count as u16)
            .map(|i| Rect {
                x: dots_x + i * 2,
                y: controls_y,
                width: 1,
                height: controls_height,
            })
            .filter(|dot| dot.x < area.right())
            .collect();

        Self {
            area,
            track,
            prev,
            next,
            dots,
            hint,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<CarouselHit> {
        let position = Position::new(column, row);
        if self.prev.contains(position) {
            return Some(CarouselHit::Prev);
        }
        if self.next.contains(position) {
            return Some(CarouselHit::Next);
        }
        if let Some(slide) = self.dots.iter().position(|dot| dot.contains(position)) {
            return Some(CarouselHit::Dot(slide));
        }
        if self.track.contains(position) {
            return Some(CarouselHit::Track);
        }
        None
    }

    /// Horizontal carousel units for a terminal column.
    pub fn units(&self, column: u16) -> i32 {
        (i32::from(column) - i32::from(self.track.x)) * UNITS_PER_COLUMN as i32
    }
}

/// Carousel widget for one frame at `now`.
pub struct CarouselView<'a> {
    state: &'a CarouselState,
    now: Instant,
}

impl<'a> CarouselView<'a> {
    pub fn new(state: &'a CarouselState, now: Instant) -> Self {
        Self { state, now }
    }

    fn render_track(&self, track: Rect, buf: &mut Buffer) {
        if track.width == 0 || track.height == 0 {
            return;
        }
        let viewport = u32::from(track.width) * UNITS_PER_COLUMN;
        let card_width = (card_metrics(viewport).width / UNITS_PER_COLUMN) as u16;
        let card_height = track.height.min(MAX_CARD_HEIGHT);
        let card_y = track.y + (track.height - card_height) / 2;
        let position = self.state.visual_position(self.now);

        for (slide, review) in self.state.slides().iter().enumerate() {
            let left = slide_left(viewport, position, slide) / UNITS_PER_COLUMN as f32;
            let left = left.round() as i32;
            if left + i32::from(card_width) <= 0 || left >= i32::from(track.width) {
                continue;
            }

            let card_area = Rect::new(0, 0, card_width, card_height);
            let mut scratch = Buffer::empty(card_area);
            ReviewCard::new(review)
                .widget(self.state.emphasis(slide))
                .render(card_area, &mut scratch);

            // Copy only the columns inside the track.
            for dx in 0..card_width {
                let column = left + i32::from(dx);
                if column < 0 || column >= i32::from(track.width) {
                    continue;
                }
                let x = track.x + column as u16;
                for dy in 0..card_height {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((dx, dy)), buf.cell_mut((x, card_y + dy)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }

    fn render_controls(&self, layout: &CarouselLayout, buf: &mut Buffer) {
        let active = self.state.active_dot();
        for (slide, dot) in layout.dots.iter().enumerate() {
            if dot.height == 0 {
                continue;
            }
            let style = if Some(slide) == active {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            buf.set_string(dot.x, dot.y, DOT, style);
        }

        let button = Style::default().fg(CARD_BORDER).add_modifier(Modifier::BOLD);
        for (rect, label) in [(layout.prev, PREV_LABEL), (layout.next, NEXT_LABEL)] {
            if rect.height > 0 {
                buf.set_stringn(rect.x, rect.y, label, rect.width as usize, button);
            }
        }

        if layout.hint.height > 0 {
            Paragraph::new(Line::from(Span::styled(
                SWIPE_HINT,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Center)
            .render(layout.hint, buf);
        }
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.is_empty() {
            Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let layout = CarouselLayout::new(area, self.state.len());
        self.render_track(layout.track, buf);
        self.render_controls(&layout, buf);
    }
}
