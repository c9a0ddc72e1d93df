use crate::ui::app::App;
use crate::ui::carousel_view::CarouselView;
use crate::ui::footer::Footer;
use crate::ui::header::ReviewsHeader;
use crate::ui::layout::{centered_row, layout_regions};
use crate::ui::section::SectionState;
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use std::time::Instant;

pub const LOADING_MESSAGE: &str = "Loading reviews...";
pub const NO_REVIEWS_MESSAGE: &str = "No reviews available";

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(ReviewsHeader::new().widget(), header);
    frame.render_widget(Clear, body);

    match app.section() {
        SectionState::Loading => status(frame, body, LOADING_MESSAGE.to_string(), MUTED_TEXT),
        SectionState::Empty => status(frame, body, NO_REVIEWS_MESSAGE.to_string(), MUTED_TEXT),
        SectionState::Error { message } => {
            status(frame, body, format!("Error: {}", message), STATUS_ERROR)
        }
        SectionState::Ready { .. } => {
            frame.render_widget(CarouselView::new(app.carousel(), now), body);
        }
    }

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn status(frame: &mut Frame<'_>, body: Rect, message: String, color: Color) {
    let widget = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(widget, centered_row(body, 1));
}
