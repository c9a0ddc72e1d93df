use crate::config::Config;
use crate::reviews::Review;
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::carousel_view::{CarouselHit, CarouselLayout};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::section::{SectionIntent, SectionReducer, SectionState};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Instant;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Terminal size, used for mouse hit-testing.
    area: Rect,
    /// Loading / ready / empty / error (MVI pattern).
    section: SectionState,
    /// Carousel engine (MVI pattern).
    carousel: CarouselState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            area: Rect::default(),
            section: SectionState::default(),
            carousel: CarouselState::with_timing(config.carousel),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn section(&self) -> &SectionState {
        &self.section
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    pub fn on_reviews_loaded(&mut self, reviews: Vec<Review>, now: Instant) {
        tracing::debug!(count = reviews.len(), "Reviews section loaded");
        dispatch_mvi!(
            self,
            section,
            SectionReducer,
            SectionIntent::Loaded {
                reviews: reviews.clone()
            }
        );
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer,
            CarouselIntent::Load { reviews, now }
        );
    }

    pub fn on_fetch_failed(&mut self, message: String) {
        tracing::error!(error = %message, "Error loading reviews");
        dispatch_mvi!(self, section, SectionReducer, SectionIntent::Failed { message });
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch_carousel(CarouselIntent::Tick { now });
    }

    /// Called after each drawn frame; re-enables animation after a clone snap.
    pub fn on_frame_rendered(&mut self) {
        if self.carousel.suppress_animation() {
            self.dispatch_carousel(CarouselIntent::FrameRendered);
        }
    }

    pub fn next(&mut self, now: Instant) {
        self.dispatch_carousel(CarouselIntent::Next { now });
    }

    pub fn prev(&mut self, now: Instant) {
        self.dispatch_carousel(CarouselIntent::Prev { now });
    }

    pub fn go_to(&mut self, slide: usize, now: Instant) {
        self.dispatch_carousel(CarouselIntent::GoTo { slide, now });
    }

    /// Carousel regions for the current terminal size, if it is on screen.
    pub fn carousel_layout(&self) -> Option<CarouselLayout> {
        if !matches!(self.section, SectionState::Ready { .. }) {
            return None;
        }
        Some(CarouselLayout::new(body_rect(self.area), self.carousel.len()))
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let Some(layout) = self.carousel_layout() else {
            return;
        };
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => {
                let inside = layout.contains(column, row);
                if inside && !self.carousel.is_hovering() {
                    self.dispatch_carousel(CarouselIntent::HoverEnter);
                } else if !inside && self.carousel.is_hovering() {
                    self.dispatch_carousel(CarouselIntent::HoverLeave { now });
                }
            }
            MouseEventKind::Down(MouseButton::Left) => match layout.hit(column, row) {
                Some(CarouselHit::Prev) => self.prev(now),
                Some(CarouselHit::Next) => self.next(now),
                Some(CarouselHit::Dot(slide)) => self.go_to(slide, now),
                Some(CarouselHit::Track) => self.dispatch_carousel(CarouselIntent::DragStart {
                    x: layout.units(column),
                }),
                None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.carousel.gesture().is_some() {
                    self.dispatch_carousel(CarouselIntent::DragMove {
                        x: layout.units(column),
                    });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.carousel.gesture().is_some() {
                    self.dispatch_carousel(CarouselIntent::DragEnd { now });
                }
            }
            _ => {}
        }
    }

    fn dispatch_carousel(&mut self, intent: CarouselIntent) {
        dispatch_mvi!(self, carousel, CarouselReducer, intent);
    }
}
