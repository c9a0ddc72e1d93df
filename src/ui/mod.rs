pub mod app;
pub mod card;
pub mod carousel;
pub mod carousel_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod section;
pub mod stars;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
