pub mod cli;
pub mod config;
pub mod logging;
pub mod reviews;
pub mod ui;
