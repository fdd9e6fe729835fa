//! Terminal User Interface module
//!
//! An interactive day browser built on ratatui. Key presses become
//! navigation gestures applied through the date cursor; the selected day's
//! statistics are recomputed on every move.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
