//! Dashboard TUI built on Ratatui.

pub mod app;
pub mod events;
pub mod handler;
pub mod ui;

pub use app::{App, View};
pub use handler::run_dashboard;
