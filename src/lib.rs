//! Greenmovement waste dashboard: CSV dataset, plot-request parser,
//! chat-completion dispatcher and the terminal UI glueing them together.

pub mod auth;
pub mod chart;
pub mod command;
pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod handlers;
pub mod llm;
pub mod printer;
pub mod session;
pub mod tui;
