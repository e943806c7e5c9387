//! Dashboard handler: terminal gate, then the TUI event loop.

use std::io;

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::dispatch::Dispatcher;
use crate::tui::{run_dashboard, App};

pub struct DashboardHandler;

impl DashboardHandler {
    pub async fn run(app: App, dispatcher: Dispatcher, excerpt: Option<String>) -> Result<()> {
        if !io::stdout().is_terminal() {
            anyhow::bail!(
                "the dashboard requires a terminal; pass a question directly for one-shot mode"
            );
        }
        run_dashboard(app, dispatcher, excerpt).await
    }
}
