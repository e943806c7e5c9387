//! Event loop for the dashboard.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::chart::ChartData;
use crate::command;
use crate::dispatch::Dispatcher;

use super::{
    app::{App, View},
    events::TuiEvent,
    ui::render_ui,
};

pub async fn run_dashboard(mut app: App, dispatcher: Dispatcher, excerpt: Option<String>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &dispatcher, excerpt.as_deref()).await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    excerpt: Option<&str>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || loop {
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if input_tx.send(TuiEvent::Key(key)).is_err() {
                    break; // Channel closed
                }
            }
        }
    });

    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        if let Ok(tui_event) = event_rx.try_recv() {
            match tui_event {
                TuiEvent::Key(key) => {
                    if handle_key(app, key, &event_tx)? {
                        break; // Quit requested
                    }
                }
                TuiEvent::Submit(input) => {
                    handle_submit(terminal, app, dispatcher, excerpt, input).await?;
                }
                TuiEvent::Quit => break,
            }
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await;
    }

    Ok(())
}

/// Returns true when the dashboard should quit.
fn handle_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    event_tx: &mpsc::UnboundedSender<TuiEvent>,
) -> Result<bool> {
    if app.show_help {
        app.toggle_help();
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(true);
        }
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Tab => app.cycle_view(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Enter => {
            let input = app.take_input();
            if input == "exit()" {
                return Ok(true);
            }
            if !input.is_empty() {
                let _ = event_tx.send(TuiEvent::Submit(input));
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }

    Ok(false)
}

/// One submission runs to completion before the next event is handled: the
/// parser decides between a plot command and a chat dispatch, and the
/// outbound call is awaited inline.
async fn handle_submit(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    excerpt: Option<&str>,
    input: String,
) -> Result<()> {
    match command::parse_request(&input, app.table.headers()) {
        Ok(Some(cmd)) => match ChartData::from_table(&app.table, cmd) {
            Ok(chart) => {
                let summary = chart.summary();
                app.log.append(&input, &summary);
                app.chart = Some(chart);
                app.view = View::Chart;
                app.scroll = 0;
                app.set_status(summary);
            }
            // Unknown/non-numeric column: inline error, nothing mutated
            Err(err) => app.set_status(err.to_string()),
        },
        Ok(None) => {
            app.set_status(format!("Asking {}...", app.model_label));
            terminal.draw(|frame| render_ui(frame, app))?;

            let reply = dispatcher.ask(&input, excerpt).await;
            match reply.error() {
                Some(error) => app.set_status(format!("An error occurred: {}", error)),
                None => app.set_status("Ready"),
            }
            app.log.append(&input, reply.text());
            app.view = View::Chat;
            app.scroll = 0;
        }
        // Malformed plot request: inline error, no log entry
        Err(err) => app.set_status(err.to_string()),
    }

    Ok(())
}
