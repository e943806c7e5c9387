//! Event types for the dashboard loop.

use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum TuiEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// A submitted input line, ready for classification
    Submit(String),
    /// Request to quit the dashboard
    Quit,
}
