// Defines actions and events for TUI interaction and state updates.
use chrono::NaiveDate;

use crate::model::CosmicEvent;

/// Requests sent from the UI to the background worker.
#[derive(Debug)]
pub enum Action {
    /// Reveal the events for a validated date (after the artificial
    /// delay).
    Reveal(NaiveDate),
    /// Put a share link on the system clipboard.
    CopyLink(String),

    // Lifecycle
    Quit,
}

/// Results reported back from the worker to the UI.
#[derive(Debug)]
pub enum AppEvent {
    Revealed(Vec<&'static CosmicEvent>),
    Status(String),
    Error(String),
}
