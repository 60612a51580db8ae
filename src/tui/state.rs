use chrono::NaiveDate;
use ratatui::widgets::ListState;

use crate::model::CosmicEvent;
use crate::starfield::{SkyMap, StarField};

/// All transient UI state. Nothing here survives the process; the
/// only thing persisted elsewhere is the last revealed date (config).
pub struct AppState {
    // Input
    pub input_buffer: String,
    pub cursor_position: usize,

    // Reveal lifecycle
    pub loading: bool,
    pub revealed: bool,
    pub selected_date: Option<NaiveDate>,
    pub events: Vec<&'static CosmicEvent>,
    pub sky: Option<SkyMap>,

    // Messages. At most one validation error is shown at a time.
    pub validation_error: Option<String>,
    pub message: String,

    // Presentation
    pub show_full_help: bool,
    pub list_state: ListState,
    pub stars: StarField,
    pub tick: u64,
    pub should_quit: bool,
}

impl AppState {
    /// `initial_date` prefills the input (from `--date` or the saved
    /// config); it is not validated until the user submits.
    pub fn new(initial_date: Option<String>) -> Self {
        let input_buffer = initial_date.unwrap_or_default();
        let cursor_position = input_buffer.chars().count();
        Self {
            input_buffer,
            cursor_position,

            loading: false,
            revealed: false,
            selected_date: None,
            events: vec![],
            sky: None,

            validation_error: None,
            message: "Enter a date and uncover what the cosmos witnessed that day.".to_string(),

            show_full_help: false,
            list_state: ListState::default(),
            stars: StarField::new(),
            tick: 0,
            should_quit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}
