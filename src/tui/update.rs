// File: src/tui/update.rs
//
// The reducers: `handle_key` maps terminal input to state changes and
// optional background actions, `apply_event` folds worker results
// back into the state. Both are plain functions so the reveal
// lifecycle is testable without a terminal.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::model;
use crate::share;
use crate::starfield::SkyMap;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::AppState;

pub fn handle_key(state: &mut AppState, config: &Config, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Some(Action::Quit);
    }

    match key.code {
        // Date entry. Only digits and '-' ever belong in the buffer,
        // which leaves the letter keys free for commands.
        KeyCode::Char(c @ ('0'..='9' | '-')) => {
            state.input_buffer.insert(byte_index(state), c);
            state.cursor_position += 1;
            touch_input(state);
            None
        }
        KeyCode::Backspace => {
            if state.cursor_position > 0 {
                state.cursor_position -= 1;
                state.input_buffer.remove(byte_index(state));
                touch_input(state);
            }
            None
        }
        KeyCode::Left => {
            state.cursor_position = state.cursor_position.saturating_sub(1);
            None
        }
        KeyCode::Right => {
            let len = state.input_buffer.chars().count();
            state.cursor_position = (state.cursor_position + 1).min(len);
            None
        }
        KeyCode::Home => {
            state.cursor_position = 0;
            None
        }
        KeyCode::End => {
            state.cursor_position = state.input_buffer.chars().count();
            None
        }

        KeyCode::Enter => submit(state),

        KeyCode::Up | KeyCode::Char('k') => {
            scroll(state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            scroll(state, 1);
            None
        }

        KeyCode::Char('s') => share(state, config),
        KeyCode::Char('r') => {
            reset(state);
            None
        }
        KeyCode::Char('?') => {
            state.show_full_help = !state.show_full_help;
            None
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
            Some(Action::Quit)
        }
        _ => None,
    }
}

pub fn apply_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Revealed(events) => {
            state.loading = false;
            state.revealed = true;
            state.sky = state.selected_date.map(SkyMap::for_date);
            state.list_state.select(if events.is_empty() { None } else { Some(0) });
            state.message = match state.selected_date {
                Some(date) => format!(
                    "On {}, the universe was busy creating history.",
                    date.format("%B %-d, %Y")
                ),
                None => "The universe was busy creating history.".to_string(),
            };
            state.events = events;
        }
        AppEvent::Status(message) => state.message = message,
        AppEvent::Error(error) => {
            state.loading = false;
            state.message = format!("Error: {error}");
        }
    }
}

/// Char cursor -> byte offset, for `String::insert`/`remove`. The
/// buffer is ASCII by construction, but stay correct anyway.
fn byte_index(state: &AppState) -> usize {
    state
        .input_buffer
        .char_indices()
        .nth(state.cursor_position)
        .map(|(i, _)| i)
        .unwrap_or(state.input_buffer.len())
}

/// Any edit to the date invalidates a previous reveal and clears the
/// inline error. Already-reset state stays reset.
fn touch_input(state: &mut AppState) {
    state.validation_error = None;
    if state.revealed {
        state.revealed = false;
        state.events.clear();
        state.sky = None;
        state.selected_date = None;
        state.list_state.select(None);
        state.message = "Press Enter to reveal again.".to_string();
    }
}

fn submit(state: &mut AppState) -> Option<Action> {
    // One in-flight delay at a time.
    if state.loading {
        return None;
    }

    let today = Local::now().date_naive();
    match model::validate(&state.input_buffer, today) {
        Ok(date) => {
            state.validation_error = None;
            state.loading = true;
            state.selected_date = Some(date);
            state.message = "Consulting the Stars...".to_string();
            tracing::info!(%date, "reveal requested");
            Some(Action::Reveal(date))
        }
        Err(error) => {
            state.validation_error = Some(error.to_string());
            None
        }
    }
}

fn share(state: &mut AppState, config: &Config) -> Option<Action> {
    let url = share::share_url(&config.share_base_url, state.input_buffer.trim());
    Some(Action::CopyLink(url))
}

/// "Try Another Date": back to the input-only view.
fn reset(state: &mut AppState) {
    state.input_buffer.clear();
    state.cursor_position = 0;
    state.revealed = false;
    state.loading = false;
    state.events.clear();
    state.sky = None;
    state.selected_date = None;
    state.validation_error = None;
    state.list_state.select(None);
    state.message = "Enter a date and uncover what the cosmos witnessed that day.".to_string();
}

fn scroll(state: &mut AppState, delta: i32) {
    if !state.revealed || state.events.is_empty() {
        return;
    }
    let len = state.events.len() as i32;
    let current = state.list_state.selected().unwrap_or(0) as i32;
    let next = (current + delta).clamp(0, len - 1);
    state.list_state.select(Some(next as usize));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_date(state: &mut AppState, config: &Config, text: &str) {
        for c in text.chars() {
            handle_key(state, config, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_submit_sets_error_and_reveals_nothing() {
        let mut state = AppState::default();
        let config = Config::default();

        let action = handle_key(&mut state, &config, key(KeyCode::Enter));
        assert!(action.is_none());
        assert!(state.validation_error.is_some());
        assert!(!state.revealed);
        assert!(state.events.is_empty());
    }

    #[test]
    fn valid_submit_requests_a_reveal() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-03-10");

        let action = handle_key(&mut state, &config, key(KeyCode::Enter));
        assert!(matches!(action, Some(Action::Reveal(_))));
        assert!(state.loading);
        assert!(state.validation_error.is_none());
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-03-10");

        assert!(handle_key(&mut state, &config, key(KeyCode::Enter)).is_some());
        assert!(handle_key(&mut state, &config, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn reveal_round_trip_populates_events_and_sky() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-06-15");
        let Some(Action::Reveal(date)) = handle_key(&mut state, &config, key(KeyCode::Enter))
        else {
            panic!("expected a reveal");
        };

        apply_event(&mut state, AppEvent::Revealed(model::events_for(date)));
        assert!(state.revealed);
        assert!(!state.loading);
        assert_eq!(state.events.len(), 2);
        assert!(state.sky.is_some());
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn editing_after_reveal_clears_the_revealed_state() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-06-15");
        let Some(Action::Reveal(date)) = handle_key(&mut state, &config, key(KeyCode::Enter))
        else {
            panic!("expected a reveal");
        };
        apply_event(&mut state, AppEvent::Revealed(model::events_for(date)));

        handle_key(&mut state, &config, key(KeyCode::Backspace));
        assert!(!state.revealed);
        assert!(state.events.is_empty());
        assert!(state.sky.is_none());
        assert!(state.selected_date.is_none());

        // Idempotent: a second edit changes nothing further.
        handle_key(&mut state, &config, key(KeyCode::Backspace));
        assert!(!state.revealed);
    }

    #[test]
    fn editing_clears_the_validation_error() {
        let mut state = AppState::default();
        let config = Config::default();
        handle_key(&mut state, &config, key(KeyCode::Enter));
        assert!(state.validation_error.is_some());

        handle_key(&mut state, &config, key(KeyCode::Char('2')));
        assert!(state.validation_error.is_none());
    }

    #[test]
    fn share_carries_the_current_buffer_byte_for_byte() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-08-20");

        let Some(Action::CopyLink(url)) = handle_key(&mut state, &config, key(KeyCode::Char('s')))
        else {
            panic!("expected a copy action");
        };
        let (_, query) = url.split_once("?date=").unwrap();
        assert_eq!(query, "2020-08-20");
    }

    #[test]
    fn letters_are_not_typed_into_the_buffer() {
        let mut state = AppState::default();
        let config = Config::default();
        handle_key(&mut state, &config, key(KeyCode::Char('x')));
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn reset_returns_to_the_input_only_view() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-03-10");
        let Some(Action::Reveal(date)) = handle_key(&mut state, &config, key(KeyCode::Enter))
        else {
            panic!("expected a reveal");
        };
        apply_event(&mut state, AppEvent::Revealed(model::events_for(date)));

        handle_key(&mut state, &config, key(KeyCode::Char('r')));
        assert!(state.input_buffer.is_empty());
        assert!(!state.revealed);
        assert!(state.selected_date.is_none());
    }

    #[test]
    fn cursor_edits_in_the_middle_of_the_buffer() {
        let mut state = AppState::default();
        let config = Config::default();
        type_date(&mut state, &config, "2020-0310");
        for _ in 0..2 {
            handle_key(&mut state, &config, key(KeyCode::Left));
        }
        handle_key(&mut state, &config, key(KeyCode::Char('3')));
        // Oops, wrong digit; undo it.
        handle_key(&mut state, &config, key(KeyCode::Backspace));
        handle_key(&mut state, &config, key(KeyCode::Char('-')));
        assert_eq!(state.input_buffer, "2020-03-10");
    }

    #[test]
    fn worker_error_stops_the_spinner() {
        let mut state = AppState::default();
        state.loading = true;
        apply_event(&mut state, AppEvent::Error("clipboard unavailable".to_string()));
        assert!(!state.loading);
        assert!(state.message.contains("clipboard unavailable"));
    }
}
