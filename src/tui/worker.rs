// File: src/tui/worker.rs
//
// Background task behind the Action/AppEvent channel pair. It owns
// the two things that must stay off the draw loop: the artificial
// reveal delay and the clipboard handle.

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::model;
use crate::share;
use crate::tui::action::{Action, AppEvent};

pub async fn run(
    mut actions: UnboundedReceiver<Action>,
    events: UnboundedSender<AppEvent>,
    reveal_delay: Duration,
) {
    while let Some(action) = actions.recv().await {
        match action {
            Action::Reveal(date) => {
                // The delay is pure theater (spinner time); the
                // selection itself is instant.
                tokio::time::sleep(reveal_delay).await;
                let selected = model::events_for(date);
                tracing::debug!(%date, count = selected.len(), "revealing events");
                if events.send(AppEvent::Revealed(selected)).is_err() {
                    break;
                }
            }
            Action::CopyLink(url) => {
                let outcome = match share::copy_link(&url) {
                    Ok(()) => AppEvent::Status("Link copied to clipboard!".to_string()),
                    Err(e) => AppEvent::Error(format!("clipboard: {e:#}")),
                };
                if events.send(outcome).is_err() {
                    break;
                }
            }
            Action::Quit => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn reveal_reports_the_selection_for_the_date() {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(action_rx, event_tx, Duration::ZERO));

        let date = NaiveDate::from_ymd_opt(2020, 8, 20).unwrap();
        action_tx.send(Action::Reveal(date)).unwrap();

        match event_rx.recv().await {
            Some(AppEvent::Revealed(events)) => {
                let ids: Vec<u8> = events.iter().map(|e| e.id).collect();
                assert_eq!(ids, [3, 1]);
            }
            other => panic!("expected Revealed, got {other:?}"),
        }

        action_tx.send(Action::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn worker_exits_when_the_ui_hangs_up() {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(action_rx, event_tx, Duration::ZERO));

        drop(action_tx);
        handle.await.unwrap();
    }
}
