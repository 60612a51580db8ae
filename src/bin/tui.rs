use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use echoes::config::Config;
use echoes::logging;
use echoes::tui::state::AppState;
use echoes::tui::{update, view, worker};

/// Echoes of the Cosmos: pick a date, see what the sky was up to.
#[derive(Parser)]
#[command(name = "echoes", version, about = "A date-driven almanac of cosmic events")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Start with this date (YYYY-MM-DD) already entered.
    #[arg(short, long)]
    date: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load();
    let initial = cli.date.or_else(|| config.last_date.clone());

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut config, initial).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = config.save() {
        tracing::warn!("could not save config: {e:#}");
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &mut Config,
    initial_date: Option<String>,
) -> Result<()> {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let worker_handle = tokio::spawn(worker::run(
        action_rx,
        event_tx,
        Duration::from_millis(config.reveal_delay_ms),
    ));

    let mut state = AppState::new(initial_date);
    let mut term_events = EventStream::new();
    // ~10 fps is plenty for the twinkle and the spinner.
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal.draw(|f| view::draw(f, &mut state))?;

        tokio::select! {
            _ = tick.tick() => {
                state.tick = state.tick.wrapping_add(1);
            }
            Some(event) = event_rx.recv() => {
                update::apply_event(&mut state, event);
            }
            maybe_event = term_events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = update::handle_key(&mut state, config, key) {
                            let _ = action_tx.send(action);
                        }
                    }
                    Some(Ok(_)) => {} // resize etc.; the next draw picks it up
                    Some(Err(e)) => tracing::warn!("terminal event error: {e}"),
                    None => break,
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    if let Some(date) = state.selected_date {
        config.last_date = Some(date.format("%Y-%m-%d").to_string());
    }

    drop(action_tx);
    let _ = worker_handle.await;
    Ok(())
}
