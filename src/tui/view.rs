// File: src/tui/view.rs
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, Paragraph, Wrap,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use crate::color_utils;
use crate::model::{CosmicEvent, TRIVIA};
use crate::starfield::StarFieldWidget;
use crate::tui::state::AppState;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// The original page's celestial-gold accent.
const GOLD: Color = Color::Rgb(241, 196, 15);

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ?:Toggle Help  q:Quit  Ctrl+C:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " DATE ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" 0-9 and - :Type  Backspace:Erase  Left/Right:Cursor  Enter:Reveal"),
        ]),
        Line::from(vec![
            Span::styled(
                " RESULTS ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" j/k or Up/Down:Scroll Cards  r:Try Another Date"),
        ]),
        Line::from(vec![
            Span::styled(
                " SHARE ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" s:Copy a Link Carrying the Current Date"),
        ]),
    ];

    let footer_height = if state.show_full_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), footer_height])
        .split(f.area());

    if state.revealed {
        draw_revealed(f, state, v_chunks[0]);
    } else {
        draw_hero(f, state, v_chunks[0]);
    }

    draw_footer(f, state, v_chunks[1], full_help_text);
}

/// Input-only view: star field, headline, date entry.
fn draw_hero(f: &mut Frame, state: &AppState, area: Rect) {
    f.render_widget(
        StarFieldWidget {
            field: &state.stars,
            tick: state.tick,
        },
        area,
    );

    let hero = centered_rect(64, 80, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // headline
            Constraint::Length(2), // tagline
            Constraint::Length(3), // date input
            Constraint::Length(1), // inline error / range hint
            Constraint::Length(2), // reveal button / spinner
            Constraint::Min(0),
            Constraint::Length(1), // quote
        ])
        .split(hero);

    let headline = Paragraph::new(vec![
        Line::from("The Universe Has a"),
        Line::from(Span::styled(
            "Memory",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(headline, chunks[0]);

    let tagline = Paragraph::new("Enter a date and uncover what the cosmos witnessed that day.")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(tagline, chunks[1]);

    // Date input. The border turns red while an error is shown.
    let input_area = centered_rect(50, 100, chunks[2]);
    let input_style = if state.validation_error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Magenta)
    };
    let input = Paragraph::new(state.input_buffer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Date (YYYY-MM-DD) ")
            .border_style(input_style),
    );
    f.render_widget(input, input_area);

    if !state.loading {
        let cursor_x = input_area.x + 1 + state.cursor_position as u16;
        let max_x = input_area.x + input_area.width.saturating_sub(2);
        if cursor_x <= max_x {
            f.set_cursor_position((cursor_x, input_area.y + 1));
        }
    }

    let under_input = match &state.validation_error {
        Some(error) => Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        None => Paragraph::new("Our known cosmic timeline spans 1000 AD through today.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
    };
    f.render_widget(under_input, chunks[3]);

    let button = if state.loading {
        let frame = SPINNER[(state.tick % SPINNER.len() as u64) as usize];
        Paragraph::new(format!("{frame} Consulting the Stars..."))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(
                "[ Enter ]",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Reveal Cosmic Events"),
        ]))
        .alignment(Alignment::Center)
    };
    f.render_widget(button, chunks[4]);

    let quote = Paragraph::new(Span::styled(
        "\"We are a way for the cosmos to know itself.\" — Carl Sagan",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    f.render_widget(quote, chunks[6]);
}

/// Post-reveal view: event cards, the sky dome, trivia.
fn draw_revealed(f: &mut Frame, state: &mut AppState, area: Rect) {
    f.render_widget(
        StarFieldWidget {
            field: &state.stars,
            tick: state.tick,
        },
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let subtitle = match state.selected_date {
        Some(date) => format!(
            "On {}, the universe was busy creating history.",
            date.format("%B %-d, %Y")
        ),
        None => String::new(),
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Events That Echo Through Time",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(chunks[1]);

    draw_event_cards(f, state, h_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Min(0)])
        .split(h_chunks[1]);

    draw_sky_dome(f, state, side_chunks[0]);
    draw_trivia(f, side_chunks[1]);
}

fn draw_event_cards(f: &mut Frame, state: &mut AppState, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = state
        .events
        .iter()
        .map(|&event| ListItem::new(card_lines(event, inner_width)))
        .collect();

    let title = format!(" Events ({}) ", state.events.len());
    let cards = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::Blue));

    if state.events.is_empty() {
        // The selector can't currently produce this, but the contract
        // allows 0 events, so keep the quiet-sky card.
        let empty = Paragraph::new("No notable events recorded — but the stars still burned silently.")
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Events (0) "));
        f.render_widget(empty, area);
    } else {
        f.render_stateful_widget(cards, area, &mut state.list_state);
    }
}

/// One card: title with a right-aligned category badge, the wrapped
/// description, and the significance footer.
fn card_lines(event: &CosmicEvent, width: usize) -> Vec<Line<'static>> {
    let (r, g, b) = color_utils::category_color(event.category);
    let badge_bg = Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8);
    let badge_fg = if color_utils::is_dark(r, g, b) {
        Color::White
    } else {
        Color::Black
    };
    let badge = format!(" {} ", event.category.label());

    let left_text = format!("{} {}", event.category.glyph(), event.title);
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(badge.chars().count());

    let mut lines = vec![Line::from(vec![
        Span::styled(left_text, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(badge, Style::default().bg(badge_bg).fg(badge_fg)),
    ])];

    for row in wrap_text(event.description, width.saturating_sub(2).max(20)) {
        lines.push(Line::from(format!("  {row}")));
    }

    lines.push(Line::from(Span::styled(
        format!("  ✶ {}", event.significance),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    lines
}

fn draw_sky_dome(f: &mut Frame, state: &AppState, area: Rect) {
    let caption = match &state.sky {
        Some(sky) => format!(" {} · midnight UTC ", sky.date()),
        None => String::new(),
    };
    let dome = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" The Sky Above You ")
                .title_bottom(Line::from(caption).right_aligned()),
        )
        .marker(Marker::Dot)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| {
            let Some(sky) = &state.sky else { return };
            for ((x1, y1), (x2, y2)) in sky.lines() {
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::DarkGray));
            }
            ctx.draw(&Points {
                coords: sky.points(),
                color: GOLD,
            });
            ctx.draw(&Points {
                coords: &[sky.center()],
                color: Color::White,
            });
        });
    f.render_widget(dome, area);
}

fn draw_trivia(f: &mut Frame, area: Rect) {
    let outer = Block::default().borders(Borders::ALL).title(" Did You Know? ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    for (card, chunk) in TRIVIA.iter().zip(chunks.iter()) {
        let text = vec![
            Line::from(Span::styled(
                card.context,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(card.fact),
        ];
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
        f.render_widget(paragraph, *chunk);
    }
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect, full_help_text: Vec<Line>) {
    f.render_widget(Clear, area);

    if state.show_full_help {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keyboard Shortcuts (Press ? to minimize) ")
            .border_style(Style::default().fg(Color::Cyan));
        let help = Paragraph::new(full_help_text)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(help, h_chunks[0]);
        let status = Paragraph::new(state.message.clone())
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title(" Status "));
        f.render_widget(status, h_chunks[1]);
        return;
    }

    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let help_str = if state.loading {
        "q:Quit ?:Help".to_string()
    } else if state.revealed {
        "j/k:Cards s:Share r:Try Another Date ?:Help q:Quit".to_string()
    } else {
        "Enter:Reveal s:Share r:Clear ?:Help q:Quit".to_string()
    };
    let help = Paragraph::new(help_str)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}

/// Greedy word wrap; the card text is plain prose so this is enough.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_keeps_overlong_words_whole() {
        let lines = wrap_text("tiny incomprehensibilities tiny", 8);
        assert!(lines.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn card_has_title_description_and_significance() {
        let lines = card_lines(&crate::model::EVENTS[0], 60);
        // Title, at least one description row, significance, spacer.
        assert!(lines.len() >= 4);
    }
}
