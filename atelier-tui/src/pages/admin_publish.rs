use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use atelier_vault::SNAPSHOT_BUDGET_BYTES;

use crate::app::App;
use crate::utilities::clipboard::copy_to_clipboard;

pub fn render_publish_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let json = serde_json::to_string_pretty(&app.admin.draft.data)
        .unwrap_or_else(|_| "{}".to_string());

    // The budget is judged on the compact form the snapshot is written in.
    let stored_len = serde_json::to_string(&app.admin.draft.data)
        .map(|text| text.len())
        .unwrap_or(0);
    let ratio =
        (stored_len as f64 / SNAPSHOT_BUDGET_BYTES as f64).clamp(0.0, 1.0);
    let color = if ratio > 0.8 {
        Color::Red
    } else {
        Color::Green
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Snapshot size "),
        )
        .gauge_style(Style::default().fg(color))
        .label(Span::raw(format!(
            "{} KiB of {} KiB",
            stored_len / 1024,
            SNAPSHOT_BUDGET_BYTES / 1024
        )))
        .ratio(ratio);
    f.render_widget(gauge, chunks[0]);

    let preview = Paragraph::new(json).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Draft configuration · c Copy config · l Copy snapshot path "),
    );
    f.render_widget(preview, chunks[1]);
}

pub fn handle_publish_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => {
            let json =
                match serde_json::to_string_pretty(&app.admin.draft.data) {
                    Ok(json) => json,
                    Err(err) => {
                        app.set_error(format!("Serialization failed: {}", err));
                        return;
                    }
                };
            match copy_to_clipboard(&json) {
                Ok(()) => {
                    app.set_status("Configuration copied to the clipboard")
                }
                Err(err) => app.set_error(err.to_string()),
            }
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            let path =
                app.store.snapshot_path().to_string_lossy().into_owned();
            match copy_to_clipboard(&path) {
                Ok(()) => app.set_status("Snapshot path copied"),
                Err(err) => app.set_error(err.to_string()),
            }
        }
        _ => {}
    }
}
