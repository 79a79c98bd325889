use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use atelier_entities::ALL_CATEGORY;

use crate::app::App;

pub fn render_categories_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let categories = &app.admin.draft.data.categories;

    let items: Vec<ListItem> = categories
        .iter()
        .map(|category| {
            let mut spans = vec![Span::styled(
                category.clone(),
                Style::default().fg(Color::White),
            )];
            if category == ALL_CATEGORY {
                spans.push(Span::styled(
                    "  (reserved)",
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                let assigned = app
                    .admin
                    .draft
                    .data
                    .projects
                    .iter()
                    .filter(|p| &p.category == category)
                    .count();
                spans.push(Span::styled(
                    format!("  {} project(s)", assigned),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sections · type to rename "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if !app.admin.draft.data.categories.is_empty() {
        state.select(Some(app.admin.category_cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}

pub fn handle_categories_input(app: &mut App, key: KeyEvent) {
    let count = app.admin.draft.data.categories.len();
    let cursor = app.admin.category_cursor;

    match key.code {
        KeyCode::Up => {
            app.admin.category_cursor = cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if cursor + 1 < count {
                app.admin.category_cursor = cursor + 1;
            }
        }
        KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
            app.admin.draft.add_category();
            app.admin.category_cursor =
                app.admin.draft.data.categories.len() - 1;
        }
        KeyCode::Char('d') if key.modifiers == KeyModifiers::CONTROL => {
            if app.admin.draft.remove_category(cursor) {
                // Imported documents need not contain the reserved entry,
                // so the list can empty out entirely.
                let len = app.admin.draft.data.categories.len();
                app.admin.category_cursor = cursor.min(len.saturating_sub(1));
            } else {
                app.set_error("The reserved section cannot be removed");
            }
        }
        KeyCode::Backspace => {
            let shortened = app
                .admin
                .draft
                .data
                .categories
                .get(cursor)
                .map(|c| {
                    let mut name = c.clone();
                    name.pop();
                    name
                });
            if let Some(name) = shortened {
                if !app.admin.draft.rename_category(cursor, name) {
                    app.set_error("The reserved section cannot be renamed");
                }
            }
        }
        KeyCode::Char(c) if key.modifiers != KeyModifiers::CONTROL => {
            let appended = app
                .admin
                .draft
                .data
                .categories
                .get(cursor)
                .map(|name| format!("{}{}", name, c));
            if let Some(name) = appended {
                if !app.admin.draft.rename_category(cursor, name) {
                    app.set_error("The reserved section cannot be renamed");
                }
            }
        }
        _ => {}
    }
}
