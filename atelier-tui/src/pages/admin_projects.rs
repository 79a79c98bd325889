use chrono::Utc;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::{App, EditorState};

pub fn render_projects_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let projects = &app.admin.draft.data.projects;

    let items: Vec<ListItem> = projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let grabbed = app.admin.grabbed && idx == app.admin.project_cursor;
            let handle = if grabbed { "≡ " } else { "  " };

            let mut spans = vec![
                Span::styled(handle, Style::default().fg(Color::Yellow)),
                Span::styled(
                    project.title.clone(),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("  · {}", project.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if project.featured() {
                spans.push(Span::styled(
                    "  ★",
                    Style::default().fg(Color::Red),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if app.admin.grabbed {
        " Projects · reordering (Space drops) "
    } else {
        " Projects "
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if !app.admin.draft.data.projects.is_empty() {
        state.select(Some(app.admin.project_cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}

pub fn handle_projects_input(app: &mut App, key: KeyEvent) {
    let count = app.admin.draft.data.projects.len();

    match key.code {
        KeyCode::Up => {
            if app.admin.project_cursor == 0 {
                return;
            }
            if app.admin.grabbed {
                let from = app.admin.project_cursor;
                app.admin.draft.move_project(from, from - 1);
            }
            app.admin.project_cursor -= 1;
        }
        KeyCode::Down => {
            if app.admin.project_cursor + 1 >= count {
                return;
            }
            if app.admin.grabbed {
                let from = app.admin.project_cursor;
                app.admin.draft.move_project(from, from + 1);
            }
            app.admin.project_cursor += 1;
        }
        KeyCode::Char(' ') => {
            if count > 0 {
                app.admin.grabbed = !app.admin.grabbed;
            }
        }
        KeyCode::Enter => {
            if let Some(project) =
                app.admin.draft.data.projects.get(app.admin.project_cursor)
            {
                app.admin.editor = Some(EditorState::new(project.clone()));
                app.admin.grabbed = false;
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            let fresh =
                app.admin.draft.new_project(Utc::now().timestamp_millis());
            app.admin.editor = Some(EditorState::new(fresh));
            app.admin.grabbed = false;
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            let removed = app
                .admin
                .draft
                .data
                .projects
                .get(app.admin.project_cursor)
                .map(|p| (p.id.clone(), p.title.clone()));
            if let Some((id, title)) = removed {
                app.admin.draft.remove_project(&id);
                let len = app.admin.draft.data.projects.len();
                app.admin.project_cursor =
                    app.admin.project_cursor.min(len.saturating_sub(1));
                app.admin.grabbed = false;
                app.set_status(format!("Removed \"{}\"", title));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ratatui::crossterm::event::{KeyCode, KeyEvent};
    use tempdir::TempDir;

    use super::*;
    use atelier_vault::{Store, Vault};

    fn app(dir: &TempDir) -> App {
        let vault = Vault::new("test", &dir.path().join("portfolio.json"));
        let mut app =
            App::new(Store::open(vault), PathBuf::from(dir.path()), true);
        app.enter_admin();
        app
    }

    fn ids(app: &App) -> Vec<String> {
        app.admin
            .draft
            .data
            .projects
            .iter()
            .map(|p| p.id.clone())
            .collect()
    }

    #[test]
    fn grab_then_move_reorders_the_backing_list() {
        let dir = TempDir::new("projects").unwrap();
        let mut app = app(&dir);
        let before = ids(&app);

        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Char(' ')));
        assert!(app.admin.grabbed);
        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Down));
        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Down));
        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Char(' ')));

        let after = ids(&app);
        assert_eq!(after[2], before[0]);
        assert_eq!(after[0], before[1]);
        assert_eq!(app.admin.project_cursor, 2);
    }

    #[test]
    fn ungrabbed_arrows_only_move_the_cursor() {
        let dir = TempDir::new("projects").unwrap();
        let mut app = app(&dir);
        let before = ids(&app);

        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Down));
        assert_eq!(ids(&app), before);
        assert_eq!(app.admin.project_cursor, 1);
    }

    #[test]
    fn delete_clamps_the_cursor_and_drops_the_grab() {
        let dir = TempDir::new("projects").unwrap();
        let mut app = app(&dir);
        let count = app.admin.draft.data.projects.len();
        app.admin.project_cursor = count - 1;
        app.admin.grabbed = true;

        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Char('d')));
        assert_eq!(app.admin.draft.data.projects.len(), count - 1);
        assert_eq!(app.admin.project_cursor, count - 2);
        assert!(!app.admin.grabbed);
    }

    #[test]
    fn new_project_opens_the_editor_without_touching_the_draft() {
        let dir = TempDir::new("projects").unwrap();
        let mut app = app(&dir);
        let count = app.admin.draft.data.projects.len();

        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Char('n')));
        assert!(app.admin.editor.is_some());
        // Nothing lands in the draft until the editor applies.
        assert_eq!(app.admin.draft.data.projects.len(), count);
        assert_eq!(
            app.admin.editor.as_ref().unwrap().project.title,
            "Untitled Project"
        );
    }

    #[test]
    fn enter_opens_the_editor_on_a_copy_of_the_selected_project() {
        let dir = TempDir::new("projects").unwrap();
        let mut app = app(&dir);
        app.admin.project_cursor = 1;

        handle_projects_input(&mut app, KeyEvent::from(KeyCode::Enter));
        let editor = app.admin.editor.as_ref().unwrap();
        assert_eq!(editor.project.id, app.admin.draft.data.projects[1].id);
    }
}
