use chrono::Utc;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use atelier_imageops::{compress, load_image};

use crate::app::{
    App, EDITOR_APPLY, EDITOR_CATEGORY, EDITOR_DESCRIPTION, EDITOR_FEATURED,
    EDITOR_IMAGE, EDITOR_LINK, EDITOR_ROWS, EDITOR_TITLE,
};
use crate::centered_rect;
use crate::components::InputField;

pub fn render_editor(f: &mut Frame, app: &mut App) {
    let Some(editor) = &mut app.admin.editor else {
        return;
    };

    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::THICK)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Edit Project ");
    let inner = frame_block.inner(area);
    f.render_widget(frame_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Category
            Constraint::Length(4), // Description
            Constraint::Length(3), // Link
            Constraint::Length(3), // Image path
            Constraint::Length(1), // Featured toggle
            Constraint::Length(1), // Apply
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_row(
        f,
        rows[0],
        "Title",
        &editor.project.title,
        editor.focus == EDITOR_TITLE,
    );

    let category = Paragraph::new(Line::from(vec![
        Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            editor.project.category.clone(),
            Style::default().fg(Color::White),
        ),
        Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Section ")
            .border_style(focus_style(editor.focus == EDITOR_CATEGORY)),
    );
    f.render_widget(category, rows[1]);

    render_text_row(
        f,
        rows[2],
        "Description",
        &editor.project.description,
        editor.focus == EDITOR_DESCRIPTION,
    );
    render_text_row(
        f,
        rows[3],
        "Link",
        &editor.project.link,
        editor.focus == EDITOR_LINK,
    );

    editor.image_path.focused = editor.focus == EDITOR_IMAGE;
    editor.image_path.render(f, rows[4]);

    let featured_label = if editor.project.featured() {
        "[★] Featured in the hero strip"
    } else {
        "[ ] Featured in the hero strip"
    };
    let featured = Paragraph::new(Span::styled(
        featured_label,
        if editor.focus == EDITOR_FEATURED {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        },
    ));
    f.render_widget(featured, rows[5]);

    let apply = Paragraph::new(Span::styled(
        "  Apply (Enter)  ·  Esc discards  ",
        if editor.focus == EDITOR_APPLY {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        },
    ));
    f.render_widget(apply, rows[6]);
}

fn render_text_row(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
) {
    let mut field = InputField::new(label);
    field.value = value.to_string();
    field.focused = focused;
    field.render(f, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn handle_editor_input(app: &mut App, key: KeyEvent) {
    let Some(editor) = &mut app.admin.editor else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.admin.editor = None;
        }
        KeyCode::Up => {
            editor.focus = (editor.focus + EDITOR_ROWS - 1) % EDITOR_ROWS;
        }
        KeyCode::Down | KeyCode::Tab => {
            editor.focus = (editor.focus + 1) % EDITOR_ROWS;
        }
        KeyCode::Left | KeyCode::Right
            if editor.focus == EDITOR_CATEGORY =>
        {
            let choices: Vec<String> = app
                .admin
                .draft
                .assignable_categories()
                .iter()
                .map(|c| c.to_string())
                .collect();
            if choices.is_empty() {
                return;
            }
            let editor = app.admin.editor.as_mut().unwrap();
            let at = choices
                .iter()
                .position(|c| *c == editor.project.category)
                .unwrap_or(0);
            let next = if key.code == KeyCode::Right {
                (at + 1) % choices.len()
            } else {
                (at + choices.len() - 1) % choices.len()
            };
            editor.project.category = choices[next].clone();
        }
        KeyCode::Enter => match editor.focus {
            EDITOR_FEATURED => {
                editor
                    .project
                    .toggle_featured(Utc::now().timestamp_millis());
            }
            EDITOR_IMAGE => replace_image(app),
            EDITOR_APPLY => {
                if let Some(editor) = app.admin.editor.take() {
                    app.admin.draft.upsert_project(editor.project);
                }
            }
            _ => {
                editor.focus = (editor.focus + 1) % EDITOR_ROWS;
            }
        },
        KeyCode::Char(' ') if editor.focus == EDITOR_FEATURED => {
            editor
                .project
                .toggle_featured(Utc::now().timestamp_millis());
        }
        KeyCode::Backspace => match editor.focus {
            EDITOR_TITLE => {
                editor.project.title.pop();
            }
            EDITOR_DESCRIPTION => {
                editor.project.description.pop();
            }
            EDITOR_LINK => {
                editor.project.link.pop();
            }
            EDITOR_IMAGE => editor.image_path.pop_char(),
            _ => {}
        },
        KeyCode::Char(c) if key.modifiers != KeyModifiers::CONTROL => {
            match editor.focus {
                EDITOR_TITLE => editor.project.title.push(c),
                EDITOR_DESCRIPTION => editor.project.description.push(c),
                EDITOR_LINK => editor.project.link.push(c),
                EDITOR_IMAGE => editor.image_path.push_char(c),
                _ => {}
            }
        }
        _ => {}
    }
}

/// Load the file named in the path field, recompress it and store the
/// result inline on the working copy.
fn replace_image(app: &mut App) {
    let path = {
        let editor = app.admin.editor.as_ref().unwrap();
        std::path::PathBuf::from(editor.image_path.value.clone())
    };
    let encoded = load_image(&path).and_then(compress);
    match encoded {
        Ok(url) => {
            let editor = app.admin.editor.as_mut().unwrap();
            editor.project.image_url = url;
            editor.image_path.clear();
            app.set_status("Image compressed and attached");
        }
        Err(err) => app.set_error(err.to_string()),
    }
}
