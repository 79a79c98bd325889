use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use atelier_imageops::load_image;

use crate::app::{
    App, CropperState, PROFILE_AVATAR, PROFILE_BIO, PROFILE_EMAIL,
    PROFILE_NAME, PROFILE_ROWS,
};
use crate::components::InputField;

pub fn render_profile_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_portrait_column(f, app, columns[0]);
    render_fields_column(f, app, columns[1]);
}

fn render_portrait_column(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let avatar = &app.admin.draft.data.profile.avatar;
    let portrait_line = if avatar.is_empty() {
        Line::from(Span::styled(
            "No portrait set",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!("Portrait set · {} KiB stored", avatar.len() / 1024),
            Style::default().fg(Color::LightGreen),
        ))
    };
    let portrait = Paragraph::new(vec![portrait_line, Line::from(Span::styled(
        "Enter on the path field below crops a new one",
        Style::default().fg(Color::DarkGray),
    ))])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Portrait "));
    f.render_widget(portrait, chunks[0]);

    app.admin.avatar_path.focused =
        app.admin.profile_focus == PROFILE_AVATAR;
    app.admin.avatar_path.render(f, chunks[1]);
}

fn render_fields_column(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let profile = &app.admin.draft.data.profile;
    render_field(
        f,
        chunks[0],
        "Full Name",
        &profile.name,
        "Your name",
        app.admin.profile_focus == PROFILE_NAME,
    );
    render_field(
        f,
        chunks[1],
        "Email",
        &profile.email,
        "you@example.com",
        app.admin.profile_focus == PROFILE_EMAIL,
    );
    render_field(
        f,
        chunks[2],
        "Brief Bio",
        &profile.bio,
        "Write a short intro about yourself...",
        app.admin.profile_focus == PROFILE_BIO,
    );
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let mut field = InputField::new(label).with_placeholder(placeholder);
    field.value = value.to_string();
    field.focused = focused;
    field.render(f, area);
}

pub fn handle_profile_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            app.admin.profile_focus =
                (app.admin.profile_focus + PROFILE_ROWS - 1) % PROFILE_ROWS;
        }
        KeyCode::Down => {
            app.admin.profile_focus =
                (app.admin.profile_focus + 1) % PROFILE_ROWS;
        }
        KeyCode::Enter => {
            if app.admin.profile_focus == PROFILE_AVATAR {
                open_cropper(app);
            } else {
                app.admin.profile_focus =
                    (app.admin.profile_focus + 1) % PROFILE_ROWS;
            }
        }
        KeyCode::Backspace => {
            if app.admin.profile_focus == PROFILE_AVATAR {
                app.admin.avatar_path.pop_char();
            } else if let Some(field) = app.admin.focused_profile_field() {
                field.pop();
            }
        }
        KeyCode::Char(c) if key.modifiers != KeyModifiers::CONTROL => {
            if app.admin.profile_focus == PROFILE_AVATAR {
                app.admin.avatar_path.push_char(c);
            } else if let Some(field) = app.admin.focused_profile_field() {
                field.push(c);
            }
        }
        _ => {}
    }
}

fn open_cropper(app: &mut App) {
    let path = std::path::PathBuf::from(app.admin.avatar_path.value.clone());
    match load_image(&path) {
        Ok(image) => {
            app.admin.cropper = Some(CropperState::new(image));
            app.admin.avatar_path.clear();
        }
        Err(err) => app.set_error(err.to_string()),
    }
}
