use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode,
            KeyEvent, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            disable_raw_mode, enable_raw_mode, EnterAlternateScreen,
            LeaveAlternateScreen,
        },
    },
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame, Terminal,
};

use atelier_vault::Store;

use crate::app::{AdminTab, App, View};
use crate::pages::{
    handle_categories_input, handle_cropper_input, handle_editor_input,
    handle_portfolio_input, handle_profile_input, handle_projects_input,
    handle_publish_input, render_categories_tab, render_contact_modal,
    render_cropper, render_editor, render_portfolio, render_profile_tab,
    render_projects_tab, render_publish_tab,
};

pub mod app;
mod components;
mod pages;
mod utilities;

pub fn run_tui(store: Store, root: PathBuf, start_admin: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, root, start_admin);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("tui loop failed: {err:?}");
    }
    res
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && handle_key_event(app, key)
                {
                    break;
                }
            }
        }

        app.update();
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(4), // Footer
        ])
        .split(f.area());

    render_title(f, app, chunks[0]);

    match app.view {
        View::Portfolio => render_portfolio(f, app, chunks[1]),
        View::Admin => render_admin(f, app, chunks[1]),
    }

    render_footer(f, app, chunks[2]);

    // Modal overlays, innermost last.
    if app.contact_open {
        render_contact_modal(f, app);
    }
    if app.view == View::Admin {
        if app.admin.editor.is_some() {
            render_editor(f, app);
        }
        if app.admin.import_path.is_some() {
            render_import_prompt(f, app);
        }
        if app.admin.cropper.is_some() {
            render_cropper(f, app);
        }
    }
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let (title, subtitle) = match app.view {
        View::Portfolio => (" Curated Archive ", "Portfolio"),
        View::Admin => (" Archive Manager ", "Admin — draft editing"),
    };

    let line = Line::from(vec![
        Span::styled(
            app.store.committed().profile.name.clone(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::raw("  ·  "),
        Span::styled(subtitle, Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Red))
        .title(title);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_admin(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<Line> = AdminTab::ALL
        .iter()
        .map(|t| Line::from(t.title()))
        .collect();
    let selected = AdminTab::ALL
        .iter()
        .position(|t| *t == app.admin.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .block(Block::default().borders(Borders::ALL).title(" Tabs "));
    f.render_widget(tabs, chunks[0]);

    match app.admin.tab {
        AdminTab::Profile => render_profile_tab(f, app, chunks[1]),
        AdminTab::Projects => render_projects_tab(f, app, chunks[1]),
        AdminTab::Categories => render_categories_tab(f, app, chunks[1]),
        AdminTab::Publish => render_publish_tab(f, app, chunks[1]),
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.view {
        View::Portfolio => {
            "←/→ Filter · ↑/↓ Sections · Enter Expand · c Contact · a Admin · q Quit"
        }
        View::Admin => match app.admin.tab {
            AdminTab::Profile => {
                "↑/↓ Field · type to edit · Enter Load portrait · Tab Next tab · Ctrl-S Sync · Esc Back"
            }
            AdminTab::Projects => {
                "↑/↓ Move · Space Grab · n New · Enter Edit · d Delete · Ctrl-S Sync · Esc Back"
            }
            AdminTab::Categories => {
                "↑/↓ Select · type to rename · Ctrl-N Add · Ctrl-D Delete · Ctrl-S Sync · Esc Back"
            }
            AdminTab::Publish => {
                "c Copy configuration · l Copy snapshot path · Ctrl-E Export · Ctrl-O Import · Ctrl-S Sync · Esc Back"
            }
        },
    };

    let mut lines = vec![Line::from(Span::styled(
        hints,
        Style::default().fg(Color::Gray),
    ))];

    let status_line = match (&app.admin.status, app.view) {
        (Some(status), View::Admin) => Line::from(Span::styled(
            status.text.clone(),
            if status.error {
                Style::default().fg(Color::LightRed).bold()
            } else {
                Style::default().fg(Color::LightGreen)
            },
        )),
        _ if app.store.dirty() => Line::from(Span::styled(
            "⚠ snapshot write failed — edits live in memory only",
            Style::default().fg(Color::LightRed),
        )),
        _ => Line::from(""),
    };
    lines.push(status_line);

    let footer = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title(" Controls "),
        );
    f.render_widget(footer, area);
}

/// Returns `true` when the app should quit.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers == KeyModifiers::CONTROL
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
    {
        return true;
    }

    // Modals swallow input before anything else.
    if app.view == View::Admin {
        if app.admin.cropper.is_some() {
            handle_cropper_input(app, key);
            return false;
        }
        if app.admin.editor.is_some() {
            handle_editor_input(app, key);
            return false;
        }
        if app.admin.import_path.is_some() {
            handle_import_prompt_input(app, key);
            return false;
        }
    }
    if app.contact_open {
        handle_portfolio_input(app, key);
        return false;
    }

    match app.view {
        View::Portfolio => {
            if key.code == KeyCode::Char('q') {
                return true;
            }
            handle_portfolio_input(app, key);
        }
        View::Admin => handle_admin_key(app, key),
    }

    false
}

fn handle_admin_key(app: &mut App, key: KeyEvent) {
    let has_ctrl = key.modifiers == KeyModifiers::CONTROL;
    match key.code {
        KeyCode::Esc => app.leave_admin(),
        KeyCode::Tab => app.admin.tab = app.admin.tab.next(),
        KeyCode::BackTab => app.admin.tab = app.admin.tab.prev(),
        KeyCode::Char('s') | KeyCode::Char('S') if has_ctrl => {
            app.commit_draft()
        }
        KeyCode::Char('e') | KeyCode::Char('E') if has_ctrl => {
            app.export_backup()
        }
        KeyCode::Char('o') | KeyCode::Char('O') if has_ctrl => {
            app.admin.import_path = Some(
                crate::components::InputField::new("Import backup (path)")
                    .with_placeholder("/path/to/portfolio-backup.json"),
            );
        }
        _ => match app.admin.tab {
            AdminTab::Profile => handle_profile_input(app, key),
            AdminTab::Projects => handle_projects_input(app, key),
            AdminTab::Categories => handle_categories_input(app, key),
            AdminTab::Publish => handle_publish_input(app, key),
        },
    }
}

fn render_import_prompt(f: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::THICK)
        .title(" Restore from backup ");
    f.render_widget(block, area);

    if let Some(field) = &mut app.admin.import_path {
        field.focused = true;
        field.render(f, chunks[0]);
    }
    let hint = Paragraph::new(Line::from(Span::styled(
        "Enter Load · Esc Cancel — the draft is replaced, syncing stays manual",
        Style::default().fg(Color::Gray),
    )));
    f.render_widget(hint, chunks[1]);
}

fn handle_import_prompt_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.admin.import_path = None,
        KeyCode::Enter => {
            if let Some(field) = app.admin.import_path.take() {
                app.import_backup(PathBuf::from(field.value));
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = app.admin.import_path.as_mut() {
                field.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = app.admin.import_path.as_mut() {
                field.push_char(c);
            }
        }
        _ => {}
    }
}

pub(crate) fn centered_rect(
    percent_x: u16,
    percent_y: u16,
    r: Rect,
) -> Rect {
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
