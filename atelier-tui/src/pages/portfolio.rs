use std::time::Instant;

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::centered_rect;
use crate::utilities::clipboard::copy_to_clipboard;

pub fn render_portfolio(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Hero strip
            Constraint::Length(3), // Filter bar
            Constraint::Min(0),    // Sections
        ])
        .split(area);

    render_hero(f, app, chunks[0]);
    render_filter_bar(f, app, chunks[1]);
    render_sections(f, app, chunks[2]);
}

fn render_hero(f: &mut Frame, app: &App, area: Rect) {
    let data = app.store.committed();
    let (first, rest) = data.profile.name_parts();
    let featured = data.featured_projects();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(first, Style::default().fg(Color::White).bold()),
            Span::raw(" "),
            Span::styled(rest, Style::default().fg(Color::Red).italic()),
        ]),
        Line::from(Span::styled(
            format!("“{}”", data.profile.bio),
            Style::default().fg(Color::Gray).italic(),
        )),
        Line::from(""),
    ];

    if featured.is_empty() {
        lines.push(Line::from(Span::styled(
            "No featured projects yet",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (idx, project) in featured.iter().enumerate() {
            let mut spans = vec![
                Span::styled(
                    format!("★ {:02}  ", idx + 1),
                    Style::default().fg(Color::Red),
                ),
                Span::styled(
                    project.title.clone(),
                    Style::default().fg(Color::White).bold(),
                ),
                Span::styled(
                    format!("  · {}", project.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if !project.link.is_empty() {
                spans.push(Span::styled(
                    format!("  → {}", project.link),
                    Style::default().fg(Color::Blue),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let hero = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(" Hero Selection "),
    );
    f.render_widget(hero, area);
}

fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let categories = &app.store.committed().categories;
    let titles: Vec<Line> = categories
        .iter()
        .map(|c| Line::from(c.clone()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.filter.min(categories.len().saturating_sub(1)))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Index of Works "),
        );
    f.render_widget(tabs, area);
}

fn render_sections(f: &mut Frame, app: &App, area: Rect) {
    let data = app.store.committed();
    let sections = data.sections(app.active_filter());

    let mut lines = Vec::new();
    for (idx, section) in sections.iter().enumerate() {
        let highlighted = idx == app.section_cursor;
        let marker = if highlighted { "▸ " } else { "  " };

        let mut header = vec![
            Span::styled(
                format!("{}SECTION {:02} · ", marker, idx + 1),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                section.category.to_uppercase(),
                if highlighted {
                    Style::default().fg(Color::White).bold()
                } else {
                    Style::default().fg(Color::Gray).bold()
                },
            ),
        ];
        if section.truncated {
            header.push(Span::styled(
                "   Expand Section + (Enter)",
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(header));

        for (n, project) in section.projects.iter().enumerate() {
            let mut spans = vec![
                Span::styled(
                    format!("    {:02}  ", n + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    project.title.clone(),
                    Style::default().fg(Color::White),
                ),
            ];
            if !project.description.is_empty() {
                spans.push(Span::styled(
                    format!(" — {}", project.description),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing to show for this filter",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title(format!(" {} ", app.active_filter())),
        );
    f.render_widget(body, area);
}

pub fn render_contact_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 35, f.area());
    f.render_widget(Clear, area);

    let email = app.store.committed().profile.email.clone();
    let copy_line = if app.email_copied_at.is_some() {
        Line::from(Span::styled(
            "✓ Email copied",
            Style::default().fg(Color::LightGreen).bold(),
        ))
    } else {
        Line::from(Span::styled(
            "c Copy email address · Esc Close",
            Style::default().fg(Color::Gray),
        ))
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GET IN TOUCH",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            email,
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        copy_line,
    ];

    let modal = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::THICK)
                .border_style(Style::default().fg(Color::Red))
                .title(" Contact "),
        );
    f.render_widget(modal, area);
}

pub fn handle_portfolio_input(app: &mut App, key: KeyEvent) {
    if app.contact_open {
        match key.code {
            KeyCode::Esc => {
                app.contact_open = false;
                app.email_copied_at = None;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let email = app.store.committed().profile.email.clone();
                if copy_to_clipboard(&email).is_ok() {
                    app.email_copied_at = Some(Instant::now());
                }
            }
            _ => {}
        }
        return;
    }

    let section_count = app
        .store
        .committed()
        .sections(app.active_filter())
        .len();

    match key.code {
        KeyCode::Left => app.cycle_filter(false),
        KeyCode::Right => app.cycle_filter(true),
        KeyCode::Up => {
            app.section_cursor = app.section_cursor.saturating_sub(1)
        }
        KeyCode::Down => {
            if app.section_cursor + 1 < section_count {
                app.section_cursor += 1;
            }
        }
        KeyCode::Enter => {
            // Expand affordance: jump the filter to the highlighted
            // truncated section.
            let target = {
                let data = app.store.committed();
                data.sections(app.active_filter())
                    .get(app.section_cursor)
                    .filter(|s| s.truncated)
                    .map(|s| s.category.to_string())
            };
            if let Some(category) = target {
                app.expand_category(&category);
            }
        }
        KeyCode::Char('c') | KeyCode::Char('C') => app.contact_open = true,
        KeyCode::Char('a') | KeyCode::Char('A') => app.enter_admin(),
        _ => {}
    }
}
