use image::GrayImage;
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use atelier_imageops::{render_avatar, CropState};

use crate::app::App;
use crate::centered_rect;

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

pub fn render_cropper(f: &mut Frame, app: &mut App) {
    let Some(cropper) = &app.admin.cropper else {
        return;
    };

    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::THICK)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Crop Portrait ");
    let inner = frame_block.inner(area);
    f.render_widget(frame_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let preview = preview_lines(
        &cropper.luma,
        &cropper.crop,
        chunks[0].width as u32,
        chunks[0].height as u32,
    );
    f.render_widget(Paragraph::new(preview), chunks[0]);

    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("zoom {:.1}x", cropper.crop.zoom),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            "←↑↓→ Pan · +/- Zoom · Enter Apply · Esc Cancel",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(hints, chunks[1]);
}

/// Rough luminance rendering of the selected window, one cell per
/// character. Terminal cells are about twice as tall as wide, so the
/// source is sampled twice as densely along y.
fn preview_lines(
    luma: &GrayImage,
    crop: &CropState,
    cols: u32,
    rows: u32,
) -> Vec<Line<'static>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }
    let (x0, y0, side) = crop.crop_rect(luma.width(), luma.height());
    let cells = cols.min(rows * 2).max(1);

    let mut lines = Vec::new();
    for row in 0..(cells / 2).max(1) {
        let mut text = String::new();
        for col in 0..cells {
            let sx = x0 + col * side / cells;
            let sy = y0 + (row * 2) * side / cells;
            let sx = sx.min(luma.width() - 1);
            let sy = sy.min(luma.height() - 1);
            let value = luma.get_pixel(sx, sy).0[0] as usize;
            text.push(SHADES[value * SHADES.len() / 256]);
        }
        lines.push(Line::from(text));
    }
    lines
}

pub fn handle_cropper_input(app: &mut App, key: KeyEvent) {
    let Some(cropper) = &mut app.admin.cropper else {
        return;
    };

    // Pan in steps proportional to the current window.
    let (_, _, side) = cropper
        .crop
        .crop_rect(cropper.source.width(), cropper.source.height());
    let step = (side as f32 / 20.0).max(1.0);

    match key.code {
        KeyCode::Esc => {
            app.admin.cropper = None;
        }
        KeyCode::Left => cropper.crop.pan_by(-step, 0.0),
        KeyCode::Right => cropper.crop.pan_by(step, 0.0),
        KeyCode::Up => cropper.crop.pan_by(0.0, -step),
        KeyCode::Down => cropper.crop.pan_by(0.0, step),
        KeyCode::Char('+') | KeyCode::Char('=') => cropper.crop.zoom_by(0.1),
        KeyCode::Char('-') => cropper.crop.zoom_by(-0.1),
        KeyCode::Enter => {
            if let Some(cropper) = app.admin.cropper.take() {
                match render_avatar(&cropper.source, &cropper.crop) {
                    Ok(url) => {
                        app.admin.draft.data.profile.avatar = url;
                        app.set_status("Portrait updated in the draft");
                    }
                    Err(err) => app.set_error(err.to_string()),
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use image::{DynamicImage, RgbImage};
    use ratatui::crossterm::event::{KeyCode, KeyEvent};
    use tempdir::TempDir;

    use super::*;
    use crate::app::CropperState;
    use atelier_imageops::{decode_data_url, AVATAR_SIZE};
    use atelier_vault::{Store, Vault};

    fn app_with_cropper(dir: &TempDir) -> App {
        let vault = Vault::new("test", &dir.path().join("portfolio.json"));
        let mut app =
            App::new(Store::open(vault), PathBuf::from(dir.path()), true);
        app.enter_admin();
        let source = DynamicImage::ImageRgb8(RgbImage::from_fn(
            640,
            480,
            |x, _| image::Rgb([(x % 256) as u8, 64, 64]),
        ));
        app.admin.cropper = Some(CropperState::new(source));
        app
    }

    #[test]
    fn apply_writes_the_fixed_square_avatar_into_the_draft() {
        let dir = TempDir::new("cropper").unwrap();
        let mut app = app_with_cropper(&dir);

        handle_cropper_input(&mut app, KeyEvent::from(KeyCode::Enter));
        assert!(app.admin.cropper.is_none());

        let avatar = &app.admin.draft.data.profile.avatar;
        assert!(avatar.starts_with("data:image/jpeg;base64,"));
        let back = decode_data_url(avatar).unwrap();
        assert_eq!((back.width(), back.height()), (AVATAR_SIZE, AVATAR_SIZE));
    }

    #[test]
    fn escape_cancels_and_keeps_the_previous_avatar() {
        let dir = TempDir::new("cropper").unwrap();
        let mut app = app_with_cropper(&dir);
        let before = app.admin.draft.data.profile.avatar.clone();

        handle_cropper_input(&mut app, KeyEvent::from(KeyCode::Esc));
        assert!(app.admin.cropper.is_none());
        assert_eq!(app.admin.draft.data.profile.avatar, before);
    }

    #[test]
    fn zoom_keys_stay_inside_the_allowed_range() {
        let dir = TempDir::new("cropper").unwrap();
        let mut app = app_with_cropper(&dir);

        for _ in 0..50 {
            handle_cropper_input(&mut app, KeyEvent::from(KeyCode::Char('+')));
        }
        assert_eq!(app.admin.cropper.as_ref().unwrap().crop.zoom, 3.0);

        for _ in 0..50 {
            handle_cropper_input(&mut app, KeyEvent::from(KeyCode::Char('-')));
        }
        assert_eq!(app.admin.cropper.as_ref().unwrap().crop.zoom, 1.0);
    }

    #[test]
    fn preview_covers_the_area_with_shade_characters() {
        let luma = GrayImage::from_fn(100, 100, |x, _| {
            image::Luma([(x * 2) as u8])
        });
        let lines = preview_lines(&luma, &CropState::default(), 40, 20);
        assert!(!lines.is_empty());
        assert!(lines.len() <= 20);
    }
}
