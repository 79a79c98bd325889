use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line text field with a label and a focus-aware border.
pub struct InputField {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub focused: bool,
}

impl InputField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            placeholder: String::new(),
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.value.clone(),
                Style::default().fg(Color::White),
            )];
            if self.focused {
                spans.push(Span::styled(
                    "▏",
                    Style::default().fg(Color::Yellow),
                ));
            }
            Line::from(spans)
        };

        let field = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.label))
                .border_style(border_style),
        );
        f.render_widget(field, area);
    }
}
