//! Footer widget with key hints and the obligatory tagline.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use elong_app::UiMode;

use crate::theme::styles;

pub const TAGLINE: &str = "Built for the love of the game";

/// One-line footer: key hints on the left, tagline on the right
pub struct Footer {
    ui_mode: UiMode,
}

impl Footer {
    pub fn new(ui_mode: UiMode) -> Self {
        Self { ui_mode }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.ui_mode {
            UiMode::Form => vec![("Enter", "Shorten"), ("Esc", "Quit")],
            UiMode::Loading => vec![("Esc", "Quit")],
            UiMode::Success => vec![("c", "Copy"), ("n", "New"), ("q", "Quit")],
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(TAGLINE.len() as u16 + 2),
            ])
            .split(area);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}"), styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(cols[0], buf);

        Paragraph::new(Line::styled(TAGLINE, styles::text_muted()))
            .alignment(Alignment::Right)
            .render(cols[1], buf);
    }
}
