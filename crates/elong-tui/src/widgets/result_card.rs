//! Result panel widget
//!
//! Shows the elongated URL with a copy control, the original address,
//! and the reset control.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const SUCCESS_HEADING: &str = "✅ Your elongated URL is ready!";
pub const COPY_LABEL: &str = "📋 Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";
pub const RESET_LABEL: &str = "[ Create Another elongated URL ]";

/// Result panel with the elongated URL and copy/reset controls
pub struct ResultCard<'a> {
    short_url: &'a str,
    original_url: &'a str,
    copied: bool,
}

impl<'a> ResultCard<'a> {
    pub fn new(short_url: &'a str, original_url: &'a str) -> Self {
        Self {
            short_url,
            original_url,
            copied: false,
        }
    }

    /// Show the transient copy confirmation instead of the copy control
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(3), // result box
                Constraint::Length(1), // copy control
                Constraint::Length(1), // original address
                Constraint::Length(1), // spacing
                Constraint::Length(1), // reset control
            ])
            .split(area);

        Paragraph::new(Line::styled(SUCCESS_HEADING, styles::success_bold()))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        self.render_result_box(rows[1], buf);
        self.render_copy_control(rows[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Original: ", styles::text_muted()),
            Span::styled(self.original_url, styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(rows[3], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(RESET_LABEL, styles::accent_bold()),
            Span::styled("  n", styles::keybinding()),
        ]))
        .alignment(Alignment::Center)
        .render(rows[5], buf);
    }
}

impl ResultCard<'_> {
    fn render_result_box(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Line::styled(self.short_url, styles::accent_bold()))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_copy_control(&self, area: Rect, buf: &mut Buffer) {
        let line = if self.copied {
            Line::styled(COPIED_LABEL, styles::success_bold())
        } else {
            Line::from(vec![
                Span::styled(COPY_LABEL, styles::accent()),
                Span::styled("  c", styles::keybinding()),
            ])
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
