//! URL entry form widget
//!
//! Input box with placeholder, a submit control that reads as disabled
//! while the input is blank, and an error banner from the last failed
//! submission.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const PLACEHOLDER: &str = "Enter your URL here...";
pub const SUBMIT_LABEL: &str = "[ Shorten ]";

/// URL entry form with submit control and error banner
pub struct UrlForm<'a> {
    url_input: &'a str,
    error: Option<&'a str>,
    active: bool,
}

impl<'a> UrlForm<'a> {
    pub fn new(url_input: &'a str) -> Self {
        Self {
            url_input,
            error: None,
            active: true,
        }
    }

    /// Error banner text from the last failed submission
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Inactive forms render dimmed with no cursor (request in flight)
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn can_submit(&self) -> bool {
        self.active && !self.url_input.trim().is_empty()
    }
}

impl Widget for UrlForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // input box
                Constraint::Length(1), // spacing
                Constraint::Length(1), // submit control
                Constraint::Length(1), // spacing
                Constraint::Length(1), // error banner
            ])
            .split(area);

        self.render_input_box(rows[0], buf);
        self.render_submit_control(rows[2], buf);

        if let Some(error) = self.error {
            Paragraph::new(Line::styled(error, styles::error()))
                .alignment(Alignment::Center)
                .render(rows[4], buf);
        }
    }
}

impl UrlForm<'_> {
    fn render_input_box(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.active);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if self.url_input.is_empty() {
            let mut spans = vec![];
            if self.active {
                spans.push(Span::styled("█", styles::accent()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
            Line::from(spans)
        } else {
            // Keep the end of long input visible; the cursor sits after it
            let reserve = if self.active { 1 } else { 0 };
            let max = (inner.width as usize).saturating_sub(reserve + 1);
            let char_count = self.url_input.chars().count();
            let visible: String = if char_count > max {
                self.url_input.chars().skip(char_count - max).collect()
            } else {
                self.url_input.to_string()
            };

            let mut spans = vec![Span::styled(visible, styles::text_primary())];
            if self.active {
                spans.push(Span::styled("█", styles::accent()));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(inner, buf);
    }

    fn render_submit_control(&self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.can_submit() {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };

        let mut spans = vec![Span::styled(SUBMIT_LABEL, label_style)];
        if self.can_submit() {
            spans.push(Span::styled("  Enter", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render_form(form: UrlForm) -> String {
        let mut term = TestTerminal::with_size(60, 8);
        term.render_widget(form, term.area());
        term.content()
    }

    #[test]
    fn test_empty_form_shows_placeholder() {
        let content = render_form(UrlForm::new(""));

        assert!(content.contains("Enter your URL here..."));
        assert!(content.contains("[ Shorten ]"));
    }

    #[test]
    fn test_typed_input_replaces_placeholder() {
        let content = render_form(UrlForm::new("https://example.com"));

        assert!(content.contains("https://example.com"));
        assert!(!content.contains("Enter your URL here..."));
    }

    #[test]
    fn test_active_form_shows_cursor() {
        let content = render_form(UrlForm::new("https://e"));
        assert!(content.contains('█'));

        let content = render_form(UrlForm::new("https://e").active(false));
        assert!(!content.contains('█'));
    }

    #[test]
    fn test_long_input_keeps_tail_visible() {
        let long = format!("https://example.com/{}", "a".repeat(100));
        let content = render_form(UrlForm::new(&long));

        assert!(content.contains("aaaa"));
        assert!(!content.contains("https://"));
    }

    #[test]
    fn test_error_banner_rendered() {
        let content = render_form(UrlForm::new("not a url").error(Some("Invalid URL format")));

        assert!(content.contains("Invalid URL format"));
    }

    #[test]
    fn test_no_error_banner_by_default() {
        let content = render_form(UrlForm::new("https://example.com"));

        assert!(!content.contains("Invalid"));
    }
}
