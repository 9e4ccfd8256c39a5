//! Title card: app name over its one-line pitch.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const TITLE: &str = "🔗 URL Shortener (Not!)";
pub const SUBTITLE: &str = "Transform your long URLs into even longer links";

/// Main header showing app title and subtitle
pub struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::styled(TITLE, styles::accent_bold()),
            Line::styled(SUBTITLE, styles::text_secondary()),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_subtitle() {
        let mut term = TestTerminal::with_size(80, 4);
        term.render_widget(Header, term.area());

        assert!(term.buffer_contains("URL Shortener (Not!)"));
        assert!(term.buffer_contains("Transform your long URLs into even longer links"));
    }
}
