//! Test helpers for rendering into a ratatui TestBackend

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Wrapper around a TestBackend terminal with string assertions
pub(crate) struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard 80x24 terminal
    pub(crate) fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub(crate) fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    pub(crate) fn area(&self) -> Rect {
        let size = self.terminal.size().expect("terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub(crate) fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("render widget");
    }

    /// Draw a full frame, for testing `render::view`
    pub(crate) fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw frame");
    }

    pub(crate) fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// The whole buffer as one row-major string
    pub(crate) fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
