//! Shared helpers for widget tests.

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// A TestBackend terminal with buffer-content assertions.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
    area: Rect,
}

impl TestTerminal {
    /// 80x24 terminal, the common case.
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        Self {
            terminal: Terminal::new(backend).expect("test terminal"),
            area: Rect::new(0, 0, width, height),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Draw a single widget over the given area.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw");
    }

    /// The whole buffer as one string (no line breaks).
    pub fn content(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
