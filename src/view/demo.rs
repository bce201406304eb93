//! Sample application content shown underneath the console.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Key hints rendered by [`DemoContent`].
const KEY_HINTS: [&str; 6] = [
    "i  add an info message",
    "t  add a trace message",
    "d  add a debug message",
    "space  open/close console (or click the handle)",
    "+/-  resize (or drag the bar)    s  timestamps",
    "PgUp/PgDn  scroll    q  quit",
];

/// Stand-in for the component being previewed.
#[derive(Debug, Clone, Copy)]
pub struct DemoContent {
    counter: u64,
}

impl DemoContent {
    /// Demo content reporting `counter` messages sent.
    pub fn new(counter: u64) -> Self {
        Self { counter }
    }
}

impl Widget for DemoContent {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::styled("Hi Logger!", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("messages sent: {}", self.counter)),
            Line::default(),
        ];
        lines.extend(KEY_HINTS.iter().map(|hint| Line::from(*hint)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
