//! Test helpers: synthetic events and a render harness.
//!
//! Kept in the library (not `#[cfg(test)]`) so integration tests under
//! `tests/` can use them too.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::events::EventKind;

/// Key event for a plain character.
pub fn char_key(c: char) -> EventKind {
    key(KeyCode::Char(c), KeyModifiers::empty())
}

/// Key event for a character with Ctrl held.
pub fn ctrl_key(c: char) -> EventKind {
    key(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Key event for a non-character key (Enter, Esc, arrows...).
pub fn key_code(code: KeyCode) -> EventKind {
    key(code, KeyModifiers::empty())
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> EventKind {
    EventKind::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Left mouse button press at a terminal cell.
pub fn mouse_down(column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Renders into an in-memory terminal and dumps the buffer as plain
/// text for assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Panics on backend failure; acceptable in tests.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend");
        Self { terminal }
    }

    /// Run one draw call and return the buffer contents, one line per
    /// terminal row, trailing spaces trimmed.
    pub fn render_to_string(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(render).expect("draw");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
