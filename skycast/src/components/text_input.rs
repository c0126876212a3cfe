//! Single-line text input with cursor.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::events::EventKind;

pub struct TextInputProps<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Action constructor for edits.
    pub on_change: fn(String) -> Action,
}

/// Handles typing, backspace, delete and cursor movement; emits
/// `on_change` for every edit. Enter and Esc are left to the caller.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position as a byte index into the value.
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value is owned by state and can change under us (selection
    /// rewrite); keep the cursor in range before every use.
    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    /// Put the cursor at the end of the value (after a rewrite).
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    fn move_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut pos = self.cursor - 1;
            while pos > 0 && !value.is_char_boundary(pos) {
                pos -= 1;
            }
            self.cursor = pos;
        }
    }

    fn move_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut pos = self.cursor + 1;
            while pos < value.len() && !value.is_char_boundary(pos) {
                pos += 1;
            }
            self.cursor = pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let char_start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(new_value)
    }
}

impl Component for TextInput {
    type Props<'a> = TextInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self.delete_before(props.value).map(props.on_change),
            KeyCode::Delete => self.delete_at(props.value).map(props.on_change),
            KeyCode::Left => {
                self.move_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };
        frame.render_widget(Paragraph::new(text).style(style), area);

        if props.is_focused {
            let cursor_cols = props.value[..self.cursor].chars().count() as u16;
            let x = area.x + cursor_cols.min(area.width.saturating_sub(1));
            frame.set_cursor_position((x, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{char_key, ctrl_key, key_code};

    fn props(value: &str) -> TextInputProps<'_> {
        TextInputProps {
            value,
            placeholder: "Enter city name...",
            is_focused: true,
            on_change: Action::SearchQueryEdited,
        }
    }

    fn actions(input: &mut TextInput, event: EventKind, value: &str) -> Vec<Action> {
        input.handle_event(&event, props(value)).into_iter().collect()
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::new();
        input.move_to_end("Pari");

        let got = actions(&mut input, char_key('s'), "Pari");
        assert_eq!(got, vec![Action::SearchQueryEdited("Paris".into())]);
    }

    #[test]
    fn backspace_removes_a_full_character() {
        let mut input = TextInput::new();
        input.move_to_end("Köln");

        let got = actions(&mut input, key_code(KeyCode::Backspace), "Köln");
        assert_eq!(got, vec![Action::SearchQueryEdited("Köl".into())]);
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut input = TextInput::new();
        let got = actions(&mut input, key_code(KeyCode::Backspace), "Paris");
        assert!(got.is_empty());
    }

    #[test]
    fn ctrl_u_clears_the_line() {
        let mut input = TextInput::new();
        input.move_to_end("Paris");

        let got = actions(&mut input, ctrl_key('u'), "Paris");
        assert_eq!(got, vec![Action::SearchQueryEdited(String::new())]);
    }

    #[test]
    fn unfocused_ignores_events() {
        let mut input = TextInput::new();
        let p = TextInputProps {
            is_focused: false,
            ..props("Paris")
        };
        let got: Vec<Action> = input.handle_event(&char_key('x'), p).into_iter().collect();
        assert!(got.is_empty());
    }

    #[test]
    fn cursor_clamps_after_external_rewrite() {
        let mut input = TextInput::new();
        input.move_to_end("a much longer query text");

        // State rewrote the value to something shorter.
        let got = actions(&mut input, char_key('!'), "Paris");
        assert_eq!(got, vec![Action::SearchQueryEdited("Paris!".into())]);
    }
}
