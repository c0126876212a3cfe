//! City search: input, suggestion dropdown, error line.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Component, SelectList, SelectListProps, TextInput, TextInputProps};
use crate::action::Action;
use crate::events::EventKind;
use crate::state::SearchState;

pub struct SearchPanelProps<'a> {
    pub search: &'a SearchState,
    pub is_focused: bool,
}

/// Routes keys between the input and the dropdown, mirrors its rendered
/// areas for mouse hit-testing.
pub struct SearchPanel {
    input: TextInput,
    list: SelectList,
    area: Rect,
    /// One-shot: jump the cursor to the end on the next render, used
    /// after a pick rewrites the input.
    snap_cursor: bool,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            area: Rect::default(),
            snap_cursor: false,
        }
    }
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a terminal cell lies inside the panel as last rendered.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let a = self.area;
        column >= a.x
            && column < a.x.saturating_add(a.width)
            && row >= a.y
            && row < a.y.saturating_add(a.height)
    }

    /// Dropdown row under a terminal cell, if any.
    pub fn suggestion_row_at(&self, column: u16, row: u16, count: usize) -> Option<usize> {
        self.list.row_at(column, row, count)
    }

    /// Arrange for the cursor to land at the end of the (rewritten)
    /// query on the next render.
    pub fn snap_cursor_to_end(&mut self) {
        self.snap_cursor = true;
    }

    fn row_labels(search: &SearchState) -> Vec<String> {
        search.suggestions.iter().map(|p| p.row_label()).collect()
    }
}

impl Component for SearchPanel {
    type Props<'a> = SearchPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let search = props.search;
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Enter => {
                if search.has_suggestions() {
                    self.snap_cursor = true;
                    return vec![Action::SuggestPick(search.highlighted)];
                }
                return vec![Action::SearchSubmit];
            }
            KeyCode::Up | KeyCode::Down => {
                if search.has_suggestions() {
                    let labels = Self::row_labels(search);
                    let list_props = SelectListProps {
                        items: &labels,
                        highlighted: search.highlighted,
                        is_focused: true,
                        on_highlight: Action::SuggestHighlight,
                        on_pick: Action::SuggestPick,
                    };
                    return self.list.handle_event(event, list_props).into_iter().collect();
                }
                return Vec::new();
            }
            _ => {}
        }

        let input_props = TextInputProps {
            value: &search.query,
            placeholder: "Enter city name...",
            is_focused: true,
            on_change: Action::SearchQueryEdited,
        };
        self.input.handle_event(event, input_props).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = area;
        let search = props.search;

        if self.snap_cursor {
            self.input.move_to_end(&search.query);
            self.snap_cursor = false;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .title(" Search Weather ")
            .title_style(Style::default().bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let dropdown_height = search.suggestions.len().min(10) as u16;
        let chunks = Layout::vertical([
            Constraint::Length(1), // input
            Constraint::Length(dropdown_height),
            Constraint::Length(1), // error line
        ])
        .split(inner);

        let input_props = TextInputProps {
            value: &search.query,
            placeholder: "Enter city name...",
            is_focused: props.is_focused,
            on_change: Action::SearchQueryEdited,
        };
        self.input.render(frame, chunks[0], input_props);

        if search.has_suggestions() {
            let labels = Self::row_labels(search);
            let list_props = SelectListProps {
                items: &labels,
                highlighted: search.highlighted,
                is_focused: props.is_focused,
                on_highlight: Action::SuggestHighlight,
                on_pick: Action::SuggestPick,
            };
            self.list.render(frame, chunks[1], list_props);
        }

        if let Some(error) = search.error.as_deref() {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    error.to_string(),
                    Style::default().fg(Color::Red).bold(),
                )),
                chunks[2],
            );
        }
    }
}
