//! Suggestion dropdown list.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::events::EventKind;

pub struct SelectListProps<'a> {
    pub items: &'a [String],
    pub highlighted: usize,
    pub is_focused: bool,
    pub on_highlight: fn(usize) -> Action,
    pub on_pick: fn(usize) -> Action,
}

/// Arrow-key navigation plus mouse hit-testing. Printable keys never
/// reach this component; they belong to the text input.
#[derive(Default)]
pub struct SelectList {
    scroll_offset: usize,
    last_area: Rect,
}

impl SelectList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, highlighted: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if highlighted < self.scroll_offset {
            self.scroll_offset = highlighted;
        } else if highlighted >= self.scroll_offset + viewport_height {
            self.scroll_offset = highlighted.saturating_sub(viewport_height - 1);
        }
    }

    /// Which row a terminal cell falls on, given the last rendered area.
    pub fn row_at(&self, column: u16, row: u16, item_count: usize) -> Option<usize> {
        let area = self.last_area;
        if item_count == 0
            || column < area.x
            || column >= area.x.saturating_add(area.width)
            || row < area.y
            || row >= area.y.saturating_add(area.height)
        {
            return None;
        }
        let index = self.scroll_offset + (row - area.y) as usize;
        (index < item_count).then_some(index)
    }
}

impl Component for SelectList {
    type Props<'a> = SelectListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };
        let last = props.items.len() - 1;

        match key.code {
            KeyCode::Down => {
                let next = (props.highlighted + 1).min(last);
                (next != props.highlighted).then(|| (props.on_highlight)(next))
            }
            KeyCode::Up => {
                let next = props.highlighted.saturating_sub(1);
                (next != props.highlighted).then(|| (props.on_highlight)(next))
            }
            KeyCode::Enter => Some((props.on_pick)(props.highlighted)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.last_area = area;
        self.ensure_visible(props.highlighted, area.height as usize);

        let items: Vec<ListItem> = props
            .items
            .iter()
            .map(|item| ListItem::new(Line::raw(item.as_str())))
            .collect();

        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let mut list_state = ListState::default().with_selected(Some(props.highlighted));
        *list_state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
