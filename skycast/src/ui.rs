//! Screen composition and event-to-action mapping.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    Frame,
};

use crate::action::Action;
use crate::components::{
    CityPanel, CityPanelProps, Component, Header, HeaderProps, HelpBar, MapMarker, MapPanel,
    MapPanelProps, SearchPanel, SearchPanelProps,
};
use crate::events::EventKind;
use crate::state::AppState;

/// Owns the component tree; renders from `&AppState` and turns terminal
/// events into actions.
pub struct Ui {
    header: Header,
    search: SearchPanel,
    city: CityPanel,
    map: MapPanel,
    help: HelpBar,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            header: Header,
            search: SearchPanel::new(),
            city: CityPanel,
            map: MapPanel,
            help: HelpBar,
        }
    }
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

        self.header.render(
            frame,
            rows[0],
            HeaderProps {
                live: &state.live,
                tick_count: state.tick_count,
            },
        );

        let columns =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(rows[1]);

        // Search panel grows with the dropdown; the city panel takes the rest.
        let dropdown_height = state.search.suggestions.len().min(10) as u16;
        let search_height = 4 + dropdown_height;
        let left = Layout::vertical([Constraint::Length(search_height), Constraint::Min(6)])
            .split(columns[0]);

        self.search.render(
            frame,
            left[0],
            SearchPanelProps {
                search: &state.search,
                is_focused: true,
            },
        );
        self.city.render(
            frame,
            left[1],
            CityPanelProps {
                search: &state.search,
                tick_count: state.tick_count,
            },
        );

        let markers = Self::markers(state);
        self.map.render(
            frame,
            columns[1],
            MapPanelProps {
                center: state.map_center(),
                zoom: state.zoom,
                markers: &markers,
            },
        );

        self.help.render(frame, rows[2], ());
    }

    fn markers(state: &AppState) -> Vec<MapMarker> {
        let mut markers = Vec::with_capacity(2);
        if let Some(coord) = state.live.coord {
            markers.push(MapMarker {
                coord,
                label: "Your location".into(),
                color: Color::Green,
            });
        }
        if let Some(coord) = state.search.city_coord {
            let label = state
                .search
                .selected
                .as_ref()
                .map(|p| p.display_name())
                .unwrap_or_else(|| "Selected city".into());
            markers.push(MapMarker {
                coord,
                label,
                color: Color::Yellow,
            });
        }
        markers
    }

    /// Turn a terminal event into actions against the current state.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        match event {
            EventKind::Resize(width, height) => {
                vec![Action::UiTerminalResize(*width, *height)]
            }

            EventKind::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
                {
                    return vec![Action::Quit];
                }
                if key.code == KeyCode::Esc {
                    // Esc closes the dropdown first; with nothing open it quits.
                    if state.search.has_suggestions() || state.search.error.is_some() {
                        return vec![Action::SearchDismiss];
                    }
                    return vec![Action::Quit];
                }
                self.search
                    .handle_event(
                        event,
                        SearchPanelProps {
                            search: &state.search,
                            is_focused: true,
                        },
                    )
                    .into_iter()
                    .collect()
            }

            EventKind::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return vec![];
                }
                let count = state.search.suggestions.len();
                if let Some(index) =
                    self.search
                        .suggestion_row_at(mouse.column, mouse.row, count)
                {
                    self.search.snap_cursor_to_end();
                    return vec![Action::SuggestPick(index)];
                }
                if !self.search.contains(mouse.column, mouse.row) {
                    // Click outside the search control closes the dropdown.
                    return vec![Action::SearchDismiss];
                }
                vec![]
            }
        }
    }
}
