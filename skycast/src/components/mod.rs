//! UI components: pure functions of props.
//!
//! Rules, in the style of the store/reducer split:
//! 1. Props carry all read-only data a component needs
//! 2. `handle_event` returns actions, never mutates external state
//! 3. `render` draws from props; `&mut self` holds only view-local
//!    state (cursor position, scroll offset, hit-test areas)

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::events::EventKind;

pub mod city_panel;
pub mod header;
pub mod help_bar;
pub mod map_panel;
pub mod search_panel;
pub mod select_list;
pub mod text_input;

pub use city_panel::{CityPanel, CityPanelProps};
pub use header::{Header, HeaderProps};
pub use help_bar::HelpBar;
pub use map_panel::{MapMarker, MapPanel, MapPanelProps};
pub use search_panel::{SearchPanel, SearchPanelProps};
pub use select_list::{SelectList, SelectListProps};
pub use text_input::{TextInput, TextInputProps};

/// A UI element that renders from props and emits actions.
pub trait Component {
    /// Read-only data required to render.
    type Props<'a>;

    /// Handle an event and return actions to dispatch. Render-only
    /// components keep the default.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    /// Draw the component.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
