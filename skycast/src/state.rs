//! Application state: the single source of truth the UI renders from.
//!
//! Only the reducer mutates this; components receive `&AppState` through
//! props.

use skycast_core::{Coordinate, PlaceCandidate, WeatherReading};

/// Delay between a keystroke and the geocoding fetch it schedules.
pub const SUGGEST_DEBOUNCE_MS: u64 = 300;

/// Spinner animation period.
pub const LOADING_TICK_MS: u64 = 120;

/// Map center before any fix or selection exists.
pub const FALLBACK_CENTER: Coordinate = Coordinate {
    latitude: 20.0,
    longitude: 77.0,
};

/// Where the city-search lifecycle currently stands.
///
/// One explicit value instead of the original's scattered flags; every
/// transition is owned by the reducer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query.
    #[default]
    Idle,
    /// Query non-empty, nothing confirmed yet.
    Typing,
    /// Dropdown populated.
    Suggesting,
    /// A candidate was picked; dropdown closed.
    Selected,
    /// City weather fetched and on screen.
    WeatherLoaded,
    /// Submit failed, or submit was invoked with no selection.
    SelectionError,
}

/// Current-location pane: one fix, one reading, no retry.
#[derive(Clone, Debug, Default)]
pub struct LivePane {
    pub coord: Option<Coordinate>,
    pub weather: Option<WeatherReading>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Everything belonging to the city-search flow.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Text in the search input.
    pub query: String,
    pub phase: SearchPhase,
    /// Suggestion dropdown contents, in geocoder order.
    pub suggestions: Vec<PlaceCandidate>,
    /// Highlighted dropdown row.
    pub highlighted: usize,
    /// The confirmed candidate, if any.
    pub selected: Option<PlaceCandidate>,
    /// Message under the input ("City not found.", ...).
    pub error: Option<String>,
    /// One-shot guard armed by a selection: the next query-change cycle
    /// neither clears the selection nor schedules a fetch.
    pub suppress_next: bool,
    /// Sequence number of the latest scheduled suggestion fetch. Results
    /// carrying an older number are discarded.
    pub seq: u64,
    /// Map marker / center for the submitted city.
    pub city_coord: Option<Coordinate>,
    /// Weather for the submitted city. Cleared before each fetch so a
    /// failure never leaves a stale partial display.
    pub city_weather: Option<WeatherReading>,
    pub loading: bool,
}

impl SearchState {
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

/// Top-level application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub live: LivePane,
    pub search: SearchState,
    /// Animation frame counter.
    pub tick_count: u32,
    pub terminal_size: (u16, u16),
    /// Map span exponent; higher is closer.
    pub zoom: u8,
}

impl AppState {
    pub fn new(zoom: u8) -> Self {
        Self {
            live: LivePane::default(),
            search: SearchState::default(),
            tick_count: 0,
            terminal_size: (80, 24),
            zoom,
        }
    }

    /// The location the map should center on: the submitted city wins,
    /// then the position fix, then a fixed fallback.
    pub fn map_center(&self) -> Coordinate {
        self.search
            .city_coord
            .or(self.live.coord)
            .unwrap_or(FALLBACK_CENTER)
    }

    pub fn is_loading(&self) -> bool {
        self.live.loading || self.search.loading
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(5)
    }
}
