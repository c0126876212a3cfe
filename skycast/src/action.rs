//! Actions: everything that can happen to the application state.
//!
//! Naming convention: an intent action triggers async work
//! (`PositionFetch`), a `Did*` action carries its outcome back.

use skycast_core::{Coordinate, PlaceCandidate, WeatherReading};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Current-location flow =====
    /// Request the one-shot position fix (dispatched once at startup).
    PositionFetch,
    PositionDidFix(Coordinate),
    PositionDidError(String),
    LiveWeatherDidLoad(WeatherReading),
    LiveWeatherDidError(String),

    // ===== City-search flow =====
    /// The search input changed (user keystroke or selection rewrite).
    SearchQueryEdited(String),
    /// Debounced geocoding finished. `seq` identifies the fetch cycle;
    /// stale cycles are discarded by the reducer.
    SuggestDidLoad {
        seq: u64,
        places: Vec<PlaceCandidate>,
    },
    SuggestDidError {
        seq: u64,
        message: String,
    },
    /// Move the dropdown highlight.
    SuggestHighlight(usize),
    /// Confirm the suggestion at this index.
    SuggestPick(usize),
    /// Close the dropdown (Esc, click outside the search panel).
    SearchDismiss,
    /// Fetch weather for the selected city.
    SearchSubmit,
    CityWeatherDidLoad(WeatherReading),
    CityWeatherDidError(String),

    // ===== Global =====
    UiTerminalResize(u16, u16),
    /// Spinner animation tick.
    Tick,
    Quit,
}

impl Action {
    /// Stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::PositionFetch => "PositionFetch",
            Action::PositionDidFix(_) => "PositionDidFix",
            Action::PositionDidError(_) => "PositionDidError",
            Action::LiveWeatherDidLoad(_) => "LiveWeatherDidLoad",
            Action::LiveWeatherDidError(_) => "LiveWeatherDidError",
            Action::SearchQueryEdited(_) => "SearchQueryEdited",
            Action::SuggestDidLoad { .. } => "SuggestDidLoad",
            Action::SuggestDidError { .. } => "SuggestDidError",
            Action::SuggestHighlight(_) => "SuggestHighlight",
            Action::SuggestPick(_) => "SuggestPick",
            Action::SearchDismiss => "SearchDismiss",
            Action::SearchSubmit => "SearchSubmit",
            Action::CityWeatherDidLoad(_) => "CityWeatherDidLoad",
            Action::CityWeatherDidError(_) => "CityWeatherDidError",
            Action::UiTerminalResize(_, _) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise form for the action log; data-heavy variants are
    /// compressed instead of dumping full Debug output.
    pub fn summary(&self) -> String {
        match self {
            Action::SuggestDidLoad { seq, places } => {
                format!("SuggestDidLoad {{ seq: {}, places: {} }}", seq, places.len())
            }
            Action::LiveWeatherDidLoad(r) | Action::CityWeatherDidLoad(r) => {
                format!(
                    "{} {{ temp: {:.1}°C, code: {} }}",
                    self.name(),
                    r.temperature_c,
                    r.code
                )
            }
            _ => format!("{:?}", self),
        }
    }
}
