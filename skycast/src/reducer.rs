//! The reducer: one pure function owning every state transition.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::{AppState, SearchPhase};

pub const NO_SELECTION_MESSAGE: &str = "Please select a city first.";

/// Apply `action` to `state`, returning the change indicator and any
/// effects the runtime should execute.
pub fn reduce(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Current-location flow =====
        Action::PositionFetch => {
            state.live.loading = true;
            state.live.error = None;
            DispatchResult::changed_with(Effect::FetchPosition)
        }

        Action::PositionDidFix(coord) => {
            state.live.coord = Some(coord);
            DispatchResult::changed_with(Effect::FetchLiveWeather { coord })
        }

        Action::PositionDidError(message) => {
            // Non-retryable: the current-location flow ends here.
            state.live.loading = false;
            state.live.error = Some(message);
            DispatchResult::changed()
        }

        Action::LiveWeatherDidLoad(reading) => {
            state.live.weather = Some(reading);
            state.live.loading = false;
            state.live.error = None;
            DispatchResult::changed()
        }

        Action::LiveWeatherDidError(message) => {
            state.live.loading = false;
            state.live.error = Some(message);
            DispatchResult::changed()
        }

        // ===== City-search flow =====
        Action::SearchQueryEdited(text) => edit_query(state, text),

        Action::SuggestDidLoad { seq, places } => {
            if seq != state.search.seq {
                // A later keystroke superseded this fetch.
                return DispatchResult::unchanged();
            }
            if places.is_empty() {
                state.search.suggestions.clear();
                state.search.error = Some("City not found.".into());
                return DispatchResult::changed();
            }
            state.search.suggestions = places;
            state.search.highlighted = 0;
            state.search.error = None;
            state.search.phase = SearchPhase::Suggesting;
            DispatchResult::changed()
        }

        Action::SuggestDidError { seq, message } => {
            if seq != state.search.seq {
                return DispatchResult::unchanged();
            }
            state.search.suggestions.clear();
            state.search.error = Some(message);
            if state.search.phase == SearchPhase::Suggesting {
                state.search.phase = SearchPhase::Typing;
            }
            DispatchResult::changed()
        }

        Action::SuggestHighlight(index) => {
            if index < state.search.suggestions.len() && index != state.search.highlighted {
                state.search.highlighted = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::SuggestPick(index) => {
            let Some(place) = state.search.suggestions.get(index).cloned() else {
                return DispatchResult::unchanged();
            };
            let display = place.display_name();
            state.search.selected = Some(place);
            state.search.suggestions.clear();
            state.search.error = None;
            state.search.phase = SearchPhase::Selected;
            // Arm the one-shot suppression, then rewrite the input through
            // the normal edit path, which consumes it: the rewrite must not
            // clear the selection or reopen the dropdown.
            state.search.suppress_next = true;
            let mut result = edit_query(state, display);
            result.changed = true;
            result
        }

        Action::SearchDismiss => {
            if !state.search.has_suggestions() && state.search.error.is_none() {
                return DispatchResult::unchanged();
            }
            state.search.suggestions.clear();
            state.search.error = None;
            if state.search.phase == SearchPhase::Suggesting {
                state.search.phase = if state.search.query.trim().is_empty() {
                    SearchPhase::Idle
                } else {
                    SearchPhase::Typing
                };
            }
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            let Some(place) = state.search.selected.clone() else {
                state.search.error = Some(NO_SELECTION_MESSAGE.into());
                state.search.phase = SearchPhase::SelectionError;
                return DispatchResult::changed();
            };
            let coord = place.coordinate();
            state.search.error = None;
            // Clear before the fetch: a failure must not leave the old
            // city's reading on screen.
            state.search.city_weather = None;
            state.search.city_coord = Some(coord);
            state.search.loading = true;
            DispatchResult::changed_with(Effect::FetchCityWeather { coord })
        }

        Action::CityWeatherDidLoad(reading) => {
            state.search.city_weather = Some(reading);
            state.search.loading = false;
            state.search.error = None;
            state.search.phase = SearchPhase::WeatherLoaded;
            DispatchResult::changed()
        }

        Action::CityWeatherDidError(message) => {
            state.search.loading = false;
            state.search.error = Some(message);
            state.search.phase = SearchPhase::SelectionError;
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner needs these frames.
            if state.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Handled by the runtime loop.
            DispatchResult::unchanged()
        }
    }
}

/// Shared path for every change to the query text, whether typed by the
/// user or written back by a selection.
fn edit_query(state: &mut AppState, text: String) -> DispatchResult {
    let search = &mut state.search;
    search.query = text;

    if search.suppress_next {
        // Suppression window: one cycle, no selection reset, no fetch.
        // Bumping the sequence orphans any result still in flight for the
        // pre-selection query; the cancel aborts the task itself.
        search.suppress_next = false;
        search.seq = search.seq.wrapping_add(1);
        return DispatchResult::changed_with(Effect::CancelSuggest);
    }

    search.selected = None;
    search.error = None;

    if search.query.trim().is_empty() {
        search.suggestions.clear();
        search.phase = SearchPhase::Idle;
        // Invalidate anything still in flight for the old query.
        search.seq = search.seq.wrapping_add(1);
        return DispatchResult::changed_with(Effect::CancelSuggest);
    }

    search.phase = SearchPhase::Typing;
    search.seq = search.seq.wrapping_add(1);
    DispatchResult::changed_with(Effect::ScheduleSuggest {
        query: search.query.trim().to_string(),
        seq: search.seq,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::{PlaceCandidate, WeatherReading};

    fn paris() -> PlaceCandidate {
        PlaceCandidate {
            name: "Paris".into(),
            admin1: Some("Île-de-France".into()),
            admin2: None,
            country: Some("France".into()),
            latitude: 48.85341,
            longitude: 2.3488,
        }
    }

    fn paris_texas() -> PlaceCandidate {
        PlaceCandidate {
            name: "Paris".into(),
            admin1: Some("Texas".into()),
            admin2: Some("Lamar".into()),
            country: Some("United States".into()),
            latitude: 33.66094,
            longitude: -95.55551,
        }
    }

    fn typed(state: &mut AppState, text: &str) -> DispatchResult {
        reduce(state, Action::SearchQueryEdited(text.into()))
    }

    #[test]
    fn typing_schedules_a_debounced_fetch() {
        let mut state = AppState::default();
        let result = typed(&mut state, "Par");

        assert!(result.changed);
        assert_eq!(state.search.phase, SearchPhase::Typing);
        assert_eq!(
            result.effects,
            vec![Effect::ScheduleSuggest {
                query: "Par".into(),
                seq: 1
            }]
        );
    }

    #[test]
    fn whitespace_query_short_circuits() {
        let mut state = AppState::default();
        typed(&mut state, "Par");
        let result = typed(&mut state, "   ");

        assert_eq!(state.search.phase, SearchPhase::Idle);
        assert!(state.search.suggestions.is_empty());
        assert!(state.search.error.is_none());
        // No fetch scheduled, only the pending one cancelled.
        assert_eq!(result.effects, vec![Effect::CancelSuggest]);
    }

    #[test]
    fn each_edit_bumps_the_sequence_number() {
        let mut state = AppState::default();
        typed(&mut state, "P");
        typed(&mut state, "Pa");
        typed(&mut state, "Par");
        assert_eq!(state.search.seq, 3);
    }

    #[test]
    fn stale_suggest_results_are_discarded() {
        let mut state = AppState::default();
        typed(&mut state, "Par");
        typed(&mut state, "Pari");

        // A result for the first fetch resolves late.
        let result = reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq: 1,
                places: vec![paris()],
            },
        );

        assert!(!result.changed);
        assert!(state.search.suggestions.is_empty());
        assert_eq!(state.search.phase, SearchPhase::Typing);
    }

    #[test]
    fn current_results_populate_the_dropdown() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");

        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris(), paris_texas()],
            },
        );

        assert_eq!(state.search.phase, SearchPhase::Suggesting);
        assert_eq!(state.search.suggestions.len(), 2);
        assert_eq!(state.search.highlighted, 0);
    }

    #[test]
    fn suggest_error_clears_dropdown_and_sets_message() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris()],
            },
        );

        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidError {
                seq,
                message: "City not found.".into(),
            },
        );

        assert!(state.search.suggestions.is_empty());
        assert_eq!(state.search.error.as_deref(), Some("City not found."));
        assert_eq!(state.search.phase, SearchPhase::Typing);
    }

    #[test]
    fn pick_rewrites_query_and_consumes_its_own_suppression() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris(), paris_texas()],
            },
        );

        let result = reduce(&mut state, Action::SuggestPick(1));

        assert_eq!(state.search.query, "Paris, Texas, United States");
        assert_eq!(state.search.phase, SearchPhase::Selected);
        assert!(state.search.suggestions.is_empty());
        assert_eq!(state.search.selected, Some(paris_texas()));
        // The rewrite cycle was suppressed: no fetch, guard disarmed,
        // anything still pending for the old query cancelled.
        assert_eq!(result.effects, vec![Effect::CancelSuggest]);
        assert!(!state.search.suppress_next);
    }

    #[test]
    fn edit_after_pick_debounces_normally_and_clears_selection() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris()],
            },
        );
        reduce(&mut state, Action::SuggestPick(0));

        let result = typed(&mut state, "Paris, Île-de-France, Francex");

        assert!(state.search.selected.is_none());
        assert_eq!(state.search.phase, SearchPhase::Typing);
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::ScheduleSuggest { .. }]
        ));
    }

    #[test]
    fn submit_without_selection_never_fetches() {
        let mut state = AppState::default();
        let result = reduce(&mut state, Action::SearchSubmit);

        assert!(result.effects.is_empty());
        assert_eq!(state.search.phase, SearchPhase::SelectionError);
        assert_eq!(state.search.error.as_deref(), Some(NO_SELECTION_MESSAGE));
    }

    #[test]
    fn submit_fetches_the_selected_coordinates_and_clears_old_weather() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris(), paris_texas()],
            },
        );
        reduce(&mut state, Action::SuggestPick(1));
        // Pretend an earlier city already had weather on screen.
        state.search.city_weather = Some(WeatherReading::default());

        let result = reduce(&mut state, Action::SearchSubmit);

        let coord = paris_texas().coordinate();
        assert_eq!(result.effects, vec![Effect::FetchCityWeather { coord }]);
        assert!(state.search.city_weather.is_none());
        assert_eq!(state.search.city_coord, Some(coord));
        assert!(state.search.loading);
    }

    #[test]
    fn city_weather_failure_keeps_weather_cleared() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris()],
            },
        );
        reduce(&mut state, Action::SuggestPick(0));
        reduce(&mut state, Action::SearchSubmit);

        reduce(
            &mut state,
            Action::CityWeatherDidError("Please check your internet connection.".into()),
        );

        assert!(state.search.city_weather.is_none());
        assert_eq!(state.search.phase, SearchPhase::SelectionError);
        assert!(!state.search.loading);
    }

    #[test]
    fn city_weather_success_reaches_weather_loaded() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris()],
            },
        );
        reduce(&mut state, Action::SuggestPick(0));
        reduce(&mut state, Action::SearchSubmit);

        let reading = WeatherReading {
            temperature_c: 18.0,
            wind_speed_kmh: 12.0,
            code: 2,
        };
        reduce(&mut state, Action::CityWeatherDidLoad(reading.clone()));

        assert_eq!(state.search.phase, SearchPhase::WeatherLoaded);
        assert_eq!(state.search.city_weather, Some(reading));
    }

    #[test]
    fn dismiss_clears_dropdown_but_not_selection_or_weather() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris()],
            },
        );
        reduce(&mut state, Action::SuggestPick(0));
        reduce(&mut state, Action::SearchSubmit);
        reduce(&mut state, Action::CityWeatherDidLoad(WeatherReading::default()));

        // Reopen suggestions, then click away.
        typed(&mut state, "Lond");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris()],
            },
        );
        reduce(&mut state, Action::SearchDismiss);

        assert!(state.search.suggestions.is_empty());
        assert!(state.search.city_weather.is_some());
    }

    #[test]
    fn position_error_is_terminal_for_the_live_flow() {
        let mut state = AppState::default();
        reduce(&mut state, Action::PositionFetch);
        let result = reduce(
            &mut state,
            Action::PositionDidError("Unable to retrieve location.".into()),
        );

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert!(!state.live.loading);
        assert_eq!(
            state.live.error.as_deref(),
            Some("Unable to retrieve location.")
        );
        assert!(state.live.weather.is_none());
    }

    #[test]
    fn position_fix_triggers_live_weather_fetch() {
        let mut state = AppState::default();
        reduce(&mut state, Action::PositionFetch);
        let coord = paris().coordinate();
        let result = reduce(&mut state, Action::PositionDidFix(coord));

        assert_eq!(result.effects, vec![Effect::FetchLiveWeather { coord }]);
        assert_eq!(state.live.coord, Some(coord));
    }

    #[test]
    fn tick_only_rerenders_while_loading() {
        let mut state = AppState::default();
        assert!(!reduce(&mut state, Action::Tick).changed);

        state.live.loading = true;
        assert!(reduce(&mut state, Action::Tick).changed);
    }

    #[test]
    fn resize_is_deduplicated() {
        let mut state = AppState::default();
        assert!(reduce(&mut state, Action::UiTerminalResize(100, 40)).changed);
        assert!(!reduce(&mut state, Action::UiTerminalResize(100, 40)).changed);
    }

    #[test]
    fn highlight_is_bounds_checked() {
        let mut state = AppState::default();
        typed(&mut state, "Paris");
        let seq = state.search.seq;
        reduce(
            &mut state,
            Action::SuggestDidLoad {
                seq,
                places: vec![paris(), paris_texas()],
            },
        );

        assert!(reduce(&mut state, Action::SuggestHighlight(1)).changed);
        assert!(!reduce(&mut state, Action::SuggestHighlight(5)).changed);
        assert_eq!(state.search.highlighted, 1);
    }
}
