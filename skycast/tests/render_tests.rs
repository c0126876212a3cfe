//! Full-screen render tests against the in-memory terminal.

use skycast::action::Action;
use skycast::state::AppState;
use skycast::testing::{mouse_down, RenderHarness};
use skycast::ui::Ui;
use skycast_core::{Coordinate, PlaceCandidate, WeatherReading};

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

fn loaded_state() -> AppState {
    let mut state = AppState::default();
    state.live.coord = Some(Coordinate {
        latitude: 50.4501,
        longitude: 30.5234,
    });
    state.live.weather = Some(WeatherReading {
        temperature_c: 21.3,
        wind_speed_kmh: 11.0,
        code: 0,
    });
    state
}

#[test]
fn initial_screen_prompts_for_a_search() {
    let mut harness = RenderHarness::new(100, 30);
    let mut ui = Ui::new();
    let state = AppState::default();

    let output = harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    assert!(output.contains("Skycast"));
    assert!(output.contains("Enter city name..."));
    assert!(output.contains("Search for a city to view weather"));
    assert!(output.contains("Map"));
}

#[test]
fn live_weather_appears_in_the_header() {
    let mut harness = RenderHarness::new(100, 30);
    let mut ui = Ui::new();
    let state = loaded_state();

    let output = harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    assert!(output.contains("Live"));
    assert!(output.contains("Clear sky"));
    assert!(output.contains("21.3°C"));
    assert!(output.contains("Your location"));
}

#[test]
fn dropdown_rows_show_the_full_labels() {
    let mut harness = RenderHarness::new(110, 30);
    let mut ui = Ui::new();
    let mut state = AppState::default();
    state.search.query = "Paris".into();
    state.search.suggestions = vec![paris()];

    let output = harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    assert!(output.contains("Paris, Île-de-France, France"));
}

#[test]
fn city_weather_panel_shows_the_selection() {
    let mut harness = RenderHarness::new(100, 30);
    let mut ui = Ui::new();
    let mut state = loaded_state();
    state.search.selected = Some(paris());
    state.search.city_coord = Some(paris().coordinate());
    state.search.city_weather = Some(WeatherReading {
        temperature_c: 18.0,
        wind_speed_kmh: 7.5,
        code: 61,
    });

    let output = harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    assert!(output.contains("Paris, Île-de-France, France"));
    assert!(output.contains("Rain"));
    assert!(output.contains("18°C"));
    assert!(output.contains("Wind: 7.5 km/h"));
}

#[test]
fn clicking_a_suggestion_row_picks_it() {
    let mut harness = RenderHarness::new(100, 30);
    let mut ui = Ui::new();
    let mut state = AppState::default();
    state.search.query = "Paris".into();
    state.search.suggestions = vec![paris(), paris()];

    // Render once so the UI records its hit-test areas. The dropdown
    // starts right under the input row inside the search panel border.
    harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    let actions = ui.map_event(&mouse_down(5, 3), &state);
    assert_eq!(actions, vec![Action::SuggestPick(0)]);
}

#[test]
fn clicking_outside_the_search_panel_dismisses() {
    let mut harness = RenderHarness::new(100, 30);
    let mut ui = Ui::new();
    let mut state = AppState::default();
    state.search.query = "Paris".into();
    state.search.suggestions = vec![paris()];

    harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    // Bottom-left corner is well outside the search panel.
    let actions = ui.map_event(&mouse_down(2, 28), &state);
    assert_eq!(actions, vec![Action::SearchDismiss]);
}

#[test]
fn clicking_inside_the_panel_but_not_a_row_does_nothing() {
    let mut harness = RenderHarness::new(100, 30);
    let mut ui = Ui::new();
    let mut state = AppState::default();
    state.search.query = "Paris".into();
    state.search.suggestions = vec![paris()];

    harness.render_to_string(|frame| ui.render(frame, frame.area(), &state));

    // The input row, inside the panel.
    let actions = ui.map_event(&mouse_down(5, 2), &state);
    assert!(actions.is_empty());
}
