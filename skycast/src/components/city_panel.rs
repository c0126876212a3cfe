//! Selected-city weather panel.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::header::SPINNERS;
use super::Component;
use crate::state::SearchState;

pub struct CityPanelProps<'a> {
    pub search: &'a SearchState,
    pub tick_count: u32,
}

pub struct CityPanel;

enum CityView<'a> {
    Loading,
    Ready {
        name: String,
        weather: &'a skycast_core::WeatherReading,
    },
    Empty,
}

impl<'a> CityView<'a> {
    fn from_state(search: &'a SearchState) -> Self {
        if search.loading {
            return CityView::Loading;
        }
        match (search.selected.as_ref(), search.city_weather.as_ref()) {
            (Some(place), Some(weather)) => CityView::Ready {
                name: place.display_name(),
                weather,
            },
            _ => CityView::Empty,
        }
    }
}

impl Component for CityPanel {
    type Props<'a> = CityPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" City Weather ")
            .title_style(Style::default().bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = match CityView::from_state(props.search) {
            CityView::Loading => {
                let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
                let dots = ".".repeat((props.tick_count as usize / 3) % 4);
                vec![Line::styled(
                    format!("{} Fetching weather{:<3}", spinner, dots),
                    Style::default().fg(Color::Gray),
                )
                .centered()]
            }
            CityView::Ready { name, weather } => {
                let glyph_line = match weather.glyph() {
                    Some(glyph) => format!("{} {}", glyph, weather.description()),
                    None => weather.description().to_string(),
                };
                vec![
                    Line::styled(name, Style::default().bold()).centered(),
                    Line::raw("").centered(),
                    Line::styled(glyph_line, Style::default().fg(Color::Gray)).centered(),
                    Line::styled(
                        format!("{}°C", weather.temperature_c),
                        Style::default().fg(temp_color(weather.temperature_c)).bold(),
                    )
                    .centered(),
                    Line::styled(
                        format!("Wind: {} km/h", weather.wind_speed_kmh),
                        Style::default().fg(Color::Gray),
                    )
                    .centered(),
                ]
            }
            CityView::Empty => vec![Line::styled(
                "Search for a city to view weather",
                Style::default().fg(Color::DarkGray),
            )
            .centered()],
        };

        let chunks = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .split(inner);
        frame.render_widget(Paragraph::new(lines), chunks[0]);
    }
}

fn temp_color(celsius: f32) -> Color {
    match celsius as i32 {
        ..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        _ => Color::Rgb(255, 120, 80),
    }
}
