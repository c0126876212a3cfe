//! Top bar: app title plus live weather for the current position.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::state::LivePane;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct HeaderProps<'a> {
    pub live: &'a LivePane,
    pub tick_count: u32,
}

pub struct Header;

impl Header {
    pub const HEIGHT: u16 = 1;

    fn status_spans(props: &HeaderProps<'_>) -> Vec<Span<'static>> {
        if let Some(error) = props.live.error.as_deref() {
            return vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )];
        }

        if props.live.loading {
            let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
            return vec![
                Span::styled(spinner.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled(" locating", Style::default().fg(Color::DarkGray)),
            ];
        }

        let Some(weather) = props.live.weather.as_ref() else {
            return vec![];
        };

        let mut spans = vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled("Live  ", Style::default().fg(Color::Green).bold()),
        ];
        if let Some(glyph) = weather.glyph() {
            spans.push(Span::raw(format!("{} ", glyph)));
        }
        spans.push(Span::styled(
            format!("{}  ", weather.description()),
            Style::default().bold(),
        ));
        spans.push(Span::styled(
            format!("{}°C  ", weather.temperature_c),
            Style::default().bold(),
        ));
        spans.push(Span::styled(
            format!("Wind: {} km/h", weather.wind_speed_kmh),
            Style::default().fg(Color::Gray),
        ));
        spans
    }
}

impl Component for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks =
            Layout::horizontal([Constraint::Length(12), Constraint::Min(0)]).split(area);

        let title = Span::styled(" Skycast ☁", Style::default().fg(Color::Cyan).bold());
        frame.render_widget(Paragraph::new(Line::from(title)), chunks[0]);

        let status = Self::status_spans(&props);
        if !status.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(status).right_aligned()),
                chunks[1],
            );
        }
    }
}
