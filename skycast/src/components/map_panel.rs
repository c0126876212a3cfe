//! World map canvas with location markers.
//!
//! The map contract: a center coordinate, a zoom step, and zero or more
//! labelled markers. The view re-centers whenever the active location
//! changes; zooming is a span halving per step.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::canvas::{Canvas, Map, MapResolution},
    widgets::{Block, Borders},
    Frame,
};
use skycast_core::Coordinate;

use super::Component;

pub struct MapMarker {
    pub coord: Coordinate,
    pub label: String,
    pub color: Color,
}

pub struct MapPanelProps<'a> {
    pub center: Coordinate,
    /// Each step halves the visible span; 0 shows the whole world.
    pub zoom: u8,
    pub markers: &'a [MapMarker],
}

pub struct MapPanel;

/// Longitude/latitude window for a center and zoom, clamped to the
/// world so the canvas never asks for out-of-range bounds.
fn viewport(center: Coordinate, zoom: u8) -> ([f64; 2], [f64; 2]) {
    let lon_span = (360.0 / f64::powi(2.0, i32::from(zoom))).max(4.0);
    let lat_span = (lon_span / 2.0).min(180.0);

    let half_lon = lon_span / 2.0;
    let half_lat = lat_span / 2.0;

    let center_lon = center.longitude.clamp(-180.0 + half_lon, 180.0 - half_lon);
    let center_lat = center.latitude.clamp(-90.0 + half_lat, 90.0 - half_lat);

    (
        [center_lon - half_lon, center_lon + half_lon],
        [center_lat - half_lat, center_lat + half_lat],
    )
}

impl Component for MapPanel {
    type Props<'a> = MapPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (x_bounds, y_bounds) = viewport(props.center, props.zoom);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Map ")
                    .title_style(Style::default().bold()),
            )
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::Rgb(80, 110, 80),
                });
                ctx.layer();
                for marker in props.markers {
                    ctx.print(
                        marker.coord.longitude,
                        marker.coord.latitude,
                        ratatui::text::Line::styled(
                            format!("● {}", marker.label),
                            Style::default().fg(marker.color).bold(),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}
