use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as RouteLine};
use ratatui::widgets::{Block, Paragraph};

use itinera_domain::{GeoPoint, Itinerary};

use crate::theme::Theme;

/// Smallest span drawn, in degrees, so a single stop still gets a viewport.
const MIN_SPAN_DEG: f64 = 0.01;
const PADDING_RATIO: f64 = 0.1;

pub struct MapView;

impl MapView {
    pub fn render(frame: &mut Frame, area: Rect, itinerary: &Itinerary, block: Option<Block<'static>>) {
        let Some((x_bounds, y_bounds)) = Self::viewport_bounds(itinerary) else {
            let mut empty = Paragraph::new("No located stops")
                .alignment(Alignment::Center)
                .style(Style::default().bg(Theme::MAP_BG).fg(Theme::TEXT_SECONDARY));
            if let Some(block) = block {
                empty = empty.block(block);
            }
            frame.render_widget(empty, area);
            return;
        };

        let markers: Vec<(String, GeoPoint)> = itinerary
            .located_stops()
            .map(|(n, stop, point)| (format!("{}{}", stop.category.symbol(), n), point))
            .collect();

        let canvas = Canvas::default()
            .background_color(Theme::MAP_BG)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                for pair in markers.windows(2) {
                    let (from, to) = (pair[0].1, pair[1].1);
                    ctx.draw(&RouteLine::new(
                        from.lon,
                        from.lat,
                        to.lon,
                        to.lat,
                        Theme::MAP_ROUTE,
                    ));
                }
                ctx.layer();
                for (label, point) in &markers {
                    ctx.print(
                        point.lon,
                        point.lat,
                        Span::styled(label.clone(), Style::default().fg(Theme::MAP_MARKER)),
                    );
                }
            });

        match block {
            Some(block) => frame.render_widget(canvas.block(block), area),
            None => frame.render_widget(canvas, area),
        }
    }

    /// Longitude and latitude ranges that frame every located stop with a
    /// margin.
    pub fn viewport_bounds(itinerary: &Itinerary) -> Option<([f64; 2], [f64; 2])> {
        let (sw, ne) = itinerary.bounds()?;
        Some((
            Self::padded(sw.lon, ne.lon),
            Self::padded(sw.lat, ne.lat),
        ))
    }

    fn padded(min: f64, max: f64) -> [f64; 2] {
        let span = (max - min).max(MIN_SPAN_DEG);
        let center = (min + max) / 2.0;
        let half = span * (0.5 + PADDING_RATIO);
        [center - half, center + half]
    }
}
