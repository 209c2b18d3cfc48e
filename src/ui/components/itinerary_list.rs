use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use itinera_domain::{Itinerary, ItineraryDay, Stop};

use super::text_utils::truncate_to_width;
use crate::theme::Theme;

/// Width of the "HH:MM " time column.
const TIME_COL: usize = 6;

pub struct ItineraryList;

impl ItineraryList {
    pub fn render(frame: &mut Frame, area: Rect, itinerary: &Itinerary, block: Option<Block<'static>>) {
        let inner_width = match &block {
            Some(block) => block.inner(area).width,
            None => area.width,
        };
        let mut paragraph = Paragraph::new(Self::lines(itinerary, usize::from(inner_width)));
        if let Some(block) = block {
            paragraph = paragraph.block(block);
        }
        frame.render_widget(paragraph, area);
    }

    pub fn lines(itinerary: &Itinerary, width: usize) -> Vec<Line<'static>> {
        if itinerary.days.is_empty() {
            return vec![Line::from(Span::styled(
                "No days planned",
                Style::default().fg(Theme::TEXT_SECONDARY),
            ))];
        }

        let mut lines = Vec::with_capacity(itinerary.stop_count() + itinerary.days.len() * 2);
        let mut number = 0;
        for (i, day) in itinerary.days.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Self::day_line(day, width));
            for stop in &day.stops {
                number += 1;
                lines.push(Self::stop_line(number, stop, width));
                if let Some(note) = &stop.note {
                    lines.push(Self::note_line(note, width));
                }
            }
        }
        lines
    }

    fn day_line(day: &ItineraryDay, width: usize) -> Line<'static> {
        let text = match &day.date {
            Some(date) => format!("{} · {}", day.label, date),
            None => day.label.clone(),
        };
        Line::from(Span::styled(
            truncate_to_width(&text, width),
            Style::default()
                .fg(Theme::TEXT_DAY)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn stop_line(number: usize, stop: &Stop, width: usize) -> Line<'static> {
        let time = stop.time.as_deref().unwrap_or("--:--");
        let marker = format!("{}{} ", stop.category.symbol(), number);
        let used = TIME_COL + marker.chars().count();
        let name = truncate_to_width(&stop.name, width.saturating_sub(used));

        Line::from(vec![
            Span::styled(format!("{:<5} ", time), Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled(marker, Style::default().fg(Theme::MAP_MARKER)),
            Span::raw(name),
        ])
    }

    fn note_line(note: &str, width: usize) -> Line<'static> {
        let indent = " ".repeat(TIME_COL);
        Line::from(Span::styled(
            format!("{}{}", indent, truncate_to_width(note, width.saturating_sub(TIME_COL))),
            Style::default()
                .fg(Theme::TEXT_SECONDARY)
                .add_modifier(Modifier::ITALIC),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinera_domain::StopCategory;

    fn stop(name: &str, time: Option<&str>, note: Option<&str>) -> Stop {
        Stop {
            name: name.to_string(),
            time: time.map(str::to_string),
            category: StopCategory::Food,
            location: None,
            note: note.map(str::to_string),
        }
    }

    fn itinerary() -> Itinerary {
        Itinerary {
            title: "Porto".to_string(),
            destination: None,
            days: vec![
                ItineraryDay {
                    label: "Day 1".to_string(),
                    date: Some("Sat 4 May".to_string()),
                    stops: vec![stop("Bolhão Market", Some("09:30"), Some("Cash only"))],
                },
                ItineraryDay {
                    label: "Day 2".to_string(),
                    date: None,
                    stops: vec![stop("Francesinha at Café Santiago", None, None)],
                },
            ],
        }
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn lists_days_and_numbers_stops_across_days() {
        let lines = ItineraryList::lines(&itinerary(), 60);

        assert_eq!(
            text(&lines),
            vec![
                "Day 1 · Sat 4 May",
                "09:30 ●1 Bolhão Market",
                "      Cash only",
                "",
                "Day 2",
                "--:-- ●2 Francesinha at Café Santiago",
            ]
        );
    }

    #[test]
    fn long_names_are_truncated_to_width() {
        let lines = ItineraryList::lines(&itinerary(), 20);

        assert_eq!(lines[5].to_string(), "--:-- ●2 Francesinh…");
    }

    #[test]
    fn empty_itinerary_shows_placeholder() {
        let lines = ItineraryList::lines(&Itinerary::default(), 40);

        assert_eq!(text(&lines), vec!["No days planned"]);
    }
}
