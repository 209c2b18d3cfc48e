use itinera_app::ports::{ItinerarySource, ItinerarySourceError};
use itinera_domain::{GeoPoint, Itinerary, ItineraryDay, Stop, StopCategory};

/// Bundled sample trip, used when no itinerary file is given.
#[derive(Debug, Default)]
pub struct BuiltinItinerarySource;

impl ItinerarySource for BuiltinItinerarySource {
    fn load(&self) -> Result<Itinerary, ItinerarySourceError> {
        Ok(sample_trip())
    }
}

fn stop(
    name: &str,
    time: &str,
    category: StopCategory,
    (lat, lon): (f64, f64),
    note: Option<&str>,
) -> Stop {
    Stop {
        name: name.to_string(),
        time: Some(time.to_string()),
        category,
        location: Some(GeoPoint { lat, lon }),
        note: note.map(str::to_string),
    }
}

fn sample_trip() -> Itinerary {
    Itinerary {
        title: "Kyoto in Autumn".to_string(),
        destination: Some("Kyoto, Japan".to_string()),
        days: vec![
            ItineraryDay {
                label: "Day 1".to_string(),
                date: Some("2026-11-03".to_string()),
                stops: vec![
                    stop(
                        "Kyoto Station",
                        "10:00",
                        StopCategory::Transit,
                        (34.9858, 135.7588),
                        Some("Shinkansen from Tokyo"),
                    ),
                    stop(
                        "Hotel Granvia",
                        "11:00",
                        StopCategory::Lodging,
                        (34.9855, 135.7590),
                        None,
                    ),
                    stop(
                        "Fushimi Inari Taisha",
                        "13:30",
                        StopCategory::Sight,
                        (34.9671, 135.7727),
                        Some("Go early, the upper trail is quieter"),
                    ),
                ],
            },
            ItineraryDay {
                label: "Day 2".to_string(),
                date: Some("2026-11-04".to_string()),
                stops: vec![
                    stop(
                        "Kiyomizu-dera",
                        "08:30",
                        StopCategory::Sight,
                        (34.9949, 135.7850),
                        None,
                    ),
                    stop(
                        "Nishiki Market",
                        "12:30",
                        StopCategory::Food,
                        (35.0050, 135.7649),
                        None,
                    ),
                    stop(
                        "Gion evening walk",
                        "18:00",
                        StopCategory::Activity,
                        (35.0037, 135.7756),
                        None,
                    ),
                ],
            },
            ItineraryDay {
                label: "Day 3".to_string(),
                date: Some("2026-11-05".to_string()),
                stops: vec![
                    stop(
                        "Arashiyama Bamboo Grove",
                        "09:00",
                        StopCategory::Sight,
                        (35.0170, 135.6713),
                        None,
                    ),
                    stop(
                        "Kinkaku-ji",
                        "14:00",
                        StopCategory::Sight,
                        (35.0394, 135.7292),
                        None,
                    ),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_trip_is_fully_located() {
        let trip = BuiltinItinerarySource.load().unwrap();

        assert_eq!(trip.days.len(), 3);
        assert_eq!(trip.located_stops().count(), trip.stop_count());
        assert!(trip.bounds().is_some());
    }
}
