use itinera::domain::{GeoPoint, Itinerary, ItineraryDay, Stop, StopCategory};

fn stop(name: &str, time: &str, category: StopCategory, lat: f64, lon: f64) -> Stop {
    Stop {
        name: name.to_string(),
        time: Some(time.to_string()),
        category,
        location: Some(GeoPoint { lat, lon }),
        note: None,
    }
}

pub fn sample_itinerary() -> Itinerary {
    Itinerary {
        title: "Lisbon Weekend".to_string(),
        destination: Some("Lisbon".to_string()),
        days: vec![
            ItineraryDay {
                label: "Day 1".to_string(),
                date: Some("Sat".to_string()),
                stops: vec![
                    stop("Belém Tower", "09:00", StopCategory::Sight, 38.6916, -9.2160),
                    stop("Pastéis de Belém", "10:30", StopCategory::Food, 38.6975, -9.2032),
                ],
            },
            ItineraryDay {
                label: "Day 2".to_string(),
                date: Some("Sun".to_string()),
                stops: vec![
                    stop("Tram 28", "09:30", StopCategory::Transit, 38.7139, -9.1334),
                    stop("São Jorge Castle", "11:00", StopCategory::Sight, 38.7139, -9.1335),
                ],
            },
        ],
    }
}

/// Trip with no coordinates: the map shows its placeholder, so screens are
/// stable text.
pub fn unmapped_itinerary() -> Itinerary {
    let unlocated = |name: &str, time: Option<&str>, category| Stop {
        name: name.to_string(),
        time: time.map(str::to_string),
        category,
        location: None,
        note: None,
    };

    Itinerary {
        title: "Porto".to_string(),
        destination: None,
        days: vec![
            ItineraryDay {
                label: "Day 1".to_string(),
                date: Some("Sat".to_string()),
                stops: vec![
                    unlocated("Ribeira walk", Some("09:00"), StopCategory::Sight),
                    unlocated("Lunch", Some("12:30"), StopCategory::Food),
                ],
            },
            ItineraryDay {
                label: "Day 2".to_string(),
                date: None,
                stops: vec![unlocated("Port cellars", None, StopCategory::Activity)],
            },
        ],
    }
}
