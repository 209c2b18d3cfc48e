use serde::{Deserialize, Serialize};

/// Trip content shown in the panel: the itinerary list is built from the
/// days, the map from the stops that carry a location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub title: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub label: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub stops: Vec<Stop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub category: StopCategory,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopCategory {
    #[default]
    Sight,
    Food,
    Lodging,
    Transit,
    Activity,
}

impl StopCategory {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sight => "◆",
            Self::Food => "●",
            Self::Lodging => "■",
            Self::Transit => "▶",
            Self::Activity => "★",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl Itinerary {
    pub fn stop_count(&self) -> usize {
        self.days.iter().map(|day| day.stops.len()).sum()
    }

    /// Stops with a location, numbered in visiting order (1-based).
    pub fn located_stops(&self) -> impl Iterator<Item = (usize, &Stop, GeoPoint)> {
        self.days
            .iter()
            .flat_map(|day| day.stops.iter())
            .enumerate()
            .filter_map(|(i, stop)| stop.location.map(|loc| (i + 1, stop, loc)))
    }

    /// South-west and north-east corners of all located stops.
    pub fn bounds(&self) -> Option<(GeoPoint, GeoPoint)> {
        self.located_stops().fold(None, |acc, (_, _, p)| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((
                GeoPoint {
                    lat: min.lat.min(p.lat),
                    lon: min.lon.min(p.lon),
                },
                GeoPoint {
                    lat: max.lat.max(p.lat),
                    lon: max.lon.max(p.lon),
                },
            )),
        })
    }
}
