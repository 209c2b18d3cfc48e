use std::fs;
use std::path::PathBuf;

use itinera_app::ports::{ItinerarySource, ItinerarySourceError};
use itinera_domain::Itinerary;

/// Itinerary exported to a TOML file (one `[[days]]` table per day, one
/// `[[days.stops]]` table per stop).
pub struct TomlItinerarySource {
    path: PathBuf,
}

impl TomlItinerarySource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ItinerarySource for TomlItinerarySource {
    fn load(&self) -> Result<Itinerary, ItinerarySourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ItinerarySourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ItinerarySourceError::Parse {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }
}
