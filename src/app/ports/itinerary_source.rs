use std::path::PathBuf;

use thiserror::Error;

use itinera_domain::Itinerary;

#[derive(Debug, Error)]
pub enum ItinerarySourceError {
    #[error("failed to read itinerary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid itinerary {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Supplies the trip shown in the panel. Where it comes from (file, bundled
/// sample, remote store) is the adapter's business.
pub trait ItinerarySource {
    fn load(&self) -> Result<Itinerary, ItinerarySourceError>;
}
