pub mod itinerary;
pub mod sheet;
pub mod viewport;

pub use itinerary::{GeoPoint, Itinerary, ItineraryDay, Stop, StopCategory};
pub use sheet::{DisplayState, InvalidDisplayState, PanelGeometry};
pub use viewport::ViewportClass;
