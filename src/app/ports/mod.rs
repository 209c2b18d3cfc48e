pub mod itinerary_source;
pub mod renderer;
pub mod sheet_observer;

pub use itinerary_source::{ItinerarySource, ItinerarySourceError};
pub use renderer::{RenderOutput, Renderer};
pub use sheet_observer::SheetStateObserver;

#[cfg(test)]
pub use sheet_observer::MockSheetStateObserver;
