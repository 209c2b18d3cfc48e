mod builtin_itinerary;
mod toml_itinerary_source;
mod tracing_sheet_observer;

pub use builtin_itinerary::BuiltinItinerarySource;
pub use toml_itinerary_source::TomlItinerarySource;
pub use tracing_sheet_observer::TracingSheetObserver;
