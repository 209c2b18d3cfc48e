pub use itinera_app as app;
pub use itinera_domain as domain;
pub use itinera_infra as infra;
pub use itinera_ui as ui;

pub mod error;
