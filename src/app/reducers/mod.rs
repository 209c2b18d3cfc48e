mod sheet;
mod viewport;

pub use sheet::reduce_sheet;
pub use viewport::reduce_viewport;
