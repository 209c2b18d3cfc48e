pub mod atoms;
pub mod bottom_sheet;
pub mod footer;
pub mod header;
pub mod itinerary_list;
pub mod layout;
pub mod map_view;
pub mod molecules;
pub mod overlay;
pub mod sheet_indicators;
pub mod side_by_side;
pub mod text_utils;
