pub mod action;
pub mod config;
pub mod effect;
pub mod effect_runner;
pub mod gesture;
pub mod keybindings;
pub mod layout;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod sheet_state;
pub mod sheet_transition;
pub mod state;
