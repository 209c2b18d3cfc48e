mod key_chip;
mod panel_border;

pub use key_chip::{key_text, state_chip};
pub use panel_border::panel_block;
