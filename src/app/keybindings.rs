//! Key hint tables for the footer.
//! Key dispatch itself lives in the UI event handler.

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "j/↓", "1-3")
    pub key_short: &'static str,
    /// Short description for Footer (e.g., "Quit", "Expand")
    pub desc_short: &'static str,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
    }

    pub mod sheet {
        pub const EXPAND: usize = 0;
        pub const COLLAPSE: usize = 1;
        pub const PICK_STATE: usize = 2;
        pub const DRAG: usize = 3;
    }

    pub mod drag {
        pub const ESC_CANCEL: usize = 0;
        pub const RELEASE: usize = 1;
    }
}

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        desc_short: "Quit",
    },
];

pub const SHEET_KEYS: &[KeyBinding] = &[
    // idx 0: EXPAND
    KeyBinding {
        key_short: "k/↑",
        desc_short: "Expand",
    },
    // idx 1: COLLAPSE
    KeyBinding {
        key_short: "j/↓",
        desc_short: "Collapse",
    },
    // idx 2: PICK_STATE
    KeyBinding {
        key_short: "1-3",
        desc_short: "Size",
    },
    // idx 3: DRAG
    KeyBinding {
        key_short: "drag",
        desc_short: "Resize",
    },
];

pub const DRAG_KEYS: &[KeyBinding] = &[
    // idx 0: ESC_CANCEL
    KeyBinding {
        key_short: "Esc",
        desc_short: "Cancel",
    },
    // idx 1: RELEASE
    KeyBinding {
        key_short: "release",
        desc_short: "Settle",
    },
];
