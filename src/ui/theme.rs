use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const CATPPUCCIN_MOCHA: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Sheet surface
    pub const SHEET_BG: Color = Palette::DUCKBONES;
    pub const HANDLE: Color = Color::Rgb(0x9a, 0x9d, 0xb5);
    pub const HANDLE_ACTIVE: Color = Color::Rgb(0xf9, 0xe2, 0xaf);

    // Map backdrop
    pub const MAP_BG: Color = Palette::CATPPUCCIN_MOCHA;
    pub const MAP_ROUTE: Color = Color::Rgb(0x74, 0xc7, 0xec);
    pub const MAP_MARKER: Color = Color::Rgb(0xf3, 0x8b, 0xa8);

    // Panels
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;

    // Indicators
    pub const INDICATOR_ACTIVE_BG: Color = Color::Rgb(0x89, 0xb4, 0xfa);
    pub const INDICATOR_ACTIVE_FG: Color = Palette::DUCKBONES;
    pub const INDICATOR_IDLE_FG: Color = Color::Gray;

    // Key chips / hints
    pub const KEY_CHIP_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const TEXT_ACCENT: Color = Color::Yellow;
    pub const TEXT_SECONDARY: Color = Color::DarkGray;
    pub const TEXT_DAY: Color = Color::Cyan;
}
