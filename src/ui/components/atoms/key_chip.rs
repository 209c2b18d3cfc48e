use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::theme::Theme;

/// Creates a chip for a sheet state. The active state gets a filled
/// background.
/// Example: ` Half ` with highlighted background
pub fn state_chip(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .bg(Theme::INDICATOR_ACTIVE_BG)
            .fg(Theme::INDICATOR_ACTIVE_FG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(Theme::KEY_CHIP_BG)
            .fg(Theme::INDICATOR_IDLE_FG)
    };
    Span::styled(format!(" {} ", label), style)
}

/// Creates a styled key text without background (e.g., for footer hints).
/// Example: `Esc` in accent color
pub fn key_text(key: &str) -> Span<'static> {
    Span::styled(key.to_string(), Style::default().fg(Theme::TEXT_ACCENT))
}
