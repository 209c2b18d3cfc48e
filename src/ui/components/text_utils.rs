use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: char = '…';

/// Truncates `text` to at most `max_width` display columns, ending with an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Left pad to center `text` within `width` columns.
pub fn center_offset(text: &str, width: u16) -> u16 {
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    width.saturating_sub(text_width) / 2
}
