//! Shared pane frame + text helpers.

use ratatui::widgets::{Block, Borders};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{style_focused_border, style_unfocused_border};

/// Bordered block with the focus state reflected in the border color.
pub fn pane_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(if focused {
            style_focused_border()
        } else {
            style_unfocused_border()
        })
}

/// Truncate `s` to at most `max` display columns, appending an ellipsis when
/// anything was cut.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_short_string_untouched() {
        assert_eq!(ellipsize("abc", 10), "abc");
    }

    #[test]
    fn test_ellipsize_cuts_to_width() {
        assert_eq!(ellipsize("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_ellipsize_counts_wide_chars() {
        // Each CJK glyph is two columns wide.
        let s = "日本語のタイトル";
        let cut = ellipsize(s, 7);
        assert!(cut.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(cut.as_str()) <= 7);
    }
}
