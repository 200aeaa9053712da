//! Color palette and style constants for the moodfm TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_ACCENT: Color = Color::Rgb(235, 90, 90);
pub const C_PRIMARY: Color = Color::Rgb(215, 210, 205);
pub const C_SECONDARY: Color = Color::Rgb(140, 130, 125);
pub const C_MUTED: Color = Color::Rgb(88, 80, 76);
pub const C_SELECTION_BG: Color = Color::Rgb(44, 30, 30);
pub const C_PANEL_BORDER: Color = Color::Rgb(58, 46, 44);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(220, 110, 90);
pub const C_FETCHING: Color = Color::Rgb(255, 186, 90);
pub const C_FAVORITE: Color = Color::Rgb(235, 90, 90);
pub const C_TOAST_INFO: Color = Color::Rgb(110, 160, 210);
pub const C_TOAST_SUCCESS: Color = Color::Rgb(110, 200, 130);
pub const C_TOAST_WARNING: Color = Color::Rgb(255, 186, 90);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(C_PRIMARY)
}

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_accent() -> Style {
    Style::default().fg(C_ACCENT)
}

pub fn style_selected() -> Style {
    Style::default().bg(C_SELECTION_BG).fg(C_PRIMARY)
}

pub fn style_selected_focused() -> Style {
    Style::default()
        .bg(C_SELECTION_BG)
        .fg(C_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}
