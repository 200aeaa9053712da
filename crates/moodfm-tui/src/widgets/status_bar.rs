//! Status bar — bottom line with the current mood, fetch state, and keys.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::ComponentId;
use crate::app_state::AppState;
use crate::theme::{style_accent, style_muted, style_secondary, C_FETCHING, C_MUTED};

/// Draw the keybindings footer bar (one row).
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, focus: ComponentId, state: &AppState) {
    let mood_label = state
        .selected_mood
        .map(|m| m.label().to_uppercase())
        .unwrap_or_else(|| "NO MOOD".to_string());

    let mut spans = vec![Span::styled(
        format!(" {} ", mood_label),
        style_accent().add_modifier(Modifier::BOLD),
    )];

    // Fetch bulb: lit while a fetch is in flight.
    spans.push(Span::styled(
        "●",
        Style::default().fg(if state.fetching { C_FETCHING } else { C_MUTED }),
    ));
    spans.push(Span::styled(
        format!(
            " {} tracks  {} favorites ",
            state.results.len(),
            state.favorites.len()
        ),
        style_secondary(),
    ));

    let keys = match focus {
        ComponentId::MoodList => " ↑↓/jk select  Enter fetch  Tab/1-3 panes  q quit",
        ComponentId::TrackList => {
            " ↑↓/jk select  Enter/p play  f favorite  Tab/1-3 panes  q quit"
        }
        ComponentId::FavoritesPanel => {
            " ↑↓/jk select  Enter/p play  d remove  s sort  S shuffle  Tab/1-3 panes  q quit"
        }
    };
    spans.push(Span::styled(keys, style_muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
