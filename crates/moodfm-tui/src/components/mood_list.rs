//! MoodList component — left pane, picks the query mood.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use moodfm_core::mood::Mood;

use crate::action::Action;
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{style_default, style_selected, style_selected_focused};
use crate::widgets::pane_chrome::pane_block;

pub struct MoodList {
    selected: usize,
}

impl MoodList {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn selected_mood(&self) -> Mood {
        Mood::ALL[self.selected]
    }
}

impl Component for MoodList {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(Mood::ALL.len() - 1);
                Vec::new()
            }
            KeyCode::Enter => vec![Action::Fetch(self.selected_mood())],
            _ => Vec::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let items: Vec<ListItem> = Mood::ALL
            .iter()
            .enumerate()
            .map(|(i, mood)| {
                // ▶ marks the mood the selector currently holds, independent
                // of where the cursor is.
                let marker = if state.selected_mood == Some(*mood) {
                    "▶ "
                } else {
                    "  "
                };
                let style = if i == self.selected {
                    if focused {
                        style_selected_focused()
                    } else {
                        style_selected()
                    }
                } else {
                    style_default()
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", marker, mood.label()),
                    style,
                )))
            })
            .collect();

        frame.render_widget(List::new(items).block(pane_block("moods", focused)), area);
    }
}
