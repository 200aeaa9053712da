//! FavoritesPanel component — right pane with the persisted favorites.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use moodfm_core::track::Track;

use crate::action::Action;
use crate::app_state::AppState;
use crate::component::Component;
use crate::theme::{style_default, style_muted, style_selected, style_selected_focused};
use crate::widgets::pane_chrome::{ellipsize, pane_block};
use crate::widgets::scrollable_list::ScrollableList;

pub struct FavoritesPanel {
    list: ScrollableList<Track>,
}

impl FavoritesPanel {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
        }
    }

    /// Replace items from the favorites mirror in AppState.
    pub fn sync(&mut self, state: &AppState) {
        self.list.set_items(state.favorites.clone());
    }
}

impl Component for FavoritesPanel {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.select_up(1);
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.select_down(1);
                Vec::new()
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.list.select_first();
                Vec::new()
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.list.select_last();
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char('p') => self
                .list
                .selected_item()
                .map(|t| vec![Action::Play(t.clone())])
                .unwrap_or_default(),
            KeyCode::Char('d') => self
                .list
                .selected_index()
                .map(|i| vec![Action::RemoveFavorite(i)])
                .unwrap_or_default(),
            KeyCode::Char('s') => vec![Action::SortFavorites],
            KeyCode::Char('S') => vec![Action::ShuffleFavorites],
            _ => Vec::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, _state: &AppState) {
        let inner_height = area.height.saturating_sub(2) as usize;
        self.list.ensure_visible(inner_height);

        let title = format!("favorites ({})", self.list.len());
        let block = pane_block(&title, focused);

        if self.list.is_empty() {
            frame.render_widget(
                Paragraph::new("no favorites yet — press f on a track")
                    .style(style_muted())
                    .block(block),
                area,
            );
            return;
        }

        let text_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .list
            .visible_items(inner_height)
            .into_iter()
            .map(|(i, track)| {
                let style = if i == self.list.selected {
                    if focused {
                        style_selected_focused()
                    } else {
                        style_selected()
                    }
                } else {
                    style_default()
                };
                ListItem::new(Line::from(Span::styled(
                    ellipsize(&track.to_string(), text_width),
                    style,
                )))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
