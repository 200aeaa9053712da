//! TrackList component — center pane with the latest fetch results.

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
use crate::theme::{style_default, style_muted, style_selected, style_selected_focused, C_FAVORITE};
use crate::widgets::pane_chrome::{ellipsize, pane_block};
use crate::widgets::scrollable_list::ScrollableList;

pub struct TrackList {
    list: ScrollableList<Track>,
}

impl TrackList {
    pub fn new() -> Self {
        Self {
            list: ScrollableList::new(),
        }
    }

    /// Replace items from the latest result snapshot.
    pub fn sync(&mut self, state: &AppState) {
        self.list.set_items(state.results.clone());
    }
}

impl Component for TrackList {
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
            KeyCode::Char('f') => self
                .list
                .selected_item()
                .map(|t| vec![Action::AddFavorite(t.clone())])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let inner_height = area.height.saturating_sub(2) as usize;
        self.list.ensure_visible(inner_height);

        let title = format!("tracks ({})", self.list.len());
        let block = pane_block(&title, focused);

        if self.list.is_empty() {
            let hint = if state.fetching {
                "fetching…"
            } else if state.selected_mood.is_none() {
                "pick a mood and press Enter"
            } else {
                "no tracks — check the log"
            };
            frame.render_widget(
                Paragraph::new(hint).style(style_muted()).block(block),
                area,
            );
            return;
        }

        let text_width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = self
            .list
            .visible_items(inner_height)
            .into_iter()
            .map(|(i, track)| {
                let base = if i == self.list.selected {
                    if focused {
                        style_selected_focused()
                    } else {
                        style_selected()
                    }
                } else {
                    style_default()
                };
                let heart = if state.is_favorite(track) {
                    Span::styled("♥ ", base.fg(C_FAVORITE))
                } else {
                    Span::styled("  ", base)
                };
                let label = Span::styled(ellipsize(&track.to_string(), text_width), base);
                ListItem::new(Line::from(vec![heart, label]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
