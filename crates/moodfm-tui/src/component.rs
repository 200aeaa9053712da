//! Component trait — the interface every pane implements.
//!
//! Components are self-contained: they own their selection state and render
//! themselves. Shared data arrives as a read-only `AppState`; components
//! never mutate it. They produce `Vec<Action>` instead, and the App
//! event-loop dispatches those.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::app_state::AppState;

/// The trait every focusable pane implements.
pub trait Component {
    /// Handle a key event. Only called when this pane has focus.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Render the pane into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);
}
