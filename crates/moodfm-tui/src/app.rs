//! App — component-based event loop.
//!
//! Architecture:
//! - `App` owns the panes, the `AppState` they read, the fetch coordinator,
//!   the mood selector, and the favorites store.
//! - A `tokio::mpsc` channel carries `AppMessage` events in from the
//!   blocking input reader.
//! - The loop draws a frame, then awaits the next message or the ~100 ms
//!   tick. The tick is where completed fetches are collected: once
//!   `is_busy()` reads false, the coordinator guarantees the new snapshot
//!   is visible, so the tick swaps it into `AppState`.
//! - Panes return `Vec<Action>`; App dispatches each one. Favorites
//!   mutations happen here, on the control thread that owns the store.

use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

use moodfm_core::coordinator::FetchCoordinator;
use moodfm_core::favorites::FavoritesStore;
use moodfm_core::fetch::TrackSource;
use moodfm_core::mood::MoodSelector;
use moodfm_core::platform;
use moodfm_core::results::ResultStore;

use crate::action::{Action, ComponentId};
use crate::app_state::AppState;
use crate::component::Component;
use crate::components::{
    favorites_panel::FavoritesPanel, mood_list::MoodList, track_list::TrackList,
};
use crate::widgets::status_bar;
use crate::widgets::toast::{Severity, ToastManager};

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Event(Event),
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App<S: TrackSource> {
    // ── Shared state (passed read-only to panes) ──────────────────────────────
    state: AppState,

    // ── Core ──────────────────────────────────────────────────────────────────
    coordinator: FetchCoordinator<S>,
    store: Arc<ResultStore>,
    selector: MoodSelector,
    favorites: FavoritesStore,

    // ── Panes ─────────────────────────────────────────────────────────────────
    mood_list: MoodList,
    track_list: TrackList,
    favorites_panel: FavoritesPanel,
    focus: ComponentId,

    toast: ToastManager,
    should_quit: bool,
}

impl<S: TrackSource> App<S> {
    pub fn new(coordinator: FetchCoordinator<S>, favorites: FavoritesStore) -> Self {
        let store = coordinator.store();
        let state = AppState::new(favorites.tracks().to_vec());

        let mut app = Self {
            state,
            coordinator,
            store,
            selector: MoodSelector::new(),
            favorites,
            mood_list: MoodList::new(),
            track_list: TrackList::new(),
            favorites_panel: FavoritesPanel::new(),
            focus: ComponentId::MoodList,
            toast: ToastManager::new(),
            should_quit: false,
        };
        app.favorites_panel.sync(&app.state);
        app
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let (tx, mut rx) = mpsc::channel::<AppMessage>(64);

        // ── Background task: keyboard events ──────────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Drives the fetch-completion poll, toast expiry, and the spinner.
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    self.handle_message(msg).await;
                }
                _ = ui_tick.tick() => {
                    self.on_tick();
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Let an in-flight fetch finish before tearing anything down.
        self.coordinator.shutdown().await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Message / tick handling ───────────────────────────────────────────────

    async fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Event(Event::Key(key)) => {
                if key.kind == KeyEventKind::Release {
                    return;
                }
                let actions = self.handle_key(key);
                for action in actions {
                    self.dispatch(action).await;
                }
            }
            // Resize is picked up by ratatui on the next draw.
            AppMessage::Event(_) => {}
        }
    }

    fn on_tick(&mut self) {
        let busy = self.coordinator.is_busy();
        if self.state.fetching && !busy {
            // busy == false guarantees the store already holds the new set.
            self.state.fetching = false;
            self.state.results = self.store.snapshot();
            self.track_list.sync(&self.state);

            let n = self.state.results.len();
            if n == 0 {
                self.toast
                    .resolve_spinner(Severity::Warning, "no tracks found", Duration::from_secs(4));
            } else {
                self.toast.resolve_spinner(
                    Severity::Success,
                    format!("{} tracks", n),
                    Duration::from_secs(3),
                );
            }
        }
        self.toast.tick();
    }

    /// Global keys first; everything else goes to the focused pane.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Char('q') => return vec![Action::Quit],
            KeyCode::Tab => return vec![Action::FocusNext],
            KeyCode::BackTab => return vec![Action::FocusPrev],
            KeyCode::Char('1') => return vec![Action::FocusPane(ComponentId::MoodList)],
            KeyCode::Char('2') => return vec![Action::FocusPane(ComponentId::TrackList)],
            KeyCode::Char('3') => return vec![Action::FocusPane(ComponentId::FavoritesPanel)],
            _ => {}
        }
        match self.focus {
            ComponentId::MoodList => self.mood_list.handle_key(key, &self.state),
            ComponentId::TrackList => self.track_list.handle_key(key, &self.state),
            ComponentId::FavoritesPanel => self.favorites_panel.handle_key(key, &self.state),
        }
    }

    async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Fetch(mood) => {
                self.selector.set(Some(mood));
                self.state.selected_mood = self.selector.get();
                if self.coordinator.is_busy() {
                    self.toast.info("a fetch is already running");
                } else if let Some(mood) = self.selector.get() {
                    self.coordinator.request_fetch(mood).await;
                    self.state.fetching = true;
                    self.toast.spinner(format!("fetching {} tracks", mood.tag()));
                }
            }

            Action::Play(track) => {
                info!("opening {}", track.page_url());
                platform::open_url(&track.page_url());
                self.toast.info(format!("opening {}", track));
            }

            Action::AddFavorite(track) => {
                let label = track.to_string();
                if self.favorites.add(track) {
                    self.toast.success(format!("added {}", label));
                } else {
                    self.toast.info("already in favorites");
                }
                self.sync_favorites();
            }

            Action::RemoveFavorite(index) => {
                self.favorites.remove(index);
                self.toast.info("removed");
                self.sync_favorites();
            }

            Action::SortFavorites => {
                self.favorites.sort();
                self.toast.info("favorites sorted");
                self.sync_favorites();
            }

            Action::ShuffleFavorites => {
                self.favorites.shuffle();
                self.toast.info("favorites shuffled");
                self.sync_favorites();
            }

            Action::FocusNext => {
                self.focus = match self.focus {
                    ComponentId::MoodList => ComponentId::TrackList,
                    ComponentId::TrackList => ComponentId::FavoritesPanel,
                    ComponentId::FavoritesPanel => ComponentId::MoodList,
                };
            }

            Action::FocusPrev => {
                self.focus = match self.focus {
                    ComponentId::MoodList => ComponentId::FavoritesPanel,
                    ComponentId::TrackList => ComponentId::MoodList,
                    ComponentId::FavoritesPanel => ComponentId::TrackList,
                };
            }

            Action::FocusPane(id) => {
                self.focus = id;
            }

            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn sync_favorites(&mut self) {
        self.state.favorites = self.favorites.tracks().to_vec();
        self.favorites_panel.sync(&self.state);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16),
                Constraint::Min(30),
                Constraint::Length(44),
            ])
            .split(rows[0]);

        self.mood_list.draw(
            frame,
            panes[0],
            self.focus == ComponentId::MoodList,
            &self.state,
        );
        self.track_list.draw(
            frame,
            panes[1],
            self.focus == ComponentId::TrackList,
            &self.state,
        );
        self.favorites_panel.draw(
            frame,
            panes[2],
            self.focus == ComponentId::FavoritesPanel,
            &self.state,
        );

        status_bar::draw_keys_bar(frame, rows[1], self.focus, &self.state);
        self.toast.draw(frame, area);
    }
}
