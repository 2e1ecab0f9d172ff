//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Blocking Effects
//!
//! Effects are awaited inline on the UI task. Before an effect starts, one
//! frame is drawn with the busy marker; no input is read until the effect
//! and its outcome action are done. Catalog refreshes and downloads are short
//! and sequential, so there is nothing to cancel and nothing to race.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including
//! terminal resize) and sleeps up to 500ms otherwise.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::dispatch;
use crate::core::navigation::NavigationState;
use crate::core::state::{App, Settings};
use crate::transport::{HttpSource, ReqwestSource};
use crate::tui::component::EventHandler;
use crate::tui::components::message_box::is_dismiss;
use crate::tui::components::{EntryListState, ListEvent, MenuEvent, MenuState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: MenuState,
    pub entry_list: EntryListState,
    // Whether the last synced screen was a filtered list
    showing_list: bool,
}

impl TuiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            menu: MenuState::new(settings),
            entry_list: EntryListState::new(),
            showing_list: false,
        }
    }

    /// Reset per-screen state when the active screen changes.
    ///
    /// A freshly opened list starts on "Back to Menu".
    pub fn sync(&mut self, app: &App) {
        let items = match app.navigator.state() {
            NavigationState::FilteredList { items, .. } => Some(items),
            _ => None,
        };
        if let Some(items) = items
            && !self.showing_list
        {
            self.entry_list.reset(items);
        }
        self.showing_list = items.is_some();
    }
}

/// Translate one input event into a core action for the active screen.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    match app.navigator.state() {
        NavigationState::MainMenu => tui.menu.handle_event(event).map(|menu_event| match menu_event {
            MenuEvent::EditDirectory(dir) => Action::SetTargetDirectory(dir),
            MenuEvent::EditSourceUrl(url) => Action::SetSourceUrl(url),
            MenuEvent::Refresh => Action::RequestRefresh,
            MenuEvent::SelectBucket(bucket) => Action::SelectBucket(bucket),
        }),
        NavigationState::FilteredList { .. } => {
            tui.entry_list
                .handle_event(event)
                .map(|list_event| match list_event {
                    ListEvent::Back => Action::Back,
                    ListEvent::Select(index) => Action::SelectItem(index),
                })
        }
        NavigationState::Message { .. } => is_dismiss(event).then_some(Action::Back),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Pasting a long URL into a field should arrive as one event
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = ReqwestSource::new();
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app.settings);

    info!(
        "Starting UI (target directory: '{}', catalog: {})",
        app.settings.target_directory, app.settings.source_url
    );

    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = match TerminalModeGuard::new() {
            Ok(guard) => Some(guard),
            Err(e) => {
                warn!("Could not enable terminal modes: {}", e);
                None
            }
        };
        event_loop(&mut terminal, &mut app, &mut tui, &source).await
    };
    ratatui::restore();
    info!("UI closed");
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    source: &dyn HttpSource,
) -> std::io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Drain everything already queued before the next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending.take() {
            if let Some(action) = route_event(app, tui, &event) {
                debug!("Routing {:?} as {:?}", event, action);
                let busy_frame = |app: &App, tui: &mut TuiState| {
                    terminal.draw(|f| ui::draw_ui(f, app, tui)).map(|_| ())
                };
                if apply(app, tui, source, action, busy_frame).await? == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Run one action to completion, calling `draw` before each effect starts.
async fn apply(
    app: &mut App,
    tui: &mut TuiState,
    source: &dyn HttpSource,
    action: Action,
    mut draw: impl FnMut(&App, &mut TuiState) -> std::io::Result<()>,
) -> std::io::Result<Effect> {
    let effect = dispatch::drive_with(app, source, action, |app| {
        tui.sync(app);
        draw(app, tui)
    })
    .await?;
    tui.sync(app);
    Ok(effect)
}
