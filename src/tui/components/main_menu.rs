//! # Main Menu Component
//!
//! The landing screen: settings fields, the refresh button, and the bucket
//! grid.
//!
//! ```text
//!            ADFetch v0.1.0
//!          Press F10 to quit
//!
//! Target download directory:
//! Path:/home/me/adf
//!
//! Catalog source:
//! URL:https://raw.githubusercontent.com/...
//! [ Refresh catalog ]
//!
//! Choose a letter:
//!   A     G     M     S     Y
//!   B     H     N     T     Z
//!   ...
//! ```
//!
//! The grid is filled column by column (`index = row + col * rows`), so the
//! alphabet reads top to bottom.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState`
//! - `MainMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::filter::Bucket;
use crate::core::state::Settings;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldChanged, TextField};
use crate::tui::event::TuiEvent;

pub const GRID_COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFocus {
    Directory,
    SourceUrl,
    Refresh,
    Grid,
}

impl MenuFocus {
    fn next(self) -> Self {
        match self {
            MenuFocus::Directory => MenuFocus::SourceUrl,
            MenuFocus::SourceUrl => MenuFocus::Refresh,
            MenuFocus::Refresh => MenuFocus::Grid,
            MenuFocus::Grid => MenuFocus::Directory,
        }
    }

    fn prev(self) -> Self {
        match self {
            MenuFocus::Directory => MenuFocus::Grid,
            MenuFocus::SourceUrl => MenuFocus::Directory,
            MenuFocus::Refresh => MenuFocus::SourceUrl,
            MenuFocus::Grid => MenuFocus::Refresh,
        }
    }
}

/// Events emitted by the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    EditDirectory(String),
    EditSourceUrl(String),
    Refresh,
    SelectBucket(Bucket),
}

/// Persistent state for the main menu.
pub struct MenuState {
    pub directory: TextField,
    pub source_url: TextField,
    pub focus: MenuFocus,
    pub buckets: Vec<Bucket>,
    /// Index into `buckets`
    pub selected: usize,
}

impl MenuState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            directory: TextField::new("Path:", settings.target_directory.clone()),
            source_url: TextField::new("URL:", settings.source_url.clone()),
            focus: MenuFocus::Grid,
            buckets: Bucket::all(),
            selected: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.buckets.len().div_ceil(GRID_COLUMNS)
    }

    pub fn selected_bucket(&self) -> Option<Bucket> {
        self.buckets.get(self.selected).copied()
    }

    fn move_in_grid(&mut self, event: &TuiEvent) {
        let rows = self.rows();
        let row = self.selected % rows;
        let len = self.buckets.len();
        match event {
            TuiEvent::CursorUp if row == 0 => self.focus = MenuFocus::Refresh,
            TuiEvent::CursorUp => self.selected -= 1,
            TuiEvent::CursorDown if row + 1 < rows && self.selected + 1 < len => {
                self.selected += 1
            }
            TuiEvent::CursorRight if self.selected + rows < len => self.selected += rows,
            TuiEvent::CursorLeft if self.selected >= rows => self.selected -= rows,
            _ => {}
        }
    }
}

impl EventHandler for MenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::FocusNext => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::FocusPrev => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            MenuFocus::Directory | MenuFocus::SourceUrl => match event {
                TuiEvent::CursorUp => {
                    self.focus = self.focus.prev();
                    None
                }
                TuiEvent::CursorDown | TuiEvent::Submit => {
                    self.focus = self.focus.next();
                    None
                }
                _ if self.focus == MenuFocus::Directory => self
                    .directory
                    .handle_event(event)
                    .map(|FieldChanged(value)| MenuEvent::EditDirectory(value)),
                _ => self
                    .source_url
                    .handle_event(event)
                    .map(|FieldChanged(value)| MenuEvent::EditSourceUrl(value)),
            },
            MenuFocus::Refresh => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(MenuEvent::Refresh),
                TuiEvent::CursorUp => {
                    self.focus = MenuFocus::SourceUrl;
                    None
                }
                TuiEvent::CursorDown => {
                    self.focus = MenuFocus::Grid;
                    None
                }
                _ => None,
            },
            MenuFocus::Grid => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                    self.selected_bucket().map(MenuEvent::SelectBucket)
                }
                // Letter/digit shortcut jumps straight to its bucket
                TuiEvent::InputChar(c) => {
                    let bucket = if c.is_ascii_digit() {
                        Some(Bucket::Digits)
                    } else {
                        Bucket::parse(&c.to_string())
                    }?;
                    self.selected = self.buckets.iter().position(|b| *b == bucket)?;
                    Some(MenuEvent::SelectBucket(bucket))
                }
                _ => {
                    self.move_in_grid(event);
                    None
                }
            },
        }
    }
}

/// Transient render wrapper for the main menu.
pub struct MainMenu<'a> {
    state: &'a mut MenuState,
}

impl<'a> MainMenu<'a> {
    pub fn new(state: &'a mut MenuState) -> Self {
        Self { state }
    }
}

fn button_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    }
}

impl Component for MainMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = self.state.rows();
        let [
            header,
            hint,
            _,
            dir_label,
            dir_field,
            _,
            url_label,
            url_field,
            refresh,
            _,
            grid_label,
            _,
            grid,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let title = format!("ADFetch v{}", env!("CARGO_PKG_VERSION"));
        frame.render_widget(
            Paragraph::new(title)
                .style(Style::default().add_modifier(Modifier::REVERSED))
                .alignment(Alignment::Center),
            header,
        );
        frame.render_widget(
            Paragraph::new("Press F10 to quit").alignment(Alignment::Center),
            hint,
        );

        frame.render_widget(Paragraph::new("Target download directory:"), dir_label);
        self.state
            .directory
            .render(frame, dir_field, self.state.focus == MenuFocus::Directory);

        frame.render_widget(Paragraph::new("Catalog source:"), url_label);
        self.state
            .source_url
            .render(frame, url_field, self.state.focus == MenuFocus::SourceUrl);

        frame.render_widget(
            Paragraph::new("[ Refresh catalog ]")
                .style(button_style(self.state.focus == MenuFocus::Refresh)),
            refresh,
        );

        frame.render_widget(Paragraph::new("Choose a letter:"), grid_label);

        let grid_focused = self.state.focus == MenuFocus::Grid;
        let row_areas = Layout::vertical(vec![Constraint::Length(1); rows]).split(grid);
        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row + col * rows;
                let Some(bucket) = self.state.buckets.get(index) else {
                    continue;
                };
                let focused = grid_focused && index == self.state.selected;
                let label = Line::from(format!("< {} >", bucket.label()));
                frame.render_widget(Paragraph::new(label).style(button_style(focused)), *cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn settings() -> Settings {
        Settings {
            target_directory: "/tmp".into(),
            source_url: "http://feed".into(),
        }
    }

    #[test]
    fn test_grid_is_column_major() {
        let mut state = MenuState::new(&settings());
        assert_eq!(state.rows(), 6);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected_bucket(), Some(Bucket::Letter('B')));

        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected_bucket(), Some(Bucket::Letter('H')));
    }

    #[test]
    fn test_grid_edges_do_not_wrap() {
        let mut state = MenuState::new(&settings());
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.selected, 0);

        // Last column holds only Y, Z and 0-9
        state.selected = 26;
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected_bucket(), Some(Bucket::Digits));
    }

    #[test]
    fn test_enter_selects_bucket() {
        let mut state = MenuState::new(&settings());
        state.selected = 26;
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::SelectBucket(Bucket::Digits))
        );
    }

    #[test]
    fn test_letter_shortcut_selects_bucket() {
        let mut state = MenuState::new(&settings());
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('k')),
            Some(MenuEvent::SelectBucket(Bucket::Letter('K')))
        );
        assert_eq!(state.selected_bucket(), Some(Bucket::Letter('K')));
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('7')),
            Some(MenuEvent::SelectBucket(Bucket::Digits))
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('!')), None);
    }

    #[test]
    fn test_typing_in_directory_field_edits_setting() {
        let mut state = MenuState::new(&settings());
        state.handle_event(&TuiEvent::FocusNext);
        assert_eq!(state.focus, MenuFocus::Directory);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('/')),
            Some(MenuEvent::EditDirectory("/tmp/".into()))
        );
    }

    #[test]
    fn test_refresh_button() {
        let mut state = MenuState::new(&settings());
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.focus, MenuFocus::Refresh);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(MenuEvent::Refresh));

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(
            state.handle_event(&TuiEvent::Backspace),
            Some(MenuEvent::EditSourceUrl("http://fee".into()))
        );
    }

    #[test]
    fn test_render_shows_all_buckets() {
        let mut state = MenuState::new(&settings());
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal
            .draw(|f| MainMenu::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("ADFetch v"));
        assert!(text.contains("Press F10 to quit"));
        assert!(text.contains("Path:/tmp"));
        assert!(text.contains("< A >"));
        assert!(text.contains("< 0-9 >"));
    }
}
