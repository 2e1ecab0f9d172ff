//! # Entry List Component
//!
//! The filtered-list screen: a "Back to Menu" row followed by the titles of
//! one bucket. The "No items found." placeholder is drawn dimmed and the
//! cursor never lands on it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::filter::{Bucket, ListEntry};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Rows before the first title.
const HEADER_ROWS: usize = 1;
const PAGE: usize = 10;

/// Events emitted by the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Back,
    /// Index into the list's entries (not counting the Back row).
    Select(usize),
}

/// Persistent state for the entry list.
pub struct EntryListState {
    /// Row under the cursor; 0 is "Back to Menu".
    pub selected: usize,
    pub list_state: ListState,
    selectable: Vec<bool>,
}

impl EntryListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
            selectable: Vec::new(),
        }
    }

    /// Point the cursor at a fresh list.
    pub fn reset(&mut self, items: &[ListEntry]) {
        self.selectable = std::iter::once(true)
            .chain(items.iter().map(ListEntry::is_selectable))
            .collect();
        self.selected = 0;
        self.list_state = ListState::default().with_selected(Some(0));
    }

    fn row_count(&self) -> usize {
        self.selectable.len().max(HEADER_ROWS)
    }

    /// Move `steps` selectable rows down (or up, if negative), clamping at the ends.
    fn step(&mut self, steps: isize) {
        let mut row = self.selected;
        for _ in 0..steps.unsigned_abs() {
            let candidate = if steps < 0 {
                (0..row).rev().find(|&r| self.selectable[r])
            } else {
                (row + 1..self.row_count()).find(|&r| self.selectable.get(r) == Some(&true))
            };
            match candidate {
                Some(r) => row = r,
                None => break,
            }
        }
        self.selected = row;
        self.list_state.select(Some(row));
    }
}

impl Default for EntryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for EntryListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(ListEvent::Back),
            TuiEvent::CursorUp => {
                self.step(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.step(1);
                None
            }
            TuiEvent::CursorLeft => {
                self.step(-(PAGE as isize));
                None
            }
            TuiEvent::CursorRight => {
                self.step(PAGE as isize);
                None
            }
            TuiEvent::Home => {
                self.step(-(self.row_count() as isize));
                None
            }
            TuiEvent::End => {
                self.step(self.row_count() as isize);
                None
            }
            TuiEvent::Submit => {
                if self.selected < HEADER_ROWS {
                    Some(ListEvent::Back)
                } else {
                    Some(ListEvent::Select(self.selected - HEADER_ROWS))
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the entry list.
pub struct EntryList<'a> {
    state: &'a mut EntryListState,
    bucket: Bucket,
    items: &'a [ListEntry],
}

impl<'a> EntryList<'a> {
    pub fn new(state: &'a mut EntryListState, bucket: Bucket, items: &'a [ListEntry]) -> Self {
        Self {
            state,
            bucket,
            items,
        }
    }
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.bucket.label()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Download  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let rows: Vec<ListItem> = std::iter::once(ListItem::new("Back to Menu"))
            .chain(self.items.iter().map(|entry| match entry {
                ListEntry::Title(title) => ListItem::new(title.as_str()),
                ListEntry::NoResults => ListItem::new(entry.label()).style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            }))
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn titles(names: &[&str]) -> Vec<ListEntry> {
        names.iter().map(|n| ListEntry::Title(n.to_string())).collect()
    }

    #[test]
    fn test_enter_on_back_row_goes_back() {
        let mut state = EntryListState::new();
        state.reset(&titles(&["Agony"]));
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ListEvent::Back));
    }

    #[test]
    fn test_enter_on_title_selects_its_index() {
        let mut state = EntryListState::new();
        state.reset(&titles(&["Agony", "Alien Breed"]));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ListEvent::Select(1)));
    }

    #[test]
    fn test_cursor_skips_placeholder() {
        let mut state = EntryListState::new();
        state.reset(&[ListEntry::NoResults]);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ListEvent::Back));
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut state = EntryListState::new();
        state.reset(&titles(&["A1", "A2", "A3"]));
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut state = EntryListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ListEvent::Back));
    }

    #[test]
    fn test_render_lists_back_row_and_titles() {
        let items = vec![ListEntry::NoResults];
        let mut state = EntryListState::new();
        state.reset(&items);
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|f| EntryList::new(&mut state, Bucket::Letter('Z'), &items).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Back to Menu"));
        assert!(text.contains("No items found."));
        assert!(text.contains(" Z "));
    }
}
