//! # TextField Component
//!
//! Single-line editor used for the target directory and the catalog URL.
//! Every edit emits the full new value so the parent can push it straight
//! into `App::settings`.
//!
//! When the value is wider than the field, the view scrolls so the cursor
//! stays visible (like a `wrap='clip'` edit box).

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

pub struct TextField {
    pub caption: &'static str,
    pub value: String,
    /// Cursor as byte offset into `value` (always on a char boundary)
    cursor: usize,
}

impl TextField {
    pub fn new(caption: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            caption,
            value,
            cursor,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }

    fn insert(&mut self, text: &str) {
        self.value.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Draw the field. When `focused`, the terminal cursor is placed in it.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let caption_width = self.caption.width() as u16;
        let available = area.width.saturating_sub(caption_width) as usize;

        // Skip leading chars until the text before the cursor fits
        let before = &self.value[..self.cursor];
        let mut start = 0;
        while start < before.len() && before[start..].width() >= available.max(1) {
            start += before[start..].chars().next().map_or(1, char::len_utf8);
        }
        let visible = &self.value[start..];

        let field_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };
        let padded = format!("{:<width$}", visible, width = available);
        let line = Line::from(vec![
            Span::raw(self.caption),
            Span::styled(padded, field_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if focused {
            let cursor_x = area.x + caption_width + before[start..].width() as u16;
            frame.set_cursor_position(Position::new(
                cursor_x.min(area.right().saturating_sub(1)),
                area.y,
            ));
        }
    }
}

/// Emitted when the value changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChanged(pub String);

impl EventHandler for TextField {
    type Event = FieldChanged;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FieldChanged> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
            }
            TuiEvent::Paste(text) => {
                let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if single_line.is_empty() {
                    return None;
                }
                self.insert(&single_line);
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let start = self.prev_boundary();
                self.value.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            TuiEvent::Delete => {
                if self.cursor == self.value.len() {
                    return None;
                }
                let end = self.next_boundary();
                self.value.replace_range(self.cursor..end, "");
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                return None;
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                return None;
            }
            TuiEvent::Home => {
                self.cursor = 0;
                return None;
            }
            TuiEvent::End => {
                self.cursor = self.value.len();
                return None;
            }
            _ => return None,
        }
        Some(FieldChanged(self.value.clone()))
    }
}
