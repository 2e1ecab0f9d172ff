//! # StatusBar Component
//!
//! Bottom line of the overlay: what just happened, and where downloads go.
//!
//! Stateless. All props come from the core `App`:
//! - `status_message`: last outcome ("Saved Zool (901120 bytes)")
//! - `busy`: an effect is running; shows a "Working..." marker
//!
//! ## Conditional Formatting
//!
//! 1. **Busy**: `"Working... | Downloading Zool..."`
//! 2. **Idle**: `"Saved Zool (901120 bytes)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct StatusBar {
    pub status_message: String,
    pub busy: bool,
}

impl StatusBar {
    pub fn new(status_message: String, busy: bool) -> Self {
        Self {
            status_message,
            busy,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if self.busy {
            spans.push(Span::styled(
                "Working...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            if !self.status_message.is_empty() {
                spans.push(Span::raw(" | "));
            }
        }
        spans.push(Span::styled(
            self.status_message.as_str(),
            Style::default().fg(Color::Gray),
        ));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(bar: &mut StatusBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_status_bar_busy() {
        let text = rendered(&mut StatusBar::new("Downloading Zool...".to_string(), true));
        assert!(text.contains("Working... | Downloading Zool..."));
    }

    #[test]
    fn test_status_bar_idle() {
        let text = rendered(&mut StatusBar::new("Saved Zool (4 bytes)".to_string(), false));
        assert!(text.contains("Saved Zool (4 bytes)"));
        assert!(!text.contains("Working"));
        assert!(!text.contains('|'));
    }
}
