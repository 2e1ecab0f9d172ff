//! # Message Box Component
//!
//! Shows the outcome of a refresh or a failed download, with a single
//! "Back to Menu" button. Stateless: the text is a prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

pub struct MessageBox<'a> {
    pub text: &'a str,
}

/// Any dismiss key returns `true`.
pub fn is_dismiss(event: &TuiEvent) -> bool {
    matches!(
        event,
        TuiEvent::Submit | TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar(' ')
    )
}

impl Component for MessageBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let text_height = (text.line_count(area.width) as u16).min(area.height.saturating_sub(2));

        let [text_area, _, button_area] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(text, text_area);
        frame.render_widget(
            Paragraph::new("< Back to Menu >")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::REVERSED)),
            button_area,
        );
    }
}
