use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::navigation::NavigationState;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EntryList, MainMenu, MessageBox, StatusBar};

/// Overlay size as a percentage of the terminal.
const OVERLAY_PERCENT_X: u16 = 70;
const OVERLAY_PERCENT_Y: u16 = 90;
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 22;

const SHADE: &str = "\u{2592}";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    draw_background(frame, area);

    let overlay = overlay_rect(area);
    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(2));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    match app.navigator.state() {
        NavigationState::MainMenu => MainMenu::new(&mut tui.menu).render(frame, body),
        NavigationState::FilteredList { bucket, items } => {
            EntryList::new(&mut tui.entry_list, *bucket, items).render(frame, body)
        }
        NavigationState::Message { text, .. } => MessageBox { text }.render(frame, body),
    }

    StatusBar::new(app.status_message.clone(), app.is_busy).render(frame, status);
}

fn draw_background(frame: &mut Frame, area: Rect) {
    let row = SHADE.repeat(area.width as usize);
    let fill: Vec<&str> = std::iter::repeat_n(row.as_str(), area.height as usize).collect();
    frame.render_widget(
        Paragraph::new(fill.join("\n")).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Centered overlay, clamped to a minimum size (and to the terminal).
pub fn overlay_rect(area: Rect) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    let width = scale(area.width, OVERLAY_PERCENT_X)
        .max(MIN_WIDTH)
        .min(area.width);
    let height = scale(area.height, OVERLAY_PERCENT_Y)
        .max(MIN_HEIGHT)
        .min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
