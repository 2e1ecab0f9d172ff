use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Props are struct fields; `render` takes `&mut self` so a component can
/// keep presentation state (list offsets, cursor) between frames, in the
/// spirit of ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A screen state that reacts to terminal events.
pub trait EventHandler {
    /// The high-level event this handler emits.
    type Event;

    /// Handle a `TuiEvent`, optionally producing a high-level event.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
