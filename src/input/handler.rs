use crossterm::event::{Event, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::command::Command;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) redraw: bool,
    /// Whole screen must be cleared before the next frame.
    pub(crate) repaint: bool,
    pub(crate) quit_requested: bool,
    pub(crate) commands: Vec<Command>,
}

impl App {
    /// Routes one terminal event. `area` is the current terminal size, used
    /// for pointer hit-testing.
    pub(crate) fn handle_input_event(&mut self, event: Event, area: Rect) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key_event(key)
            }
            Event::Mouse(mouse) if !matches!(mouse.kind, MouseEventKind::Moved) => {
                self.handle_pointer_event(mouse, area)
            }
            Event::FocusGained => InputEventOutcome {
                commands: vec![Command::FocusDeck],
                ..InputEventOutcome::default()
            },
            Event::FocusLost => InputEventOutcome {
                redraw: self.blur_deck(),
                ..InputEventOutcome::default()
            },
            Event::Resize(_, _) => InputEventOutcome {
                redraw: true,
                repaint: true,
                ..InputEventOutcome::default()
            },
            _ => InputEventOutcome::default(),
        }
    }
}
