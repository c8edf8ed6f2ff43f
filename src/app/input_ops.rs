use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::command::{ActionId, Command};
use crate::input::InputEventOutcome;
use crate::input::keymap::{KeymapPreset, map_key_to_command_with_preset};
use crate::input::pointer::map_mouse_to_commands;

use super::core::App;
use super::state::ViewKind;

impl App {
    /// Keys reach the deck only while it holds focus; quit always works.
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) -> InputEventOutcome {
        let view = self.state.view_kind();
        let preset = KeymapPreset::parse(&self.config.keymap.preset);
        let Some(command) = map_key_to_command_with_preset(key, view, preset) else {
            return InputEventOutcome::default();
        };

        if matches!(command, Command::Quit) {
            return InputEventOutcome {
                quit_requested: true,
                ..InputEventOutcome::default()
            };
        }

        let focused = self.state.shell().is_none_or(|shell| shell.is_focused());
        if view == ViewKind::Deck && !focused {
            tracing::debug!(?command, "key ignored while deck is unfocused");
            return InputEventOutcome::default();
        }

        InputEventOutcome {
            commands: vec![command],
            ..InputEventOutcome::default()
        }
    }

    pub(crate) fn handle_pointer_event(&mut self, mouse: MouseEvent, area: Rect) -> InputEventOutcome {
        InputEventOutcome {
            commands: map_mouse_to_commands(
                mouse,
                &self.state,
                &self.catalog,
                &self.config.deck,
                area,
            ),
            ..InputEventOutcome::default()
        }
    }

    /// Drops deck focus when the terminal loses it. Returns whether it changed.
    pub(crate) fn blur_deck(&mut self) -> bool {
        let Some(shell) = self.state.shell_mut() else {
            return false;
        };
        if !shell.blur() {
            return false;
        }
        self.state.status.last_action_id = Some(ActionId::Input);
        self.state.status.message = "deck lost focus".to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::catalog::Catalog;
    use crate::command::Command;
    use crate::config::Config;

    #[test]
    fn quit_key_requests_immediate_quit_without_command_requeue() {
        let mut app = App::new(Catalog::default(), Config::default());

        let outcome = app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));

        assert!(outcome.quit_requested);
        assert!(outcome.commands.is_empty());
        assert!(!outcome.redraw);
    }

    #[test]
    fn catalog_keys_do_not_need_focus() {
        let mut app = App::new(Catalog::default(), Config::default());
        let outcome = app.handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(outcome.commands, vec![Command::SelectNext]);
    }

    #[test]
    fn resize_requests_a_full_repaint() {
        let mut app = App::new(Catalog::default(), Config::default());
        let outcome = app.handle_input_event(Event::Resize(120, 40), Rect::new(0, 0, 120, 40));
        assert!(outcome.redraw);
        assert!(outcome.repaint);
        assert!(outcome.commands.is_empty());

        let outcome = app.handle_input_event(Event::FocusGained, Rect::new(0, 0, 120, 40));
        assert!(!outcome.repaint);
    }
}
