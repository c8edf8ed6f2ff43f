use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::ViewKind;
use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, view: ViewKind) -> Option<Command> {
    map_key_to_command_with_preset(key, view, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    view: ViewKind,
    preset: KeymapPreset,
) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    if key.code == KeyCode::Char('q') {
        return Some(Command::Quit);
    }

    match view {
        ViewKind::Deck => match preset {
            KeymapPreset::Default => map_deck_key_default(key),
            KeymapPreset::Vim => map_deck_key_vim(key),
        },
        ViewKind::Catalog => match preset {
            KeymapPreset::Default => map_catalog_key_default(key),
            KeymapPreset::Vim => map_catalog_key_vim(key),
        },
        ViewKind::NotFound => map_not_found_key(key),
    }
}

fn map_deck_key_default(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(Command::NextSlide),
        KeyCode::Left => Some(Command::PrevSlide),
        KeyCode::Esc => Some(Command::ExitDeck),
        KeyCode::Up => Some(Command::ScrollUp),
        KeyCode::Down => Some(Command::ScrollDown),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        _ => None,
    }
}

fn map_deck_key_vim(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('l') => Some(Command::NextSlide),
        KeyCode::Char('h') => Some(Command::PrevSlide),
        KeyCode::Char('j') => Some(Command::ScrollDown),
        KeyCode::Char('k') => Some(Command::ScrollUp),
        _ => map_deck_key_default(key),
    }
}

fn map_catalog_key_default(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up => Some(Command::SelectPrev),
        KeyCode::Down => Some(Command::SelectNext),
        KeyCode::Enter => Some(Command::OpenSelected),
        _ => None,
    }
}

fn map_catalog_key_vim(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('j') => Some(Command::SelectNext),
        KeyCode::Char('k') => Some(Command::SelectPrev),
        _ => map_catalog_key_default(key),
    }
}

fn map_not_found_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => Some(Command::Back),
        _ => None,
    }
}
