use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{AppState, View};
use crate::catalog::Catalog;
use crate::command::Command;
use crate::config::DeckConfig;
use crate::ui;

/// What a pointer position lands on in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    ExitButton,
    PrevButton,
    NextButton,
    CatalogEntry(usize),
    BackButton,
    /// Anywhere else inside the deck shell.
    Shell,
    Nothing,
}

pub fn hit_test(
    app: &AppState,
    catalog: &Catalog,
    config: &DeckConfig,
    area: Rect,
    column: u16,
    row: u16,
) -> PointerTarget {
    match &app.view {
        View::Deck(shell) => {
            let layout = ui::deck_layout_for(area, shell, config);
            if ui::hit(layout.exit_button, column, row) {
                return PointerTarget::ExitButton;
            }
            if let Some(controls) = layout.controls {
                if ui::hit(controls.prev, column, row) {
                    return PointerTarget::PrevButton;
                }
                if ui::hit(controls.next, column, row) {
                    return PointerTarget::NextButton;
                }
            }
            PointerTarget::Shell
        }
        View::Catalog => {
            let list = ui::catalog_layout(area).list;
            ui::catalog_entry_rects(list, app.selected, catalog.len())
                .into_iter()
                .find(|(_, rect)| ui::hit(*rect, column, row))
                .map_or(PointerTarget::Nothing, |(index, _)| {
                    PointerTarget::CatalogEntry(index)
                })
        }
        View::NotFound { .. } => {
            if ui::hit(ui::not_found_layout(area).back_button, column, row) {
                PointerTarget::BackButton
            } else {
                PointerTarget::Nothing
            }
        }
    }
}

/// Turns a mouse event into commands, in the order they must run.
///
/// Any press inside the deck re-acquires focus before acting on the target.
pub fn map_mouse_to_commands(
    mouse: MouseEvent,
    app: &AppState,
    catalog: &Catalog,
    config: &DeckConfig,
    area: Rect,
) -> Vec<Command> {
    let in_deck = matches!(app.view, View::Deck(_));
    match mouse.kind {
        MouseEventKind::ScrollUp if in_deck => vec![Command::ScrollUp],
        MouseEventKind::ScrollDown if in_deck => vec![Command::ScrollDown],
        MouseEventKind::ScrollUp if matches!(app.view, View::Catalog) => vec![Command::SelectPrev],
        MouseEventKind::ScrollDown if matches!(app.view, View::Catalog) => {
            vec![Command::SelectNext]
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let target = hit_test(app, catalog, config, area, mouse.column, mouse.row);
            let mut commands = Vec::new();
            if in_deck {
                commands.push(Command::FocusDeck);
            }
            match target {
                PointerTarget::ExitButton => commands.push(Command::ExitDeck),
                PointerTarget::PrevButton => commands.push(Command::PrevSlide),
                PointerTarget::NextButton => commands.push(Command::NextSlide),
                PointerTarget::CatalogEntry(index) => {
                    if let Some(presentation) = catalog.get(index) {
                        commands.push(Command::OpenPresentation {
                            id: presentation.id.clone(),
                        });
                    }
                }
                PointerTarget::BackButton => commands.push(Command::Back),
                PointerTarget::Shell | PointerTarget::Nothing => {}
            }
            commands
        }
        _ => Vec::new(),
    }
}
