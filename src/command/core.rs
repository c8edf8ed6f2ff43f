use std::time::Instant;

use crate::app::{AppState, View};
use crate::deck::DeckShell;
use crate::route::Route;

use super::dispatch::DispatchContext;
use super::types::{ActionId, CommandOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollStep {
    Line(i32),
    Page(i32),
}

/// Resolves `route` against the catalog and mounts the matching view.
///
/// Entering a deck always mounts a fresh shell at the cover, even when the
/// same presentation was already showing.
pub(crate) fn navigate(app: &mut AppState, ctx: &DispatchContext<'_>, route: Route) {
    if let (Route::Catalog, Some(id)) = (&route, app.route.deck_id())
        && let Some(position) = ctx.catalog.position(id)
    {
        app.selected = position;
    }

    app.view = match &route {
        Route::Catalog => View::Catalog,
        Route::Deck { id } => match ctx.catalog.find(id) {
            Some(presentation) => View::Deck(Box::new(DeckShell::mount(
                presentation.clone(),
                ctx.shell_options,
                ctx.now,
            ))),
            None => {
                tracing::warn!(id = %id, "no presentation with this id");
                View::NotFound { id: id.clone() }
            }
        },
    };
    app.route = route;
}

pub(crate) fn next_slide(app: &mut AppState, now: Instant) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::NextSlide);
    let Some(shell) = app.shell_mut() else {
        app.status.message = "no deck open".to_string();
        return CommandOutcome::Noop;
    };

    let moved = shell.advance(now);
    let indicator = shell.indicator();
    if !moved {
        app.status.message = format!("already at last slide ({indicator})");
        return CommandOutcome::Noop;
    }
    app.status.message = format!("slide {indicator}");
    CommandOutcome::Applied
}

pub(crate) fn prev_slide(app: &mut AppState, now: Instant) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::PrevSlide);
    let Some(shell) = app.shell_mut() else {
        app.status.message = "no deck open".to_string();
        return CommandOutcome::Noop;
    };

    let moved = shell.retreat(now);
    let indicator = shell.indicator();
    if !moved {
        app.status.message = "already at cover slide".to_string();
        return CommandOutcome::Noop;
    }
    app.status.message = format!("slide {indicator}");
    CommandOutcome::Applied
}

pub(crate) fn return_to_catalog(
    app: &mut AppState,
    ctx: &DispatchContext<'_>,
    action: ActionId,
) -> CommandOutcome {
    app.status.last_action_id = Some(action);
    if app.route == Route::Catalog {
        app.status.message = "already at catalog".to_string();
        return CommandOutcome::Noop;
    }
    navigate(app, ctx, Route::Catalog);
    app.status.message = "back to catalog".to_string();
    CommandOutcome::Applied
}

pub(crate) fn open_presentation(
    app: &mut AppState,
    ctx: &DispatchContext<'_>,
    id: String,
    action: ActionId,
) -> CommandOutcome {
    app.status.last_action_id = Some(action);
    navigate(app, ctx, Route::deck(id));
    let message = match &app.view {
        View::Deck(shell) => format!("opened {}", shell.presentation().title),
        View::NotFound { id } => format!("presentation not found: {id}"),
        View::Catalog => String::new(),
    };
    app.status.message = message;
    CommandOutcome::Applied
}

pub(crate) fn open_selected(app: &mut AppState, ctx: &DispatchContext<'_>) -> CommandOutcome {
    let Some(presentation) = ctx.catalog.get(app.selected) else {
        app.status.last_action_id = Some(ActionId::OpenSelected);
        app.status.message = "catalog is empty".to_string();
        return CommandOutcome::Noop;
    };
    open_presentation(app, ctx, presentation.id.clone(), ActionId::OpenSelected)
}

pub(crate) fn select_step(
    app: &mut AppState,
    catalog_len: usize,
    forward: bool,
) -> CommandOutcome {
    let action = if forward {
        ActionId::SelectNext
    } else {
        ActionId::SelectPrev
    };
    app.status.last_action_id = Some(action);
    if catalog_len == 0 {
        app.status.message = "catalog is empty".to_string();
        return CommandOutcome::Noop;
    }

    let current = app.selected.min(catalog_len - 1);
    let next = if forward {
        (current + 1).min(catalog_len - 1)
    } else {
        current.saturating_sub(1)
    };
    if next == app.selected {
        return CommandOutcome::Noop;
    }
    app.selected = next;
    app.status.message = format!("selected {}/{catalog_len}", next + 1);
    CommandOutcome::Applied
}

pub(crate) fn scroll(app: &mut AppState, step: ScrollStep) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::Scroll);
    let Some(shell) = app.shell_mut() else {
        return CommandOutcome::Noop;
    };

    let stage = shell.stage_mut();
    let delta = match step {
        ScrollStep::Line(lines) => lines,
        ScrollStep::Page(pages) => pages * i32::from(stage.page_rows()),
    };
    if !stage.scroll_by(delta) {
        return CommandOutcome::Noop;
    }
    let offset = stage.scroll();
    app.status.message = format!("scrolled to row {offset}");
    CommandOutcome::Applied
}

pub(crate) fn focus_deck(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::FocusDeck);
    let Some(shell) = app.shell_mut() else {
        return CommandOutcome::Noop;
    };
    let gained = shell.focus();
    if !gained {
        return CommandOutcome::Noop;
    }
    app.status.message = "deck focused".to_string();
    CommandOutcome::Applied
}
