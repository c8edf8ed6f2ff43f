use std::time::Instant;

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::deck::ShellOptions;
use crate::event::AppEvent;
use crate::route::Route;

use super::core::{
    ScrollStep, focus_deck, next_slide, open_presentation, open_selected, prev_slide,
    return_to_catalog, scroll, select_step,
};
use super::types::{ActionId, Command, CommandOutcome};

/// Read-only inputs a command may need besides the mutable state.
#[derive(Clone, Copy)]
pub struct DispatchContext<'a> {
    pub catalog: &'a Catalog,
    pub shell_options: ShellOptions,
    pub now: Instant,
}

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

pub fn dispatch(
    app: &mut AppState,
    cmd: Command,
    ctx: &DispatchContext<'_>,
) -> CommandDispatchResult {
    let previous_route = app.route.clone();
    let previous_slide = app.slide_index();
    let action_id = cmd.action_id();

    let outcome = match cmd {
        Command::NextSlide => next_slide(app, ctx.now),
        Command::PrevSlide => prev_slide(app, ctx.now),
        Command::ExitDeck => return_to_catalog(app, ctx, ActionId::ExitDeck),
        Command::Back => return_to_catalog(app, ctx, ActionId::Back),
        Command::OpenPresentation { id } => {
            open_presentation(app, ctx, id, ActionId::OpenPresentation)
        }
        Command::SelectNext => select_step(app, ctx.catalog.len(), true),
        Command::SelectPrev => select_step(app, ctx.catalog.len(), false),
        Command::OpenSelected => open_selected(app, ctx),
        Command::ScrollUp => scroll(app, ScrollStep::Line(-1)),
        Command::ScrollDown => scroll(app, ScrollStep::Line(1)),
        Command::PageUp => scroll(app, ScrollStep::Page(-1)),
        Command::PageDown => scroll(app, ScrollStep::Page(1)),
        Command::FocusDeck => focus_deck(app),
        Command::Quit => {
            app.status.last_action_id = Some(ActionId::Quit);
            app.status.message = "quit requested".to_string();
            CommandOutcome::QuitRequested
        }
    };

    let mut emitted_events = collect_transition_events(app, previous_route, previous_slide);
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    CommandDispatchResult {
        outcome,
        emitted_events,
    }
}

fn collect_transition_events(
    app: &AppState,
    previous_route: Route,
    previous_slide: Option<usize>,
) -> Vec<AppEvent> {
    let mut events = Vec::new();
    if app.route != previous_route {
        events.push(AppEvent::RouteChanged {
            from: previous_route,
            to: app.route.clone(),
        });
        return events;
    }

    if let (Some(from), Some(to)) = (previous_slide, app.slide_index())
        && from != to
    {
        events.push(AppEvent::SlideChanged { from, to });
    }
    events
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use super::{DispatchContext, dispatch};
    use crate::app::{AppState, ViewKind};
    use crate::catalog::{Catalog, ContentTable, PresentationDescriptor, SlideDescriptor};
    use crate::command::{ActionId, Command, CommandOutcome};
    use crate::deck::ShellOptions;
    use crate::event::AppEvent;
    use crate::route::Route;

    fn deck(id: &str, slides: usize) -> PresentationDescriptor {
        PresentationDescriptor {
            id: id.to_string(),
            title: id.to_uppercase(),
            subtitle: None,
            slides: (0..slides)
                .map(|i| SlideDescriptor::new(format!("s{i}")))
                .collect(),
            renderer: Arc::new(ContentTable::default()),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![deck("alpha", 3), deck("beta", 1)]).expect("catalog should build")
    }

    fn ctx(catalog: &Catalog) -> DispatchContext<'_> {
        DispatchContext {
            catalog,
            shell_options: ShellOptions {
                motion_enabled: false,
                ..ShellOptions::default()
            },
            now: Instant::now(),
        }
    }

    #[test]
    fn open_presentation_changes_route_and_mounts_shell() {
        let catalog = catalog();
        let mut app = AppState::default();

        let result = dispatch(
            &mut app,
            Command::OpenPresentation {
                id: "alpha".to_string(),
            },
            &ctx(&catalog),
        );

        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(app.view_kind(), ViewKind::Deck);
        assert_eq!(app.slide_index(), Some(0));
        assert_eq!(
            result.emitted_events[0],
            AppEvent::RouteChanged {
                from: Route::Catalog,
                to: Route::deck("alpha"),
            }
        );
        assert_eq!(app.status.message, "opened ALPHA");
    }

    #[test]
    fn next_slide_emits_slide_changed_then_command_executed() {
        let catalog = catalog();
        let ctx = ctx(&catalog);
        let mut app = AppState::default();
        dispatch(&mut app, Command::OpenPresentation { id: "alpha".into() }, &ctx);

        let result = dispatch(&mut app, Command::NextSlide, &ctx);
        assert_eq!(
            result.emitted_events,
            vec![
                AppEvent::SlideChanged { from: 0, to: 1 },
                AppEvent::CommandExecuted {
                    id: ActionId::NextSlide,
                    outcome: CommandOutcome::Applied,
                },
            ]
        );
        assert_eq!(app.status.message, "slide 2 / 4");
    }

    #[test]
    fn navigation_at_edges_is_a_noop_without_slide_events() {
        let catalog = catalog();
        let ctx = ctx(&catalog);
        let mut app = AppState::default();
        dispatch(&mut app, Command::OpenPresentation { id: "beta".into() }, &ctx);

        let back = dispatch(&mut app, Command::PrevSlide, &ctx);
        assert_eq!(back.outcome, CommandOutcome::Noop);
        assert_eq!(back.emitted_events.len(), 1);

        dispatch(&mut app, Command::NextSlide, &ctx);
        let past_end = dispatch(&mut app, Command::NextSlide, &ctx);
        assert_eq!(past_end.outcome, CommandOutcome::Noop);
        assert_eq!(app.slide_index(), Some(1));
        assert_eq!(app.status.message, "already at last slide (2 / 2)");
    }

    #[test]
    fn exit_deck_returns_to_catalog_and_selects_the_deck() {
        let catalog = catalog();
        let ctx = ctx(&catalog);
        let mut app = AppState::default();
        dispatch(&mut app, Command::OpenPresentation { id: "beta".into() }, &ctx);

        let result = dispatch(&mut app, Command::ExitDeck, &ctx);
        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(app.route, Route::Catalog);
        assert_eq!(app.view_kind(), ViewKind::Catalog);
        assert_eq!(app.selected, 1);

        let again = dispatch(&mut app, Command::ExitDeck, &ctx);
        assert_eq!(again.outcome, CommandOutcome::Noop);
    }

    #[test]
    fn unknown_id_mounts_not_found_and_back_returns_home() {
        let catalog = catalog();
        let ctx = ctx(&catalog);
        let mut app = AppState::default();
        dispatch(
            &mut app,
            Command::OpenPresentation {
                id: "does-not-exist".into(),
            },
            &ctx,
        );
        assert_eq!(app.view_kind(), ViewKind::NotFound);

        let result = dispatch(&mut app, Command::Back, &ctx);
        assert_eq!(app.route.path(), "/");
        assert!(matches!(
            &result.emitted_events[0],
            AppEvent::RouteChanged { to: Route::Catalog, .. }
        ));
    }

    #[test]
    fn selection_is_clamped_and_open_selected_uses_it() {
        let catalog = catalog();
        let ctx = ctx(&catalog);
        let mut app = AppState::default();

        assert_eq!(
            dispatch(&mut app, Command::SelectPrev, &ctx).outcome,
            CommandOutcome::Noop
        );
        dispatch(&mut app, Command::SelectNext, &ctx);
        assert_eq!(
            dispatch(&mut app, Command::SelectNext, &ctx).outcome,
            CommandOutcome::Noop
        );
        assert_eq!(app.selected, 1);

        dispatch(&mut app, Command::OpenSelected, &ctx);
        assert_eq!(app.route, Route::deck("beta"));
    }

    #[test]
    fn reopening_a_deck_starts_at_the_cover() {
        let catalog = catalog();
        let ctx = ctx(&catalog);
        let mut app = AppState::default();
        dispatch(&mut app, Command::OpenPresentation { id: "alpha".into() }, &ctx);
        dispatch(&mut app, Command::NextSlide, &ctx);
        dispatch(&mut app, Command::NextSlide, &ctx);

        dispatch(&mut app, Command::OpenPresentation { id: "alpha".into() }, &ctx);
        assert_eq!(app.slide_index(), Some(0));
    }

    #[test]
    fn quit_is_reported_as_outcome() {
        let catalog = catalog();
        let mut app = AppState::default();
        let result = dispatch(&mut app, Command::Quit, &ctx(&catalog));
        assert_eq!(result.outcome, CommandOutcome::QuitRequested);
        assert_eq!(app.status.last_action_id, Some(ActionId::Quit));
    }
}
