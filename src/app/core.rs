use std::time::Instant;

use crate::catalog::Catalog;
use crate::command::{Command, CommandDispatchResult, DispatchContext, dispatch};
use crate::config::Config;
use crate::event::AppEvent;
use crate::route::Route;
use crate::ui::{FrameReport, Theme};

use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub catalog: Catalog,
    pub config: Config,
    pub theme: Theme,
}

impl App {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            state: AppState::default(),
            catalog,
            config,
            theme: Theme::default(),
        }
    }

    /// Builds the app already showing `route`.
    pub fn with_route(catalog: Catalog, config: Config, route: Route) -> Self {
        let mut app = Self::new(catalog, config);
        if let Route::Deck { id } = route {
            app.dispatch_command(Command::OpenPresentation { id }, Instant::now());
        }
        app
    }

    pub fn dispatch_command(&mut self, command: Command, now: Instant) -> CommandDispatchResult {
        let ctx = DispatchContext {
            catalog: &self.catalog,
            shell_options: self.config.motion.shell_options(),
            now,
        };
        dispatch(&mut self.state, command, &ctx)
    }

    pub(crate) fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::RouteChanged { from, to } => {
                tracing::info!(from = %from, to = %to, "route changed");
            }
            AppEvent::SlideChanged { from, to } => {
                tracing::debug!(from, to, "slide changed");
            }
            AppEvent::CommandExecuted { id, outcome } => {
                tracing::trace!(command = id.as_str(), ?outcome, "command executed");
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.state
            .shell()
            .is_some_and(|shell| shell.is_animating(now))
    }

    /// Feeds what the last frame measured back into the state.
    pub(crate) fn apply_frame_report(&mut self, report: FrameReport) {
        if let (Some(stage), Some(shell)) = (report.stage, self.state.shell_mut()) {
            shell
                .stage_mut()
                .set_overflow(stage.content_rows, stage.viewport_rows);
        }
    }
}
