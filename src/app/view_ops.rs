use std::time::Instant;

use ratatui::layout::Rect;

use crate::error::AppResult;
use crate::ui::{self, FrameReport};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn terminal_area<S: TerminalSurface>(session: &S) -> AppResult<Rect> {
        Ok(session.size()?.into())
    }

    /// Draws one frame. Returns true when the frame's measurements changed
    /// state, so another frame is needed.
    pub(crate) fn render_frame(
        &mut self,
        session: &mut impl TerminalSurface,
        now: Instant,
    ) -> AppResult<bool> {
        let mut report = FrameReport::default();
        let state = &self.state;
        let catalog = &self.catalog;
        let deck_config = &self.config.deck;
        let theme = &self.theme;
        session.draw(|frame| {
            report = ui::draw(frame, state, catalog, deck_config, theme, now);
        })?;

        let scroll_before = self.stage_scroll();
        self.apply_frame_report(report);
        Ok(self.stage_scroll() != scroll_before)
    }

    /// Clears the surface first, for when the terminal's own contents can no
    /// longer be trusted (after a resize).
    pub(crate) fn repaint_frame(
        &mut self,
        session: &mut impl TerminalSurface,
        now: Instant,
    ) -> AppResult<bool> {
        session.clear()?;
        self.render_frame(session, now)
    }

    fn stage_scroll(&self) -> Option<u16> {
        self.state.shell().map(|shell| shell.stage().scroll())
    }
}
