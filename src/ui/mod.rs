mod catalog;
mod chrome;
mod layout;
mod not_found;
mod stage;
mod text;
mod theme;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Block;

use crate::app::{AppState, View};
use crate::catalog::Catalog;
use crate::config::DeckConfig;
use crate::deck::DeckShell;

pub use catalog::draw_catalog;
pub use chrome::draw_deck_chrome;
pub use layout::{
    BACK_LABEL, CatalogLayout, ControlsLayout, DeckLayout, EXIT_LABEL, NEXT_LABEL,
    NotFoundLayout, PREV_LABEL, catalog_entry_rects, catalog_layout, deck_layout,
    not_found_layout,
};
pub use not_found::draw_not_found;
pub use stage::{StageReport, content_lines, draw_stage};
pub use text::{truncate, wrap};
pub use theme::Theme;

pub(crate) use layout::{hit, label_width};

/// What a frame learned while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub stage: Option<StageReport>,
}

/// Lays out the deck view for `area`, sizing the indicator to `shell`.
pub fn deck_layout_for(area: Rect, shell: &DeckShell, config: &DeckConfig) -> DeckLayout {
    deck_layout(
        area,
        label_width(&shell.indicator()),
        config.stage_max_width,
    )
}

pub fn draw(
    frame: &mut Frame<'_>,
    app: &AppState,
    catalog: &Catalog,
    config: &DeckConfig,
    theme: &Theme,
    now: Instant,
) -> FrameReport {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    match &app.view {
        View::Catalog => {
            draw_catalog(
                frame,
                area,
                catalog,
                app.selected,
                &app.status.message,
                theme,
            );
            FrameReport::default()
        }
        View::NotFound { id } => {
            draw_not_found(frame, area, id, theme);
            FrameReport::default()
        }
        View::Deck(shell) => {
            let layout = deck_layout_for(area, shell, config);
            draw_deck_chrome(frame, layout, shell, theme);
            let content = shell.current_content();
            let report = draw_stage(frame, layout.stage, &content, shell.stage(), theme, now);
            FrameReport {
                stage: Some(report),
            }
        }
    }
}
