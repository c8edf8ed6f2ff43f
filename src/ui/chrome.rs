use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::deck::DeckShell;

use super::layout::{DeckLayout, EXIT_LABEL, NEXT_LABEL, PREV_LABEL};
use super::text::{display_width, truncate};
use super::theme::Theme;

const UNFOCUSED_HINT: &str = "click to focus";

/// Draws everything around the stage: exit button, title, position
/// indicator and the Previous/Next controls.
pub fn draw_deck_chrome(frame: &mut Frame<'_>, layout: DeckLayout, shell: &DeckShell, theme: &Theme) {
    let indicator = shell.indicator();

    frame.render_widget(
        Paragraph::new(EXIT_LABEL).style(theme.bold(theme.foreground)),
        layout.exit_button,
    );
    frame.render_widget(
        Paragraph::new(indicator.as_str()).style(theme.text(theme.muted)),
        layout.indicator,
    );

    let title_x = layout.exit_button.right().saturating_add(2);
    let title_area = Rect::new(
        title_x,
        layout.exit_button.y,
        layout.indicator.x.saturating_sub(title_x + 1),
        layout.exit_button.height,
    );
    if title_area.width > 0 {
        let mut spans = Vec::new();
        let budget = usize::from(title_area.width);
        let title = truncate(&shell.presentation().title, budget);
        let used = display_width(&title);
        spans.push(Span::styled(title, theme.text(theme.muted)));
        if !shell.is_focused() && used + 3 + UNFOCUSED_HINT.len() <= budget {
            spans.push(Span::raw(" · "));
            spans.push(Span::styled(UNFOCUSED_HINT, theme.text(theme.callout)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), title_area);
    }

    if let Some(controls) = layout.controls {
        frame.render_widget(
            Paragraph::new(PREV_LABEL).style(theme.bold(theme.accent)),
            controls.prev,
        );
        frame.render_widget(
            Paragraph::new(indicator.as_str()).style(theme.text(theme.muted)),
            controls.indicator,
        );
        frame.render_widget(
            Paragraph::new(NEXT_LABEL).style(theme.bold(theme.accent)),
            controls.next,
        );
    }
}
