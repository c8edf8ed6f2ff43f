use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::layout::{BACK_LABEL, not_found_layout};
use super::theme::Theme;

pub fn draw_not_found(frame: &mut Frame<'_>, area: Rect, id: &str, theme: &Theme) {
    let layout = not_found_layout(area);
    if layout.panel.width == 0 || layout.panel.height == 0 {
        return;
    }
    frame.render_widget(Clear, layout.panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text(theme.border));
    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);

    let message = Paragraph::new(vec![
        Line::styled("Not found", theme.bold(theme.foreground)),
        Line::default(),
        Line::styled(
            format!("No presentation with id \"{id}\"."),
            theme.text(theme.muted),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(message, inner);

    frame.render_widget(
        Paragraph::new(BACK_LABEL).style(theme.bold(theme.accent)),
        layout.back_button,
    );
}
