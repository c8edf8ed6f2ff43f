use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::catalog::Catalog;

use super::layout::{catalog_entry_rects, catalog_layout};
use super::text::truncate;
use super::theme::Theme;

const HEADING: &str = "Presentations";
const HINT: &str = "↑↓ select · Enter open · q quit";

pub fn draw_catalog(
    frame: &mut Frame<'_>,
    area: Rect,
    catalog: &Catalog,
    selected: usize,
    status: &str,
    theme: &Theme,
) {
    let layout = catalog_layout(area);

    let count = match catalog.len() {
        1 => "1 presentation".to_string(),
        n => format!("{n} presentations"),
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(HEADING, theme.bold(theme.foreground))),
            Line::from(Span::styled(count, theme.text(theme.muted))),
        ]),
        layout.header,
    );

    if catalog.is_empty() {
        frame.render_widget(
            Paragraph::new("No presentations.").style(theme.text(theme.muted)),
            layout.list,
        );
    }

    for (index, rect) in catalog_entry_rects(layout.list, selected, catalog.len()) {
        let Some(presentation) = catalog.get(index) else {
            continue;
        };
        let is_selected = index == selected;
        let width = usize::from(rect.width.saturating_sub(2));

        let marker = if is_selected { "┃ " } else { "  " };
        let title_style = if is_selected {
            theme.bold(theme.accent)
        } else {
            theme.bold(theme.foreground)
        };
        let mut details = vec![presentation.id.clone()];
        if let Some(subtitle) = &presentation.subtitle {
            details.push(subtitle.clone());
        }
        details.push(match presentation.slide_count() {
            1 => "1 slide".to_string(),
            n => format!("{n} slides"),
        });

        let lines = vec![
            Line::from(vec![
                Span::styled(marker, theme.text(theme.accent)),
                Span::styled(truncate(&presentation.title, width), title_style),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    truncate(&details.join(" · "), width),
                    theme.text(theme.muted),
                ),
            ]),
        ];
        let mut entry = Paragraph::new(lines);
        if is_selected {
            entry = entry.style(theme.text(theme.foreground).bg(theme.selection));
        }
        frame.render_widget(entry, rect);
    }

    frame.render_widget(
        Paragraph::new(HINT).style(theme.text(theme.muted)),
        layout.footer,
    );
    if !status.is_empty() {
        frame.render_widget(
            Paragraph::new(status)
                .style(theme.text(theme.border))
                .alignment(Alignment::Right),
            layout.footer,
        );
    }
}
