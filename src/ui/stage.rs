use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::catalog::{Block, SlideContent};
use crate::deck::SlideContainer;
use crate::motion::Pose;

use super::text::{display_width, truncate, wrap};
use super::theme::Theme;

const CENTER_STYLE: &str = "center";

/// Content height versus visible rows, fed back into scroll clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    pub content_rows: u16,
    pub viewport_rows: u16,
}

pub fn draw_stage(
    frame: &mut Frame<'_>,
    area: Rect,
    content: &SlideContent,
    stage: &SlideContainer,
    theme: &Theme,
    now: Instant,
) -> StageReport {
    let centered = stage.style() == Some(CENTER_STYLE);
    let full = content_lines(content, area.width, theme);
    let report = StageReport {
        content_rows: u16::try_from(full.len()).unwrap_or(u16::MAX),
        viewport_rows: area.height,
    };
    if area.width == 0 || area.height == 0 {
        return report;
    }

    let pose = stage.pose(now);
    let posed = posed_area(area, pose);
    if posed.rect.width == 0 || posed.rect.height == 0 || pose.opacity <= 0.0 {
        return report;
    }

    let mut lines = if posed.wrap_width == area.width {
        full
    } else {
        content_lines(content, posed.wrap_width, theme)
    };
    for line in &mut lines {
        for span in &mut line.spans {
            span.style = theme.fade_style(span.style, pose.opacity);
        }
    }

    let mut target = posed.rect;
    let rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    if centered && rows < target.height {
        let pad = (target.height - rows) / 2;
        target.y += pad;
        target.height -= pad;
    }

    let alignment = if centered {
        Alignment::Center
    } else {
        Alignment::Left
    };
    let paragraph = Paragraph::new(lines)
        .alignment(alignment)
        .scroll((stage.scroll(), 0));
    frame.render_widget(paragraph, target);
    report
}

/// Lays out slide content as pre-wrapped lines at `width` columns.
pub fn content_lines(content: &SlideContent, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    if let Some(kicker) = &content.kicker {
        push_wrapped(
            &mut lines,
            &kicker.to_uppercase(),
            width,
            theme.bold(theme.kicker),
        );
        lines.push(Line::default());
    }
    if let Some(title) = &content.title {
        push_wrapped(&mut lines, title, width, theme.bold(theme.foreground));
        lines.push(Line::default());
    }
    if let Some(lead) = &content.lead {
        push_wrapped(&mut lines, lead, width, theme.text(theme.muted));
        lines.push(Line::default());
    }

    for block in &content.blocks {
        push_block(&mut lines, block, width, theme);
        lines.push(Line::default());
    }

    if let Some(footer) = &content.footer {
        push_wrapped(
            &mut lines,
            footer,
            width,
            theme.text(theme.muted).add_modifier(Modifier::ITALIC),
        );
    }

    while lines.last().is_some_and(|line| line.width() == 0) {
        lines.pop();
    }
    lines
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &Block, width: usize, theme: &Theme) {
    match block {
        Block::Text { text } => push_wrapped(lines, text, width, theme.text(theme.foreground)),
        Block::Bullets { heading, items } => {
            if let Some(heading) = heading {
                push_wrapped(lines, heading, width, theme.bold(theme.accent));
            }
            for item in items {
                push_hanging(
                    lines,
                    item,
                    width,
                    ("• ", theme.text(theme.accent)),
                    theme.text(theme.foreground),
                );
            }
        }
        Block::Tags { items } => push_tags(lines, items, width, theme),
        Block::Cards { cards } => {
            for (index, card) in cards.iter().enumerate() {
                if index > 0 {
                    lines.push(Line::default());
                }
                push_hanging(
                    lines,
                    &card.title,
                    width,
                    ("▍ ", theme.text(theme.accent)),
                    theme.bold(theme.foreground),
                );
                for point in &card.points {
                    push_hanging(
                        lines,
                        point,
                        width,
                        ("  · ", theme.text(theme.border)),
                        theme.text(theme.muted),
                    );
                }
            }
        }
        Block::Steps { steps } => {
            for (index, step) in steps.iter().enumerate() {
                let marker = format!("{}. ", index + 1);
                push_hanging(
                    lines,
                    &step.title,
                    width,
                    (marker.as_str(), theme.bold(theme.accent)),
                    theme.bold(theme.foreground),
                );
                if let Some(detail) = &step.detail {
                    let indent = " ".repeat(display_width(&marker));
                    push_hanging(
                        lines,
                        detail,
                        width,
                        (indent.as_str(), Style::default()),
                        theme.text(theme.muted),
                    );
                }
            }
        }
        Block::Metrics { items } => {
            let value_width = items
                .iter()
                .map(|metric| display_width(&metric.value))
                .max()
                .unwrap_or(0);
            for metric in items {
                let pad = value_width.saturating_sub(display_width(&metric.value));
                let value = format!("{}{}  ", " ".repeat(pad), metric.value);
                push_hanging(
                    lines,
                    &metric.label,
                    width,
                    (value.as_str(), theme.bold(theme.accent)),
                    theme.text(theme.muted),
                );
            }
        }
        Block::Code { lines: code } => {
            let body_width = width.saturating_sub(2);
            for line in code {
                lines.push(Line::from(vec![
                    Span::styled("│ ", theme.text(theme.border)),
                    Span::styled(truncate(line, body_width), theme.text(theme.code)),
                ]));
            }
        }
        Block::Callout { text } => push_hanging(
            lines,
            text,
            width,
            ("┃ ", theme.text(theme.callout)),
            theme.text(theme.callout),
        ),
    }
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for row in wrap(text, width) {
        lines.push(Line::from(Span::styled(row, style)));
    }
}

/// Wraps `text` after a marker; continuation rows are indented to match.
fn push_hanging(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    marker: (&str, Style),
    style: Style,
) {
    let (marker, marker_style) = marker;
    let indent = display_width(marker);
    let body_width = width.saturating_sub(indent).max(1);
    for (index, row) in wrap(text, body_width).into_iter().enumerate() {
        let lead = if index == 0 {
            Span::styled(marker.to_string(), marker_style)
        } else {
            Span::raw(" ".repeat(indent))
        };
        lines.push(Line::from(vec![lead, Span::styled(row, style)]));
    }
}

fn push_tags(lines: &mut Vec<Line<'static>>, items: &[String], width: usize, theme: &Theme) {
    let style = theme.text(theme.accent);
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for item in items {
        let chip = truncate(&format!("[{item}]"), width);
        let chip_width = display_width(&chip);
        let gap = if spans.is_empty() { 0 } else { 1 };
        if used + gap + chip_width > width && !spans.is_empty() {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        } else if gap > 0 {
            spans.push(Span::raw(" "));
            used += gap;
        }
        used += chip_width;
        spans.push(Span::styled(chip, style));
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PosedArea {
    rect: Rect,
    wrap_width: u16,
}

/// Scales the stage around its centre, then shifts it by the pose offsets.
/// Whatever moves past the stage edges is clipped.
fn posed_area(area: Rect, pose: Pose) -> PosedArea {
    let scale = pose.scale.clamp(0.0, 1.0);
    let width = (f32::from(area.width) * scale).round() as u16;
    let height = (f32::from(area.height) * scale).round() as u16;
    let x = i32::from(area.x)
        + i32::from(area.width.saturating_sub(width) / 2)
        + pose.offset_x.round() as i32;
    let y = i32::from(area.y)
        + i32::from(area.height.saturating_sub(height) / 2)
        + pose.offset_y.round() as i32;

    let left = x.max(i32::from(area.x));
    let top = y.max(i32::from(area.y));
    let right = (x + i32::from(width)).min(i32::from(area.right()));
    let bottom = (y + i32::from(height)).min(i32::from(area.bottom()));
    let rect = if right <= left || bottom <= top {
        Rect::new(area.x, area.y, 0, 0)
    } else {
        Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        )
    };
    PosedArea {
        rect,
        wrap_width: width,
    }
}
