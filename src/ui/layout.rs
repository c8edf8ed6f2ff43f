use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

pub const EXIT_LABEL: &str = "[x]";
pub const PREV_LABEL: &str = "[ ← Prev ]";
pub const NEXT_LABEL: &str = "[ Next → ]";
pub const BACK_LABEL: &str = "[ Back ]";

const CONTROLS_GAP: u16 = 2;
const STAGE_MARGIN_X: u16 = 2;
const CATALOG_MAX_WIDTH: u16 = 80;
/// Rows used by one catalog entry: title, details, spacer.
pub const CATALOG_ENTRY_ROWS: u16 = 3;
const NOT_FOUND_WIDTH: u16 = 56;
const NOT_FOUND_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsLayout {
    pub prev: Rect,
    pub indicator: Rect,
    pub next: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckLayout {
    pub exit_button: Rect,
    pub indicator: Rect,
    pub stage: Rect,
    pub controls: Option<ControlsLayout>,
}

/// Splits the terminal into the deck chrome and the slide stage.
///
/// `indicator_width` is the display width of the position text, which is
/// drawn both in the top-right corner and between the controls.
pub fn deck_layout(
    area: Rect,
    indicator_width: u16,
    stage_max_width: u16,
) -> DeckLayout {
    let top = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let exit_button = clip(
        Rect::new(top.x.saturating_add(1), top.y, label_width(EXIT_LABEL), top.height),
        top,
    );
    let indicator_x = area
        .right()
        .saturating_sub(indicator_width.saturating_add(1))
        .max(area.x);
    let indicator = clip(
        Rect::new(indicator_x, top.y, indicator_width, top.height),
        top,
    );

    let controls = (area.height >= 4).then(|| {
        let row = area.bottom() - 1;
        controls_layout(Rect::new(area.x, row, area.width, 1), indicator_width)
    });

    let stage_top = area.y.saturating_add(2).min(area.bottom());
    let stage_bottom = match controls {
        Some(_) => area.bottom().saturating_sub(2),
        None => area.bottom().saturating_sub(1),
    }
    .max(stage_top);
    let stage_width = area
        .width
        .saturating_sub(STAGE_MARGIN_X * 2)
        .min(stage_max_width)
        .max(area.width.min(1));
    let stage_x = area.x + area.width.saturating_sub(stage_width) / 2;
    let stage = Rect::new(stage_x, stage_top, stage_width, stage_bottom - stage_top);

    DeckLayout {
        exit_button,
        indicator,
        stage,
        controls,
    }
}

fn controls_layout(row: Rect, indicator_width: u16) -> ControlsLayout {
    let prev_width = label_width(PREV_LABEL);
    let next_width = label_width(NEXT_LABEL);
    let total = prev_width + CONTROLS_GAP + indicator_width + CONTROLS_GAP + next_width;
    let start = row.x + row.width.saturating_sub(total) / 2;

    let prev = Rect::new(start, row.y, prev_width, 1);
    let indicator = Rect::new(prev.right() + CONTROLS_GAP, row.y, indicator_width, 1);
    let next = Rect::new(indicator.right() + CONTROLS_GAP, row.y, next_width, 1);
    ControlsLayout {
        prev: clip(prev, row),
        indicator: clip(indicator, row),
        next: clip(next, row),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogLayout {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn catalog_layout(area: Rect) -> CatalogLayout {
    let width = area
        .width
        .saturating_sub(STAGE_MARGIN_X * 2)
        .min(CATALOG_MAX_WIDTH)
        .max(area.width.min(1));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let header = Rect::new(x, area.y.saturating_add(1).min(area.bottom()), width, 2)
        .intersection(area);
    let footer = Rect::new(x, area.bottom().saturating_sub(1), width, area.height.min(1));
    let list_top = header.bottom().saturating_add(1).min(footer.y);
    let list = Rect::new(x, list_top, width, footer.y.saturating_sub(list_top));
    CatalogLayout {
        header,
        list,
        footer,
    }
}

/// Number of entries that fit in the list area.
pub fn catalog_visible_entries(list: Rect) -> usize {
    usize::from(list.height / CATALOG_ENTRY_ROWS).max(1)
}

/// First visible entry so that `selected` stays on screen.
pub fn catalog_scroll_start(selected: usize, len: usize, visible: usize) -> usize {
    if len <= visible {
        return 0;
    }
    let max_start = len - visible;
    selected.saturating_sub(visible.saturating_sub(1)).min(max_start)
}

/// Rects of the visible entries, paired with their catalog index.
pub fn catalog_entry_rects(list: Rect, selected: usize, len: usize) -> Vec<(usize, Rect)> {
    let visible = catalog_visible_entries(list);
    let start = catalog_scroll_start(selected, len, visible);
    (start..len)
        .take(visible)
        .enumerate()
        .map(|(slot, index)| {
            let y = list.y + CATALOG_ENTRY_ROWS * slot as u16;
            let rect = Rect::new(list.x, y, list.width, CATALOG_ENTRY_ROWS - 1);
            (index, rect.intersection(list))
        })
        .filter(|(_, rect)| rect.height > 0)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundLayout {
    pub panel: Rect,
    pub back_button: Rect,
}

pub fn not_found_layout(area: Rect) -> NotFoundLayout {
    let panel = centered_rect(area, NOT_FOUND_WIDTH, NOT_FOUND_HEIGHT);
    let button_width = label_width(BACK_LABEL);
    let button_row = panel.bottom().saturating_sub(2).max(panel.y);
    let back_button = clip(
        Rect::new(
            panel.x + panel.width.saturating_sub(button_width) / 2,
            button_row,
            button_width,
            1,
        ),
        panel,
    );
    NotFoundLayout { panel, back_button }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub(crate) fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

pub(crate) fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    rect.intersection(bounds)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{
        CATALOG_ENTRY_ROWS, catalog_entry_rects, catalog_layout, catalog_scroll_start,
        centered_rect, deck_layout, hit, not_found_layout,
    };

    #[test]
    fn deck_layout_places_exit_left_and_indicator_right() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = deck_layout(area, 5, 80);

        assert_eq!(layout.exit_button, Rect::new(1, 0, 3, 1));
        assert_eq!(layout.indicator, Rect::new(94, 0, 5, 1));
        assert_eq!(layout.stage.width, 80);
        assert_eq!(layout.stage.x, 10);
        assert_eq!(layout.stage.y, 2);
        assert_eq!(layout.stage.bottom(), 28);

        let controls = layout.controls.expect("controls should be laid out");
        assert_eq!(controls.prev.y, 29);
        assert!(controls.prev.right() < controls.indicator.x);
        assert!(controls.indicator.right() < controls.next.x);
    }

    #[test]
    fn controls_are_laid_out_at_every_usable_height() {
        for height in 4..=40 {
            let area = Rect::new(0, 0, 60, height);
            let layout = deck_layout(area, 5, 200);
            let controls = layout
                .controls
                .unwrap_or_else(|| panic!("controls missing at height {height}"));
            assert_eq!(controls.prev.y, height - 1);
            assert!(layout.stage.bottom() <= controls.prev.y);
            assert_eq!(layout.stage.width, 56);
        }
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let layout = deck_layout(Rect::new(0, 0, 3, 2), 5, 80);
        assert!(layout.controls.is_none());
        assert_eq!(layout.stage.height, 0);
    }

    #[test]
    fn catalog_entries_follow_the_selection() {
        let layout = catalog_layout(Rect::new(0, 0, 80, 16));
        let visible = usize::from(layout.list.height / CATALOG_ENTRY_ROWS);

        let first = catalog_entry_rects(layout.list, 0, 10);
        assert_eq!(first.len(), visible);
        assert_eq!(first[0].0, 0);
        assert_eq!(first[0].1.y, layout.list.y);

        let last = catalog_entry_rects(layout.list, 9, 10);
        assert_eq!(last.last().map(|(index, _)| *index), Some(9));
    }

    #[test]
    fn scroll_start_keeps_selection_visible() {
        assert_eq!(catalog_scroll_start(0, 3, 5), 0);
        assert_eq!(catalog_scroll_start(2, 10, 3), 0);
        assert_eq!(catalog_scroll_start(4, 10, 3), 2);
        assert_eq!(catalog_scroll_start(9, 10, 3), 7);
    }

    #[test]
    fn not_found_button_sits_inside_the_panel() {
        let layout = not_found_layout(Rect::new(0, 0, 80, 24));
        assert!(hit(
            layout.panel,
            layout.back_button.x,
            layout.back_button.y
        ));
        assert_eq!(layout.back_button.width, 8);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(10, 5, 20, 8);
        let centered = centered_rect(area, 99, 99);
        assert_eq!(centered.x, 10);
        assert_eq!(centered.y, 5);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 8);
    }
}
