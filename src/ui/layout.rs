use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::GridViewport;

pub const CARD_HEIGHT: u16 = 5;

/// Main screen layout regions
pub struct ScreenLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title, tagline, controls
                Constraint::Min(CARD_HEIGHT),
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Column count for the card grid at this width
pub fn grid_columns(width: u16) -> usize {
    if width >= 120 {
        3
    } else if width >= 72 {
        2
    } else {
        1
    }
}

/// Card grid capacity of a dashboard area
pub fn grid_viewport(main: Rect) -> GridViewport {
    GridViewport {
        columns: grid_columns(main.width),
        visible_rows: (main.height / CARD_HEIGHT) as usize,
    }
}

/// Card grid capacity for a whole terminal of this size
pub fn screen_viewport(area: Rect) -> GridViewport {
    grid_viewport(ScreenLayout::new(area).main)
}

/// Card rectangles in row-major order. Only the rows that fit are laid out;
/// callers scroll to reach the rest.
pub fn card_grid(area: Rect, count: usize) -> Vec<Rect> {
    let cols = grid_columns(area.width);
    let rows = count.div_ceil(cols);
    let visible_rows = rows.min((area.height / CARD_HEIGHT) as usize);

    let mut row_constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
    row_constraints.push(Constraint::Min(0));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let col_constraints = vec![Constraint::Ratio(1, cols as u32); cols];
    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter().take(visible_rows) {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints.clone())
            .split(*row);
        for cell in col_areas.iter() {
            if cells.len() == count {
                break;
            }
            cells.push(*cell);
        }
    }
    cells
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_width() {
        assert_eq!(grid_columns(160), 3);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(40), 1);
    }

    #[test]
    fn grid_fits_all_cards_when_tall_enough() {
        let area = Rect::new(0, 0, 150, 40);
        let cells = card_grid(area, 10);
        assert_eq!(cells.len(), 10);
        assert_eq!(cells[0].height, CARD_HEIGHT);
        assert_eq!(cells[3].y, CARD_HEIGHT);
        assert!(cells.iter().all(|c| c.x + c.width <= area.width));
    }

    #[test]
    fn grid_drops_rows_that_do_not_fit() {
        let cells = card_grid(Rect::new(0, 0, 150, 12), 10);
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn standard_terminal_needs_scrolling() {
        let vp = screen_viewport(Rect::new(0, 0, 80, 24));
        assert_eq!(vp.columns, 2);
        assert_eq!(vp.visible_rows, 3);
        assert_eq!(vp.max_scroll(), 2);
        assert_eq!(screen_viewport(Rect::new(0, 0, 150, 30)).max_scroll(), 0);
    }

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect(40, 4, area);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
