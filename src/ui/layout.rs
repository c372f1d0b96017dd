use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Minimum card width in cells, borders included.
pub const CARD_WIDTH: u16 = 32;
/// Card height in cells: border + title + author + cover.
pub const CARD_HEIGHT: u16 = 5;

/// The areas of the main browsing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub grid: Rect,
    pub button: Rect,
    pub status: Rect,
}

/// Layout: header(3) + grid(min) + show-more button(3) + status(1)
pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    MainLayout {
        header: chunks[0],
        grid: chunks[1],
        button: chunks[2],
        status: chunks[3],
    }
}

/// Area inside the grid's border.
pub fn grid_inner(grid: Rect) -> Rect {
    grid.inner(Margin::new(1, 1))
}

/// Cards per row that fit in the grid.
pub fn grid_columns(grid: Rect) -> usize {
    (grid_inner(grid).width / CARD_WIDTH).max(1) as usize
}

/// Whole card rows that fit in the grid.
pub fn grid_rows(grid: Rect) -> usize {
    (grid_inner(grid).height / CARD_HEIGHT).max(1) as usize
}

/// Rect of the card in visible slot `slot`, with cards stretched to share
/// the row evenly. `None` if the slot falls outside the grid.
pub fn card_rect(grid: Rect, columns: usize, slot: usize) -> Option<Rect> {
    let inner = grid_inner(grid);
    let columns = columns.max(1);
    let width = inner.width / columns as u16;
    let col = (slot % columns) as u16;
    let row = (slot / columns) as u16;
    let y = inner.y + row * CARD_HEIGHT;
    if width == 0 || y + CARD_HEIGHT > inner.y + inner.height {
        return None;
    }
    Some(Rect::new(inner.x + col * width, y, width, CARD_HEIGHT))
}

/// Visible slot under the point `(x, y)`, if any.
pub fn hit_card(grid: Rect, columns: usize, x: u16, y: u16) -> Option<usize> {
    let inner = grid_inner(grid);
    if !inner.contains(Position::new(x, y)) {
        return None;
    }
    let columns = columns.max(1);
    let width = inner.width / columns as u16;
    if width == 0 {
        return None;
    }
    let col = ((x - inner.x) / width) as usize;
    let row = ((y - inner.y) / CARD_HEIGHT) as usize;
    if col >= columns || row >= grid_rows(grid) {
        return None;
    }
    Some(row * columns + col)
}

/// Create a centered rectangle using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_rows() {
        let layout = main_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.button.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.grid.height, 23);
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = Rect::new(0, 3, 100, 23);
        assert_eq!(grid_columns(grid), 3);
        assert_eq!(grid_rows(grid), 4);
        assert_eq!(grid_columns(Rect::new(0, 0, 10, 10)), 1);
    }

    #[test]
    fn test_card_rect_and_hit_agree() {
        let grid = Rect::new(0, 3, 100, 23);
        let columns = grid_columns(grid);
        for slot in 0..columns * grid_rows(grid) {
            let rect = card_rect(grid, columns, slot).unwrap();
            assert_eq!(hit_card(grid, columns, rect.x + 1, rect.y + 1), Some(slot));
        }
        assert!(card_rect(grid, columns, columns * grid_rows(grid)).is_none());
    }

    #[test]
    fn test_hit_outside_grid() {
        let grid = Rect::new(0, 3, 100, 23);
        assert_eq!(hit_card(grid, 3, 0, 3), None);
        assert_eq!(hit_card(grid, 3, 50, 0), None);
        // last row of the inner area is left over, not part of a card
        assert_eq!(hit_card(grid, 3, 5, 24), None);
    }
}
