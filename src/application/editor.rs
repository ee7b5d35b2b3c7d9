use crate::domain::{Point, PointSet, coords};

/// Interactive editor for the optional initial board state. Clicks are
/// mapped to logical cells and collected into a deduplicated set; there
/// is no way to remove a point once added.
pub struct PointSetEditor {
    board_size: u32,
    cell_size: f32,
    points: PointSet,
}

impl PointSetEditor {
    pub fn new(board_size: u32, cell_size: f32) -> Self {
        Self {
            board_size,
            cell_size,
            points: PointSet::new(),
        }
    }

    /// Map a click (in board-local pixels) to a logical point and insert
    /// it. Out-of-bounds clicks and already-selected cells change
    /// nothing; returns whether the set grew.
    pub fn add_point(&mut self, click_x: f32, click_y: f32) -> bool {
        let (col, row) = coords::screen_to_cell(click_x, click_y, self.cell_size, self.board_size);
        let bound = self.board_size as i64;
        if col < 0 || row < 0 || col >= bound || row >= bound {
            return false;
        }
        self.points.insert(Point::new(col as u32, row as u32))
    }

    /// Number of selected points, for display.
    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }
}
