use macroquad::prelude::*;

use crate::domain::{Point, PointSet, Snapshot, coords};

// The original canvas contract: light gray grid lines, red fills while
// editing, blue fills during playback.
const GRID_LINE_COLOR: Color = Color::new(0.87, 0.87, 0.87, 1.0);
const EDITING_FILL: Color = Color::new(0.86, 0.20, 0.18, 1.0);
const PLAYBACK_FILL: Color = Color::new(0.15, 0.35, 0.85, 1.0);

/// Draw `board_size + 1` evenly spaced horizontal and vertical lines
/// forming a `board_size x board_size` cell grid.
pub fn draw_grid_lines(origin: (f32, f32), board_size: u32, cell_size: f32) {
    let (ox, oy) = origin;
    let extent = board_size as f32 * cell_size;
    for i in 0..=board_size {
        let offset = i as f32 * cell_size;
        draw_line(ox + offset, oy, ox + offset, oy + extent, 1.0, GRID_LINE_COLOR);
        draw_line(ox, oy + offset, ox + extent, oy + offset, 1.0, GRID_LINE_COLOR);
    }
}

/// Fill one cell using the same vertical-flip mapping as the coordinate
/// mapper: screen row = board_size - 1 - point.y.
fn fill_cell(origin: (f32, f32), point: &Point, board_size: u32, cell_size: f32, color: Color) {
    if point.x >= board_size || point.y >= board_size {
        return;
    }
    let (px, py) = coords::cell_to_screen(point.x, point.y, cell_size, board_size);
    draw_rectangle(origin.0 + px, origin.1 + py, cell_size, cell_size, color);
}

/// The editing surface: grid plus the user's selected points in red.
pub fn draw_editing_board(origin: (f32, f32), board_size: u32, cell_size: f32, points: &PointSet) {
    draw_grid_lines(origin, board_size, cell_size);
    for point in points.iter() {
        fill_cell(origin, point, board_size, cell_size, EDITING_FILL);
    }
}

/// The playback surface: grid plus the current snapshot's live cells in
/// blue. An absent snapshot (empty sequence) draws only the grid.
pub fn draw_playback_board(
    origin: (f32, f32),
    board_size: u32,
    cell_size: f32,
    snapshot: Option<&Snapshot>,
) {
    draw_grid_lines(origin, board_size, cell_size);
    if let Some(snapshot) = snapshot {
        for point in snapshot.points() {
            fill_cell(origin, point, board_size, cell_size, PLAYBACK_FILL);
        }
    }
}

/// Heading line above the board.
pub fn draw_heading(text: &str) {
    draw_text(text, crate::ui::MARGIN, crate::ui::MARGIN + 20.0, 26.0, BLACK);
}

/// Status line directly under the board.
pub fn draw_status(text: &str, origin: (f32, f32), board_px: f32, color: Color) {
    draw_text(text, origin.0, origin.1 + board_px + 28.0, 18.0, color);
}
