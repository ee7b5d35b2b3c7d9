/// Pure conversion between pixel space and logical cell space.
///
/// Pixel y grows downward while logical row 0 is the bottom-most board
/// row, so both directions flip the vertical axis. Floor semantics
/// throughout; the two functions are exact inverses for integer cell
/// coordinates within bounds.

/// Convert a pixel position (relative to the board origin) to a logical
/// (col, row) cell. Results may be out of bounds or negative for clicks
/// outside the board; callers bounds-check.
pub fn screen_to_cell(px: f32, py: f32, cell_size: f32, board_size: u32) -> (i64, i64) {
    let col = (px / cell_size).floor() as i64;
    let row = board_size as i64 - 1 - (py / cell_size).floor() as i64;
    (col, row)
}

/// Convert a logical (col, row) cell to the pixel position of its
/// top-left corner, relative to the board origin.
pub fn cell_to_screen(col: u32, row: u32, cell_size: f32, board_size: u32) -> (f32, f32) {
    let px = col as f32 * cell_size;
    let py = (board_size - 1 - row) as f32 * cell_size;
    (px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_for_all_cells_in_bounds() {
        for board_size in [1u32, 3, 5, 12] {
            for col in 0..board_size {
                for row in 0..board_size {
                    let (px, py) = cell_to_screen(col, row, 40.0, board_size);
                    let (c, r) = screen_to_cell(px, py, 40.0, board_size);
                    assert_eq!((c, r), (col as i64, row as i64));
                }
            }
        }
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        // Row 0 is the bottom of the board: the largest pixel y.
        let (_, py_bottom) = cell_to_screen(0, 0, 40.0, 5);
        let (_, py_top) = cell_to_screen(0, 4, 40.0, 5);
        assert_eq!(py_bottom, 160.0);
        assert_eq!(py_top, 0.0);
    }

    #[test]
    fn test_click_inside_a_cell_floors_to_it() {
        // (44, 44) with 40px cells on a 5-board lands in screen cell
        // (1, 1), which is logical (x=1, y=3).
        assert_eq!(screen_to_cell(44.0, 44.0, 40.0, 5), (1, 3));
        // Just under the next boundary still floors down.
        assert_eq!(screen_to_cell(79.9, 79.9, 40.0, 5), (1, 3));
    }

    #[test]
    fn test_center_cell_of_a_three_board() {
        // Logical (1, 1) on a 3-board is the visual center cell.
        assert_eq!(cell_to_screen(1, 1, 40.0, 3), (40.0, 40.0));
    }

    #[test]
    fn test_out_of_board_pixels_map_out_of_bounds() {
        let (col, row) = screen_to_cell(205.0, 205.0, 40.0, 5);
        assert_eq!(col, 5);
        assert_eq!(row, -1);
    }
}
