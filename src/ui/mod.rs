mod button;
mod text_field;

pub use button::Button;
pub use text_field::TextField;

pub const MARGIN: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 40.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = 120.0;
/// Room under the board for the status line and controls.
pub const CONTROLS_HEIGHT: f32 = 110.0;

/// Top-left corner of the board drawing surface.
pub fn board_origin() -> (f32, f32) {
    (MARGIN, MARGIN + HEADER_HEIGHT)
}

/// Window dimensions for a board of `board_px` square pixels.
pub fn window_size_for(board_px: f32) -> (f32, f32) {
    let width = (board_px + 2.0 * MARGIN).max(460.0);
    let height = MARGIN + HEADER_HEIGHT + board_px + CONTROLS_HEIGHT;
    (width, height)
}

/// Yes / No / Set Board Size, with the current choice highlighted.
pub fn size_form_buttons(provide_initial_state: Option<bool>) -> Vec<Button> {
    vec![
        Button::new(MARGIN, 150.0, 80.0, BUTTON_HEIGHT, "Yes")
            .selected(provide_initial_state == Some(true)),
        Button::new(MARGIN + 90.0, 150.0, 80.0, BUTTON_HEIGHT, "No")
            .selected(provide_initial_state == Some(false)),
        Button::new(MARGIN, 210.0, 180.0, BUTTON_HEIGHT, "Set Board Size"),
    ]
}

/// Submit action for the initial-state editing phase.
pub fn editor_buttons(board_px: f32) -> Vec<Button> {
    let (_, oy) = board_origin();
    vec![Button::new(
        MARGIN,
        oy + board_px + 45.0,
        220.0,
        BUTTON_HEIGHT,
        "Submit Initial State",
    )]
}

/// Previous / Next / auto-cycle toggle under the playback board.
pub fn playback_buttons(board_px: f32, auto_cycle: bool) -> Vec<Button> {
    let (_, oy) = board_origin();
    let y = oy + board_px + 45.0;
    vec![
        Button::new(MARGIN, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Previous"),
        Button::new(MARGIN + 130.0, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Next"),
        Button::new(
            MARGIN + 260.0,
            y,
            160.0,
            BUTTON_HEIGHT,
            if auto_cycle { "Stop Auto Cycle" } else { "Start Auto Cycle" },
        ),
    ]
}
