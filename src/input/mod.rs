use macroquad::prelude::*;

use crate::application::{PointSetEditor, SequencePlayer};
use crate::ui::Button;

/// Route a left click on the editing surface into the editor. The click
/// is translated to board-local pixels; the editor bounds-checks.
pub fn handle_editor_click(
    editor: &mut PointSetEditor,
    origin: (f32, f32),
    mouse_pos: (f32, f32),
) {
    if is_mouse_button_pressed(MouseButton::Left) {
        editor.add_point(mouse_pos.0 - origin.0, mouse_pos.1 - origin.1);
    }
}

/// Process playback button clicks: Previous, Next, auto-cycle toggle.
pub fn process_playback_buttons(
    player: &mut SequencePlayer,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    for (idx, button) in buttons.iter().enumerate() {
        if !button.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => player.previous(),
            1 => player.next(),
            2 => player.toggle_auto_cycle(),
            _ => {}
        }
    }
}

/// Keyboard navigation mirroring the buttons: arrows step, Space
/// toggles auto-cycle.
pub fn process_playback_keys(player: &mut SequencePlayer) {
    if is_key_pressed(KeyCode::Left) {
        player.previous();
    }
    if is_key_pressed(KeyCode::Right) {
        player.next();
    }
    if is_key_pressed(KeyCode::Space) {
        player.toggle_auto_cycle();
    }
}
