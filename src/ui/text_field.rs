use macroquad::prelude::*;

/// Single-line numeric entry field for the board size form. Accepts
/// digits only; Backspace deletes, Enter submits.
pub struct TextField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    value: String,
}

impl TextField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Drain this frame's typed characters into the field. Returns true
    /// when Enter was pressed.
    pub fn handle_input(&mut self) -> bool {
        while let Some(character) = get_char_pressed() {
            if character.is_ascii_digit() && self.value.len() < 6 {
                self.value.push(character);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.value.pop();
        }
        is_key_pressed(KeyCode::Enter)
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 8.0, 16.0, DARKGRAY);

        draw_rectangle(self.x, self.y, self.width, self.height, WHITE);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, GRAY);

        // Value plus a caret.
        let shown = format!("{}_", self.value);
        draw_text(&shown, self.x + 6.0, self.y + 21.0, 18.0, BLACK);
    }
}
