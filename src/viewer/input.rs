use raylib::prelude::*;

use crate::constants::EDGE_ZONE_RATIO;
use crate::input::Intent;
use crate::viewer::surface::bar_item_at;

/// What the user asked for during one frame.
#[derive(Debug, Default)]
pub struct FrameInput {
    pub intents: Vec<Intent>,
    pub toggle_autoplay: bool,
}

/// Left/Right keys, clicks on the screen edges and on bar dots, Space.
pub fn poll(rl: &RaylibHandle, bar_len: usize) -> FrameInput {
    let mut input = FrameInput::default();

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        input.intents.push(Intent::PreviousRequested);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        input.intents.push(Intent::NextRequested);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        input.toggle_autoplay = true;
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let position = rl.get_mouse_position();
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        if let Some(intent) = click_intent(position.x, position.y, bar_len, width, height) {
            input.intents.push(intent);
        }
    }

    input
}

fn click_intent(x: f32, y: f32, bar_len: usize, width: f32, height: f32) -> Option<Intent> {
    if let Some(index) = bar_item_at(x, y, bar_len, width, height) {
        Some(Intent::JumpRequested(index))
    } else if x < width * EDGE_ZONE_RATIO {
        Some(Intent::PreviousRequested)
    } else if x > width * (1.0 - EDGE_ZONE_RATIO) {
        Some(Intent::NextRequested)
    } else {
        None
    }
}
