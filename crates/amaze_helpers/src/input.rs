use bevy::prelude::*;
use bevy::window::CursorMoved;

// All positions returned here are window positions: logical pixels,
// origin at the top-left corner, y growing downwards.
// Touches always count as the left (primary) button.

/// Reported for a mouse release the window has no cursor position for,
/// such as a release after the cursor was dragged off the window.
pub const OFF_WINDOW: Vec2 = Vec2::NEG_ONE;

pub fn just_pressed_screen_position(
    button: MouseButton,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_pressed(button) {
        let cursor_position = windows.get_single().ok()?.cursor_position()?;
        Some(cursor_position)
    } else if button == MouseButton::Left && touch_input.any_just_pressed() {
        let touch = touch_input.iter_just_pressed().next()?;
        Some(touch.position())
    } else {
        None
    }
}

pub fn just_released_screen_position(
    button: MouseButton,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_released(button) {
        let cursor_position = windows
            .get_single()
            .ok()
            .and_then(Window::cursor_position)
            .unwrap_or(OFF_WINDOW);
        Some(cursor_position)
    } else if button == MouseButton::Left && touch_input.any_just_released() {
        let touch = touch_input.iter_just_released().next()?;
        Some(touch.position())
    } else {
        None
    }
}

/// Latest pointer position this frame, if the cursor or a touch moved.
pub fn moved_screen_position(
    cursor_moved: &mut EventReader<CursorMoved>,
    touch_input: &Res<Touches>,
) -> Option<Vec2> {
    let cursor = cursor_moved.read().last().map(|moved| moved.position);
    cursor.or_else(|| {
        touch_input
            .iter()
            .find(|touch| touch.delta() != Vec2::ZERO)
            .map(bevy::input::touch::Touch::position)
    })
}
