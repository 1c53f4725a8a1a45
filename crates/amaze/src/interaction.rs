use amaze_helpers::input::{
    just_pressed_screen_position, just_released_screen_position, moved_screen_position,
};
use bevy::log::debug;
use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::board::{GameBoard, TileBoard};
use crate::container::ContainerRegistry;
use crate::drag::DragSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Picks up, drags and drops tiles.
    Primary,
    /// Rotates tiles.
    Secondary,
}

/// Pointer input in window pixels (origin top-left, y down).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed {
        button: PointerButton,
        position: Vec2,
    },
    Moved {
        position: Vec2,
    },
    Released {
        button: PointerButton,
        position: Vec2,
    },
}

/// Owns the drag session and turns pointer events into board commands.
#[derive(Resource, Debug, Default)]
pub struct InteractionRouter {
    session: DragSession,
}

impl InteractionRouter {
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Applies one pointer event. Returns whether the frame needs redrawing.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        containers: &ContainerRegistry,
        board: &mut impl TileBoard,
    ) -> bool {
        match event {
            PointerEvent::Pressed {
                button: PointerButton::Primary,
                position,
            } => self.pick(position, containers, &*board),
            PointerEvent::Pressed {
                button: PointerButton::Secondary,
                position,
            } => Self::rotate(position, containers, board),
            PointerEvent::Moved { position } => self.session.track(position),
            PointerEvent::Released {
                button: PointerButton::Primary,
                position,
            } => self.release(position, containers, board),
            PointerEvent::Released {
                button: PointerButton::Secondary,
                ..
            } => false,
        }
    }

    fn pick(
        &mut self,
        position: Vec2,
        containers: &ContainerRegistry,
        board: &impl TileBoard,
    ) -> bool {
        if self.session.is_dragging() {
            return false;
        }
        let Some(source) = containers.resolve(position) else {
            return false;
        };
        let Some(tile) = board.tile_in(source) else {
            return false;
        };
        let rotation = board.rotation_in(source).unwrap_or_default();

        debug!("Picked tile {tile:?} from slot {source}");
        self.session = DragSession::begin(source, tile, rotation, position);
        true
    }

    fn release(
        &mut self,
        position: Vec2,
        containers: &ContainerRegistry,
        board: &mut impl TileBoard,
    ) -> bool {
        let Some(drag) = self.session.clear() else {
            return false;
        };
        match containers.resolve(position) {
            Some(dest) => {
                debug!(
                    "Dropped tile {:?} from slot {} on slot {dest}",
                    drag.tile, drag.source
                );
                board.move_tile(drag.source, dest);
            }
            None => {
                debug!(
                    "Dropped tile {:?} outside the board, it stays in slot {}",
                    drag.tile, drag.source
                );
            }
        }
        true
    }

    fn rotate(position: Vec2, containers: &ContainerRegistry, board: &mut impl TileBoard) -> bool {
        let Some(slot) = containers.resolve(position) else {
            return false;
        };
        if board.tile_in(slot).is_none() {
            return false;
        }
        debug!("Rotating tile in slot {slot}");
        board.rotate_slot(slot);
        true
    }
}

pub fn collect_pointer_events(
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut cursor_moved: EventReader<CursorMoved>,
    mut pointer_events: EventWriter<PointerEvent>,
) {
    if let Some(position) = moved_screen_position(&mut cursor_moved, &touch_input) {
        pointer_events.send(PointerEvent::Moved { position });
    }

    for (mouse_button, button) in [
        (MouseButton::Left, PointerButton::Primary),
        (MouseButton::Right, PointerButton::Secondary),
    ] {
        if let Some(position) =
            just_pressed_screen_position(mouse_button, &buttons, &touch_input, &windows)
        {
            pointer_events.send(PointerEvent::Pressed { button, position });
        }
    }

    if let Some(position) =
        just_released_screen_position(MouseButton::Left, &buttons, &touch_input, &windows)
    {
        pointer_events.send(PointerEvent::Released {
            button: PointerButton::Primary,
            position,
        });
    }
}

pub fn route_pointer_events(
    mut pointer_events: EventReader<PointerEvent>,
    containers: Res<ContainerRegistry>,
    mut router: ResMut<InteractionRouter>,
    mut board: ResMut<GameBoard>,
) {
    // Change ticks are only raised when something visible happened, so the
    // frame is recomposed on demand rather than on every cursor twitch.
    let mut redraw = false;
    for event in pointer_events.read() {
        redraw |= router.bypass_change_detection().handle(
            *event,
            &containers,
            board.bypass_change_detection(),
        );
    }
    if redraw {
        router.set_changed();
        board.set_changed();
    }
}
