use bevy::prelude::*;

use crate::slot::SlotId;
use crate::tile::{Rotation, TileId};

/// A tile picked up by the player. The board still owns it at `source`
/// until the drop is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub source: SlotId,
    pub tile: TileId,
    /// Orientation at pick time; rotations during the drag do not show here.
    pub rotation: Rotation,
    /// Latest pointer position in window pixels.
    pub cursor: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

impl DragSession {
    pub const fn begin(source: SlotId, tile: TileId, rotation: Rotation, cursor: Vec2) -> Self {
        Self::Dragging(ActiveDrag {
            source,
            tile,
            rotation,
            cursor,
        })
    }

    pub const fn active(&self) -> Option<&ActiveDrag> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag),
        }
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn dragged_tile(&self) -> Option<TileId> {
        self.active().map(|drag| drag.tile)
    }

    pub fn source(&self) -> Option<SlotId> {
        self.active().map(|drag| drag.source)
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.active().map(|drag| drag.rotation)
    }

    /// Moves the live cursor. Returns whether a drag was in progress.
    pub fn track(&mut self, cursor: Vec2) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging(drag) => {
                drag.cursor = cursor;
                true
            }
        }
    }

    /// Ends the session, handing back the drag that was active.
    pub fn clear(&mut self) -> Option<ActiveDrag> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag),
        }
    }
}
