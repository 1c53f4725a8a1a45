use std::fmt::{self, Display, Formatter};

use strum::EnumIter;
use thiserror::Error;

pub const RACK_ROWS: u8 = 8;
pub const GRID_COLUMNS: u8 = 4;
pub const GRID_ROWS: u8 = 4;
pub const SLOT_COUNT: usize = 32;

const LEFT_RACK_FIRST: u8 = 0;
const RIGHT_RACK_FIRST: u8 = LEFT_RACK_FIRST + RACK_ROWS;
const GRID_FIRST: u8 = RIGHT_RACK_FIRST + RACK_ROWS;

/// Which container of the board a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Side {
    /// Size of the side in cells, as (columns, rows).
    pub const fn dimensions(self) -> (u8, u8) {
        match self {
            Self::Left | Self::Right => (1, RACK_ROWS),
            Self::Center => (GRID_COLUMNS, GRID_ROWS),
        }
    }

    /// Slot index of the side's first cell.
    pub(crate) const fn first_slot(self) -> u8 {
        match self {
            Self::Left => LEFT_RACK_FIRST,
            Self::Right => RIGHT_RACK_FIRST,
            Self::Center => GRID_FIRST,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    #[error("slot {0} is outside 0..32")]
    OutOfRange(u8),

    #[error("cell ({col}, {row}) is outside the {side:?} container")]
    CellOutOfRange { side: Side, col: u8, row: u8 },
}

/// Logical tile position across every container of the board.
///
/// Left rack slots are `0..8`, right rack slots `8..16` and grid slots
/// `16..32`. A `SlotId` is always in range, so board code can index with it
/// without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u8);

impl SlotId {
    pub const fn new(index: u8) -> Result<Self, SlotError> {
        if (index as usize) < SLOT_COUNT {
            Ok(Self(index))
        } else {
            Err(SlotError::OutOfRange(index))
        }
    }

    pub const fn from_cell(side: Side, col: u8, row: u8) -> Result<Self, SlotError> {
        let (columns, rows) = side.dimensions();
        if col >= columns || row >= rows {
            return Err(SlotError::CellOutOfRange { side, col, row });
        }
        Ok(Self(side.first_slot() + col + row * columns))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn side(self) -> Side {
        if self.0 < RIGHT_RACK_FIRST {
            Side::Left
        } else if self.0 < GRID_FIRST {
            Side::Right
        } else {
            Side::Center
        }
    }

    /// Inverse of [`SlotId::from_cell`].
    pub const fn cell(self) -> (Side, u8, u8) {
        let side = self.side();
        let (columns, _) = side.dimensions();
        let offset = self.0 - side.first_slot();
        (side, offset % columns, offset / columns)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..SLOT_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for SlotId {
    type Error = SlotError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<SlotId> for u8 {
    fn from(slot: SlotId) -> Self {
        slot.0
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
