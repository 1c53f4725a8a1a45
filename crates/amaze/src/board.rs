use std::fmt::{self, Display, Formatter};

use bevy::log::info;
use bevy::prelude::*;

use crate::slot::{GRID_COLUMNS, GRID_ROWS, RACK_ROWS, SLOT_COUNT, Side, SlotId};
use crate::tile::{Rotation, Tile, TileId};

pub const TILE_COUNT: u8 = 16;

/// What the interaction layer is allowed to ask of the board.
///
/// Cells are addressed by `(side, col, row)` and slots by [`SlotId`].
/// Cells outside a side are treated as empty, and commands on them do nothing.
pub trait TileBoard {
    fn tile(&self, side: Side, col: u8, row: u8) -> Option<TileId>;

    fn tile_rotation(&self, side: Side, col: u8, row: u8) -> Option<Rotation>;

    /// Turns the tile in the cell a quarter turn clockwise.
    fn rotate(&mut self, side: Side, col: u8, row: u8);

    /// Moves the tile in `source` to `dest`, swapping with whatever is there.
    /// Rotations travel with their tiles. `source == dest` changes nothing.
    fn move_tile(&mut self, source: SlotId, dest: SlotId);

    fn new_game(&mut self);

    fn reset_game(&mut self);

    fn tile_in(&self, slot: SlotId) -> Option<TileId> {
        let (side, col, row) = slot.cell();
        self.tile(side, col, row)
    }

    fn rotation_in(&self, slot: SlotId) -> Option<Rotation> {
        let (side, col, row) = slot.cell();
        self.tile_rotation(side, col, row)
    }

    fn rotate_slot(&mut self, slot: SlotId) {
        let (side, col, row) = slot.cell();
        self.rotate(side, col, row);
    }
}

type Slots = [Option<Tile>; SLOT_COUNT];

/// In-memory board: one optional tile per slot, plus the deal that
/// `reset_game` goes back to.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    slots: Slots,
    deal: Slots,
}

impl Default for GameBoard {
    fn default() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
            deal: [None; SLOT_COUNT],
        }
    }
}

impl GameBoard {
    /// Board holding exactly the given tiles; this layout is also what
    /// `reset_game` restores.
    pub fn with_tiles(tiles: impl IntoIterator<Item = (SlotId, Tile)>) -> Self {
        let mut slots = [None; SLOT_COUNT];
        for (slot, tile) in tiles {
            if let Some(cell) = slots.get_mut(slot.index()) {
                *cell = Some(tile);
            }
        }
        Self { slots, deal: slots }
    }

    pub fn slot(&self, slot: SlotId) -> Option<Tile> {
        self.slots.get(slot.index()).copied().flatten()
    }

    fn cell(&self, side: Side, col: u8, row: u8) -> Option<Tile> {
        SlotId::from_cell(side, col, row)
            .ok()
            .and_then(|slot| self.slot(slot))
    }

    pub fn tile_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    fn write_cell(&self, f: &mut Formatter<'_>, side: Side, col: u8, row: u8) -> fmt::Result {
        match self.cell(side, col, row) {
            Some(tile) => write!(f, "{:>02}{} ", tile.id.0, tile.rotation.quarter_turns()),
            None => write!(f, " .. "),
        }
    }

    fn random_deal() -> Slots {
        let mut ids: Vec<u8> = (0..TILE_COUNT).collect();
        fastrand::shuffle(&mut ids);

        // Every tile starts in one of the racks, the grid starts empty.
        let mut slots = [None; SLOT_COUNT];
        for (cell, id) in slots.iter_mut().zip(ids) {
            *cell = Some(Tile {
                id: TileId(id),
                rotation: Rotation::new(fastrand::u8(0..4)),
            });
        }
        slots
    }
}

impl TileBoard for GameBoard {
    fn tile(&self, side: Side, col: u8, row: u8) -> Option<TileId> {
        self.cell(side, col, row).map(|tile| tile.id)
    }

    fn tile_rotation(&self, side: Side, col: u8, row: u8) -> Option<Rotation> {
        self.cell(side, col, row).map(|tile| tile.rotation)
    }

    fn rotate(&mut self, side: Side, col: u8, row: u8) {
        let Ok(slot) = SlotId::from_cell(side, col, row) else {
            return;
        };
        if let Some(tile) = self.slots.get_mut(slot.index()).and_then(Option::as_mut) {
            tile.rotation = tile.rotation.turned();
        }
    }

    fn move_tile(&mut self, source: SlotId, dest: SlotId) {
        if source != dest {
            self.slots.swap(source.index(), dest.index());
        }
    }

    fn new_game(&mut self) {
        self.deal = Self::random_deal();
        self.slots = self.deal;
        info!("New game dealt\n{self}");
    }

    fn reset_game(&mut self) {
        self.slots = self.deal;
        info!("Board reset to the current deal");
    }
}

impl Display for GameBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..RACK_ROWS {
            self.write_cell(f, Side::Left, 0, row)?;
            write!(f, "| ")?;
            for col in 0..GRID_COLUMNS {
                if row < GRID_ROWS {
                    self.write_cell(f, Side::Center, col, row)?;
                } else {
                    write!(f, "    ")?;
                }
            }
            write!(f, "| ")?;
            self.write_cell(f, Side::Right, 0, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
