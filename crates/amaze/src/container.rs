use bevy::prelude::*;

use crate::config::LayoutConfig;
use crate::slot::{GRID_COLUMNS, GRID_ROWS, RACK_ROWS, Side, SlotId};

/// Cell arrangement of a container, with the slot formula stored as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Row-major block of cells: `first_slot + col + row * columns`.
    Grid { columns: u8, rows: u8, first_slot: u8 },
    /// Single column of cells: `first_slot + row`.
    Rack { rows: u8, first_slot: u8 },
}

impl Geometry {
    /// Size in cells, as (columns, rows).
    pub const fn dimensions(self) -> (u8, u8) {
        match self {
            Self::Grid { columns, rows, .. } => (columns, rows),
            Self::Rack { rows, .. } => (1, rows),
        }
    }

    pub fn slot_at(self, col: u8, row: u8) -> Option<SlotId> {
        let (columns, rows) = self.dimensions();
        if col >= columns || row >= rows {
            return None;
        }
        let index = match self {
            Self::Grid {
                columns,
                first_slot,
                ..
            } => first_slot + col + row * columns,
            Self::Rack { first_slot, .. } => first_slot + row,
        };
        SlotId::new(index).ok()
    }
}

/// The two sides that hold a rack. The grid sits in the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackSide {
    Left,
    Right,
}

impl From<RackSide> for Side {
    fn from(side: RackSide) -> Self {
        match side {
            RackSide::Left => Self::Left,
            RackSide::Right => Self::Right,
        }
    }
}

/// A rectangle of cells anchored at a pixel origin (its top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub side: Side,
    pub origin: Vec2,
    pub tile_size: f32,
    pub geometry: Geometry,
}

impl Container {
    pub const fn grid(origin: Vec2, tile_size: f32) -> Self {
        Self {
            side: Side::Center,
            origin,
            tile_size,
            geometry: Geometry::Grid {
                columns: GRID_COLUMNS,
                rows: GRID_ROWS,
                first_slot: Side::Center.first_slot(),
            },
        }
    }

    pub fn rack(side: RackSide, origin: Vec2, tile_size: f32) -> Self {
        let side = Side::from(side);
        Self {
            side,
            origin,
            tile_size,
            geometry: Geometry::Rack {
                rows: RACK_ROWS,
                first_slot: side.first_slot(),
            },
        }
    }

    /// Pixel extent of the container.
    pub fn size(&self) -> Vec2 {
        let (columns, rows) = self.geometry.dimensions();
        Vec2::new(columns as f32, rows as f32) * self.tile_size
    }

    /// Cell under `point`; the container covers `[origin, origin + size)`.
    pub fn cell_at(&self, point: Vec2) -> Option<(u8, u8)> {
        let offset = point - self.origin;
        let size = self.size();
        if !offset.is_finite()
            || offset.x < 0.0
            || offset.y < 0.0
            || offset.x >= size.x
            || offset.y >= size.y
        {
            return None;
        }
        let cell = (offset / self.tile_size).floor();
        Some((cell.x as u8, cell.y as u8))
    }

    pub fn resolve(&self, point: Vec2) -> Option<SlotId> {
        let (col, row) = self.cell_at(point)?;
        self.geometry.slot_at(col, row)
    }

    pub fn cell_origin(&self, col: u8, row: u8) -> Vec2 {
        self.origin + Vec2::new(col as f32, row as f32) * self.tile_size
    }

    pub fn cell_center(&self, col: u8, row: u8) -> Vec2 {
        self.cell_origin(col, row) + Vec2::splat(self.tile_size / 2.0)
    }

    /// Every cell of the container, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + use<> {
        let (columns, rows) = self.geometry.dimensions();
        (0..rows).flat_map(move |row| (0..columns).map(move |col| (col, row)))
    }
}

/// The board's containers in the order pointer lookups try them.
#[derive(Resource, Debug, Clone)]
pub struct ContainerRegistry {
    containers: Vec<Container>,
}

impl ContainerRegistry {
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self {
            containers: vec![
                Container::grid(layout.grid_origin, layout.tile_size),
                Container::rack(RackSide::Left, layout.left_rack_origin, layout.tile_size),
                Container::rack(RackSide::Right, layout.right_rack_origin, layout.tile_size),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    /// Slot under `point`, asking each container in registration order.
    pub fn resolve(&self, point: Vec2) -> Option<SlotId> {
        self.containers
            .iter()
            .find_map(|container| container.resolve(point))
    }

    pub fn container_of(&self, slot: SlotId) -> Option<&Container> {
        self.containers
            .iter()
            .find(|container| container.side == slot.side())
    }

    /// Pixel centre of the cell a slot lives in.
    pub fn slot_center(&self, slot: SlotId) -> Option<Vec2> {
        let (_, col, row) = slot.cell();
        self.container_of(slot)
            .map(|container| container.cell_center(col, row))
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        Self::from_layout(&LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ContainerRegistry {
        ContainerRegistry::default()
    }

    fn resolved(point: Vec2) -> Option<u8> {
        registry().resolve(point).map(u8::from)
    }

    #[test]
    fn in_bounds_points_resolve_inside_their_partition() {
        let ranges = [(Side::Center, 16..32), (Side::Left, 0..8), (Side::Right, 8..16)];
        for container in registry().iter() {
            let Some((_, range)) = ranges.iter().find(|(side, _)| *side == container.side) else {
                panic!("unexpected container {:?}", container.side);
            };
            let size = container.size();
            let mut y = 0.0;
            while y < size.y {
                let mut x = 0.0;
                while x < size.x {
                    let slot = container.resolve(container.origin + Vec2::new(x, y));
                    assert!(
                        slot.is_some_and(|slot| range.contains(&u8::from(slot))),
                        "{:?} at offset ({x}, {y}) resolved to {slot:?}",
                        container.side
                    );
                    x += 7.5;
                }
                y += 7.5;
            }
        }
    }

    #[test]
    fn points_outside_every_container_resolve_to_none() {
        for point in [
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 500.0),
            Vec2::new(650.0, 250.0),
            Vec2::new(250.0, 650.0),
            Vec2::new(150.0, 100.0),
            Vec2::new(50.0, 880.0),
            Vec2::new(850.0, 500.0),
            Vec2::new(f32::NAN, 300.0),
        ] {
            assert_eq!(resolved(point), None, "{point} is outside the board");
        }
    }

    #[test]
    fn upper_edges_are_exclusive() {
        let grid = Container::grid(Vec2::new(250.0, 250.0), 100.0);
        assert_eq!(grid.resolve(Vec2::new(249.9, 300.0)), None, "left of the grid");
        assert_eq!(grid.resolve(Vec2::new(650.0, 300.0)), None, "right edge is exclusive");
        assert_eq!(
            grid.resolve(Vec2::new(649.9, 649.9)).map(u8::from),
            Some(31),
            "last pixel belongs to the last cell"
        );
    }

    #[test]
    fn grid_points_map_one_to_one_onto_grid_slots() {
        let registry = registry();
        let grid = Container::grid(LayoutConfig::default().grid_origin, 100.0);
        let mut seen = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let slot = registry.resolve(grid.cell_center(col, row)).map(u8::from);
                assert_eq!(slot, Some(16 + col + row * 4), "grid cell ({col}, {row})");
                assert!(!seen.contains(&slot), "grid cell ({col}, {row}) is unique");
                seen.push(slot);
            }
        }
    }

    #[test]
    fn geometry_agrees_with_slot_cells() {
        for container in registry().iter() {
            for (col, row) in container.cells() {
                assert_eq!(
                    container.geometry.slot_at(col, row),
                    SlotId::from_cell(container.side, col, row).ok(),
                    "{:?} ({col}, {row})",
                    container.side
                );
            }
        }
    }

    #[test]
    fn racks_start_at_their_partition() {
        let origin = Vec2::ZERO;
        assert_eq!(
            Container::rack(RackSide::Left, origin, 100.0).geometry,
            Geometry::Rack { rows: 8, first_slot: 0 },
            "left rack"
        );
        assert_eq!(
            Container::rack(RackSide::Right, origin, 100.0).geometry,
            Geometry::Rack { rows: 8, first_slot: 8 },
            "right rack"
        );
        assert_eq!(
            Container::grid(origin, 100.0).geometry,
            Geometry::Grid { columns: 4, rows: 4, first_slot: 16 },
            "grid"
        );
    }

    #[test]
    fn known_clicks_resolve_to_known_slots() {
        // Grid cell (0, 0), left rack row 3, right rack row 5.
        assert_eq!(resolved(Vec2::new(260.0, 260.0)), Some(16), "grid top-left");
        assert_eq!(resolved(Vec2::new(100.0, 80.0 + 350.0)), Some(3), "left rack row 3");
        assert_eq!(resolved(Vec2::new(800.0, 80.0 + 550.0)), Some(13), "right rack row 5");
    }

    #[test]
    fn slot_center_resolves_back_to_the_slot() {
        let registry = registry();
        for slot in SlotId::all() {
            let center = registry.slot_center(slot);
            assert_eq!(
                center.and_then(|point| registry.resolve(point)),
                Some(slot),
                "slot {slot}"
            );
        }
    }
}
