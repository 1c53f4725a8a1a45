use amaze_helpers::window_to_world;
use bevy::prelude::*;

use crate::board::{GameBoard, TILE_COUNT, TileBoard};
use crate::config::{LayoutConfig, TILE_SIZE};
use crate::container::ContainerRegistry;
use crate::drag::DragSession;
use crate::interaction::InteractionRouter;
use crate::slot::Side;
use crate::tile::{Rotation, TileId};

const PLACEHOLDER_DARK: Color = Color::srgb(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0);
const PLACEHOLDER_LIGHT: Color = Color::srgb(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);

const CELL_Z: f32 = 0.0;
const OVERLAY_Z: f32 = 10.0;

/// Marks the top-level entities of the frame currently on screen.
#[derive(Component)]
pub struct FrameSprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Tile { id: TileId, rotation: Rotation },
    Placeholder(Shade),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDraw {
    pub side: Side,
    pub col: u8,
    pub row: u8,
    /// Cell centre in window pixels.
    pub center: Vec2,
    pub size: f32,
    pub content: CellContent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayDraw {
    pub center: Vec2,
    pub size: f32,
    pub id: TileId,
    pub rotation: Rotation,
}

/// Everything drawn in one frame, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub cells: Vec<CellDraw>,
    pub overlay: Option<OverlayDraw>,
}

pub fn compose_frame(
    containers: &ContainerRegistry,
    board: &impl TileBoard,
    session: &DragSession,
) -> Frame {
    let dragged = session.dragged_tile();
    let mut frame = Frame::default();

    for container in containers.iter() {
        for (col, row) in container.cells() {
            let side = container.side;
            let tile = board
                .tile(side, col, row)
                .filter(|id| Some(*id) != dragged)
                .map(|id| CellContent::Tile {
                    id,
                    rotation: board.tile_rotation(side, col, row).unwrap_or_default(),
                });
            let content = tile.unwrap_or_else(|| {
                CellContent::Placeholder(if (col + row) % 2 == 0 {
                    Shade::Dark
                } else {
                    Shade::Light
                })
            });
            frame.cells.push(CellDraw {
                side,
                col,
                row,
                center: container.cell_center(col, row),
                size: container.tile_size,
                content,
            });
        }
    }

    frame.overlay = session.active().map(|drag| OverlayDraw {
        center: drag.cursor,
        size: containers
            .container_of(drag.source)
            .map_or(TILE_SIZE, |container| container.tile_size),
        id: drag.tile,
        rotation: drag.rotation,
    });

    frame
}

pub fn tile_color(id: TileId) -> Color {
    Color::hsl(f32::from(id.0) * 360.0 / f32::from(TILE_COUNT), 0.55, 0.55)
}

fn spawn_tile(
    commands: &mut Commands,
    world_center: Vec2,
    z: f32,
    size: f32,
    id: TileId,
    rotation: Rotation,
) {
    commands
        .spawn((
            FrameSprite,
            Sprite::from_color(tile_color(id), Vec2::splat(size)),
            Transform::from_translation(world_center.extend(z))
                .with_rotation(Quat::from_rotation_z(rotation.radians())),
        ))
        .with_children(|parent| {
            // Bar along the tile's top edge, so the orientation is visible.
            parent.spawn((
                Sprite::from_color(Color::BLACK, Vec2::new(size * 0.6, size * 0.08)),
                Transform::from_xyz(0.0, size * 0.4, 1.0),
            ));
            parent.spawn((
                Text2d::new(id.0.to_string()),
                TextFont {
                    font_size: size * 0.4,
                    ..default()
                },
                TextColor(Color::BLACK),
                Transform::from_xyz(0.0, 0.0, 1.0),
            ));
        });
}

/// Replaces the frame on screen with a freshly composed one.
///
/// The old entities are despawned and the new ones spawned through the same
/// command queue, so they swap at a single sync point and a half-built
/// frame never reaches the screen.
pub fn present_frame(
    mut commands: Commands,
    layout: Res<LayoutConfig>,
    containers: Res<ContainerRegistry>,
    board: Res<GameBoard>,
    router: Res<InteractionRouter>,
    previous: Query<Entity, With<FrameSprite>>,
) {
    let frame = compose_frame(&containers, &*board, router.session());

    for entity in &previous {
        commands.entity(entity).despawn_recursive();
    }

    for cell in &frame.cells {
        let world_center = window_to_world(layout.window_size, cell.center);
        match cell.content {
            CellContent::Tile { id, rotation } => {
                spawn_tile(&mut commands, world_center, CELL_Z, cell.size, id, rotation);
            }
            CellContent::Placeholder(shade) => {
                let color = match shade {
                    Shade::Dark => PLACEHOLDER_DARK,
                    Shade::Light => PLACEHOLDER_LIGHT,
                };
                commands.spawn((
                    FrameSprite,
                    Sprite::from_color(color, Vec2::splat(cell.size)),
                    Transform::from_translation(world_center.extend(CELL_Z)),
                ));
            }
        }
    }

    if let Some(overlay) = frame.overlay {
        let world_center = window_to_world(layout.window_size, overlay.center);
        spawn_tile(
            &mut commands,
            world_center,
            OVERLAY_Z,
            overlay.size,
            overlay.id,
            overlay.rotation,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{SLOT_COUNT, SlotId};
    use crate::tile::Tile;

    fn slot(index: u8) -> SlotId {
        SlotId::new(index).unwrap_or_else(|err| panic!("{err}"))
    }

    fn board_with(tiles: &[(u8, u8, u8)]) -> GameBoard {
        GameBoard::with_tiles(tiles.iter().map(|&(index, id, rotation)| {
            (
                slot(index),
                Tile {
                    id: TileId(id),
                    rotation: Rotation::new(rotation),
                },
            )
        }))
    }

    fn content_of(frame: &Frame, side: Side, col: u8, row: u8) -> Option<CellContent> {
        frame
            .cells
            .iter()
            .find(|cell| cell.side == side && cell.col == col && cell.row == row)
            .map(|cell| cell.content)
    }

    #[test]
    fn empty_board_draws_a_checkerboard() {
        let frame = compose_frame(
            &ContainerRegistry::default(),
            &GameBoard::default(),
            &DragSession::Idle,
        );

        assert_eq!(frame.cells.len(), SLOT_COUNT, "one cell per slot");
        assert_eq!(frame.overlay, None, "nothing is dragged");
        assert_eq!(
            content_of(&frame, Side::Center, 0, 0),
            Some(CellContent::Placeholder(Shade::Dark)),
            "even cells are dark"
        );
        assert_eq!(
            content_of(&frame, Side::Center, 1, 0),
            Some(CellContent::Placeholder(Shade::Light)),
            "odd cells are light"
        );
        assert_eq!(
            content_of(&frame, Side::Left, 0, 3),
            Some(CellContent::Placeholder(Shade::Light)),
            "racks alternate by row"
        );
    }

    #[test]
    fn tiles_are_drawn_with_their_board_rotation() {
        let frame = compose_frame(
            &ContainerRegistry::default(),
            &board_with(&[(13, 4, 3)]),
            &DragSession::Idle,
        );

        assert_eq!(
            content_of(&frame, Side::Right, 0, 5),
            Some(CellContent::Tile {
                id: TileId(4),
                rotation: Rotation::new(3)
            }),
            "right rack row 5 holds tile 4"
        );
    }

    #[test]
    fn dragged_tile_leaves_a_placeholder_and_follows_the_cursor() {
        let containers = ContainerRegistry::default();
        let mut board = board_with(&[(16, 2, 1), (17, 3, 0)]);
        let cursor = Vec2::new(512.0, 128.0);
        let session = DragSession::begin(slot(16), TileId(2), Rotation::new(1), cursor);
        // Rotations during the drag change the board but not the overlay.
        board.rotate(Side::Center, 0, 0);

        let frame = compose_frame(&containers, &board, &session);

        assert_eq!(
            content_of(&frame, Side::Center, 0, 0),
            Some(CellContent::Placeholder(Shade::Dark)),
            "source cell is hidden"
        );
        assert!(
            matches!(
                content_of(&frame, Side::Center, 1, 0),
                Some(CellContent::Tile { id: TileId(3), .. })
            ),
            "other tiles are unaffected"
        );
        assert_eq!(
            frame.overlay,
            Some(OverlayDraw {
                center: cursor,
                size: 100.0,
                id: TileId(2),
                rotation: Rotation::new(1),
            }),
            "overlay uses the pick-time rotation"
        );
    }

    #[test]
    fn cell_centers_sit_inside_their_containers() {
        let containers = ContainerRegistry::default();
        let frame = compose_frame(&containers, &GameBoard::default(), &DragSession::Idle);
        for cell in &frame.cells {
            let resolved = containers.resolve(cell.center).map(SlotId::cell);
            assert_eq!(
                resolved,
                Some((cell.side, cell.col, cell.row)),
                "cell {:?} ({}, {})",
                cell.side,
                cell.col,
                cell.row
            );
        }
    }

    #[test]
    fn presenting_replaces_the_previous_frame() {
        let mut app = App::new();
        app.init_resource::<LayoutConfig>()
            .init_resource::<ContainerRegistry>()
            .init_resource::<InteractionRouter>()
            .insert_resource(board_with(&[(0, 1, 0)]))
            .add_systems(Update, present_frame);

        app.update();
        app.update();

        let mut sprites = app
            .world_mut()
            .query_filtered::<Entity, With<FrameSprite>>();
        assert_eq!(
            sprites.iter(app.world()).count(),
            SLOT_COUNT,
            "one frame's worth of cells after two presents"
        );
    }
}
