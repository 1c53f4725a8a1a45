use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "aMaze";
pub const BACKGROUND_COLOR: Color = Color::srgb(150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0);

// Board placement in window pixels (origin top-left, y down)
pub const TILE_SIZE: f32 = 100.0;
pub const WINDOW_SIZE: Vec2 = Vec2::new(900.0, 1000.0);
pub const GRID_ORIGIN: Vec2 = Vec2::new(250.0, 250.0);
pub const LEFT_RACK_ORIGIN: Vec2 = Vec2::new(50.0, 80.0);
pub const RIGHT_RACK_ORIGIN: Vec2 = Vec2::new(750.0, 80.0);

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub window_size: Vec2,
    pub tile_size: f32,
    pub grid_origin: Vec2,
    pub left_rack_origin: Vec2,
    pub right_rack_origin: Vec2,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            tile_size: TILE_SIZE,
            grid_origin: GRID_ORIGIN,
            left_rack_origin: LEFT_RACK_ORIGIN,
            right_rack_origin: RIGHT_RACK_ORIGIN,
        }
    }
}
