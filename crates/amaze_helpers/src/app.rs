use bevy::prelude::*;
use bevy::window::{WindowMode, WindowResolution};

// Creates a Bevy app with the window and plugins every board view expects
// This keeps window setup in one place instead of inside each game crate
pub fn get_default_app(title: &str, window_size: Vec2, background: Color) -> App {
    let mut app = App::new();

    let resolution = WindowResolution::new(window_size.x, window_size.y);

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            present_mode: bevy::window::PresentMode::Fifo,
            resolution,
            // Pointer coordinates map straight onto board pixels only at a fixed size.
            resizable: false,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(window_plugin));

    // The board only changes on input, there is no reason to spin the GPU.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(background));

    app
}

/// Converts a window position (origin top-left, y down) to 2D world
/// coordinates of a default `Camera2d` (origin at the centre, y up).
pub fn window_to_world(window_size: Vec2, position: Vec2) -> Vec2 {
    Vec2::new(
        position.x - window_size.x / 2.0,
        window_size.y / 2.0 - position.y,
    )
}
