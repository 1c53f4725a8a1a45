use bevy::prelude::*;

pub mod board;
pub mod chrome;
pub mod config;
pub mod container;
pub mod drag;
pub mod interaction;
pub mod render;
pub mod slot;
pub mod tile;

use amaze_helpers::buttons::{emit_button_actions, highlight_buttons};
use board::GameBoard;
use chrome::GameCommand;
use config::{BACKGROUND_COLOR, LayoutConfig, WINDOW_TITLE};
use container::ContainerRegistry;
use interaction::{InteractionRouter, PointerEvent};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
enum BoardSystemSet {
    Input,
    Apply,
    Present,
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        let layout = app
            .world()
            .get_resource::<LayoutConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(ContainerRegistry::from_layout(&layout))
            .insert_resource(layout)
            .init_resource::<GameBoard>()
            .init_resource::<InteractionRouter>()
            .add_event::<PointerEvent>()
            .add_event::<GameCommand>()
            .configure_sets(
                Update,
                (
                    BoardSystemSet::Input,
                    BoardSystemSet::Apply,
                    BoardSystemSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup, chrome::deal_first_game, chrome::spawn_button_bar))
            .add_systems(
                Update,
                (
                    interaction::collect_pointer_events,
                    chrome::keyboard_shortcuts,
                    emit_button_actions::<GameCommand>,
                    highlight_buttons,
                )
                    .in_set(BoardSystemSet::Input),
            )
            .add_systems(
                Update,
                (interaction::route_pointer_events, chrome::handle_game_commands)
                    .chain()
                    .in_set(BoardSystemSet::Apply),
            )
            .add_systems(
                Update,
                render::present_frame
                    .run_if(
                        resource_changed::<GameBoard>.or(resource_changed::<InteractionRouter>),
                    )
                    .in_set(BoardSystemSet::Present),
            );
    }
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn run() {
    let layout = LayoutConfig::default();
    amaze_helpers::get_default_app(WINDOW_TITLE, layout.window_size, BACKGROUND_COLOR)
        .insert_resource(layout)
        .add_plugins(BoardPlugin)
        .run();
}
