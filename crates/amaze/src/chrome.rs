use amaze_helpers::buttons::spawn_button_row;
use bevy::log::{debug, info};
use bevy::prelude::*;

use crate::board::{GameBoard, TileBoard};
use crate::interaction::InteractionRouter;

/// Board-wide commands from the button bar and keyboard.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    NewGame,
    Reset,
    Quit,
}

pub fn spawn_button_bar(mut commands: Commands) {
    spawn_button_row(
        &mut commands,
        &[
            ("New Game", GameCommand::NewGame),
            ("Reset", GameCommand::Reset),
            ("Quit", GameCommand::Quit),
        ],
    );
}

pub fn keyboard_shortcuts(
    keycode: Res<ButtonInput<KeyCode>>,
    mut game_commands: EventWriter<GameCommand>,
) {
    if keycode.just_pressed(KeyCode::KeyN) {
        game_commands.send(GameCommand::NewGame);
    } else if keycode.just_pressed(KeyCode::KeyR) {
        game_commands.send(GameCommand::Reset);
    } else if keycode.just_pressed(KeyCode::Escape) {
        game_commands.send(GameCommand::Quit);
    }
}

pub fn deal_first_game(mut board: ResMut<GameBoard>) {
    board.new_game();
}

pub fn handle_game_commands(
    mut game_commands: EventReader<GameCommand>,
    router: Res<InteractionRouter>,
    mut board: ResMut<GameBoard>,
    mut exit: EventWriter<AppExit>,
) {
    for command in game_commands.read() {
        match command {
            GameCommand::Quit => {
                info!("Quitting");
                exit.send(AppExit::Success);
            }
            // Only a drop may end a drag, so the board stays put until then.
            _ if router.session().is_dragging() => {
                debug!("Ignoring {command:?} while a tile is being dragged");
            }
            GameCommand::NewGame => board.new_game(),
            GameCommand::Reset => board.reset_game(),
        }
    }
}
