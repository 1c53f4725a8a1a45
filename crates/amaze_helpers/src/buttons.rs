use bevy::prelude::*;

/// Attaches an event to a UI button; pressing the button sends a clone of it.
#[derive(Component, Clone)]
pub struct ButtonAction<E: Event + Clone>(pub E);

pub const BUTTON_IDLE: Color = Color::srgb(0.85, 0.85, 0.85);
pub const BUTTON_HOVERED: Color = Color::srgb(0.95, 0.95, 0.95);

pub fn emit_button_actions<E: Event + Clone>(
    mut events: EventWriter<E>,
    interaction_query: Query<(&Interaction, &ButtonAction<E>), Changed<Interaction>>,
) {
    for (interaction, action) in &interaction_query {
        if *interaction == Interaction::Pressed {
            events.send(action.0.clone());
        }
    }
}

pub fn highlight_buttons(
    mut interaction_query: Query<(&Interaction, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, mut background) in &mut interaction_query {
        background.0 = match interaction {
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::Pressed | Interaction::None => BUTTON_IDLE,
        };
    }
}

/// Spawns a left-aligned row of text buttons at the top of the window.
pub fn spawn_button_row<E: Event + Clone>(commands: &mut Commands, buttons: &[(&str, E)]) {
    commands
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(5.0),
            padding: UiRect::all(Val::Px(5.0)),
            ..default()
        })
        .with_children(|parent| {
            for (label, event) in buttons {
                parent
                    .spawn((
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_IDLE),
                        ButtonAction(event.clone()),
                    ))
                    .with_child((
                        Text::new(*label),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::BLACK),
                    ));
            }
        });
}
