//! Welcome modal shown over the scene.

use bevy::prelude::*;

const BUTTON_NORMAL: Color = Color::srgb(0.55, 0.55, 0.58);
const BUTTON_HOVERED: Color = Color::srgb(0.85, 0.25, 0.25);

/// Whether the modal is showing.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
}

impl ModalState {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// Marker for the modal overlay root.
#[derive(Component)]
pub struct ModalRoot;

/// Marker for the modal's close button.
#[derive(Component)]
pub struct ModalCloseButton;

/// Spawn the modal overlay, hidden until [`ModalState`] opens it.
pub fn spawn_modal(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            Visibility::Hidden,
            ModalRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        max_width: Val::Px(448.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(24.0)),
                        ..default()
                    },
                    BackgroundColor(Color::WHITE),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|panel| {
                    // Close button, top right
                    panel
                        .spawn((
                            Button,
                            Node {
                                position_type: PositionType::Absolute,
                                top: Val::Px(8.0),
                                right: Val::Px(12.0),
                                ..default()
                            },
                            ModalCloseButton,
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("X"),
                                TextFont {
                                    font_size: 22.0,
                                    ..default()
                                },
                                TextColor(BUTTON_NORMAL),
                            ));
                        });

                    panel.spawn((
                        Text::new("Welcome!"),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.12, 0.16, 0.22)),
                        Node {
                            margin: UiRect::bottom(Val::Px(16.0)),
                            ..default()
                        },
                    ));

                    panel.spawn((
                        Text::new(
                            "Walk with WASD or the arrow keys, hold Shift to run. \
                             Press E to open the chest and scroll to zoom.",
                        ),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.29, 0.33, 0.39)),
                    ));
                });
        });
}

/// Open the modal when gameplay starts.
pub fn open_modal(mut modal: ResMut<ModalState>) {
    modal.open();
}

/// Close the modal from the close button or Escape.
pub fn modal_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut modal: ResMut<ModalState>,
    button_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<ModalCloseButton>),
    >,
    mut text_colors: Query<&mut TextColor>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && modal.is_open {
        modal.close();
    }

    for (interaction, children) in button_query.iter() {
        let color = match interaction {
            Interaction::Pressed => {
                modal.close();
                BUTTON_HOVERED
            }
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::None => BUTTON_NORMAL,
        };
        for &child in children.iter() {
            if let Ok(mut text_color) = text_colors.get_mut(child) {
                text_color.0 = color;
            }
        }
    }
}

/// Show or hide the overlay to match [`ModalState`].
pub fn sync_modal_visibility(
    modal: Res<ModalState>,
    mut root_query: Query<&mut Visibility, With<ModalRoot>>,
) {
    if !modal.is_changed() {
        return;
    }
    let visibility = if modal.is_open {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut current in root_query.iter_mut() {
        *current = visibility;
    }
}

/// Remove the overlay.
pub fn cleanup_modal(mut commands: Commands, query: Query<Entity, With<ModalRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ModalState::default().is_open);
    }

    #[test]
    fn open_then_close() {
        let mut modal = ModalState::default();
        modal.open();
        assert!(modal.is_open);
        modal.close();
        assert!(!modal.is_open);
        modal.close();
        assert!(!modal.is_open);
    }

    #[test]
    fn escape_closes_open_modal() {
        let mut app = App::new();
        app.insert_resource(ModalState { is_open: true });
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Escape);
        app.insert_resource(keys);
        app.add_systems(Update, modal_input);

        app.update();

        assert!(!app.world().resource::<ModalState>().is_open);
    }
}
