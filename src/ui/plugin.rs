//! UI plugin - the welcome modal.

use bevy::prelude::*;

use super::modal::*;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModalState>()
            .add_systems(OnEnter(GameState::InGame), (spawn_modal, open_modal))
            .add_systems(OnExit(GameState::InGame), cleanup_modal)
            .add_systems(
                Update,
                (modal_input, sync_modal_visibility)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
