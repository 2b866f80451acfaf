//! Game state definitions that control the overall flow of the game.
//!
//! The controller, camera and interaction systems only run while the game
//! is `InGame`; leaving that state tears the scene down again.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` while configuration is read
/// - Move to `InGame` once loading completes
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - reading configuration
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}
