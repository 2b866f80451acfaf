//! UI module - overlays drawn on top of the scene.

mod modal;
mod plugin;

pub use modal::{ModalCloseButton, ModalRoot, ModalState};
pub use plugin::UiPlugin;
