//! Animated Mist controls without a rendering backend.
//!
//! Controls here own an `AnimationManager` and turn its progress into plain
//! geometry (rects, circles, alphas). Whatever paints the control reads that
//! geometry after each progress notification.

pub mod tab_selector;
pub mod text;

use mist_anim::AnimationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use tab_selector::{Ripple, TabFrame, TabLabel, TabSelector};
pub use text::{FixedWidthMeasure, TextMeasure};

/// Result type for control operations.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Errors raised by controls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("tab index {index} out of range ({count} tabs)")]
    TabOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Animation(#[from] AnimationError),
}

/// Pointer state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseState {
    Hover,
    Down,
    #[default]
    Out,
}

/// State shared by every Mist control.
pub trait MaterialControl {
    /// Elevation used by the theme to pick shadows and tints.
    fn depth(&self) -> i32;
    fn set_depth(&mut self, depth: i32);
    fn mouse_state(&self) -> MouseState;
    fn set_mouse_state(&mut self, state: MouseState);
}
