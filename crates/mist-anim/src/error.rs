//! Error types for the animation manager.

use thiserror::Error;

/// Result type for animation operations.
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Errors that can occur while driving or querying an animation manager.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A direction tag did not name one of the four known directions.
    #[error("invalid animation direction: {0}")]
    InvalidDirection(String),

    /// An easing tag did not name a known easing function.
    #[error("invalid easing function: {0}")]
    InvalidEasing(String),

    /// Slot accessor called with an index past the end of the slot list.
    #[error("invalid animation index {index} (slot count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Operation is only valid for the other manager mode.
    #[error("operation not valid for this mode: {0}")]
    InvalidOperationForMode(&'static str),

    /// Manager is in a state that should be unreachable.
    #[error("invalid animation state: {0}")]
    InvalidState(&'static str),
}
