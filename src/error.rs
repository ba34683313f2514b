//! Error types for animation playback and lookup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// Frame selection on an animation that has no frames.
    #[error("No frames in animation")]
    EmptyAnimation,

    /// Query by a name that was never registered (or was removed).
    #[error("Animation not found: {name}")]
    AnimationNotFound { name: String },
}
