//! Animation error types

use thiserror::Error;

/// Setup errors raised while authoring animations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Parallel value/time lists differ in length
    #[error("Mismatched keyframes: {values} values for {times} times")]
    MismatchedKeyframes { values: usize, times: usize },

    /// Keyframe time is NaN or infinite
    #[error("Keyframe time must be finite, got {0}")]
    NonFiniteTime(f32),

    /// A paging layout needs at least one page
    #[error("Invalid page count: {0}")]
    InvalidPageCount(usize),
}

/// Result type for animation setup
pub type Result<T> = std::result::Result<T, AnimationError>;
