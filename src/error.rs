//! Error types for cloth construction and stepping.

use thiserror::Error;

/// Errors reported by [`Cloth`](crate::Cloth) and the configuration types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClothError {
    /// Grid dimensions must be at least 2x2.
    #[error("grid must be at least 2x2, got {columns}x{rows}")]
    InvalidGridDimensions { columns: usize, rows: usize },
    /// Unit spacing must be positive and finite.
    #[error("unit spacing must be positive and finite")]
    InvalidSpacing,
    /// Time step must be positive and finite.
    #[error("time step must be positive and finite")]
    InvalidTimeStep,
    /// Damping must be in [0, 1].
    #[error("damping must be in [0, 1]")]
    InvalidDamping,
    /// Stiffness must be in [0, 1].
    #[error("stiffness must be in [0, 1]")]
    InvalidStiffness,
    /// Wind and gravity must be finite.
    #[error("wind and gravity must be finite")]
    InvalidAcceleration,
    /// A particle left the representable range during a step.
    #[error("particle {index} has a non-finite position")]
    NonFinitePosition { index: usize },
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
}

/// Convenience alias for `Result<T, ClothError>`.
pub type Result<T> = core::result::Result<T, ClothError>;
