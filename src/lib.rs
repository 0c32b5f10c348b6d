//! Verlet cloth sheet with iterative distance-constraint relaxation.
//!
//! `drape` simulates a rectangular sheet as a grid of point masses joined by
//! distance constraints. Each step applies damped inertial motion plus
//! external accelerations (Verlet, no stored velocity), then relaxes the
//! constraints Gauss-Seidel style for a fixed number of passes. Row 0 of the
//! grid is pinned, so the sheet hangs from its top edge.
//!
//! # Features
//!
//! - **Column-major grid topology**: quad faces for rendering, structural and
//!   bend constraints with rest lengths fixed at build time
//! - **Damped Verlet integration**: `pos + (1 - damping) * (pos - prev) + dt^2 * a`
//! - **Fixed-order relaxation**: structural list then bend list, every pass
//! - **Observable**: monitor steps via the `StepObserver` trait, or log them
//!   with `TracingStepObserver`
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use drape::{Cloth, GridConfig, SimulationConfig, NoOpStepObserver};
//!
//! let mut cloth: Cloth<f32> = Cloth::new(&GridConfig::new(40, 25))?;
//! let config = SimulationConfig::reference_scene();
//! cloth.run(75, &config, &mut NoOpStepObserver)?;
//! assert_eq!(cloth.positions().len(), 1000);
//! assert_eq!(cloth.faces().len(), 39 * 24);
//! # Ok::<(), drape::ClothError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod grid;
pub mod cloth;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::{is_movable, ParticleState};
pub use constraint::{ConstraintKind, DistanceConstraint, Projection};
pub use solver::{relax, RelaxStats};
pub use grid::{ClothMesh, Face};
pub use cloth::Cloth;
pub use config::{GridConfig, SimulationConfig};
pub use observer::{StepObserver, NoOpStepObserver, TracingStepObserver};
pub use error::{ClothError, Result};
