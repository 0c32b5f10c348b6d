//! Configuration types for the grid and the per-step simulation parameters.

use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::vec::Vec3;

/// Dimensions of the cloth sheet.
///
/// `columns` run along X, `rows` along Y. Row 0 is the pinned edge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    /// Number of particle columns. Default: 40.
    pub columns: usize,
    /// Number of particle rows. Default: 25.
    pub rows: usize,
    /// Nominal distance between neighbouring particles. Default: 1.0.
    pub spacing: F,
}

impl<F: Float> GridConfig<F> {
    /// Create a grid config with unit spacing.
    pub fn new(columns: usize, rows: usize) -> Self {
        GridConfig { columns, rows, spacing: F::one() }
    }

    /// Set the unit spacing.
    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    /// Reject grids smaller than 2x2 and non-positive spacing.
    pub fn validate(&self) -> Result<()> {
        if self.columns < 2 || self.rows < 2 {
            return Err(ClothError::InvalidGridDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(ClothError::InvalidSpacing);
        }
        Ok(())
    }
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        Self::new(40, 25)
    }
}

/// Per-step parameters for integration and constraint relaxation.
///
/// # Builder Pattern
/// ```
/// use drape::config::SimulationConfig;
/// use drape::vec::Vec3;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_dt(0.4)
///     .with_iterations(20)
///     .with_wind(Vec3::new(10.0, 0.0, 2.0))
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig<F: Float> {
    /// Time step per call. Default: 0.4.
    pub dt: F,
    /// Velocity loss per step in [0, 1]; `1 - damping` of the implied
    /// velocity carries over. Default: 0.2.
    pub damping: F,
    /// Fraction of each constraint's violation removed per visit. Default: 0.9.
    pub stiffness: F,
    /// Relaxation passes per step. No early exit. Default: 20.
    pub iterations: usize,
    /// Wind acceleration. Default: zero.
    pub wind: Vec3<F>,
    /// Gravity acceleration. Default: (0, -9.8, 0).
    pub gravity: Vec3<F>,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            dt: F::from_f64(0.4),
            damping: F::from_f64(0.2),
            stiffness: F::from_f64(0.9),
            iterations: 20,
            wind: Vec3::zero(),
            gravity: Vec3::new(F::zero(), F::from_f64(-9.8), F::zero()),
        }
    }

    /// Defaults plus the steady side wind of the hanging-sheet scene.
    pub fn reference_scene() -> Self {
        Self::new().with_wind(Vec3::new(F::from_f64(10.0), F::zero(), F::from_f64(2.0)))
    }

    /// Set the time step.
    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the constraint stiffness.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the wind acceleration.
    pub fn with_wind(mut self, wind: Vec3<F>) -> Self {
        self.wind = wind;
        self
    }

    /// Set the gravity acceleration.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sum of the external accelerations applied to movable particles.
    pub fn acceleration(&self) -> Vec3<F> {
        self.wind + self.gravity
    }

    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= F::zero() {
            return Err(ClothError::InvalidTimeStep);
        }
        if !self.damping.in_unit_interval() {
            return Err(ClothError::InvalidDamping);
        }
        if !self.stiffness.in_unit_interval() {
            return Err(ClothError::InvalidStiffness);
        }
        if !self.wind.is_finite() || !self.gravity.is_finite() {
            return Err(ClothError::InvalidAcceleration);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
