//! Hanging cloth sheet: owns the topology and particle state and steps them.

use crate::config::{GridConfig, SimulationConfig};
use crate::constraint::DistanceConstraint;
use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::grid::{ClothMesh, Face};
use crate::observer::StepObserver;
use crate::particle::ParticleState;
use crate::solver::{relax, RelaxStats};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A cloth sheet pinned along row 0.
///
/// Topology and rest lengths are fixed at construction. Each [`step`](Self::step)
/// mutates the position buffer in place; renderers read it back through
/// [`positions`](Self::positions) together with the unchanging [`faces`](Self::faces).
pub struct Cloth<F: Float> {
    mesh: ClothMesh<F>,
    state: ParticleState<F>,
    steps: u64,
    last_relax: RelaxStats,
}

impl<F: Float> Cloth<F> {
    /// Validate the grid and build its topology.
    pub fn new(grid: &GridConfig<F>) -> Result<Self> {
        grid.validate()?;
        let mesh = ClothMesh::build(grid.columns, grid.rows, grid.spacing);
        let state = ParticleState::new(mesh.particles().to_vec(), grid.rows);
        tracing::debug!(
            columns = grid.columns,
            rows = grid.rows,
            particles = mesh.particle_count(),
            faces = mesh.face_count(),
            structural = mesh.structural().len(),
            bend = mesh.bend().len(),
            "built cloth mesh"
        );
        Ok(Cloth { mesh, state, steps: 0, last_relax: RelaxStats::default() })
    }

    /// Advance the sheet by one step.
    ///
    /// 1. Snapshot the current positions.
    /// 2. Integrate movable particles against the previous-positions buffer
    ///    left by the last step.
    /// 3. Relax all constraints for `config.iterations` passes.
    /// 4. Store the step-1 snapshot as the new previous positions.
    ///
    /// The inertial term of the next step is therefore measured from the
    /// pre-integration positions, not the post-relaxation ones.
    ///
    /// Fails if `config` is invalid (nothing is touched) or if any particle
    /// ends the step with a non-finite position.
    pub fn step<O: StepObserver>(
        &mut self,
        config: &SimulationConfig<F>,
        observer: &mut O,
    ) -> Result<()> {
        config.validate()?;

        let snapshot = self.state.positions().to_vec();

        self.state.integrate(config.dt, config.acceleration(), config.damping);
        observer.on_integrate();

        let rows = self.state.rows();
        self.last_relax = relax(
            self.state.positions_mut(),
            rows,
            self.mesh.structural(),
            self.mesh.bend(),
            config.iterations,
            config.stiffness,
            observer,
        );

        self.state.set_previous(snapshot);
        self.steps += 1;

        if let Some(index) = self.state.positions().iter().position(|p| !p.is_finite()) {
            return Err(ClothError::NonFinitePosition { index });
        }

        observer.on_step_complete(self.steps);
        Ok(())
    }

    /// Step `steps` times, stopping at the first error.
    pub fn run<O: StepObserver>(
        &mut self,
        steps: usize,
        config: &SimulationConfig<F>,
        observer: &mut O,
    ) -> Result<()> {
        for _ in 0..steps {
            self.step(config, observer)?;
        }
        Ok(())
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        self.mesh.index(col, row)
    }

    /// Position of the particle at `(col, row)`, or `None` outside the grid.
    pub fn position_at(&self, col: usize, row: usize) -> Option<Vec3<F>> {
        if col >= self.columns() || row >= self.rows() {
            return None;
        }
        Some(self.state.positions()[self.index(col, row)])
    }

    /// Checked lookup by flat index.
    pub fn position(&self, index: usize) -> Result<Vec3<F>> {
        self.state
            .positions()
            .get(index)
            .copied()
            .ok_or(ClothError::ParticleOutOfBounds { index, count: self.particle_count() })
    }

    pub fn is_pinned(&self, index: usize) -> bool {
        !self.state.is_movable(index)
    }

    /// Largest relative deviation from rest length over structural constraints.
    pub fn max_strain(&self) -> F {
        let positions = self.state.positions();
        self.mesh
            .structural()
            .iter()
            .fold(F::zero(), |worst, c| worst.max((c.error(positions) / c.rest_length).abs()))
    }

    pub fn positions(&self) -> &[Vec3<F>] { self.state.positions() }
    pub fn previous_positions(&self) -> &[Vec3<F>] { self.state.previous_positions() }
    pub fn initial_positions(&self) -> &[Vec3<F>] { self.mesh.particles() }
    pub fn faces(&self) -> &[Face] { self.mesh.faces() }
    pub fn face_indices(&self) -> AllocVec<u32> { self.mesh.face_indices() }
    pub fn structural_constraints(&self) -> &[DistanceConstraint<F>] { self.mesh.structural() }
    pub fn bend_constraints(&self) -> &[DistanceConstraint<F>] { self.mesh.bend() }
    pub fn mesh(&self) -> &ClothMesh<F> { &self.mesh }
    pub fn last_relax_stats(&self) -> RelaxStats { self.last_relax }
    pub fn steps_taken(&self) -> u64 { self.steps }
    pub fn columns(&self) -> usize { self.mesh.columns() }
    pub fn rows(&self) -> usize { self.mesh.rows() }
    pub fn particle_count(&self) -> usize { self.state.len() }
}
