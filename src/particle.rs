//! Particle buffers for Verlet integration with implicit velocity.

use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Whether the particle at `index` may move.
///
/// With column-major flattening `index = column * rows + row`, the first
/// particle of every column (row 0) is pinned. `rows` must be non-zero.
#[inline]
pub fn is_movable(index: usize, rows: usize) -> bool {
    debug_assert!(rows > 0, "grid must have at least one row");
    index % rows != 0
}

/// Positions and previous positions of every particle in the sheet.
///
/// Velocity is implicit: `positions[i] - previous_positions[i]`. Mobility
/// is never stored, it follows from the index and the row count.
#[derive(Clone, Debug)]
pub struct ParticleState<F: Float> {
    positions: AllocVec<Vec3<F>>,
    previous_positions: AllocVec<Vec3<F>>,
    rows: usize,
}

impl<F: Float> ParticleState<F> {
    /// Start at rest: previous positions equal the initial positions.
    pub fn new(positions: AllocVec<Vec3<F>>, rows: usize) -> Self {
        let previous_positions = positions.clone();
        ParticleState { positions, previous_positions, rows }
    }

    pub fn is_movable(&self, index: usize) -> bool {
        is_movable(index, self.rows)
    }

    /// Advance every movable particle by one damped Verlet step, in place.
    ///
    /// `new = pos + (1 - damping) * (pos - prev) + dt^2 * acceleration`, with
    /// `prev` read from the previous-positions buffer as it stands. The
    /// caller owns snapshotting and swapping that buffer.
    pub fn integrate(&mut self, dt: F, acceleration: Vec3<F>, damping: F) {
        let retained = F::one() - damping;
        let push = acceleration.scale(dt * dt);
        let rows = self.rows;
        for (index, (pos, prev)) in self
            .positions
            .iter_mut()
            .zip(self.previous_positions.iter())
            .enumerate()
        {
            if !is_movable(index, rows) {
                continue;
            }
            let velocity = (*pos - *prev).scale(retained);
            *pos = *pos + velocity + push;
        }
    }

    /// Replace the previous-positions buffer.
    pub fn set_previous(&mut self, previous: AllocVec<Vec3<F>>) {
        debug_assert_eq!(previous.len(), self.positions.len());
        self.previous_positions = previous;
    }

    /// Implied per-step displacement of a particle.
    pub fn velocity_raw(&self, index: usize) -> Vec3<F> {
        self.positions[index] - self.previous_positions[index]
    }

    pub fn positions(&self) -> &[Vec3<F>] { &self.positions }
    pub fn positions_mut(&mut self) -> &mut [Vec3<F>] { &mut self.positions }
    pub fn previous_positions(&self) -> &[Vec3<F>] { &self.previous_positions }
    pub fn rows(&self) -> usize { self.rows }
    pub fn len(&self) -> usize { self.positions.len() }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }
}
