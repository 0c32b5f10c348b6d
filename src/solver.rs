//! Gauss-Seidel relaxation of the cloth's distance constraints.

use crate::constraint::{DistanceConstraint, Projection};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec3;

/// Tally of constraint visits across all passes of one [`relax`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RelaxStats {
    pub applied: usize,
    pub anchored: usize,
    pub degenerate: usize,
}

impl RelaxStats {
    fn record(&mut self, projection: Projection) {
        match projection {
            Projection::Applied => self.applied += 1,
            Projection::Anchored => self.anchored += 1,
            Projection::Degenerate => self.degenerate += 1,
        }
    }
}

/// Run `iterations` relaxation passes over `positions`, in place.
///
/// Each pass visits every structural constraint and then every bend
/// constraint, in list order. Corrections land immediately, so later
/// constraints in the same pass see earlier results. There is no
/// convergence check; exactly `iterations` passes run.
///
/// `rows` is the grid's row count and decides which endpoints are pinned;
/// it must be non-zero whenever either list is non-empty.
pub fn relax<F: Float, O: StepObserver>(
    positions: &mut [Vec3<F>],
    rows: usize,
    structural: &[DistanceConstraint<F>],
    bend: &[DistanceConstraint<F>],
    iterations: usize,
    stiffness: F,
    observer: &mut O,
) -> RelaxStats {
    let mut stats = RelaxStats::default();

    for i in 0..iterations {
        for list in [structural, bend] {
            for (index, constraint) in list.iter().enumerate() {
                let projection = constraint.project(positions, rows, stiffness);
                if projection == Projection::Degenerate {
                    observer.on_degenerate_constraint(constraint.kind, index);
                }
                stats.record(projection);
            }
        }
        observer.on_constraint_iteration(i);
    }

    stats
}
