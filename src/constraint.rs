//! Distance constraints between pairs of cloth particles.

use crate::float::Float;
use crate::particle::is_movable;
use crate::vec::Vec3;

/// Which list a constraint belongs to.
///
/// Structural constraints join direct neighbours; bend constraints join
/// particles two cells apart and resist local buckling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Structural,
    Bend,
}

/// Keeps particles `a` and `b` at `rest_length` apart.
///
/// The rest length comes from the undeformed grid and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub kind: ConstraintKind,
}

/// Outcome of a single constraint visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    /// At least one endpoint moved (or would have, for a zero correction).
    Applied,
    /// Both endpoints are pinned.
    Anchored,
    /// Endpoints coincide; no direction to push along.
    Degenerate,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F, kind: ConstraintKind) -> Self {
        DistanceConstraint { a, b, rest_length, kind }
    }

    /// Current length of the constraint.
    pub fn length(&self, positions: &[Vec3<F>]) -> F {
        positions[self.a].distance(positions[self.b])
    }

    /// Signed violation: positive when stretched, negative when compressed.
    pub fn error(&self, positions: &[Vec3<F>]) -> F {
        self.length(positions) - self.rest_length
    }

    /// Move the endpoints toward the rest length, in place.
    ///
    /// `stiffness` of the violation is removed, split evenly when both ends
    /// are movable and given entirely to the movable end otherwise. Pinned
    /// endpoints (row 0 of a grid with `rows` rows) are never written.
    pub fn project(&self, positions: &mut [Vec3<F>], rows: usize, stiffness: F) -> Projection {
        let a_movable = is_movable(self.a, rows);
        let b_movable = is_movable(self.b, rows);
        if !a_movable && !b_movable {
            return Projection::Anchored;
        }

        let delta = positions[self.b] - positions[self.a];
        let dist = delta.length();
        if dist.is_near_zero(F::from_f64(1e-12)) {
            return Projection::Degenerate;
        }

        let direction = delta.scale(F::one() / dist);
        let correction = stiffness * (dist - self.rest_length);

        if a_movable && b_movable {
            let half = direction.scale(correction / F::two());
            positions[self.a] += half;
            positions[self.b] -= half;
        } else if a_movable {
            positions[self.a] += direction.scale(correction);
        } else {
            positions[self.b] -= direction.scale(correction);
        }
        Projection::Applied
    }
}
