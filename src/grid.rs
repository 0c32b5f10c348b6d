//! Cloth topology: particles, quad faces, structural and bend constraints.

use crate::constraint::{ConstraintKind, DistanceConstraint};
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// One quadrilateral grid cell, for rendering only.
///
/// Corners are `[i, i + 1, i + rows + 1, i + rows]` for the cell whose
/// first corner is particle `i`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Face(pub [usize; 4]);

impl Face {
    pub fn indices(&self) -> [usize; 4] { self.0 }
}

/// Static topology of a cloth sheet, built once before simulation.
pub struct ClothMesh<F: Float> {
    particles: AllocVec<Vec3<F>>,
    faces: AllocVec<Face>,
    structural: AllocVec<DistanceConstraint<F>>,
    bend: AllocVec<DistanceConstraint<F>>,
    columns: usize,
    rows: usize,
}

impl<F: Float> ClothMesh<F> {
    /// Build a `columns` x `rows` sheet.
    ///
    /// Particles are flattened column-major, `index = column * rows + row`,
    /// and start at `(column, row, 0) * spacing`.
    ///
    /// For every particle, in index order:
    /// - Structural: next row (rest = spacing), diagonal to next row and
    ///   column (rest = spacing * sqrt(2)), next column (rest = spacing).
    /// - Bend (even columns only): the same three directions two cells
    ///   away, rest lengths doubled.
    ///
    /// A constraint is emitted only if its far endpoint is inside the grid.
    pub fn build(columns: usize, rows: usize, spacing: F) -> Self {
        let count = columns * rows;
        let mut particles = AllocVec::with_capacity(count);
        let mut faces = AllocVec::with_capacity(columns.saturating_sub(1) * rows.saturating_sub(1));
        let mut structural = AllocVec::new();
        let mut bend = AllocVec::new();

        let diag_length = (spacing * spacing + spacing * spacing).sqrt();
        let bend_length = spacing * F::two();
        let bend_diag_length = diag_length * F::two();

        for col in 0..columns {
            for row in 0..rows {
                let i = col * rows + row;
                particles.push(Vec3::new(
                    F::from_usize(col) * spacing,
                    F::from_usize(row) * spacing,
                    F::zero(),
                ));

                let has_next_row = row + 1 < rows;
                let has_next_col = col + 1 < columns;

                if has_next_row && has_next_col {
                    faces.push(Face([i, i + 1, i + rows + 1, i + rows]));
                }

                if has_next_row {
                    structural.push(DistanceConstraint::new(i, i + 1, spacing, ConstraintKind::Structural));
                }
                if has_next_row && has_next_col {
                    structural.push(DistanceConstraint::new(i, i + rows + 1, diag_length, ConstraintKind::Structural));
                }
                if has_next_col {
                    structural.push(DistanceConstraint::new(i, i + rows, spacing, ConstraintKind::Structural));
                }

                if col % 2 == 0 {
                    let has_skip_row = row + 2 < rows;
                    let has_skip_col = col + 2 < columns;
                    if has_skip_row {
                        bend.push(DistanceConstraint::new(i, i + 2, bend_length, ConstraintKind::Bend));
                    }
                    if has_skip_row && has_skip_col {
                        bend.push(DistanceConstraint::new(i, i + 2 * (rows + 1), bend_diag_length, ConstraintKind::Bend));
                    }
                    if has_skip_col {
                        bend.push(DistanceConstraint::new(i, i + 2 * rows, bend_length, ConstraintKind::Bend));
                    }
                }
            }
        }

        ClothMesh { particles, faces, structural, bend, columns, rows }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        col * self.rows + row
    }

    /// Initial particle positions.
    pub fn particles(&self) -> &[Vec3<F>] { &self.particles }
    pub fn faces(&self) -> &[Face] { &self.faces }
    pub fn structural(&self) -> &[DistanceConstraint<F>] { &self.structural }
    pub fn bend(&self) -> &[DistanceConstraint<F>] { &self.bend }
    pub fn columns(&self) -> usize { self.columns }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn face_count(&self) -> usize { self.faces.len() }
    pub fn constraint_count(&self) -> usize { self.structural.len() + self.bend.len() }

    /// Faces flattened to a `u32` index buffer, four indices per quad.
    pub fn face_indices(&self) -> AllocVec<u32> {
        self.faces
            .iter()
            .flat_map(|f| f.indices().into_iter().map(|i| i as u32))
            .collect()
    }
}
