use drape::{ClothMesh, ConstraintKind, Face};

fn structural_formula(cols: usize, rows: usize) -> usize {
    (cols - 1) * (rows - 1) * 3 + (cols - 1) + (rows - 1)
}

#[test]
fn single_cell_counts() {
    let mesh: ClothMesh<f32> = ClothMesh::build(2, 2, 1.0);
    assert_eq!(mesh.particle_count(), 4);
    assert_eq!(mesh.faces(), &[Face([0, 1, 3, 2])]);
    // Four edges plus one diagonal.
    assert_eq!(mesh.structural().len(), 5);
    assert!(mesh.bend().is_empty());
}

#[test]
fn counts_match_formula() {
    for &(cols, rows, bend) in &[(3, 3, 6), (4, 3, 6), (3, 4, 10), (5, 4, 18), (40, 25, 1372)] {
        let mesh: ClothMesh<f64> = ClothMesh::build(cols, rows, 1.0);
        assert_eq!(mesh.particle_count(), cols * rows);
        assert_eq!(mesh.face_count(), (cols - 1) * (rows - 1));
        assert_eq!(mesh.structural().len(), structural_formula(cols, rows), "{}x{}", cols, rows);
        assert_eq!(mesh.bend().len(), bend, "{}x{}", cols, rows);
    }
}

#[test]
fn structural_order_per_particle() {
    let mesh: ClothMesh<f32> = ClothMesh::build(3, 3, 1.0);
    let first: Vec<_> = mesh.structural().iter().take(3).map(|c| (c.a, c.b)).collect();
    // Next row, diagonal, next column.
    assert_eq!(first, [(0, 1), (0, 4), (0, 3)]);
    assert!(mesh.structural().iter().all(|c| c.kind == ConstraintKind::Structural));
}

#[test]
fn rest_lengths_scale_with_spacing() {
    let mesh: ClothMesh<f64> = ClothMesh::build(3, 3, 0.5);
    let diag = mesh.structural()[1].rest_length;
    assert!((diag - 0.5 * std::f64::consts::SQRT_2).abs() < 1e-12);
    for c in mesh.bend() {
        assert!(c.rest_length > 0.99, "bend rest {} too short", c.rest_length);
    }
}

#[test]
fn exactly_one_pinned_per_column() {
    let mesh: ClothMesh<f32> = ClothMesh::build(6, 4, 1.0);
    let pinned = (0..mesh.particle_count())
        .filter(|&i| !drape::is_movable(i, mesh.rows()))
        .count();
    assert_eq!(pinned, 6);
}
