use drape::{relax, ConstraintKind, DistanceConstraint, NoOpStepObserver, Vec3};

fn residual_after(passes: usize) -> f64 {
    // Particle 0 pinned, particle 1 displaced so the violation is 1.0.
    let mut positions = vec![Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
    let structural = [DistanceConstraint::new(0, 1, 1.0, ConstraintKind::Structural)];
    relax(&mut positions, 2, &structural, &[], passes, 0.9, &mut NoOpStepObserver);
    assert_eq!(positions[0], Vec3::zero());
    structural[0].error(&positions)
}

#[test]
fn residual_decays_geometrically() {
    for n in 1..=5 {
        let expected = 0.1f64.powi(n as i32);
        let got = residual_after(n);
        assert!((got - expected).abs() < 1e-12, "n = {}: {} vs {}", n, got, expected);
    }
}

#[test]
fn twenty_passes_effectively_converge() {
    assert!(residual_after(20).abs() < 1e-12);
}

#[test]
fn zero_passes_leave_positions_alone() {
    assert!((residual_after(0) - 1.0).abs() < 1e-15);
}

#[test]
fn anchored_pairs_untouched() {
    // rows == 2: indices 0 and 2 are both pinned.
    let mut positions = vec![
        Vec3::new(0.0f32, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
    ];
    let structural = [DistanceConstraint::new(0, 2, 1.0, ConstraintKind::Structural)];
    let stats = relax(&mut positions, 2, &structural, &[], 4, 0.9, &mut NoOpStepObserver);
    assert_eq!(stats.anchored, 4);
    assert_eq!(positions[2], Vec3::new(3.0, 0.0, 0.0));
}
