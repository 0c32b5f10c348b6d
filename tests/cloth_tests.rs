use drape::{Cloth, ClothError, GridConfig, NoOpStepObserver, SimulationConfig, StepObserver, TracingStepObserver, Vec3};

fn hanging(cols: usize, rows: usize) -> Cloth<f64> {
    Cloth::new(&GridConfig::new(cols, rows)).unwrap()
}

#[test]
fn three_by_three_single_step() {
    let mut cloth = hanging(3, 3);
    let config = SimulationConfig::new()
        .with_dt(0.4)
        .with_gravity(Vec3::new(0.0, -9.8, 0.0))
        .with_wind(Vec3::zero())
        .with_damping(0.2)
        .with_stiffness(0.9)
        .with_iterations(20);

    let initial = cloth.initial_positions().to_vec();
    cloth.step(&config, &mut NoOpStepObserver).unwrap();

    for (i, (p, p0)) in cloth.positions().iter().zip(&initial).enumerate() {
        if cloth.is_pinned(i) {
            assert_eq!(p, p0, "pinned particle {} moved", i);
        } else {
            assert!(p.y < p0.y, "particle {} did not fall: {} -> {}", i, p0.y, p.y);
        }
    }

    // Bend and structural links still disagree after one step.
    let strain = cloth.max_strain();
    assert!(strain > 0.2 && strain < 0.45, "one-step strain {}", strain);

    cloth.run(5, &config, &mut NoOpStepObserver).unwrap();
    for c in cloth.structural_constraints() {
        let err = c.error(cloth.positions()).abs();
        assert!(err < 0.05, "constraint {}-{} off by {}", c.a, c.b, err);
    }
}

#[test]
fn pinned_row_never_moves() {
    let mut cloth = hanging(8, 6);
    let config = SimulationConfig::reference_scene();
    let initial = cloth.initial_positions().to_vec();
    for _ in 0..30 {
        cloth.step(&config, &mut NoOpStepObserver).unwrap();
        for col in 0..cloth.columns() {
            let i = cloth.index(col, 0);
            assert_eq!(cloth.positions()[i], initial[i]);
        }
    }
}

#[test]
fn at_rest_without_forces() {
    let mut cloth = hanging(5, 5);
    let config = SimulationConfig::new().with_gravity(Vec3::zero());
    cloth.run(10, &config, &mut NoOpStepObserver).unwrap();
    assert_eq!(cloth.positions(), cloth.initial_positions());
}

#[test]
fn wind_pushes_sheet_sideways() {
    let mut cloth = hanging(6, 5);
    cloth.run(10, &SimulationConfig::reference_scene(), &mut NoOpStepObserver).unwrap();
    let bottom = cloth.position_at(3, 4).unwrap();
    assert!(bottom.z > 0.0, "z = {}", bottom.z);
    assert!(cloth.positions().iter().all(|p| p.is_finite()));
}

#[derive(Default)]
struct Recorder {
    integrations: usize,
    passes: usize,
    completed: Vec<u64>,
}

impl StepObserver for Recorder {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.passes += 1;
    }

    fn on_step_complete(&mut self, step: u64) {
        self.completed.push(step);
    }
}

#[test]
fn observer_sees_every_phase() {
    let mut cloth = hanging(4, 4);
    let mut recorder = Recorder::default();
    let config = SimulationConfig::new().with_iterations(12);
    cloth.run(3, &config, &mut recorder).unwrap();
    assert_eq!(recorder.integrations, 3);
    assert_eq!(recorder.passes, 36);
    assert_eq!(recorder.completed, [1, 2, 3]);
    assert_eq!(cloth.steps_taken(), 3);
}

#[test]
fn tracing_observer_counts_nothing_on_healthy_sheet() {
    let mut cloth = hanging(4, 4);
    let mut observer = TracingStepObserver::new();
    cloth.run(5, &SimulationConfig::reference_scene(), &mut observer).unwrap();
    assert_eq!(observer.degenerate_count(), 0);
    assert_eq!(cloth.last_relax_stats().degenerate, 0);
}

#[test]
fn run_stops_on_invalid_config() {
    let mut cloth = hanging(3, 3);
    let config = SimulationConfig::new().with_dt(-1.0);
    assert_eq!(cloth.run(4, &config, &mut NoOpStepObserver), Err(ClothError::InvalidTimeStep));
    assert_eq!(cloth.steps_taken(), 0);
}

#[test]
fn face_buffer_for_renderer() {
    let cloth = hanging(40, 25);
    let indices = cloth.face_indices();
    assert_eq!(indices.len(), 4 * 39 * 24);
    assert_eq!(&indices[..4], &[0, 1, 26, 25]);
    assert!(indices.iter().all(|&i| (i as usize) < cloth.particle_count()));
}
