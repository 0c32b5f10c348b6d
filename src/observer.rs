//! Step observer trait for monitoring cloth simulation progress.

use crate::constraint::ConstraintKind;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (debugging, profiling,
/// frame capture). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all movable particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over both constraint lists.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a constraint is skipped because its endpoints coincide.
    /// `index` is the constraint's position within its own list.
    fn on_degenerate_constraint(&mut self, _kind: ConstraintKind, _index: usize) {}

    /// Called when a simulation step is fully complete. `step` counts from 1.
    fn on_step_complete(&mut self, _step: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards step events to `tracing`.
///
/// Steps are logged at `debug`, passes at `trace`, and skipped coincident
/// constraints at `warn`.
#[derive(Default)]
pub struct TracingStepObserver {
    degenerate: usize,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coincident-endpoint skips seen since construction.
    pub fn degenerate_count(&self) -> usize {
        self.degenerate
    }
}

impl StepObserver for TracingStepObserver {
    fn on_integrate(&mut self) {
        tracing::trace!("integrated movable particles");
    }

    fn on_constraint_iteration(&mut self, iteration: usize) {
        tracing::trace!(iteration, "relaxation pass");
    }

    fn on_degenerate_constraint(&mut self, kind: ConstraintKind, index: usize) {
        self.degenerate += 1;
        tracing::warn!(?kind, index, "skipped constraint with coincident endpoints");
    }

    fn on_step_complete(&mut self, step: u64) {
        tracing::debug!(step, degenerate = self.degenerate, "step complete");
    }
}
