//! Step observer trait for monitoring simulation progress.

/// Trait for observing [`World::step`](crate::world::World::step).
///
/// All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after blob `index` has accumulated its forces for a sub-step.
    fn on_blob_tick(&mut self, _index: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self, _sub_step: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Reports step progress through the `log` facade at trace level.
#[derive(Debug, Default)]
pub struct LogStepObserver {
    steps: u64,
}

impl LogStepObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed steps seen so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl StepObserver for LogStepObserver {
    fn on_blob_tick(&mut self, index: usize) {
        log::trace!("step {}: blob {} forces accumulated", self.steps, index);
    }

    fn on_integrate(&mut self, sub_step: usize) {
        log::trace!("step {}: sub-step {} integrated", self.steps, sub_step);
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
        log::trace!("step {} complete", self.steps);
    }
}
