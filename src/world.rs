//! Fixed-step host that owns particles and blobs and integrates them.

use crate::blob::{Blob, BlobView};
use crate::config::{BlobConfig, SolverConfig};
use crate::error::BlobResult;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleSpawner};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Particles plus the blobs that push them around.
///
/// Every blob gets freshly spawned particles, so no particle is ever
/// driven by two blobs.
pub struct World<F: Float> {
    particles: AllocVec<Particle<F>>,
    blobs: AllocVec<Blob<F>>,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        World {
            particles: AllocVec::new(),
            blobs: AllocVec::new(),
        }
    }

    pub fn add_particle(&mut self, particle: Particle<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        idx
    }

    /// Spawn a blob centred on `centre` with unit-mass particles.
    pub fn spawn_blob(&mut self, config: &BlobConfig<F>, centre: Vec2<F>) -> BlobResult<usize> {
        self.spawn_blob_with_mass(config, centre, F::one())
    }

    /// Spawn a blob whose centre and ring particles all have `mass`.
    pub fn spawn_blob_with_mass(
        &mut self,
        config: &BlobConfig<F>,
        centre: Vec2<F>,
        mass: F,
    ) -> BlobResult<usize> {
        let blob = Blob::new(config, centre, &mut ParticleSpawner::new(&mut self.particles, mass))?;
        let idx = self.blobs.len();
        self.blobs.push(blob);
        log::debug!("world: spawned blob {} ({} particles total)", idx, self.particles.len());
        Ok(idx)
    }

    /// Hold particle `index` fixed from now on.
    pub fn pin(&mut self, index: usize) {
        self.particles[index].pin();
    }

    /// Anchor blob `index` by pinning its centre; the ring still deforms.
    pub fn pin_centre(&mut self, index: usize) {
        let centre = self.blobs[index].centre();
        self.pin(centre);
    }

    /// Advance by `dt`, re-accumulating blob forces every sub-step.
    ///
    /// A `sub_steps` of zero is treated as one.
    pub fn step<O: StepObserver>(&mut self, dt: F, config: &SolverConfig<F>, observer: &mut O) {
        let sub_steps = config.sub_steps.max(1);
        let sub_dt = dt / F::from_usize(sub_steps);

        for sub in 0..sub_steps {
            for p in self.particles.iter_mut() {
                p.clear_force();
            }

            for (i, blob) in self.blobs.iter().enumerate() {
                blob.tick(&mut self.particles);
                observer.on_blob_tick(i);
            }

            for p in self.particles.iter_mut() {
                p.integrate(sub_dt, config.gravity, config.damping);
            }
            observer.on_integrate(sub);
        }

        observer.on_step_complete();
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn blob_count(&self) -> usize { self.blobs.len() }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn particle(&self, index: usize) -> &Particle<F> { &self.particles[index] }
    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<F> { &mut self.particles[index] }
    pub fn blob(&self, index: usize) -> &Blob<F> { &self.blobs[index] }

    /// Geometry queries for blob `index` against current positions.
    pub fn view(&self, index: usize) -> BlobView<'_, F, Particle<F>> {
        self.blobs[index].view(&self.particles)
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new()
    }
}
