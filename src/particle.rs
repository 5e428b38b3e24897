//! Point masses: the body contract the force models write into, and a
//! Verlet particle that implements it.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A body that can report its position and accumulate force for the
/// current tick.
///
/// Resetting the accumulator and integrating it are the host's job; the
/// blob only ever calls these two methods.
pub trait PointMass<F: Float> {
    fn position(&self) -> Vec2<F>;
    fn add_force(&mut self, force: Vec2<F>);
}

/// Creates bodies for a blob at construction and hands back their handles.
///
/// A handle is the body's index in the slice later passed to
/// [`Blob::tick`](crate::blob::Blob::tick).
pub trait BodyFactory<F: Float> {
    fn spawn(&mut self, position: Vec2<F>) -> usize;
}

/// A Verlet particle with a force accumulator.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub force: Vec2<F>,
    pub mass: F,
    pub inv_mass: F,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec2<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            force: Vec2::zero(),
            mass,
            inv_mass: inverse_mass(mass),
            pinned: false,
        }
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::zero();
    }

    /// Advance one step using the accumulated force plus `gravity`, then
    /// clear the accumulator.
    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>, damping: F) {
        if self.pinned {
            self.clear_force();
            return;
        }
        let accel = self.force.scale(self.inv_mass) + gravity;
        let velocity = (self.pos - self.prev_pos).scale(damping);
        let new_pos = self.pos + velocity + accel.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.clear_force();
    }

    /// Freeze in place: later forces and gravity are ignored.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.inv_mass = F::zero();
        self.prev_pos = self.pos;
    }
}

fn inverse_mass<F: Float>(mass: F) -> F {
    if mass.is_near_zero(F::from_f32(1e-10)) {
        F::zero()
    } else {
        F::one() / mass
    }
}

impl<F: Float> PointMass<F> for Particle<F> {
    fn position(&self) -> Vec2<F> {
        self.pos
    }

    fn add_force(&mut self, force: Vec2<F>) {
        if !self.pinned {
            self.force += force;
        }
    }
}

/// Spawns equal-mass particles into a particle list.
pub struct ParticleSpawner<'a, F: Float> {
    particles: &'a mut AllocVec<Particle<F>>,
    mass: F,
}

impl<'a, F: Float> ParticleSpawner<'a, F> {
    pub fn new(particles: &'a mut AllocVec<Particle<F>>, mass: F) -> Self {
        ParticleSpawner { particles, mass }
    }
}

impl<F: Float> BodyFactory<F> for ParticleSpawner<'_, F> {
    fn spawn(&mut self, position: Vec2<F>) -> usize {
        let idx = self.particles.len();
        self.particles.push(Particle::new(position, self.mass));
        idx
    }
}
