//! Configuration records for blobs and the reference host.

use crate::error::{BlobError, BlobResult};
use crate::float::Float;
use crate::topology::RingTopology;
use crate::vec::Vec2;

/// Shape and stiffness of a blob, fixed at construction.
///
/// # Builder Pattern
/// ```
/// use blobby::config::BlobConfig;
///
/// let config: BlobConfig<f32> = BlobConfig::new()
///     .with_points(16)
///     .with_connect_every(3)
///     .with_radius(1.5)
///     .with_volume_stiffness(4.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlobConfig<F: Float> {
    /// Number of ring points N. Default: 10.
    pub points: usize,
    /// Connection order K: each point springs to its neighbours up to K
    /// steps away along the ring. Default: 2.
    pub connect_every: usize,
    /// Rest distance from the centre to every ring point. Default: 2.0.
    pub radius: F,
    /// Stiffness of the centre-to-point springs. Default: 1.0.
    pub centre_stiffness: F,
    /// Stiffness of the point-to-neighbour springs. Default: 1.0.
    pub surface_stiffness: F,
    /// Stiffness of the area-preserving shear force. Default: 1.0.
    pub volume_stiffness: F,
}

impl<F: Float> BlobConfig<F> {
    pub fn new() -> Self {
        BlobConfig {
            points: 10,
            connect_every: 2,
            radius: F::two(),
            centre_stiffness: F::one(),
            surface_stiffness: F::one(),
            volume_stiffness: F::one(),
        }
    }

    pub fn with_points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn with_connect_every(mut self, connect_every: usize) -> Self {
        self.connect_every = connect_every;
        self
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_centre_stiffness(mut self, stiffness: F) -> Self {
        self.centre_stiffness = stiffness;
        self
    }

    pub fn with_surface_stiffness(mut self, stiffness: F) -> Self {
        self.surface_stiffness = stiffness;
        self
    }

    pub fn with_volume_stiffness(mut self, stiffness: F) -> Self {
        self.volume_stiffness = stiffness;
        self
    }

    /// Set all three stiffnesses at once.
    pub fn with_stiffness(self, stiffness: F) -> Self {
        self.with_centre_stiffness(stiffness)
            .with_surface_stiffness(stiffness)
            .with_volume_stiffness(stiffness)
    }

    /// Check the ring shape and that every scalar is usable.
    pub fn validate(&self) -> BlobResult<RingTopology> {
        let topology = RingTopology::new(self.points, self.connect_every)?;
        if !self.radius.is_finite() || self.radius <= F::zero() {
            return Err(BlobError::InvalidRadius);
        }
        let stiffnesses = [self.centre_stiffness, self.surface_stiffness, self.volume_stiffness];
        if stiffnesses.iter().any(|k| !k.is_finite()) {
            return Err(BlobError::InvalidStiffness);
        }
        Ok(topology)
    }
}

impl<F: Float> Default for BlobConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-step settings for [`World`](crate::world::World).
///
/// ```
/// use blobby::config::SolverConfig;
/// use blobby::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_gravity(Vec2::new(0.0, -9.81))
///     .with_damping(0.98)
///     .with_sub_steps(4);
/// assert_eq!(config.sub_steps, 4);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: Vec2<F>,
    /// Velocity damping factor [0, 1]. 1.0 = no damping. Default: 0.99.
    pub damping: F,
    /// Number of sub-steps per frame. Forces are re-accumulated every
    /// sub-step. Default: 1.
    pub sub_steps: usize,
}

impl<F: Float> SolverConfig<F> {
    pub fn new() -> Self {
        SolverConfig {
            gravity: Vec2::zero(),
            damping: F::from_f32(0.99),
            sub_steps: 1,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
