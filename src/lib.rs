//! Squishy 2D soft-body blobs for games.
//!
//! A blob is a ring of point masses around a centre mass. Springs tie every
//! ring point to the centre and to its neighbours, and a shear force on each
//! centre-fan triangle keeps the enclosed area near its rest value, so the
//! body deforms freely but resists being squashed flat.
//!
//! # Features
//!
//! - **Force model only**: [`Blob::tick`] accumulates forces onto any
//!   [`PointMass`]; your engine integrates them
//! - **Ring topology**: centre springs, neighbour springs up to order `K`,
//!   and `N` fan triangles
//! - **Volume preservation**: per-triangle shear force, zero net force and
//!   torque
//! - **Diagnostics**: [`BlobView`] for areas, strains and inverted triangles
//! - **Reference host**: [`World`] with Verlet particles for tests and demos
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use blobby::{BlobConfig, NoOpStepObserver, SolverConfig, Vec2, World};
//!
//! let mut world: World<f32> = World::new();
//! let blob = world
//!     .spawn_blob(&BlobConfig::new().with_points(12), Vec2::new(0.0, 5.0))
//!     .unwrap();
//! let config = SolverConfig::new().with_gravity(Vec2::new(0.0, -9.81));
//! world.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
//! assert_eq!(world.view(blob).size(), 12);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod topology;
pub mod volume;
pub mod blob;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::{BodyFactory, Particle, ParticleSpawner, PointMass};
pub use spring::{apply_spring, spring_forces, ForcePair, SpringLink};
pub use topology::{FanTriangle, NeighborLink, RingTopology};
pub use volume::{apply_volume_force, signed_area, triangle_forces, volume_force, VolumeTriangle};
pub use blob::{Blob, BlobView};
pub use world::World;
pub use config::{BlobConfig, SolverConfig};
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::{BlobError, BlobResult};
