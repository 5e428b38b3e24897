//! Squishy 2D blob: a ring of point masses around a centre mass.
//!
//! Every tick the blob accumulates three kinds of force onto its bodies:
//!
//! 1. centre springs, rest length `radius`;
//! 2. ring springs between each point and its neighbours up to order `K`,
//!    rest length `2 r sin(n pi / N)` for order `n`;
//! 3. a shear force on every fan triangle `(centre, p[i], p[i+1])` pulling
//!    its doubled signed area toward `r^2 sin(2 pi / N)`.
//!
//! All rest values come from the regular polygon the blob is built on and
//! are never recomputed. The blob only adds forces; clearing accumulators
//! and integrating is the host's job.

use crate::config::BlobConfig;
use crate::error::BlobResult;
use crate::float::Float;
use crate::particle::{BodyFactory, PointMass};
use crate::spring::SpringLink;
use crate::topology::RingTopology;
use crate::vec::Vec2;
use crate::volume::{apply_volume_force, signed_area};
use alloc::vec::Vec as AllocVec;

/// A soft body made of one centre mass and a ring of `N` point masses.
#[derive(Clone, Debug)]
pub struct Blob<F: Float> {
    centre: usize,
    points: AllocVec<usize>,
    topology: RingTopology,
    radius: F,
    centre_stiffness: F,
    surface_stiffness: F,
    volume_stiffness: F,
    /// Indexed by connection order minus one.
    rest_lengths: AllocVec<F>,
    rest_area: F,
    /// `N` centre links, then `N` ring links per order `1..=K`.
    links: AllocVec<SpringLink<F>>,
}

impl<F: Float> Blob<F> {
    /// Validate `config`, spawn the centre at `centre` and the ring points
    /// on a regular polygon around it.
    ///
    /// Point `i` is placed at `360 * i / N` degrees, `radius` away from the
    /// centre. Nothing is spawned if the config is rejected.
    pub fn new<B: BodyFactory<F>>(
        config: &BlobConfig<F>,
        centre: Vec2<F>,
        factory: &mut B,
    ) -> BlobResult<Self> {
        let topology = config.validate()?;
        let n = topology.points();

        let centre_handle = factory.spawn(centre);
        let mut points = AllocVec::with_capacity(n);
        for i in 0..n {
            points.push(factory.spawn(ring_position(centre, config.radius, i, n)));
        }

        let np = F::from_usize(n);
        let rest_lengths: AllocVec<F> = (1..=topology.connect_every())
            .map(|order| F::two() * config.radius * (F::from_usize(order) * F::pi() / np).sin())
            .collect();
        let rest_area = config.radius * config.radius * (F::two() * F::pi() / np).sin();

        let mut links = AllocVec::with_capacity(n + topology.neighbor_count());
        links.extend(
            points.iter().map(|&p| SpringLink::new(centre_handle, p, config.radius, config.centre_stiffness)),
        );
        links.extend(topology.neighbor_links().map(|link| {
            SpringLink::new(
                points[link.i],
                points[link.j],
                rest_lengths[link.order - 1],
                config.surface_stiffness,
            )
        }));

        log::debug!(
            "blob: {} points, connect_every {}, radius {:?}, centre body {}",
            n,
            topology.connect_every(),
            config.radius,
            centre_handle,
        );

        Ok(Blob {
            centre: centre_handle,
            points,
            topology,
            radius: config.radius,
            centre_stiffness: config.centre_stiffness,
            surface_stiffness: config.surface_stiffness,
            volume_stiffness: config.volume_stiffness,
            rest_lengths,
            rest_area,
            links,
        })
    }

    /// Accumulate one fixed step's worth of spring and volume forces.
    ///
    /// `bodies` must be the slice the factory's handles index into.
    pub fn tick<P: PointMass<F>>(&self, bodies: &mut [P]) {
        for link in &self.links {
            link.apply(bodies);
        }

        let k = self.volume_stiffness;
        for tri in self.topology.fan_triangles() {
            let (c, a, b) = (self.centre, self.points[tri.i], self.points[tri.next]);
            let area = signed_area(bodies[c].position(), bodies[a].position(), bodies[b].position());
            if area < F::zero() {
                log::trace!("fan triangle {} inverted (area {:?})", tri.i, area);
            }
            let delta = self.rest_area - area;
            apply_volume_force(bodies, c, a, b, delta, k);
            apply_volume_force(bodies, a, b, c, delta, k);
            apply_volume_force(bodies, b, c, a, delta, k);
        }
    }

    /// Read-only geometry queries against the current body positions.
    pub fn view<'a, P: PointMass<F>>(&'a self, bodies: &'a [P]) -> BlobView<'a, F, P> {
        BlobView { blob: self, bodies }
    }

    pub fn centre(&self) -> usize { self.centre }
    pub fn points(&self) -> &[usize] { &self.points }
    pub fn size(&self) -> usize { self.points.len() }
    pub fn topology(&self) -> &RingTopology { &self.topology }
    pub fn radius(&self) -> F { self.radius }
    pub fn centre_stiffness(&self) -> F { self.centre_stiffness }
    pub fn surface_stiffness(&self) -> F { self.surface_stiffness }
    pub fn volume_stiffness(&self) -> F { self.volume_stiffness }

    /// Rest chord length for connection order `order` in `1..=K`.
    pub fn rest_length(&self, order: usize) -> Option<F> {
        order.checked_sub(1).and_then(|i| self.rest_lengths.get(i)).copied()
    }

    /// Doubled rest area of each fan triangle.
    pub fn rest_area(&self) -> F { self.rest_area }

    /// Every spring the blob applies: the `N` centre links first, then the
    /// ring links grouped by order.
    pub fn links(&self) -> &[SpringLink<F>] { &self.links }

    fn link_index(&self, order: usize, i: usize) -> usize {
        let n = self.size();
        n * order + self.topology.wrap(i)
    }
}

/// Position of ring point `i` of `n` around `centre`.
pub fn ring_position<F: Float>(centre: Vec2<F>, radius: F, i: usize, n: usize) -> Vec2<F> {
    let degrees = F::from_f32(360.0) * F::from_usize(i) / F::from_usize(n);
    centre + Vec2::new(radius, F::zero()).rotate(degrees.to_radians())
}

/// Diagnostics over a blob and the bodies it lives in.
///
/// Ring indices wrap mod N.
pub struct BlobView<'a, F: Float, P> {
    blob: &'a Blob<F>,
    bodies: &'a [P],
}

impl<F: Float, P> Clone for BlobView<'_, F, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Float, P> Copy for BlobView<'_, F, P> {}

impl<'a, F: Float, P: PointMass<F>> BlobView<'a, F, P> {
    pub fn size(&self) -> usize {
        self.blob.size()
    }

    pub fn point(&self, i: usize) -> Vec2<F> {
        self.bodies[self.blob.points[self.blob.topology.wrap(i)]].position()
    }

    pub fn centre_position(&self) -> Vec2<F> {
        self.bodies[self.blob.centre].position()
    }

    /// Doubled signed area of fan triangle `i`.
    pub fn signed_area(&self, i: usize) -> F {
        signed_area(self.centre_position(), self.point(i), self.point(i + 1))
    }

    /// Doubled signed area of the whole ring, as the sum of its fan triangles.
    pub fn area(&self) -> F {
        (0..self.size()).fold(F::zero(), |sum, i| sum + self.signed_area(i))
    }

    /// `rest_area * N`: what [`area`](Self::area) reads for the undeformed blob.
    pub fn rest_area(&self) -> F {
        self.blob.rest_area * F::from_usize(self.size())
    }

    /// Current centre-to-point distance minus `radius`. Positive when stretched.
    pub fn centre_strain(&self, i: usize) -> F {
        self.blob.links[self.blob.link_index(0, i)].extension(self.bodies)
    }

    /// Stretch of the link from point `i` to point `i + order`, or `None` if
    /// no link of that order exists.
    pub fn link_strain(&self, order: usize, i: usize) -> Option<F> {
        self.blob.rest_length(order)?;
        Some(self.blob.links[self.blob.link_index(order, i)].extension(self.bodies))
    }

    /// Fan triangles whose winding has flipped.
    pub fn inverted_triangles(&self) -> AllocVec<usize> {
        (0..self.size()).filter(|&i| self.signed_area(i) < F::zero()).collect()
    }
}
