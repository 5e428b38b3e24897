//! Which ring points are connected to which.
//!
//! Pure index arithmetic: nothing here looks at positions.

use crate::error::{BlobError, BlobResult};

/// A spring between ring points `i` and `j = (i + order) mod N`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NeighborLink {
    pub i: usize,
    pub j: usize,
    /// Index distance along the ring, in `1..=K`.
    pub order: usize,
}

/// The fan triangle `(centre, points[i], points[next])`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FanTriangle {
    pub i: usize,
    pub next: usize,
}

/// Connectivity of a ring of `N` points around a centre, with every point
/// linked to its neighbours up to connection order `K`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingTopology {
    points: usize,
    connect_every: usize,
}

impl RingTopology {
    /// Requires `points >= 3` and `1 <= connect_every <= points / 2`.
    pub fn new(points: usize, connect_every: usize) -> BlobResult<Self> {
        if points < 3 {
            return Err(BlobError::InsufficientPoints { points });
        }
        let max = points / 2;
        if connect_every < 1 || connect_every > max {
            return Err(BlobError::InvalidConnectivity { connect_every, max });
        }
        Ok(RingTopology { points, connect_every })
    }

    pub fn points(&self) -> usize { self.points }
    pub fn connect_every(&self) -> usize { self.connect_every }

    /// Ring index `i` reduced mod N.
    pub fn wrap(&self, i: usize) -> usize {
        i % self.points
    }

    pub fn next(&self, i: usize) -> usize {
        self.wrap(i + 1)
    }

    /// All neighbour links, grouped by order, `N * K` in total.
    ///
    /// Each `i` only links forward to `i + order`, so an ordinary pair is
    /// produced once. When `N` is even and `K == N / 2` the diametral pairs
    /// are reached from both ends and show up twice.
    pub fn neighbor_links(&self) -> impl Iterator<Item = NeighborLink> + '_ {
        (1..=self.connect_every).flat_map(move |order| {
            (0..self.points).map(move |i| NeighborLink { i, j: self.wrap(i + order), order })
        })
    }

    /// The `N` fan triangles, one per ring edge.
    pub fn fan_triangles(&self) -> impl Iterator<Item = FanTriangle> + '_ {
        (0..self.points).map(move |i| FanTriangle { i, next: self.next(i) })
    }

    pub fn neighbor_count(&self) -> usize {
        self.points * self.connect_every
    }

    pub fn triangle_count(&self) -> usize {
        self.points
    }
}
