//! Area-preserving shear force for triangles.
//!
//! Areas here are *doubled* signed areas: the z component of the cross
//! product, never halved. Rest areas use the same convention, so the factor
//! of two lives in the stiffness.
//!
//! Each vertex is pushed along the counter-clockwise perpendicular of the
//! edge opposite it, which is the gradient of the doubled area with respect
//! to that vertex. The three pushes therefore sum to zero and exert no net
//! torque.

use crate::float::Float;
use crate::particle::PointMass;
use crate::vec::Vec2;

/// Doubled signed area of `(origin, p1, p2)`.
///
/// Positive when `p1 -> p2` winds counter-clockwise around `origin`.
pub fn signed_area<F: Float>(origin: Vec2<F>, p1: Vec2<F>, p2: Vec2<F>) -> F {
    (p1 - origin).cross(p2 - origin)
}

/// Force on the vertex opposite the edge `edge_a -> edge_b`.
pub fn volume_force<F: Float>(edge_a: Vec2<F>, edge_b: Vec2<F>, area_delta: F, stiffness: F) -> Vec2<F> {
    (edge_b - edge_a).perp().scale(area_delta * stiffness)
}

/// Forces on `(origin, p1, p2)` driving the triangle's area toward `rest_area`.
pub fn triangle_forces<F: Float>(
    origin: Vec2<F>,
    p1: Vec2<F>,
    p2: Vec2<F>,
    rest_area: F,
    stiffness: F,
) -> [Vec2<F>; 3] {
    let delta = rest_area - signed_area(origin, p1, p2);
    [
        volume_force(p1, p2, delta, stiffness),
        volume_force(p2, origin, delta, stiffness),
        volume_force(origin, p1, delta, stiffness),
    ]
}

/// Accumulate the shear force for one vertex onto `target`.
pub fn apply_volume_force<F: Float, P: PointMass<F>>(
    bodies: &mut [P],
    target: usize,
    edge_a: usize,
    edge_b: usize,
    area_delta: F,
    stiffness: F,
) {
    let force = volume_force(bodies[edge_a].position(), bodies[edge_b].position(), area_delta, stiffness);
    bodies[target].add_force(force);
}

/// Three bodies held near a desired doubled area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VolumeTriangle<F: Float> {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub desired_area: F,
    pub stiffness: F,
}

impl<F: Float> VolumeTriangle<F> {
    pub fn new(a: usize, b: usize, c: usize, desired_area: F, stiffness: F) -> Self {
        VolumeTriangle { a, b, c, desired_area, stiffness }
    }

    pub fn area<P: PointMass<F>>(&self, bodies: &[P]) -> F {
        signed_area(bodies[self.a].position(), bodies[self.b].position(), bodies[self.c].position())
    }

    pub fn apply<P: PointMass<F>>(&self, bodies: &mut [P]) {
        let delta = self.desired_area - self.area(bodies);
        apply_volume_force(bodies, self.a, self.b, self.c, delta, self.stiffness);
        apply_volume_force(bodies, self.b, self.c, self.a, delta, self.stiffness);
        apply_volume_force(bodies, self.c, self.a, self.b, delta, self.stiffness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_right_triangle() {
        let o = Vec2::new(0.0f32, 0.0);
        let a = signed_area(o, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert!((a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shrunk_triangle_pushes_apex_outward() {
        // Apex at (0, 0.5) over base (-1, 0) -> (1, 0); rest area is larger.
        let forces = triangle_forces(
            Vec2::new(0.0f64, 0.5),
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            4.0,
            1.0,
        );
        assert!(forces[0].y > 0.0, "apex should move away from the base: {:?}", forces[0]);
    }

    #[test]
    fn oversized_triangle_pulls_in() {
        let forces = triangle_forces(
            Vec2::new(0.0f64, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
            1.0,
            1.0,
        );
        // Moving every vertex a little along its force must shrink the area.
        let h = 1e-4;
        let moved = signed_area(
            Vec2::new(0.0, 0.0) + forces[0].scale(h),
            Vec2::new(3.0, 0.0) + forces[1].scale(h),
            Vec2::new(0.0, 3.0) + forces[2].scale(h),
        );
        assert!(moved < 9.0);
    }
}
