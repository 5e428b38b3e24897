//! Hookean springs between two point masses.

use crate::float::Float;
use crate::particle::PointMass;
use crate::vec::Vec2;

/// Equal and opposite forces produced by one spring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForcePair<F: Float> {
    pub on_a: Vec2<F>,
    pub on_b: Vec2<F>,
}

/// Forces pulling `a` and `b` back toward `rest_length` apart.
///
/// Coincident points produce no force.
pub fn spring_forces<F: Float>(
    a: Vec2<F>,
    b: Vec2<F>,
    rest_length: F,
    stiffness: F,
) -> ForcePair<F> {
    let v = a - b;
    let extension = v.length() - rest_length;
    let dir = v.normalize().scale(extension * stiffness);
    ForcePair { on_a: -dir, on_b: dir }
}

/// Accumulate a spring's forces onto bodies `a` and `b`.
pub fn apply_spring<F: Float, P: PointMass<F>>(
    bodies: &mut [P],
    a: usize,
    b: usize,
    rest_length: F,
    stiffness: F,
) {
    let pair = spring_forces(bodies[a].position(), bodies[b].position(), rest_length, stiffness);
    bodies[a].add_force(pair.on_a);
    bodies[b].add_force(pair.on_b);
}

/// One spring connection between two body handles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringLink<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
}

impl<F: Float> SpringLink<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F) -> Self {
        SpringLink { a, b, rest_length, stiffness }
    }

    /// Signed extension: positive when stretched, negative when compressed.
    pub fn extension<P: PointMass<F>>(&self, bodies: &[P]) -> F {
        bodies[self.a].position().distance(bodies[self.b].position()) - self.rest_length
    }

    pub fn apply<P: PointMass<F>>(&self, bodies: &mut [P]) {
        apply_spring(bodies, self.a, self.b, self.rest_length, self.stiffness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretched_spring_pulls_together() {
        let pair = spring_forces(Vec2::new(2.0f32, 0.0), Vec2::new(0.0, 0.0), 1.0, 3.0);
        assert!((pair.on_a.x + 3.0).abs() < 1e-6);
        assert!((pair.on_b.x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn compressed_spring_pushes_apart() {
        let pair = spring_forces(Vec2::new(0.0f32, 0.5), Vec2::new(0.0, 0.0), 1.0, 2.0);
        assert!(pair.on_a.y > 0.0);
        assert!(pair.on_b.y < 0.0);
    }

    #[test]
    fn zero_stiffness_is_inert() {
        let pair = spring_forces(Vec2::new(7.0f64, -1.0), Vec2::new(0.0, 3.0), 1.0, 0.0);
        assert_eq!(pair.on_a.length(), 0.0);
        assert_eq!(pair.on_b.length(), 0.0);
    }
}
