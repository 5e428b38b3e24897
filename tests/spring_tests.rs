use blobby::{apply_spring, spring_forces, Blob, BlobConfig, Particle, ParticleSpawner, SpringLink, Vec2};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn forces_are_equal_and_opposite() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..1000 {
        let a = Vec2::new(rng.gen_range(-10.0f64..10.0), rng.gen_range(-10.0f64..10.0));
        let b = Vec2::new(rng.gen_range(-10.0f64..10.0), rng.gen_range(-10.0f64..10.0));
        let rest: f64 = rng.gen_range(0.0..5.0);
        let k: f64 = rng.gen_range(-3.0..20.0);
        let pair = spring_forces(a, b, rest, k);
        let sum = pair.on_a + pair.on_b;
        assert_eq!(sum, Vec2::zero(), "a = {:?}, b = {:?}", a, b);
    }
}

#[test]
fn coincident_points_apply_no_force() {
    let p = Vec2::new(3.0f32, -2.0);
    let pair = spring_forces(p, p, 1.0, 10.0);
    assert_eq!(pair.on_a.length(), 0.0);
    assert_eq!(pair.on_b.length(), 0.0);
    assert!(pair.on_a.is_finite() && pair.on_b.is_finite());
}

#[test]
fn force_magnitude_is_extension_times_stiffness() {
    let pair = spring_forces(Vec2::new(0.0f64, 0.0), Vec2::new(3.0, 4.0), 2.0, 1.5);
    assert!((pair.on_a.length() - 4.5).abs() < 1e-12);
    // Stretched: `a` is pulled toward `b`.
    assert!(pair.on_a.dot(Vec2::new(3.0, 4.0)) > 0.0);
}

#[test]
fn apply_spring_accumulates_onto_bodies() {
    let mut bodies = vec![
        Particle::new(Vec2::new(0.0f64, 0.0), 1.0),
        Particle::new(Vec2::new(2.0, 0.0), 1.0),
    ];
    apply_spring(&mut bodies, 0, 1, 1.0, 2.0);
    apply_spring(&mut bodies, 0, 1, 1.0, 2.0);
    assert!((bodies[0].force.x - 4.0).abs() < 1e-12);
    assert!((bodies[1].force.x + 4.0).abs() < 1e-12);
}

#[test]
fn link_at_rest_length_is_inert() {
    let mut bodies = vec![
        Particle::new(Vec2::new(1.0f64, 1.0), 1.0),
        Particle::new(Vec2::new(4.0, 5.0), 1.0),
    ];
    let link = SpringLink::new(0, 1, 5.0, 3.0);
    assert!(link.extension(&bodies).abs() < 1e-12);
    link.apply(&mut bodies);
    assert!(bodies[0].force.length() < 1e-12);

    bodies[1].pos = Vec2::new(7.0, 9.0);
    assert!((link.extension(&bodies) - 5.0).abs() < 1e-12);
}

#[test]
fn tick_applies_exactly_the_blob_links() {
    let config: BlobConfig<f64> = BlobConfig::new()
        .with_points(7)
        .with_connect_every(3)
        .with_volume_stiffness(0.0);
    let mut bodies: Vec<Particle<f64>> = Vec::new();
    let blob = Blob::new(&config, Vec2::zero(), &mut ParticleSpawner::new(&mut bodies, 1.0)).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for p in bodies.iter_mut() {
        p.pos = p.pos + Vec2::new(rng.gen_range(-0.3..0.3f64), rng.gen_range(-0.3..0.3f64));
    }

    let mut expected = bodies.clone();
    for link in blob.links() {
        link.apply(&mut expected);
    }
    blob.tick(&mut bodies);

    for (got, want) in bodies.iter().zip(&expected) {
        assert!((got.force - want.force).length() < 1e-12);
    }
}

#[test]
fn perturbed_triangle_ring_centre_spring() {
    // Only the centre springs are active so their contribution is isolated.
    let config: BlobConfig<f64> = BlobConfig::new()
        .with_points(3)
        .with_connect_every(1)
        .with_radius(1.0)
        .with_centre_stiffness(4.0)
        .with_surface_stiffness(0.0)
        .with_volume_stiffness(0.0);
    let mut bodies: Vec<Particle<f64>> = Vec::new();
    let blob = Blob::new(&config, Vec2::zero(), &mut ParticleSpawner::new(&mut bodies, 1.0)).unwrap();

    // Push point 0 outward by 0.5 along its radial direction (+x).
    let p0 = blob.points()[0];
    bodies[p0].pos = Vec2::new(1.5, 0.0);

    blob.tick(&mut bodies);

    let on_point = bodies[p0].force;
    assert!(on_point.x < 0.0, "point should be pulled inward: {:?}", on_point);
    assert!((on_point.x + 0.5 * 4.0).abs() < 1e-9);
    assert!(on_point.y.abs() < 1e-9);

    let on_centre = bodies[blob.centre()].force;
    assert!(on_centre.x > 0.0, "centre should be pulled toward the point: {:?}", on_centre);
    assert!((on_centre.x - 0.5 * 4.0).abs() < 1e-9);
}
