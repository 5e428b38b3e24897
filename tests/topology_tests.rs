use std::collections::HashSet;

use blobby::{BlobError, RingTopology};

fn valid_shapes() -> impl Iterator<Item = (usize, usize)> {
    (3..=24).flat_map(|n| (1..=n / 2).map(move |k| (n, k)))
}

#[test]
fn produces_n_times_k_links() {
    for (n, k) in valid_shapes() {
        let topo = RingTopology::new(n, k).unwrap();
        assert_eq!(topo.neighbor_links().count(), n * k, "n = {}, k = {}", n, k);
        assert_eq!(topo.neighbor_count(), n * k);
    }
}

#[test]
fn links_respect_their_order() {
    for (n, k) in valid_shapes() {
        let topo = RingTopology::new(n, k).unwrap();
        for link in topo.neighbor_links() {
            assert!(link.order >= 1 && link.order <= k);
            assert_eq!((link.j + n - link.i) % n, link.order);
        }
    }
}

#[test]
fn each_pair_appears_once_except_diameters() {
    for (n, k) in valid_shapes() {
        let topo = RingTopology::new(n, k).unwrap();
        let unique: HashSet<(usize, usize)> = topo
            .neighbor_links()
            .map(|l| (l.i.min(l.j), l.i.max(l.j)))
            .collect();
        let expected = if n % 2 == 0 && k == n / 2 { n * k - n / 2 } else { n * k };
        assert_eq!(unique.len(), expected, "n = {}, k = {}", n, k);
    }
}

#[test]
fn fan_covers_ring_once() {
    for (n, k) in valid_shapes() {
        let topo = RingTopology::new(n, k).unwrap();
        let tris: Vec<_> = topo.fan_triangles().collect();
        assert_eq!(tris.len(), n);
        assert_eq!(topo.triangle_count(), n);
        for (idx, tri) in tris.iter().enumerate() {
            assert_eq!(tri.i, idx);
            assert_eq!(tri.next, (idx + 1) % n);
        }
    }
}

#[test]
fn wrap_is_cyclic() {
    let topo = RingTopology::new(6, 2).unwrap();
    assert_eq!(topo.wrap(6), 0);
    assert_eq!(topo.wrap(13), 1);
    assert_eq!(topo.next(5), 0);
}

#[test]
fn invalid_shapes_rejected() {
    assert_eq!(RingTopology::new(0, 1), Err(BlobError::InsufficientPoints { points: 0 }));
    assert_eq!(RingTopology::new(2, 1), Err(BlobError::InsufficientPoints { points: 2 }));
    assert_eq!(
        RingTopology::new(3, 2),
        Err(BlobError::InvalidConnectivity { connect_every: 2, max: 1 })
    );
    assert_eq!(
        RingTopology::new(10, 0),
        Err(BlobError::InvalidConnectivity { connect_every: 0, max: 5 })
    );
    assert!(RingTopology::new(10, 5).is_ok());
    assert!(RingTopology::new(10, 6).is_err());
}

#[test]
fn error_messages() {
    let err = RingTopology::new(2, 1).unwrap_err();
    assert_eq!(err.to_string(), "blob needs at least 3 ring points, got 2");
    let err = RingTopology::new(8, 5).unwrap_err();
    assert_eq!(err.to_string(), "connection order 5 out of range (expected 1..=4)");
}
