// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use euclids_orchard::geometry::constants::Coord;
use euclids_orchard::geometry::{Triangle, Triplet};

/// Every strictly positive coprime triple with coordinates up to `limit`.
pub fn coprime_triples(limit: Coord) -> impl Iterator<Item = Triplet> {
    (1..=limit)
        .flat_map(move |x| (1..=limit).flat_map(move |y| (1..=limit).map(move |z| Triplet::new(x, y, z))))
        .filter(|t| t.is_coprime())
}

/// The operation codes of an enumerated path, without its `-ctr`, `-p01`
/// or `-P0` style suffix.
pub fn path_codes(path: &str) -> &str {
    path.split('-').next().unwrap_or("")
}

/// Replay operation codes from the identity.
pub fn replay(codes: &str) -> Triangle {
    Triangle::from_path(codes).unwrap_or_else(|e| panic!("replaying {:?}: {}", codes, e))
}

/// The point an enumerated path names.
pub fn point_named_by(path: &str) -> Triplet {
    let triangle = replay(path_codes(path));
    let [a, b, c] = triangle.columns();
    match path.split_once('-').map(|(_, suffix)| suffix) {
        Some("ctr") => triangle.centroid(),
        Some("p01") => a + b,
        Some("p12") => b + c,
        Some("p02") => a + c,
        Some("P0") => a,
        Some("P1") => b,
        Some("P2") => c,
        other => panic!("unexpected suffix {:?} in {:?}", other, path),
    }
}
