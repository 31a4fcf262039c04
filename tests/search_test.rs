// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the guided and exhaustive searches.
//!
//! These tests validate that:
//! - The guided search finds the known paths
//! - Every path replays to a coprime triangle centred on its target
//! - The exhaustive search finds exactly the guided path, and nothing else
//! - Bad targets and exhausted bounds are reported as errors

mod common;

use common::coprime_triples;
use euclids_orchard::geometry::{Triangle, Triplet};
use euclids_orchard::search::{find_all, GuidedSearch, MoveSet, SearchConfig, SearchError, TargetProblem};

#[test]
fn test_known_paths() {
    let cases = [
        ((1, 1, 1), ""),
        ((1, 1, 2), "1A"),
        ((2, 1, 1), "2A"),
        ((3, 2, 1), "x"),
        ((1, 2, 3), "Z"),
        ((5, 3, 2), "x3a"),
        ((121, 77, 27), "xYzXyZ"),
        ((16, 42, 5), "YYYy2aaa"),
    ];
    for ((x, y, z), expected) in cases {
        let outcome = euclids_orchard::search(Triplet::new(x, y, z)).unwrap();
        assert_eq!(outcome.path(), expected, "path to ({}, {}, {})", x, y, z);
    }
}

#[test]
fn test_paths_replay_to_their_targets() {
    for target in coprime_triples(9) {
        let outcome = euclids_orchard::search(target).unwrap();
        let replayed = Triangle::from_path(outcome.path()).unwrap();

        assert_eq!(replayed.columns(), outcome.triangle().columns(), "replaying {}", target);
        assert_eq!(replayed.depth(), outcome.depth());
        assert!(replayed.contains_point(target));
        if replayed.num_non_zero_columns() == 3 {
            assert!(replayed.is_coprime(), "{} ended on {}", target, replayed);
            assert_eq!(replayed.centroid(), target);
        } else {
            assert!(replayed.columns().contains(&target) || replayed.centroid() == target);
        }
    }
}

#[test]
fn test_exhaustive_search_agrees_with_guided_search() {
    let config = SearchConfig::default().with_max_depth(12);
    let mut checked = 0;
    for target in coprime_triples(6) {
        let guided = euclids_orchard::search(target).unwrap();
        let all = find_all(target, &config).unwrap();
        assert_eq!(all.paths(), [guided.path().to_string()], "paths to {}", target);
        checked += 1;
    }
    assert_eq!(checked, 181);
}

#[test]
fn test_midpoint_matches_add_sextant_parents() {
    let config = SearchConfig::default().with_max_depth(3).with_midpoints(true);
    let found = find_all(Triplet::new(1, 1, 2), &config).unwrap();
    assert_eq!(found.len(), 3);
    for path in ["1A", "Z-p02", "z-p12"] {
        assert!(found.contains(path), "missing {}", path);
    }
    assert_eq!(found.unique(), None);
}

#[test]
fn test_single_operation_moves() {
    // With only the cascades, a triple off every median is still reached once.
    let config = SearchConfig::default()
        .with_max_depth(8)
        .with_moves(MoveSet::sextants());
    let found = find_all(Triplet::new(121, 77, 27), &config).unwrap();
    assert_eq!(found.unique(), Some("xYzXyZ"));
}

#[test]
fn test_long_descent_along_an_edge() {
    let outcome = euclids_orchard::search(Triplet::new(1, 1, 1000)).unwrap();
    assert_eq!(outcome.steps(), 999);
    assert_eq!(outcome.depth(), 1000);
    assert!(outcome.path().starts_with("1A"));
    assert!(outcome.path()[1..].chars().all(|c| c == 'A'));

    let outcome = euclids_orchard::search(Triplet::new(1000, 999, 1)).unwrap();
    assert_eq!(outcome.steps(), 998);
    assert!(outcome.path().starts_with("x3A"));
}

#[test]
fn test_step_bound() {
    let search = GuidedSearch::new(&SearchConfig::default().with_max_depth(500));
    match search.search(Triplet::new(1, 1, 1000)) {
        Err(SearchError::DepthExceeded { max_depth, best_path, .. }) => {
            assert_eq!(max_depth, 500);
            assert!(best_path.starts_with("1A"));
            assert_eq!(best_path.len(), 501);
        }
        other => panic!("expected DepthExceeded, got {:?}", other),
    }
}

#[test]
fn test_invalid_targets() {
    for (target, problem) in [
        (Triplet::new(2, 4, 6), TargetProblem::NotCoprime),
        (Triplet::new(0, 1, 1), TargetProblem::NotPositive),
        (Triplet::new(-1, 2, 3), TargetProblem::NotPositive),
    ] {
        match euclids_orchard::search(target) {
            Err(SearchError::InvalidTarget { reason, .. }) => assert_eq!(reason, problem),
            other => panic!("expected InvalidTarget for {}, got {:?}", target, other),
        }
        assert!(matches!(
            find_all(target, &SearchConfig::default()),
            Err(SearchError::InvalidTarget { .. })
        ));
    }
}
