// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Guided descent to a single target.
//!
//! Starting from the identity, the search classifies the target against the
//! working triangle's medians and applies the one move that keeps the target
//! inside while shrinking the triangle. Each step adds at least one vertex
//! to the centroid, so the number of steps is bounded by the target's
//! coordinate sum. The search stops when the target is the centroid.
//!
//! | classification | move |
//! |---|---|
//! | `XNeg`, `XPos` | `x`, `X` |
//! | `YNeg`, `YPos` | `y`, `Y` |
//! | `ZNeg`, `ZPos` | `z`, `Z` |
//! | `VertexX`, `MidpointYZ` | `2A`, `2a` |
//! | `VertexY`, `MidpointZX` | `3A`, `3a` |
//! | `VertexZ`, `MidpointXY` | `1A`, `1a` |
//! | edge: `TowardFirst`, `TowardSecond` | `a`, `A` |
//!
//! A target on a median is reached by collapsing onto that median and
//! continuing along it as a one-dimensional Stern–Brocot descent.

use crate::geometry::{classify, Classification, EdgeSide, Operation, Sextant, Triangle, Triplet};
use crate::search::config::SearchConfig;
use crate::search::errors::{validate_target, InvariantKind, InvariantViolation, SearchError};

/// The operations applied for a classification; empty for the centroid.
pub fn transition(classification: Classification) -> &'static [Operation] {
    use Operation::*;
    match classification {
        Classification::Face(sextant) => match sextant {
            Sextant::Centroid => &[],
            Sextant::XNeg => &[SextantXY],
            Sextant::XPos => &[SextantXZ],
            Sextant::YNeg => &[SextantYZ],
            Sextant::YPos => &[SextantYX],
            Sextant::ZNeg => &[SextantZX],
            Sextant::ZPos => &[SextantZY],
            Sextant::VertexX => &[CollapseYZ, MergeYX],
            Sextant::MidpointYZ => &[CollapseYZ, MergeXY],
            Sextant::VertexY => &[CollapseZX, MergeYX],
            Sextant::MidpointZX => &[CollapseZX, MergeXY],
            Sextant::VertexZ => &[CollapseXY, MergeYX],
            Sextant::MidpointXY => &[CollapseXY, MergeXY],
        },
        Classification::Edge(side) => match side {
            EdgeSide::Centroid => &[],
            EdgeSide::TowardFirst => &[MergeXY],
            EdgeSide::TowardSecond => &[MergeYX],
        },
    }
}

/// A successful guided search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    target: Triplet,
    triangle: Triangle,
    steps: u32,
}

impl SearchOutcome {
    pub fn target(&self) -> Triplet {
        self.target
    }

    /// The triangle whose centroid (or sole vertex) is the target.
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Operation codes from the identity to the target.
    pub fn path(&self) -> &str {
        self.triangle.path()
    }

    /// Number of operations in the path.
    pub fn depth(&self) -> u32 {
        self.triangle.depth()
    }

    /// Number of moves taken. A two-operation move counts once.
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

/// Guided search with a step bound.
///
/// The default search bounds each target by its own coordinate sum, which
/// no descent can exceed. A search built from a [`SearchConfig`] uses
/// `config.max_depth` for every target.
#[derive(Debug, Clone, Default)]
pub struct GuidedSearch {
    max_depth: Option<u32>,
}

impl GuidedSearch {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            max_depth: Some(config.max_depth),
        }
    }

    /// The step bound applied to `target`.
    pub fn step_bound(&self, target: Triplet) -> u32 {
        self.max_depth
            .unwrap_or_else(|| u32::try_from(target.sum()).unwrap_or(u32::MAX))
    }

    /// Find the path to `target`, which must be strictly positive and coprime.
    pub fn search(&self, target: Triplet) -> Result<SearchOutcome, SearchError> {
        validate_target(target)?;
        let max_depth = self.step_bound(target);
        tracing::debug!(%target, max_depth, "guided search");

        let mut triangle = Triangle::identity();
        let mut steps = 0;

        loop {
            if triangle.num_non_zero_columns() <= 1 {
                if triangle.columns().contains(&target) {
                    return Ok(Self::found(target, triangle, steps));
                }
                return Err(violation(InvariantKind::DeadEnd, target, &triangle));
            }

            check_invariants(&triangle, target)?;

            let classification = classify(&triangle, target)
                .ok_or_else(|| violation(InvariantKind::Unclassifiable, target, &triangle))?;

            if classification.is_centroid() {
                return Ok(Self::found(target, triangle, steps));
            }

            if steps >= max_depth {
                tracing::debug!(%target, path = triangle.path(), "step bound reached");
                return Err(SearchError::DepthExceeded {
                    target,
                    max_depth,
                    best_path: triangle.path().to_string(),
                });
            }

            for &op in transition(classification) {
                triangle
                    .operate(op)
                    .map_err(|_| violation(InvariantKind::Transition, target, &triangle))?;
            }
            steps += 1;

            tracing::trace!(step = steps, %classification, path = triangle.path(), "descended");
        }
    }

    fn found(target: Triplet, triangle: Triangle, steps: u32) -> SearchOutcome {
        tracing::debug!(%target, path = triangle.path(), steps, "found");
        SearchOutcome {
            target,
            triangle,
            steps,
        }
    }
}

/// Consistency checks on the working triangle.
fn check_invariants(triangle: &Triangle, target: Triplet) -> Result<(), SearchError> {
    match invariant_problem(triangle, target) {
        Some(kind) => Err(violation(kind, target, triangle)),
        None => Ok(()),
    }
}

/// The first check the working triangle fails, if any. Zero columns of a
/// collapsed triangle are not vertices and take no part.
fn invariant_problem(triangle: &Triangle, target: Triplet) -> Option<InvariantKind> {
    let centroid = triangle.centroid();
    if !centroid.is_coprime() {
        Some(InvariantKind::NonCoprimeCentroid)
    } else if !triangle.contains_point(target) {
        Some(InvariantKind::TargetNotContained)
    } else if !triangle.vertices().iter().any(|v| v.precedes(target)) {
        Some(InvariantKind::NoPrecedingVertex)
    } else if !centroid.precedes(target) {
        Some(InvariantKind::CentroidBeyondTarget)
    } else {
        None
    }
}

fn violation(kind: InvariantKind, target: Triplet, triangle: &Triangle) -> SearchError {
    let violation = InvariantViolation {
        kind,
        target,
        path: triangle.path().to_string(),
    };
    tracing::error!(%violation, triangle = %triangle, "guided search invariant violated");
    debug_assert!(false, "guided search invariant violated: {}", violation);
    violation.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::moves::MoveSet;

    fn search(x: i32, y: i32, z: i32) -> Result<SearchOutcome, SearchError> {
        GuidedSearch::default().search(Triplet::new(x.into(), y.into(), z.into()))
    }

    fn bounded(max_depth: u32, target: Triplet) -> Result<SearchOutcome, SearchError> {
        GuidedSearch::new(&SearchConfig::default().with_max_depth(max_depth)).search(target)
    }

    #[test]
    fn test_root_centroid() {
        let outcome = search(1, 1, 1).unwrap();
        assert_eq!(outcome.path(), "");
        assert_eq!(outcome.depth(), 0);
        assert_eq!(outcome.steps(), 0);
    }

    #[test]
    fn test_collapsed_triangle_invariants() {
        let edge = Triangle::from_path("1").unwrap();
        assert_eq!(invariant_problem(&edge, Triplet::new(1, 1, 2)), None);
        assert_eq!(
            invariant_problem(&edge, Triplet::new(2, 1, 2)),
            Some(InvariantKind::TargetNotContained)
        );

        // (1,1,2) is a quarter of the way along, past neither end.
        let edge = Triangle::from_columns([
            Triplet::new(1, 1, 3),
            Triplet::new(2, 2, 2),
            Triplet::ZERO,
        ]);
        assert_eq!(
            invariant_problem(&edge, Triplet::new(1, 1, 2)),
            Some(InvariantKind::NoPrecedingVertex)
        );
    }

    #[test]
    fn test_known_paths() {
        let cases = [
            ((1, 1, 2), "1A"),
            ((2, 1, 1), "2A"),
            ((3, 2, 1), "x"),
            ((1, 2, 3), "Z"),
            ((5, 3, 2), "x3a"),
            ((121, 77, 27), "xYzXyZ"),
            ((16, 42, 5), "YYYy2aaa"),
        ];
        for ((x, y, z), path) in cases {
            let outcome = search(x, y, z).unwrap();
            assert_eq!(outcome.path(), path, "({}, {}, {})", x, y, z);
            assert_eq!(outcome.triangle().centroid(), Triplet::new(x.into(), y.into(), z.into()));
        }
    }

    #[test]
    fn test_steps_and_depth_differ_for_collapses() {
        let outcome = search(16, 42, 5).unwrap();
        assert_eq!(outcome.depth(), 8);
        assert_eq!(outcome.steps(), 7);
        assert_eq!(outcome.target(), Triplet::new(16, 42, 5));
    }

    #[test]
    fn test_invalid_targets() {
        assert!(matches!(search(2, 4, 6), Err(SearchError::InvalidTarget { .. })));
        assert!(matches!(search(1, 0, 0), Err(SearchError::InvalidTarget { .. })));
        assert!(matches!(search(0, 1, 1), Err(SearchError::InvalidTarget { .. })));
    }

    #[test]
    fn test_found_is_checked_before_the_bound() {
        assert_eq!(bounded(0, Triplet::new(1, 1, 1)).unwrap().path(), "");
        assert_eq!(bounded(1, Triplet::new(1, 1, 2)).unwrap().path(), "1A");
        assert_eq!(
            bounded(0, Triplet::new(1, 1, 2)),
            Err(SearchError::DepthExceeded {
                target: Triplet::new(1, 1, 2),
                max_depth: 0,
                best_path: String::new(),
            })
        );
    }

    #[test]
    fn test_default_bound_follows_the_target() {
        let guided = GuidedSearch::default();
        assert_eq!(guided.step_bound(Triplet::new(1, 1, 2000)), 2002);
        assert_eq!(guided.step_bound(Triplet::new(5, 3, 2)), 10);

        let outcome = search(1, 1, 2000).unwrap();
        assert_eq!(outcome.steps(), 1999);
        assert_eq!(outcome.depth(), 2000);

        let bounded = GuidedSearch::new(&SearchConfig::default().with_max_depth(7));
        assert_eq!(bounded.step_bound(Triplet::new(1, 1, 2000)), 7);
    }

    #[test]
    fn test_depth_exceeded_reports_progress() {
        match bounded(3, Triplet::new(16, 42, 5)) {
            Err(SearchError::DepthExceeded { best_path, max_depth, .. }) => {
                assert_eq!(best_path, "YYY");
                assert_eq!(max_depth, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_transitions_are_the_canonical_moves() {
        let mut from_table: Vec<String> = Sextant::ALL
            .into_iter()
            .map(Classification::Face)
            .map(transition)
            .filter(|ops| !ops.is_empty())
            .map(|ops| ops.iter().map(|op| op.code()).collect())
            .collect();
        let mut canonical: Vec<String> =
            MoveSet::canonical().full().iter().map(|m| m.to_string()).collect();
        from_table.sort();
        canonical.sort();
        assert_eq!(from_table, canonical);

        assert_eq!(transition(Classification::Edge(EdgeSide::TowardFirst)), &[Operation::MergeXY]);
        assert!(transition(Classification::Edge(EdgeSide::Centroid)).is_empty());
    }
}
