// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for every path to a target.
//!
//! Every move of the configured [`MoveSet`](crate::search::moves::MoveSet)
//! is tried at every node, down to the level bound. Because every move only
//! adds columns, no descendant of a triangle whose centroid overtakes the
//! target in some component can have the target as its centroid; such
//! branches are cut.
//!
//! With the canonical moves the result is the single path the guided search
//! finds. Other move sets can reach a target several ways.

use crate::engine::{Node, SearchEngine, Visit, Visitor};
use crate::geometry::{Triangle, Triplet};
use crate::search::config::SearchConfig;
use crate::search::errors::{validate_target, SearchError};
use crate::search::statistics::{Counters, PruneReason, Statistics};

/// Path suffixes naming the edge midpoints, in [`Triangle::midpoints`] order.
pub const MIDPOINT_SUFFIXES: [&str; 3] = ["-p01", "-p12", "-p02"];

/// The distinct paths found to a target, in discovery order.
#[derive(Debug, Clone)]
pub struct PathSet {
    target: Triplet,
    paths: Vec<String>,
    statistics: Statistics,
}

impl PathSet {
    pub fn target(&self) -> Triplet {
        self.target
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// The only path, if exactly one was found.
    pub fn unique(&self) -> Option<&str> {
        match self.paths.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

struct FindAll<'c> {
    target: Triplet,
    config: &'c SearchConfig,
    paths: Vec<String>,
}

impl FindAll<'_> {
    fn record(&mut self, path: String, statistics: &mut Statistics) {
        if !self.paths.contains(&path) {
            tracing::trace!(%path, "path found");
            statistics.increment(Counters::PathsFound);
            self.paths.push(path);
        }
    }

    /// The path to `triangle` with the suffix of the midpoint equal to the
    /// target, if any.
    fn midpoint_path(&self, triangle: &Triangle) -> Option<String> {
        if triangle.num_non_zero_columns() != 3 {
            return None;
        }
        triangle
            .midpoints()
            .iter()
            .zip(MIDPOINT_SUFFIXES)
            .find(|&(&m, _)| m == self.target)
            .map(|(_, suffix)| format!("{}{}", triangle.path(), suffix))
    }
}

impl Visitor for FindAll<'_> {
    fn visit(&mut self, node: &Node, statistics: &mut Statistics) -> Visit {
        let centroid = node.triangle.centroid();
        if centroid == self.target {
            self.record(node.triangle.path().to_string(), statistics);
            return Visit::Leaf;
        }

        if self.config.match_midpoints {
            if let Some(path) = self.midpoint_path(&node.triangle) {
                self.record(path, statistics);
                return Visit::Leaf;
            }
        }

        if node.level >= self.config.max_depth {
            Visit::Prune(PruneReason::Depth)
        } else if !centroid.precedes(self.target) {
            Visit::Prune(PruneReason::NotPreceding)
        } else {
            Visit::Expand
        }
    }

    fn name(&self) -> &str {
        "find_all"
    }
}

/// Every path to `target` within `config.max_depth` moves.
///
/// The target must be strictly positive and coprime.
///
/// Only centroids are matched unless `config.match_midpoints` is set, and it
/// is off by default. A target that is an edge midpoint of some full
/// triangle is also the centroid of another node, so midpoint matching
/// reports more than one path and [`PathSet::unique`] gives `None`.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::Triplet;
/// use euclids_orchard::search::{find_all, SearchConfig};
///
/// let found = find_all(Triplet::new(5, 3, 2), &SearchConfig::default()).unwrap();
/// assert_eq!(found.unique(), Some("x3a"));
///
/// let config = SearchConfig::default().with_max_depth(3);
/// let found = find_all(Triplet::new(1, 1, 2), &config).unwrap();
/// assert_eq!(found.unique(), Some("1A"));
///
/// let found = find_all(Triplet::new(1, 1, 2), &config.with_midpoints(true)).unwrap();
/// assert_eq!(found.len(), 3);
/// assert_eq!(found.unique(), None);
/// ```
pub fn find_all(target: Triplet, config: &SearchConfig) -> Result<PathSet, SearchError> {
    validate_target(target)?;

    let mut visitor = FindAll {
        target,
        config,
        paths: Vec::new(),
    };
    let mut engine = SearchEngine::new(&config.moves);
    engine.run(Triangle::identity(), &mut visitor);

    Ok(PathSet {
        target,
        paths: visitor.paths,
        statistics: engine.into_statistics(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: PathSet) -> Vec<String> {
        let mut paths = set.into_paths();
        paths.sort();
        paths
    }

    #[test]
    fn test_root_centroid_is_found_without_expanding() {
        let found = find_all(Triplet::new(1, 1, 1), &SearchConfig::default()).unwrap();
        assert_eq!(found.paths(), [""]);
        assert_eq!(found.statistics().get(Counters::NodesVisited), 1);
    }

    #[test]
    fn test_level_bound() {
        let target = Triplet::new(1, 1, 2);
        let at = |depth| find_all(target, &SearchConfig::default().with_max_depth(depth)).unwrap();

        let none = at(0);
        assert!(none.is_empty());
        assert_eq!(none.statistics().prunes(PruneReason::Depth), 1);

        assert_eq!(at(1).paths(), ["1A"]);
    }

    #[test]
    fn test_midpoints_report_sextant_parents() {
        let config = SearchConfig::default().with_midpoints(true);

        let found = find_all(Triplet::new(1, 1, 2), &config.clone().with_max_depth(3)).unwrap();
        assert_eq!(sorted(found), ["1A", "Z-p02", "z-p12"]);

        let found = find_all(Triplet::new(2, 1, 1), &config.clone().with_max_depth(4)).unwrap();
        assert_eq!(sorted(found), ["2A", "X-p01", "x-p02"]);

        let found = find_all(Triplet::new(1, 1, 2), &config.with_max_depth(0)).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_not_preceding_branches_are_cut() {
        let found = find_all(Triplet::new(3, 2, 1), &SearchConfig::default()).unwrap();
        assert_eq!(found.unique(), Some("x"));
        let stats = found.statistics();
        assert!(stats.prunes(PruneReason::NotPreceding) > 0);
        assert_eq!(stats.get(Counters::PathsFound), 1);
    }

    #[test]
    fn test_invalid_target() {
        assert!(matches!(
            find_all(Triplet::new(2, 2, 2), &SearchConfig::default()),
            Err(SearchError::InvalidTarget { .. })
        ));
    }
}
