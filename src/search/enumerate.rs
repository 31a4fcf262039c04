// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of the coprime triples inside a clip region.
//!
//! The traversal visits every triangle that overlaps the clip triangle and
//! records its three edge midpoints and its centroid. Each distinct point is
//! kept with the first path that reached it, labelled with a suffix:
//! `-P0`..`-P2` for the root vertices, `-p01`, `-p12`, `-p02` for midpoints
//! and `-ctr` for centroids.
//!
//! Three bounds stop the traversal: the level bound, the coordinate sum
//! bound (`max_height`) and the result limit. Reaching the result limit is
//! not an error; the points found so far remain valid and the status says
//! the enumeration is incomplete.

use crate::engine::{Node, SearchEngine, Visit, Visitor};
use crate::geometry::constants::{wide, Coord};
use crate::geometry::{triangles_intersect, Triangle, Triplet};
use crate::search::config::SearchConfig;
use crate::search::errors::SearchError;
use crate::search::exhaustive::MIDPOINT_SUFFIXES;
use crate::search::statistics::{Counters, PruneReason, Statistics};
use rand::Rng;
use std::collections::btree_map::{BTreeMap, Entry};

const CENTROID_SUFFIX: &str = "-ctr";
const VERTEX_SUFFIXES: [&str; 3] = ["-P0", "-P1", "-P2"];

/// A point and the first path that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedPoint {
    pub point: Triplet,
    pub path: String,
    /// Level of the triangle the point was recorded from.
    pub depth: u32,
}

impl EnumeratedPoint {
    /// `x,y,z,"path",depth`
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},\"{}\",{}",
            self.point.x, self.point.y, self.point.z, self.path, self.depth
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationStatus {
    Complete,
    /// Some point or branch was skipped because the result limit was reached.
    ResultLimitReached,
}

/// The result of an enumeration.
#[derive(Debug, Clone)]
pub struct Enumeration {
    points: BTreeMap<Triplet, EnumeratedPoint>,
    status: EnumerationStatus,
    statistics: Statistics,
    depth_counts: Vec<u64>,
}

impl Enumeration {
    /// The points, in [`Triplet`] order.
    pub fn points(&self) -> impl Iterator<Item = &EnumeratedPoint> {
        self.points.values()
    }

    pub fn get(&self, point: Triplet) -> Option<&EnumeratedPoint> {
        self.points.get(&point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn status(&self) -> EnumerationStatus {
        self.status
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Number of triangles examined at each level (those overlapping the clip).
    pub fn depth_counts(&self) -> &[u64] {
        &self.depth_counts
    }
}

struct Collector<'c> {
    clip: &'c Triangle,
    config: &'c SearchConfig,
    points: BTreeMap<Triplet, EnumeratedPoint>,
    depth_counts: Vec<u64>,
    limit_reached: bool,
}

impl Collector<'_> {
    fn too_high(&self, p: Triplet) -> bool {
        wide(p.sum()).unsigned_abs() > u128::from(self.config.max_height)
    }

    fn full(&self) -> bool {
        self.points.len() >= self.config.max_results
    }

    fn record(&mut self, point: Triplet, path: String, depth: u32, statistics: &mut Statistics) {
        if self.too_high(point) {
            return;
        }
        if self.full() {
            self.limit_reached = true;
            return;
        }
        if !self.clip.contains_point(point) {
            return;
        }
        if let Entry::Vacant(entry) = self.points.entry(point) {
            statistics.increment(Counters::PointsRecorded);
            entry.insert(EnumeratedPoint { point, path, depth });
        }
    }

    fn count_level(&mut self, level: u32) {
        let level = level as usize;
        if self.depth_counts.len() <= level {
            self.depth_counts.resize(level + 1, 0);
        }
        self.depth_counts[level] += 1;
    }
}

impl Visitor for Collector<'_> {
    fn visit(&mut self, node: &Node, statistics: &mut Statistics) -> Visit {
        if node.level > self.config.max_depth {
            return Visit::Prune(PruneReason::Depth);
        }
        if self.full() {
            self.limit_reached = true;
            return Visit::Prune(PruneReason::ResultLimit);
        }
        let triangle = &node.triangle;
        if !triangles_intersect(triangle, self.clip) {
            return Visit::Prune(PruneReason::NoIntersection);
        }

        self.count_level(node.level);
        for (midpoint, suffix) in triangle.midpoints().into_iter().zip(MIDPOINT_SUFFIXES) {
            self.record(midpoint, format!("{}{}", triangle.path(), suffix), node.level, statistics);
        }
        let centroid = triangle.centroid();
        self.record(
            centroid,
            format!("{}{}", triangle.path(), CENTROID_SUFFIX),
            node.level,
            statistics,
        );

        if self.too_high(centroid) {
            Visit::Prune(PruneReason::Height)
        } else {
            Visit::Expand
        }
    }

    fn name(&self) -> &str {
        "enumerate"
    }
}

/// Enumeration with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Enumerator {
    config: SearchConfig,
}

impl Enumerator {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Enumerate the points inside `clip`, which must wind to the left.
    pub fn run(&self, clip: &Triangle) -> Result<Enumeration, SearchError> {
        if !clip.is_left_winding() {
            let [a, b, c] = clip.columns();
            return Err(SearchError::InvalidClip { a, b, c });
        }

        let mut collector = Collector {
            clip,
            config: &self.config,
            points: BTreeMap::new(),
            depth_counts: Vec::new(),
            limit_reached: false,
        };
        let mut engine = SearchEngine::new(&self.config.moves);

        let root = Triangle::identity();
        let mut statistics = Statistics::new();
        for (vertex, suffix) in root.columns().into_iter().zip(VERTEX_SUFFIXES) {
            collector.record(vertex, suffix.to_string(), 0, &mut statistics);
        }

        engine.run(root, &mut collector);
        statistics.merge(engine.statistics());

        let status = if collector.limit_reached {
            EnumerationStatus::ResultLimitReached
        } else {
            EnumerationStatus::Complete
        };
        tracing::debug!(
            points = collector.points.len(),
            ?status,
            %statistics,
            "enumeration finished"
        );

        Ok(Enumeration {
            points: collector.points,
            status,
            statistics,
            depth_counts: collector.depth_counts,
        })
    }
}

/// Enumerate with the six cascades as moves.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::Triangle;
/// use euclids_orchard::search::enumerate;
///
/// let found = enumerate(&Triangle::identity(), 0, 1 << 16, 100).unwrap();
/// assert_eq!(found.len(), 7);
/// ```
pub fn enumerate(
    clip: &Triangle,
    max_depth: u32,
    max_height: u64,
    max_results: usize,
) -> Result<Enumeration, SearchError> {
    let config = SearchConfig::enumeration()
        .with_max_depth(max_depth)
        .with_max_height(max_height)
        .with_max_results(max_results);
    Enumerator::new(config).run(clip)
}

/// The unit triangle (p, p + (1,0,0), p + (0,1,0)).
///
/// Left-winding whenever every component of `p` is positive.
pub fn tiny_clip(p: Triplet) -> Triangle {
    Triangle::from_columns([p, p + Triplet::new(1, 0, 0), p + Triplet::new(0, 1, 0)])
}

/// A [`tiny_clip`] anchored at a random point with components in `1..=bound`.
pub fn random_clip<R: Rng + ?Sized>(rng: &mut R, bound: Coord) -> Triangle {
    let bound = bound.max(1);
    let anchor = Triplet::new(
        rng.gen_range(1..=bound),
        rng.gen_range(1..=bound),
        rng.gen_range(1..=bound),
    );
    tiny_clip(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn identity(max_depth: u32, max_height: u64, max_results: usize) -> Enumeration {
        enumerate(&Triangle::identity(), max_depth, max_height, max_results).unwrap()
    }

    fn path_of(found: &Enumeration, x: i32, y: i32, z: i32) -> Option<&str> {
        found
            .get(Triplet::new(x.into(), y.into(), z.into()))
            .map(|p| p.path.as_str())
    }

    #[test]
    fn test_root_only() {
        let found = identity(0, 1 << 16, 100);
        assert_eq!(found.len(), 7);
        assert_eq!(found.status(), EnumerationStatus::Complete);
        assert_eq!(found.statistics().prunes(PruneReason::Depth), 6);
        assert_eq!(found.statistics().get(Counters::PointsRecorded), 7);
        assert_eq!(found.depth_counts(), [1]);

        assert_eq!(path_of(&found, 1, 0, 0), Some("-P0"));
        assert_eq!(path_of(&found, 0, 0, 1), Some("-P2"));
        assert_eq!(path_of(&found, 0, 1, 1), Some("-p12"));
        assert_eq!(path_of(&found, 1, 1, 1), Some("-ctr"));
    }

    #[test]
    fn test_one_level() {
        let found = identity(1, 1 << 16, 100);
        assert_eq!(found.len(), 25);
        assert_eq!(found.statistics().prunes(PruneReason::Depth), 36);
        assert_eq!(found.depth_counts(), [1, 6]);

        assert_eq!(path_of(&found, 3, 2, 1), Some("x-ctr"));
        assert_eq!(path_of(&found, 1, 2, 3), Some("Z-ctr"));
        assert_eq!(path_of(&found, 2, 1, 0), Some("x-p01"));
        assert_eq!(path_of(&found, 1, 1, 2), Some("z-p12"));
        assert_eq!(path_of(&found, 2, 2, 1), Some("x-p12"));
        assert_eq!(found.get(Triplet::new(1, 1, 2)).map(|p| p.depth), Some(1));
    }

    #[test]
    fn test_result_limit() {
        let found = identity(2, 1 << 16, 100);
        assert_eq!(found.len(), 100);
        assert_eq!(found.status(), EnumerationStatus::ResultLimitReached);
        assert_eq!(found.statistics().prunes(PruneReason::ResultLimit), 4);

        let found = identity(3, 1 << 16, 10);
        assert_eq!(found.len(), 10);
        assert_eq!(found.statistics().prunes(PruneReason::ResultLimit), 11);
    }

    #[test]
    fn test_height_bound() {
        let found = identity(4, 6, 1000);
        assert_eq!(found.len(), 40);
        assert_eq!(found.status(), EnumerationStatus::Complete);
        assert_eq!(found.statistics().prunes(PruneReason::Height), 36);
        assert_eq!(found.points().map(|p| p.point.sum()).max(), Some(6));
    }

    #[test]
    fn test_clip_must_wind_left() {
        let mut clip = Triangle::identity();
        clip.rotate();
        assert!(enumerate(&clip, 1, 100, 100).is_ok());

        let reversed = Triangle::from_columns([
            Triplet::new(0, 1, 0),
            Triplet::new(1, 0, 0),
            Triplet::new(0, 0, 1),
        ]);
        assert!(matches!(
            enumerate(&reversed, 1, 100, 100),
            Err(SearchError::InvalidClip { .. })
        ));
    }

    #[test]
    fn test_csv_line() {
        let point = EnumeratedPoint {
            point: Triplet::new(5, 3, 2),
            path: "xz-p01".to_string(),
            depth: 2,
        };
        assert_eq!(point.csv_line(), "5,3,2,\"xz-p01\",2");
    }

    #[test]
    fn test_random_clip_is_reproducible() {
        let a = random_clip(&mut StdRng::seed_from_u64(7), 50);
        let b = random_clip(&mut StdRng::seed_from_u64(7), 50);
        assert_eq!(a, b);
        assert!(a.is_left_winding());
        assert!(a.columns()[0].components().iter().all(|&c| (1..=50).contains(&c)));
    }
}
