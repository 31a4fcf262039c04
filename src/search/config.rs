// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.
//!
//! One `SearchConfig` drives every engine; each engine reads only the
//! fields it needs:
//!
//! | field | guided | find_all | enumerate |
//! |---|---|---|---|
//! | `max_depth` | steps | levels | levels |
//! | `max_height` | | | coordinate sum |
//! | `max_results` | | | distinct points |
//! | `moves` | | yes | yes |
//! | `match_midpoints` | | yes | |

use crate::geometry::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_RESULTS};
use crate::search::moves::MoveSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Bound on steps (guided search) or levels (exhaustive engines).
    pub max_depth: u32,

    /// Bound on the absolute coordinate sum of enumerated points.
    pub max_height: u64,

    /// Bound on the number of distinct enumerated points.
    pub max_results: usize,

    /// Children of each node in the exhaustive engines.
    pub moves: MoveSet,

    /// Also report a `find_all` target found as an edge midpoint of a
    /// full-rank triangle. Off by default: midpoint hits give a target more
    /// than one path.
    pub match_midpoints: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_height: DEFAULT_MAX_HEIGHT,
            max_results: DEFAULT_MAX_RESULTS,
            moves: MoveSet::canonical(),
            match_midpoints: false,
        }
    }
}

impl SearchConfig {
    /// Defaults for enumeration: the six cascades at every node.
    pub fn enumeration() -> Self {
        Self {
            moves: MoveSet::sextants(),
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_height(mut self, max_height: u64) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_moves(mut self, moves: MoveSet) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_midpoints(mut self, match_midpoints: bool) -> Self {
        self.match_midpoints = match_midpoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let default = SearchConfig::default();
        assert_eq!(default.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(default.moves, MoveSet::canonical());
        assert!(!default.match_midpoints);

        assert_eq!(SearchConfig::enumeration().moves, MoveSet::sextants());
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_max_depth(3)
            .with_max_height(6)
            .with_max_results(10)
            .with_midpoints(true)
            .with_moves(MoveSet::sextants());
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_height, 6);
        assert_eq!(config.max_results, 10);
        assert!(config.match_midpoints);
        assert_eq!(config.moves.full().len(), 6);
    }
}
