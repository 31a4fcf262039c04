// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Searches over the tree of coprime triangles.
//!
//! - [`search`]: guided descent to one target, in time proportional to the
//!   target's size
//! - [`find_all`]: every path to a target within a level bound
//! - [`enumerate`]: every point inside a clip triangle within the bounds
//!
//! The exhaustive engines share the depth-first traversal in
//! [`crate::engine`]; the guided search is a plain loop.

pub mod config;
pub mod enumerate;
pub mod errors;
pub mod exhaustive;
pub mod guided;
pub mod moves;
pub mod statistics;

pub use config::SearchConfig;
pub use enumerate::{enumerate, random_clip, tiny_clip, EnumeratedPoint, Enumeration, EnumerationStatus, Enumerator};
pub use errors::{InvariantKind, InvariantViolation, SearchError, TargetProblem};
pub use exhaustive::{find_all, PathSet};
pub use guided::{GuidedSearch, SearchOutcome};
pub use moves::{Move, MoveSet};
pub use statistics::{Counters, PruneReason, Statistics};

use crate::geometry::Triplet;

/// Guided search with the default step bound.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::Triplet;
/// use euclids_orchard::search::search;
///
/// let outcome = search(Triplet::new(16, 42, 5)).unwrap();
/// assert_eq!(outcome.path(), "YYYy2aaa");
/// ```
pub fn search(target: Triplet) -> Result<SearchOutcome, SearchError> {
    GuidedSearch::default().search(target)
}
