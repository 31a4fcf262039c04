// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search the tree of coprime integer triangles.
//!
//! Every triple of positive coprime integers is the centroid of exactly one
//! triangle reachable from the identity matrix by a sequence of merge,
//! cascade and collapse operations. This is a three-dimensional analogue of
//! the Stern–Brocot tree, and the path to a triple is the trace of a
//! three-dimensional Euclidean algorithm.
//!
//! # Architecture
//!
//! ## Geometry
//!
//! Exact integer algebra with no floating point:
//! - [`Triplet`](geometry::Triplet): points, read as rays through the plane
//!   x + y + z = 1
//! - [`Triangle`](geometry::Triangle): three columns of determinant 1, with
//!   the path of operation codes that produced it
//! - [`classify`](geometry::classify): where a point lies relative to a
//!   triangle's medians
//!
//! ## Searches
//!
//! 1. **Guided search** ([`search()`]): walks down the tree, choosing each
//!    step from the target's sextant in the current triangle
//! 2. **Exhaustive search** ([`find_all`]): every path to a target within a
//!    level bound, used to cross-check the guided search
//! 3. **Enumeration** ([`enumerate()`]): every point inside a clip triangle,
//!    with the shortest path reaching it
//!
//! The two exhaustive searches are [`Visitor`]s driven by one
//! depth-first [`SearchEngine`].
//!
//! # Example
//!
//! ```
//! use euclids_orchard::geometry::{Triangle, Triplet};
//!
//! let outcome = euclids_orchard::search(Triplet::new(121, 77, 27)).unwrap();
//! assert_eq!(outcome.path(), "xYzXyZ");
//!
//! let replayed = Triangle::from_path(outcome.path()).unwrap();
//! assert_eq!(replayed.centroid(), Triplet::new(121, 77, 27));
//! ```

pub mod engine;
pub mod geometry;
pub mod search;

// Re-export commonly used types
pub use engine::{Node, SearchEngine, Visit, Visitor};
pub use geometry::{Operation, Triangle, Triplet};
pub use search::{
    enumerate, find_all, search, Enumeration, GuidedSearch, MoveSet, PathSet, SearchConfig,
    SearchError, SearchOutcome, Statistics,
};
