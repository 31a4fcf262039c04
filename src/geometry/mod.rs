// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact integer geometry of coprime triangles.
//!
//! This module contains the algebra the searches are built on:
//! - Triplet: integer points, read as rays projected onto x + y + z = 1
//! - Orientation: the exact `left_of` predicate and its `Sign`
//! - Intersect: segment and triangle overlap tests
//! - Operation: the one-character operation codes
//! - Triangle: unimodular matrices and the operations on them
//! - Sextant: locating a point relative to a triangle's medians

pub mod constants;
pub mod gcd;
pub mod intersect;
pub mod operation;
pub mod orientation;
pub mod sextant;
pub mod triangle;
pub mod triplet;

// Re-export for convenience
pub use constants::*;
pub use intersect::{on_segment, segments_intersect, triangles_intersect};
pub use operation::{Operation, OperationError};
pub use orientation::{left_of, Sign};
pub use sextant::{classify, Classification, EdgeSide, Sextant};
pub use triangle::{CascadeProgress, Triangle};
pub use triplet::{ParseTripletError, Triplet};
