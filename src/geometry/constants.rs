// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for triangle arithmetic.
//!
//! The coordinate width is configurable at compile time via cargo features.
//!
//! # Supported widths
//!
//! - `i64` - **default**
//! - `i32` - `coord_i32` feature, for comparison with 32-bit builds
//!
//! # Example
//!
//! ```bash
//! # Default: 64-bit coordinates
//! cargo build
//!
//! # 32-bit coordinates
//! cargo build --features coord_i32
//! ```
//!
//! Whatever the coordinate width, products of coordinates (determinants,
//! scalar triple products, edge projections) are evaluated in [`Wide`].
//! Overflow on pathologically large triples is an accepted limitation.

/// Signed integer type of a single triplet coordinate.
#[cfg(not(feature = "coord_i32"))]
pub type Coord = i64;

#[cfg(feature = "coord_i32")]
pub type Coord = i32;

/// Accumulator type for products of up to four coordinates.
pub type Wide = i128;

/// Number of columns in a triangle (and components in a triplet).
pub const NCOLUMNS: usize = 3;

/// Default depth bound for the exhaustive engines.
pub const DEFAULT_MAX_DEPTH: u32 = 18;

/// Default bound on the coordinate sum of enumerated points.
pub const DEFAULT_MAX_HEIGHT: u64 = 0x0001_0000;

/// Default cap on the number of distinct enumerated points.
pub const DEFAULT_MAX_RESULTS: usize = 100_000;

/// Widen a coordinate for product arithmetic.
#[inline]
pub fn wide(v: Coord) -> Wide {
    Wide::from(v)
}
