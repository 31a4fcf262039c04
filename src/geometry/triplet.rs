// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer triplets: the points of the search space.
//!
//! A triplet (x, y, z) can be read as a point in 3-D space (for addition and
//! dot products), but the triangle operations treat it as a ray from the
//! origin, projected onto the plane x + y + z = 1. The projection preserves
//! collinearity and the sign of every angle seen from the origin, so the
//! geometric predicates in [`crate::geometry::orientation`] never need to
//! divide.
//!
//! Coprimality is not enforced by the type; validate with
//! [`Triplet::is_coprime`].
//!
//! # Examples
//!
//! ```
//! use euclids_orchard::geometry::Triplet;
//!
//! let p: Triplet = "16,42,5".parse().unwrap();
//! assert!(p.is_coprime());
//! assert_eq!(p.sum(), 63);
//! assert_eq!(format!("{}", p), "[16, 42, 5]");
//! ```

use crate::geometry::constants::{wide, Coord, Wide};
use crate::geometry::gcd::gcd_all;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use thiserror::Error;

/// A triple of signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet {
    pub x: Coord,
    pub y: Coord,
    pub z: Coord,
}

impl Triplet {
    /// The origin. Never a valid vertex; marks a collapsed triangle column.
    pub const ZERO: Triplet = Triplet::new(0, 0, 0);

    pub const fn new(x: Coord, y: Coord, z: Coord) -> Self {
        Self { x, y, z }
    }

    /// Components as an array, in x, y, z order.
    pub fn components(self) -> [Coord; 3] {
        [self.x, self.y, self.z]
    }

    /// Sum of the components (the "radius" or height of the triplet).
    #[inline]
    pub fn sum(self) -> Coord {
        self.x + self.y + self.z
    }

    /// True when every component is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }

    pub fn dot(self, rhs: Triplet) -> Wide {
        wide(self.x) * wide(rhs.x) + wide(self.y) * wide(rhs.y) + wide(self.z) * wide(rhs.z)
    }

    pub fn length_sq(self) -> Wide {
        self.dot(self)
    }

    /// Greatest common divisor of the three components.
    pub fn gcd(self) -> Coord {
        gcd_all(&self.components())
    }

    /// True if gcd(x, y, z) == 1.
    pub fn is_coprime(self) -> bool {
        self.gcd() == 1
    }

    /// True if the components are the sides of a right triangle, in any order.
    pub fn is_pythagorean_triple(self) -> bool {
        let (a2, b2, c2) = (
            wide(self.x) * wide(self.x),
            wide(self.y) * wide(self.y),
            wide(self.z) * wide(self.z),
        );
        a2 + b2 == c2 || b2 + c2 == a2 || c2 + a2 == b2
    }

    /// Componentwise `<=`: `self` could be an ancestor of `other` in the tree.
    ///
    /// This is a partial order; two triplets may precede neither each other.
    #[inline]
    pub fn precedes(self, other: Triplet) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }
}

impl Add for Triplet {
    type Output = Triplet;

    #[inline]
    fn add(self, rhs: Triplet) -> Triplet {
        Triplet::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Triplet {
    #[inline]
    fn add_assign(&mut self, rhs: Triplet) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Triplet {
    type Output = Triplet;

    #[inline]
    fn sub(self, rhs: Triplet) -> Triplet {
        Triplet::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Priority order.
///
/// A triplet further from the origin (larger sum) has *lower* priority and
/// compares `Less`. Ties go to the more x-oriented, then y-oriented triplet
/// being lower, so `[1,0,0] < [0,1,0] < [0,0,1]`. A max-heap of triplets
/// therefore yields the smallest triplets first.
impl Ord for Triplet {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .sum()
            .cmp(&self.sum())
            .then_with(|| other.x.cmp(&self.x))
            .then_with(|| other.y.cmp(&self.y))
            .then_with(|| other.z.cmp(&self.z))
    }
}

impl PartialOrd for Triplet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Triplet {
    /// Format a triplet as "[x, y, z]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl From<[Coord; 3]> for Triplet {
    fn from([x, y, z]: [Coord; 3]) -> Self {
        Triplet::new(x, y, z)
    }
}

/// Failure to parse a triplet from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTripletError {
    #[error("expected 3 components, found {0}")]
    WrongArity(usize),

    #[error("invalid component {text:?}: {reason}")]
    InvalidComponent { text: String, reason: String },
}

impl FromStr for Triplet {
    type Err = ParseTripletError;

    /// Parse "x,y,z", "x y z" or "[x, y, z]".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 3 {
            return Err(ParseTripletError::WrongArity(parts.len()));
        }

        let mut components = [0 as Coord; 3];
        for (slot, text) in components.iter_mut().zip(&parts) {
            *slot = text
                .parse()
                .map_err(|e: std::num::ParseIntError| ParseTripletError::InvalidComponent {
                    text: text.to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(Triplet::from(components))
    }
}
