// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Locating a point relative to a triangle's medians.
//!
//! The three medians of a triangle meet at the centroid and cut the triangle
//! into six open sextants. A point inside the triangle lies either in one of
//! the sextants, on one of the six half-medians, or on the centroid itself:
//! thirteen cases in total, one for each [`Sextant`].
//!
//! Each case is identified by the orientation of the point relative to the
//! three rays from the centroid through the vertices, written as three signs
//! (`-`, `0`, `+`) for X, Y and Z in turn.

use crate::geometry::constants::{wide, Wide};
use crate::geometry::orientation::{left_of, Sign};
use crate::geometry::{Triangle, Triplet};
use std::fmt;

/// Where a point lies in a full-rank triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sextant {
    /// `000`
    Centroid,
    /// `0-+`: on the median from the centroid towards X.
    VertexX,
    /// `+0-`
    VertexY,
    /// `-+0`
    VertexZ,
    /// `0+-`: on the median from the centroid towards the midpoint of YZ.
    MidpointYZ,
    /// `-0+`
    MidpointZX,
    /// `+-0`
    MidpointXY,
    /// `+-+`: right of the median towards X.
    XNeg,
    /// `--+`: left of the median towards X.
    XPos,
    /// `++-`
    YNeg,
    /// `+--`
    YPos,
    /// `-++`
    ZNeg,
    /// `-+-`
    ZPos,
}

impl Sextant {
    pub const ALL: [Sextant; 13] = [
        Sextant::Centroid,
        Sextant::VertexX,
        Sextant::VertexY,
        Sextant::VertexZ,
        Sextant::MidpointYZ,
        Sextant::MidpointZX,
        Sextant::MidpointXY,
        Sextant::XNeg,
        Sextant::XPos,
        Sextant::YNeg,
        Sextant::YPos,
        Sextant::ZNeg,
        Sextant::ZPos,
    ];

    /// The orientation code, one sign per vertex.
    pub fn signs(self) -> [Sign; 3] {
        use Sign::{Negative as N, Positive as P, Zero as O};
        match self {
            Sextant::Centroid => [O, O, O],
            Sextant::VertexX => [O, N, P],
            Sextant::VertexY => [P, O, N],
            Sextant::VertexZ => [N, P, O],
            Sextant::MidpointYZ => [O, P, N],
            Sextant::MidpointZX => [N, O, P],
            Sextant::MidpointXY => [P, N, O],
            Sextant::XNeg => [P, N, P],
            Sextant::XPos => [N, N, P],
            Sextant::YNeg => [P, P, N],
            Sextant::YPos => [P, N, N],
            Sextant::ZNeg => [N, P, P],
            Sextant::ZPos => [N, P, N],
        }
    }

    /// The sextant with the given code. `None` for the codes that cannot
    /// occur inside a left-winding triangle.
    pub fn from_signs(signs: [Sign; 3]) -> Option<Sextant> {
        Sextant::ALL.into_iter().find(|s| s.signs() == signs)
    }

    /// True for the seven cases that lie on a median.
    pub fn is_on_median(self) -> bool {
        self.signs().contains(&Sign::Zero)
    }
}

impl fmt::Display for Sextant {
    /// The three-character code, e.g. `-+0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.signs() {
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}

/// Where a point lies on the remaining edge of a rank-2 triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    Centroid,
    /// Between the centroid and the first non-zero column.
    TowardFirst,
    /// Between the centroid and the second non-zero column.
    TowardSecond,
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Face(Sextant),
    Edge(EdgeSide),
}

impl Classification {
    /// True if the point is the centroid.
    pub fn is_centroid(self) -> bool {
        matches!(
            self,
            Classification::Face(Sextant::Centroid) | Classification::Edge(EdgeSide::Centroid)
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Face(sextant) => write!(f, "{}", sextant),
            Classification::Edge(side) => write!(f, "{:?}", side),
        }
    }
}

/// Locate `point` within `triangle`.
///
/// Returns `None` when the triangle has fewer than two non-zero columns, or
/// when a full-rank triangle gives a sign pattern no point inside it can have.
///
/// A rank-2 triangle is a segment; `point` is assumed to lie on it.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::{classify, Classification, Sextant, Triangle, Triplet};
///
/// let c = classify(&Triangle::identity(), Triplet::new(1, 1, 2));
/// assert_eq!(c, Some(Classification::Face(Sextant::VertexZ)));
/// ```
pub fn classify(triangle: &Triangle, point: Triplet) -> Option<Classification> {
    let centroid = triangle.centroid();
    match triangle.num_non_zero_columns() {
        3 => {
            let signs = triangle.columns().map(|v| left_of(centroid, v, point));
            Sextant::from_signs(signs).map(Classification::Face)
        }
        2 => {
            let first = triangle.columns().into_iter().find(|c| !c.is_zero())?;
            Some(Classification::Edge(edge_side(centroid, first, point)))
        }
        _ => None,
    }
}

/// The sign of (p/|p| − c/|c|) · (v/|v| − c/|c|), where |t| is the component
/// sum, computed without division.
fn edge_side(centroid: Triplet, first: Triplet, point: Triplet) -> EdgeSide {
    let c_sum = wide(centroid.sum());

    // t·|c| − c·|t| is a positive multiple (for |t|, |c| > 0) of t/|t| − c/|c|.
    let offset = |t: Triplet| -> [Wide; 3] {
        let t_sum = wide(t.sum());
        let [tx, ty, tz] = t.components().map(wide);
        let [cx, cy, cz] = centroid.components().map(wide);
        [tx * c_sum - cx * t_sum, ty * c_sum - cy * t_sum, tz * c_sum - cz * t_sum]
    };
    let (u, v) = (offset(point), offset(first));
    let dot: Wide = u.iter().zip(v.iter()).map(|(a, b)| a * b).sum();

    let sign = Sign::of(dot) * Sign::of(wide(point.sum())) * Sign::of(wide(first.sum()));
    match sign {
        Sign::Zero => EdgeSide::Centroid,
        Sign::Positive => EdgeSide::TowardFirst,
        Sign::Negative => EdgeSide::TowardSecond,
    }
}
