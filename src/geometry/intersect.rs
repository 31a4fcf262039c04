// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segment and triangle intersection tests on the projective plane.
//!
//! Used by the enumeration engine to clip the traversal to a region.

use crate::geometry::constants::{wide, Wide};
use crate::geometry::orientation::scalar_triple;
use crate::geometry::{left_of, Sign, Triangle, Triplet};

/// True if segments AB and CD intersect, endpoints included.
///
/// The test is conservative for collinear segments: if all four points lie
/// on one line the segments are reported as intersecting.
pub fn segments_intersect(a: Triplet, b: Triplet, c: Triplet, d: Triplet) -> bool {
    // C and D strictly on the same side of AB
    if left_of(a, b, c) * left_of(a, b, d) == Sign::Positive {
        return false;
    }
    // A and B strictly on the same side of CD
    left_of(c, d, a) * left_of(c, d, b) != Sign::Positive
}

fn cross(a: Triplet, b: Triplet) -> [Wide; 3] {
    let [ax, ay, az] = a.components().map(wide);
    let [bx, by, bz] = b.components().map(wide);
    [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx]
}

fn dot(u: [Wide; 3], v: [Wide; 3]) -> Wide {
    u.iter().zip(v.iter()).map(|(a, b)| a * b).sum()
}

/// True if `p` lies on the projected segment AB, endpoints included: `p` is
/// a non-negative combination of `a` and `b`. The origin lies on no segment.
pub fn on_segment(p: Triplet, a: Triplet, b: Triplet) -> bool {
    if p.is_zero() || scalar_triple(a, b, p) != 0 {
        return false;
    }
    let ab = cross(a, b);
    if ab == [0; 3] {
        return p == a || p == b;
    }
    // p = αa + βb gives p×b = α(a×b) and a×p = β(a×b).
    dot(cross(p, b), ab) >= 0 && dot(cross(a, p), ab) >= 0
}

/// The non-zero columns of a triangle, and the edges between them.
///
/// A collapsed triangle is the single segment between its two remaining
/// columns; a lone vertex is a segment of zero length.
fn outline(t: &Triangle) -> (Vec<Triplet>, Vec<(Triplet, Triplet)>) {
    let vertices = t.vertices();
    let edges = match *vertices.as_slice() {
        [a, b, c] => vec![(a, b), (b, c), (c, a)],
        [a, b] => vec![(a, b)],
        [a] => vec![(a, a)],
        _ => Vec::new(),
    };
    (vertices, edges)
}

/// True if the two triangles overlap: a full triangle contains a vertex of
/// the other, or some pair of their edges cross.
///
/// Zero columns are not vertices, so a collapsed triangle is tested as the
/// segment it spans.
pub fn triangles_intersect(s: &Triangle, t: &Triangle) -> bool {
    let (sv, se) = outline(s);
    let (tv, te) = outline(t);

    if tv.len() == 3 && sv.iter().any(|&v| t.contains_point(v)) {
        return true;
    }
    if sv.len() == 3 && tv.iter().any(|&v| s.contains_point(v)) {
        return true;
    }

    se.iter()
        .any(|&(a, b)| te.iter().any(|&(c, d)| segments_intersect(a, b, c, d)))
}
