// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact orientation predicate.
//!
//! [`left_of`] returns the orientation of three triplets after projecting them
//! onto the plane x + y + z = 1. Instead of dividing each triplet by its sum,
//! the sign of the raw scalar triple product is multiplied by the signs of the
//! three sums. Only signs are combined, so there is no precision loss, and the
//! products are taken in [`Wide`] to push overflow far out.

use crate::geometry::constants::{wide, Wide};
use crate::geometry::Triplet;
use std::fmt;
use std::ops::{Mul, Neg};

/// The sign of an exact integer quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// Sign of a wide integer.
    #[inline]
    pub fn of(v: Wide) -> Sign {
        match v.signum() {
            -1 => Sign::Negative,
            0 => Sign::Zero,
            _ => Sign::Positive,
        }
    }

    /// -1, 0 or 1.
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i8 as i32
    }

    /// '-', '0' or '+'.
    pub fn symbol(self) -> char {
        match self {
            Sign::Negative => '-',
            Sign::Zero => '0',
            Sign::Positive => '+',
        }
    }

    /// Inverse of [`Sign::symbol`].
    pub fn from_symbol(c: char) -> Option<Sign> {
        match c {
            '-' => Some(Sign::Negative),
            '0' => Some(Sign::Zero),
            '+' => Some(Sign::Positive),
            _ => None,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        Sign::of(Wide::from(self.as_i32() * rhs.as_i32()))
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self * Sign::Negative
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The scalar triple product a · (b × c), i.e. the determinant of the matrix
/// with columns a, b, c.
pub fn scalar_triple(a: Triplet, b: Triplet, c: Triplet) -> Wide {
    wide(a.x) * (wide(b.y) * wide(c.z) - wide(b.z) * wide(c.y))
        + wide(a.y) * (wide(b.z) * wide(c.x) - wide(b.x) * wide(c.z))
        + wide(a.z) * (wide(b.x) * wide(c.y) - wide(b.y) * wide(c.x))
}

/// Orientation of the projected triangle ABC.
///
/// - `Positive`: ABC is left-winding (C lies to the left of AB)
/// - `Negative`: ABC is right-winding
/// - `Zero`: A, B and C are collinear, or one of them is the origin
///
/// Invariant under a circular shift of the arguments.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::{left_of, Sign, Triplet};
///
/// let (a, b, c) = (Triplet::new(1, 0, 0), Triplet::new(0, 1, 0), Triplet::new(0, 0, 1));
/// assert_eq!(left_of(a, b, c), Sign::Positive);
/// assert_eq!(left_of(b, a, c), Sign::Negative);
/// ```
pub fn left_of(a: Triplet, b: Triplet, c: Triplet) -> Sign {
    let projection = Sign::of(wide(a.sum())) * Sign::of(wide(b.sum())) * Sign::of(wide(c.sum()));
    projection * Sign::of(scalar_triple(a, b, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(x: i32, y: i32, z: i32) -> Triplet {
        Triplet::new(x.into(), y.into(), z.into())
    }

    #[test]
    fn test_sign_arithmetic() {
        assert_eq!(Sign::of(-12), Sign::Negative);
        assert_eq!(Sign::of(0), Sign::Zero);
        assert_eq!(Sign::of(7), Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Zero, Sign::Zero);
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(Sign::from_symbol('+'), Some(Sign::Positive));
        assert_eq!(Sign::from_symbol('x'), None);
    }

    #[test]
    fn test_left_of_samples() {
        assert_eq!(left_of(t(1, 1, 1), t(3, 1, 2), t(3, 2, 1)), Sign::Positive);
        assert_eq!(left_of(t(3, 1, 2), t(1, 1, 1), t(3, 2, 1)), Sign::Negative);
        assert_eq!(left_of(t(1, 0, 0), t(0, 1, 0), t(0, 0, 1)), Sign::Positive);
    }

    #[test]
    fn test_left_of_collinear() {
        assert_eq!(left_of(t(3, 3, 4), t(3, 4, 6), t(3, 5, 8)), Sign::Zero);
        assert_eq!(left_of(Triplet::ZERO, t(3, 4, 6), t(3, 5, 8)), Sign::Zero);
    }

    #[test]
    fn test_left_of_is_projective() {
        // Scaling a point by a positive factor does not move its projection.
        let (a, b, c) = (t(1, 2, 3), t(4, 1, 1), t(2, 5, 2));
        let scaled = t(3, 6, 9);
        assert_eq!(left_of(a, b, c), left_of(scaled, b, c));
    }

    #[test]
    fn test_left_of_circular_shift() {
        let (a, b, c) = (t(2, 1, 1), t(1, 3, 1), t(1, 1, 4));
        let s = left_of(a, b, c);
        assert_eq!(s, left_of(b, c, a));
        assert_eq!(s, left_of(c, a, b));
        assert_eq!(-s, left_of(b, a, c));
    }
}
