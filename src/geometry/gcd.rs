// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greatest common divisors of two or more coordinates.
//!
//! Signs are ignored throughout: `gcd(-4, 6) == 2`. By convention
//! `gcd(x, 0) == |x|` and `gcd(0, 0) == 0`, so a zero component never
//! changes the gcd of a triplet.

use crate::geometry::constants::Coord;

/// Euclid's algorithm on two values.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::gcd::gcd;
///
/// assert_eq!(gcd(40, 32), 8);
/// assert_eq!(gcd(0, 8), 8);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(m: Coord, n: Coord) -> Coord {
    let (mut m, mut n) = (m.abs(), n.abs());
    while n != 0 {
        let remainder = m % n;
        m = n;
        n = remainder;
    }
    m
}

/// Euclid's algorithm generalized to any number of values.
///
/// Each round finds the smallest non-zero magnitude and replaces every other
/// value by its remainder modulo that smallest value. The rounds stop when a
/// single non-zero value is left; that value is the gcd.
///
/// # Examples
///
/// ```
/// use euclids_orchard::geometry::gcd::gcd_all;
///
/// assert_eq!(gcd_all(&[48, 15, 12, 27, 27, 9, 0, 0, 0, 90, 24, 21]), 3);
/// assert_eq!(gcd_all(&[8, 8, 0]), 8);
/// assert_eq!(gcd_all(&[]), 0);
/// ```
pub fn gcd_all(values: &[Coord]) -> Coord {
    let mut values: Vec<Coord> = values.iter().map(|v| v.abs()).filter(|&v| v != 0).collect();

    loop {
        let Some((smallest_index, &smallest)) =
            values.iter().enumerate().min_by_key(|&(_, v)| *v)
        else {
            return 0;
        };

        if values.len() == 1 {
            return smallest;
        }

        for (i, v) in values.iter_mut().enumerate() {
            if i != smallest_index {
                *v %= smallest;
            }
        }
        values.retain(|&v| v != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count down from the smallest non-zero magnitude to find a common factor.
    fn gcd_brute_force(values: &[Coord]) -> Coord {
        let Some(smallest) = values.iter().map(|v| v.abs()).filter(|&v| v != 0).min() else {
            return 0;
        };
        (1..=smallest)
            .rev()
            .find(|k| values.iter().all(|v| v % k == 0))
            .unwrap_or(1)
    }

    #[test]
    fn test_gcd_pairs() {
        assert_eq!(gcd(8, 1), 1);
        assert_eq!(gcd(0, 1), 1);
        assert_eq!(gcd(0, 8), 8);
        assert_eq!(gcd(40, 32), 8);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-12, 18), 6);
    }

    #[test]
    fn test_gcd_all_lists() {
        assert_eq!(gcd_all(&[16, 16, 16, 27, 27, 9, 0, 0, 0, 8, 8, 8]), 1);
        assert_eq!(gcd_all(&[48, 15, 12, 27, 27, 9, 0, 0, 0, 90, 24, 21]), 3);
    }

    #[test]
    fn test_gcd_all_with_zeros() {
        assert_eq!(gcd_all(&[8, 8, 8]), 8);
        assert_eq!(gcd_all(&[8, 8, 5]), 1);
        assert_eq!(gcd_all(&[8, 8, 0]), 8);
        assert_eq!(gcd_all(&[8, 0, 0]), 8);
        assert_eq!(gcd_all(&[0, 0, 0]), 0);
    }

    #[test]
    fn test_gcd_all_agrees_with_pairwise_and_brute_force() {
        for x in -6..=12 {
            for y in 0..=12 {
                for z in -3..=9 {
                    let all = gcd_all(&[x, y, z]);
                    assert_eq!(all, gcd(x, gcd(y, z)), "({}, {}, {})", x, y, z);
                    assert_eq!(all, gcd_brute_force(&[x, y, z]), "({}, {}, {})", x, y, z);
                }
            }
        }
    }
}
