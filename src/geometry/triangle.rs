// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coprime triangles: unimodular 3×3 integer matrices.
//!
//! A triangle is a matrix whose three columns are integer triplets. Read as
//! rays from the origin and projected onto the plane x + y + z = 1, the
//! columns are the vertices of a triangle in the plane; the column sum (the
//! centroid) lies inside it.
//!
//! Starting from the identity, every operation in [`Operation`] adds one
//! column to another, which subdivides the triangle while keeping the
//! determinant equal to 1. Hence every column, every centroid and every edge
//! midpoint of a reachable triangle is a coprime triple.
//!
//! # Invariants
//!
//! For a triangle of rank 3 reached through merges and cascades only:
//! - `determinant() == 1`
//! - the centroid is coprime
//! - the columns wind to the left
//!
//! Collapses drop the rank to 2 (column 2 becomes zero) while keeping the
//! centroid. A degenerate triangle is a valid intermediate state but the
//! determinant is then zero.
//!
//! # Path bookkeeping
//!
//! Every successful operation increments [`Triangle::depth`] by one and
//! appends exactly one code to [`Triangle::path`], including cascades and
//! compound operations. Replaying the path from the identity with
//! [`Triangle::from_path`] reproduces the triangle.

use crate::geometry::constants::{Wide, NCOLUMNS};
use crate::geometry::intersect::on_segment;
use crate::geometry::operation::{Action, Operation, OperationError};
use crate::geometry::orientation::{left_of, scalar_triple, Sign};
use crate::geometry::Triplet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// How far a cascade got.
///
/// The second merge of a cascade is skipped when the third column has
/// already collapsed to zero. The cascade still counts as applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeProgress {
    Complete,
    Partial,
}

/// A unimodular matrix of three triplet columns, with its operation history.
#[derive(Debug, Clone)]
pub struct Triangle {
    columns: [Triplet; NCOLUMNS],
    depth: u32,
    path: String,
}

impl Triangle {
    /// The identity matrix: the root of the tree.
    pub fn identity() -> Self {
        Self::from_columns([
            Triplet::new(1, 0, 0),
            Triplet::new(0, 1, 0),
            Triplet::new(0, 0, 1),
        ])
    }

    /// A triangle with the given columns, depth 0 and an empty path.
    ///
    /// The columns are not validated; see [`Triangle::is_coprime`] and
    /// [`Triangle::is_left_winding`].
    pub fn from_columns(columns: [Triplet; NCOLUMNS]) -> Self {
        Self {
            columns,
            depth: 0,
            path: String::new(),
        }
    }

    /// Replay a path of operation codes from the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use euclids_orchard::geometry::{Triangle, Triplet};
    ///
    /// let t = Triangle::from_path("1A").unwrap();
    /// assert_eq!(t.centroid(), Triplet::new(1, 1, 2));
    /// assert_eq!(t.depth(), 2);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, OperationError> {
        let mut triangle = Self::identity();
        triangle.apply_path(path)?;
        Ok(triangle)
    }

    pub fn columns(&self) -> [Triplet; NCOLUMNS] {
        self.columns
    }

    /// Column `index`, or `None` if out of range.
    pub fn column(&self, index: usize) -> Option<Triplet> {
        self.columns.get(index).copied()
    }

    /// Number of operations applied since the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Operation codes applied since the root, in order.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path with collapses rendered as `{XY}`, `{YZ}` or `{ZX}`.
    pub fn labelled_path(&self) -> String {
        self.path
            .chars()
            .map(|c| Operation::from_code(c).map_or_else(|| c.to_string(), |op| op.label().to_string()))
            .collect()
    }

    pub fn determinant(&self) -> Wide {
        let [a, b, c] = self.columns;
        scalar_triple(a, b, c)
    }

    /// Sum of the columns.
    pub fn centroid(&self) -> Triplet {
        let [a, b, c] = self.columns;
        a + b + c
    }

    /// Edge midpoints, in the order (c0+c1, c1+c2, c0+c2).
    pub fn midpoints(&self) -> [Triplet; 3] {
        let [a, b, c] = self.columns;
        [a + b, b + c, a + c]
    }

    /// Count of columns that have not collapsed to zero: the rank.
    pub fn num_non_zero_columns(&self) -> usize {
        self.columns.iter().filter(|c| !c.is_zero()).count()
    }

    /// True if every column is zero.
    pub fn is_zero(&self) -> bool {
        self.columns.iter().all(|c| c.is_zero())
    }

    /// Determinant 1 and a coprime centroid.
    pub fn is_coprime(&self) -> bool {
        self.determinant() == 1 && self.centroid().is_coprime()
    }

    pub fn is_left_winding(&self) -> bool {
        let [a, b, c] = self.columns;
        left_of(a, b, c) == Sign::Positive
    }

    /// True if `p` lies inside the projected triangle, edges and vertices included.
    ///
    /// A collapsed triangle contains only the points of the segment between
    /// its non-zero columns. The origin is never contained.
    pub fn contains_point(&self, p: Triplet) -> bool {
        if p.is_zero() {
            return false;
        }
        match *self.vertices().as_slice() {
            [a, b, c] => {
                left_of(p, a, b) != Sign::Negative
                    && left_of(p, b, c) != Sign::Negative
                    && left_of(p, c, a) != Sign::Negative
            }
            [a, b] => on_segment(p, a, b),
            [a] => p == a,
            _ => false,
        }
    }

    /// True if every vertex of `other` lies inside this triangle.
    pub fn contains_triangle(&self, other: &Triangle) -> bool {
        other.vertices().into_iter().all(|v| self.contains_point(v))
    }

    /// The non-zero columns, in column order.
    pub fn vertices(&self) -> Vec<Triplet> {
        self.columns.iter().copied().filter(|v| !v.is_zero()).collect()
    }

    /// The rows of the matrix.
    pub fn transpose(&self) -> [Triplet; 3] {
        let [a, b, c] = self.columns;
        [
            Triplet::new(a.x, b.x, c.x),
            Triplet::new(a.y, b.y, c.y),
            Triplet::new(a.z, b.z, c.z),
        ]
    }

    /// `col[to] += col[from]`.
    pub fn merge(&mut self, from: usize, to: usize) -> Result<(), OperationError> {
        let op = Operation::merge(from, to).ok_or_else(|| Self::bad_pair(from, to))?;
        self.merge_columns(from, to)?;
        self.record(op);
        Ok(())
    }

    /// Cascade: merge `primary` into `secondary`, then `secondary` into the
    /// third column.
    ///
    /// Fails without effect if the first merge fails. If only the first merge
    /// succeeds the cascade is still recorded and reports
    /// [`CascadeProgress::Partial`].
    pub fn merge3(&mut self, primary: usize, secondary: usize) -> Result<CascadeProgress, OperationError> {
        let op = Operation::cascade(primary, secondary).ok_or_else(|| Self::bad_pair(primary, secondary))?;
        let progress = self.cascade_columns(primary, secondary)?;
        self.record(op);
        Ok(progress)
    }

    /// Replace columns `a` and `b` by their sum in column 0, move the third
    /// column to column 1 and zero column 2. The centroid is unchanged.
    pub fn collapse(&mut self, a: usize, b: usize) -> Result<(), OperationError> {
        let op = Operation::collapse(a, b).ok_or_else(|| Self::bad_pair(a, b))?;
        self.collapse_columns(a, b)?;
        self.record(op);
        Ok(())
    }

    /// Cyclic permutation (c0, c1, c2) → (c2, c0, c1).
    ///
    /// Not an operation: depth and path are unchanged.
    pub fn rotate(&mut self) {
        self.columns.rotate_right(1);
    }

    /// Apply one operation.
    ///
    /// On failure the triangle is left unmodified. Compound operations
    /// (`j` to `o`) either apply every merge or none.
    pub fn operate(&mut self, op: Operation) -> Result<(), OperationError> {
        match op.action() {
            Action::Merge { from, to } => self.merge_columns(from, to)?,
            Action::Cascade { primary, secondary } => {
                self.cascade_columns(primary, secondary)?;
            }
            Action::Compound { merges, rotate } => {
                let saved = self.columns;
                for &(from, to) in merges {
                    if let Err(e) = self.merge_columns(from, to) {
                        self.columns = saved;
                        return Err(e);
                    }
                }
                if rotate {
                    self.rotate();
                }
            }
            Action::Collapse { a, b } => self.collapse_columns(a, b)?,
        }
        self.record(op);
        Ok(())
    }

    /// Parse and apply one operation code.
    pub fn operate_code(&mut self, code: char) -> Result<(), OperationError> {
        let op = Operation::from_code(code).ok_or(OperationError::UnknownCode(code))?;
        self.operate(op)
    }

    /// Apply each code of `path` in turn, stopping at the first failure.
    pub fn apply_path(&mut self, path: &str) -> Result<(), OperationError> {
        for (position, code) in path.chars().enumerate() {
            self.operate_code(code).map_err(|e| OperationError::Path {
                path: path.to_string(),
                position,
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    fn record(&mut self, op: Operation) {
        self.depth += 1;
        self.path.push(op.code());
    }

    fn bad_pair(a: usize, b: usize) -> OperationError {
        if a >= NCOLUMNS {
            OperationError::ColumnOutOfRange(a)
        } else if b >= NCOLUMNS {
            OperationError::ColumnOutOfRange(b)
        } else {
            OperationError::SameColumn(a)
        }
    }

    fn merge_columns(&mut self, from: usize, to: usize) -> Result<(), OperationError> {
        if from >= NCOLUMNS || to >= NCOLUMNS || from == to {
            return Err(Self::bad_pair(from, to));
        }
        for column in [from, to] {
            if self.columns[column].is_zero() {
                return Err(OperationError::ZeroColumn { column });
            }
        }
        let addend = self.columns[from];
        self.columns[to] += addend;
        Ok(())
    }

    fn cascade_columns(&mut self, primary: usize, secondary: usize) -> Result<CascadeProgress, OperationError> {
        self.merge_columns(primary, secondary)?;
        let third = NCOLUMNS - primary - secondary;
        Ok(match self.merge_columns(secondary, third) {
            Ok(()) => CascadeProgress::Complete,
            Err(_) => CascadeProgress::Partial,
        })
    }

    fn collapse_columns(&mut self, a: usize, b: usize) -> Result<(), OperationError> {
        if a >= NCOLUMNS || b >= NCOLUMNS || a == b {
            return Err(Self::bad_pair(a, b));
        }
        if self.columns[a].is_zero() && self.columns[b].is_zero() {
            return Err(OperationError::BothColumnsZero { a, b });
        }
        let third = NCOLUMNS - a - b;
        self.columns = [self.columns[a] + self.columns[b], self.columns[third], Triplet::ZERO];
        Ok(())
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.depth == other.depth
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.columns.hash(state);
        self.depth.hash(state);
    }
}

/// Shallower triangles first, then by centroid priority, then by columns.
impl Ord for Triangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .cmp(&other.depth)
            .then_with(|| self.centroid().cmp(&other.centroid()))
            .then_with(|| self.columns.cmp(&other.columns))
    }
}

impl PartialOrd for Triangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Triangle {
    /// The matrix, one row per line, with the centroid as a fourth column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.transpose();
        let centroid = self.centroid().components();
        for (row, c) in rows.iter().zip(centroid) {
            writeln!(f, "{:>8} {:>8} {:>8} | {:>8}", row.x, row.y, row.z, c)?;
        }
        write!(
            f,
            "det {} depth {} path \"{}\"",
            self.determinant(),
            self.depth,
            self.labelled_path()
        )
    }
}
