// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The alphabet of triangle operations.
//!
//! Every operation has a one-character code; a triangle's path is the string
//! of codes applied to it since the identity.
//!
//! | codes | kind | effect |
//! |---|---|---|
//! | `a b c A B C` | binary merge | halves the triangle |
//! | `x y z X Y Z` | cascade | one of the six sextants |
//! | `j k l` | corner | one of the three corner quarters |
//! | `m n o` | inner | one of the three inner twelfths, rotated |
//! | `1 2 3` | collapse | drops to a 1-D edge, centroid preserved |

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};
use thiserror::Error;

/// A single triangle operation.
///
/// Column indices are 0 (X), 1 (Y) and 2 (Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum Operation {
    /// `a`: column 1 += column 0
    MergeXY,
    /// `b`: column 2 += column 1
    MergeYZ,
    /// `c`: column 0 += column 2
    MergeZX,
    /// `A`: column 0 += column 1
    MergeYX,
    /// `B`: column 1 += column 2
    MergeZY,
    /// `C`: column 2 += column 0
    MergeXZ,
    /// `x`: cascade (0, 1)
    SextantXY,
    /// `y`: cascade (1, 2)
    SextantYZ,
    /// `z`: cascade (2, 0)
    SextantZX,
    /// `X`: cascade (0, 2)
    SextantXZ,
    /// `Y`: cascade (1, 0)
    SextantYX,
    /// `Z`: cascade (2, 1)
    SextantZY,
    /// `j`: corner quarter at X
    CornerX,
    /// `k`: corner quarter at Y
    CornerY,
    /// `l`: corner quarter at Z
    CornerZ,
    /// `m`: X-ward inner twelfth
    InnerX,
    /// `n`: Y-ward inner twelfth
    InnerY,
    /// `o`: Z-ward inner twelfth
    InnerZ,
    /// `1`: collapse columns 0 and 1
    CollapseXY,
    /// `2`: collapse columns 1 and 2
    CollapseYZ,
    /// `3`: collapse columns 2 and 0
    CollapseZX,
}

/// What an operation does to the columns, in terms of the primitive steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `col[to] += col[from]`
    Merge { from: usize, to: usize },
    /// Merge primary into secondary, then secondary into the third column.
    Cascade { primary: usize, secondary: usize },
    /// A fixed sequence of merges, all of which must succeed.
    Compound { merges: &'static [(usize, usize)], rotate: bool },
    /// Sum two columns into column 0 and zero column 2.
    Collapse { a: usize, b: usize },
}

impl Operation {
    /// Parse an operation code.
    pub fn from_code(code: char) -> Option<Operation> {
        use Operation::*;
        Some(match code {
            'a' => MergeXY,
            'b' => MergeYZ,
            'c' => MergeZX,
            'A' => MergeYX,
            'B' => MergeZY,
            'C' => MergeXZ,
            'x' => SextantXY,
            'y' => SextantYZ,
            'z' => SextantZX,
            'X' => SextantXZ,
            'Y' => SextantYX,
            'Z' => SextantZY,
            'j' => CornerX,
            'k' => CornerY,
            'l' => CornerZ,
            'm' => InnerX,
            'n' => InnerY,
            'o' => InnerZ,
            '1' => CollapseXY,
            '2' => CollapseYZ,
            '3' => CollapseZX,
            _ => return None,
        })
    }

    /// The operation's code, as recorded in triangle paths.
    pub fn code(self) -> char {
        use Operation::*;
        match self {
            MergeXY => 'a',
            MergeYZ => 'b',
            MergeZX => 'c',
            MergeYX => 'A',
            MergeZY => 'B',
            MergeXZ => 'C',
            SextantXY => 'x',
            SextantYZ => 'y',
            SextantZX => 'z',
            SextantXZ => 'X',
            SextantYX => 'Y',
            SextantZY => 'Z',
            CornerX => 'j',
            CornerY => 'k',
            CornerZ => 'l',
            InnerX => 'm',
            InnerY => 'n',
            InnerZ => 'o',
            CollapseXY => '1',
            CollapseYZ => '2',
            CollapseZX => '3',
        }
    }

    /// Human-readable label: collapses render as the pair of columns they join.
    pub fn label(self) -> &'static str {
        use Operation::*;
        match self {
            CollapseXY => "{XY}",
            CollapseYZ => "{YZ}",
            CollapseZX => "{ZX}",
            MergeXY => "a",
            MergeYZ => "b",
            MergeZX => "c",
            MergeYX => "A",
            MergeZY => "B",
            MergeXZ => "C",
            SextantXY => "x",
            SextantYZ => "y",
            SextantZX => "z",
            SextantXZ => "X",
            SextantYX => "Y",
            SextantZY => "Z",
            CornerX => "j",
            CornerY => "k",
            CornerZ => "l",
            InnerX => "m",
            InnerY => "n",
            InnerZ => "o",
        }
    }

    /// The binary merge that moves column `from` into column `to`.
    pub fn merge(from: usize, to: usize) -> Option<Operation> {
        use Operation::*;
        Some(match (from, to) {
            (0, 1) => MergeXY,
            (1, 2) => MergeYZ,
            (2, 0) => MergeZX,
            (1, 0) => MergeYX,
            (2, 1) => MergeZY,
            (0, 2) => MergeXZ,
            _ => return None,
        })
    }

    /// The cascade with the given primary and secondary columns.
    pub fn cascade(primary: usize, secondary: usize) -> Option<Operation> {
        use Operation::*;
        Some(match (primary, secondary) {
            (0, 1) => SextantXY,
            (1, 2) => SextantYZ,
            (2, 0) => SextantZX,
            (0, 2) => SextantXZ,
            (1, 0) => SextantYX,
            (2, 1) => SextantZY,
            _ => return None,
        })
    }

    /// The collapse joining columns `a` and `b` (in either order).
    pub fn collapse(a: usize, b: usize) -> Option<Operation> {
        use Operation::*;
        Some(match (a.min(b), a.max(b)) {
            (0, 1) => CollapseXY,
            (1, 2) => CollapseYZ,
            (0, 2) => CollapseZX,
            _ => return None,
        })
    }

    /// The column-level effect of this operation.
    pub fn action(self) -> Action {
        use Operation::*;
        match self {
            MergeXY => Action::Merge { from: 0, to: 1 },
            MergeYZ => Action::Merge { from: 1, to: 2 },
            MergeZX => Action::Merge { from: 2, to: 0 },
            MergeYX => Action::Merge { from: 1, to: 0 },
            MergeZY => Action::Merge { from: 2, to: 1 },
            MergeXZ => Action::Merge { from: 0, to: 2 },
            SextantXY => Action::Cascade { primary: 0, secondary: 1 },
            SextantYZ => Action::Cascade { primary: 1, secondary: 2 },
            SextantZX => Action::Cascade { primary: 2, secondary: 0 },
            SextantXZ => Action::Cascade { primary: 0, secondary: 2 },
            SextantYX => Action::Cascade { primary: 1, secondary: 0 },
            SextantZY => Action::Cascade { primary: 2, secondary: 1 },
            CornerX => Action::Compound { merges: &[(0, 1), (0, 2)], rotate: false },
            CornerY => Action::Compound { merges: &[(1, 0), (1, 2)], rotate: false },
            CornerZ => Action::Compound { merges: &[(2, 1), (2, 0)], rotate: false },
            InnerX => Action::Compound { merges: &[(0, 1), (2, 0), (1, 2)], rotate: true },
            InnerY => Action::Compound { merges: &[(1, 2), (0, 1), (2, 0)], rotate: true },
            InnerZ => Action::Compound { merges: &[(2, 0), (1, 2), (0, 1)], rotate: true },
            CollapseXY => Action::Collapse { a: 0, b: 1 },
            CollapseYZ => Action::Collapse { a: 1, b: 2 },
            CollapseZX => Action::Collapse { a: 2, b: 0 },
        }
    }

    /// Parse a string of codes into operations.
    pub fn parse_codes(codes: &str) -> Result<Vec<Operation>, OperationError> {
        codes
            .chars()
            .map(|c| Operation::from_code(c).ok_or(OperationError::UnknownCode(c)))
            .collect()
    }
}

/// Why an operation could not be applied.
///
/// A failed operation leaves the triangle unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("unknown operation code {0:?}")]
    UnknownCode(char),

    #[error("a move needs at least one operation code")]
    EmptyMove,

    #[error("column {0} cannot be merged into itself")]
    SameColumn(usize),

    #[error("column index {0} out of range")]
    ColumnOutOfRange(usize),

    #[error("column {column} has collapsed to zero")]
    ZeroColumn { column: usize },

    #[error("columns {a} and {b} have both collapsed to zero")]
    BothColumnsZero { a: usize, b: usize },

    #[error("operation {position} of path {path:?}: {source}")]
    Path {
        path: String,
        position: usize,
        #[source]
        source: Box<OperationError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_codes_round_trip() {
        assert_eq!(Operation::COUNT, 21);
        for op in Operation::iter() {
            assert_eq!(Operation::from_code(op.code()), Some(op));
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Operation::from_code('q'), None);
        assert_eq!(Operation::from_code('0'), None);
        assert_eq!(
            Operation::parse_codes("xq"),
            Err(OperationError::UnknownCode('q'))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Operation::CollapseXY.label(), "{XY}");
        assert_eq!(Operation::CollapseZX.label(), "{ZX}");
        assert_eq!(Operation::SextantZY.label(), "Z");
    }

    #[test]
    fn test_constructors_match_actions() {
        for op in Operation::iter() {
            match op.action() {
                Action::Merge { from, to } => assert_eq!(Operation::merge(from, to), Some(op)),
                Action::Cascade { primary, secondary } => {
                    assert_eq!(Operation::cascade(primary, secondary), Some(op))
                }
                Action::Collapse { a, b } => {
                    assert_eq!(Operation::collapse(a, b), Some(op));
                    assert_eq!(Operation::collapse(b, a), Some(op));
                }
                Action::Compound { .. } => {}
            }
        }
        assert_eq!(Operation::merge(1, 1), None);
        assert_eq!(Operation::cascade(0, 3), None);
    }
}
