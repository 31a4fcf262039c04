// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Moves: the steps taken by the exhaustive engines.
//!
//! A move is a non-empty sequence of operations applied as one traversal
//! step; it succeeds only if every operation does. Single-operation moves
//! reproduce a plain operation alphabet such as `xyzXYZ`. Multi-operation
//! moves such as `1A` (collapse, then merge) let an exhaustive traversal
//! follow the same steps as the guided search, which makes every coprime
//! triple reachable along exactly one sequence of moves.

use crate::geometry::{Operation, OperationError, Triangle};
use std::fmt;
use std::str::FromStr;

/// One traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    ops: Vec<Operation>,
}

impl Move {
    pub fn new(ops: Vec<Operation>) -> Result<Self, OperationError> {
        if ops.is_empty() {
            return Err(OperationError::EmptyMove);
        }
        Ok(Self { ops })
    }

    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// The triangle reached by this move, or the first failure.
    pub fn apply(&self, triangle: &Triangle) -> Result<Triangle, OperationError> {
        let mut next = triangle.clone();
        for &op in &self.ops {
            next.operate(op)?;
        }
        Ok(next)
    }
}

impl FromStr for Move {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::new(Operation::parse_codes(s.trim())?)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op.code())?;
        }
        Ok(())
    }
}

/// The moves available at each node, by rank.
///
/// Full-rank triangles use `full`, triangles with one zero column use
/// `edge`. Triangles of lower rank have no moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    full: Vec<Move>,
    edge: Vec<Move>,
}

impl MoveSet {
    pub fn new(full: Vec<Move>, edge: Vec<Move>) -> Self {
        Self { full, edge }
    }

    /// The steps of the guided search: six cascades and six
    /// collapse-then-merge moves on full triangles, one merge each way on
    /// edges.
    pub fn canonical() -> Self {
        use Operation::*;
        let mut full = Self::sextants().full;
        for collapse in [CollapseXY, CollapseYZ, CollapseZX] {
            full.push(Move { ops: vec![collapse, MergeYX] });
            full.push(Move { ops: vec![collapse, MergeXY] });
        }
        let edge = vec![Move { ops: vec![MergeXY] }, Move { ops: vec![MergeYX] }];
        Self::new(full, edge)
    }

    /// The six cascades, and nothing on edges.
    pub fn sextants() -> Self {
        use Operation::*;
        let full = [SextantXY, SextantYZ, SextantZX, SextantXZ, SextantYX, SextantZY]
            .into_iter()
            .map(|op| Move { ops: vec![op] })
            .collect();
        Self::new(full, Vec::new())
    }

    /// Parse move lists for full and edge triangles.
    ///
    /// A list containing commas is split on them (`"x,y,1A"`); otherwise
    /// every character is a move of its own (`"xyzXYZ"`).
    pub fn from_lists(full: &str, edge: &str) -> Result<Self, OperationError> {
        Ok(Self::new(parse_list(full)?, parse_list(edge)?))
    }

    pub fn full(&self) -> &[Move] {
        &self.full
    }

    pub fn edge(&self) -> &[Move] {
        &self.edge
    }

    /// The moves for a triangle with `rank` non-zero columns.
    pub fn for_rank(&self, rank: usize) -> &[Move] {
        match rank {
            3 => &self.full,
            2 => &self.edge,
            _ => &[],
        }
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::canonical()
    }
}

fn parse_list(list: &str) -> Result<Vec<Move>, OperationError> {
    if list.contains(',') {
        list.split(',')
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::parse)
            .collect()
    } else {
        list.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Operation::from_code(c).ok_or(OperationError::UnknownCode(c)).and_then(|op| Move::new(vec![op])))
            .collect()
    }
}
