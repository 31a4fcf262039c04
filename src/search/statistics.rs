// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the traversal engine and its visitors: how many nodes
//! were visited, what was found, and why branches were cut.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    NodesVisited,
    PathsFound,
    PointsRecorded,
    /// Moves that could not be applied to a node.
    InvalidMoves,
}

/// Why a branch of the traversal was not expanded.
#[derive(EnumCountMacro, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PruneReason {
    Depth,
    Height,
    NoIntersection,
    NotPreceding,
    ResultLimit,
}

impl fmt::Display for PruneReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PruneReason::Depth => "depth",
            PruneReason::Height => "height",
            PruneReason::NoIntersection => "no intersection",
            PruneReason::NotPreceding => "not preceding",
            PruneReason::ResultLimit => "result limit",
        };
        write!(f, "{}", name)
    }
}

const COUNT: usize = Counters::COUNT + PruneReason::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one branch cut for `reason`.
    pub fn prune(&mut self, reason: PruneReason) {
        self.stats[Counters::COUNT + reason as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Branches cut for `reason`.
    pub fn prunes(&self, reason: PruneReason) -> u64 {
        self.stats[Counters::COUNT + reason as usize]
    }

    /// Add every count of `other` to this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    pub fn total_prunes(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    /// One line: the counters, then the non-zero prune counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "visited {} nodes, {} paths, {} points, {} invalid moves",
            self.get(Counters::NodesVisited),
            self.get(Counters::PathsFound),
            self.get(Counters::PointsRecorded),
            self.get(Counters::InvalidMoves)
        )?;
        for reason in PruneReason::iter() {
            let n = self.prunes(reason);
            if n > 0 {
                write!(f, "; pruned {} ({})", n, reason)?;
            }
        }
        Ok(())
    }
}
