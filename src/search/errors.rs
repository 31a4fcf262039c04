// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the searches.

use crate::geometry::{OperationError, Triplet};
use std::fmt;
use thiserror::Error;

/// Why a target cannot be searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetProblem {
    /// Some component is zero or negative.
    NotPositive,
    /// The components share a factor.
    NotCoprime,
}

impl fmt::Display for TargetProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetProblem::NotPositive => write!(f, "every component must be positive"),
            TargetProblem::NotCoprime => write!(f, "the components must be coprime"),
        }
    }
}

/// An internal consistency check that failed during the guided search.
///
/// None of these can happen for a valid target; each one indicates a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantKind {
    /// The working triangle's centroid is not coprime.
    NonCoprimeCentroid,
    /// The working triangle no longer contains the target.
    TargetNotContained,
    /// No vertex of the working triangle precedes the target.
    NoPrecedingVertex,
    /// The centroid has overtaken the target in some component.
    CentroidBeyondTarget,
    /// The classifier could not place the target.
    Unclassifiable,
    /// The triangle shrank to a single vertex other than the target.
    DeadEnd,
    /// A transition move could not be applied.
    Transition,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvariantKind::NonCoprimeCentroid => "centroid is not coprime",
            InvariantKind::TargetNotContained => "target is outside the triangle",
            InvariantKind::NoPrecedingVertex => "no vertex precedes the target",
            InvariantKind::CentroidBeyondTarget => "centroid does not precede the target",
            InvariantKind::Unclassifiable => "target could not be classified",
            InvariantKind::DeadEnd => "triangle collapsed to a vertex other than the target",
            InvariantKind::Transition => "transition could not be applied",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (target {target}, path {path:?})")]
pub struct InvariantViolation {
    pub kind: InvariantKind,
    pub target: Triplet,
    pub path: String,
}

/// Errors that can occur during a search or enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid target {target}: {reason}")]
    InvalidTarget { target: Triplet, reason: TargetProblem },

    /// The step bound was reached first. Not fatal: `best_path` is the
    /// path of the working triangle when the search stopped.
    #[error("no path to {target} within {max_depth} steps (stopped at {best_path:?})")]
    DepthExceeded {
        target: Triplet,
        max_depth: u32,
        best_path: String,
    },

    #[error(transparent)]
    InvariantViolation(#[from] InvariantViolation),

    #[error("clip triangle {a} {b} {c} must wind to the left")]
    InvalidClip { a: Triplet, b: Triplet, c: Triplet },

    #[error("invalid move list: {0}")]
    InvalidMoves(#[from] OperationError),
}

/// Check that `target` is strictly positive and coprime.
pub fn validate_target(target: Triplet) -> Result<(), SearchError> {
    let reason = if target.components().iter().any(|&c| c <= 0) {
        TargetProblem::NotPositive
    } else if !target.is_coprime() {
        TargetProblem::NotCoprime
    } else {
        return Ok(());
    };
    Err(SearchError::InvalidTarget { target, reason })
}
