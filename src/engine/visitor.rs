// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Visitor trait for the traversal engine.
//!
//! The engine pops nodes off its work stack and asks a visitor what to do
//! with each one. The visitor inspects the node, records anything it is
//! looking for in its own state, and answers with a [`Visit`].
//!
//! # Example
//!
//! ```
//! use euclids_orchard::engine::{Node, Visit, Visitor};
//! use euclids_orchard::search::statistics::{PruneReason, Statistics};
//!
//! /// Collect every centroid down to a fixed level.
//! struct Centroids {
//!     max_level: u32,
//!     found: Vec<String>,
//! }
//!
//! impl Visitor for Centroids {
//!     fn visit(&mut self, node: &Node, _statistics: &mut Statistics) -> Visit {
//!         self.found.push(node.triangle.centroid().to_string());
//!         if node.level >= self.max_level {
//!             Visit::Prune(PruneReason::Depth)
//!         } else {
//!             Visit::Expand
//!         }
//!     }
//! }
//! ```

use crate::geometry::Triangle;
use crate::search::statistics::{PruneReason, Statistics};

/// A triangle on the work stack, with the number of moves that led to it.
///
/// `level` counts moves, not operations: a two-operation move such as `1A`
/// raises the triangle's depth by two and the level by one.
#[derive(Debug, Clone)]
pub struct Node {
    pub triangle: Triangle,
    pub level: u32,
}

impl Node {
    pub fn root(triangle: Triangle) -> Self {
        Self { triangle, level: 0 }
    }
}

/// What the engine should do with a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Push the node's children.
    Expand,

    /// The node was what the visitor was looking for; do not expand it.
    Leaf,

    /// Do not expand the node, and count the reason.
    Prune(PruneReason),
}

/// Decides, node by node, how the traversal proceeds.
pub trait Visitor {
    /// Inspect `node`. Called once per node, in depth-first order.
    ///
    /// Counters the visitor owns (paths found, points recorded) are
    /// incremented on `statistics`; the engine counts nodes and prunes.
    fn visit(&mut self, node: &Node, statistics: &mut Statistics) -> Visit;

    /// Optional: a name for this visitor (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
