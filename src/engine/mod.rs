// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first traversal engine for the exhaustive searches.
//!
//! This module implements a traversal of the triangle tree driven by an
//! explicit work stack instead of recursion, so the only bound on memory is
//! the depth bound the visitor enforces.
//!
//! # Architecture
//!
//! The engine holds a stack of [`Node`]s. Each iteration:
//! 1. Pop a node
//! 2. Ask the [`Visitor`] what to do with it
//! 3. If Expand: apply every move for the node's rank and push the children
//!    in reverse order, so the first move is explored first
//! 4. If Leaf: nothing more to do for this node
//! 5. If Prune(reason): count the reason
//!
//! The traversal ends when the stack is empty. The order in which nodes are
//! visited is the pre-order of the recursive formulation.
//!
//! # Example
//!
//! ```
//! use euclids_orchard::engine::{Node, SearchEngine, Visit, Visitor};
//! use euclids_orchard::geometry::Triangle;
//! use euclids_orchard::search::moves::MoveSet;
//! use euclids_orchard::search::statistics::{Counters, PruneReason, Statistics};
//!
//! struct TwoLevels;
//!
//! impl Visitor for TwoLevels {
//!     fn visit(&mut self, node: &Node, _: &mut Statistics) -> Visit {
//!         if node.level < 2 { Visit::Expand } else { Visit::Prune(PruneReason::Depth) }
//!     }
//! }
//!
//! let moves = MoveSet::sextants();
//! let mut engine = SearchEngine::new(&moves);
//! engine.run(Triangle::identity(), &mut TwoLevels);
//! assert_eq!(engine.statistics().get(Counters::NodesVisited), 1 + 6 + 36);
//! ```

pub mod visitor;

pub use visitor::{Node, Visit, Visitor};

use crate::geometry::Triangle;
use crate::search::moves::MoveSet;
use crate::search::statistics::{Counters, Statistics};

/// Initial capacity of the work stack.
const INITIAL_STACK_SIZE: usize = 1000;

/// Traversal engine over the children given by a [`MoveSet`].
pub struct SearchEngine<'m> {
    /// Moves used to expand nodes.
    moves: &'m MoveSet,

    /// Nodes waiting to be visited.
    stack: Vec<Node>,

    /// Counters for the current (or last) run.
    statistics: Statistics,
}

impl<'m> SearchEngine<'m> {
    pub fn new(moves: &'m MoveSet) -> Self {
        Self {
            moves,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            statistics: Statistics::new(),
        }
    }

    /// Traverse the tree below `root`, guided by `visitor`.
    ///
    /// Statistics are reset at the start of each run.
    pub fn run<V: Visitor + ?Sized>(&mut self, root: Triangle, visitor: &mut V) {
        self.stack.clear();
        self.statistics = Statistics::new();
        self.stack.push(Node::root(root));

        tracing::debug!(visitor = visitor.name(), "traversal started");

        while let Some(node) = self.stack.pop() {
            self.statistics.increment(Counters::NodesVisited);

            match visitor.visit(&node, &mut self.statistics) {
                Visit::Expand => self.expand(&node),
                Visit::Leaf => {}
                Visit::Prune(reason) => {
                    tracing::trace!(path = node.triangle.path(), level = node.level, %reason, "pruned");
                    self.statistics.prune(reason);
                }
            }
        }

        tracing::debug!(visitor = visitor.name(), statistics = %self.statistics, "traversal finished");
    }

    /// Push the children of `node`, last move first.
    fn expand(&mut self, node: &Node) {
        let rank = node.triangle.num_non_zero_columns();
        for m in self.moves.for_rank(rank).iter().rev() {
            match m.apply(&node.triangle) {
                Ok(triangle) => self.stack.push(Node {
                    triangle,
                    level: node.level + 1,
                }),
                Err(_) => self.statistics.increment(Counters::InvalidMoves),
            }
        }
    }

    /// Get statistics about the last run.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn into_statistics(self) -> Statistics {
        self.statistics
    }
}
