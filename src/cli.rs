// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line argument parsing for orchard

use clap::{Args, Parser, Subcommand};
use euclids_orchard::geometry::constants::{
    Coord, DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_RESULTS,
};
use euclids_orchard::geometry::Triplet;

/// Search the tree of coprime triangles
#[derive(Parser, Debug)]
#[command(name = "orchard")]
#[command(author, version, about = "Search the tree of coprime triangles", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the path to a coprime triple by guided descent
    Search {
        /// Target, e.g. 16,42,5
        target: Triplet,

        /// Maximum number of steps [default: the target's coordinate sum]
        #[arg(long)]
        max_depth: Option<u32>,
    },

    /// Find every path to a coprime triple by exhaustive search
    FindAll {
        /// Target, e.g. 5,3,2
        target: Triplet,

        /// Maximum number of moves
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: u32,

        /// Moves on full triangles: "x,y,1A" or one move per character
        #[arg(long)]
        ops: Option<String>,

        /// Moves on edges (triangles with one zero column)
        #[arg(long)]
        edge_ops: Option<String>,

        /// Also report the target when it is an edge midpoint
        #[arg(long)]
        midpoints: bool,
    },

    /// List the points inside a clip triangle as CSV
    Enumerate {
        /// Maximum number of moves
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: u32,

        /// Maximum coordinate sum of a point
        #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
        max_height: u64,

        /// Stop after this many distinct points
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        #[command(flatten)]
        clip: ClipArgs,

        /// Moves on full triangles
        #[arg(long, default_value = "xyzXYZ")]
        ops: String,
    },

    /// Apply operation codes to the identity and print the triangle
    Apply {
        /// Operation codes, e.g. YYYy2aaa
        path: String,
    },

    /// Check that guided and exhaustive search agree on every small triple
    Verify {
        /// Largest coordinate to check
        #[arg(long, default_value_t = 12)]
        limit: Coord,

        /// Level bound for the exhaustive search
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: u32,
    },
}

/// Where to enumerate. The identity triangle when none is given.
#[derive(Args, Debug, Clone, Default)]
pub struct ClipArgs {
    /// Clip triangle as three triples, e.g. "5,3,2;6,3,2;5,4,2"
    #[arg(long, conflicts_with_all = ["clip_at", "random_clip"])]
    pub clip: Option<String>,

    /// Unit clip triangle anchored at a triple
    #[arg(long, conflicts_with = "random_clip")]
    pub clip_at: Option<Triplet>,

    /// Unit clip triangle anchored at a random triple
    #[arg(long)]
    pub random_clip: bool,

    /// Largest anchor coordinate for --random-clip
    #[arg(long, default_value_t = 1000)]
    pub random_bound: Coord,

    /// Seed for --random-clip
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
