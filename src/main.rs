// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! orchard - command-line front end for the coprime triangle searches

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

use cli::{ClipArgs, Cli, Command};
use euclids_orchard::geometry::constants::Coord;
use euclids_orchard::geometry::{Triangle, Triplet};
use euclids_orchard::search::{
    find_all, random_clip, tiny_clip, Enumerator, EnumerationStatus, GuidedSearch, MoveSet,
    PruneReason, SearchConfig, SearchError,
};
use strum::IntoEnumIterator;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search { target, max_depth } => {
            let guided = match max_depth {
                Some(max_depth) => {
                    GuidedSearch::new(&SearchConfig::default().with_max_depth(max_depth))
                }
                None => GuidedSearch::default(),
            };
            let outcome = guided
                .search(target)
                .with_context(|| format!("guided search for {}", target))?;
            println!("Path to {}: {}", target, outcome.path());
            tracing::info!(depth = outcome.depth(), steps = outcome.steps(), "search finished");
        }
        Command::FindAll {
            target,
            max_depth,
            ops,
            edge_ops,
            midpoints,
        } => {
            let moves = move_set(ops.as_deref(), edge_ops.as_deref())?;
            let config = SearchConfig::default()
                .with_max_depth(max_depth)
                .with_moves(moves)
                .with_midpoints(midpoints);
            let found = find_all(target, &config)?;
            for path in found.paths() {
                println!("{}", path);
            }
            tracing::info!(paths = found.len(), statistics = %found.statistics(), "find-all finished");
        }
        Command::Enumerate {
            max_depth,
            max_height,
            max_results,
            clip,
            ops,
        } => {
            let moves = MoveSet::from_lists(&ops, "").map_err(SearchError::from)?;
            let config = SearchConfig::enumeration()
                .with_max_depth(max_depth)
                .with_max_height(max_height)
                .with_max_results(max_results)
                .with_moves(moves);
            let clip = clip_triangle(&clip)?;
            let found = Enumerator::new(config).run(&clip)?;

            for point in found.points() {
                println!("{}", point.csv_line());
            }

            tracing::info!(points = found.len(), statistics = %found.statistics(), "enumeration finished");
            for reason in PruneReason::iter() {
                tracing::info!(%reason, count = found.statistics().prunes(reason), "pruned");
            }
            for (level, count) in found.depth_counts().iter().enumerate() {
                tracing::info!(level, count, "triangles examined");
            }
            if found.status() == EnumerationStatus::ResultLimitReached {
                tracing::warn!(max_results, "result limit reached; enumeration is incomplete");
            }
        }
        Command::Apply { path } => {
            let triangle =
                Triangle::from_path(&path).with_context(|| format!("applying {:?}", path))?;
            println!("{}", triangle);
        }
        Command::Verify { limit, max_depth } => {
            let checked = verify(limit, max_depth)?;
            println!("{} triples agree", checked);
        }
    }

    Ok(())
}

fn move_set(full: Option<&str>, edge: Option<&str>) -> Result<MoveSet> {
    let canonical = MoveSet::canonical();
    let full = match full {
        Some(list) => MoveSet::from_lists(list, "")?.full().to_vec(),
        None => canonical.full().to_vec(),
    };
    let edge = match edge {
        Some(list) => MoveSet::from_lists("", list)?.edge().to_vec(),
        None => canonical.edge().to_vec(),
    };
    Ok(MoveSet::new(full, edge))
}

fn clip_triangle(args: &ClipArgs) -> Result<Triangle> {
    if let Some(text) = &args.clip {
        let vertices = text
            .split(';')
            .map(|part| part.parse::<Triplet>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("parsing clip {:?}", text))?;
        let [a, b, c]: [Triplet; 3] = vertices
            .try_into()
            .map_err(|v: Vec<Triplet>| anyhow::anyhow!("clip needs 3 vertices, found {}", v.len()))?;
        return Ok(Triangle::from_columns([a, b, c]));
    }
    if let Some(anchor) = args.clip_at {
        return Ok(tiny_clip(anchor));
    }
    if args.random_clip {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let clip = random_clip(&mut rng, args.random_bound);
        tracing::info!(anchor = %clip.columns()[0], "random clip");
        return Ok(clip);
    }
    Ok(Triangle::identity())
}

/// Check guided search against `find_all` for every strictly positive
/// coprime triple with coordinates up to `limit`. Returns the number checked.
fn verify(limit: Coord, max_depth: u32) -> Result<usize> {
    let config = SearchConfig::default().with_max_depth(max_depth);
    let guided = GuidedSearch::default();
    let mut checked = 0;

    for x in 1..=limit {
        for y in 1..=limit {
            for z in 1..=limit {
                let target = Triplet::new(x, y, z);
                if !target.is_coprime() {
                    continue;
                }
                let outcome = guided.search(target)?;
                let found = find_all(target, &config)?;
                if found.unique() != Some(outcome.path()) {
                    anyhow::bail!(
                        "{}: guided search gives {:?}, exhaustive search gives {:?}",
                        target,
                        outcome.path(),
                        found.paths()
                    );
                }
                checked += 1;
            }
        }
        tracing::debug!(x, checked, "verified");
    }

    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_small_range() {
        // 64 triples in the cube, less the 9 with a common factor of 2 or 3.
        let checked = verify(4, 12).unwrap();
        assert_eq!(checked, 55);
    }

    #[test]
    fn test_clip_from_text() {
        let args = ClipArgs {
            clip: Some("5,3,2;6,3,2;5,4,2".to_string()),
            ..ClipArgs::default()
        };
        assert_eq!(clip_triangle(&args).unwrap(), tiny_clip(Triplet::new(5, 3, 2)));

        let args = ClipArgs {
            clip: Some("5,3,2;6,3,2".to_string()),
            ..ClipArgs::default()
        };
        assert!(clip_triangle(&args).is_err());
    }

    #[test]
    fn test_default_clip_is_identity() {
        assert_eq!(clip_triangle(&ClipArgs::default()).unwrap(), Triangle::identity());
    }

    #[test]
    fn test_move_set_overrides() {
        let moves = move_set(Some("xyz"), None).unwrap();
        assert_eq!(moves.full().len(), 3);
        assert_eq!(moves.edge(), MoveSet::canonical().edge());
        assert!(move_set(None, Some("q")).is_err());
    }
}
