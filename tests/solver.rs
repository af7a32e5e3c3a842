//! Validates constraint grid solving, adjacency legality, and failure modes

use mapweave::algorithm::catalog::{Direction, TileCatalog, TileDef};
use mapweave::algorithm::grid::{ConstraintGrid, SolveOutcome};
use mapweave::math::sampling::RandomSource;
use mapweave::pipeline::runner::build_default_catalog;

fn solve(
    width: usize,
    height: usize,
    catalog: &TileCatalog,
    seed: &str,
    max_iterations: usize,
) -> (SolveOutcome, Vec<mapweave::algorithm::grid::TileInstance>) {
    let mut grid = ConstraintGrid::new(width, height, catalog, RandomSource::from_token(seed));
    let outcome = grid.run_to_completion(max_iterations);
    let instances = grid.tile_instances();
    (outcome, instances)
}

#[test]
fn test_five_by_five_grid_resolves_completely() {
    // Default floor/wall/door catalog always has a legal neighbor for every tile
    let catalog = build_default_catalog();
    let (outcome, instances) = solve(5, 5, &catalog, "seed1", 10_000);

    assert_eq!(outcome, SolveOutcome::Resolved);
    assert_eq!(instances.len(), 25);
}

#[test]
fn test_resolved_grid_respects_adjacency_rules() {
    let catalog = build_default_catalog();
    let mut grid = ConstraintGrid::new(8, 8, &catalog, RandomSource::from_token("adjacency"));
    assert_eq!(grid.run_to_completion(10_000), SolveOutcome::Resolved);
    assert!(grid.is_resolved());

    for y in 0..8 {
        for x in 0..8 {
            let Some(tile_id) = grid.resolved_tile(x, y) else {
                unreachable!("resolved grid has a tile everywhere");
            };
            let Some(tile_index) = catalog.index_of(tile_id) else {
                unreachable!("resolved tile comes from the catalog");
            };

            for direction in Direction::ALL {
                let (dx, dy) = direction.offset();
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= 8 || ny >= 8 {
                    continue;
                }
                let Some(neighbor_id) = grid.resolved_tile(nx as usize, ny as usize) else {
                    unreachable!("resolved grid has a tile everywhere");
                };
                let Some(neighbor_index) = catalog.index_of(neighbor_id) else {
                    unreachable!("resolved tile comes from the catalog");
                };

                // Either the direction is unrestricted or the neighbor is whitelisted
                if let Some(allowed) = catalog.allowed(tile_index, direction) {
                    assert!(
                        allowed.contains(neighbor_index),
                        "tile {tile_id} at ({x}, {y}) does not allow {neighbor_id} to its {direction:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_identical_seeds_reproduce_the_layout() {
    let catalog = build_default_catalog();
    let (outcome_a, instances_a) = solve(10, 10, &catalog, "determinism", 10_000);
    let (outcome_b, instances_b) = solve(10, 10, &catalog, "determinism", 10_000);

    assert_eq!(outcome_a, SolveOutcome::Resolved);
    assert_eq!(outcome_a, outcome_b);
    assert_eq!(instances_a, instances_b);
}

#[test]
fn test_impossible_adjacency_contradicts() {
    // A lone tile that allows nothing beside itself: the first collapse with
    // an unresolved horizontal neighbor must empty that neighbor's candidates
    let catalog = TileCatalog::new(vec![
        TileDef::new("void", "void", 1.0)
            .with_allowed(Direction::East, &[])
            .with_allowed(Direction::West, &[]),
    ]);

    let (outcome, _) = solve(2, 1, &catalog, "clash", 10_000);
    assert!(matches!(outcome, SolveOutcome::Contradiction { .. }));
}

#[test]
fn test_iteration_cap_stops_the_solve() {
    let catalog = build_default_catalog();
    let (outcome, _) = solve(10, 10, &catalog, "capped", 3);

    assert_eq!(
        outcome,
        SolveOutcome::IterationLimitExceeded { iterations: 3 }
    );
}

#[test]
fn test_instances_are_row_major() {
    let catalog = build_default_catalog();
    let mut grid = ConstraintGrid::new(3, 2, &catalog, RandomSource::from_token("order"));
    assert_eq!(grid.run_to_completion(10_000), SolveOutcome::Resolved);

    let positions: Vec<(u32, u32)> = grid
        .tile_instances()
        .iter()
        .map(|instance| (instance.x, instance.y))
        .collect();
    assert_eq!(
        positions,
        vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_collapse_is_idempotent_on_resolved_cells() {
    let catalog = build_default_catalog();
    let mut grid = ConstraintGrid::new(4, 4, &catalog, RandomSource::from_token("idem"));

    let first = grid.collapse(1, 1);
    assert!(first.is_some());
    let Some(cell) = grid.cell(1, 1) else {
        unreachable!("cell (1, 1) is in bounds");
    };
    assert!(cell.collapsed);
    assert_eq!(cell.candidates.count(), 1);

    // Collapsing again returns the same tile without drawing from the RNG
    assert_eq!(grid.collapse(1, 1), first);
}

#[test]
fn test_unrestricted_catalog_solves_without_propagation_pressure() {
    // No adjacency entries at all: every cell collapses independently
    let catalog = TileCatalog::new(vec![
        TileDef::new("grass", "terrain", 3.0),
        TileDef::new("dirt", "terrain", 1.0),
    ]);
    let (outcome, instances) = solve(6, 6, &catalog, "open", 10_000);

    assert_eq!(outcome, SolveOutcome::Resolved);
    assert_eq!(instances.len(), 36);
}
