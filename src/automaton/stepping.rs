//! Generational update: one application of a rule set to every cell.
//!
//! All reads come from the input grid, all writes go to a freshly allocated
//! buffer, so cells can be computed in any order or in parallel.

use rayon::prelude::*;

use super::grid::Grid;
use super::neighbors::Neighborhood;
use super::rules::RuleSet;

/// Next state of the cell at linear `index`.
#[inline]
fn next_state(
    grid: &Grid,
    rules: &RuleSet,
    neighborhood: &Neighborhood,
    coordinate: &mut [usize],
    index: usize,
) -> bool {
    grid.unravel_into(index, coordinate);
    let neighbors = neighborhood.count_at(grid, coordinate);
    rules.survives(grid.cells()[index], neighbors)
}

/// Step a grid forward by one generation with the radius-1 neighborhood.
pub fn evolve(grid: &Grid, rules: &RuleSet) -> Grid {
    evolve_with_radius(grid, rules, 1)
}

/// Step a grid forward by one generation, counting neighbors within `distance`.
pub fn evolve_with_radius(grid: &Grid, rules: &RuleSet, distance: usize) -> Grid {
    evolve_in(grid, rules, &Neighborhood::new(grid.shape(), distance))
}

/// Same as [`evolve_with_radius`], with cells distributed across `pool`.
pub fn evolve_parallel(
    grid: &Grid,
    rules: &RuleSet,
    distance: usize,
    pool: &rayon::ThreadPool,
) -> Grid {
    evolve_in_parallel(grid, rules, &Neighborhood::new(grid.shape(), distance), pool)
}

/// Step with a neighborhood table built for `grid`'s shape.
pub(crate) fn evolve_in(grid: &Grid, rules: &RuleSet, neighborhood: &Neighborhood) -> Grid {
    debug_assert_eq!(neighborhood.shape(), grid.shape());
    let mut coordinate = vec![0; grid.dimensions()];

    let next_cells: Vec<bool> = (0..grid.len())
        .map(|idx| next_state(grid, rules, neighborhood, &mut coordinate, idx))
        .collect();

    grid.with_cells(next_cells)
}

pub(crate) fn evolve_in_parallel(
    grid: &Grid,
    rules: &RuleSet,
    neighborhood: &Neighborhood,
    pool: &rayon::ThreadPool,
) -> Grid {
    debug_assert_eq!(neighborhood.shape(), grid.shape());
    let dimensions = grid.dimensions();

    let next_cells: Vec<bool> = pool.install(|| {
        (0..grid.len())
            .into_par_iter()
            .map_init(
                || vec![0usize; dimensions],
                |coordinate, idx| next_state(grid, rules, neighborhood, coordinate, idx),
            )
            .collect()
    });

    grid.with_cells(next_cells)
}
