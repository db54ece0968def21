//! Alive-neighbor counting over a Chebyshev neighborhood of any dimension.
//!
//! The neighborhood of radius `d` in `n` dimensions is every offset in
//! `{-d..=d}^n` except the zero offset. Offsets that land outside the grid are
//! skipped, never wrapped.

use crate::automaton::grid::Grid;
use crate::error::{Error, Result};

/// Precomputed offset table for one grid shape and radius.
#[derive(Clone, Debug)]
pub struct Neighborhood {
    shape: Vec<usize>,
    offsets: Vec<Vec<isize>>,
}

/// Per-axis reach of `distance` on a grid of `shape`. An axis of extent `e`
/// never has in-bounds cells further than `e - 1` away.
fn reaches(shape: &[usize], distance: usize) -> Vec<isize> {
    shape
        .iter()
        .map(|&extent| {
            let reach = distance.min(extent.saturating_sub(1));
            isize::try_from(reach).unwrap_or(isize::MAX)
        })
        .collect()
}

impl Neighborhood {
    /// Enumerate every non-zero offset with an odometer over `{-distance..=distance}`,
    /// each axis clipped to what can land inside `shape`.
    pub fn new(shape: &[usize], distance: usize) -> Self {
        let reach = reaches(shape, distance);
        let dimensions = shape.len();
        let mut offsets = Vec::new();

        if dimensions > 0 {
            let mut odometer: Vec<isize> = reach.iter().map(|&r| -r).collect();
            'enumerate: loop {
                if odometer.iter().any(|&o| o != 0) {
                    offsets.push(odometer.clone());
                }

                // Advance the last axis first, carrying leftwards
                let mut axis = dimensions;
                loop {
                    if axis == 0 {
                        break 'enumerate;
                    }
                    axis -= 1;
                    if odometer[axis] < reach[axis] {
                        odometer[axis] += 1;
                        break;
                    }
                    odometer[axis] = -reach[axis];
                }
            }
        }

        Neighborhood {
            shape: shape.to_vec(),
            offsets,
        }
    }

    /// Size of the offset table [`Neighborhood::new`] would build, saturating
    /// at `usize::MAX`.
    pub fn candidate_count(shape: &[usize], distance: usize) -> usize {
        reaches(shape, distance)
            .iter()
            .fold(1usize, |total, &r| {
                let span = (r as usize).saturating_mul(2).saturating_add(1);
                total.saturating_mul(span)
            })
            .saturating_sub(1)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dimensions(&self) -> usize {
        self.shape.len()
    }

    /// Every candidate offset that can reach inside the grid.
    pub fn offsets(&self) -> &[Vec<isize>] {
        &self.offsets
    }

    /// Count alive neighbors of `coordinate`, which must already be in bounds.
    pub(crate) fn count_at(&self, grid: &Grid, coordinate: &[usize]) -> usize {
        let shape = grid.shape();
        let mut neighbor = vec![0usize; coordinate.len()];
        let mut count = 0;

        'offsets: for offset in &self.offsets {
            for (axis, (&c, &o)) in coordinate.iter().zip(offset).enumerate() {
                match c.checked_add_signed(o) {
                    Some(n) if n < shape[axis] => neighbor[axis] = n,
                    _ => continue 'offsets,
                }
            }

            if grid.cells()[grid.flat_index(&neighbor)] {
                count += 1;
            }
        }

        count
    }

    /// Count alive neighbors of `coordinate`, failing if the coordinate itself
    /// is outside the grid or the grid was not the shape this table was built for.
    pub fn count_alive(&self, grid: &Grid, coordinate: &[usize]) -> Result<usize> {
        if grid.shape() != self.shape.as_slice() || !grid.in_bounds(coordinate) {
            return Err(Error::out_of_bounds(coordinate, grid.shape()));
        }
        Ok(self.count_at(grid, coordinate))
    }
}

/// Count alive neighbors of `coordinate` within Chebyshev `distance`.
pub fn count_alive(grid: &Grid, coordinate: &[usize], distance: usize) -> Result<usize> {
    Neighborhood::new(grid.shape(), distance).count_alive(grid, coordinate)
}
