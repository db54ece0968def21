//! Grid initialization and cell access helpers.
//!
//! A grid is a dense N-dimensional array of booleans stored in a flat buffer.
//! Cells are laid out row-major: the last axis changes fastest.

use rand::Rng;
use serde::Deserialize;

use crate::error::{Error, Result};

/// How a freshly created grid is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Every cell starts dead.
    AllDead,
    /// Every cell is alive with probability 0.5, independently.
    #[default]
    Random,
}

/// A dense N-dimensional grid of alive/dead cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    shape: Vec<usize>,
    strides: Vec<usize>,
    cells: Vec<bool>,
}

/// Compute row-major strides for `shape`, rejecting empty or zero-sized shapes.
/// Returns the strides and the total cell count.
fn strides_for(shape: &[usize]) -> Result<(Vec<usize>, usize)> {
    if shape.is_empty() {
        return Err(Error::invalid_shape("shape must have at least one dimension"));
    }
    if let Some(axis) = shape.iter().position(|&extent| extent == 0) {
        return Err(Error::invalid_shape(format!(
            "dimension {axis} of {shape:?} is zero"
        )));
    }

    let mut strides = vec![0; shape.len()];
    let mut len = 1usize;
    for axis in (0..shape.len()).rev() {
        strides[axis] = len;
        len = len
            .checked_mul(shape[axis])
            .ok_or_else(|| Error::invalid_shape(format!("{shape:?} has too many cells")))?;
    }

    Ok((strides, len))
}

impl Grid {
    /// Create a grid with the given shape using the thread-local random source.
    pub fn create(shape: &[usize], fill: FillMode) -> Result<Self> {
        Self::create_with_rng(shape, fill, &mut rand::thread_rng())
    }

    /// Create a grid with the given shape, drawing random cells from `rng`.
    pub fn create_with_rng<R: Rng + ?Sized>(
        shape: &[usize],
        fill: FillMode,
        rng: &mut R,
    ) -> Result<Self> {
        let (strides, len) = strides_for(shape)?;
        let cells = match fill {
            FillMode::AllDead => vec![false; len],
            FillMode::Random => (0..len).map(|_| rng.gen_bool(0.5)).collect(),
        };

        Ok(Grid {
            shape: shape.to_vec(),
            strides,
            cells,
        })
    }

    /// Build a grid from an explicit row-major cell buffer.
    pub fn from_cells(shape: &[usize], cells: Vec<bool>) -> Result<Self> {
        let (strides, len) = strides_for(shape)?;
        if cells.len() != len {
            return Err(Error::invalid_shape(format!(
                "{shape:?} holds {len} cells but {} were given",
                cells.len()
            )));
        }

        Ok(Grid {
            shape: shape.to_vec(),
            strides,
            cells,
        })
    }

    /// Build a grid of the same shape as `self` around a new cell buffer.
    /// The buffer length must already match.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Grid {
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            cells,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dimensions(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a valid shape has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The flat row-major cell buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Check if a coordinate is within grid bounds.
    #[inline]
    pub fn in_bounds(&self, coordinate: &[usize]) -> bool {
        coordinate.len() == self.shape.len()
            && coordinate
                .iter()
                .zip(&self.shape)
                .all(|(&c, &extent)| c < extent)
    }

    /// Calculate the linear index for a coordinate.
    pub fn index_of(&self, coordinate: &[usize]) -> Result<usize> {
        if !self.in_bounds(coordinate) {
            return Err(Error::out_of_bounds(coordinate, &self.shape));
        }
        Ok(self.flat_index(coordinate))
    }

    /// Linear index of a coordinate already known to be in bounds.
    #[inline]
    pub(crate) fn flat_index(&self, coordinate: &[usize]) -> usize {
        coordinate
            .iter()
            .zip(&self.strides)
            .map(|(&c, &stride)| c * stride)
            .sum()
    }

    /// Write the coordinate of the cell at `index` into `out`.
    pub(crate) fn unravel_into(&self, mut index: usize, out: &mut [usize]) {
        for (slot, &stride) in out.iter_mut().zip(&self.strides) {
            *slot = index / stride;
            index %= stride;
        }
    }

    /// The coordinate of the cell at linear `index`, or `None` past the end.
    pub fn coordinate_of(&self, index: usize) -> Option<Vec<usize>> {
        if index >= self.cells.len() {
            return None;
        }
        let mut coordinate = vec![0; self.shape.len()];
        self.unravel_into(index, &mut coordinate);
        Some(coordinate)
    }

    /// Read a cell. Fails if the coordinate lies outside the grid.
    pub fn get(&self, coordinate: &[usize]) -> Result<bool> {
        let idx = self.index_of(coordinate)?;
        Ok(self.cells[idx])
    }

    /// Set a cell alive or dead. Fails if the coordinate lies outside the grid.
    pub fn set(&mut self, coordinate: &[usize], alive: bool) -> Result<()> {
        let idx = self.index_of(coordinate)?;
        self.cells[idx] = alive;
        Ok(())
    }
}
