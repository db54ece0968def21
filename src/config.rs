//! Run configuration, loaded from TOML and overridable from the command line.

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::info;

use crate::automaton::{FillMode, Grid, RuleSet};
use crate::error::{Error, Result};
use crate::state::Simulation;

/// Rule descriptor used when none is configured.
pub const DEFAULT_VARIANT: &str = "23/3";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extent of each axis. Prompted for when absent.
    pub shape: Option<Vec<usize>>,
    /// Number of generations to run. Prompted for when absent.
    pub cycles: Option<u64>,
    /// `<survive>/<born>` rule descriptor, `23/3` when unset.
    pub variant: Option<String>,
    pub fill: FillMode,
    /// Chebyshev radius of the neighborhood.
    pub radius: usize,
    /// Worker threads per step; 1 steps on the calling thread.
    pub threads: usize,
    /// Seed for the random fill. Unseeded runs differ every time.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shape: None,
            cycles: None,
            variant: None,
            fill: FillMode::Random,
            radius: 1,
            threads: 1,
            seed: None,
        }
    }
}

/// Parse a whitespace-separated shape such as `"10 10"`.
pub fn parse_shape(text: &str) -> Result<Vec<usize>> {
    let shape = text
        .split_whitespace()
        .map(|item| {
            item.parse::<usize>()
                .map_err(|_| Error::invalid_shape(format!("{item:?} is not a non-negative integer")))
        })
        .collect::<Result<Vec<_>>>()?;

    if shape.is_empty() {
        return Err(Error::invalid_shape("no dimensions given"));
    }
    Ok(shape)
}

impl Config {
    /// The configured rule descriptor, or the default.
    pub fn variant(&self) -> &str {
        self.variant.as_deref().unwrap_or(DEFAULT_VARIANT)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration and set up the initial generation.
    pub fn build(&self) -> Result<Simulation> {
        let shape = self
            .shape
            .as_deref()
            .ok_or_else(|| Error::invalid_shape("no shape configured"))?;
        let rules = RuleSet::parse(self.variant())?;

        let grid = match self.seed {
            Some(seed) => {
                Grid::create_with_rng(shape, self.fill, &mut ChaCha8Rng::seed_from_u64(seed))?
            }
            None => Grid::create(shape, self.fill)?,
        };
        info!(
            ?shape,
            %rules,
            fill = ?self.fill,
            alive = grid.alive_count(),
            "simulation initialized"
        );

        Simulation::new(grid, rules)
            .with_radius(self.radius)
            .with_threads(self.threads)
    }
}
