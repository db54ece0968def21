//! nd-life - N-dimensional Life-like cellular automata
//!
//! A cell's next state depends on how many of its neighbors, within a
//! Chebyshev radius, are alive, compared against the survive and born counts
//! of a `<survive>/<born>` rule such as `23/3`. Grids may have any number of
//! dimensions; neighbors outside the grid are ignored rather than wrapped.

pub mod automaton;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

pub use automaton::{count_alive, evolve, FillMode, Grid, Neighborhood, RuleSet};
pub use config::Config;
pub use error::{Error, Result};
pub use state::Simulation;

#[cfg(test)]
mod tests;
