//! Core automaton logic: grid storage, rules, neighbor counting and stepping.

pub mod grid;
pub mod neighbors;
pub mod rules;
pub mod stepping;

pub use grid::{FillMode, Grid};
pub use neighbors::{count_alive, Neighborhood};
pub use rules::{RuleSet, MAX_RULE_COUNT};
pub use stepping::{evolve, evolve_parallel, evolve_with_radius};
