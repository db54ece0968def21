//! Simulation state: the current generation plus everything needed to advance it.

use tracing::{debug, info, warn};

use crate::automaton::{stepping, Grid, Neighborhood, RuleSet, MAX_RULE_COUNT};
use crate::error::Result;

/// A running automaton.
pub struct Simulation {
    grid: Grid,
    rules: RuleSet,
    radius: usize,
    /// Offset table for `radius`, shared by every generation of this shape.
    neighborhood: Neighborhood,
    generation: u64,
    /// Rayon thread pool, present when more than one worker was requested.
    thread_pool: Option<rayon::ThreadPool>,
}

impl Simulation {
    /// Create a single-threaded simulation with the radius-1 neighborhood.
    pub fn new(grid: Grid, rules: RuleSet) -> Self {
        let neighborhood = Neighborhood::new(grid.shape(), 1);
        Simulation {
            grid,
            rules,
            radius: 1,
            neighborhood,
            generation: 0,
            thread_pool: None,
        }
    }

    /// Count neighbors within `radius` instead of 1.
    pub fn with_radius(mut self, radius: usize) -> Self {
        let reachable = Neighborhood::candidate_count(self.grid.shape(), radius);
        if radius > 1 && reachable > MAX_RULE_COUNT {
            warn!(
                radius,
                reachable,
                max_rule_count = MAX_RULE_COUNT,
                "neighbor counts can exceed what a rule descriptor can name"
            );
        }
        self.radius = radius;
        self.neighborhood = Neighborhood::new(self.grid.shape(), radius);
        self
    }

    /// Spread each step across `num_threads` workers. 0 or 1 keeps stepping on
    /// the calling thread.
    pub fn with_threads(mut self, num_threads: usize) -> Result<Self> {
        self.thread_pool = if num_threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?;
            info!(num_threads, "worker pool ready");
            Some(pool)
        } else {
            None
        };
        Ok(self)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by one generation, replacing the current grid wholesale.
    pub fn step(&mut self) {
        let next = match &self.thread_pool {
            Some(pool) => {
                stepping::evolve_in_parallel(&self.grid, &self.rules, &self.neighborhood, pool)
            }
            None => stepping::evolve_in(&self.grid, &self.rules, &self.neighborhood),
        };

        self.grid = next;
        self.generation += 1;
        debug!(
            generation = self.generation,
            alive = self.grid.alive_count(),
            "advanced generation"
        );
    }

    /// Advance `cycles` generations, calling `observe` after each one.
    pub fn run<F: FnMut(&Simulation)>(&mut self, cycles: u64, mut observe: F) {
        for _ in 0..cycles {
            self.step();
            observe(self);
        }
    }

    /// Extract the current grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
