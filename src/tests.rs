#[cfg(test)]
mod tests {
    use crate::automaton::{count_alive, evolve, FillMode, Grid, RuleSet};
    use crate::config::Config;
    use crate::error::Error;
    use crate::state::Simulation;

    #[test]
    fn test_conway_rule_parsing() {
        let rules = RuleSet::parse("23/3").unwrap();
        assert_eq!(rules.survive_counts(), vec![2, 3]);
        assert_eq!(rules.born_counts(), vec![3]);

        assert!(rules.survives(true, 3));
        assert!(rules.survives(false, 3));
        assert!(!rules.survives(false, 2));

        assert!(matches!(RuleSet::parse("bad"), Err(Error::InvalidVariant(_))));
        assert!(matches!(RuleSet::parse("2a/3"), Err(Error::InvalidVariant(_))));
    }

    #[test]
    fn test_block_still_life_in_larger_grid() {
        let mut grid = Grid::create(&[6, 6], FillMode::AllDead).unwrap();
        for coordinate in [[2, 2], [2, 3], [3, 2], [3, 3]] {
            grid.set(&coordinate, true).unwrap();
        }

        let mut sim = Simulation::new(grid.clone(), RuleSet::default());
        sim.run(5, |s| assert_eq!(s.grid(), &grid));
        assert_eq!(sim.generation(), 5);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut grid = Grid::create(&[8, 8], FillMode::AllDead).unwrap();
        // .#.
        // ..#
        // ###
        for coordinate in [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]] {
            grid.set(&coordinate, true).unwrap();
        }

        let mut sim = Simulation::new(grid, RuleSet::default());
        sim.run(4, |_| {});

        let mut expected = Grid::create(&[8, 8], FillMode::AllDead).unwrap();
        for coordinate in [[1, 2], [2, 3], [3, 1], [3, 2], [3, 3]] {
            expected.set(&coordinate, true).unwrap();
        }
        assert_eq!(sim.grid(), &expected);
    }

    #[test]
    fn test_glider_dies_against_corner() {
        // Without wraparound the glider eventually collides with the edge
        let mut grid = Grid::create(&[5, 5], FillMode::AllDead).unwrap();
        for coordinate in [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]] {
            grid.set(&coordinate, true).unwrap();
        }

        let mut sim = Simulation::new(grid, RuleSet::default());
        sim.run(20, |_| {});
        // Collapses into a 2x2 block in the far corner
        assert_eq!(sim.grid().alive_count(), 4);
        assert!(sim.grid().get(&[4, 4]).unwrap());
    }

    #[test]
    fn test_one_dimensional_neighbors() {
        let grid = Grid::from_cells(&[3], vec![true; 3]).unwrap();
        assert_eq!(count_alive(&grid, &[0], 1).unwrap(), 1);
        assert_eq!(count_alive(&grid, &[1], 1).unwrap(), 2);
        assert_eq!(count_alive(&grid, &[2], 1).unwrap(), 1);
    }

    #[test]
    fn test_four_dimensional_step() {
        // A 2x2x2x2 hypercube: every cell sees the other 15
        let grid = Grid::from_cells(&[2, 2, 2, 2], vec![true; 16]).unwrap();
        assert_eq!(count_alive(&grid, &[0, 1, 0, 1], 1).unwrap(), 15);

        let survivors = evolve(&grid, &RuleSet::parse("/").unwrap());
        assert_eq!(survivors.alive_count(), 0);
        assert_eq!(survivors.shape(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_config_end_to_end() {
        let config = Config::from_toml_str(
            r#"
            shape = [5, 5]
            cycles = 2
            fill = "all_dead"
            threads = 2
            "#,
        )
        .unwrap();

        let mut sim = config.build().unwrap();
        sim.run(config.cycles.unwrap(), |_| {});

        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid().alive_count(), 0);
        assert_eq!(sim.grid().to_string().lines().count(), 5);
    }
}
