//! Survive/born rule sets parsed from `<survive>/<born>` descriptors.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Highest neighbor count a single-digit descriptor can name.
pub const MAX_RULE_COUNT: usize = 9;

/// Neighbor-count conditions for survival and birth.
///
/// Each set is stored as a bitmask over the counts 0..=9, so lookups during
/// stepping never touch the descriptor string again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    survive: u16,
    born: u16,
}

impl Default for RuleSet {
    /// Conway's Life, `23/3`.
    fn default() -> Self {
        RuleSet {
            survive: (1 << 2) | (1 << 3),
            born: 1 << 3,
        }
    }
}

fn parse_counts(half: &str, descriptor: &str) -> Result<u16> {
    half.chars().try_fold(0u16, |mask, ch| {
        ch.to_digit(10)
            .map(|digit| mask | (1 << digit))
            .ok_or_else(|| {
                Error::invalid_variant(format!("non-digit {ch:?} in {descriptor:?}"))
            })
    })
}

fn counts_of(mask: u16) -> Vec<usize> {
    (0..=MAX_RULE_COUNT).filter(|&n| mask & (1 << n) != 0).collect()
}

impl RuleSet {
    /// Parse a descriptor such as `"23/3"`: survive on 2 or 3 neighbors,
    /// born on exactly 3. Either half may be empty.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let mut halves = descriptor.split('/');
        let (survive, born) = match (halves.next(), halves.next(), halves.next()) {
            (Some(survive), Some(born), None) => (survive, born),
            _ => {
                return Err(Error::invalid_variant(format!(
                    "expected exactly one '/' in {descriptor:?}"
                )))
            }
        };

        Ok(RuleSet {
            survive: parse_counts(survive, descriptor)?,
            born: parse_counts(born, descriptor)?,
        })
    }

    /// Decide the next state of a cell from its current state and alive-neighbor count.
    #[inline]
    pub fn survives(&self, is_alive: bool, neighbor_count: usize) -> bool {
        let mask = if is_alive { self.survive } else { self.born };
        neighbor_count <= MAX_RULE_COUNT && mask & (1 << neighbor_count) != 0
    }

    /// Survive counts in ascending order.
    pub fn survive_counts(&self) -> Vec<usize> {
        counts_of(self.survive)
    }

    /// Born counts in ascending order.
    pub fn born_counts(&self) -> Vec<usize> {
        counts_of(self.born)
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RuleSet::parse(s)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.survive_counts() {
            write!(f, "{n}")?;
        }
        f.write_str("/")?;
        for n in self.born_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conway() {
        let rules = RuleSet::parse("23/3").unwrap();
        assert_eq!(rules.survive_counts(), vec![2, 3]);
        assert_eq!(rules.born_counts(), vec![3]);
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_survives() {
        let rules = RuleSet::parse("23/3").unwrap();

        // Alive cells
        assert!(rules.survives(true, 2));
        assert!(rules.survives(true, 3));
        assert!(!rules.survives(true, 1));
        assert!(!rules.survives(true, 4));

        // Dead cells
        assert!(rules.survives(false, 3));
        assert!(!rules.survives(false, 2));
        assert!(!rules.survives(false, 0));

        // Counts past 9 never match
        assert!(!rules.survives(true, 26));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["bad", "2a/3", "23/3/", "23//3", "", "23/x", "2 3/3", "-1/3"] {
            assert!(
                matches!(RuleSet::parse(bad), Err(Error::InvalidVariant(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_empty_halves() {
        let rules = RuleSet::parse("/3").unwrap();
        assert!(rules.survive_counts().is_empty());
        assert!(!rules.survives(true, 3));
        assert!(rules.survives(false, 3));

        let rules = RuleSet::parse("/").unwrap();
        assert!((0..=MAX_RULE_COUNT).all(|n| !rules.survives(true, n) && !rules.survives(false, n)));
    }

    #[test]
    fn test_duplicate_digits_collapse() {
        let rules: RuleSet = "332/33".parse().unwrap();
        assert_eq!(rules.survive_counts(), vec![2, 3]);
        assert_eq!(rules.born_counts(), vec![3]);
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(RuleSet::parse("32/3").unwrap().to_string(), "23/3");
        assert_eq!(RuleSet::parse("1357/1357").unwrap().to_string(), "1357/1357");
        assert_eq!(RuleSet::parse("/2").unwrap().to_string(), "/2");
    }
}
