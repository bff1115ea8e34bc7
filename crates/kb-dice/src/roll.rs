//! Roll evaluation and results.
//!
//! This is the only module that consumes randomness. The RNG is
//! injected so callers can seed it for reproducible rolls.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::term::DiceTerm;

/// The outcome of one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieOutcome {
    /// The natural face rolled, in `[1, sides]`.
    pub base: u32,
    /// Per-die modifier copied from the owning term.
    pub modifier: i32,
    /// Natural 20 on a twenty-sided die.
    pub crit: bool,
    /// Natural 1 on a twenty-sided die.
    pub fumble: bool,
}

impl DieOutcome {
    /// The face plus the per-die modifier.
    pub fn total(&self) -> i32 {
        self.base as i32 + self.modifier
    }
}

/// The evaluated result of one dice term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// The term that produced this result.
    pub term: DiceTerm,
    /// One outcome per die, in roll order.
    pub outcomes: Vec<DieOutcome>,
}

impl RollResult {
    /// Sum of every die's modified total.
    pub fn sum_of_totals(&self) -> i32 {
        self.outcomes.iter().map(DieOutcome::total).sum()
    }

    /// Term total including the group modifier.
    pub fn group_total(&self) -> i32 {
        self.sum_of_totals() + self.term.group_modifier
    }

    /// True if any die rolled a natural 20 on a d20.
    pub fn any_crit(&self) -> bool {
        self.outcomes.iter().any(|o| o.crit)
    }

    /// True if any die rolled a natural 1 on a d20.
    pub fn any_fumble(&self) -> bool {
        self.outcomes.iter().any(|o| o.fumble)
    }
}

impl DiceTerm {
    /// Roll this term with the given RNG.
    ///
    /// Never fails: the parser has already validated quantity, sides,
    /// and modifiers, and aggregation is plain arithmetic.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let outcomes = (0..self.quantity)
            .map(|_| {
                let base = rng.random_range(1..=self.sides);
                DieOutcome {
                    base,
                    modifier: self.modifier,
                    crit: self.sides == 20 && base == 20,
                    fumble: self.sides == 20 && base == 1,
                }
            })
            .collect();
        RollResult {
            term: self.clone(),
            outcomes,
        }
    }
}
