//! Dice-notation parsing and roll evaluation for Knobelbote.
//!
//! Converts free-form text like `2d8+3, (3d6)-1, d20` into structured
//! roll results with totals, per-die breakdowns, and crit/fumble
//! annotations on twenty-sided dice. The engine is a pure function of
//! its input string and an injected RNG; it holds no state between
//! calls, so callers may invoke it concurrently as long as each brings
//! its own RNG.

pub mod error;
pub mod format;
pub mod request;
pub mod roll;
pub mod split;
pub mod term;

pub use error::{DiceError, DiceResult};
pub use request::{d20_request, evaluate, roll_request};
pub use roll::{DieOutcome, RollResult};
pub use split::{Fragment, split_terms};
pub use term::{ALLOWED_SIDES, DiceTerm, allowed_dice_list};
