//! Error types for the dice engine.

use thiserror::Error;

use crate::term::allowed_dice_list;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors produced while parsing a roll request.
///
/// Every variant is detected before any randomness is consumed, so an
/// error never comes alongside partial roll output. All of these are
/// ordinary return values meant to become user-visible replies, never
/// process failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Term text does not match the `NdS±M` grammar.
    #[error("invalid roll: [{0}]")]
    MalformedTerm(String),

    /// Sides value parsed but is not an allowed die.
    #[error("d{sides} is not an allowed die, allowed dice are: {list}", sides = .0, list = allowed_dice_list())]
    InvalidSides(u32),

    /// A modifier or group-modifier substring is not a valid signed
    /// integer.
    #[error("invalid modifier: [{0}]")]
    InvalidModifier(String),

    /// A dice count is not a positive integer.
    #[error("[{0}] is not a valid number of dice")]
    InvalidQuantity(String),
}
