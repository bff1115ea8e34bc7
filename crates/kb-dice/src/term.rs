//! Dice term parsing.
//!
//! A term is one `NdS±M` expression: an optional quantity, a literal
//! `d`, the number of sides, and an optional per-die modifier, e.g.
//! `2d6+1`, `d20`, `3d10-2`. The accepted shape is exactly
//! `(\d*)d(\d+)([-+]\d+)?`, implemented as an explicit parser so error
//! messages can name the precise offending substring.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// Die sizes accepted by the parser.
pub const ALLOWED_SIDES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// Render the allowed dice as a comma-separated list: `d4, d6, ...`.
pub fn allowed_dice_list() -> String {
    let names: Vec<String> = ALLOWED_SIDES.iter().map(|s| format!("d{s}")).collect();
    names.join(", ")
}

/// One parsed dice term.
///
/// Keeps the matched substrings verbatim alongside the parsed integers
/// so the original notation can be reconstructed exactly for display:
/// an omitted quantity renders as empty, not as `1`. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTerm {
    /// Number of dice to roll (1 if omitted in the input).
    pub quantity: u32,
    /// Number of sides per die.
    pub sides: u32,
    /// Modifier applied to every individual die.
    pub modifier: i32,
    /// Modifier applied once to the term's total.
    pub group_modifier: i32,
    /// The quantity substring as written (may be empty).
    pub raw_quantity: String,
    /// The sides substring as written.
    pub raw_sides: String,
    /// The modifier substring as written, sign included (may be empty).
    pub raw_modifier: String,
}

impl DiceTerm {
    /// Parse a trimmed term string.
    ///
    /// Fails with [`DiceError::MalformedTerm`] when the string does not
    /// match the grammar at all, [`DiceError::InvalidSides`] when the
    /// sides value is not an allowed die, [`DiceError::InvalidModifier`]
    /// when the modifier is not a signed integer, and
    /// [`DiceError::InvalidQuantity`] when an explicit quantity is zero
    /// or too large. An empty quantity means 1, not 0.
    pub fn parse(raw: &str) -> DiceResult<Self> {
        let Some(d_pos) = raw.find('d') else {
            return Err(DiceError::MalformedTerm(raw.to_string()));
        };

        let raw_quantity = &raw[..d_pos];
        if !raw_quantity.chars().all(|c| c.is_ascii_digit()) {
            return Err(DiceError::MalformedTerm(raw.to_string()));
        }

        let rest = &raw[d_pos + 1..];
        let sides_len = rest.chars().take_while(char::is_ascii_digit).count();
        if sides_len == 0 {
            return Err(DiceError::MalformedTerm(raw.to_string()));
        }
        let raw_sides = &rest[..sides_len];
        let raw_modifier = &rest[sides_len..];

        if !raw_modifier.is_empty() {
            let well_formed = raw_modifier.starts_with(['+', '-'])
                && raw_modifier.len() > 1
                && raw_modifier[1..].chars().all(|c| c.is_ascii_digit());
            if !well_formed {
                return Err(DiceError::MalformedTerm(raw.to_string()));
            }
        }

        let quantity = if raw_quantity.is_empty() {
            1
        } else {
            let parsed: u32 = raw_quantity
                .parse()
                .map_err(|_| DiceError::InvalidQuantity(raw_quantity.to_string()))?;
            if parsed == 0 {
                return Err(DiceError::InvalidQuantity(raw_quantity.to_string()));
            }
            parsed
        };

        let sides: u32 = raw_sides
            .parse()
            .map_err(|_| DiceError::MalformedTerm(raw.to_string()))?;
        if !ALLOWED_SIDES.contains(&sides) {
            return Err(DiceError::InvalidSides(sides));
        }

        let modifier = parse_signed(raw_modifier)?;

        Ok(Self {
            quantity,
            sides,
            modifier,
            group_modifier: 0,
            raw_quantity: raw_quantity.to_string(),
            raw_sides: raw_sides.to_string(),
            raw_modifier: raw_modifier.to_string(),
        })
    }

    /// Attach a group modifier parsed by the expression splitter.
    pub fn with_group_modifier(mut self, group_modifier: i32) -> Self {
        self.group_modifier = group_modifier;
        self
    }

    /// Reconstruct the term exactly as it was written.
    pub fn notation(&self) -> String {
        format!(
            "{}d{}{}",
            self.raw_quantity, self.raw_sides, self.raw_modifier
        )
    }
}

/// Parse an optional signed-integer substring; empty means zero.
///
/// The term grammar's own digit constraint should make failure
/// impossible for per-die modifiers, but the group-modifier path feeds
/// independently-sourced text through here, so re-validate instead of
/// trusting the caller.
pub(crate) fn parse_signed(raw: &str) -> DiceResult<i32> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.trim()
        .parse()
        .map_err(|_| DiceError::InvalidModifier(raw.to_string()))
}
