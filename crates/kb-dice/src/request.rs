//! Engine entry points.
//!
//! A roll request is a linear pipeline: split the raw argument into
//! term fragments, parse every fragment into a validated term, roll,
//! render. Parsing runs to completion before any die is rolled, so the
//! first error (left to right) aborts the whole request with no
//! partial output.

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{DiceError, DiceResult};
use crate::format;
use crate::roll::RollResult;
use crate::split::split_terms;
use crate::term::DiceTerm;

/// Parse and evaluate a multi-term request, returning structured
/// results in input order.
///
/// A request that contains no terms at all (empty or separators only)
/// is malformed.
pub fn evaluate(input: &str, rng: &mut StdRng) -> DiceResult<Vec<RollResult>> {
    let mut terms = Vec::new();
    for fragment in split_terms(input) {
        let fragment = fragment?;
        let term = DiceTerm::parse(fragment.term)?.with_group_modifier(fragment.group_modifier);
        terms.push(term);
    }

    if terms.is_empty() {
        return Err(DiceError::MalformedTerm(input.trim().to_string()));
    }

    Ok(terms.iter().map(|term| term.roll(rng)).collect())
}

/// Evaluate a request and render the chat reply.
///
/// This is the contract the command surface consumes: requester display
/// name and raw argument text in, reply text out.
pub fn roll_request(name: &str, input: &str, rng: &mut StdRng) -> DiceResult<String> {
    let results = evaluate(input, rng)?;
    Ok(format::format_rolls(name, &results))
}

/// Roll N twenty-sided dice for the count-only command.
///
/// `count` is the raw argument as typed (`None` means one die); it must
/// parse as a positive integer.
pub fn d20_request(name: &str, count: Option<&str>, rng: &mut StdRng) -> DiceResult<String> {
    let quantity = match count {
        None => 1,
        Some(raw) => parse_count(raw)?,
    };
    let faces: Vec<u32> = (0..quantity).map(|_| rng.random_range(1..=20)).collect();
    Ok(format::format_d20(name, quantity, &faces))
}

fn parse_count(raw: &str) -> DiceResult<u32> {
    let parsed: u32 = raw
        .trim()
        .parse()
        .map_err(|_| DiceError::InvalidQuantity(raw.to_string()))?;
    if parsed == 0 {
        return Err(DiceError::InvalidQuantity(raw.to_string()));
    }
    Ok(parsed)
}
