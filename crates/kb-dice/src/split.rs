//! Expression splitting for multi-roll requests.
//!
//! A request like `2d8, (3d6)-1\nd20` holds several terms separated by
//! commas or newlines. A term may be wrapped in parentheses with a
//! trailing signed integer, which applies once to the whole term's
//! total instead of to each die.

use crate::error::DiceResult;
use crate::term::parse_signed;

/// One raw fragment of a multi-roll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The term text with any group wrapper removed.
    pub term: &'a str,
    /// Parsed group modifier (0 when absent).
    pub group_modifier: i32,
    /// The group-modifier substring as written (may be empty).
    pub raw_group_modifier: &'a str,
}

/// Split a raw request into term fragments, left to right.
///
/// Lazy: fragments are produced on demand in a single pass over the
/// input. Empty fragments from doubled or dangling separators are
/// discarded. Fragment order matches input order, which later error
/// reporting relies on.
pub fn split_terms(input: &str) -> impl Iterator<Item = DiceResult<Fragment<'_>>> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(parse_fragment)
}

/// Detect and strip a `(<term>)<signed-int>` group wrapper.
fn parse_fragment(fragment: &str) -> DiceResult<Fragment<'_>> {
    let Some(inner) = fragment.strip_prefix('(') else {
        return Ok(Fragment {
            term: fragment,
            group_modifier: 0,
            raw_group_modifier: "",
        });
    };

    let Some(close) = inner.find(')') else {
        // No closing paren: hand the fragment through unchanged so the
        // term parser reports the malformed text verbatim.
        return Ok(Fragment {
            term: fragment,
            group_modifier: 0,
            raw_group_modifier: "",
        });
    };

    let raw_group_modifier = &inner[close + 1..];
    Ok(Fragment {
        term: inner[..close].trim(),
        group_modifier: parse_signed(raw_group_modifier)?,
        raw_group_modifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiceError;

    fn collect(input: &str) -> Vec<Fragment<'_>> {
        split_terms(input).map(|f| f.unwrap()).collect()
    }

    #[test]
    fn splits_on_commas_and_newlines() {
        let fragments = collect("2d8, 2d6\nd20");
        let terms: Vec<&str> = fragments.iter().map(|f| f.term).collect();
        assert_eq!(terms, vec!["2d8", "2d6", "d20"]);
    }

    #[test]
    fn discards_empty_fragments() {
        let fragments = collect("2d8,,  ,\n2d6");
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn group_modifier_parsed() {
        let fragments = collect("(3d8)+3");
        assert_eq!(fragments[0].term, "3d8");
        assert_eq!(fragments[0].group_modifier, 3);
        assert_eq!(fragments[0].raw_group_modifier, "+3");
    }

    #[test]
    fn group_modifier_defaults_to_zero() {
        let fragments = collect("(3d8)");
        assert_eq!(fragments[0].term, "3d8");
        assert_eq!(fragments[0].group_modifier, 0);
        assert_eq!(fragments[0].raw_group_modifier, "");
    }

    #[test]
    fn negative_group_modifier() {
        let fragments = collect("(2d6)-2");
        assert_eq!(fragments[0].group_modifier, -2);
    }

    #[test]
    fn invalid_group_modifier_rejected() {
        let results: Vec<_> = split_terms("(3d8)x").collect();
        assert_eq!(
            results[0],
            Err(DiceError::InvalidModifier("x".to_string()))
        );
    }

    #[test]
    fn unclosed_paren_passes_through() {
        let fragments = collect("(3d8");
        assert_eq!(fragments[0].term, "(3d8");
        assert_eq!(fragments[0].group_modifier, 0);
    }

    #[test]
    fn preserves_input_order() {
        let fragments = collect("d4, d6, d8, d10");
        let terms: Vec<&str> = fragments.iter().map(|f| f.term).collect();
        assert_eq!(terms, vec!["d4", "d6", "d8", "d10"]);
    }

    #[test]
    fn plain_fragment_untouched() {
        let fragments = collect("  2d6+1  ");
        assert_eq!(fragments[0].term, "2d6+1");
    }
}
