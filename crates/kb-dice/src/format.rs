//! Reply rendering.
//!
//! Pure string assembly: the evaluator has already done the work, this
//! module only decides how results read in chat. No randomness, no
//! failure path.

use crate::roll::RollResult;

/// Annotation appended when a d20 term rolled a natural 20 and/or a
/// natural 1. Both at once can only happen when the term rolled more
/// than one die.
pub fn crit_fumble_note(crit: bool, fumble: bool) -> &'static str {
    match (crit, fumble) {
        (true, true) => {
            "  --  Natural 20 and natural 1!\n If rolling advantage, Crit!\n If rolling disadvantage, Fumble!"
        }
        (true, false) => "  --  Natural 20! (Crit)",
        (false, true) => "  --  Natural 1! (Fumble)",
        (false, false) => "",
    }
}

/// Render one roll result as a chat reply.
///
/// The breakdown of term sum and group modifier is shown iff the
/// parsed group modifier is non-zero.
pub fn format_roll(name: &str, result: &RollResult) -> String {
    let notation = result.term.notation();
    let totals = totals_list(result);
    let sum = result.sum_of_totals();
    let group_modifier = result.term.group_modifier;

    let mut out = if group_modifier == 0 {
        format!("{name} rolled a {notation}! The result was:\n{totals}, Total: {sum}")
    } else {
        format!(
            "{name} rolled a {notation} with a {group_modifier:+} modifier! The result was:\n\
             {totals}, Total: {} ({sum}{group_modifier:+})",
            result.group_total(),
        )
    };
    out.push_str(crit_fumble_note(result.any_crit(), result.any_fumble()));
    out
}

/// Render several results in input order, separated by blank lines.
pub fn format_rolls(name: &str, results: &[RollResult]) -> String {
    let parts: Vec<String> = results.iter().map(|r| format_roll(name, r)).collect();
    parts.join("\n\n")
}

/// Render a batch of raw d20 faces for the count-only command.
pub fn format_d20(name: &str, quantity: u32, faces: &[u32]) -> String {
    let list: Vec<String> = faces.iter().map(ToString::to_string).collect();
    let crit = faces.contains(&20);
    let fumble = faces.contains(&1);
    format!(
        "{name} rolled a {quantity}d20!\n The result was: [{}]{}",
        list.join(", "),
        crit_fumble_note(crit, fumble),
    )
}

/// The per-die totals as a bracketed list, e.g. `[4, 6]`.
fn totals_list(result: &RollResult) -> String {
    let totals: Vec<String> = result
        .outcomes
        .iter()
        .map(|o| o.total().to_string())
        .collect();
    format!("[{}]", totals.join(", "))
}
