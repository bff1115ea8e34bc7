//! Command descriptors and the built-in registry.
//!
//! Each chat command is an entry in an ordinary lookup table: a trigger
//! token plus metadata the dispatcher needs to route and to render the
//! command listing. Handlers are tagged, not stored as closures, so
//! descriptors stay plain data.

/// What a command does; the dispatcher maps each tag to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// List every registered command.
    Commands,
    /// Roll N twenty-sided dice.
    D20,
    /// Roll arbitrary dice notation.
    Roll,
}

/// A registered chat command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The trigger token, without the command prefix.
    pub trigger: &'static str,
    /// Which handler the dispatcher runs.
    pub kind: CommandKind,
    /// Names of the arguments, for usage messages.
    pub arg_names: &'static [&'static str],
    /// How many arguments must be present.
    pub required_args: usize,
    /// One-line description for the command listing.
    pub description: &'static str,
}

/// The built-in command set, in listing order.
pub fn builtin_commands() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            trigger: "commands",
            kind: CommandKind::Commands,
            arg_names: &[],
            required_args: 0,
            description: "Prints a list of all the commands.",
        },
        CommandSpec {
            trigger: "d20",
            kind: CommandKind::D20,
            arg_names: &["Number of dice to roll"],
            required_args: 0,
            description: "Rolls a d20. !d20 <number of dice to roll> (default 1)",
        },
        CommandSpec {
            trigger: "roll",
            kind: CommandKind::Roll,
            arg_names: &["Dice to roll"],
            required_args: 1,
            description: "Rolls the dice. Examples: !roll d6 | !roll 2d8 | \
                          !roll 3d10-1 | !roll (3d8)+3 | !roll 2d8, 2d6",
        },
    ]
}
