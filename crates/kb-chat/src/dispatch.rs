//! Message dispatch.
//!
//! `Dispatcher` holds the command table and the accepted prefix
//! characters. It carries no session state: the RNG is injected per
//! call, so concurrent callers each bring their own.

use rand::rngs::StdRng;

use kb_dice::DiceError;

use crate::command::{CommandKind, CommandSpec, builtin_commands};
use crate::error::{ChatError, ChatResult};

/// Routes chat messages to registered commands.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    commands: Vec<CommandSpec>,
    prefixes: Vec<char>,
}

impl Dispatcher {
    /// A dispatcher with the built-in commands and the `!` and `.`
    /// prefixes.
    pub fn new() -> Self {
        Self {
            commands: builtin_commands(),
            prefixes: vec!['!', '.'],
        }
    }

    /// Replace the accepted prefix characters.
    pub fn with_prefixes(mut self, prefixes: Vec<char>) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// The registered commands, in listing order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Route one message line.
    ///
    /// Returns `None` when the message is not addressed to the bot: no
    /// prefix character, or an unregistered trigger. Everything else
    /// produces a reply, including argument and engine errors, which
    /// are rendered as user-facing text rather than surfaced as `Err`.
    pub fn handle(&self, author: &str, message: &str, rng: &mut StdRng) -> Option<String> {
        let trimmed = message.trim_start();
        let (first, args) = match trimmed.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim()),
            None => (trimmed.trim_end(), ""),
        };

        let trigger = self.strip_prefix(first)?;
        let spec = self.commands.iter().find(|c| c.trigger == trigger)?;

        Some(match self.execute(spec, first, author, args, rng) {
            Ok(reply) => reply,
            Err(err) => render_error(author, &err),
        })
    }

    fn strip_prefix<'a>(&self, token: &'a str) -> Option<&'a str> {
        let first = token.chars().next()?;
        if !self.prefixes.contains(&first) {
            return None;
        }
        Some(&token[first.len_utf8()..])
    }

    fn execute(
        &self,
        spec: &CommandSpec,
        typed: &str,
        author: &str,
        args: &str,
        rng: &mut StdRng,
    ) -> ChatResult<String> {
        if args.split_whitespace().count() < spec.required_args {
            return Err(ChatError::MissingArgument {
                trigger: typed.to_string(),
                required: spec.required_args,
                arg_names: spec.arg_names.join(", "),
            });
        }

        match spec.kind {
            CommandKind::Commands => Ok(self.render_command_list()),
            CommandKind::D20 => {
                let count = args.split_whitespace().next();
                Ok(kb_dice::d20_request(author, count, rng)?)
            }
            CommandKind::Roll => Ok(kb_dice::roll_request(author, args, rng)?),
        }
    }

    /// The numbered command listing, generated from the registry so new
    /// commands appear automatically.
    fn render_command_list(&self) -> String {
        let prefix = self.prefixes.first().copied().unwrap_or('!');
        let mut out = String::from("**Commands List**\n");
        for (i, spec) in self.commands.iter().enumerate() {
            out.push_str(&format!(
                "{}.) {}{} : {}\n",
                i + 1,
                prefix,
                spec.trigger,
                spec.description
            ));
        }
        out.trim_end().to_string()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing text for a dispatch error, in the voice the bot replies
/// with.
fn render_error(author: &str, err: &ChatError) -> String {
    match err {
        ChatError::MissingArgument { .. } => err.to_string(),
        ChatError::Dice(dice) => render_dice_error(author, dice),
    }
}

/// Render an engine error as reply text.
///
/// The offending substring is always named; for a disallowed die the
/// reply lists the dice the engine accepts instead.
pub fn render_dice_error(author: &str, err: &DiceError) -> String {
    match err {
        DiceError::MalformedTerm(term) => format!("{author} made an invalid roll: [{term}]"),
        DiceError::InvalidSides(_) => {
            format!("Allowed dice are: {}", kb_dice::allowed_dice_list())
        }
        DiceError::InvalidModifier(raw) => format!("{author} used an invalid modifier: [{raw}]"),
        DiceError::InvalidQuantity(raw) => {
            format!("{author} made an invalid roll: [{raw}] is not a valid number of dice.")
        }
    }
}
