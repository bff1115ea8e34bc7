//! Error types for the chat command surface.

use thiserror::Error;

/// Result type for chat dispatch.
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors produced while running a dispatched command.
///
/// The dispatcher folds every variant into reply text before it
/// reaches the platform adapter; nothing here escapes as a failure.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The command was invoked with fewer arguments than it requires.
    #[error("command \"{trigger}\" requires {required} argument(s) \"{arg_names}\"")]
    MissingArgument {
        /// The trigger as typed, prefix included.
        trigger: String,
        /// How many arguments the command requires.
        required: usize,
        /// Comma-joined argument names for the usage text.
        arg_names: String,
    },

    /// The dice engine rejected the request.
    #[error(transparent)]
    Dice(#[from] kb_dice::DiceError),
}
