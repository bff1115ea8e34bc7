//! Chat command surface for Knobelbote.
//!
//! Maps trigger tokens (`!roll`, `!d20`, `!commands`) to command
//! descriptors and routes incoming message lines to the dice engine.
//! The chat platform itself is not this crate's business: a platform
//! adapter hands each message to [`Dispatcher::handle`] along with the
//! author's display name and forwards the returned reply, if any, back
//! to the originating channel.

pub mod command;
pub mod dispatch;
pub mod error;

pub use command::{CommandKind, CommandSpec, builtin_commands};
pub use dispatch::{Dispatcher, render_dice_error};
pub use error::{ChatError, ChatResult};
