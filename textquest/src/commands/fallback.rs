use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;

pub fn fallback(_ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let raw = intent.raw_verb.clone().unwrap_or_default();
    tracing::debug!(verb = %raw, "unrecognized command");
    Err(CommandError::UnknownCommand(raw))
}
