use crate::banner::help_text;
use crate::error::WorldError;
use crate::input::parser::{Verb, parse_command};
use crate::models::player::Player;
use crate::models::world::World;
use crate::output::OutputHandle;
use crate::rendering::Theme;
use thiserror::Error;

mod examine;
mod fallback;
mod go;
mod inventory;
mod take;

pub use examine::{ROOM_WORDS, Sighting, resolve_sighting};

pub type CommandResult<T = ()> = Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Command context passed to command handlers
pub struct CmdCtx<'a> {
    pub world: &'a mut World,
    pub player: &'a mut Player,
    pub theme: &'a Theme,
    /// Terminal width used for wrapping room text
    pub width: usize,
    pub output: &'a mut OutputHandle,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn process_command(raw: &str, ctx: &mut CmdCtx<'_>) -> Flow {
    let intent = parse_command(raw);
    tracing::debug!(verb = intent.verb.as_str(), param = intent.param(), "command");

    let result = match intent.verb {
        Verb::Go => go::go(ctx, &intent),
        Verb::Collect => take::take(ctx, &intent),
        Verb::Examine => examine::examine(ctx, &intent),
        Verb::Inventory => inventory::inventory(ctx),
        Verb::Help => {
            ctx.output.system(help_text(ctx.theme.is_colored()));
            Ok(())
        }
        Verb::Quit => return Flow::Quit,
        Verb::Blank => {
            ctx.output.system("You need to type a command.");
            Ok(())
        }
        Verb::Unknown => fallback::fallback(ctx, &intent),
    };

    if let Err(e) = result {
        report(ctx.output, e);
    }
    Flow::Continue
}

fn report(output: &mut OutputHandle, err: CommandError) {
    match err {
        CommandError::UnknownCommand(_) => output.system("I don't know how to do that."),
        CommandError::Usage(usage) => output.system(format!("Usage: {usage}")),
        CommandError::World(e) => {
            // log for ops, don't leak internals to the player
            tracing::error!(error = %e, "command failed");
            output.system("Something goes wrong.");
        }
    }
}
