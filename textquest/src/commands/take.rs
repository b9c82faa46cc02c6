use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;
use crate::models::player::TakeError;

pub fn take(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(name) = intent.param.as_deref() else {
        return Err(CommandError::Usage("get <item>"));
    };

    match ctx.player.collect(ctx.world, name) {
        Ok(item) => ctx.output.line(item.pickup_text.clone()),
        Err(TakeError::World(e)) => return Err(e.into()),
        Err(e) => ctx.output.line(e.to_string()),
    }

    Ok(())
}
