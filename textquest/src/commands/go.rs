use crate::commands::{CmdCtx, CommandError, CommandResult};
use crate::input::parser::Intent;
use crate::models::player::MoveError;
use crate::rendering::render_room;

pub fn go(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let Some(dir) = intent.param.as_deref() else {
        return Err(CommandError::Usage("go <direction>"));
    };

    match ctx.player.go(ctx.world, dir) {
        Ok(to) => {
            ctx.output.line(format!("You go {dir}."));
            let room = ctx.world.get(to)?;
            ctx.output.room_view(render_room(ctx.theme, ctx.width, room));
        }
        Err(MoveError::World(e)) => return Err(e.into()),
        Err(e) => ctx.output.line(e.to_string()),
    }

    Ok(())
}
