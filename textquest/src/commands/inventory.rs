use crate::commands::{CmdCtx, CommandResult};

pub fn inventory(ctx: &mut CmdCtx<'_>) -> CommandResult {
    if ctx.player.item_count() == 0 {
        ctx.output.line("You aren't carrying anything.");
        return Ok(());
    }

    ctx.output.line("You have the following items:");
    for item in ctx.player.items() {
        ctx.output.line(item.name.clone());
    }
    Ok(())
}
