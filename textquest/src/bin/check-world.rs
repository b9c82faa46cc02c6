use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use textquest::{LoadedWorld, builtin_world, load_world_file};

#[derive(Debug, Parser)]
#[command(name = "check-world", version, about = "Validate a YAML world file")]
struct Args {
    /// World file to check (the built-in world when omitted)
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loaded = match args.path.as_deref() {
        Some(path) => load_world_file(path).with_context(|| format!("invalid world {}", path.display()))?,
        None => builtin_world().context("invalid built-in world")?,
    };

    print_summary(args.path.as_deref().map(|p| p.display().to_string()), &loaded);
    Ok(())
}

fn print_summary(source: Option<String>, loaded: &LoadedWorld) {
    let world = &loaded.world;
    let items: usize = world.rooms().map(|(_, r)| r.item_count()).sum();
    let objects: usize = world.rooms().map(|(_, r)| r.objects().count()).sum();
    let exits: usize = world.rooms().map(|(_, r)| r.exits().count()).sum();
    let key_of = |id| {
        world
            .room(id)
            .and_then(|r| r.key.clone())
            .unwrap_or_else(|| id.to_string())
    };

    println!("✓ World is valid: {}", source.as_deref().unwrap_or("<built-in>"));
    println!("  rooms:        {}", world.len());
    println!("  items:        {items}");
    println!("  objects:      {objects}");
    println!("  exits:        {exits}");
    println!("  start room:   {}", key_of(loaded.start));
    match &loaded.goal {
        Some(goal) => {
            if let Some(room) = goal.room {
                println!("  goal room:    {}", key_of(room));
            }
            if !goal.items.is_empty() {
                println!("  goal items:   {}", goal.items.join(", "));
            }
        }
        None => println!("  goal:         none (the game can't be won)"),
    }
}
