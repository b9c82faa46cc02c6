use crate::commands::{CmdCtx, CommandResult};
use crate::input::parser::Intent;
use crate::models::item::{Examinable, Item, Object};
use crate::models::player::Player;
use crate::models::room::Room;
use crate::rendering::render_room;

/// Parameters that mean "the room I'm standing in". A bare `examine` does too.
pub const ROOM_WORDS: [&str; 2] = ["room", "area"];

/// What an `examine` parameter resolved to.
#[derive(Debug, Clone, Copy)]
pub enum Sighting<'a> {
    Held(&'a Item),
    InRoom(&'a Item),
    Fixture(&'a Object),
    Room(&'a Room),
}

impl<'a> Sighting<'a> {
    pub fn examinable(&self) -> Option<&'a dyn Examinable> {
        match *self {
            Sighting::Held(item) | Sighting::InRoom(item) => Some(item),
            Sighting::Fixture(obj) => Some(obj),
            Sighting::Room(_) => None,
        }
    }
}

/// Resolves `param` in fixed order: inventory, room items, room objects, the
/// room itself. A name held by the player always wins over one in the room.
/// An empty parameter is always the room.
pub fn resolve_sighting<'a>(player: &'a Player, room: &'a Room, param: &str) -> Option<Sighting<'a>> {
    if param.is_empty() {
        return Some(Sighting::Room(room));
    }
    if let Some(item) = player.item(param) {
        return Some(Sighting::Held(item));
    }
    if let Some(item) = room.item(param) {
        return Some(Sighting::InRoom(item));
    }
    if let Some(obj) = room.object(param) {
        return Some(Sighting::Fixture(obj));
    }
    if ROOM_WORDS.contains(&param) {
        return Some(Sighting::Room(room));
    }
    None
}

pub fn examine(ctx: &mut CmdCtx<'_>, intent: &Intent) -> CommandResult {
    let room = ctx.world.get(ctx.player.current_room())?;

    match resolve_sighting(ctx.player, room, intent.param()) {
        Some(Sighting::Room(room)) => {
            ctx.output.room_view(render_room(ctx.theme, ctx.width, room));
        }
        Some(sighting) => {
            if let Some(thing) = sighting.examinable() {
                ctx.output.line(format!("You look at the {}.", thing.name()));
                ctx.output.line(thing.description());
            }
        }
        None => ctx.output.line("I can't see anything like that."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::world::World;

    fn setup() -> (World, Player) {
        let mut world = World::new();
        let a = world.add_room(Room::new("A small study.")).unwrap();
        let room = world.room_mut(a).unwrap();
        room.add_item(Item::new("key", "A key on the floor"));
        room.add_item(Item::new("lamp", "A brass lamp"));
        room.add_object(Object::new("lamp", "A lamp bolted to the wall"));
        room.add_object(Object::new("desk", "A heavy oak desk"));

        let mut player = Player::new(a);
        player.collect(&mut world, "key").unwrap();
        // put a second, different key in the room
        world.room_mut(a).unwrap().add_item(Item::new("key", "Another key"));
        (world, player)
    }

    #[test]
    fn inventory_beats_room_items() {
        let (world, player) = setup();
        let room = world.room(player.current_room()).unwrap();

        match resolve_sighting(&player, room, "key") {
            Some(Sighting::Held(item)) => assert_eq!(item.description, "A key on the floor"),
            other => panic!("expected held item, got {other:?}"),
        }
    }

    #[test]
    fn room_items_beat_objects() {
        let (world, player) = setup();
        let room = world.room(player.current_room()).unwrap();

        assert!(matches!(resolve_sighting(&player, room, "lamp"), Some(Sighting::InRoom(_))));
        assert!(matches!(resolve_sighting(&player, room, "desk"), Some(Sighting::Fixture(_))));
    }

    #[test]
    fn room_words_resolve_to_the_room() {
        let (world, player) = setup();
        let room = world.room(player.current_room()).unwrap();

        for word in ROOM_WORDS {
            assert!(matches!(resolve_sighting(&player, room, word), Some(Sighting::Room(_))));
        }
        assert!(resolve_sighting(&player, room, "unicorn").is_none());
    }

    #[test]
    fn bare_examine_is_always_the_room() {
        let mut world = World::new();
        let a = world.add_room(Room::new("A bare room.")).unwrap();
        // only reachable through the API; world files reject empty names
        world.room_mut(a).unwrap().add_item(Item::new("", "Nameless"));
        world.room_mut(a).unwrap().add_object(Object::new("", "Also nameless"));
        let player = Player::new(a);
        let room = world.room(a).unwrap();

        assert!(matches!(resolve_sighting(&player, room, ""), Some(Sighting::Room(_))));
    }

    #[test]
    fn only_things_are_examinable() {
        let (world, player) = setup();
        let room = world.room(player.current_room()).unwrap();

        let desk = resolve_sighting(&player, room, "desk").and_then(|s| s.examinable());
        assert_eq!(desk.map(|d| d.description()), Some("A heavy oak desk"));
        assert!(!desk.is_some_and(|d| d.is_collectible()));
        assert!(Sighting::Room(room).examinable().is_none());
    }
}
