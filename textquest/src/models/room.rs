use crate::models::item::{Item, Object};
use indexmap::IndexMap;
use std::fmt;
use textquest_core::Direction;

/// Handle of a room inside its `World`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct RoomId(pub(crate) usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the world graph. Neighbors are set through `World::join`, which
/// keeps them symmetric.
#[derive(Debug, Clone)]
pub struct Room {
    /// Stable name used by world files and goals (ie: "desk_room")
    pub key: Option<String>,
    pub description: String,
    items: IndexMap<String, Item>,
    objects: IndexMap<String, Object>,
    exits: [Option<RoomId>; 4],
}

impl Room {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            key: None,
            description: description.into(),
            items: IndexMap::new(),
            objects: IndexMap::new(),
            exits: [None; 4],
        }
    }

    pub fn with_key(key: impl Into<String>, description: impl Into<String>) -> Self {
        let mut room = Self::new(description);
        room.key = Some(key.into());
        room
    }

    /// Adds an item, replacing (and returning) any item of the same name.
    pub fn add_item(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.name.clone(), item)
    }

    /// Adds a fixed object, replacing (and returning) any object of the same name.
    pub fn add_object(&mut self, obj: Object) -> Option<Object> {
        self.objects.insert(obj.name.clone(), obj)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.get(name)
    }

    pub fn has_object(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Removes an item, keeping the order of the remaining ones.
    pub(crate) fn take_item(&mut self, name: &str) -> Option<Item> {
        self.items.shift_remove(name)
    }

    pub fn exit(&self, dir: Direction) -> Option<RoomId> {
        self.exits[dir.index()]
    }

    /// Linked directions, in north/south/east/west order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.exit(d).map(|to| (d, to)))
    }

    pub(crate) fn set_exit(&mut self, dir: Direction, to: RoomId) {
        self.exits[dir.index()] = Some(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_last_write_wins() {
        let mut room = Room::new("A room");
        assert!(room.add_item(Item::new("key", "old key")).is_none());
        let replaced = room.add_item(Item::new("key", "new key"));

        assert_eq!(replaced.map(|i| i.description), Some("old key".to_string()));
        assert_eq!(room.item_count(), 1);
        assert_eq!(room.item("key").map(|i| i.description.as_str()), Some("new key"));
    }

    #[test]
    fn add_object_last_write_wins() {
        let mut room = Room::new("A room");
        room.add_object(Object::new("desk", "An empty desk"));
        room.add_object(Object::new("desk", "A cluttered desk"));

        assert_eq!(room.objects().count(), 1);
        assert_eq!(room.object("desk").map(|o| o.description.as_str()), Some("A cluttered desk"));
    }

    #[test]
    fn take_item_keeps_insertion_order() {
        let mut room = Room::new("A room");
        for name in ["a", "b", "c"] {
            room.add_item(Item::new(name, name));
        }

        assert!(room.take_item("b").is_some());
        assert!(room.take_item("b").is_none());
        let names: Vec<_> = room.items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn fresh_room_has_no_exits() {
        let room = Room::new("Nowhere");
        assert_eq!(room.exits().count(), 0);
        for dir in Direction::ALL {
            assert!(room.exit(dir).is_none());
        }
    }
}
