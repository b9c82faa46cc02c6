use crate::error::{WorldError, WorldResult};
use crate::models::room::{Room, RoomId};
use std::collections::HashMap;
use textquest_core::Direction;

/// Arena owning every room. Rooms are never removed, so a `RoomId` handed out
/// by a world stays valid for that world's lifetime.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,
    by_key: HashMap<String, RoomId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its handle. Keyed rooms must have unique keys.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        let id = RoomId(self.rooms.len());
        if let Some(key) = room.key.as_ref() {
            if self.by_key.contains_key(key) {
                return Err(WorldError::DuplicateRoom(key.clone()));
            }
            self.by_key.insert(key.clone(), id);
        }
        self.rooms.push(room);
        Ok(id)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    pub fn get(&self, id: RoomId) -> WorldResult<&Room> {
        self.room(id).ok_or(WorldError::UnknownRoom(id))
    }

    pub fn get_mut(&mut self, id: RoomId) -> WorldResult<&mut Room> {
        self.room_mut(id).ok_or(WorldError::UnknownRoom(id))
    }

    pub fn room_by_key(&self, key: &str) -> Option<RoomId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Joins `room` to `other`, with `other` lying in `direction` from `room`.
    /// Anything but north/south/east/west is rejected before any link changes.
    pub fn join(&mut self, room: RoomId, other: RoomId, direction: &str) -> WorldResult<()> {
        let dir: Direction = direction.parse()?;
        self.link(room, other, dir)
    }

    /// Typed form of `join`. Sets `room.dir = other` and
    /// `other.opposite(dir) = room`; existing links are overwritten.
    pub fn link(&mut self, room: RoomId, other: RoomId, dir: Direction) -> WorldResult<()> {
        self.get(room)?;
        self.get(other)?;

        self.rooms[room.0].set_exit(dir, other);
        self.rooms[other.0].set_exit(dir.opposite(), room);
        tracing::trace!(%room, %other, %dir, "rooms joined");
        Ok(())
    }
}
