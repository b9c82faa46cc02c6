use crate::error::WorldError;
use crate::models::item::Item;
use crate::models::room::RoomId;
use crate::models::world::World;
use indexmap::IndexMap;
use textquest_core::Direction;
use thiserror::Error;

/// Why a move did not happen. Position is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("I don't know how to go {0}.")]
    UnknownDirection(String),

    #[error("I can't go that way.")]
    NoSuchExit,

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Why a pickup did not happen. Neither the room nor the inventory changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TakeError {
    #[error("You've already collected that item.")]
    AlreadyCollected,

    #[error("You can't pick that up.")]
    Fixed(String),

    #[error("I can't see that item.")]
    NotVisible(String),

    #[error(transparent)]
    World(#[from] WorldError),
}

#[derive(Debug, Clone)]
pub struct Player {
    current_room: RoomId,
    inventory: IndexMap<String, Item>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Self {
            current_room: start,
            inventory: IndexMap::new(),
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains_key(name)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.inventory.get(name)
    }

    /// Held items in the order they were collected.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.inventory.values()
    }

    pub fn item_count(&self) -> usize {
        self.inventory.len()
    }

    pub(crate) fn inventory(&self) -> &IndexMap<String, Item> {
        &self.inventory
    }

    /// Walks through the exit in `direction`, returning the room entered.
    pub fn go(&mut self, world: &World, direction: &str) -> Result<RoomId, MoveError> {
        let dir: Direction = direction
            .parse()
            .map_err(|_| MoveError::UnknownDirection(direction.to_string()))?;

        let to = world
            .get(self.current_room)?
            .exit(dir)
            .ok_or(MoveError::NoSuchExit)?;

        tracing::debug!(from = %self.current_room, %to, %dir, "player moved");
        self.current_room = to;
        Ok(to)
    }

    /// Moves the named item from the current room into the inventory.
    pub fn collect(&mut self, world: &mut World, name: &str) -> Result<&Item, TakeError> {
        if self.inventory.contains_key(name) {
            return Err(TakeError::AlreadyCollected);
        }

        let room = world.get_mut(self.current_room)?;
        if room.has_object(name) {
            return Err(TakeError::Fixed(name.to_string()));
        }
        let item = room
            .take_item(name)
            .ok_or_else(|| TakeError::NotVisible(name.to_string()))?;

        tracing::debug!(room = %self.current_room, item = %name, "item collected");
        let (idx, _) = self.inventory.insert_full(name.to_string(), item);
        Ok(&self.inventory[idx])
    }
}
