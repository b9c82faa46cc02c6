use crate::error::{ImportError, ImportResult, WorldResult};
use crate::game::{Game, Goal, Never};
use crate::hardening::{MAX_NAME_LEN, MAX_ROOMS, MAX_WORLD_BYTES};
use crate::models::item::{Item, Object};
use crate::models::room::{Room, RoomId};
use crate::models::world::World;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The world shipped with the binary.
pub const BUILTIN_WORLD: &str = include_str!("../worlds/internship.yaml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldYaml {
    pub start: String, // "start_room"
    #[serde(default)]
    pub start_message: Option<String>,
    #[serde(default)]
    pub end_message: Option<String>,
    #[serde(default)]
    pub goal: Option<GoalYaml>,
    pub rooms: Vec<RoomYaml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomYaml {
    pub id: String, // "desk_room"
    pub description: String,
    #[serde(default)]
    pub items: Vec<ItemYaml>,
    #[serde(default)]
    pub objects: Vec<ObjectYaml>,
    #[serde(default)]
    pub exits: Vec<ExitYaml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemYaml {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub pickup: Option<String>, // shown on `get`
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectYaml {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExitYaml {
    pub dir: String, // "north"
    pub to: String,  // "hallway"
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalYaml {
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A fully linked world, ready to be played.
#[derive(Debug)]
pub struct LoadedWorld {
    pub world: World,
    pub start: RoomId,
    pub start_message: Option<String>,
    pub end_message: Option<String>,
    pub goal: Option<Goal>,
}

impl LoadedWorld {
    pub fn into_game(self) -> WorldResult<Game> {
        let mut game = match self.goal {
            Some(goal) => Game::new(self.world, self.start, goal)?,
            None => Game::new(self.world, self.start, Never)?,
        };
        if let Some(msg) = self.start_message {
            game = game.with_start_message(msg);
        }
        if let Some(msg) = self.end_message {
            game = game.with_end_message(msg);
        }
        Ok(game)
    }
}

pub fn builtin_world() -> ImportResult<LoadedWorld> {
    parse_world(BUILTIN_WORLD)
}

pub fn load_world_file(path: &Path) -> ImportResult<LoadedWorld> {
    let read_err = |source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(read_err)?.len();
    if size > MAX_WORLD_BYTES {
        return Err(ImportError::TooLarge {
            size,
            limit: MAX_WORLD_BYTES,
        });
    }

    let text = fs::read_to_string(path).map_err(read_err)?;
    tracing::debug!(path = %path.display(), bytes = size, "loading world");
    parse_world(&text)
}

pub fn parse_world(text: &str) -> ImportResult<LoadedWorld> {
    let doc: WorldYaml = serde_yaml::from_str(text)?;
    build_world(doc)
}

/// Creates every room first, then applies exits with `World::join`, so a
/// single exit declaration links both rooms.
pub fn build_world(doc: WorldYaml) -> ImportResult<LoadedWorld> {
    if doc.rooms.len() > MAX_ROOMS {
        return Err(ImportError::TooManyRooms {
            count: doc.rooms.len(),
            limit: MAX_ROOMS,
        });
    }

    let mut world = World::new();
    let mut ids = Vec::with_capacity(doc.rooms.len());

    for ry in &doc.rooms {
        validate_room_semantics(ry)?;

        let mut room = Room::with_key(ry.id.as_str(), ry.description.trim_end());
        for iy in &ry.items {
            let mut item = Item::new(iy.name.as_str(), iy.description.trim_end());
            if let Some(text) = iy.pickup.as_deref() {
                item = item.with_pickup_text(text.trim_end());
            }
            room.add_item(item);
        }
        for oy in &ry.objects {
            room.add_object(Object::new(oy.name.as_str(), oy.description.trim_end()));
        }

        let id = world.add_room(room).map_err(|source| ImportError::World {
            room: ry.id.clone(),
            source,
        })?;
        ids.push(id);
    }

    for (ry, &from) in doc.rooms.iter().zip(&ids) {
        for exit in &ry.exits {
            let to = world
                .room_by_key(&exit.to)
                .ok_or_else(|| ImportError::UnknownExitTarget {
                    room: ry.id.clone(),
                    dir: exit.dir.clone(),
                    to: exit.to.clone(),
                })?;

            let dir = exit.dir.trim().to_ascii_lowercase();
            world.join(from, to, &dir).map_err(|source| ImportError::World {
                room: ry.id.clone(),
                source,
            })?;
        }
    }

    let start = world
        .room_by_key(&doc.start)
        .ok_or_else(|| ImportError::UnknownStart(doc.start.clone()))?;

    let goal = doc.goal.map(|g| resolve_goal(&world, g)).transpose()?;

    tracing::debug!(rooms = world.len(), start = %doc.start, has_goal = goal.is_some(), "world built");

    Ok(LoadedWorld {
        world,
        start,
        start_message: doc.start_message,
        end_message: doc.end_message,
        goal,
    })
}

fn resolve_goal(world: &World, g: GoalYaml) -> ImportResult<Goal> {
    if g.room.is_none() && g.items.is_empty() {
        return Err(ImportError::EmptyGoal);
    }
    let room = match g.room {
        Some(key) => Some(world.room_by_key(&key).ok_or(ImportError::UnknownGoalRoom(key))?),
        None => None,
    };
    for name in &g.items {
        validate_name("goal.items", name)?;
    }
    Ok(Goal { items: g.items, room })
}

fn validate_room_semantics(room: &RoomYaml) -> ImportResult<()> {
    validate_name("room.id", &room.id)?;
    if room.description.trim().is_empty() {
        return Err(ImportError::Validation {
            field: "room.description",
            message: format!("room {} has no description", room.id),
        });
    }
    for item in &room.items {
        validate_name("item.name", &item.name)?;
    }
    for obj in &room.objects {
        validate_name("object.name", &obj.name)?;
    }
    Ok(())
}

/// Names are typed by the player as a single lower-cased word, so anything
/// else could never be matched.
fn validate_name(field: &'static str, name: &str) -> ImportResult<()> {
    let message = if name.is_empty() {
        "must not be empty".to_string()
    } else if name.len() > MAX_NAME_LEN {
        format!("{name:?} is longer than {MAX_NAME_LEN} bytes")
    } else if name.chars().any(char::is_whitespace) {
        format!("{name:?} contains whitespace")
    } else if name.chars().any(char::is_uppercase) {
        format!("{name:?} contains upper-case letters")
    } else {
        return Ok(());
    };

    Err(ImportError::Validation { field, message })
}
