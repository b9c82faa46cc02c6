use crate::models::room::RoomId;
use std::path::PathBuf;
use textquest_core::InvalidDirection;
use thiserror::Error;

pub type WorldResult<T> = Result<T, WorldError>;
pub type ImportResult<T> = Result<T, ImportError>;
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised while building or querying the room graph. These are bugs in
/// the world definition, never the player's fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error(transparent)]
    InvalidDirection(#[from] InvalidDirection),

    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    #[error("duplicate room key: {0}")]
    DuplicateRoom(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("world file is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("world has {count} rooms, limit is {limit}")]
    TooManyRooms { count: usize, limit: usize },

    #[error("failed to parse world: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown start room: {0}")]
    UnknownStart(String),

    #[error("exit {dir} of room {room} leads to unknown room {to}")]
    UnknownExitTarget { room: String, dir: String, to: String },

    #[error("unknown goal room: {0}")]
    UnknownGoalRoom(String),

    #[error("goal must name a room or at least one item")]
    EmptyGoal,

    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("in room {room}: {source}")]
    World {
        room: String,
        #[source]
        source: WorldError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
