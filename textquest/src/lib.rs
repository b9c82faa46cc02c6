pub mod banner;
pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod hardening;
pub mod import;
pub mod input;
pub mod models;
pub mod output;
pub mod rendering;

// Convenient re-exports (so call sites can do `textquest::Game`, etc.)
pub use commands::{Flow, process_command};
pub use game::{Game, GameState, Goal, Never, Snapshot, WinCondition, win_when};
pub use import::{LoadedWorld, builtin_world, load_world_file, parse_world};
pub use models::{item::Item, item::Object, player::Player, room::Room, room::RoomId, world::World};
pub use textquest_core::Direction;
