pub mod item;
pub mod player;
pub mod room;
pub mod world;
