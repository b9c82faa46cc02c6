/// Maximum size of a world file in bytes
pub const MAX_WORLD_BYTES: u64 = 1024 * 1024; // 1 MB per world
/// Maximum number of rooms in one world
pub const MAX_ROOMS: usize = 1000;
/// Maximum length of an item, object or room name
pub const MAX_NAME_LEN: usize = 64;
