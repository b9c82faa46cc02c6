use std::fmt;
use thiserror::Error;

/// Raised when a string does not name one of the four cardinal directions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction: {0}")]
pub struct InvalidDirection(pub String);

/// Directions a room can be linked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    #[inline]
    pub fn canonical(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// The direction that leads back.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Slot index used by fixed-size neighbor tables.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl core::str::FromStr for Direction {
    type Err = InvalidDirection;

    // Exact lower-case names only; callers normalize input first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cardinal_names() {
        for dir in Direction::ALL {
            assert_eq!(dir.canonical().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn rejects_everything_else() {
        for s in ["", "up", "n", "North", "northeast", " north"] {
            assert_eq!(s.parse::<Direction>(), Err(InvalidDirection(s.to_string())));
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            assert!(!seen[dir.index()]);
            seen[dir.index()] = true;
        }
    }
}
