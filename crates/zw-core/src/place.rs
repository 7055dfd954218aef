//! Directions and the exits that connect places.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// A compass-and-ladder direction label on an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from its lowercase name or single-letter shorthand.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Self::North),
            "south" | "s" => Some(Self::South),
            "east" | "e" => Some(Self::East),
            "west" | "w" => Some(Self::West),
            "up" | "u" => Some(Self::Up),
            "down" | "d" => Some(Self::Down),
            _ => None,
        }
    }

    /// The lowercase name of this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The direction pointing the opposite way. Used when building
    /// symmetric exit pairs.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A directed passage from one place toward another.
///
/// Exits are registered on their source place by the world the moment they
/// are built; a place holds at most one exit per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// The direction label on this exit.
    pub direction: Direction,
    /// The place this exit leads away from.
    pub from: EntityId,
    /// The place this exit leads to.
    pub to: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_names_and_shorthand() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("N"), Some(Direction::North));
        assert_eq!(Direction::parse("u"), Some(Direction::Up));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn opposites_are_involutions() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
