use core::fmt;
use core::str::FromStr;

use crate::common::ParseDirectionError;

/// Direction tiles slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names, WASD and vi keys, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(Direction, [&str; 3]); 4] = [
            (Direction::Up, ["up", "w", "k"]),
            (Direction::Down, ["down", "s", "j"]),
            (Direction::Left, ["left", "a", "h"]),
            (Direction::Right, ["right", "d", "l"]),
        ];
        let s = s.trim();
        for (dir, names) in NAMES {
            if names.iter().any(|n| n.eq_ignore_ascii_case(s)) {
                return Ok(dir);
            }
        }
        Err(ParseDirectionError)
    }
}
