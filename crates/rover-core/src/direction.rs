//! Compass headings and their rotation cycle.

use std::fmt;

/// Cardinal heading of a rover.
///
/// The four values form the cycle North → East → South → West → North.
/// Turning right steps forward in that cycle, turning left steps backward.
///
/// # Examples
///
/// ```
/// use rover_core::Direction;
///
/// assert_eq!(Direction::North.turn_right(), Direction::East);
/// assert_eq!(Direction::North.turn_left(), Direction::West);
/// assert_eq!(Direction::West.delta(), (-1, 0));
/// assert_eq!(Direction::South.to_string(), "S");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Facing `+y`.
    #[default]
    North = 0,
    /// Facing `+x`.
    East = 1,
    /// Facing `-y`.
    South = 2,
    /// Facing `-x`.
    West = 3,
}

impl Direction {
    /// All headings in clockwise cycle order, starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Heading after a 90° clockwise rotation.
    pub fn turn_right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// Heading after a 90° counter-clockwise rotation.
    pub fn turn_left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    /// Returns the `(dx, dy)` unit step for this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// One-letter compass code: `N`, `E`, `S` or `W`.
    pub fn code(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parse a one-letter compass code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
