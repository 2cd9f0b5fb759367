//! Position/heading state machine.
//!
//! The two state components are independent: moves touch only the
//! position, turns touch only the heading.

use rover_core::{Direction, Kinematics, Position};

/// A rover on the integer grid.
///
/// Constructed at any pose; no validation is done here.
///
/// # Examples
///
/// ```
/// use rover_core::{Direction, Kinematics, Position};
/// use rover_kinematics::Rover;
///
/// let mut rover = Rover::new(0, 0, Direction::North);
/// assert_eq!(rover.peek_move(), Position::new(0, 1));
/// rover.move_forward();
/// rover.turn_right();
/// assert_eq!(rover.position(), Position::new(0, 1));
/// assert_eq!(rover.direction(), Direction::East);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    direction: Direction,
}

impl Rover {
    /// Create a rover at `(x, y)` facing `direction`.
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self::at(Position::new(x, y), direction)
    }

    /// Create a rover at `position` facing `direction`.
    pub fn at(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Current `(position, heading)` pair.
    pub fn pose(&self) -> (Position, Direction) {
        (self.position, self.direction)
    }
}

impl Default for Rover {
    /// A rover at the origin facing North.
    fn default() -> Self {
        Self::at(Position::ORIGIN, Direction::North)
    }
}

impl Kinematics for Rover {
    fn peek_move(&self) -> Position {
        let (dx, dy) = self.direction.delta();
        self.position.offset(dx, dy)
    }

    fn move_forward(&mut self) {
        self.position = self.peek_move();
    }

    fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    fn position(&self) -> Position {
        self.position
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
