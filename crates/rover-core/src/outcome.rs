//! Occupancy answers, terminal statuses and the navigation result value.

use crate::direction::Direction;
use crate::id::Position;
use std::fmt;

/// Answer of an [`Environment`](crate::Environment) to "can the rover
/// occupy this cell?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// The cell is on the grid and free.
    Clear,
    /// The cell is on the grid but holds an obstacle.
    ObstacleEncountered,
    /// The cell lies outside the grid.
    OutOfBounds,
}

impl Occupancy {
    /// Whether the rover may move into the cell.
    pub fn is_clear(self) -> bool {
        matches!(self, Occupancy::Clear)
    }
}

/// Terminal classification of a navigation run.
///
/// All four values are ordinary outcomes returned in a
/// [`NavigationResult`]; none of them is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The command string was fully consumed.
    Success,
    /// A move was halted by an obstacle.
    ObstacleEncountered,
    /// A move would have left the grid.
    OutOfBounds,
    /// The mission was rejected before any command ran.
    InvalidInput,
}

impl Status {
    /// Human-readable label, as rendered in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::ObstacleEncountered => "Obstacle encountered",
            Status::OutOfBounds => "Out of bounds",
            Status::InvalidInput => "Invalid input",
        }
    }

    /// Whether the run halted on a blocked move.
    pub fn is_halt(self) -> bool {
        matches!(self, Status::ObstacleEncountered | Status::OutOfBounds)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Occupancy> for Status {
    fn from(o: Occupancy) -> Self {
        match o {
            Occupancy::Clear => Status::Success,
            Occupancy::ObstacleEncountered => Status::ObstacleEncountered,
            Occupancy::OutOfBounds => Status::OutOfBounds,
        }
    }
}

/// Final pose and status of one navigation run.
///
/// # Examples
///
/// ```
/// use rover_core::{Direction, NavigationResult, Position, Status};
///
/// let r = NavigationResult::invalid_input();
/// assert_eq!(r.final_position, Position::ORIGIN);
/// assert_eq!(r.final_direction, Direction::North);
/// assert_eq!(r.status, Status::InvalidInput);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavigationResult {
    /// Where the rover stands at the end of the run.
    pub final_position: Position,
    /// Where the rover faces at the end of the run.
    pub final_direction: Direction,
    /// Why the run ended.
    pub status: Status,
}

impl NavigationResult {
    /// Construct a result from its parts.
    pub fn new(final_position: Position, final_direction: Direction, status: Status) -> Self {
        Self {
            final_position,
            final_direction,
            status,
        }
    }

    /// The fixed result reported for a rejected mission: origin, facing
    /// North, [`Status::InvalidInput`].
    pub fn invalid_input() -> Self {
        Self::new(Position::ORIGIN, Direction::North, Status::InvalidInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(Status::Success.to_string(), "Success");
        assert_eq!(
            Status::ObstacleEncountered.to_string(),
            "Obstacle encountered"
        );
        assert_eq!(Status::OutOfBounds.to_string(), "Out of bounds");
        assert_eq!(Status::InvalidInput.to_string(), "Invalid input");
    }

    #[test]
    fn occupancy_maps_onto_status() {
        assert_eq!(Status::from(Occupancy::Clear), Status::Success);
        assert_eq!(
            Status::from(Occupancy::ObstacleEncountered),
            Status::ObstacleEncountered
        );
        assert_eq!(Status::from(Occupancy::OutOfBounds), Status::OutOfBounds);
    }

    #[test]
    fn only_clear_cells_admit_a_move() {
        assert!(Occupancy::Clear.is_clear());
        assert!(!Occupancy::ObstacleEncountered.is_clear());
        assert!(!Occupancy::OutOfBounds.is_clear());
    }

    #[test]
    fn only_blocked_moves_are_halts() {
        assert!(Status::ObstacleEncountered.is_halt());
        assert!(Status::OutOfBounds.is_halt());
        assert!(!Status::Success.is_halt());
        assert!(!Status::InvalidInput.is_halt());
    }
}
