//! Grid cells.

use rover_core::Position;

/// One cell of the grid.
///
/// Cells are derived from the grid's obstacle set when asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Coordinate of the cell.
    pub position: Position,
    /// Whether the rover is barred from this cell.
    pub is_obstacle: bool,
}

impl Cell {
    /// A free cell at `position`.
    pub fn open(position: Position) -> Self {
        Self {
            position,
            is_obstacle: false,
        }
    }

    /// An obstacle cell at `position`.
    pub fn obstacle(position: Position) -> Self {
        Self {
            position,
            is_obstacle: true,
        }
    }
}
