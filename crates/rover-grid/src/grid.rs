//! Square grid with an immutable obstacle table.

use crate::cell::Cell;
use indexmap::IndexSet;
use rover_core::{Environment, Occupancy, Position};

/// A square grid of `size * size` cells, some of which hold obstacles.
///
/// Each cell has coordinate `(x, y)` where `0 <= x < size` and
/// `0 <= y < size`. Only the obstacle set is stored; cells are derived on
/// demand, so building even an `i32::MAX`-sided grid costs nothing beyond
/// the obstacles themselves.
///
/// Obstacles outside the grid are the caller's responsibility: they are
/// kept in [`obstacles()`](Self::obstacles) but never yield an obstacle
/// cell, and `can_occupy` reports such coordinates as out of bounds.
///
/// # Examples
///
/// ```
/// use rover_core::{Environment, Occupancy, Position};
/// use rover_grid::GridEnvironment;
///
/// let grid = GridEnvironment::new(5, [Position::new(1, 2), Position::new(3, 3)]);
/// assert_eq!(grid.can_occupy(Position::new(0, 0)), Occupancy::Clear);
/// assert_eq!(grid.can_occupy(Position::new(1, 2)), Occupancy::ObstacleEncountered);
/// assert_eq!(grid.can_occupy(Position::new(5, 0)), Occupancy::OutOfBounds);
/// ```
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    size: i32,
    obstacles: IndexSet<Position>,
}

impl GridEnvironment {
    /// Build a grid with side length `size` and the given obstacles.
    ///
    /// Duplicate obstacles collapse; first-seen order is kept.
    ///
    /// # Panics
    ///
    /// Panics if `size <= 0`. Mission validation rejects such sizes before
    /// a grid is ever built.
    pub fn new(size: i32, obstacles: impl IntoIterator<Item = Position>) -> Self {
        assert!(size > 0, "grid size must be positive, got {size}");
        Self {
            size,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The deduplicated obstacle set, in first-seen order.
    pub fn obstacles(&self) -> &IndexSet<Position> {
        &self.obstacles
    }

    /// Whether `position` lies on the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.size)
    }

    /// The cell at `position`, or `None` if it lies off the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if !self.contains(position) {
            return None;
        }
        Some(if self.obstacles.contains(&position) {
            Cell::obstacle(position)
        } else {
            Cell::open(position)
        })
    }

    /// Whether `position` is an on-grid obstacle cell.
    pub fn is_obstacle(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|c| c.is_obstacle)
    }

    /// Every cell, `x`-major: `(0, 0), (0, 1), .., (size - 1, size - 1)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |x| {
            (0..self.size).filter_map(move |y| self.cell(Position::new(x, y)))
        })
    }

    /// Number of cells on the grid (`size * size`).
    pub fn cell_count(&self) -> u64 {
        let side = u64::from(self.size.unsigned_abs());
        side * side
    }
}

impl Environment for GridEnvironment {
    fn size(&self) -> i32 {
        self.size
    }

    fn can_occupy(&self, position: Position) -> Occupancy {
        // Bounds first: an off-grid coordinate never reaches the obstacle set.
        match self.cell(position) {
            None => Occupancy::OutOfBounds,
            Some(cell) if cell.is_obstacle => Occupancy::ObstacleEncountered,
            Some(_) => Occupancy::Clear,
        }
    }
}
