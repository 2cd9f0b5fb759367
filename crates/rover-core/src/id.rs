//! Grid coordinates.

use std::fmt;

/// A cell coordinate on the navigation grid.
///
/// Both axes are 0-indexed. `x` grows to the east and `y` grows to the
/// north. The type itself enforces no range: whether a position is on the
/// grid is decided by an [`Environment`](crate::Environment).
///
/// # Examples
///
/// ```
/// use rover_core::Position;
///
/// let p = Position::new(1, 2);
/// assert_eq!(p.offset(0, 1), Position::new(1, 3));
/// assert_eq!(Position::from((1, 2)), p);
/// assert_eq!(p.to_string(), "(1, 2)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing eastward.
    pub x: i32,
    /// Row, growing northward.
    pub y: i32,
}

impl Position {
    /// The grid origin `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position from its two coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the position shifted by `(dx, dy)`.
    ///
    /// Saturates at the `i32` limits instead of wrapping, so a shifted
    /// position is never mistaken for a cell on the opposite side.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Whether both coordinates lie in `[0, size)`.
    pub fn is_within(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}
