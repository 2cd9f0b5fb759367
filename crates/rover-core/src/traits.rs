//! Core abstraction traits for grid legality and rover motion.

use crate::direction::Direction;
use crate::id::Position;
use crate::outcome::Occupancy;

/// Read-only answer to "may the rover stand here?".
///
/// Implemented by the computed grid in `rover-grid` and by scripted test
/// doubles. Implementations must check bounds before obstacles: a cell
/// outside the grid is [`Occupancy::OutOfBounds`] even if its
/// coordinates equal an obstacle's.
pub trait Environment {
    /// Side length of the square grid.
    fn size(&self) -> i32;

    /// Classify `position` as clear, blocked by an obstacle, or off-grid.
    fn can_occupy(&self, position: Position) -> Occupancy;
}

/// Purely kinematic rover state: a position and a heading.
///
/// Position changes only through [`move_forward`](Kinematics::move_forward)
/// and heading only through the two turns. Implementations never consult
/// an [`Environment`]; legality is the caller's concern.
pub trait Kinematics {
    /// The cell one step ahead in the current heading, without moving.
    fn peek_move(&self) -> Position;

    /// Advance one step in the current heading, unconditionally.
    fn move_forward(&mut self);

    /// Rotate 90° counter-clockwise.
    fn turn_left(&mut self);

    /// Rotate 90° clockwise.
    fn turn_right(&mut self);

    /// Current position.
    fn position(&self) -> Position;

    /// Current heading.
    fn direction(&self) -> Direction;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn size(&self) -> i32 {
        (**self).size()
    }

    fn can_occupy(&self, position: Position) -> Occupancy {
        (**self).can_occupy(position)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn size(&self) -> i32 {
        (**self).size()
    }

    fn can_occupy(&self, position: Position) -> Occupancy {
        (**self).can_occupy(position)
    }
}

impl<K: Kinematics + ?Sized> Kinematics for Box<K> {
    fn peek_move(&self) -> Position {
        (**self).peek_move()
    }

    fn move_forward(&mut self) {
        (**self).move_forward()
    }

    fn turn_left(&mut self) {
        (**self).turn_left()
    }

    fn turn_right(&mut self) {
        (**self).turn_right()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn direction(&self) -> Direction {
        (**self).direction()
    }
}
