//! Test utilities and scripted doubles for rover development.
//!
//! Provides stand-ins for the core traits so the navigation engine can be
//! exercised without the real grid or rover:
//!
//! - [`ScriptedEnvironment`]: answers `can_occupy` from a script and
//!   records every queried position.
//! - [`RecordingRover`]: a kinematic rover that logs every call it gets
//!   into a shared [`CallLog`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rover_core::{Direction, Environment, Kinematics, Occupancy, Position};

/// Environment double that replays a scripted list of answers.
///
/// Each `can_occupy` call pops the next scripted [`Occupancy`]. Once the
/// script runs dry, every further query gets the `fallback` answer
/// (default [`Occupancy::Clear`]). All queried positions are recorded
/// and can be read back with [`queries`](ScriptedEnvironment::queries).
pub struct ScriptedEnvironment {
    size: i32,
    script: RefCell<VecDeque<Occupancy>>,
    fallback: Occupancy,
    queries: RefCell<Vec<Position>>,
}

impl ScriptedEnvironment {
    pub fn new(size: i32, script: impl IntoIterator<Item = Occupancy>) -> Self {
        Self {
            size,
            script: RefCell::new(script.into_iter().collect()),
            fallback: Occupancy::Clear,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// An environment that answers `answer` to every query.
    pub fn always(size: i32, answer: Occupancy) -> Self {
        Self::new(size, std::iter::empty()).with_fallback(answer)
    }

    /// Set the answer used once the script is exhausted.
    pub fn with_fallback(mut self, fallback: Occupancy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Positions passed to `can_occupy`, in call order.
    pub fn queries(&self) -> Vec<Position> {
        self.queries.borrow().clone()
    }

    /// Number of scripted answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl Environment for ScriptedEnvironment {
    fn size(&self) -> i32 {
        self.size
    }

    fn can_occupy(&self, position: Position) -> Occupancy {
        self.queries.borrow_mut().push(position);
        self.script.borrow_mut().pop_front().unwrap_or(self.fallback)
    }
}

/// One call observed by a [`RecordingRover`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverCall {
    PeekMove,
    MoveForward,
    TurnLeft,
    TurnRight,
}

/// Shared handle onto a [`RecordingRover`]'s call log.
///
/// The engine owns the rovers it builds, so tests keep a `CallLog` clone
/// to inspect what happened after the run.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<RoverCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RoverCall> {
        self.calls.borrow().clone()
    }

    /// Number of committed moves.
    pub fn move_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == RoverCall::MoveForward)
            .count()
    }

    fn push(&self, call: RoverCall) {
        self.calls.borrow_mut().push(call);
    }
}

/// Kinematic rover double that logs every state-changing or peeking call.
///
/// Motion follows the same unit-step rules as the real rover, so the
/// engine's reported pose can be asserted alongside the call log.
pub struct RecordingRover {
    position: Position,
    direction: Direction,
    log: CallLog,
}

impl RecordingRover {
    /// A rover that records into its own fresh log.
    pub fn new(position: Position, direction: Direction) -> Self {
        Self::with_log(position, direction, CallLog::new())
    }

    /// A rover that records into `log`.
    pub fn with_log(position: Position, direction: Direction, log: CallLog) -> Self {
        Self {
            position,
            direction,
            log,
        }
    }

    /// Handle onto this rover's call log.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    fn record(&self, call: RoverCall) {
        self.log.push(call);
    }
}

impl Kinematics for RecordingRover {
    fn peek_move(&self) -> Position {
        self.record(RoverCall::PeekMove);
        let (dx, dy) = self.direction.delta();
        self.position.offset(dx, dy)
    }

    fn move_forward(&mut self) {
        self.record(RoverCall::MoveForward);
        let (dx, dy) = self.direction.delta();
        self.position = self.position.offset(dx, dy);
    }

    fn turn_left(&mut self) {
        self.record(RoverCall::TurnLeft);
        self.direction = self.direction.turn_left();
    }

    fn turn_right(&mut self) {
        self.record(RoverCall::TurnRight);
        self.direction = self.direction.turn_right();
    }

    fn position(&self) -> Position {
        self.position
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
