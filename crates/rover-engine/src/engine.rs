//! The navigation engine and its command-interpretation loop.
//!
//! # Ownership model
//!
//! [`NavigationEngine`] holds only its two factories. Every call builds a
//! fresh environment and rover through them, drives the rover, and drops
//! both before returning, so no state survives from one call to the next.
//! Concurrent callers share an engine without locking.

use indexmap::IndexSet;
use log::{debug, trace};
use rover_core::{
    Command, Direction, Environment, Kinematics, NavigationResult, Position, Status,
};
use rover_grid::GridEnvironment;
use rover_kinematics::Rover;

use crate::config::MissionConfig;
use crate::stats::NavigationStats;

/// Factory type of the default environment.
pub type GridFactory = fn(i32, &IndexSet<Position>) -> GridEnvironment;

/// Factory type of the default rover.
pub type RoverFactory = fn(Position, Direction) -> Rover;

/// Engine wired to the computed grid and the kinematic rover.
pub type DefaultEngine = NavigationEngine<GridFactory, RoverFactory>;

// Compile-time assertion: the default engine can be shared across threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<DefaultEngine>();
    }
};

fn build_grid(size: i32, obstacles: &IndexSet<Position>) -> GridEnvironment {
    GridEnvironment::new(size, obstacles.iter().copied())
}

fn build_rover(start: Position, heading: Direction) -> Rover {
    Rover::at(start, heading)
}

// ── NavigationEngine ────────────────────────────────────────────

/// Interprets rover command strings against an obstacle grid.
///
/// Generic over the factories that build the environment and the rover,
/// so tests can substitute scripted doubles. [`NavigationEngine::new`]
/// gives the production wiring.
///
/// # Example
///
/// ```
/// use rover_core::{Direction, Position, Status};
/// use rover_engine::NavigationEngine;
///
/// let engine = NavigationEngine::new();
/// let result = engine.navigate(100, Vec::new(), "RMMMMM");
/// assert_eq!(result.final_position, Position::new(5, 0));
/// assert_eq!(result.final_direction, Direction::East);
/// assert_eq!(result.status, Status::Success);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NavigationEngine<EF, RF> {
    env_factory: EF,
    rover_factory: RF,
}

impl NavigationEngine<GridFactory, RoverFactory> {
    /// Engine using [`GridEnvironment`] and [`Rover`].
    pub fn new() -> Self {
        Self::with_factories(build_grid, build_rover)
    }
}

impl Default for NavigationEngine<GridFactory, RoverFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<EF, RF> NavigationEngine<EF, RF> {
    /// Start position of every run.
    pub const START: Position = Position::ORIGIN;

    /// Start heading of every run.
    pub const START_HEADING: Direction = Direction::North;

    /// Engine building its environment and rover through the given
    /// factories. Each factory is called once per accepted mission.
    pub fn with_factories<E, K>(env_factory: EF, rover_factory: RF) -> Self
    where
        EF: Fn(i32, &IndexSet<Position>) -> E,
        RF: Fn(Position, Direction) -> K,
        E: Environment,
        K: Kinematics,
    {
        Self {
            env_factory,
            rover_factory,
        }
    }

    /// Navigate a rover from `(0, 0)` facing North.
    ///
    /// Returns [`Status::InvalidInput`] at the origin if the mission fails
    /// validation; otherwise the pose after the last command, or the pose
    /// before the first blocked move.
    pub fn navigate<E, K>(
        &self,
        size: i32,
        obstacles: impl IntoIterator<Item = Position>,
        commands: &str,
    ) -> NavigationResult
    where
        EF: Fn(i32, &IndexSet<Position>) -> E,
        RF: Fn(Position, Direction) -> K,
        E: Environment,
        K: Kinematics,
    {
        self.run(&MissionConfig::new(size, obstacles, commands))
    }

    /// Navigate a prepared mission.
    pub fn run<E, K>(&self, mission: &MissionConfig) -> NavigationResult
    where
        EF: Fn(i32, &IndexSet<Position>) -> E,
        RF: Fn(Position, Direction) -> K,
        E: Environment,
        K: Kinematics,
    {
        self.run_with_stats(mission).0
    }

    /// Like [`navigate`](Self::navigate), also returning run counters.
    pub fn navigate_with_stats<E, K>(
        &self,
        size: i32,
        obstacles: impl IntoIterator<Item = Position>,
        commands: &str,
    ) -> (NavigationResult, NavigationStats)
    where
        EF: Fn(i32, &IndexSet<Position>) -> E,
        RF: Fn(Position, Direction) -> K,
        E: Environment,
        K: Kinematics,
    {
        self.run_with_stats(&MissionConfig::new(size, obstacles, commands))
    }

    /// Like [`run`](Self::run), also returning run counters.
    pub fn run_with_stats<E, K>(&self, mission: &MissionConfig) -> (NavigationResult, NavigationStats)
    where
        EF: Fn(i32, &IndexSet<Position>) -> E,
        RF: Fn(Position, Direction) -> K,
        E: Environment,
        K: Kinematics,
    {
        let commands = match mission.compile() {
            Ok(commands) => commands,
            Err(e) => {
                debug!("mission rejected: {e}");
                return (NavigationResult::invalid_input(), NavigationStats::default());
            }
        };

        let env = (self.env_factory)(mission.size, &mission.obstacles);
        let mut rover = (self.rover_factory)(Self::START, Self::START_HEADING);
        drive(&env, &mut rover, &commands)
    }
}

// ── Interpretation loop ─────────────────────────────────────────

/// Interpret `commands` against `env`, mutating `rover` in place.
///
/// Turns always apply. A move first peeks the target cell and commits only
/// if `env` reports it clear; otherwise interpretation stops and the result
/// carries the pose from before the blocked move. No command after a
/// blocked move is looked at.
pub fn drive<E, K>(env: &E, rover: &mut K, commands: &[Command]) -> (NavigationResult, NavigationStats)
where
    E: Environment + ?Sized,
    K: Kinematics + ?Sized,
{
    let mut stats = NavigationStats::default();

    for (index, &command) in commands.iter().enumerate() {
        stats.commands_processed += 1;
        match command {
            Command::Move => {
                let target = rover.peek_move();
                let occupancy = env.can_occupy(target);
                if !occupancy.is_clear() {
                    stats.halted_at = Some(index);
                    let status = Status::from(occupancy);
                    debug!(
                        "halted at command {index}: {status} moving to {target} from {}",
                        rover.position()
                    );
                    return (
                        NavigationResult::new(rover.position(), rover.direction(), status),
                        stats,
                    );
                }
                rover.move_forward();
                stats.moves += 1;
            }
            Command::TurnLeft => {
                rover.turn_left();
                stats.left_turns += 1;
            }
            Command::TurnRight => {
                rover.turn_right();
                stats.right_turns += 1;
            }
        }
        trace!(
            "command {index} ({command}): at {} facing {}",
            rover.position(),
            rover.direction()
        );
    }

    (
        NavigationResult::new(rover.position(), rover.direction(), Status::Success),
        stats,
    )
}

/// Navigate a rover with the default engine.
///
/// Shorthand for `NavigationEngine::new().navigate(size, obstacles, commands)`.
pub fn navigate_rover(
    size: i32,
    obstacles: impl IntoIterator<Item = Position>,
    commands: &str,
) -> NavigationResult {
    NavigationEngine::new().navigate(size, obstacles, commands)
}
