//! Navigation engine for a single rover on an obstacle grid.
//!
//! Validates a mission (grid size, obstacles, command string), builds a
//! fresh [`GridEnvironment`](rover_grid::GridEnvironment) and
//! [`Rover`](rover_kinematics::Rover) for every call, and interprets the
//! commands left to right, halting on the first blocked move.
//!
//! ```
//! use rover_core::{Direction, Position, Status};
//! use rover_engine::navigate_rover;
//!
//! let result = navigate_rover(5, [Position::new(1, 2), Position::new(3, 3)], "MMRM");
//! assert_eq!(result.final_position, Position::new(0, 2));
//! assert_eq!(result.final_direction, Direction::East);
//! assert_eq!(result.status, Status::ObstacleEncountered);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConfigError, MissionConfig};
pub use engine::{drive, navigate_rover, DefaultEngine, NavigationEngine};
pub use stats::NavigationStats;
