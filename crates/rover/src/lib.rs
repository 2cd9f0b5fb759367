//! Rover: a grid navigation engine for a command-driven planetary rover.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! rover sub-crates. For most users, adding `rover` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rover::prelude::*;
//!
//! // A 5x5 grid with two obstacles; the rover starts at (0, 0) facing North.
//! let result = navigate_rover(5, [Position::new(1, 2), Position::new(3, 3)], "MMRM");
//! assert_eq!(result.final_position, Position::new(0, 2));
//! assert_eq!(result.final_direction, Direction::East);
//! assert_eq!(result.status, Status::ObstacleEncountered);
//! assert_eq!(result.status.as_str(), "Obstacle encountered");
//!
//! // Missions that break the rules never move the rover.
//! let rejected = navigate_rover(5, Vec::new(), "LMXMLM");
//! assert_eq!(rejected, NavigationResult::invalid_input());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rover-core` | Positions, directions, commands, results, core traits |
//! | [`grid`] | `rover-grid` | The square obstacle grid |
//! | [`kinematics`] | `rover-kinematics` | The unit-step rover |
//! | [`engine`] | `rover-engine` | Mission validation and the navigation engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`rover-core`).
///
/// Contains [`types::Position`], [`types::Direction`], [`types::Command`],
/// [`types::NavigationResult`], and the two seams the engine is generic
/// over: [`types::Environment`] and [`types::Kinematics`].
pub use rover_core as types;

/// The square obstacle grid (`rover-grid`).
pub use rover_grid as grid;

/// The unit-step rover (`rover-kinematics`).
pub use rover_kinematics as kinematics;

/// Mission validation and the navigation engine (`rover-engine`).
///
/// [`engine::NavigationEngine`] builds a fresh grid and rover per call;
/// [`engine::drive`] runs the interpretation loop on caller-owned parts.
pub use rover_engine as engine;

/// Common imports for typical rover usage.
///
/// ```rust
/// use rover::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rover_core::{
        Command, Direction, Environment, Kinematics, NavigationResult, Occupancy, Position,
        Status,
    };

    // Errors
    pub use rover_core::CommandError;
    pub use rover_engine::ConfigError;

    // Implementations
    pub use rover_grid::GridEnvironment;
    pub use rover_kinematics::Rover;

    // Engine
    pub use rover_engine::{
        navigate_rover, MissionConfig, NavigationEngine, NavigationStats,
    };
}
