//! Core types and traits for rover grid navigation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the rover workspace:
//! positions and headings, drive commands, terminal statuses, and the
//! [`Environment`] / [`Kinematics`] traits that the navigation engine
//! composes at every command.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod direction;
pub mod error;
pub mod id;
pub mod outcome;
pub mod traits;

pub use command::{Command, CommandSeq};
pub use direction::Direction;
pub use error::CommandError;
pub use id::Position;
pub use outcome::{NavigationResult, Occupancy, Status};
pub use traits::{Environment, Kinematics};
