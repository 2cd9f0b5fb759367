//! Kinematic rover for grid navigation.
//!
//! [`Rover`] is the reference implementation of [`rover_core::Kinematics`]:
//! a position and a heading, moved one unit step at a time. It performs no
//! legality checks of its own; the navigation engine asks an
//! [`Environment`](rover_core::Environment) before committing any move.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rover;

pub use rover::Rover;
