//! Grid environment for rover navigation.
//!
//! This crate provides [`GridEnvironment`], the square obstacle grid that
//! implements [`rover_core::Environment`]. The grid is built once from a
//! side length and an obstacle set, derives cells on demand, and is
//! read-only afterwards.
//!
//! # Legality
//!
//! [`GridEnvironment::can_occupy`](rover_core::Environment::can_occupy)
//! checks bounds before obstacles, so a coordinate outside the grid is
//! always reported as out of bounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::Cell;
pub use grid::GridEnvironment;
