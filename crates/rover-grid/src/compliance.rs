//! Environment trait compliance test helpers.
//!
//! These functions verify that an [`Environment`] implementation satisfies
//! the invariants the navigation engine relies on. `obstacles` is the set
//! the environment was built from.

use indexmap::IndexSet;
use rover_core::{Environment, Occupancy, Position};

/// Assert that every on-grid cell answers `Clear` or `ObstacleEncountered`,
/// and that obstacles are exactly the cells built as obstacles.
pub fn assert_on_grid_cells_match_obstacles(env: &dyn Environment, obstacles: &[Position]) {
    let blocked: IndexSet<Position> = obstacles.iter().copied().collect();
    let size = env.size();
    for x in 0..size {
        for y in 0..size {
            let p = Position::new(x, y);
            let expected = if blocked.contains(&p) {
                Occupancy::ObstacleEncountered
            } else {
                Occupancy::Clear
            };
            assert_eq!(env.can_occupy(p), expected, "wrong occupancy at {p}");
        }
    }
}

/// Assert that the ring of cells just outside the grid is out of bounds.
pub fn assert_border_is_out_of_bounds(env: &dyn Environment) {
    let size = env.size();
    for i in -1..=size {
        for p in [
            Position::new(i, -1),
            Position::new(i, size),
            Position::new(-1, i),
            Position::new(size, i),
        ] {
            assert_eq!(
                env.can_occupy(p),
                Occupancy::OutOfBounds,
                "{p} lies outside a {size}x{size} grid"
            );
        }
    }
}

/// Assert that off-grid obstacle coordinates still report out of bounds.
pub fn assert_bounds_precede_obstacles(env: &dyn Environment, obstacles: &[Position]) {
    let size = env.size();
    for &o in obstacles.iter().filter(|o| !o.is_within(size)) {
        assert_eq!(
            env.can_occupy(o),
            Occupancy::OutOfBounds,
            "off-grid obstacle {o} must report out of bounds"
        );
    }
}

/// Assert that repeated queries give the same answer.
pub fn assert_queries_deterministic(env: &dyn Environment) {
    let size = env.size();
    for x in -1..=size {
        for y in -1..=size {
            let p = Position::new(x, y);
            assert_eq!(env.can_occupy(p), env.can_occupy(p), "unstable answer at {p}");
        }
    }
}

/// Run all compliance checks on an environment.
pub fn run_full_compliance(env: &dyn Environment, obstacles: &[Position]) {
    assert_on_grid_cells_match_obstacles(env, obstacles);
    assert_border_is_out_of_bounds(env);
    assert_bounds_precede_obstacles(env, obstacles);
    assert_queries_deterministic(env);
}
