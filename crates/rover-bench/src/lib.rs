//! Benchmark missions for the rover navigation engine.
//!
//! - [`sweep_commands`]: a boustrophedon walk that visits every cell of an
//!   empty grid without ever being blocked
//! - [`reference_mission`]: 100x100 grid swept end to end (10K cells)
//! - [`stress_mission`]: 1000x1000 grid swept end to end (1M cells)
//! - [`random_mission`]: seeded obstacles and commands, usually halting early

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rover_core::Position;
use rover_engine::MissionConfig;

/// Commands that sweep a `size`x`size` grid column by column, starting at
/// the origin facing North.
pub fn sweep_commands(size: i32) -> String {
    let run = usize::try_from(size.saturating_sub(1)).unwrap_or(0);
    let mut commands = String::new();
    for col in 0..size {
        commands.extend(std::iter::repeat('M').take(run));
        if col + 1 < size {
            // Up-going columns turn right at the top, down-going ones left.
            let turn = if col % 2 == 0 { 'R' } else { 'L' };
            commands.push(turn);
            commands.push('M');
            commands.push(turn);
        }
    }
    commands
}

/// 100x100 empty grid, swept end to end.
pub fn reference_mission() -> MissionConfig {
    MissionConfig::new(100, Vec::new(), sweep_commands(100))
}

/// 1000x1000 empty grid, swept end to end.
pub fn stress_mission() -> MissionConfig {
    MissionConfig::new(1000, Vec::new(), sweep_commands(1000))
}

/// Seeded mission with up to `obstacles` random cells (never the origin) and
/// `commands` random commands on a `size`x`size` grid.
pub fn random_mission(seed: u64, size: i32, obstacles: usize, commands: usize) -> MissionConfig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span = size.max(1) as u32;
    // A 1x1 grid has no cell besides the origin.
    let wanted = if span > 1 { obstacles } else { 0 };

    let cells = std::iter::repeat_with(|| {
        let x = (rng.next_u32() % span) as i32;
        let y = (rng.next_u32() % span) as i32;
        Position::new(x, y)
    })
    .filter(|p| *p != Position::ORIGIN)
    .take(wanted)
    .collect::<Vec<_>>();

    let text = (0..commands)
        .map(|_| ['M', 'L', 'R'][(rng.next_u32() % 3) as usize])
        .collect::<String>();

    MissionConfig::new(size, cells, text)
}
