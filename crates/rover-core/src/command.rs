//! Drive commands and command-string decoding.

use crate::error::CommandError;
use smallvec::SmallVec;
use std::fmt;

/// A decoded command sequence.
///
/// Uses `SmallVec<[Command; 32]>` so typical command strings are decoded
/// without a heap allocation; longer strings spill transparently.
pub type CommandSeq = SmallVec<[Command; 32]>;

/// One discrete rover command.
///
/// # Examples
///
/// ```
/// use rover_core::Command;
///
/// let cmds = Command::parse_sequence("MLR").unwrap();
/// assert_eq!(
///     cmds.as_slice(),
///     &[Command::Move, Command::TurnLeft, Command::TurnRight]
/// );
/// assert!(Command::parse_sequence("MXM").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `M`: advance one cell in the current heading.
    Move,
    /// `L`: rotate 90° counter-clockwise.
    TurnLeft,
    /// `R`: rotate 90° clockwise.
    TurnRight,
}

impl Command {
    /// The character this command is written as.
    pub fn symbol(self) -> char {
        match self {
            Command::Move => 'M',
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
        }
    }

    /// Decode a single command character.
    ///
    /// Decoding is case-sensitive: only upper-case `M`, `L` and `R`
    /// are commands.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'M' => Some(Command::Move),
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            _ => None,
        }
    }

    /// Decode a whole command string.
    ///
    /// Stops at the first character outside the alphabet and reports it
    /// together with its character index. An empty string decodes to an
    /// empty sequence.
    pub fn parse_sequence(commands: &str) -> Result<CommandSeq, CommandError> {
        commands
            .chars()
            .enumerate()
            .map(|(index, found)| {
                Command::from_symbol(found).ok_or(CommandError::UnknownCommand { index, found })
            })
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Command {
    type Error = CommandError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Command::from_symbol(symbol).ok_or(CommandError::UnknownCommand {
            index: 0,
            found: symbol,
        })
    }
}
