//! Parser for the textual obstacle list, e.g. `[(1,2), (3,3)]`.
//!
//! Only syntax is checked here. Coordinates outside the grid parse fine
//! and are rejected later by mission validation.

use std::error::Error;
use std::fmt;

use indexmap::IndexSet;
use rover_core::Position;

/// Syntax errors in an obstacle list.
///
/// Checks run in declaration order; the first failing one is reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObstacleParseError {
    /// Fewer than two characters after trimming.
    TooShort,
    /// The list does not open with `[`.
    MissingOpenBracket,
    /// The list does not close with `]`.
    MissingCloseBracket,
    /// A `)` without its `(`, a nested `(`, or an unclosed `(`.
    UnbalancedParentheses,
    /// Something other than a two-coordinate group where a pair belongs.
    MalformedPair {
        /// The offending text, trimmed.
        text: String,
    },
    /// A coordinate that is not a valid `i32`.
    InvalidCoordinate {
        /// The offending text, trimmed.
        text: String,
    },
}

impl fmt::Display for ObstacleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "obstacle list is too short"),
            Self::MissingOpenBracket => write!(f, "obstacle list must start with '['"),
            Self::MissingCloseBracket => write!(f, "obstacle list must end with ']'"),
            Self::UnbalancedParentheses => write!(f, "unbalanced parentheses in obstacle list"),
            Self::MalformedPair { text } => write!(f, "expected a pair like (x,y), got {text:?}"),
            Self::InvalidCoordinate { text } => write!(f, "invalid coordinate {text:?}"),
        }
    }
}

impl Error for ObstacleParseError {}

/// Parse an obstacle list. Duplicate pairs collapse, first occurrence wins
/// the ordering.
///
/// # Examples
///
/// ```
/// use rover_cli::obstacles::parse_obstacles;
/// use rover_core::Position;
///
/// let set = parse_obstacles("[(1,2), (3, 3)]").unwrap();
/// assert!(set.contains(&Position::new(1, 2)));
/// assert_eq!(set.len(), 2);
///
/// assert!(parse_obstacles("[ ]").unwrap().is_empty());
/// ```
pub fn parse_obstacles(text: &str) -> Result<IndexSet<Position>, ObstacleParseError> {
    let text = text.trim();
    if text.chars().count() < 2 {
        return Err(ObstacleParseError::TooShort);
    }
    let inner = text
        .strip_prefix('[')
        .ok_or(ObstacleParseError::MissingOpenBracket)?
        .strip_suffix(']')
        .ok_or(ObstacleParseError::MissingCloseBracket)?;
    check_balance(inner)?;

    let mut obstacles = IndexSet::new();
    let mut rest = inner.trim();
    while !rest.is_empty() {
        let body = rest
            .strip_prefix('(')
            .ok_or_else(|| malformed(rest))?;
        // Balance was checked, so every `(` has its `)`.
        let close = body.find(')').ok_or(ObstacleParseError::UnbalancedParentheses)?;
        obstacles.insert(parse_pair(&body[..close])?);

        rest = body[close + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest
            .strip_prefix(',')
            .ok_or_else(|| malformed(rest))?
            .trim_start();
        if rest.is_empty() {
            // Trailing comma.
            return Err(malformed(","));
        }
    }
    Ok(obstacles)
}

fn check_balance(inner: &str) -> Result<(), ObstacleParseError> {
    let mut open = false;
    for c in inner.chars() {
        match c {
            '(' if open => return Err(ObstacleParseError::UnbalancedParentheses),
            ')' if !open => return Err(ObstacleParseError::UnbalancedParentheses),
            '(' => open = true,
            ')' => open = false,
            _ => {}
        }
    }
    if open {
        return Err(ObstacleParseError::UnbalancedParentheses);
    }
    Ok(())
}

fn parse_pair(body: &str) -> Result<Position, ObstacleParseError> {
    let mut parts = body.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(Position::new(coordinate(x)?, coordinate(y)?)),
        _ => Err(malformed(&format!("({body})"))),
    }
}

fn coordinate(text: &str) -> Result<i32, ObstacleParseError> {
    let text = text.trim();
    text.parse().map_err(|_| ObstacleParseError::InvalidCoordinate {
        text: text.to_owned(),
    })
}

fn malformed(text: &str) -> ObstacleParseError {
    ObstacleParseError::MalformedPair {
        text: text.trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn parsed(text: &str) -> Vec<Position> {
        parse_obstacles(text).unwrap().into_iter().collect()
    }

    // ── Accepted forms ──────────────────────────────────────────

    #[test]
    fn empty_lists() {
        assert!(parsed("[]").is_empty());
        assert!(parsed("[ ]").is_empty());
        assert!(parsed("  [\t]  ").is_empty());
    }

    #[test]
    fn pairs_with_and_without_spaces() {
        assert_eq!(parsed("[(1,2),(3,3)]"), vec![p(1, 2), p(3, 3)]);
        assert_eq!(parsed("[ ( 1 , 2 ) , ( 3 , 3 ) ]"), vec![p(1, 2), p(3, 3)]);
    }

    #[test]
    fn negative_and_out_of_grid_coordinates_parse() {
        assert_eq!(parsed("[(-1,0),(99,7)]"), vec![p(-1, 0), p(99, 7)]);
    }

    #[test]
    fn duplicates_collapse_in_order() {
        assert_eq!(parsed("[(2,2),(1,1),(2,2)]"), vec![p(2, 2), p(1, 1)]);
    }

    // ── Rejections, in check order ──────────────────────────────

    #[test]
    fn too_short() {
        assert_eq!(parse_obstacles(""), Err(ObstacleParseError::TooShort));
        assert_eq!(parse_obstacles("  [  "), Err(ObstacleParseError::TooShort));
    }

    #[test]
    fn missing_brackets() {
        assert_eq!(
            parse_obstacles("(1,2)]"),
            Err(ObstacleParseError::MissingOpenBracket)
        );
        assert_eq!(
            parse_obstacles("[(1,2)"),
            Err(ObstacleParseError::MissingCloseBracket)
        );
    }

    #[test]
    fn open_bracket_checked_before_close() {
        assert_eq!(parse_obstacles("ab"), Err(ObstacleParseError::MissingOpenBracket));
    }

    #[test]
    fn unbalanced_parentheses() {
        for text in ["[(1,2]", "[1,2)]", "[((1,2))]", "[(1,2)),(3,4]"] {
            assert_eq!(
                parse_obstacles(text),
                Err(ObstacleParseError::UnbalancedParentheses),
                "{text}"
            );
        }
    }

    #[test]
    fn balance_checked_before_pairs() {
        assert_eq!(
            parse_obstacles("[(a,b,c),(1,2]"),
            Err(ObstacleParseError::UnbalancedParentheses)
        );
    }

    #[test]
    fn malformed_pairs() {
        assert_eq!(
            parse_obstacles("[(1,2,3)]"),
            Err(ObstacleParseError::MalformedPair {
                text: "(1,2,3)".into()
            })
        );
        assert_eq!(
            parse_obstacles("[(1)]"),
            Err(ObstacleParseError::MalformedPair { text: "(1)".into() })
        );
        assert_eq!(
            parse_obstacles("[(1,2) (3,4)]"),
            Err(ObstacleParseError::MalformedPair {
                text: "(3,4)".into()
            })
        );
        assert_eq!(
            parse_obstacles("[(1,2),]"),
            Err(ObstacleParseError::MalformedPair { text: ",".into() })
        );
        assert_eq!(
            parse_obstacles("[1,2]"),
            Err(ObstacleParseError::MalformedPair { text: "1,2".into() })
        );
    }

    #[test]
    fn invalid_coordinates() {
        assert_eq!(
            parse_obstacles("[(1,x)]"),
            Err(ObstacleParseError::InvalidCoordinate { text: "x".into() })
        );
        assert_eq!(
            parse_obstacles("[(,2)]"),
            Err(ObstacleParseError::InvalidCoordinate { text: "".into() })
        );
        assert_eq!(
            parse_obstacles("[(1,99999999999)]"),
            Err(ObstacleParseError::InvalidCoordinate {
                text: "99999999999".into()
            })
        );
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn rendered_lists_parse_back(
            pairs in prop::collection::vec((-50i32..50, -50i32..50), 0..16),
            spaced in any::<bool>(),
        ) {
            let sep = if spaced { ", " } else { "," };
            let body: Vec<String> = pairs
                .iter()
                .map(|(x, y)| format!("({x}{sep}{y})"))
                .collect();
            let text = format!("[{}]", body.join(sep));

            let set = parse_obstacles(&text).unwrap();
            let expected: IndexSet<Position> = pairs.iter().map(|&xy| Position::from(xy)).collect();
            prop_assert_eq!(set, expected);
        }

        #[test]
        fn never_panics(text in "\\PC{0,40}") {
            let _ = parse_obstacles(&text);
        }
    }
}
