//! Move-command tokens and the board locations they name.
//!
//! Sources are a column coordinate (`A0`, `G12`, ...), the stock marker `O`,
//! or a stack marker `SA`..`SD`. Destinations are a bare column letter, `O`,
//! or a stack marker; a column row is meaningless as a destination because
//! cards always land on the end of a column.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Slot, SyntaxError};

/// Number of tableau columns, lettered `A` onwards.
pub const COLUMN_COUNT: usize = 7;
/// Number of stack (foundation) piles, addressed `SA` onwards.
pub const STACK_COUNT: usize = 4;

static SOURCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<col>[A-G])(?P<row>0|[1-9][0-9]*)|(?P<stock>O)|S(?P<stack>[A-D]))$")
        .expect("source pattern is valid")
});

static DESTINATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<col>[A-G])|(?P<stock>O)|S(?P<stack>[A-D]))$")
        .expect("destination pattern is valid")
});

/// Where the moved card (or the bottom card of a moved run) comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLocation {
    Column { column: usize, row: usize },
    Stock,
    Stack(usize),
}

/// Where the moved cards go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationLocation {
    Column(usize),
    Stock,
    Stack(usize),
}

/// A fully parsed move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: SourceLocation,
    pub destination: DestinationLocation,
}

fn letter_index(s: &str, first: u8) -> usize {
    s.as_bytes().first().map_or(0, |b| (b - first) as usize)
}

fn index_letter(index: usize, first: u8) -> char {
    (first + index as u8) as char
}

impl FromStr for SourceLocation {
    type Err = SyntaxError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || SyntaxError {
            token: token.to_string(),
            slot: Slot::Source,
        };
        let caps = SOURCE_PATTERN.captures(token).ok_or_else(invalid)?;
        if let (Some(col), Some(row)) = (caps.name("col"), caps.name("row")) {
            // Overlong rows fail to parse and count as bad syntax.
            let row = row.as_str().parse::<usize>().map_err(|_| invalid())?;
            return Ok(SourceLocation::Column {
                column: letter_index(col.as_str(), b'A'),
                row,
            });
        }
        if caps.name("stock").is_some() {
            return Ok(SourceLocation::Stock);
        }
        match caps.name("stack") {
            Some(stack) => Ok(SourceLocation::Stack(letter_index(stack.as_str(), b'A'))),
            None => Err(invalid()),
        }
    }
}

impl FromStr for DestinationLocation {
    type Err = SyntaxError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let caps = DESTINATION_PATTERN
            .captures(token)
            .ok_or_else(|| SyntaxError {
                token: token.to_string(),
                slot: Slot::Destination,
            })?;
        if let Some(col) = caps.name("col") {
            Ok(DestinationLocation::Column(letter_index(col.as_str(), b'A')))
        } else if let Some(stack) = caps.name("stack") {
            Ok(DestinationLocation::Stack(letter_index(stack.as_str(), b'A')))
        } else {
            Ok(DestinationLocation::Stock)
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Column { column, row } => {
                write!(f, "{}{}", index_letter(*column, b'A'), row)
            }
            SourceLocation::Stock => f.write_str("O"),
            SourceLocation::Stack(i) => write!(f, "S{}", index_letter(*i, b'A')),
        }
    }
}

impl fmt::Display for DestinationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationLocation::Column(i) => write!(f, "{}", index_letter(*i, b'A')),
            DestinationLocation::Stock => f.write_str("O"),
            DestinationLocation::Stack(i) => write!(f, "S{}", index_letter(*i, b'A')),
        }
    }
}

/// Parses `[command, source, destination]` into a [`MoveRequest`].
///
/// The source token is checked before the destination token. A missing
/// token is reported as an empty token in its slot.
///
/// ```
/// use solitaire_engine::location::{parse_move, DestinationLocation, SourceLocation};
///
/// let request = parse_move(&["M", "A3", "SA"]).unwrap();
/// assert_eq!(request.source, SourceLocation::Column { column: 0, row: 3 });
/// assert_eq!(request.destination, DestinationLocation::Stack(0));
///
/// let err = parse_move(&["M", "A3", "Z"]).unwrap_err();
/// assert_eq!(err.token, "Z");
/// ```
pub fn parse_move<S: AsRef<str>>(tokens: &[S]) -> Result<MoveRequest, SyntaxError> {
    let token = |i: usize| tokens.get(i).map_or("", |t| t.as_ref());
    let source = token(1).parse::<SourceLocation>()?;
    let destination = token(2).parse::<DestinationLocation>()?;
    Ok(MoveRequest {
        source,
        destination,
    })
}
