//! Error types for level loading and grid compilation.

use std::error::Error;
use std::fmt;

use skein_graph::GraphDefect;

/// A fatal problem with a level file.
///
/// Reported at load time with enough context to point at the offending
/// line; loading aborts on the first error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    /// The first line is not the expected format tag.
    UnknownFormat {
        /// The tag actually found.
        found: String,
    },
    /// A tile line has fewer than the three mandatory fields.
    MalformedLine {
        /// 1-based line number.
        line: usize,
    },
    /// Two tiles share a name.
    DuplicateTile {
        /// The repeated name.
        name: String,
    },
    /// A tile line names an unknown kind.
    UnknownKind {
        /// The unrecognized kind keyword.
        kind: String,
        /// 1-based line number.
        line: usize,
    },
    /// A tile's edge token count does not match its kind's arity.
    BadEdgeCount {
        /// The tile's name.
        name: String,
        /// The arity its kind requires.
        expected: u8,
        /// The number of edge tokens found.
        found: usize,
    },
    /// An edge token's rotation digit is missing or out of range for
    /// the target tile's arity.
    BadRotation {
        /// The offending token.
        token: String,
        /// The tile whose edge list holds it.
        name: String,
    },
    /// The level declares no player tile.
    NoPlayer,
    /// The resolved graph failed verification.
    Graph(GraphDefect),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat { found } => write!(f, "unknown level format: {found:?}"),
            Self::MalformedLine { line } => write!(f, "malformed tile line {line}"),
            Self::DuplicateTile { name } => write!(f, "repeating tile name {name:?}"),
            Self::UnknownKind { kind, line } => {
                write!(f, "unknown tile kind {kind:?} on line {line}")
            }
            Self::BadEdgeCount {
                name,
                expected,
                found,
            } => write!(
                f,
                "tile {name:?} lists {found} edges, its kind requires {expected}"
            ),
            Self::BadRotation { token, name } => {
                write!(f, "bad rotation in edge token {token:?} of tile {name:?}")
            }
            Self::NoPlayer => write!(f, "level has no player tile"),
            Self::Graph(defect) => write!(f, "malformed level: {defect}"),
        }
    }
}

impl Error for LevelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(defect) => Some(defect),
            _ => None,
        }
    }
}

impl From<GraphDefect> for LevelError {
    fn from(defect: GraphDefect) -> Self {
        Self::Graph(defect)
    }
}

/// A problem with an ASCII grid layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The layout is empty.
    EmptyGrid,
    /// The rows are not all the same width.
    RaggedRows {
        /// 0-based row index of the first short or long row.
        row: usize,
    },
    /// A cell holds a character outside the layout alphabet.
    UnknownCell {
        /// The unrecognized character.
        cell: char,
        /// 0-based column.
        x: usize,
        /// 0-based row.
        y: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid layout is empty"),
            Self::RaggedRows { row } => write!(f, "grid row {row} has a different width"),
            Self::UnknownCell { cell, x, y } => {
                write!(f, "unknown grid cell {cell:?} at ({x}, {y})")
            }
        }
    }
}

impl Error for GridError {}
