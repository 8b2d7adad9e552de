//! Level I/O for the Skein puzzle engine.
//!
//! The on-disk format is text, line oriented: a literal format tag,
//! then one line per tile naming its kind and, for every edge index in
//! order, a `<rotation_digit><neighbor_name>` token. A token naming no
//! tile in the file is the wall encoding. Flat rectangular levels are
//! a special case produced by the [`grid`] compiler from ASCII
//! layouts.
//!
//! Loading builds all tiles first, resolves edges by name second, and
//! verifies the finished graph; any malformed input is a fatal
//! [`LevelError`], never silently tolerated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod parse;
pub mod write;

pub use error::{GridError, LevelError};
pub use grid::compile_grid;
pub use parse::{parse_level, LoadedLevel, FORMAT_TAG};
pub use write::write_level;
