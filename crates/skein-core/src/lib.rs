//! Core types for the Skein tile-graph puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace: tile
//! kinds and their fixed attribute table, arena tile identifiers, and
//! the oriented reference ([`Facing`]) that is the unit of directional
//! traversal through the tile graph.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod kind;

pub use id::{Facing, TileId};
pub use kind::TileKind;

use smallvec::SmallVec;

/// A tile's ordered outgoing edge list.
///
/// Inline capacity 8 covers both arities (4 for ordinary tiles, 8 for
/// portals) without heap allocation.
pub type EdgeList = SmallVec<[Facing; 8]>;
