//! Arena-backed tile graph for the Skein puzzle engine.
//!
//! The world is not a flat grid but an arbitrary graph of tiles joined
//! by oriented, rotation-aware edges, so locally Euclidean-looking
//! rooms may globally violate Euclidean geometry. This crate owns the
//! entity model and its invariants:
//!
//! - [`Tile`] and [`Graph`]: stable-index arena storage; edges are
//!   [`Facing`](skein_core::Facing) values into the arena, so cycles
//!   and back-references are trivially representable.
//! - The pending-edit overlay, a copy-on-write side table that shadows
//!   committed edge lists while a move transaction is being built, and
//!   is installed or dropped wholesale.
//! - The [`verify`] module: mutual-adjacency and local vertex checks,
//!   with degenerate-but-playable configurations reported as
//!   [`Singularity`] diagnostics rather than errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
pub mod tile;
pub mod verify;

pub use graph::Graph;
pub use tile::Tile;
pub use verify::{GraphDefect, Singularity, SingularityKind, VerifyReport};
