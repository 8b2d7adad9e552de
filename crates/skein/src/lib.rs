//! Skein: a tile-graph puzzle engine where space is a graph, not a
//! grid.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Skein sub-crates. For most users, adding `skein` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use skein::prelude::*;
//!
//! // A three-tile corridor: player, empty floor, goal.
//! let text = concat!(
//!     "skein neighbors\n",
//!     "p player 0 0 0e 0\n",
//!     "e empty 2p 0 0g 0\n",
//!     "g goal 2e 0 0 0\n",
//! );
//! let level = parse_level(text).unwrap();
//! let mut session = Session::new(level.graph, level.players).unwrap();
//!
//! // Walk onto the floor, then push into the goal.
//! assert!(session.step(MoveDir::Forward).unwrap().moved);
//! let outcome = session.step(MoveDir::Forward).unwrap();
//! assert!(outcome.won);
//! assert!(session.won());
//!
//! // Paint the view from where the player stands.
//! use skein::render::classic::ClassicTextures;
//! let frame = render(
//!     session.graph(),
//!     session.active(),
//!     Viewport::new(16, 3),
//!     &ClassicTextures::new(16),
//! );
//! assert_eq!(frame.width(), 112);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skein-core` | Tile kinds, identities, oriented facings |
//! | [`ray`] | `skein-ray` | Exact-rational sight rays and their order |
//! | [`graph`] | `skein-graph` | The tile arena, overlay edits, verifier |
//! | [`level`] | `skein-level` | The neighbors file format and grid compiler |
//! | [`engine`] | `skein-engine` | Push transactions and game sessions |
//! | [`render`] | `skein-render` | The visibility renderer and stock art |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tile kinds, identities, and oriented facings (`skein-core`).
pub use skein_core as types;

/// Exact-rational sight rays (`skein-ray`).
///
/// [`ray::Ray`] carries the total clockwise order every clipping
/// decision in the renderer reduces to.
pub use skein_ray as ray;

/// The tile arena, copy-on-write edits, and the verifier
/// (`skein-graph`).
pub use skein_graph as graph;

/// The neighbors level format, the writer, and the ASCII grid
/// compiler (`skein-level`).
pub use skein_level as level;

/// Push transactions and playable sessions (`skein-engine`).
///
/// [`engine::Session`] owns a verified graph and exposes
/// [`engine::Session::step`] as the one mutation entry point.
pub use skein_engine as engine;

/// The recursive visibility renderer (`skein-render`).
///
/// [`render::render`] paints a [`render::Frame`] from any facing;
/// [`render::classic`] holds the stock tile art.
pub use skein_render as render;

/// Common imports for typical Skein usage.
///
/// ```rust
/// use skein::prelude::*;
/// ```
pub mod prelude {
    // Identity and orientation
    pub use skein_core::{EdgeList, Facing, TileId, TileKind};

    // Graph and verification
    pub use skein_graph::{verify, Graph, GraphDefect, Singularity, SingularityKind, Tile};

    // Levels
    pub use skein_level::{
        compile_grid, parse_level, write_level, GridError, LevelError, LoadedLevel,
    };

    // Engine
    pub use skein_engine::{move_player, MoveDir, MoveResult, Session, SessionError, StepOutcome};

    // Rays and rendering
    pub use skein_ray::Ray;
    pub use skein_render::{render, Frame, Rgba, Texture, TextureProvider, Viewport};
}
