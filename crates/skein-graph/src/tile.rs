//! The tile entity.

use skein_core::{EdgeList, TileKind};

/// A graph node: kind, stable name, committed edge list, and the
/// transient move-transaction flag.
///
/// The committed `edges` list is only ever replaced through the owning
/// [`Graph`](crate::Graph)'s overlay commit; the move engine never
/// writes it directly.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Stable display name. Tiles synthesized during a push get a
    /// generated name from the arena.
    pub name: String,
    /// The tile's kind tag.
    pub kind: TileKind,
    /// Committed outgoing edges, `kind.arity()` long once resolved.
    pub edges: EdgeList,
    /// Set while a move transaction has visited this tile; guards the
    /// push recursion against cycles.
    pub is_moving: bool,
}

impl Tile {
    /// A tile with no edges yet (resolved later by the level loader or
    /// wired up by the move engine).
    pub fn new(name: impl Into<String>, kind: TileKind) -> Tile {
        Tile {
            name: name.into(),
            kind,
            edges: EdgeList::new(),
            is_moving: false,
        }
    }

    /// Number of edges this tile's kind carries.
    pub fn arity(&self) -> u8 {
        self.kind.arity()
    }
}
