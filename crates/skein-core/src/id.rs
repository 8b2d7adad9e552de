//! Arena tile identifiers and the oriented reference type.

use std::fmt;

/// Identifies a tile slot within a graph arena.
///
/// Tile ids are stable for the lifetime of the tile: a removed tile's
/// slot is never reused within one level session, so a stale id is
/// detectable rather than silently aliased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl TileId {
    /// The slot index this id names.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An oriented reference: a tile plus a facing into it.
///
/// Traversal is always expressed through a `Facing`, never a bare
/// [`TileId`], because arriving at a tile from different directions must
/// see different local orientations of its neighbors. The rotation is
/// added modulo the tile's arity to every edge index before lookup, so
/// "edge 0" of a facing means "the edge behind me in my own frame"
/// regardless of how the tile itself is stored.
///
/// Rotation composition and neighbor lookup live on the graph (they
/// need the tile's arity); this type is pure data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Facing {
    /// The tile being faced into.
    pub tile: TileId,
    /// Rotation in `[0, arity)` applied to every edge index.
    pub rot: u8,
}

impl Facing {
    /// A facing into `tile` with the given rotation.
    pub fn new(tile: TileId, rot: u8) -> Self {
        Self { tile, rot }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rotation {}", self.tile, self.rot)
    }
}
