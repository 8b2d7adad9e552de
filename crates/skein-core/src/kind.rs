//! The closed set of tile kinds and their fixed attribute table.

use std::fmt;

/// The kind of a tile.
///
/// The set is closed and exhaustive: every behavioral attribute a tile
/// kind carries (edge arity, opacity, movability) is a total function of
/// the tag, looked up through the const methods below rather than
/// through dynamic dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Walkable floor. Consumed (removed from the graph) when another
    /// tile is pushed into it.
    Empty,
    /// Walkable, but cannot be pushed: a push chain ending in glass
    /// fails unless the glass can relocate, which it never can.
    Glass,
    /// Opaque dead end. Walls are shared sentinels: they are never
    /// rewired, never removed, and never required to reciprocate edges.
    Wall,
    /// A junction occupying two graph slots, with eight edges. Portals
    /// move as a linked pair when pushed.
    Portal,
    /// A player avatar. Multiple players may exist in one level.
    Player,
    /// The winning tile. Pushing a player into it fires the win
    /// callback.
    Goal,
}

impl TileKind {
    /// All kinds, in level-format keyword order.
    pub const ALL: [TileKind; 6] = [
        TileKind::Empty,
        TileKind::Glass,
        TileKind::Wall,
        TileKind::Portal,
        TileKind::Player,
        TileKind::Goal,
    ];

    /// Number of outgoing edges a tile of this kind carries.
    ///
    /// Ordinary tiles have 4; portals occupy two slots and have 8.
    pub const fn arity(self) -> u8 {
        match self {
            TileKind::Portal => 8,
            _ => 4,
        }
    }

    /// Whether the visibility renderer recurses through this kind.
    ///
    /// Walls terminate a visibility branch; everything else lets the
    /// angular interval continue outward.
    pub const fn see_through(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    /// Whether a push chain may relocate (or consume) this kind.
    ///
    /// `Empty` is consumed rather than pushed; `Player` and `Portal`
    /// relocate. Everything else blocks the chain.
    pub const fn can_move(self) -> bool {
        matches!(self, TileKind::Empty | TileKind::Player | TileKind::Portal)
    }

    /// This kind's index into [`TileKind::ALL`].
    ///
    /// Declaration order and `ALL` order coincide, so the cast is the
    /// lookup. Dense per-kind tables index by this.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// The level-format keyword for this kind.
    pub const fn token(self) -> &'static str {
        match self {
            TileKind::Empty => "empty",
            TileKind::Glass => "glass",
            TileKind::Wall => "wall",
            TileKind::Portal => "portal",
            TileKind::Player => "player",
            TileKind::Goal => "goal",
        }
    }

    /// Parse a level-format keyword.
    pub fn parse(token: &str) -> Option<TileKind> {
        TileKind::ALL.into_iter().find(|k| k.token() == token)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
