//! The live tile set: arena storage plus the pending-edit overlay.

use indexmap::IndexMap;
use skein_core::{EdgeList, Facing, TileId, TileKind};

use crate::tile::Tile;

/// Arena of tiles with stable indices and a copy-on-write edit overlay.
///
/// Slot 0 always holds the shared wall sentinel: every unresolvable or
/// deliberately blocked edge points at it. The sentinel is never
/// rewired, never removed, and never verified; walls are dead ends
/// shared by the whole graph.
///
/// Removed tiles leave a permanently vacant slot, so a stale
/// [`TileId`] is detectable (and reported by the verifier as an
/// orphaned reference) rather than silently aliased to a new tile.
///
/// # Edit overlay
///
/// [`set_edge_one_way`](Graph::set_edge_one_way) and
/// [`set_edge_mutual`](Graph::set_edge_mutual) never touch committed
/// edge lists. The first edit to a tile copies its committed list into
/// a side table; reads through [`neighbor`](Graph::neighbor) prefer
/// that overlay, so a move transaction observes its own speculative
/// writes. [`commit_edits`](Graph::commit_edits) installs every overlay
/// entry; [`discard_edits`](Graph::discard_edits) drops them all,
/// leaving the committed lists byte-identical to before the
/// transaction.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    slots: Vec<Option<Tile>>,
    pending: IndexMap<TileId, EdgeList>,
}

impl Graph {
    /// The shared wall sentinel's id.
    pub const WALL: TileId = TileId(0);

    /// An empty graph holding only the wall sentinel.
    pub fn new() -> Graph {
        Graph {
            slots: vec![Some(Tile::new("wall", TileKind::Wall))],
            pending: IndexMap::new(),
        }
    }

    /// A facing into the wall sentinel.
    pub fn wall(&self) -> Facing {
        Facing::new(Self::WALL, 0)
    }

    /// Insert a tile, returning its stable id.
    ///
    /// A tile with an empty name is given a generated one (tiles
    /// synthesized mid-push have no author-chosen name).
    pub fn insert(&mut self, mut tile: Tile) -> TileId {
        let id = TileId(self.slots.len() as u32);
        if tile.name.is_empty() {
            tile.name = format!("~{id}");
        }
        self.slots.push(Some(tile));
        id
    }

    /// Remove a tile from the live set, returning it.
    ///
    /// Returns `None` for an already-vacant slot. The wall sentinel
    /// cannot be removed.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        assert_ne!(id, Self::WALL, "the wall sentinel is never removed");
        self.pending.shift_remove(&id);
        self.slots.get_mut(id.index())?.take()
    }

    /// Whether `id` names a live tile.
    pub fn contains(&self, id: TileId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    /// The tile at `id`, if live.
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots.get(id.index())?.as_ref()
    }

    /// The tile at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant; ids held by the engine always name
    /// live tiles.
    pub fn tile(&self, id: TileId) -> &Tile {
        self.get(id).unwrap_or_else(|| panic!("vacant tile slot {id}"))
    }

    /// Mutable access to the tile at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant.
    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        match self.slots.get_mut(id.index()) {
            Some(Some(tile)) => tile,
            _ => panic!("vacant tile slot {id}"),
        }
    }

    /// The kind of the tile at `id`.
    pub fn kind(&self, id: TileId) -> TileKind {
        self.tile(id).kind
    }

    /// Whether a facing points into a wall.
    pub fn is_wall(&self, f: Facing) -> bool {
        self.kind(f.tile) == TileKind::Wall
    }

    /// Number of live tiles, the sentinel included.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the graph holds no tiles at all (it never does once
    /// constructed; the sentinel is always live).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over live tiles in slot (insertion) order.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((TileId(i as u32), slot.as_ref()?)))
    }

    // ── Oriented traversal ───────────────────────────────────────

    /// The edge-list index a facing's edge `i` resolves to.
    ///
    /// The facing's rotation is added before reduction modulo arity, so
    /// negative and out-of-range indices are meaningful ("edge -1" is
    /// one step counter-rotated from the frame's back edge).
    pub fn edge_index(&self, f: Facing, i: i32) -> usize {
        let arity = self.tile(f.tile).arity() as i32;
        (i + f.rot as i32).rem_euclid(arity) as usize
    }

    /// The facing one step through edge `i`, in the frame of `f`.
    ///
    /// Prefers the pending overlay while a transaction is in flight.
    ///
    /// # Panics
    ///
    /// Panics if the tile's edge list has not been resolved to its full
    /// arity (the level loader rejects such graphs).
    pub fn neighbor(&self, f: Facing, i: i32) -> Facing {
        let idx = self.edge_index(f, i);
        match self.pending.get(&f.tile) {
            Some(edges) => edges[idx],
            None => self.tile(f.tile).edges[idx],
        }
    }

    /// The facing with its rotation advanced by `d`, modulo arity.
    pub fn rotate(&self, f: Facing, d: i32) -> Facing {
        let arity = self.tile(f.tile).arity() as i32;
        Facing::new(f.tile, (f.rot as i32 + d).rem_euclid(arity) as u8)
    }

    // ── Speculative edits ────────────────────────────────────────

    /// Set edge `i` of `f`'s tile (in `f`'s frame) to `target`,
    /// without touching the reverse edge.
    ///
    /// The first edit to a tile copies its committed edge list into the
    /// overlay; the tile is recorded as changed exactly once.
    pub fn set_edge_one_way(&mut self, f: Facing, i: i32, target: Facing) {
        let idx = self.edge_index(f, i);
        if !self.pending.contains_key(&f.tile) {
            let committed = self.tile(f.tile).edges.clone();
            self.pending.insert(f.tile, committed);
        }
        if let Some(edges) = self.pending.get_mut(&f.tile) {
            edges[idx] = target;
        }
    }

    /// Set a tile's committed edge list directly.
    ///
    /// Used by the level loader while resolving a freshly parsed graph;
    /// live graphs are only ever edited through the overlay.
    pub fn resolve_edges(&mut self, id: TileId, edges: EdgeList) {
        self.tile_mut(id).edges = edges;
    }

    /// Set edge `i` of `f`'s tile to `target`, and, unless `target` is
    /// a wall, set `target`'s back edge (edge 0 in its own frame) to
    /// point back through `f.rotate(i)`.
    pub fn set_edge_mutual(&mut self, f: Facing, i: i32, target: Facing) {
        self.set_edge_one_way(f, i, target);
        if !self.is_wall(target) {
            let back = self.rotate(f, i);
            self.set_edge_one_way(target, 0, back);
        }
    }

    /// Whether a transaction currently has uncommitted edits.
    pub fn has_pending_edits(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Tiles touched by the pending transaction, in first-edit order.
    pub fn pending_tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.pending.keys().copied()
    }

    /// Install every overlay entry as its tile's committed edge list.
    pub fn commit_edits(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for (id, edges) in pending {
            self.tile_mut(id).edges = edges;
        }
    }

    /// Drop every overlay entry, leaving committed state untouched.
    pub fn discard_edits(&mut self) {
        self.pending.clear();
    }
}
