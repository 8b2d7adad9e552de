//! A playable session: a graph, its players, and turn handling.

use std::error::Error;
use std::fmt;

use skein_core::Facing;
use skein_graph::{Graph, GraphDefect, Singularity};

use crate::push::move_player;

/// Direction of a step, relative to the active player's facing.
///
/// The mover walks through edge 2 of its own frame, so a step first
/// rotates the frame by the direction's offset and then pushes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MoveDir {
    /// Straight ahead.
    Forward,
    /// One quarter turn widdershins.
    Left,
    /// Directly behind.
    Back,
    /// One quarter turn clockwise.
    Right,
}

impl MoveDir {
    /// Rotation offset applied to the player's frame before pushing.
    pub fn offset(self) -> i32 {
        match self {
            MoveDir::Forward => 0,
            MoveDir::Left => 1,
            MoveDir::Back => 2,
            MoveDir::Right => 3,
        }
    }
}

/// Errors from session construction and player selection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// A session needs at least one player tile.
    NoPlayers,
    /// `select` addressed a player index past the roster.
    NoSuchPlayer {
        /// The offending index.
        index: usize,
        /// How many players the session has.
        count: usize,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoPlayers => write!(f, "session has no player tiles"),
            SessionError::NoSuchPlayer { index, count } => {
                write!(f, "no player {index} (session has {count})")
            }
        }
    }
}

impl Error for SessionError {}

/// Outcome of one step, after verification.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Whether the push went through.
    pub moved: bool,
    /// Whether this step reached a goal.
    pub won: bool,
    /// Vertex diagnostics from the post-step verification.
    pub singularities: Vec<Singularity>,
}

/// One game in progress.
///
/// Owns the graph; callers steer through [`step`](Session::step) and
/// [`turn`](Session::turn) and observe through the accessors. Reaching
/// a goal latches [`won`](Session::won) even though the winning push
/// itself rolls back (goals never move, so the chain cannot commit).
#[derive(Debug)]
pub struct Session {
    graph: Graph,
    players: Vec<Facing>,
    active: usize,
    won: bool,
}

impl Session {
    /// Build a session over a verified graph and its player roster.
    pub fn new(graph: Graph, players: Vec<Facing>) -> Result<Self, SessionError> {
        if players.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        Ok(Session {
            graph,
            players,
            active: 0,
            won: false,
        })
    }

    /// The graph as of the last committed step.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The active player's facing.
    pub fn active(&self) -> Facing {
        self.players[self.active]
    }

    /// Every player, in declaration order.
    pub fn players(&self) -> &[Facing] {
        &self.players
    }

    /// Make player `index` the active one.
    pub fn select(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.players.len() {
            return Err(SessionError::NoSuchPlayer {
                index,
                count: self.players.len(),
            });
        }
        self.active = index;
        Ok(())
    }

    /// Whether any step has reached a goal.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Rotate the active player's frame in place by `d` quarter turns.
    pub fn turn(&mut self, d: i32) {
        let f = self.players[self.active];
        self.players[self.active] = self.graph.rotate(f, d);
    }

    /// Step the active player in `dir`.
    ///
    /// The player tile itself keeps its identity and facing; only the
    /// graph around it rewires. A blocked step is `Ok` with
    /// `moved == false`; `Err` means the verifier found the committed
    /// graph corrupt, which no level input should be able to cause.
    pub fn step(&mut self, dir: MoveDir) -> Result<StepOutcome, GraphDefect> {
        let mover = self.graph.rotate(self.active(), dir.offset());
        let mut won = false;
        let result = move_player(&mut self.graph, mover, || won = true)?;
        if won {
            self.won = true;
        }
        Ok(StepOutcome {
            moved: result.moved,
            won,
            singularities: result.singularities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::TileKind;
    use skein_graph::{verify, Tile};
    use smallvec::smallvec;

    /// A 1x3 corridor with the player at the bottom, facing up.
    fn corridor(top: TileKind) -> Session {
        let mut g = Graph::new();
        let p = g.insert(Tile::new("p", TileKind::Player));
        let e = g.insert(Tile::new("e", TileKind::Empty));
        let t = g.insert(Tile::new("t", top));
        let w = g.wall();
        g.tile_mut(p).edges = smallvec![w, w, Facing::new(e, 0), w];
        g.tile_mut(e).edges = smallvec![Facing::new(p, 2), w, Facing::new(t, 0), w];
        g.tile_mut(t).edges = smallvec![Facing::new(e, 2), w, w, w];
        verify::verify_all(&g).unwrap();
        Session::new(g, vec![Facing::new(p, 0)]).unwrap()
    }

    #[test]
    fn a_session_needs_players() {
        assert_eq!(
            Session::new(Graph::new(), vec![]).unwrap_err(),
            SessionError::NoPlayers
        );
    }

    #[test]
    fn selecting_past_the_roster_fails() {
        let mut s = corridor(TileKind::Glass);
        assert!(s.select(0).is_ok());
        assert_eq!(
            s.select(1).unwrap_err(),
            SessionError::NoSuchPlayer { index: 1, count: 1 }
        );
    }

    #[test]
    fn stepping_forward_then_blocked() {
        let mut s = corridor(TileKind::Glass);
        assert!(s.step(MoveDir::Forward).unwrap().moved);
        assert!(!s.step(MoveDir::Forward).unwrap().moved);
        assert!(!s.won());
    }

    #[test]
    fn sideways_steps_are_walled_off() {
        let mut s = corridor(TileKind::Glass);
        assert!(!s.step(MoveDir::Left).unwrap().moved);
        assert!(!s.step(MoveDir::Right).unwrap().moved);
    }

    #[test]
    fn stepping_back_from_the_start_is_blocked() {
        let mut s = corridor(TileKind::Glass);
        assert!(!s.step(MoveDir::Back).unwrap().moved);
    }

    #[test]
    fn reaching_a_goal_latches_won() {
        let mut s = corridor(TileKind::Goal);
        assert!(s.step(MoveDir::Forward).unwrap().moved);
        let outcome = s.step(MoveDir::Forward).unwrap();
        assert!(outcome.won);
        assert!(!outcome.moved);
        assert!(s.won());
        // Further blocked attempts keep the latch set.
        assert!(!s.step(MoveDir::Forward).unwrap().moved);
        assert!(s.won());
    }

    #[test]
    fn turning_rotates_the_frame_in_place() {
        let mut s = corridor(TileKind::Glass);
        let before = s.active();
        s.turn(1);
        assert_eq!(s.active().tile, before.tile);
        assert_eq!(s.active().rot, 1);
        s.turn(-1);
        assert_eq!(s.active(), before);
    }
}
