//! Parsing the neighbors format into a verified [`Graph`].

use indexmap::IndexMap;
use skein_core::{EdgeList, Facing, TileId, TileKind};
use skein_graph::{verify, Graph, Singularity, Tile};

use crate::error::LevelError;

/// The literal tag on the first line of every level file.
pub const FORMAT_TAG: &str = "skein neighbors";

/// A successfully loaded level.
#[derive(Clone, Debug)]
pub struct LoadedLevel {
    /// The verified tile graph.
    pub graph: Graph,
    /// One facing per declared player tile, in file order, rotation 0.
    /// At least one is guaranteed; which one is active is the caller's
    /// concern.
    pub players: Vec<Facing>,
    /// Non-fatal vertex diagnostics found at load time.
    pub singularities: Vec<Singularity>,
}

/// Parse and verify a level file.
///
/// Builds all tiles first, then resolves edge tokens by name, then
/// runs the full graph verifier. An edge token whose name part is
/// empty or names no tile in the file is the wall encoding; everything
/// else that is malformed is a fatal [`LevelError`].
pub fn parse_level(text: &str) -> Result<LoadedLevel, LevelError> {
    let mut lines = text.lines();
    let tag = lines.next().unwrap_or_default();
    if tag != FORMAT_TAG {
        return Err(LevelError::UnknownFormat {
            found: tag.to_string(),
        });
    }

    // Pass 1: declare every tile so edges can resolve by name in any
    // order.
    let mut graph = Graph::new();
    let mut by_name: IndexMap<&str, TileId> = IndexMap::new();
    let mut players = Vec::new();
    let mut unresolved: Vec<(TileId, Vec<&str>)> = Vec::new();
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(name), Some(kind_token)) = (fields.next(), fields.next()) else {
            return Err(LevelError::MalformedLine { line: line_no });
        };
        let Some(kind) = TileKind::parse(kind_token) else {
            return Err(LevelError::UnknownKind {
                kind: kind_token.to_string(),
                line: line_no,
            });
        };
        if by_name.contains_key(name) {
            return Err(LevelError::DuplicateTile {
                name: name.to_string(),
            });
        }
        let tokens: Vec<&str> = fields.collect();
        if tokens.len() != kind.arity() as usize {
            return Err(LevelError::BadEdgeCount {
                name: name.to_string(),
                expected: kind.arity(),
                found: tokens.len(),
            });
        }
        let id = graph.insert(Tile::new(name, kind));
        by_name.insert(name, id);
        if kind == TileKind::Player {
            players.push(Facing::new(id, 0));
        }
        unresolved.push((id, tokens));
    }
    if players.is_empty() {
        return Err(LevelError::NoPlayer);
    }

    // Pass 2: resolve edge tokens.
    for (id, tokens) in unresolved {
        let mut edges = EdgeList::new();
        for token in tokens {
            edges.push(resolve_token(&graph, &by_name, id, token)?);
        }
        graph.resolve_edges(id, edges);
    }

    // A load-time invariant failure means the file is malformed, not
    // that the engine broke.
    let report = verify::verify_all(&graph)?;
    Ok(LoadedLevel {
        graph,
        players,
        singularities: report.singularities,
    })
}

/// Resolve one `<rotation_digit><neighbor_name>` token.
fn resolve_token(
    graph: &Graph,
    by_name: &IndexMap<&str, TileId>,
    owner: TileId,
    token: &str,
) -> Result<Facing, LevelError> {
    let bad = || LevelError::BadRotation {
        token: token.to_string(),
        name: graph.tile(owner).name.clone(),
    };
    let mut chars = token.chars();
    let digit = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(bad)?;
    let name = chars.as_str();
    let Some(&target) = by_name.get(name) else {
        // The wall encoding: an empty or unresolvable name part.
        return Ok(graph.wall());
    };
    if digit >= graph.kind(target).arity() as u32 {
        return Err(bad());
    }
    Ok(Facing::new(target, digit as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A vertical 1x3 corridor in grid rotations: player at the
    /// bottom, then an empty, then the goal, walls all around. Edge 2
    /// is "up" in each tile's own frame.
    fn corridor_text() -> String {
        [
            FORMAT_TAG,
            "p0 player 0 0 0e1 0",
            "e1 empty 2p0 0 0g2 0",
            "g2 goal 2e1 0 0 0",
        ]
        .join("\n")
    }

    #[test]
    fn loads_a_corridor() {
        let level = parse_level(&corridor_text()).unwrap();
        assert_eq!(level.players.len(), 1);
        assert!(level.singularities.is_empty());
        // Wall sentinel plus three declared tiles.
        assert_eq!(level.graph.len(), 4);
        let g = &level.graph;
        let player = level.players[0];
        assert_eq!(g.kind(player.tile), TileKind::Player);
        let ahead = g.neighbor(player, 2);
        assert_eq!(g.tile(ahead.tile).name, "e1");
        // The far side's edge 0 returns through the rotated facing.
        assert_eq!(g.neighbor(ahead, 0), g.rotate(player, 2));
    }

    #[test]
    fn rejects_a_bad_tag() {
        let err = parse_level("neighbors v2\n").unwrap_err();
        assert!(matches!(err, LevelError::UnknownFormat { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let text = [FORMAT_TAG, "a player 0 0 0 0", "a empty 0 0 0 0"].join("\n");
        assert_eq!(
            parse_level(&text).unwrap_err(),
            LevelError::DuplicateTile { name: "a".into() }
        );
    }

    #[test]
    fn rejects_unknown_kinds() {
        let text = [FORMAT_TAG, "a lava 0 0 0 0"].join("\n");
        assert!(matches!(
            parse_level(&text).unwrap_err(),
            LevelError::UnknownKind { kind, line: 2 } if kind == "lava"
        ));
    }

    #[test]
    fn rejects_wrong_edge_counts() {
        let text = [FORMAT_TAG, "a player 0 0 0"].join("\n");
        assert_eq!(
            parse_level(&text).unwrap_err(),
            LevelError::BadEdgeCount {
                name: "a".into(),
                expected: 4,
                found: 3
            }
        );
        // Portals need eight tokens.
        let text = [FORMAT_TAG, "a player 0 0 0 0", "q portal 0 0 0 0"].join("\n");
        assert!(matches!(
            parse_level(&text).unwrap_err(),
            LevelError::BadEdgeCount { expected: 8, found: 4, .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_rotations() {
        // Rotation 5 into an arity-4 tile.
        let text = [FORMAT_TAG, "a player 5b 0 0 0", "b empty 0a 0 0 0"].join("\n");
        assert!(matches!(
            parse_level(&text).unwrap_err(),
            LevelError::BadRotation { .. }
        ));
    }

    #[test]
    fn rejects_playerless_levels() {
        let text = [FORMAT_TAG, "a empty 0 0 0 0"].join("\n");
        assert_eq!(parse_level(&text).unwrap_err(), LevelError::NoPlayer);
    }

    #[test]
    fn unresolvable_names_are_walls() {
        let text = [FORMAT_TAG, "a player 0nowhere 3 0elsewhere 0"].join("\n");
        let level = parse_level(&text).unwrap();
        let g = &level.graph;
        let player = level.players[0];
        for i in 0..4 {
            assert!(g.is_wall(g.neighbor(player, i)));
        }
    }

    #[test]
    fn broken_reciprocity_fails_the_load() {
        // a points at b, but b points back with the wrong rotation.
        let text = [FORMAT_TAG, "a player 0b 0 0 0", "b empty 1a 0 0 0"].join("\n");
        assert!(matches!(
            parse_level(&text).unwrap_err(),
            LevelError::Graph(_)
        ));
    }
}
