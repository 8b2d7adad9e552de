//! Compiling rectangular ASCII layouts into the neighbors format.
//!
//! Flat grid levels are a special case of the general graph format:
//! each cell's four cardinal neighbors are written with the fixed
//! rotation offsets 2 (down), 3 (right), 0 (up), 1 (left), which makes
//! every grid link reciprocate as an edge 0 somewhere. Anything off
//! the layout, and every `#` cell, compiles to the wall encoding.

use std::fmt::Write as _;

use skein_core::TileKind;

use crate::error::GridError;

/// The layout alphabet.
fn cell_kind(cell: char) -> Option<TileKind> {
    match cell {
        ' ' => Some(TileKind::Empty),
        '*' => Some(TileKind::Glass),
        'p' => Some(TileKind::Player),
        '@' => Some(TileKind::Portal),
        '=' => Some(TileKind::Goal),
        _ => None,
    }
}

/// Compile an ASCII layout into level text.
///
/// `prefix` namespaces the generated `x_y` tile names, letting several
/// compiled grids be concatenated or hand-stitched into one file. The
/// alphabet: space (empty), `*` (glass), `p` (player), `@` (portal),
/// `=` (goal), `#` (wall). Note that a portal cell compiles with only
/// four edge tokens and will be rejected at load; portal junctions
/// need their other four edges authored by hand.
pub fn compile_grid(layout: &str, prefix: &str) -> Result<String, GridError> {
    let grid: Vec<&str> = layout.trim_end_matches('\n').split('\n').collect();
    let height = grid.len();
    let width = grid.first().map_or(0, |row| row.chars().count());
    if width == 0 {
        return Err(GridError::EmptyGrid);
    }
    let cells: Vec<Vec<char>> = grid.iter().map(|row| row.chars().collect()).collect();
    for (y, row) in cells.iter().enumerate() {
        if row.len() != width {
            return Err(GridError::RaggedRows { row: y });
        }
    }

    let name = |x: isize, y: isize| -> String {
        let wall = x < 0
            || y < 0
            || x >= width as isize
            || y >= height as isize
            || cells[y as usize][x as usize] == '#';
        if wall {
            // Unprefixed, so it never collides with a generated name.
            "wall".to_string()
        } else {
            format!("{prefix}{x}_{y}")
        }
    };

    let mut out = String::from(crate::parse::FORMAT_TAG);
    out.push('\n');
    for x in 0..width {
        for y in 0..height {
            let cell = cells[y][x];
            if cell == '#' {
                continue;
            }
            let Some(kind) = cell_kind(cell) else {
                return Err(GridError::UnknownCell { cell, x, y });
            };
            let (x, y) = (x as isize, y as isize);
            let _ = writeln!(
                out,
                "{} {} 2{} 3{} 0{} 1{}",
                name(x, y),
                kind.token(),
                name(x, y + 1),
                name(x + 1, y),
                name(x, y - 1),
                name(x - 1, y),
            );
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_level;

    #[test]
    fn compiles_and_loads_a_bordered_room() {
        let layout = "#####\n#p  #\n# * #\n#  =#\n#####";
        let text = compile_grid(layout, "r").unwrap();
        let level = parse_level(&text).unwrap();
        assert_eq!(level.players.len(), 1);
        assert!(level.singularities.is_empty());
        // 3x3 interior plus the wall sentinel.
        assert_eq!(level.graph.len(), 10);
    }

    #[test]
    fn grid_links_reciprocate_with_grid_rotations() {
        let layout = "##\np#\n #\n##";
        let text = compile_grid(layout, "c").unwrap();
        let level = parse_level(&text).unwrap();
        let g = &level.graph;
        let player = level.players[0];
        // Below the player sits the empty, through edge 0 rotation 2.
        let below = g.neighbor(player, 0);
        assert_eq!(g.tile(below.tile).name, "c0_2");
        assert_eq!(below.rot, 2);
        assert_eq!(g.neighbor(below, 0), player);
    }

    #[test]
    fn borderless_edges_compile_to_walls() {
        let layout = "p";
        let text = compile_grid(layout, "").unwrap();
        let level = parse_level(&text).unwrap();
        let g = &level.graph;
        let player = level.players[0];
        for i in 0..4 {
            assert!(g.is_wall(g.neighbor(player, i)));
        }
    }

    #[test]
    fn rejects_ragged_layouts() {
        assert_eq!(
            compile_grid("##\n###", "").unwrap_err(),
            GridError::RaggedRows { row: 1 }
        );
    }

    #[test]
    fn rejects_unknown_cells() {
        assert!(matches!(
            compile_grid("?", "").unwrap_err(),
            GridError::UnknownCell { cell: '?', .. }
        ));
    }

    #[test]
    fn rejects_empty_layouts() {
        assert_eq!(compile_grid("", "").unwrap_err(), GridError::EmptyGrid);
        assert_eq!(compile_grid("\n\n", "").unwrap_err(), GridError::EmptyGrid);
    }
}
