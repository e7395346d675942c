use crate::lake::{Cell, Grid, Position};

/// What a single rendered cell shows
///
/// Six categories: the four grid cells, plus the traversed path and the
/// agent overlaid on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Start,
    Goal,
    Hazard,
    Empty,
    Path,
    Agent,
}

impl Tile {
    pub fn symbol(&self) -> char {
        match self {
            Tile::Start => 'S',
            Tile::Goal => 'G',
            Tile::Hazard => 'H',
            Tile::Empty => '.',
            Tile::Path => '*',
            Tile::Agent => 'A',
        }
    }
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Start => Tile::Start,
            Cell::Goal => Tile::Goal,
            Cell::Hazard => Tile::Hazard,
            Cell::Empty => Tile::Empty,
        }
    }
}

/// Overlay the path and the agent on a copy of the grid
///
/// Only empty cells on the path are marked. The agent cell is always marked,
/// whatever lies underneath.
pub fn compose_tiles(grid: &Grid, path: &[Position], agent: Position) -> Vec<Vec<Tile>> {
    let mut tiles: Vec<Vec<Tile>> = grid
        .rows()
        .map(|row| row.iter().copied().map(Tile::from).collect())
        .collect();

    for pos in path {
        if !grid.is_in_bounds(*pos) {
            continue;
        }
        let tile = &mut tiles[pos.row][pos.col];
        if *tile == Tile::Empty {
            *tile = Tile::Path;
        }
    }

    if grid.is_in_bounds(agent) {
        tiles[agent.row][agent.col] = Tile::Agent;
    }

    tiles
}

/// Plain text snapshot, one grid row per line
pub fn render_text(tiles: &[Vec<Tile>]) -> String {
    let mut out = String::new();

    for row in tiles {
        let line: Vec<String> = row.iter().map(|t| t.symbol().to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out
}
