use super::action::Direction;

/// A cell coordinate on the lake, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one cell in a direction, staying put if that would leave a
    /// `size × size` grid
    pub fn clamped_move(&self, direction: Direction, size: usize) -> Self {
        let (d_row, d_col) = direction.delta();
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        let limit = size as isize;

        if row < 0 || row >= limit || col < 0 || col >= limit {
            return *self;
        }

        Self::new(row as usize, col as usize)
    }
}

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Start,
    Goal,
    Hazard,
    Empty,
}

impl Cell {
    /// Single-character label
    pub fn symbol(&self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Hazard => 'H',
            Cell::Empty => '.',
        }
    }
}

/// Square grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is empty
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parse a grid from rows of `S`, `G`, `H` and `.` labels
    ///
    /// Returns `None` if the rows are not square or contain unknown labels.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for symbol in row.chars() {
                let cell = match symbol {
                    'S' => Cell::Start,
                    'G' => Cell::Goal,
                    'H' => Cell::Hazard,
                    '.' => Cell::Empty,
                    _ => return None,
                };
                cells.push(cell);
            }
        }

        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.size + pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    /// Iterate over rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of hazard cells
    pub fn hazard_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Hazard).count()
    }
}

/// How an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Agent stepped onto the goal
    ReachedGoal,
    /// Agent stepped onto a hazard
    FellInHazard,
}

/// Complete lake state for one episode
#[derive(Debug, Clone, PartialEq)]
pub struct LakeState {
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
    pub agent: Position,
    pub steps: u32,
    pub total_reward: f32,
    pub outcome: Option<Outcome>,
}

impl LakeState {
    /// Create a new episode state with the agent on the start cell
    pub fn new(grid: Grid, start: Position, goal: Position) -> Self {
        Self {
            grid,
            start,
            goal,
            agent: start,
            steps: 0,
            total_reward: 0.0,
            outcome: None,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Whether the episode has ended
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_move_inside() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.clamped_move(Direction::Up, 5), Position::new(1, 2));
        assert_eq!(pos.clamped_move(Direction::Down, 5), Position::new(3, 2));
        assert_eq!(pos.clamped_move(Direction::Left, 5), Position::new(2, 1));
        assert_eq!(pos.clamped_move(Direction::Right, 5), Position::new(2, 3));
    }

    #[test]
    fn test_clamped_move_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.clamped_move(Direction::Up, 4), corner);
        assert_eq!(corner.clamped_move(Direction::Left, 4), corner);

        let far = Position::new(3, 3);
        assert_eq!(far.clamped_move(Direction::Down, 4), far);
        assert_eq!(far.clamped_move(Direction::Right, 4), far);
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(&["S.H", ".H.", "..G"]).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.get(Position::new(0, 0)), Cell::Start);
        assert_eq!(grid.get(Position::new(0, 2)), Cell::Hazard);
        assert_eq!(grid.get(Position::new(2, 2)), Cell::Goal);
        assert_eq!(grid.hazard_count(), 2);
    }

    #[test]
    fn test_grid_from_rows_rejects_bad_input() {
        assert!(Grid::from_rows(&["S.", "..G"]).is_none());
        assert!(Grid::from_rows(&["SX", ".G"]).is_none());
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::empty(4);
        assert!(grid.is_in_bounds(Position::new(0, 0)));
        assert!(grid.is_in_bounds(Position::new(3, 3)));
        assert!(!grid.is_in_bounds(Position::new(4, 0)));
        assert!(!grid.is_in_bounds(Position::new(0, 4)));
    }

    #[test]
    fn test_rows_iteration() {
        let grid = Grid::from_rows(&["SH", ".G"]).unwrap();
        let labels: Vec<String> = grid
            .rows()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect();
        assert_eq!(labels, vec!["SH", ".G"]);
    }
}
