/// Direction the agent can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, ordered by their action code
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Discrete action code: 0=up, 1=down, 2=left, 3=right
    pub fn code(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Action that can be taken in the lake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move one cell in a direction (clamped at the edge)
    Move(Direction),
    /// Stay in place; unknown action codes end up here
    Stay,
}

impl Action {
    /// Convert a discrete action code to an action
    ///
    /// - 0 → Move Up
    /// - 1 → Move Down
    /// - 2 → Move Left
    /// - 3 → Move Right
    /// - other → Stay
    pub fn from_code(code: usize) -> Self {
        match code {
            0 => Action::Move(Direction::Up),
            1 => Action::Move(Direction::Down),
            2 => Action::Move(Direction::Left),
            3 => Action::Move(Direction::Right),
            _ => Action::Stay,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn test_code_mapping() {
        for direction in Direction::ALL {
            assert_eq!(Action::from_code(direction.code()), Action::Move(direction));
        }
    }

    #[test]
    fn test_unknown_codes_stay() {
        assert_eq!(Action::from_code(4), Action::Stay);
        assert_eq!(Action::from_code(999), Action::Stay);
    }
}
