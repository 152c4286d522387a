use std::fmt;

/// State of a single grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Traversable.
    Open,
    /// Blocked.
    #[default]
    Wall,
}

impl Cell {
    /// Numeric form handed to renderers: `Open = 0`, `Wall = 1`.
    pub const fn as_u8(self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Character used by the plain text grid format.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
        }
    }

    pub const fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
