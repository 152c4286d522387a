use std::{fmt, str::FromStr};

use super::{cell::Cell, coord::Coord};
use crate::error::MazeError;

/// Up, down, left, right as `(row, col)` deltas.
pub const CARDINALS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Row-major rectangular array of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    rows: u16,
    cols: u16,
}

impl Grid {
    pub fn new(rows: u16, cols: u16, cell: Cell) -> Self {
        let data = vec![cell; rows as usize * cols as usize].into_boxed_slice();
        Grid { data, rows, cols }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        coord.row == 0 || coord.col == 0 || coord.row == self.rows - 1 || coord.col == self.cols - 1
    }

    /// In bounds and not on the outer border.
    pub fn is_interior(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_boundary(coord)
    }

    /// `false` for out-of-bounds coordinates.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && self[coord].is_open()
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        coord.row as usize * self.cols as usize + coord.col as usize
    }

    /// # Panics
    /// If `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(self.in_bounds(coord), "{coord} is out of bounds");
        let idx = self.ravel_index(coord);
        self.data[idx] = cell;
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> Vec<Coord> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Coord::new(row, col)))
            .filter(|&c| self[c].is_open())
            .collect()
    }

    /// Open cells one step away from `coord`, in up, down, left, right order.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        CARDINALS
            .into_iter()
            .filter_map(move |(dr, dc)| coord.offset(dr, dc))
            .filter(|&c| self.is_open(c))
    }

    /// The grid as nested rows of `0` (open) and `1` (wall).
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.data
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().map(|c| c.as_u8()).collect())
            .collect()
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self[Coord::new(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses `#` (wall) and `.` (open) lines. Blank lines and surrounding whitespace are ignored.
impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let malformed = |line: usize, reason: String| MazeError::MalformedGrid { line, reason };

        let rows = u16::try_from(lines.len())
            .map_err(|_| malformed(lines.len(), "too many rows".to_string()))?;
        let cols = match lines.first() {
            Some(first) => u16::try_from(first.chars().count())
                .map_err(|_| malformed(1, "too many columns".to_string()))?,
            None => return Err(malformed(0, "grid is empty".to_string())),
        };

        let mut data = Vec::with_capacity(rows as usize * cols as usize);
        for (i, line) in lines.iter().enumerate() {
            let before = data.len();
            for c in line.chars() {
                let cell = Cell::from_symbol(c)
                    .ok_or_else(|| malformed(i + 1, format!("unexpected character {c:?}")))?;
                data.push(cell);
            }
            if data.len() - before != cols as usize {
                return Err(malformed(
                    i + 1,
                    format!("expected {} columns, found {}", cols, data.len() - before),
                ));
            }
        }

        Ok(Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        })
    }
}
