//! Grid: the render-ready matrix of answer letters and blocked cells.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row/column coordinate of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub row: usize,
    pub col: usize,
}

impl CellId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell-{}-{}", self.row, self.col)
    }
}

/// A single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Canonical (uppercased) correct answer for this position.
    Letter(char),
    /// Not part of any word; rendered disabled.
    Blocked,
}

impl Cell {
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(*c),
            Cell::Blocked => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }
}

/// Uppercases a single letter without changing the letter count.
///
/// Letters whose uppercase form expands to several characters (e.g. `ß`) are kept
/// as-is so word lengths and intersection indices stay aligned.
pub fn normalize_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Case-insensitive letter comparison under `normalize_letter`.
pub fn letters_match(a: char, b: char) -> bool {
    normalize_letter(a) == normalize_letter(b)
}

/// Immutable answer grid built by the layout engine.
///
/// Letter content never changes after construction; solving progress lives in
/// `session::SolvingSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    vertical_column: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from fully placed cells. Only the layout engine calls this.
    pub(crate) fn from_cells(vertical_column: usize, cells: Vec<Vec<Cell>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        Self {
            rows,
            cols,
            vertical_column,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn vertical_column(&self) -> usize {
        self.vertical_column
    }

    pub fn get(&self, id: CellId) -> Option<Cell> {
        self.cells.get(id.row)?.get(id.col).copied()
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Every letter cell in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (CellId, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.letter().map(|c| (CellId::new(row, col), c)))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Row-major matrix with `None` for blocked cells, as sent to renderers.
    pub fn to_matrix(&self) -> Vec<Vec<Option<String>>> {
        self.cells
            .iter()
            .map(|line| {
                line.iter()
                    .map(|cell| cell.letter().map(String::from))
                    .collect()
            })
            .collect()
    }
}

/// Plain-text rendering, `#` for blocked cells. Used for debug logging.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in line {
                match cell {
                    Cell::Letter(c) => write!(f, "{c}")?,
                    Cell::Blocked => write!(f, "#")?,
                }
            }
        }
        Ok(())
    }
}
