//! Grid Layout Engine: places the vertical keyword and every horizontal word on
//! one shared coordinate system.
//!
//! # Geometry
//! - Each horizontal word is anchored on the vertical column at the first
//!   occurrence of its shared letter (`intersection_index_horizontal`).
//! - `left_extent` is the largest anchor offset, `right_extent` the largest tail.
//! - Width is `left_extent + 1 + right_extent` and the vertical column sits at
//!   `left_extent`, which yields the minimal bounding rectangle.
//!
//! The engine is pure and synchronous. It re-checks every invariant the validator
//! already enforced and fails with `LayoutError` rather than emit a corrupt grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::grid::{letters_match, normalize_letter, Cell, Grid};
use crate::puzzle::models::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("vertical keyword is empty")]
    EmptyKeyword,

    #[error("clue {clue_number}: row {row} is outside the {rows}-row grid")]
    RowOutOfRange {
        clue_number: i64,
        row: usize,
        rows: usize,
    },

    #[error("clue {clue_number}: '{word}' does not contain the intersection letter '{letter}'")]
    MissingIntersection {
        clue_number: i64,
        word: String,
        letter: char,
    },

    #[error("clues {first} and {second} both claim row {row}")]
    SharedRow { row: usize, first: i64, second: i64 },

    #[error("conflicting letters at row {row}, column {col}: '{existing}' vs '{incoming}'")]
    Conflict {
        row: usize,
        col: usize,
        existing: char,
        incoming: char,
    },
}

/// Where one horizontal word landed in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub clue_number: i64,
    pub row: usize,
    pub start_column: usize,
    pub intersection_index_horizontal: usize,
    pub length: usize,
}

/// Result of a successful layout. `placements` follows the puzzle's clue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

/// Index of the first letter in `word` matching `letter`, case-insensitively.
///
/// Repeated letters always resolve to the lowest index: `"ABABA"` crossed on `'A'`
/// anchors at 0.
pub fn find_intersection(word: &str, letter: char) -> Option<usize> {
    word.chars().position(|c| letters_match(c, letter))
}

/// Computes the grid and per-clue placements for a validated puzzle.
pub fn build_layout(puzzle: &Puzzle) -> Result<Layout, LayoutError> {
    let vertical: Vec<char> = puzzle.vertical_keyword.word.chars().collect();
    if vertical.is_empty() {
        return Err(LayoutError::EmptyKeyword);
    }
    let rows = vertical.len();

    // Pass 1: anchor every clue and measure the extents.
    let mut anchored = Vec::with_capacity(puzzle.horizontal_clues.len());
    let mut row_owner: Vec<Option<i64>> = vec![None; rows];
    let mut left_extent = 0usize;
    let mut right_extent = 0usize;

    for clue in &puzzle.horizontal_clues {
        let row = clue.intersection_index_vertical;
        let letter = *vertical.get(row).ok_or(LayoutError::RowOutOfRange {
            clue_number: clue.clue_number,
            row,
            rows,
        })?;

        if let Some(first) = row_owner[row] {
            return Err(LayoutError::SharedRow {
                row,
                first,
                second: clue.clue_number,
            });
        }
        row_owner[row] = Some(clue.clue_number);

        let anchor =
            find_intersection(&clue.word, letter).ok_or_else(|| LayoutError::MissingIntersection {
                clue_number: clue.clue_number,
                word: clue.word.clone(),
                letter,
            })?;
        let letters: Vec<char> = clue.word.chars().collect();

        left_extent = left_extent.max(anchor);
        right_extent = right_extent.max(letters.len() - anchor - 1);
        anchored.push((clue.clue_number, row, anchor, letters));
    }

    let cols = left_extent + 1 + right_extent;
    let vertical_column = left_extent;
    let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; cols]; rows];

    // Pass 2: horizontal words, then the vertical keyword over them.
    let mut placements = Vec::with_capacity(anchored.len());
    for (clue_number, row, anchor, letters) in anchored {
        let start_column = vertical_column - anchor;
        for (offset, &c) in letters.iter().enumerate() {
            place(&mut cells, row, start_column + offset, c)?;
        }
        placements.push(Placement {
            clue_number,
            row,
            start_column,
            intersection_index_horizontal: anchor,
            length: letters.len(),
        });
    }

    for (row, &c) in vertical.iter().enumerate() {
        place(&mut cells, row, vertical_column, c)?;
    }

    let cells = cells
        .into_iter()
        .map(|line| {
            line.into_iter()
                .map(|slot| slot.map_or(Cell::Blocked, Cell::Letter))
                .collect()
        })
        .collect();

    Ok(Layout {
        grid: Grid::from_cells(vertical_column, cells),
        placements,
    })
}

fn place(
    cells: &mut [Vec<Option<char>>],
    row: usize,
    col: usize,
    letter: char,
) -> Result<(), LayoutError> {
    let incoming = normalize_letter(letter);
    let slot = &mut cells[row][col];
    match *slot {
        Some(existing) if existing != incoming => Err(LayoutError::Conflict {
            row,
            col,
            existing,
            incoming,
        }),
        _ => {
            *slot = Some(incoming);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::CellId;
    use crate::puzzle::models::{HorizontalClue, PuzzleKeyword};

    fn puzzle(vertical: &str, clues: &[(i64, &str, usize)]) -> Puzzle {
        Puzzle {
            theme: "Space".to_string(),
            vertical_keyword: PuzzleKeyword {
                word: vertical.to_string(),
                clue: "Round things in orbit".to_string(),
            },
            horizontal_clues: clues
                .iter()
                .map(|&(number, word, row)| HorizontalClue {
                    clue_number: number,
                    word: word.to_string(),
                    clue: format!("clue {number}"),
                    intersection_index_vertical: row,
                })
                .collect(),
        }
    }

    fn planet() -> Puzzle {
        puzzle(
            "PLANET",
            &[
                (1, "PLAN", 0),
                (2, "Helium", 1),
                (3, "STAR", 2),
                (4, "MOON", 3),
                (5, "COMET", 4),
                (6, "ORBIT", 5),
            ],
        )
    }

    #[test]
    fn test_find_intersection_first_occurrence() {
        assert_eq!(find_intersection("ABABA", 'A'), Some(0));
        assert_eq!(find_intersection("BABAB", 'a'), Some(1));
        assert_eq!(find_intersection("XYZ", 'A'), None);
    }

    #[test]
    fn test_single_clue_example() {
        let layout = build_layout(&puzzle("PLANET", &[(1, "PLAN", 0)])).unwrap();
        assert_eq!(layout.grid.rows(), 6);
        assert_eq!(layout.grid.cols(), 4);
        assert_eq!(layout.grid.vertical_column(), 0);
        assert_eq!(layout.placements[0].intersection_index_horizontal, 0);
        assert_eq!(layout.placements[0].start_column, 0);
        assert_eq!(layout.grid.to_string(), "PLAN\nL###\nA###\nN###\nE###\nT###");
    }

    #[test]
    fn test_dimensions_follow_extents() {
        let layout = build_layout(&planet()).unwrap();
        // Anchors: PLAN 0, Helium 2 (L), STAR 2 (A), MOON 3 (N), COMET 3 (E), ORBIT 4 (T).
        let left = 4;
        let right = [3, 3, 1, 0, 1, 0].into_iter().max().unwrap();
        assert_eq!(layout.grid.cols(), left + 1 + right);
        assert_eq!(layout.grid.vertical_column(), left);
        assert_eq!(layout.grid.rows(), 6);
    }

    #[test]
    fn test_intersections_land_on_vertical_letters() {
        let p = planet();
        let layout = build_layout(&p).unwrap();
        let vertical: Vec<char> = p.vertical_keyword.word.chars().collect();

        for placement in &layout.placements {
            let col = placement.start_column + placement.intersection_index_horizontal;
            assert_eq!(col, layout.grid.vertical_column());
            let cell = layout.grid.get(CellId::new(placement.row, col)).unwrap();
            assert!(letters_match(cell.letter().unwrap(), vertical[placement.row]));
        }
    }

    #[test]
    fn test_letters_are_uppercased() {
        let layout = build_layout(&puzzle("planet", &[(2, "helium", 1)])).unwrap();
        let row: String = layout.grid.cells()[1]
            .iter()
            .filter_map(Cell::letter)
            .collect();
        assert_eq!(row, "HELIUM");
        assert_eq!(layout.grid.get(CellId::new(0, 2)), Some(Cell::Letter('P')));
    }

    #[test]
    fn test_untouched_cells_are_blocked() {
        let layout = build_layout(&planet()).unwrap();
        let filled = layout.grid.filled_count();
        let word_cells: usize = layout.placements.iter().map(|p| p.length).sum();
        // Every row has a horizontal word, so the vertical adds nothing new.
        assert_eq!(filled, word_cells);
        let blocked = layout.grid.cells().iter().flatten().filter(|c| c.is_blocked()).count();
        assert_eq!(blocked + filled, layout.grid.rows() * layout.grid.cols());
    }

    #[test]
    fn test_rows_without_clues_keep_vertical_letter() {
        let layout = build_layout(&puzzle("PLANET", &[(1, "MOON", 3)])).unwrap();
        let column: String = (0..6)
            .filter_map(|r| layout.grid.get(CellId::new(r, 3)).and_then(|c| c.letter()))
            .collect();
        assert_eq!(column, "PLANET");
    }

    #[test]
    fn test_layout_is_idempotent() {
        let p = planet();
        assert_eq!(build_layout(&p).unwrap(), build_layout(&p).unwrap());
    }

    #[test]
    fn test_repeated_letter_anchors_first() {
        let layout = build_layout(&puzzle("BANANA", &[(1, "ABABA", 1)])).unwrap();
        assert_eq!(layout.placements[0].intersection_index_horizontal, 0);
        assert_eq!(layout.grid.vertical_column(), 0);
        assert_eq!(layout.grid.cols(), 5);
    }

    #[test]
    fn test_shared_row_is_rejected() {
        let err = build_layout(&puzzle("PLANET", &[(1, "PLAN", 0), (2, "PLUTO", 0)])).unwrap_err();
        assert_eq!(
            err,
            LayoutError::SharedRow {
                row: 0,
                first: 1,
                second: 2
            }
        );
    }

    #[test]
    fn test_missing_intersection_is_detected() {
        let err = build_layout(&puzzle("PLANET", &[(1, "MOON", 0)])).unwrap_err();
        assert!(matches!(err, LayoutError::MissingIntersection { letter: 'P', .. }));
    }

    #[test]
    fn test_row_out_of_range_is_detected() {
        let err = build_layout(&puzzle("PLANET", &[(7, "TEN", 6)])).unwrap_err();
        assert!(matches!(err, LayoutError::RowOutOfRange { row: 6, rows: 6, .. }));
    }

    #[test]
    fn test_empty_keyword_is_detected() {
        assert_eq!(build_layout(&puzzle("", &[])).unwrap_err(), LayoutError::EmptyKeyword);
    }

    #[test]
    fn test_place_reports_conflict() {
        let mut cells = vec![vec![Some('A'), None]];
        assert!(place(&mut cells, 0, 1, 'b').is_ok());
        assert_eq!(cells[0][1], Some('B'));
        assert!(place(&mut cells, 0, 0, 'a').is_ok());
        assert_eq!(
            place(&mut cells, 0, 0, 'C').unwrap_err(),
            LayoutError::Conflict {
                row: 0,
                col: 0,
                existing: 'A',
                incoming: 'C'
            }
        );
    }
}
