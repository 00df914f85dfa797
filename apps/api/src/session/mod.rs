//! Solving Session: per-player answer checking and hints over one `Grid`.
//!
//! The session owns its grid and all mutable progress: typed letters, the
//! correct/incorrect verdict from the last check, and the selected cell used by
//! hints. The grid's letters are never modified. Sessions share nothing, so any
//! number of them can run side by side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::grid::{letters_match, normalize_letter};
use crate::layout::{CellId, Grid};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{0} is outside the grid")]
    OutOfBounds(CellId),

    #[error("{0} is blocked")]
    Blocked(CellId),

    #[error("{0} is already solved")]
    Locked(CellId),
}

/// Verdict for a filled cell after the most recent check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Unresolved,
    /// Matches the answer. The cell is locked.
    Correct,
    /// Does not match. The cell stays editable.
    Incorrect,
}

/// Summary of one answer check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub solved: bool,
    pub correct: usize,
    pub unresolved: usize,
    pub incorrect: Vec<CellId>,
}

/// Reasons a hint request is declined. Shown to the player, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintWarning {
    NoSelection,
    BlockedCell,
    AlreadySolved,
}

impl HintWarning {
    pub fn message(&self) -> &'static str {
        match self {
            HintWarning::NoSelection => "Select an empty cell to get a hint",
            HintWarning::BlockedCell => "That cell is not part of any word",
            HintWarning::AlreadySolved => "That cell is already solved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    Revealed { cell: CellId, letter: char },
    Warning(HintWarning),
}

#[derive(Debug, Clone, Copy, Default)]
struct Progress {
    entry: Option<char>,
    status: CellStatus,
}

#[derive(Debug, Clone)]
pub struct SolvingSession {
    grid: Grid,
    progress: Vec<Vec<Progress>>,
    selected: Option<CellId>,
}

impl SolvingSession {
    pub fn new(grid: Grid) -> Self {
        let progress = vec![vec![Progress::default(); grid.cols()]; grid.rows()];
        Self {
            grid,
            progress,
            selected: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selected(&self) -> Option<CellId> {
        self.selected
    }

    pub fn entry(&self, cell: CellId) -> Option<char> {
        self.progress.get(cell.row)?.get(cell.col)?.entry
    }

    pub fn status(&self, cell: CellId) -> Option<CellStatus> {
        self.progress
            .get(cell.row)?
            .get(cell.col)
            .map(|p| p.status)
    }

    pub fn is_locked(&self, cell: CellId) -> bool {
        self.status(cell) == Some(CellStatus::Correct)
    }

    /// Marks `cell` as the current selection. Any in-bounds cell may be selected;
    /// hints decide whether the selection is usable.
    pub fn select(&mut self, cell: CellId) -> Result<(), SessionError> {
        self.grid.get(cell).ok_or(SessionError::OutOfBounds(cell))?;
        self.selected = Some(cell);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Records the player's letter for `cell`; `None` or a blank clears it.
    pub fn enter(&mut self, cell: CellId, letter: Option<char>) -> Result<(), SessionError> {
        let grid_cell = self.grid.get(cell).ok_or(SessionError::OutOfBounds(cell))?;
        if grid_cell.is_blocked() {
            return Err(SessionError::Blocked(cell));
        }
        if self.is_locked(cell) {
            return Err(SessionError::Locked(cell));
        }
        let progress = &mut self.progress[cell.row][cell.col];
        progress.entry = letter.filter(|c| !c.is_whitespace()).map(normalize_letter);
        Ok(())
    }

    /// Checks every filled cell against the grid.
    ///
    /// Empty entries stay unresolved, matches lock, mismatches stay editable.
    /// The puzzle is solved only when every filled cell is correct.
    pub fn check(&mut self) -> CheckReport {
        let mut correct = 0;
        let mut unresolved = 0;
        let mut incorrect = Vec::new();

        for (cell, answer) in self.grid.filled_cells() {
            let progress = &mut self.progress[cell.row][cell.col];
            progress.status = match progress.entry {
                None => {
                    unresolved += 1;
                    CellStatus::Unresolved
                }
                Some(c) if letters_match(c, answer) => {
                    correct += 1;
                    CellStatus::Correct
                }
                Some(_) => {
                    incorrect.push(cell);
                    CellStatus::Incorrect
                }
            };
        }

        CheckReport {
            solved: unresolved == 0 && incorrect.is_empty(),
            correct,
            unresolved,
            incorrect,
        }
    }

    /// Reveals the selected cell's answer and locks it, clearing the selection.
    pub fn hint(&mut self) -> HintOutcome {
        let Some(cell) = self.selected else {
            return HintOutcome::Warning(HintWarning::NoSelection);
        };
        let Some(letter) = self.grid.get(cell).and_then(|c| c.letter()) else {
            return HintOutcome::Warning(HintWarning::BlockedCell);
        };
        if self.is_locked(cell) {
            return HintOutcome::Warning(HintWarning::AlreadySolved);
        }

        self.progress[cell.row][cell.col] = Progress {
            entry: Some(letter),
            status: CellStatus::Correct,
        };
        self.selected = None;
        HintOutcome::Revealed { cell, letter }
    }

    /// True once every filled cell has been confirmed correct.
    pub fn is_solved(&self) -> bool {
        self.grid
            .filled_cells()
            .all(|(cell, _)| self.is_locked(cell))
    }
}
