// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! An editable payoff matrix that keeps itself solved.
//!
//! Cells are kept as the text the user typed. After every
//! change the board is re-solved; if any cell is not a
//! finite number the solver is skipped and the report is
//! unresolved.

use crate::error::{Error, Result};
use crate::input::{dims, parse_cells};
use crate::solver::{Params, Report, Solver};

/// Bounds on the number of strategies of either player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Fewest strategies allowed; at least 1.
    pub min: usize,
    /// Most strategies allowed.
    pub max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { min: 2, max: 10 }
    }
}

impl Limits {
    fn admits(&self, n: usize) -> bool {
        (self.min..=self.max).contains(&n)
    }

    /// Fail unless a board of size `dims` fits. Limits
    /// allowing an empty board fit nothing.
    fn check(&self, dims: (usize, usize)) -> Result<()> {
        if self.min == 0 || !self.admits(dims.0) || !self.admits(dims.1) {
            return Err(Error::Size {
                dims,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

fn pennies() -> Vec<Vec<String>> {
    vec![
        vec!["1".to_string(), "-1".to_string()],
        vec!["-1".to_string(), "1".to_string()],
    ]
}

/// A payoff matrix of text cells within size limits, and
/// its current report.
#[derive(Debug, Clone)]
pub struct Board {
    limits: Limits,
    cells: Vec<Vec<String>>,
    report: Report,
}

/// Matching pennies within the default limits.
impl Default for Board {
    fn default() -> Self {
        let cells = pennies();
        Board::build(cells, Limits::default())
    }
}

impl Board {
    /// Matching pennies, provided `limits` admit a 2×2
    /// board.
    pub fn new(limits: Limits) -> Result<Self> {
        Board::from_cells(pennies(), limits)
    }

    /// Board holding `cells`, which must be rectangular and
    /// within `limits`.
    pub fn from_cells(cells: Vec<Vec<String>>, limits: Limits) -> Result<Self> {
        let size = dims(&cells)?;
        limits.check(size)?;
        Ok(Board::build(cells, limits))
    }

    fn build(cells: Vec<Vec<String>>, limits: Limits) -> Self {
        let mut board = Board {
            limits,
            cells,
            report: Report::unresolved(0, 0),
        };
        board.resolve();
        board
    }

    /// Number of player 1 strategies.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of player 2 strategies.
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Text of cell `(row, col)`, 0-based.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Report for the current cells.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Add a row of zeros at the bottom, if the limits
    /// allow.
    pub fn add_row(&mut self) -> bool {
        if self.rows() >= self.limits.max {
            return false;
        }
        self.cells.push(vec!["0".to_string(); self.cols()]);
        self.resolve();
        true
    }

    /// Drop the bottom row, if the limits allow.
    pub fn remove_row(&mut self) -> bool {
        if self.rows() <= self.limits.min {
            return false;
        }
        self.cells.pop();
        self.resolve();
        true
    }

    /// Add a column of zeros on the right, if the limits
    /// allow.
    pub fn add_column(&mut self) -> bool {
        if self.cols() >= self.limits.max {
            return false;
        }
        for row in self.cells.iter_mut() {
            row.push("0".to_string());
        }
        self.resolve();
        true
    }

    /// Drop the rightmost column, if the limits allow.
    pub fn remove_column(&mut self) -> bool {
        if self.cols() <= self.limits.min {
            return false;
        }
        for row in self.cells.iter_mut() {
            row.pop();
        }
        self.resolve();
        true
    }

    /// Replace the text of cell `(row, col)` and re-solve.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let dims = (self.rows(), self.cols());
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::OutOfRange { row, col, dims })?;
        *cell = text.to_string();
        self.resolve();
        Ok(())
    }

    fn resolve(&mut self) {
        let (nrows, ncols) = (self.rows(), self.cols());
        self.report = match parse_cells(&self.cells) {
            Ok(Some(payoffs)) => {
                Solver::new(Params::for_size(nrows, ncols)).report(payoffs.view())
            }
            _ => Report::unresolved(nrows, ncols),
        };
    }
}
