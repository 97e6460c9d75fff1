// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Structural problems with a payoff matrix or board.
/// Non-numeric cells are not errors: they make the game
/// unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The matrix has no rows, or its first row is empty.
    Empty,
    /// Row `row` has `found` cells where `expected` were
    /// wanted.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Cell `(row, col)` lies outside a board of the given
    /// dimensions.
    OutOfRange {
        row: usize,
        col: usize,
        dims: (usize, usize),
    },
    /// Board dimensions fall outside the configured limits.
    Size {
        dims: (usize, usize),
        min: usize,
        max: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "empty matrix"),
            Error::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged matrix: row {} has {} cells, expected {}",
                row + 1,
                found,
                expected,
            ),
            Error::OutOfRange { row, col, dims } => write!(
                f,
                "cell ({}, {}) outside {}x{} matrix",
                row + 1,
                col + 1,
                dims.0,
                dims.1,
            ),
            Error::Size { dims, min, max } => write!(
                f,
                "{}x{} matrix outside size limits {}..={}",
                dims.0, dims.1, min, max,
            ),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
