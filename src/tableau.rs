// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! The pivoting tableau. Player 1 (the maximizer) owns the
//! tableau rows and player 2 (the minimizer) owns the
//! tableau columns. The numeric part carries one extra row
//! (the dual row, along the bottom) and one extra column
//! (the primal column, on the right); the bottom-right
//! corner tracks the reciprocal of the (shifted) value of
//! the game.

use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use ndarray::{prelude::*, s};
use ordered_float::OrderedFloat;
use tabwriter::TabWriter;

use crate::solver::Solution;

/// Identity of the strategy variable sitting at a tableau
/// row or column. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Strategy of player 1, shown as `S1`, `S2`, ...
    Row(usize),
    /// Strategy of player 2, shown as `T1`, `T2`, ...
    Col(usize),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Label::Row(i) => write!(f, "S{}", i + 1),
            Label::Col(j) => write!(f, "T{}", j + 1),
        }
    }
}

/// Labeled tableau for a single solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    /// Power of two every payoff is divided by, so that the
    /// largest interior entry has magnitude near 1.
    pub scale: f64,
    /// Amount subtracted from every scaled payoff to make
    /// the shifted game's value positive. Added back on
    /// decoding.
    pub shift: f64,
    /// Labels of the interior columns.
    pub top: Vec<Label>,
    /// Labels of the interior rows.
    pub left: Vec<Label>,
    /// Tableau entries. The dimensions include the
    /// margins.
    pub cells: Array2<f64>,
}

/// Display a `Tableau` in tabular format.
impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "scale = {}, shift = {:.3}", self.scale, self.shift)?;

        let write_table = || -> io::Result<Vec<u8>> {
            let mut tf = TabWriter::new(Vec::new()).padding(1);

            for l in self.top.iter() {
                write!(tf, "\t{}", l)?;
            }
            writeln!(tf)?;

            for (r, row) in self.cells.outer_iter().enumerate() {
                if let Some(l) = self.left.get(r) {
                    write!(tf, "{}", l)?;
                }
                for v in row {
                    write!(tf, "\t{:.3}", v)?;
                }
                writeln!(tf)?;
            }

            tf.flush()?;
            tf.into_inner().map_err(|_| {
                io::Error::new(io::ErrorKind::Other, "unflushed table")
            })
        };

        let table = write_table().map_err(|_| fmt::Error)?;
        let table = String::from_utf8(table).map_err(|_| fmt::Error)?;
        write!(f, "{}", table)
    }
}

impl Tableau {
    /// Build the tableau for `payoffs`, whose rows must be
    /// player 1's strategies. Pass a transposed view to put
    /// player 1 on the columns instead.
    pub fn new(payoffs: ArrayView2<'_, f64>) -> Self {
        let (nr, nc) = payoffs.dim();
        let mut cells = Array2::zeros((nr + 1, nc + 1));
        cells.slice_mut(s![..nr, ..nc]).assign(&payoffs);
        cells.slice_mut(s![..nr, nc]).fill(1.0);
        cells.slice_mut(s![nr, ..nc]).fill(-1.0);

        Tableau {
            scale: 1.0,
            shift: 0.0,
            top: (0..nc).map(Label::Col).collect(),
            left: (0..nr).map(Label::Row).collect(),
            cells,
        }
    }

    /// Interior dimensions: (player 1 strategies, player 2
    /// strategies).
    pub fn dim(&self) -> (usize, usize) {
        (self.left.len(), self.top.len())
    }

    /// Scale the interior by the power of two nearest its
    /// largest magnitude, then shift it so that every entry
    /// of the first row is at least 1. The pivot thresholds
    /// then mean the same thing whatever the units of the
    /// payoffs. Call once per tableau.
    pub fn normalize(&mut self) {
        let (nr, nc) = self.dim();
        if nr == 0 || nc == 0 {
            return;
        }
        let mut interior = self.cells.slice_mut(s![..nr, ..nc]);

        let max = interior
            .iter()
            .map(|p| OrderedFloat(p.abs()))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);
        // Powers of two divide exactly.
        let scale = if max.is_normal() {
            max.log2().round().clamp(-1022.0, 1023.0).exp2()
        } else {
            1.0
        };
        interior.mapv_inplace(|p| p / scale);

        let min = interior
            .slice(s![0, ..])
            .iter()
            .cloned()
            .map(OrderedFloat)
            .min()
            .map_or(0.0, OrderedFloat::into_inner);
        let shift = min - 1.0;
        interior.mapv_inplace(|p| p - shift);

        self.scale = scale;
        self.shift = shift;
    }

    /// Column to pivot on next: the first whose dual-row
    /// entry is negative. `None` iff the basis is optimal.
    pub fn entering_column(&self) -> Option<usize> {
        let (nr, nc) = self.dim();
        self.cells
            .slice(s![nr, ..nc])
            .iter()
            .position(|&v| v < 0.0)
    }

    /// Row to pivot on for entering column `q`: the binding
    /// constraint of the ratio test. Entries no larger than
    /// `precision` are not candidates, and primal entries
    /// below `precision` count as zero. Both thresholds
    /// assume a normalized tableau. Among candidates the
    /// first row strictly improving on the running best
    /// ratio wins, so exact ties go to the earlier row.
    pub fn leaving_row(&self, q: usize, precision: f64) -> Option<usize> {
        let (nr, nc) = self.dim();
        let mut pivot = None;
        let mut ratio = 0.0;
        for r in 0..nr {
            let a = self.cells[(r, q)];
            if a <= precision {
                continue;
            }
            // Round-off can leave a degenerate constraint
            // slightly negative; it must still bind.
            let b = self.cells[(r, nc)];
            let b = if b < precision { 0.0 } else { b };
            // With b == 0 the row is taken and the ratio
            // becomes infinite, which nothing later beats.
            if a > b * ratio {
                pivot = Some(r);
                ratio = a / b;
            }
        }
        pivot
    }

    /// Pivot on `(p, q)` and exchange the labels of row `p`
    /// and column `q`. Assumes the pivot is nonzero.
    pub fn reduce(&mut self, (p, q): (usize, usize)) {
        let (nr, nc) = self.cells.dim();
        let d = self.cells[(p, q)];

        for c in 0..nc {
            if c != q {
                self.cells[(p, c)] /= d;
            }
        }

        // Pivot row is already divided through by d.
        for r in 0..nr {
            if r == p {
                continue;
            }
            let rq = self.cells[(r, q)];
            for c in 0..nc {
                if c == q {
                    continue;
                }
                let pc = self.cells[(p, c)];
                self.cells[(r, c)] -= rq * pc;
            }
        }

        for r in 0..nr {
            if r != p {
                self.cells[(r, q)] = -self.cells[(r, q)] / d;
            }
        }
        self.cells[(p, q)] = 1.0 / d;

        std::mem::swap(&mut self.left[p], &mut self.top[q]);
    }

    /// Read the strategies and value off a fully-reduced
    /// tableau.
    pub fn solution(&self) -> Solution {
        let (nr, nc) = self.dim();
        let v = 1.0 / self.cells[(nr, nc)];

        let mut max_strategy = vec![0.0; nr];
        for (c, &l) in self.top.iter().enumerate() {
            if let Label::Row(i) = l {
                max_strategy[i] = self.cells[(nr, c)] * v;
            }
        }

        let mut min_strategy = vec![0.0; nc];
        for (r, &l) in self.left.iter().enumerate() {
            if let Label::Col(j) = l {
                min_strategy[j] = self.cells[(r, nc)] * v;
            }
        }

        Solution {
            value: (v + self.shift) * self.scale,
            max_strategy,
            min_strategy,
        }
    }
}
