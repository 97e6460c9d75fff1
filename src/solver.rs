// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! The pivot loop and its results.

use std::fmt::{self, Display, Formatter};

use ndarray::prelude::*;

use crate::format::{format_entry, UNRESOLVED};
use crate::tableau::{Label, Tableau};

/// Precision used when none is given.
pub const DEFAULT_PRECISION: f64 = 1.0e-6;

/// Which axis of the payoff matrix belongs to player 1,
/// the maximizer. The entries are always payoffs to
/// player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Maximizer {
    /// Player 1 chooses a row.
    #[default]
    Rows,
    /// Player 1 chooses a column.
    Columns,
}

/// Solver tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Number of pivots allowed before giving up.
    pub max_pivots: usize,
    /// Threshold below which tableau entries do not count
    /// as positive in the ratio test and reported numbers
    /// are shown as zero. The ratio test compares against
    /// the normalized tableau, so there it is relative to
    /// the largest payoff.
    pub precision: f64,
}

impl Params {
    /// Defaults for a `rows` by `cols` game: one pivot per
    /// payoff cell.
    pub fn for_size(rows: usize, cols: usize) -> Self {
        Params {
            max_pivots: rows * cols,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_pivots: 100,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// A game solution, given as the value of the game and an
/// optimal mixed strategy for each player.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Value of game to player 1.
    pub value: f64,
    /// Strategy for player 1 (maximizer).
    pub max_strategy: Vec<f64>,
    /// Strategy for player 2 (minimizer).
    pub min_strategy: Vec<f64>,
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "value {:.3}", self.value)?;
        let mut show = |name, vals: &[f64], label: fn(usize) -> Label| {
            write!(f, "{}", name)?;
            for (i, v) in vals.iter().enumerate() {
                write!(f, " {}:{:.3}", label(i), v)?;
            }
            writeln!(f)
        };
        show("max", &self.max_strategy, Label::Row)?;
        show("min", &self.min_strategy, Label::Col)?;
        Ok(())
    }
}

/// Result of running the pivot loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An optimal basis was reached after `pivots` pivots.
    Resolved { solution: Solution, pivots: usize },
    /// No optimal basis was reached: the pivot budget ran
    /// out, or no pivot row could be found.
    Unresolved { max_len: usize, min_len: usize },
}

impl Outcome {
    /// True iff an optimal basis was reached.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved { .. })
    }

    /// The solution, if resolved.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Resolved { solution, .. } => Some(solution),
            Outcome::Unresolved { .. } => None,
        }
    }

    /// Format for display, snapping anything within
    /// `precision` of zero to zero.
    pub fn report(&self, precision: f64) -> Report {
        match self {
            Outcome::Resolved { solution, .. } => {
                let show = |vals: &[f64]| -> Vec<String> {
                    vals.iter().map(|&v| format_entry(v, precision)).collect()
                };
                Report {
                    player1: show(&solution.max_strategy),
                    player2: show(&solution.min_strategy),
                    value: format_entry(solution.value, precision),
                }
            }
            Outcome::Unresolved { max_len, min_len } => {
                Report::unresolved(*max_len, *min_len)
            }
        }
    }
}

/// Formatted strategies and value, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Strategy entries of player 1 (maximizer).
    pub player1: Vec<String>,
    /// Strategy entries of player 2 (minimizer).
    pub player2: Vec<String>,
    /// Value of the game to player 1.
    pub value: String,
}

impl Report {
    /// Report with every entry and the value marked
    /// unresolved.
    pub fn unresolved(player1: usize, player2: usize) -> Self {
        let marks = |n| vec![UNRESOLVED.to_string(); n];
        Report {
            player1: marks(player1),
            player2: marks(player2),
            value: UNRESOLVED.to_string(),
        }
    }

    /// True unless this report carries the unresolved
    /// marker.
    pub fn is_resolved(&self) -> bool {
        self.value != UNRESOLVED
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "value {}", self.value)?;
        let mut show = |name, vals: &[String], label: fn(usize) -> Label| {
            write!(f, "{}", name)?;
            for (i, v) in vals.iter().enumerate() {
                write!(f, " {}:{}", label(i), v)?;
            }
            writeln!(f)
        };
        show("max", &self.player1, Label::Row)?;
        show("min", &self.player2, Label::Col)?;
        Ok(())
    }
}

/// Zero-sum matrix game solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Solver {
    /// Budget and precision.
    pub params: Params,
    /// Axis belonging to player 1.
    pub maximizer: Maximizer,
}

impl Solver {
    /// Solver with player 1 on the rows.
    pub fn new(params: Params) -> Self {
        Solver {
            params,
            maximizer: Maximizer::Rows,
        }
    }

    /// Same solver, with player 1 on the given axis.
    pub fn with_maximizer(self, maximizer: Maximizer) -> Self {
        Solver { maximizer, ..self }
    }

    /// Normalized tableau for `payoffs`, oriented so that
    /// player 1 owns the tableau rows.
    pub fn tableau(&self, payoffs: ArrayView2<'_, f64>) -> Tableau {
        let oriented = match self.maximizer {
            Maximizer::Rows => payoffs,
            Maximizer::Columns => payoffs.reversed_axes(),
        };
        let mut tableau = Tableau::new(oriented);
        tableau.normalize();
        tableau
    }

    /// Pivot `tableau` until it is optimal, the budget runs
    /// out, or no pivot row can be found. Returns the
    /// number of pivots made iff the tableau is optimal.
    pub fn reduce(&self, tableau: &mut Tableau) -> Option<usize> {
        let mut pivots = 0;
        while let Some(q) = tableau.entering_column() {
            if pivots == self.params.max_pivots {
                log::debug!("pivot budget of {} exhausted", pivots);
                return None;
            }
            let p = match tableau.leaving_row(q, self.params.precision) {
                Some(p) => p,
                None => {
                    log::warn!("no pivot row for column {}", tableau.top[q]);
                    return None;
                }
            };
            log::trace!(
                "pivot {} at ({}, {}): {} leaves, {} enters",
                pivots + 1,
                p,
                q,
                tableau.left[p],
                tableau.top[q],
            );
            tableau.reduce((p, q));
            pivots += 1;
        }
        Some(pivots)
    }

    /// Find optimal strategies and the value of the game
    /// with payoff matrix `payoffs`.
    pub fn solve(&self, payoffs: ArrayView2<'_, f64>) -> Outcome {
        self.run(payoffs).0
    }

    /// As [Solver::solve], also returning the final
    /// tableau.
    pub fn run(&self, payoffs: ArrayView2<'_, f64>) -> (Outcome, Tableau) {
        let mut tableau = self.tableau(payoffs);
        let (max_len, min_len) = tableau.dim();
        if max_len == 0 || min_len == 0 {
            log::warn!("empty {}x{} payoff matrix", max_len, min_len);
            return (Outcome::Unresolved { max_len, min_len }, tableau);
        }

        log::debug!("tableau (before)\n{}", tableau);
        let outcome = self.resolve(&mut tableau);
        log::debug!("tableau (after)\n{}", tableau);
        (outcome, tableau)
    }

    /// Reduce a prepared `tableau` and decode the result.
    pub fn resolve(&self, tableau: &mut Tableau) -> Outcome {
        let (max_len, min_len) = tableau.dim();
        match self.reduce(tableau) {
            Some(pivots) => Outcome::Resolved {
                solution: tableau.solution(),
                pivots,
            },
            None => Outcome::Unresolved { max_len, min_len },
        }
    }

    /// As [Solver::solve], formatted.
    pub fn report(&self, payoffs: ArrayView2<'_, f64>) -> Report {
        self.solve(payoffs).report(self.params.precision)
    }
}

/// Solve the game with payoff matrix `payoffs`, whose rows
/// belong to player 1, allowing at most `max_pivots`
/// pivots. Numbers within `precision` of zero are reported
/// as zero.
///
/// ```
/// use matrix_game::ndarray::array;
/// use matrix_game::solve_game;
///
/// let pennies = array![[1.0, -1.0], [-1.0, 1.0]];
/// let report = solve_game(pennies.view(), 4, 1e-6);
/// assert_eq!(report.player1, vec!["0.500000", "0.500000"]);
/// assert_eq!(report.player2, vec!["0.500000", "0.500000"]);
/// assert_eq!(report.value, "0.00000");
/// ```
pub fn solve_game(
    payoffs: ArrayView2<'_, f64>,
    max_pivots: usize,
    precision: f64,
) -> Report {
    Solver::new(Params {
        max_pivots,
        precision,
    })
    .report(payoffs)
}
