// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Calculate optimal mixed strategies and the value of a
//! finite two-player zero-sum game given its payoff matrix.
//! Player 1 (the "maximizer") chooses a row by default and
//! player 2 (the "minimizer") chooses a column; every entry
//! is the payoff to player 1.
//!
//! The solver builds a simplex-style tableau from the
//! payoff matrix, shifts it so that the game has positive
//! value, and pivots until no entry of the dual row is
//! negative. Strategies and value are then read off the
//! tableau. Pivoting is bounded: a game that has not been
//! solved within the pivot budget is reported unresolved,
//! with every entry shown as `###`.
//!
//! The easiest way to use this code is to call
//! [solve_game()], or to build a [Solver] when the
//! orientation or numeric results are wanted.
//!
//! # Examples
//!
//! Rock-paper-scissors, with the winner taking 1 from the
//! loser.
//!
//! ```text,no_run
//!        R  P  S
//!     R  0 -1  1
//!     P  1  0 -1
//!     S -1  1  0
//! ```
//!
//! ```
//! use matrix_game::*;
//! use matrix_game::ndarray::array;
//!
//! let payoffs = array![
//!     [ 0.0, -1.0,  1.0],
//!     [ 1.0,  0.0, -1.0],
//!     [-1.0,  1.0,  0.0],
//! ];
//! let report = solve_game(payoffs.view(), 9, 1e-6);
//! assert_eq!(report.player1, vec!["0.333333"; 3]);
//! assert_eq!(report.value, "0.00000");
//! print!("{}", report);
//! ```
//!
//! The output should look like this:
//!
//! ```text,no_run
//!     value 0.00000
//!     max S1:0.333333 S2:0.333333 S3:0.333333
//!     min T1:0.333333 T2:0.333333 T3:0.333333
//! ```
//!
//! Neither player can do better than picking uniformly at
//! random, and the game is fair.

pub mod board;
pub mod error;
pub mod format;
pub mod input;
pub mod solver;
pub mod tableau;

pub use ndarray;

pub use board::{Board, Limits};
pub use error::Error;
pub use format::UNRESOLVED;
pub use solver::{
    solve_game, Maximizer, Outcome, Params, Report, Solution, Solver,
    DEFAULT_PRECISION,
};
pub use tableau::{Label, Tableau};
