// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

use std::fs::File;
use std::io::stdin;
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::Parser;

use matrix_game::input::{dims, parse_cells, read_cells};
use matrix_game::*;

#[derive(Parser)]
#[command(author, version, about = "Solve a two-player zero-sum matrix game", long_about = None)]
struct Args {
    /// Payoff matrix, one row per line, cells separated by
    /// whitespace. Read from stdin when absent.
    file: Option<PathBuf>,
    /// Maximum number of pivots [default: rows × columns]
    #[arg(short = 'n', long)]
    max_pivots: Option<usize>,
    /// Numbers within this distance of zero are shown as zero
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: f64,
    /// Entries are payoffs to the column player, who is
    /// player 1
    #[arg(long)]
    columns: bool,
    /// Print the final tableau after the solution
    #[arg(short, long)]
    tableau: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let cells = match &args.file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            read_cells(f)
        }
        None => read_cells(stdin()),
    }
    .context("could not read payoff matrix")?;

    let (nrows, ncols) = dims(&cells)?;
    let maximizer = if args.columns {
        Maximizer::Columns
    } else {
        Maximizer::Rows
    };
    let (n1, n2) = match maximizer {
        Maximizer::Rows => (nrows, ncols),
        Maximizer::Columns => (ncols, nrows),
    };

    let payoffs = match parse_cells(&cells)? {
        Some(payoffs) => payoffs,
        None => {
            print!("{}", Report::unresolved(n1, n2));
            return Ok(());
        }
    };

    let params = Params {
        max_pivots: args.max_pivots.unwrap_or(nrows * ncols),
        precision: args.precision,
    };
    let solver = Solver::new(params).with_maximizer(maximizer);

    let (outcome, tableau) = solver.run(payoffs.view());
    print!("{}", outcome.report(params.precision));
    if args.tableau {
        println!();
        print!("{}", tableau);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("matrix-game: {:#}", e);
        exit(1);
    }
}
