// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

//! Payoff matrices from text.

use std::io::{self, BufRead, BufReader, Read};

use ndarray::Array2;

use crate::error::{Error, Result};

/// Check that `rows` is a nonempty rectangle, returning
/// its dimensions.
pub fn dims<T>(rows: &[Vec<T>]) -> Result<(usize, usize)> {
    let ncols = match rows.first() {
        Some(r) if !r.is_empty() => r.len(),
        _ => return Err(Error::Empty),
    };
    for (i, r) in rows.iter().enumerate().skip(1) {
        if r.len() != ncols {
            return Err(Error::Ragged {
                row: i,
                expected: ncols,
                found: r.len(),
            });
        }
    }
    Ok((rows.len(), ncols))
}

/// Parse one cell. Only finite numbers are accepted.
pub fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Parse every cell of a rectangular text matrix. `None`
/// if any cell is not a finite number, in which case the
/// game must be reported unresolved rather than solved.
pub fn parse_cells<S: AsRef<str>>(cells: &[Vec<S>]) -> Result<Option<Array2<f64>>> {
    let (nrows, ncols) = dims(cells)?;
    let mut payoffs = Array2::zeros((nrows, ncols));
    for (i, row) in cells.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            match parse_cell(cell.as_ref()) {
                Some(p) => payoffs[(i, j)] = p,
                None => {
                    log::warn!(
                        "cell ({}, {}) is not a number: {:?}",
                        i + 1,
                        j + 1,
                        cell.as_ref(),
                    );
                    return Ok(None);
                }
            }
        }
    }
    Ok(Some(payoffs))
}

/// Read a payoff matrix in textual space-separated form,
/// leaving the cells unparsed. Blank lines are skipped.
pub fn read_cells<T: Read>(r: T) -> io::Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let r = BufReader::new(r);
    for line in r.lines() {
        let cols: Vec<String> =
            line?.split_whitespace().map(str::to_string).collect();
        if cols.is_empty() {
            continue;
        }
        rows.push(cols);
    }
    dims(&rows).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(rows)
}

#[test]
fn test_read_cells() {
    let f = io::Cursor::new(b"  1 2 \n\n3 x");
    let m = read_cells(f).unwrap();
    assert_eq!(m, vec![vec!["1", "2"], vec!["3", "x"]]);
}

#[test]
fn test_read_cells_ragged() {
    let f = io::Cursor::new(b"1 2\n3\n");
    let e = read_cells(f).unwrap_err();
    assert_eq!(e.kind(), io::ErrorKind::InvalidData);
    let f = io::Cursor::new(b"\n  \n");
    assert!(read_cells(f).is_err());
}

#[test]
fn test_parse_cells() {
    let cells = vec![vec!["1", " -2.5 "], vec!["3e1", "0"]];
    let m = parse_cells(&cells).unwrap().unwrap();
    assert_eq!(m, ndarray::array![[1.0, -2.5], [30.0, 0.0]]);

    for bad in ["", "x", "NaN", "inf"] {
        let cells = vec![vec!["1", bad]];
        assert_eq!(parse_cells(&cells), Ok(None));
    }
}

#[test]
fn test_dims() {
    assert_eq!(dims(&[vec![1, 2], vec![3, 4], vec![5, 6]]), Ok((3, 2)));
    assert_eq!(dims::<u8>(&[]), Err(Error::Empty));
    assert_eq!(dims::<u8>(&[vec![]]), Err(Error::Empty));
    assert_eq!(
        dims(&[vec![1], vec![2, 3]]),
        Err(Error::Ragged {
            row: 1,
            expected: 1,
            found: 2
        })
    );
}
