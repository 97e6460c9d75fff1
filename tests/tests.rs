use ndarray::prelude::*;
use proptest::prelude::*;

use matrix_game::*;

fn eqish(v1: f64, v2: f64) -> bool {
    (v1 - v2).abs() < 0.00001
}

fn solution(m: &Array2<f64>, max_pivots: usize) -> Solution {
    let solver = Solver::new(Params {
        max_pivots,
        precision: DEFAULT_PRECISION,
    });
    match solver.solve(m.view()) {
        Outcome::Resolved { solution, .. } => solution,
        Outcome::Unresolved { .. } => panic!("unresolved: {:?}", m),
    }
}

/// Player 1's strategy earns at least the value against
/// every column, and player 2's concedes at most the value
/// against every row.
fn is_optimal(m: &Array2<f64>, soln: &Solution, eps: f64) -> bool {
    let p1 = Array1::from(soln.max_strategy.clone());
    let p2 = Array1::from(soln.min_strategy.clone());
    m.t().dot(&p1).iter().all(|&v| v >= soln.value - eps)
        && m.dot(&p2).iter().all(|&v| v <= soln.value + eps)
}

#[test]
fn test_matching_pennies() {
    let m = array![[1.0, -1.0], [-1.0, 1.0]];
    let r = solve_game(m.view(), 4, 1e-6);
    assert_eq!(r.player1, vec!["0.500000", "0.500000"]);
    assert_eq!(r.player2, vec!["0.500000", "0.500000"]);
    assert_eq!(r.value, "0.00000");
}

#[test]
fn test_trivial() {
    let m = array![[5.0]];
    let r = solve_game(m.view(), 1, 1e-6);
    assert_eq!(r.player1, vec!["1.00000"]);
    assert_eq!(r.player2, vec!["1.00000"]);
    assert_eq!(r.value, "5.00000");
}

#[test]
fn test_zero_budget() {
    let m = array![[5.0]];
    assert_eq!(solve_game(m.view(), 0, 1e-6), Report::unresolved(1, 1));
    let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let r = solve_game(m.view(), 0, 1e-6);
    assert_eq!(r.player1, vec![UNRESOLVED; 2]);
    assert_eq!(r.player2, vec![UNRESOLVED; 3]);
    assert_eq!(r.value, UNRESOLVED);
}

#[test]
fn test_compleat_strategyst() {
    // *Compleat Strategyst* p. 229
    let m = array![[6.0, 0.0, 3.0], [8.0, -2.0, 3.0], [4.0, 6.0, 5.0]];
    let r = solve_game(m.view(), 9, 1e-6);
    assert_eq!(r.player1, vec!["0.00000", "0.166667", "0.833333"]);
    assert_eq!(r.player2, vec!["0.666667", "0.333333", "0.00000"]);
    assert_eq!(r.value, "4.66667");

    let soln = solution(&m, 9);
    assert!(eqish(soln.value, 14.0 / 3.0));
    assert!(is_optimal(&m, &soln, 1e-9));
}

#[test]
fn test_saddle_point() {
    let m = array![[3.0, 1.0], [4.0, 2.0]];
    let r = solve_game(m.view(), 4, 1e-6);
    assert_eq!(r.player1, vec!["0.00000", "1.00000"]);
    assert_eq!(r.player2, vec!["0.00000", "1.00000"]);
    assert_eq!(r.value, "2.00000");
}

#[test]
fn test_single_row_and_column() {
    let m = array![[1.0, 2.0, 3.0]];
    let r = solve_game(m.view(), 3, 1e-6);
    assert_eq!(r.player1, vec!["1.00000"]);
    assert_eq!(r.player2, vec!["1.00000", "0.00000", "0.00000"]);
    assert_eq!(r.value, "1.00000");

    let m = array![[1.0], [2.0], [3.0]];
    let r = solve_game(m.view(), 3, 1e-6);
    assert_eq!(r.player1, vec!["0.00000", "0.00000", "1.00000"]);
    assert_eq!(r.player2, vec!["1.00000"]);
    assert_eq!(r.value, "3.00000");
}

#[test]
fn test_degenerate_game() {
    // Several constraints bind at once partway through,
    // so round-off lands on primal entries that should be
    // zero.
    let m = array![
        [-3.0, 2.0, -3.0, 2.0],
        [2.0, -3.0, 1.0, -2.0],
        [-2.0, 1.0, -2.0, -2.0],
        [-3.0, 0.0, -1.0, 3.0],
    ];
    let soln = solution(&m, 16);
    assert!(is_optimal(&m, &soln, 1e-9));
}

#[test]
fn test_units_do_not_matter() {
    let m = array![
        [5.0, -5.0, 0.0, 3.0],
        [-2.0, 4.0, -2.0, 0.0],
        [-2.0, 1.0, 3.0, -3.0],
        [4.0, 4.0, 0.0, -2.0],
    ];
    let soln = solution(&m, 16);
    assert!(eqish(soln.value, 0.125));
    for c in [1.0e-7, 1.0e7] {
        let scaled = &m * c;
        let s = solution(&scaled, 16);
        assert!((s.value - 0.125 * c).abs() < 1e-9 * c);
        assert!(is_optimal(&scaled, &s, 1e-9 * c));
        let pairs = soln.max_strategy.iter().zip(&s.max_strategy)
            .chain(soln.min_strategy.iter().zip(&s.min_strategy));
        for (a, b) in pairs {
            assert!(eqish(*a, *b));
        }
    }
    let r = solve_game((&m * 1.0e7).view(), 16, 1e-6);
    assert_eq!(r.value, "1.25000e+6");
    assert_eq!(r.player1, vec!["0.333333", "0.375000", "0.291667", "0.00000"]);
}

#[test]
fn test_rounds_half_up() {
    // Player 1's second strategy is exactly 49/128.
    let m = array![
        [3.0, 3.0, -3.0],
        [2.0, -2.0, 2.0],
        [-5.0, 5.0, 0.0],
        [2.0, 4.0, -5.0],
    ];
    let r = Solver::new(Params::for_size(4, 3))
        .with_maximizer(Maximizer::Columns)
        .report(m.view());
    assert_eq!(r.player1, vec!["0.289063", "0.382813", "0.328125"]);
    assert_eq!(r.value, "0.468750");
}

#[test]
fn test_columns_orientation() {
    let m = array![[2.0, -1.0, 0.5], [-1.0, 1.0, 0.0]];
    let mt = m.t().to_owned();
    let by_rows = Solver::default().report(mt.view());
    let by_columns = Solver::default()
        .with_maximizer(Maximizer::Columns)
        .report(m.view());
    assert_eq!(by_rows, by_columns);
    assert_eq!(by_columns.player1.len(), 3);
}

#[test]
fn test_deterministic() {
    let m = array![[0.3, -1.7, 2.2], [1.1, 0.4, -0.9], [-2.5, 1.9, 0.6]];
    let r1 = solve_game(m.view(), 9, 1e-6);
    let r2 = solve_game(m.view(), 9, 1e-6);
    assert_eq!(r1, r2);
    assert!(r1.is_resolved());
}

#[test]
fn test_board_matches_solver() {
    let cells = vec![
        vec!["6".to_string(), "0".to_string(), "3".to_string()],
        vec!["8".to_string(), "-2".to_string(), "3".to_string()],
        vec!["4".to_string(), "6".to_string(), "5".to_string()],
    ];
    let board = Board::from_cells(cells, Limits::default()).unwrap();
    assert_eq!(board.report().value, "4.66667");
}

fn payoffs() -> impl Strategy<Value = Array2<f64>> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| {
        proptest::collection::vec(-10.0f64..10.0, r * c).prop_map(move |v| {
            Array2::from_shape_vec((r, c), v).expect("shape matches length")
        })
    })
}

proptest! {
    #[test]
    fn prop_strategies_are_distributions(m in payoffs()) {
        let soln = solution(&m, 1000);
        for s in [&soln.max_strategy, &soln.min_strategy] {
            prop_assert!((s.iter().sum::<f64>() - 1.0).abs() < 1e-6);
            prop_assert!(s.iter().all(|&p| p >= -1e-9));
        }
        prop_assert!(is_optimal(&m, &soln, 1e-6));
    }

    #[test]
    fn prop_shift_invariant(m in payoffs(), k in -20.0f64..20.0) {
        let soln = solution(&m, 1000);
        let shifted = solution(&(&m + k), 1000);
        prop_assert!((shifted.value - soln.value - k).abs() < 1e-6);
        let pairs = soln.max_strategy.iter().zip(&shifted.max_strategy)
            .chain(soln.min_strategy.iter().zip(&shifted.min_strategy));
        for (a, b) in pairs {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_scale_multiplies_value(m in payoffs(), c in 0.5f64..4.0) {
        let soln = solution(&m, 1000);
        let scaled = solution(&(&m * c), 1000);
        let tol = 1e-6 * soln.value.abs().max(1.0) * c;
        prop_assert!((scaled.value - soln.value * c).abs() < tol);
        let pairs = soln.max_strategy.iter().zip(&scaled.max_strategy)
            .chain(soln.min_strategy.iter().zip(&scaled.min_strategy));
        for (a, b) in pairs {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_units_do_not_matter(m in payoffs(), e in -4i32..=8) {
        let c = 10f64.powi(e);
        let soln = solution(&m, 1000);
        let scaled = &m * c;
        let big = solution(&scaled, 1000);
        let tol = 1e-6 * soln.value.abs().max(1.0) * c;
        prop_assert!((big.value - soln.value * c).abs() < tol);
        prop_assert!(is_optimal(&scaled, &big, 1e-6 * c));
        let pairs = soln.max_strategy.iter().zip(&big.max_strategy)
            .chain(soln.min_strategy.iter().zip(&big.min_strategy));
        for (a, b) in pairs {
            prop_assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_zero_budget_unresolved(m in payoffs()) {
        let (r, c) = m.dim();
        prop_assert_eq!(solve_game(m.view(), 0, 1e-6), Report::unresolved(r, c));
    }

    #[test]
    fn prop_repeatable(m in payoffs()) {
        let (r, c) = m.dim();
        let budget = r * c * 10;
        prop_assert_eq!(
            solve_game(m.view(), budget, 1e-6),
            solve_game(m.view(), budget, 1e-6)
        );
    }
}
