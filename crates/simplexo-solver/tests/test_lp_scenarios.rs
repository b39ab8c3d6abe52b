//! Escenarios de referencia del motor simplex
//!
//! Cada caso es un LP pequeño con óptimo conocido; los valores esperados
//! vienen de las fuentes citadas en cada test.

use simplexo_solver::{solve_general, solve_standard, SolveError};
use simplexo_types::{ConsSense, LinearConstraint, VariableBound};

fn cons(coef: Vec<f64>, rhs: f64, sense: ConsSense) -> LinearConstraint {
    LinearConstraint::new(coef, rhs, sense)
}

#[test]
fn test_lp_max_with_upper_bound_rows() {
    // (de: https://online-optimizer.appspot.com/?model=builtin:default.mod)
    //
    //     max  3x₁ + 2x₂
    //     s.t.  x₁ +  x₂ <=  9
    //          3x₁ +  x₂ <= 18
    //           x₁       <=  7
    //                 x₂ <=  6
    //          x₁, x₂ >= 0
    //
    // Se minimiza −3x₁ − 2x₂; óptimo en (4.5, 4.5) con valor −22.5
    let objective = [-3.0, -2.0];
    let constraints = vec![
        cons(vec![1.0, 1.0], 9.0, ConsSense::Le),
        cons(vec![3.0, 1.0], 18.0, ConsSense::Le),
        cons(vec![1.0, 0.0], 7.0, ConsSense::Le),
        cons(vec![0.0, 1.0], 6.0, ConsSense::Le),
    ];

    let sol = solve_standard(&objective, &constraints, "bland", 1000).unwrap();

    assert!((sol.value + 22.5).abs() < 1e-8);
    assert!((sol.x[0] - 4.5).abs() < 1e-8);
    assert!((sol.x[1] - 4.5).abs() < 1e-8);
}

#[test]
fn test_lp_mixed_senses_needs_phase1() {
    // (de: https://developers.google.com/optimization/lp/lp_example)
    //
    //     max  3x + 4y
    //     s.t.  x + 2y <= 14
    //          3x −  y >=  0
    //           x −  y <=  2
    //          x, y >= 0
    //
    // Óptimo en (6, 4) con valor máximo 34 (aquí −34)
    let objective = [-3.0, -4.0];
    let constraints = vec![
        cons(vec![1.0, 2.0], 14.0, ConsSense::Le),
        cons(vec![3.0, -1.0], 0.0, ConsSense::Ge),
        cons(vec![1.0, -1.0], 2.0, ConsSense::Le),
    ];

    let sol = solve_standard(&objective, &constraints, "bland", 1000).unwrap();

    assert!((sol.value + 34.0).abs() < 1e-8);
    assert!((sol.x[0] - 6.0).abs() < 1e-8);
    assert!((sol.x[1] - 4.0).abs() < 1e-8);
}

#[test]
fn test_lp_free_variable_and_shifted_lower_bound() {
    // (de: https://docs.scipy.org/doc/scipy/reference/generated/scipy.optimize.linprog.html)
    //
    //     min  −x₀ + 4x₁
    //     s.t. −3x₀ +  x₁ <=  6
    //           −x₀ − 2x₁ >= −4
    //          x₀ libre, x₁ >= −3
    //
    // Óptimo en (10, −3) con valor −22
    let objective = [-1.0, 4.0];
    let constraints = vec![
        cons(vec![-3.0, 1.0], 6.0, ConsSense::Le),
        cons(vec![-1.0, -2.0], -4.0, ConsSense::Ge),
    ];
    let bounds = vec![
        VariableBound::free("x0"),
        VariableBound::lower("x1", -3.0),
    ];

    let sol = solve_general(&objective, &constraints, Some(&bounds), "bland", 1000).unwrap();

    assert!((sol.value + 22.0).abs() < 1e-8);
    assert!((sol.x[0] - 10.0).abs() < 1e-8);
    assert!((sol.x[1] + 3.0).abs() < 1e-8);
}

#[test]
fn test_lp_two_free_variables() {
    // (de: https://www.mathworks.com/help/optim/ug/linprog.html)
    //
    //     min  −x − y/3
    //     s.t. seis filas <= con x, y libres
    //
    // Óptimo en (2/3, 4/3) con valor −10/9
    let objective = [-1.0, -1.0 / 3.0];
    let constraints = vec![
        cons(vec![1.0, 1.0], 2.0, ConsSense::Le),
        cons(vec![1.0, 0.25], 1.0, ConsSense::Le),
        cons(vec![1.0, -1.0], 2.0, ConsSense::Le),
        cons(vec![-0.25, -1.0], 1.0, ConsSense::Le),
        cons(vec![-1.0, -1.0], -1.0, ConsSense::Le),
        cons(vec![-1.0, 1.0], 2.0, ConsSense::Le),
    ];
    let bounds = vec![VariableBound::free("x"), VariableBound::free("y")];

    let sol = solve_general(&objective, &constraints, Some(&bounds), "bland", 1000).unwrap();

    assert!((sol.value + 10.0 / 9.0).abs() < 1e-8);
    assert!((sol.x[0] - 2.0 / 3.0).abs() < 1e-8);
    assert!((sol.x[1] - 4.0 / 3.0).abs() < 1e-8);
}

#[test]
fn test_lp_equality_system_phase1_heavy() {
    // (de: https://sma.epfl.ch/~niemeier/opt09/opt09_ch06.pdf)
    //
    //     min  x₁ + x₂ + x₃
    //     s.t.  x₁ + 2x₂ + 3x₃      =  3
    //          −x₁ + 2x₂ + 6x₃      =  2
    //               −4x₂ − 9x₃      = −5
    //                     3x₃ + x₄  =  1
    //          x >= 0
    //
    // Óptimo en (0.5, 1.25, 0, 1) con valor 7/4
    let objective = [1.0, 1.0, 1.0, 0.0];
    let constraints = vec![
        cons(vec![1.0, 2.0, 3.0, 0.0], 3.0, ConsSense::Eq),
        cons(vec![-1.0, 2.0, 6.0, 0.0], 2.0, ConsSense::Eq),
        cons(vec![0.0, -4.0, -9.0, 0.0], -5.0, ConsSense::Eq),
        cons(vec![0.0, 0.0, 3.0, 1.0], 1.0, ConsSense::Eq),
    ];

    let sol = solve_standard(&objective, &constraints, "bland", 1000).unwrap();

    assert!((sol.value - 7.0 / 4.0).abs() < 1e-8);
    assert!((sol.x[0] - 0.5).abs() < 1e-8);
    assert!((sol.x[1] - 1.25).abs() < 1e-8);
    assert!(sol.x[2].abs() < 1e-8);
    assert!((sol.x[3] - 1.0).abs() < 1e-8);
}

/// LP degenerado de Beale: todas las β activas valen 0 en el origen
fn beale() -> ([f64; 4], Vec<LinearConstraint>) {
    //     min  −¾x₁ + 20x₂ − ½x₃ + 6x₄
    //     s.t. 0.25x₁ −  8x₂ −   x₃ + 9x₄ <= 0
    //          0.5x₁  − 12x₂ − ½x₃  + 3x₄ <= 0
    //                            x₃       <= 1
    //          x >= 0
    let objective = [-3.0 / 4.0, 20.0, -0.5, 6.0];
    let constraints = vec![
        cons(vec![0.25, -8.0, -1.0, 9.0], 0.0, ConsSense::Le),
        cons(vec![0.5, -12.0, -0.5, 3.0], 0.0, ConsSense::Le),
        cons(vec![0.0, 0.0, 1.0, 0.0], 1.0, ConsSense::Le),
    ];
    (objective, constraints)
}

#[test]
fn test_lp_beale_terminates_under_bland() {
    let (objective, constraints) = beale();

    let sol = solve_standard(&objective, &constraints, "bland", 1000).unwrap();

    // óptimo en (1, 0, 1, 0) con valor −5/4
    assert!((sol.value + 1.25).abs() < 1e-8);
    assert!((sol.x[0] - 1.0).abs() < 1e-8);
    assert!(sol.x[1].abs() < 1e-8);
    assert!((sol.x[2] - 1.0).abs() < 1e-8);
    assert!(sol.x[3].abs() < 1e-8);
}

#[test]
fn test_lp_beale_cycles_under_dantzig() {
    let (objective, constraints) = beale();

    // seis pivotes seguidos sin mejora disparan el diagnóstico
    let result = solve_standard(&objective, &constraints, "dantzig", 1000);

    assert_eq!(result.unwrap_err(), SolveError::Degeneracy);
}

#[test]
fn test_lp_negating_objective_maximizes() {
    // min c·x y min −c·x sobre la misma caja: el segundo maximiza c·x
    let objective = [1.0, 2.0];
    let negated = [-1.0, -2.0];
    let constraints = vec![
        cons(vec![1.0, 0.0], 3.0, ConsSense::Le),
        cons(vec![0.0, 1.0], 4.0, ConsSense::Le),
    ];

    let min_sol = solve_standard(&objective, &constraints, "bland", 1000).unwrap();
    let max_sol = solve_standard(&negated, &constraints, "bland", 1000).unwrap();

    assert!(min_sol.value.abs() < 1e-9);
    // máximo de c·x = 1·3 + 2·4 = 11, reportado como −11
    assert!((max_sol.value + 11.0).abs() < 1e-9);
    assert!((max_sol.x[0] - 3.0).abs() < 1e-9);
    assert!((max_sol.x[1] - 4.0).abs() < 1e-9);
}
