use simplexo_types::{
    BoundKind, ConsSense, LinearConstraint, Model, Solution, SolveError, VariableBound,
};

use crate::standard::solve_standard;

/// Tamaño (M, N) del problema en forma estándar
///
/// Reglas:
///   1. una variable libre se parte en dos no negativas: N += 1
///   2. una cota superior añade la fila "x_j <= ub": M += 1
fn standard_form_size(bounds: &[VariableBound], m: usize, n: usize) -> (usize, usize) {
    let mut mm = m;
    let mut nn = n;

    for bd in bounds {
        if bd.b_kind == BoundKind::Free {
            nn += 1;
        }
        if matches!(bd.b_kind, BoundKind::Upper | BoundKind::Boxed) {
            mm += 1;
        }
    }
    (mm, nn)
}

/// Transformar el LP general a forma estándar (`x >= 0`)
///
/// Recorre las variables en orden; cada una ocupa un bloque contiguo de
/// columnas (dos para las libres). Devuelve el objetivo y las restricciones
/// transformadas junto con `obj_shift`, el término constante tal que
/// `c·x = c'·x' + obj_shift`.
fn transform_to_standard(
    objective: &[f64],
    constraints: &[LinearConstraint],
    bounds: &[VariableBound],
    nn: usize,
) -> (Vec<f64>, Vec<LinearConstraint>, f64) {
    let m = constraints.len();
    let n = objective.len();

    let mut obj2 = vec![0.0; nn];
    let mut cons2: Vec<LinearConstraint> = constraints
        .iter()
        .map(|cons| LinearConstraint {
            name: cons.name.clone(),
            coef: vec![0.0; nn],
            rhs: cons.rhs,
            sense: cons.sense,
        })
        .collect();
    let mut obj_shift = 0.0;
    let mut ctr = 0;

    for j in 0..n {
        let bd = &bounds[j];

        // columna y⁺ de la variable original j
        obj2[ctr] = objective[j];
        for i in 0..m {
            cons2[i].coef[ctr] = constraints[i].coef[j];
        }

        // cota superior explícita: fila nueva "y⁺ <= ub"
        let ub_row = if matches!(bd.b_kind, BoundKind::Upper | BoundKind::Boxed) {
            let mut row = LinearConstraint::new(vec![0.0; nn], bd.ub, ConsSense::Le);
            row.coef[ctr] = 1.0;
            cons2.push(row);
            Some(cons2.len() - 1)
        } else {
            None
        };
        ctr += 1;

        // variable libre: "x_j = y⁺ − y⁻" con columna y⁻ negada
        if bd.b_kind == BoundKind::Free {
            obj2[ctr] = -objective[j];
            for i in 0..m {
                cons2[i].coef[ctr] = -constraints[i].coef[j];
            }
            ctr += 1;
        }

        // cota inferior: desplazamiento "y = x_j − lb" sobre cada lado derecho
        if matches!(bd.b_kind, BoundKind::Lower | BoundKind::Boxed) {
            obj_shift += objective[j] * bd.lb;
            for i in 0..m {
                cons2[i].rhs -= constraints[i].coef[j] * bd.lb;
            }
            if let Some(r) = ub_row {
                // su propia fila de cota superior pasa a ub − lb
                cons2[r].rhs -= bd.lb;
            }
        }
    }
    (obj2, cons2, obj_shift)
}

/// Recuperar la solución original desde la solución en forma estándar
fn recover_solution(
    bounds: &[VariableBound],
    n: usize,
    sol2: &Solution,
    obj_shift: f64,
) -> Solution {
    let mut x = vec![0.0; n];
    let mut ctr = 0;

    for (j, bd) in bounds.iter().enumerate() {
        match bd.b_kind {
            BoundKind::Free => {
                x[j] = sol2.x[ctr] - sol2.x[ctr + 1];
                ctr += 2;
            }
            BoundKind::Lower | BoundKind::Boxed => {
                x[j] = sol2.x[ctr] + bd.lb;
                ctr += 1;
            }
            BoundKind::Upper => {
                x[j] = sol2.x[ctr];
                ctr += 1;
            }
        }
    }
    debug_assert_eq!(ctr, sol2.x.len());
    Solution {
        x,
        value: sol2.value + obj_shift,
    }
}

/// Resolver un LP de forma general
///
/// Forma general:
///   min  c'x
///   s.t. Ai x =(, >=, <=) bi, i = 1, ..., m
///        lb <= x <= ub  (según la cota de cada variable)
///
/// `bounds` en `None` significa "x >= 0" y el problema se resuelve
/// directamente en forma estándar; en otro caso el LP se transforma, se
/// resuelve y la solución se recupera en las variables originales.
///
/// Args:
///   - objective: coeficientes de la función objetivo (n elementos)
///   - constraints: restricciones lineales (m elementos, filas de ancho n)
///   - bounds: cotas por variable (n elementos) o `None`
///   - criteria: regla de pivoteo ("", "dantzig", "bland", "pan97")
///   - niter: límite de iteraciones compartido por ambas fases
///
/// # Ejemplo
///
/// ```
/// use simplexo_solver::solve_general;
/// use simplexo_types::{ConsSense, LinearConstraint, VariableBound};
///
/// // min −x₀ + 4x₁ con −3x₀+x₁ <= 6, −x₀−2x₁ >= −4, x₀ libre, x₁ >= −3
/// let objective = [-1.0, 4.0];
/// let constraints = vec![
///     LinearConstraint::new(vec![-3.0, 1.0], 6.0, ConsSense::Le),
///     LinearConstraint::new(vec![-1.0, -2.0], -4.0, ConsSense::Ge),
/// ];
/// let bounds = vec![
///     VariableBound::free("x0"),
///     VariableBound::lower("x1", -3.0),
/// ];
///
/// let sol = solve_general(&objective, &constraints, Some(&bounds), "bland", 1000).unwrap();
/// assert!((sol.value + 22.0).abs() < 1e-8);
/// ```
pub fn solve_general(
    objective: &[f64],
    constraints: &[LinearConstraint],
    bounds: Option<&[VariableBound]>,
    criteria: &str,
    niter: usize,
) -> Result<Solution, SolveError> {
    let bounds = match bounds {
        Some(b) => b,
        None => return solve_standard(objective, constraints, criteria, niter),
    };
    let n = objective.len();
    let m = constraints.len();

    if bounds.len() != n || constraints.iter().any(|cons| cons.coef.len() != n) {
        return Err(SolveError::CondUnsatisfied);
    }
    let (mm, nn) = standard_form_size(bounds, m, n);
    let (obj2, cons2, obj_shift) = transform_to_standard(objective, constraints, bounds, nn);
    debug_assert_eq!(cons2.len(), mm);

    let sol2 = solve_standard(&obj2, &cons2, criteria, niter)?;
    Ok(recover_solution(bounds, n, &sol2, obj_shift))
}

/// Resolver un modelo agregado (envoltorio de [`solve_general`])
pub fn solve_model(model: &Model, criteria: &str, niter: usize) -> Result<Solution, SolveError> {
    solve_general(
        &model.objective,
        &model.constraints,
        model.bounds.as_deref(),
        criteria,
        niter,
    )
}
