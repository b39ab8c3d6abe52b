use simplexo_types::{LinearConstraint, Solution, SolveError};

use crate::pivot::{pivot_until, PivotRule, PivotStatus};
use crate::tableau::Tableau;
use crate::tolerance::FEASIBLE;

/// Resolver un LP en forma estándar con el simplex de dos fases
///
/// Forma estándar:
///   min  c'x
///   s.t. Ai x =(, >=, <=) bi, i = 1, ..., m
///        x >= 0
///
/// Args:
///   - objective: coeficientes de la función objetivo (n elementos)
///   - constraints: restricciones lineales (m elementos, filas de ancho n)
///   - criteria: regla de pivoteo: "" (por defecto), "dantzig", "bland",
///     "pan97" (alias de la regla por defecto)
///   - niter: límite de iteraciones compartido por ambas fases
///
/// Returns:
///   - Ok(Solution): solución óptima y valor del objetivo
///   - Err(SolveError): diagnóstico (infactible, no acotado, etc.)
///
/// # Ejemplo
///
/// ```
/// use simplexo_solver::solve_standard;
/// use simplexo_types::{ConsSense, LinearConstraint};
///
/// // max 3x₁ + 2x₂  ⇒  min −3x₁ − 2x₂
/// let objective = [-3.0, -2.0];
/// let constraints = vec![
///     LinearConstraint::new(vec![1.0, 1.0], 9.0, ConsSense::Le),
///     LinearConstraint::new(vec![3.0, 1.0], 18.0, ConsSense::Le),
///     LinearConstraint::new(vec![1.0, 0.0], 7.0, ConsSense::Le),
///     LinearConstraint::new(vec![0.0, 1.0], 6.0, ConsSense::Le),
/// ];
///
/// let sol = solve_standard(&objective, &constraints, "bland", 1000).unwrap();
/// assert!((sol.value + 22.5).abs() < 1e-8);
/// assert!((sol.x[0] - 4.5).abs() < 1e-8);
/// assert!((sol.x[1] - 4.5).abs() < 1e-8);
/// ```
pub fn solve_standard(
    objective: &[f64],
    constraints: &[LinearConstraint],
    criteria: &str,
    niter: usize,
) -> Result<Solution, SolveError> {
    let rule = PivotRule::parse(criteria)?;
    let n = objective.len();

    if constraints.iter().any(|cons| cons.coef.len() != n) {
        return Err(SolveError::CondUnsatisfied);
    }
    let mut epoch = 0;

    // ========================================================================
    // FASE 1: LP auxiliar con variables artificiales
    // ========================================================================

    let mut table = Tableau::build_phase1(constraints, n)?;

    match pivot_until(&mut table, rule, &mut epoch, niter) {
        PivotStatus::Optimal => {
            // el objetivo de la Fase 1 debe haber bajado a ~0
            if table.value_cell() > FEASIBLE {
                return Err(SolveError::Infeasibility);
            }
            table.purge_artificials();
            table.drop_artificial_cols();
        }
        PivotStatus::IterLimit => return Err(SolveError::ExceedIterLimit),
        PivotStatus::Unbounded => return Err(SolveError::Unboundedness),
        PivotStatus::Degenerate => return Err(SolveError::Degeneracy),
        PivotStatus::Precision => return Err(SolveError::PrecisionError),
    }

    // ========================================================================
    // FASE 2: objetivo real desde la BFS de la Fase 1
    // ========================================================================

    table.install_objective(objective);

    match pivot_until(&mut table, rule, &mut epoch, niter) {
        PivotStatus::Optimal => {
            let (x, value) = table.extract_solution();
            Ok(Solution { x, value })
        }
        PivotStatus::IterLimit => Err(SolveError::ExceedIterLimit),
        PivotStatus::Unbounded => Err(SolveError::Unboundedness),
        PivotStatus::Degenerate => Err(SolveError::Degeneracy),
        PivotStatus::Precision => Err(SolveError::PrecisionError),
    }
}
