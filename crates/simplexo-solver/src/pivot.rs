use simplexo_types::SolveError;

use crate::tableau::Tableau;
use crate::tolerance::{BLAND_EPS, BLAND_EPS_MIN, DEGENERATE, OPTIMAL, PIV_LEAVE};

/// Regla de selección de la columna entrante
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PivotRule {
    /// Columna de mayor coste reducido positivo
    Dantzig,
    /// Primera columna elegible por índice, con umbral relajable
    Bland,
}

impl PivotRule {
    /// Interpretar el selector textual de regla de pivoteo
    ///
    /// La cadena vacía selecciona la regla por defecto (Bland). `"pan97"`
    /// se acepta por compatibilidad y resuelve también a la regla por
    /// defecto. Cualquier otro selector se rechaza.
    pub(crate) fn parse(criteria: &str) -> Result<Self, SolveError> {
        match criteria {
            "" | "bland" | "pan97" => Ok(PivotRule::Bland),
            "dantzig" => Ok(PivotRule::Dantzig),
            _ => Err(SolveError::CondUnsatisfied),
        }
    }
}

/// Resultado de una ronda de pivoteo
enum Step {
    Pivoted,
    Optimal,
    Unbounded,
    Precision,
}

/// Resultado del bucle de pivoteo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PivotStatus {
    /// Se agotó el límite de iteraciones antes de converger
    IterLimit,
    Optimal,
    Unbounded,
    /// Más de cinco pivotes consecutivos sin mejora del valor
    Degenerate,
    /// La regla entrante no halló columna sin que saltara la optimalidad
    Precision,
}

/// Test de optimalidad: ningún coste reducido por encima del umbral
fn is_optimal(table: &Tableau) -> bool {
    (0..table.nvar).all(|j| table.data[j] <= OPTIMAL)
}

/// Regla de Dantzig: columna no básica con mayor coste reducido positivo
fn enter_dantzig(table: &Tableau) -> Option<usize> {
    let mut q = None;
    let mut best = 0.0;

    for j in 0..table.nvar {
        if table.is_basic(j) {
            continue;
        }
        let beta_j = table.data[j];
        if beta_j > best {
            best = beta_j;
            q = Some(j);
        }
    }
    q
}

/// Regla de Bland tolerante: primera columna con coste reducido > ε
///
/// Con comparaciones estrictas contra cero la precisión finita declara
/// optimalidad antes de tiempo; el umbral empieza en `BLAND_EPS` y se divide
/// por 10 hasta el piso `BLAND_EPS_MIN` antes de rendirse.
fn enter_bland(table: &Tableau) -> Option<usize> {
    let mut epsilon = BLAND_EPS;

    loop {
        for j in 0..table.nvar {
            if !table.is_basic(j) && table.data[j] > epsilon {
                return Some(j);
            }
        }
        if epsilon >= BLAND_EPS_MIN {
            epsilon /= 10.0;
        } else {
            return None;
        }
    }
}

/// Regla del cociente mínimo para la fila saliente
///
/// Sólo cuentan las filas con y_i_q por encima del denominador mínimo; en
/// caso de empate gana la primera fila vista. `None` significa que ninguna
/// fila limita el avance: el LP es no acotado.
fn leave_min_ratio(table: &Tableau, q: usize) -> Option<usize> {
    let mut p = None;
    let mut min_x_iq = f64::INFINITY;

    for i in 0..table.m {
        let y_i_q = table.data[(i + 1) * table.ld + q];
        if y_i_q <= PIV_LEAVE {
            continue;
        }
        let x_iq = table.data[(i + 1) * table.ld + table.nvar] / y_i_q;
        if x_iq < min_x_iq {
            min_x_iq = x_iq;
            p = Some(i);
        }
    }
    p
}

/// Una ronda: test de optimalidad, elección de columna y fila, pivote
fn pivot_once(table: &mut Tableau, rule: PivotRule) -> Step {
    if is_optimal(table) {
        return Step::Optimal;
    }
    let q = match rule {
        PivotRule::Dantzig => enter_dantzig(table),
        PivotRule::Bland => enter_bland(table),
    };
    let q = match q {
        Some(col) => col,
        None => return Step::Precision,
    };
    let p = match leave_min_ratio(table, q) {
        Some(row) => row,
        None => return Step::Unbounded,
    };
    table.basis[p] = q;
    table.pivot_core(p, q, true, true, true);
    Step::Pivoted
}

/// Bucle de pivoteo con contador de épocas compartido entre fases
///
/// `epoch` se incrementa en cada intento de pivote; al alcanzar `niter` se
/// devuelve `IterLimit`. Un pivote que no mejora la celda de valor en más
/// de `DEGENERATE` incrementa el contador de estancamiento; más de cinco
/// seguidos indican ciclo por degeneración.
pub(crate) fn pivot_until(
    table: &mut Tableau,
    rule: PivotRule,
    epoch: &mut usize,
    niter: usize,
) -> PivotStatus {
    let mut old_value = f64::INFINITY;
    let mut degen_iter = 0;

    while *epoch < niter {
        *epoch += 1;
        match pivot_once(table, rule) {
            Step::Pivoted => {}
            Step::Optimal => return PivotStatus::Optimal,
            Step::Unbounded => return PivotStatus::Unbounded,
            Step::Precision => return PivotStatus::Precision,
        }
        if old_value <= table.value_cell() + DEGENERATE && !is_optimal(table) {
            degen_iter += 1;
            if degen_iter > 5 {
                return PivotStatus::Degenerate;
            }
        } else {
            degen_iter = 0;
        }
        old_value = table.value_cell();
    }
    PivotStatus::IterLimit
}
