use simplexo_types::{ConsSense, LinearConstraint, SolveError};

use crate::blas;
use crate::tolerance::ZERO_BETA;

/// Tabla simplex del LP auxiliar de la Fase 1
///
/// Matriz densa por filas con dimensión de almacenamiento `ld` fija:
///
/// ```text
///       x₁ … xₙ  s₁ … sₖ  a₁ … aᵣ │ β
/// z   [ costes reducidos          │ valor ]   fila 0
/// r₁  [ A (filas normalizadas)    │ b     ]   filas 1..m
/// …
/// ```
///
/// La fila 0 es la fila de costes; la columna `nvar` guarda el lado derecho
/// (β) actual. Tras purgar las artificiales el ancho lógico `nvar` se
/// contrae a `n + nslack` pero `ld` no cambia: las celdas sobrantes quedan
/// fuera del ancho lógico y no se vuelven a leer.
#[derive(Debug, Clone)]
pub(crate) struct Tableau {
    /// Celdas de la tabla, (m+1) × ld por filas
    pub(crate) data: Vec<f64>,

    /// Dimensión de almacenamiento de cada fila (ancho inicial)
    pub(crate) ld: usize,

    /// Número de restricciones (la tabla tiene m+1 filas)
    pub(crate) m: usize,

    /// Variables del problema estándar original
    pub(crate) n: usize,

    /// Variables de holgura añadidas
    pub(crate) nslack: usize,

    /// Variables artificiales añadidas (0 tras la contracción)
    pub(crate) nartif: usize,

    /// Ancho lógico actual; la columna `nvar` es el lado derecho
    pub(crate) nvar: usize,

    /// basis[i] = columna básica de la fila i+1
    ///
    /// Una fila anulada por redundante conserva su índice artificial; todo
    /// consumidor debe tratar esas filas como inertes.
    pub(crate) basis: Vec<usize>,

    /// Tipos de restricción tras la normalización de signo del lado derecho
    pub(crate) senses: Vec<ConsSense>,
}

/// fila_dst += a · fila_src, sobre `n` celdas de la misma tabla plana
///
/// Las filas no se solapan porque distan al menos `ld >= n` celdas.
fn axpy_rows(data: &mut [f64], src: usize, dst: usize, n: usize, a: f64) {
    if src > dst {
        let (head, tail) = data.split_at_mut(src);
        blas::daxpy(n, a, &tail[..n], 1, &mut head[dst..dst + n], 1);
    } else {
        let (head, tail) = data.split_at_mut(dst);
        blas::daxpy(n, a, &head[src..src + n], 1, &mut tail[..n], 1);
    }
}

/// Tipos de restricción ajustados al cambio de signo del lado derecho
///
/// Si `rhs < 0` la fila entera se negará, con lo que `Ge` y `Le` se
/// intercambian; `Eq` se conserva.
fn shadow_senses(constraints: &[LinearConstraint]) -> Vec<ConsSense> {
    constraints
        .iter()
        .map(|cons| {
            if cons.rhs >= 0.0 {
                cons.sense
            } else {
                match cons.sense {
                    ConsSense::Eq => ConsSense::Eq,
                    ConsSense::Ge => ConsSense::Le,
                    ConsSense::Le => ConsSense::Ge,
                }
            }
        })
        .collect()
}

impl Tableau {
    /// Construir la tabla del LP auxiliar de la Fase 1
    ///
    /// Trabajo:
    ///   1. normalizar el signo del lado derecho fila a fila
    ///   2. añadir holguras (`Ge`, `Le`) y artificiales (`Eq`, `Ge`)
    ///   3. fijar la base inicial y la fila de costes de la Fase 1
    pub(crate) fn build_phase1(
        constraints: &[LinearConstraint],
        n: usize,
    ) -> Result<Self, SolveError> {
        let m = constraints.len();
        let senses = shadow_senses(constraints);

        // Una fila Ge normalizada aporta holgura y artificial, una columna
        // más que el resto
        let extra = senses.iter().filter(|s| **s == ConsSense::Ge).count();
        let ncol = m + n + 1 + extra;
        let ld = ncol;

        let mut table = Tableau {
            data: vec![0.0; (m + 1) * ld],
            ld,
            m,
            n,
            nslack: 0,
            nartif: 0,
            nvar: 0,
            basis: vec![0; m],
            senses,
        };
        table.fill_constraint_rows(constraints, ncol);
        table.add_slacks();
        table.add_artificials();
        table.nvar = n + table.nslack + table.nartif;
        if m > table.nvar {
            return Err(SolveError::OverDetermination);
        }
        table.fill_initial_basis();
        table.fill_phase1_cost_row();
        Ok(table)
    }

    /// Copiar coeficientes y lado derecho, negando las filas con rhs < 0
    fn fill_constraint_rows(&mut self, constraints: &[LinearConstraint], ncol: usize) {
        for (i, cons) in constraints.iter().enumerate() {
            let row = (i + 1) * self.ld;

            if cons.rhs >= 0.0 {
                self.data[row + ncol - 1] = cons.rhs;
                self.data[row..row + self.n].copy_from_slice(&cons.coef);
            } else {
                self.data[row + ncol - 1] = -cons.rhs;
                for j in 0..self.n {
                    self.data[row + j] = -cons.coef[j];
                }
            }
        }
    }

    /// Holguras: −1 para `Ge`, +1 para `Le`
    fn add_slacks(&mut self) {
        for i in 0..self.m {
            let row = (i + 1) * self.ld;
            match self.senses[i] {
                ConsSense::Ge => {
                    self.data[row + self.n + self.nslack] = -1.0;
                    self.nslack += 1;
                }
                ConsSense::Le => {
                    self.data[row + self.n + self.nslack] = 1.0;
                    self.nslack += 1;
                }
                ConsSense::Eq => {}
            }
        }
    }

    /// Artificiales: +1 en su fila, −1 en la fila de costes
    fn add_artificials(&mut self) {
        for i in 0..self.m {
            if self.senses[i] == ConsSense::Le {
                continue;
            }
            let col = self.n + self.nslack + self.nartif;
            self.data[(i + 1) * self.ld + col] = 1.0;
            self.data[col] = -1.0;
            self.nartif += 1;
        }
    }

    /// Base inicial: la artificial de la fila si existe, si no su holgura
    fn fill_initial_basis(&mut self) {
        let mut tmp_nslack = 0;
        let mut tmp_nartif = 0;

        for i in 0..self.m {
            match self.senses[i] {
                ConsSense::Eq => {
                    self.basis[i] = self.n + self.nslack + tmp_nartif;
                    tmp_nartif += 1;
                }
                ConsSense::Ge => {
                    self.basis[i] = self.n + self.nslack + tmp_nartif;
                    tmp_nartif += 1;
                    tmp_nslack += 1;
                }
                ConsSense::Le => {
                    self.basis[i] = self.n + tmp_nslack;
                    tmp_nslack += 1;
                }
            }
        }
    }

    /// Sumar a la fila de costes cada fila con artificial básica
    ///
    /// Anula los costes reducidos de las artificiales iniciales; la celda de
    /// valor queda con el objetivo de la Fase 1 (suma de las β afectadas).
    fn fill_phase1_cost_row(&mut self) {
        let ncol = self.nvar + 1;
        for i in 0..self.m {
            if self.senses[i] == ConsSense::Le {
                continue;
            }
            axpy_rows(&mut self.data, (i + 1) * self.ld, 0, ncol, 1.0);
        }
    }

    /// Celda de valor actual (lado derecho de la fila de costes)
    pub(crate) fn value_cell(&self) -> f64 {
        self.data[self.nvar]
    }

    /// ¿Es la columna j básica en alguna fila?
    pub(crate) fn is_basic(&self, j: usize) -> bool {
        self.basis.contains(&j)
    }

    /// Eliminación de pivote sobre (fila p, columna q)
    ///
    /// Trabajo:
    ///   regla 1. fila_{p+1} se normaliza dividiendo por y_p_q
    ///   regla 2. fila_{i+1} −= fila_{p+1} · y_i_q, para i ≠ p
    ///   regla 3. fila_0 −= fila_{p+1} · y_0_q
    pub(crate) fn pivot_core(&mut self, p: usize, q: usize, rule1: bool, rule2: bool, rule3: bool) {
        let ncol = self.nvar + 1;
        let rowp = (p + 1) * self.ld;
        let y_p_q = self.data[rowp + q];

        if rule1 {
            blas::dscal(ncol, 1.0 / y_p_q, &mut self.data[rowp..rowp + ncol], 1);
        }
        if rule2 {
            for i in 0..self.m {
                if i == p {
                    continue;
                }
                let rowi = (i + 1) * self.ld;
                let rto = -self.data[rowi + q];
                axpy_rows(&mut self.data, rowp, rowi, ncol, rto);
            }
        }
        if rule3 {
            let rto = -self.data[q];
            axpy_rows(&mut self.data, rowp, 0, ncol, rto);
        }
    }

    /// Expulsar de la base las artificiales residuales a valor cero
    ///
    /// Para cada fila con artificial básica se pivota sobre la columna real
    /// de mayor |y|. Si toda la fila real es ~0 la restricción es redundante:
    /// la fila se anula y la artificial queda como relleno inerte.
    pub(crate) fn purge_artificials(&mut self) {
        let nreal = self.n + self.nslack;

        for i in 0..self.m {
            if self.basis[i] < nreal {
                continue;
            }
            let rowi = (i + 1) * self.ld;
            let mut q = 0;
            let mut maxv = f64::NEG_INFINITY;
            for j in 0..nreal {
                let ele = self.data[rowi + j].abs();
                if ele > maxv {
                    maxv = ele;
                    q = j;
                }
            }
            if maxv < ZERO_BETA {
                self.data[rowi + self.nvar] = 0.0;
                for j in 0..nreal {
                    self.data[rowi + j] = 0.0;
                }
                continue;
            }
            // La fila de costes aún es la de la Fase 1: no se toca (regla 3)
            self.pivot_core(i, q, true, true, false);
            self.basis[i] = q;
        }
    }

    /// Contraer la tabla eliminando las columnas artificiales
    ///
    /// Basta con desplazar la columna del lado derecho `nartif` celdas a la
    /// izquierda en cada fila; el ancho lógico pasa a `n + nslack`.
    pub(crate) fn drop_artificial_cols(&mut self) {
        let nreal = self.n + self.nslack;

        if self.nartif > 0 {
            for i in 0..=self.m {
                let row = i * self.ld;
                self.data[row + nreal] = self.data[row + nreal + self.nartif];
            }
        }
        self.nvar = nreal;
        self.nartif = 0;
    }

    /// Instalar la función objetivo real en la fila de costes
    ///
    /// Escribe −c en las columnas originales, anula el resto de la fila
    /// (incluida la celda de valor) y elimina los costes reducidos de las
    /// columnas básicas sumando sus filas.
    pub(crate) fn install_objective(&mut self, objective: &[f64]) {
        for j in 0..self.n {
            self.data[j] = -objective[j];
        }
        for j in self.n..=self.nvar {
            self.data[j] = 0.0;
        }
        for i in 0..self.m {
            if self.basis[i] >= self.nvar {
                // fila redundante anulada en la purga
                continue;
            }
            let rto = -self.data[self.basis[i]];
            axpy_rows(&mut self.data, (i + 1) * self.ld, 0, self.nvar + 1, rto);
        }
    }

    /// Extraer la solución del problema estándar y su valor
    pub(crate) fn extract_solution(&self) -> (Vec<f64>, f64) {
        let mut x = vec![0.0; self.n];
        for i in 0..self.m {
            let b = self.basis[i];
            if b < self.n {
                x[b] = self.data[(i + 1) * self.ld + self.nvar];
            }
        }
        (x, self.value_cell())
    }
}
