//! Motor simplex de dos fases para programación lineal
//!
//! Resuelve programas lineales de forma general (cotas libres, superiores,
//! inferiores o de caja por variable) reduciéndolos a forma estándar
//! (`x >= 0`) y aplicando el método simplex de tabla con variables
//! artificiales:
//!
//! - **Fase 1**: construye el LP auxiliar y encuentra una solución básica
//!   factible (BFS), o demuestra que el problema es infactible.
//! - **Fase 2**: instala la función objetivo real y pivota hasta la
//!   optimalidad, o hasta detectar no acotación, degeneración o el límite
//!   de iteraciones.
//!
//! Los diagnósticos se devuelven como [`SolveError`]; una resolución
//! exitosa produce una [`Solution`] con `x` y el valor óptimo.

pub mod blas;
pub mod general;
mod pivot;
pub mod standard;
mod tableau;
pub mod tolerance;

// Re-exports
pub use general::{solve_general, solve_model};
pub use simplexo_types::{Solution, SolveError};
pub use standard::solve_standard;
