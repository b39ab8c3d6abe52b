//! Tolerancias numéricas del motor (constantes de compilación)
//!
//! Los resultados de los escenarios de prueba dependen de estos valores;
//! cambiarlos altera qué ramas de diagnóstico se disparan.

/// Identificador de β tratada como cero
pub const ZERO_BETA: f64 = 1e-9;

/// Umbral de positividad de los costes reducidos en el test de optimalidad
pub const OPTIMAL: f64 = 1e-9;

/// El objetivo de la Fase 1 debe quedar por debajo de esto para ser factible
pub const FEASIBLE: f64 = 1e-5;

/// Mejora mínima del valor que reinicia el contador de estancamiento
pub const DEGENERATE: f64 = 1e-12;

/// Denominador mínimo admitido en la regla del cociente mínimo
pub const PIV_LEAVE: f64 = 1e-15;

/// Umbral inicial de la regla de Bland
pub const BLAND_EPS: f64 = 1e-6;

/// Piso del umbral de la regla de Bland
pub const BLAND_EPS_MIN: f64 = ZERO_BETA;
