use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Variable kind tag
///
/// Informational metadata only: the solver treats every variable as
/// continuous regardless of the tag. Mixed-integer solving is a non-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarKind {
    Real,
    Integer,
    Binary,
}

/// Bound kind of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundKind {
    /// Unrestricted in sign
    Free,
    /// Only an upper bound: `x <= ub`
    Upper,
    /// Only a lower bound: `lb <= x`
    Lower,
    /// Bounded from both sides: `lb <= x <= ub`
    Boxed,
}

/// Sense of a linear constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsSense {
    /// `A_i x == rhs`
    Eq,
    /// `A_i x >= rhs`
    Ge,
    /// `A_i x <= rhs`
    Le,
}

/// Bound record of a single variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBound {
    pub name: String,
    pub lb: f64,
    pub ub: f64,
    pub b_kind: BoundKind,
    pub v_kind: VarKind,
}

impl VariableBound {
    /// Free variable (no bounds)
    pub fn free(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lb: f64::NEG_INFINITY,
            ub: f64::INFINITY,
            b_kind: BoundKind::Free,
            v_kind: VarKind::Real,
        }
    }

    /// `lb <= x`
    pub fn lower(name: &str, lb: f64) -> Self {
        Self {
            name: name.to_string(),
            lb,
            ub: f64::INFINITY,
            b_kind: BoundKind::Lower,
            v_kind: VarKind::Real,
        }
    }

    /// `x <= ub`
    pub fn upper(name: &str, ub: f64) -> Self {
        Self {
            name: name.to_string(),
            lb: f64::NEG_INFINITY,
            ub,
            b_kind: BoundKind::Upper,
            v_kind: VarKind::Real,
        }
    }

    /// `lb <= x <= ub`
    pub fn boxed(name: &str, lb: f64, ub: f64) -> Self {
        Self {
            name: name.to_string(),
            lb,
            ub,
            b_kind: BoundKind::Boxed,
            v_kind: VarKind::Real,
        }
    }
}

/// A single linear constraint: dense coefficient row, right-hand side, sense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub name: String,
    pub coef: Vec<f64>,
    pub rhs: f64,
    pub sense: ConsSense,
}

impl LinearConstraint {
    pub fn new(coef: Vec<f64>, rhs: f64, sense: ConsSense) -> Self {
        Self {
            name: String::new(),
            coef,
            rhs,
            sense,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

/// Linear programming model
///
/// The objective is always minimized. `bounds` is optional: `None` means
/// every variable is restricted to `x >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Number of constraints
    pub m: usize,
    /// Number of variables
    pub n: usize,
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
    pub bounds: Option<Vec<VariableBound>>,
}

impl Model {
    /// Create a model, validating the inner dimensions
    pub fn new(
        objective: Vec<f64>,
        constraints: Vec<LinearConstraint>,
        bounds: Option<Vec<VariableBound>>,
    ) -> Result<Self, SolveError> {
        let n = objective.len();
        let m = constraints.len();

        if constraints.iter().any(|c| c.coef.len() != n) {
            return Err(SolveError::CondUnsatisfied);
        }
        if let Some(ref b) = bounds {
            if b.len() != n {
                return Err(SolveError::CondUnsatisfied);
            }
        }
        Ok(Self {
            m,
            n,
            objective,
            constraints,
            bounds,
        })
    }
}

/// Optimal primal solution of a solve call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Values of the original variables
    pub x: Vec<f64>,
    /// Objective value at `x`
    pub value: f64,
}
