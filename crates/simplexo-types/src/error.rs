use thiserror::Error;

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;

/// Diagnostic codes surfaced by the solver
///
/// A successful solve returns `Ok(Solution)`; every other outcome is one of
/// these kinds. `MemoryAlloc` and `Singularity` exist for interface
/// completeness and are not produced by the dense-tableau engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Working storage could not be acquired
    #[error("memory allocation failed")]
    MemoryAlloc,

    /// Input rejected before solving (dimension mismatch, unknown pivot rule)
    #[error("input condition unsatisfied")]
    CondUnsatisfied,

    /// The shared epoch counter reached the caller-supplied iteration limit
    #[error("iteration limit exceeded")]
    ExceedIterLimit,

    /// A basis became numerically singular
    #[error("singular basis")]
    Singularity,

    /// More constraint rows than variables after Phase-1 sizing
    #[error("over-determined problem: more constraints than variables")]
    OverDetermination,

    /// The objective decreases without bound over the feasible region
    #[error("LP is unbounded")]
    Unboundedness,

    /// Phase 1 finished with a non-zero artificial objective
    #[error("LP is infeasible")]
    Infeasibility,

    /// More than five consecutive pivots without value improvement
    #[error("simplex is cycling (degeneracy); retry with the \"bland\" rule")]
    Degeneracy,

    /// The entering rule found no column while the optimality test had not fired
    #[error("numerical precision loss in pivot selection")]
    PrecisionError,
}
