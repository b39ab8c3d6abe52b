//! Strict MPS ingestion for simplexo
//!
//! Reads the old fixed-column MPS format (at most 61 significant columns per
//! line) and produces a [`simplexo_types::Model`] ready for the solver.
//!
//! # Format
//!
//! Sections are recognized by a keyword in column 0: `ROWS`, `COLUMNS`,
//! `RHS`, `RANGES`, `BOUNDS` and `ENDATA`. Data lines use fixed offsets:
//! the record name starts at column 4 (width 8), the first field name at
//! column 14 (width 8) with its value at column 24 (width 12), and an
//! optional second field at columns 39/49.
//!
//! - The `N` row of `ROWS` names the objective; `L`/`G`/`E` rows become
//!   `<=`/`>=`/`==` constraints in file order.
//! - `RANGES` turns a row into an interval constraint: the original row
//!   keeps one side and an opposite-sense row is appended for the other.
//! - `BOUNDS` populates the per-variable bound records (`UP`, `LO`, `FX`,
//!   `FR`, `MI`, `PL`, `BV`). Untouched variables default to `x >= 0`.
//!
//! # Example
//!
//! ```rust,no_run
//! use simplexo_mps::read_mps;
//!
//! let model = read_mps("problem.mps").unwrap();
//! println!("{} constraints over {} variables", model.m, model.n);
//! ```

pub mod errors;
pub mod reader;

// Re-exports
pub use errors::{MpsError, Result};
pub use reader::read_mps;
