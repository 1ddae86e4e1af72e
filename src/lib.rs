//! Single-pass arithmetic expression solver.
//!
//! Supports `+ - * /`, unary signs, parentheses, right-associative `^`, the
//! functions `sin`, `cos`, `sqrt`, `log` (natural) and `abs`, and optional
//! variables. The parser evaluates as it goes; nothing is compiled or cached.
//!
//! ```
//! use std::collections::HashMap;
//!
//! assert_eq!(expr_solver::solve("2^3^2"), Ok(512.0));
//! assert_eq!(expr_solver::solve("-2^2"), Ok(-4.0));
//!
//! let vars = HashMap::from([("x".to_string(), 5.0)]);
//! assert_eq!(expr_solver::solve_with_variables("x + 1", &vars), Ok(6.0));
//! assert_eq!(expr_solver::solve_with_variables("y + 1", &vars), Ok(1.0));
//! ```

pub mod batch;
pub mod functions;
pub mod solver;

use log::debug;
use std::collections::HashMap;

pub use batch::solve_batch;
pub use functions::Function;
pub use solver::{ExpressionSolver, Result, Scope, SolveError};

/// Solves an expression that uses no variables.
pub fn solve(expression: &str) -> Result<f64> {
    debug!("Solving expression: {}", expression);
    ExpressionSolver::new(expression).solve()
}

/// Solves an expression, resolving identifiers against `variables`.
///
/// Identifiers missing from `variables` evaluate to `0.0`.
pub fn solve_with_variables(expression: &str, variables: &HashMap<String, f64>) -> Result<f64> {
    debug!("Solving expression: {} with {} variables", expression, variables.len());
    ExpressionSolver::with_variables(expression, variables).solve()
}
