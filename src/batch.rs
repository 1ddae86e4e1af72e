use crate::solver::{ExpressionSolver, Result};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// Evaluates `expression` once per variable table, in parallel.
///
/// Results come back in the same order as `contexts`. Each evaluation gets
/// its own solver, so a failure in one context does not affect the others.
pub fn solve_batch(expression: &str, contexts: &[HashMap<String, f64>]) -> Vec<Result<f64>> {
    debug!(
        "Solving expression {:?} against {} contexts",
        expression,
        contexts.len()
    );

    contexts
        .par_iter()
        .map(|context| ExpressionSolver::with_variables(expression, context).solve())
        .collect()
}
