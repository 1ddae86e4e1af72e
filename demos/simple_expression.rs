use expr_solver::{ExpressionSolver, Function};
use log::debug;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let names: Vec<_> = Function::ALL.iter().map(Function::name).collect();
    debug!("built-in functions: {names:?}");

    for expr in ["2 + 3 * 4", "2^3^2", "-2^2", "sqrt(16)", "(2 + 3", "2 3"] {
        match ExpressionSolver::new(expr).solve() {
            Ok(result) => println!("{expr} = {result}"),
            Err(err) => println!("{expr}: error: {err}"),
        }
    }

    let variables = HashMap::from([("x".to_string(), 5.0), ("rate".to_string(), 0.25)]);
    for expr in ["x + 1", "x * rate", "unknown + 1"] {
        match ExpressionSolver::with_variables(expr, &variables).solve() {
            Ok(result) => println!("{expr} = {result}"),
            Err(err) => println!("{expr}: error: {err}"),
        }
    }
}
