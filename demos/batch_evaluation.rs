use expr_solver::solve_batch;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        HashMap::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        HashMap::from([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
        HashMap::from([("price".to_string(), 95.5)]),
    ];

    let expression = "price * volume / 1000 + abs(price - 100)";

    for (i, result) in solve_batch(expression, &contexts).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
