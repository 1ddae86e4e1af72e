mod cursor;
mod error;
mod evaluator;
mod scope;

pub use error::*;
pub use evaluator::ExpressionSolver;
pub use scope::Scope;
