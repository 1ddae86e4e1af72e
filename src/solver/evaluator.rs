use crate::functions::Function;
use crate::solver::cursor::{is_letter, is_numeric, Cursor};
use crate::solver::{Result, Scope, SolveError};
use log::{debug, trace};
use std::collections::HashMap;

/// Evaluates a single arithmetic expression.
///
/// Parsing and evaluation happen in the same pass: each grammar level returns
/// the value of what it consumed, no syntax tree is built. A solver is used
/// once; [`solve`](Self::solve) consumes it.
///
/// ```
/// use expr_solver::ExpressionSolver;
/// use std::collections::HashMap;
///
/// assert_eq!(ExpressionSolver::new("2 + 3 * 4").solve(), Ok(14.0));
///
/// let vars = HashMap::from([("x".to_string(), 5.0)]);
/// assert_eq!(ExpressionSolver::with_variables("x + 1", &vars).solve(), Ok(6.0));
/// ```
#[derive(Debug)]
pub struct ExpressionSolver<'a> {
    cursor: Cursor,
    scope: Scope<'a>,
}

impl<'a> ExpressionSolver<'a> {
    /// Creates a solver without variables.
    pub fn new(expression: &str) -> Self {
        Self::with_scope(expression, Scope::Strict)
    }

    /// Creates a solver that resolves identifiers against `variables`.
    pub fn with_variables(expression: &str, variables: &'a HashMap<String, f64>) -> Self {
        Self::with_scope(expression, Scope::Variables(variables))
    }

    pub fn with_scope(expression: &str, scope: Scope<'a>) -> Self {
        Self {
            cursor: Cursor::new(expression),
            scope,
        }
    }

    /// Evaluates the whole expression.
    ///
    /// # Errors
    ///
    /// Fails on malformed input, on unknown identifiers when there is no
    /// variable table, and when input remains after a complete expression.
    pub fn solve(mut self) -> Result<f64> {
        let result = self.solve_expression()?;

        if !self.cursor.at_end() {
            debug!("Trailing input at {}", self.cursor.position());
            return Err(SolveError::TrailingInput {
                offset: self.cursor.position(),
            });
        }

        debug!("Solve result: {}", result);
        Ok(result)
    }

    /// Lowest precedence: addition and subtraction.
    fn solve_expression(&mut self) -> Result<f64> {
        let mut result = self.solve_term()?;

        loop {
            if self.cursor.try_consume('+') {
                result += self.solve_term()?;
            } else if self.cursor.try_consume('-') {
                result -= self.solve_term()?;
            } else {
                return Ok(result);
            }
        }
    }

    /// Multiplication and division. Division by zero is not checked.
    fn solve_term(&mut self) -> Result<f64> {
        let mut result = self.solve_factor()?;

        loop {
            if self.cursor.try_consume('*') {
                result *= self.solve_factor()?;
            } else if self.cursor.try_consume('/') {
                result /= self.solve_factor()?;
            } else {
                return Ok(result);
            }
        }
    }

    /// Signs, groups, literals, calls and variables, with an optional
    /// right-associative exponent.
    ///
    /// A sign applies to the whole factor after it, exponent included, so
    /// `-2^2` is `-(2^2)`.
    fn solve_factor(&mut self) -> Result<f64> {
        if self.cursor.try_consume('+') {
            return self.solve_factor();
        }
        if self.cursor.try_consume('-') {
            return Ok(-self.solve_factor()?);
        }

        let mut result = 0.0;

        if self.cursor.try_consume('(') {
            result = self.solve_expression()?;

            if !self.cursor.try_consume(')') {
                let offset = self.cursor.position();
                return Err(match self.cursor.current() {
                    Some(found) => SolveError::UnexpectedCharacter { found, offset },
                    None => SolveError::UnexpectedEndOfInput { offset },
                });
            }
        } else {
            let current = self.cursor.peek()?;

            if is_numeric(current) {
                result = self.cursor.parse_number()?;
            } else if is_letter(current) {
                result = self.solve_symbol()?;
            }
            // Anything else leaves the operand at zero for the caller to trip over.
        }

        if self.cursor.try_consume('^') {
            let exponent = self.solve_factor()?;
            trace!("{} ^ {}", result, exponent);
            result = result.powf(exponent);
        }

        Ok(result)
    }

    /// A function call or a variable, depending on the identifier.
    fn solve_symbol(&mut self) -> Result<f64> {
        let name = self.cursor.parse_identifier();

        if let Some(function) = Function::lookup(&name) {
            let argument = self.solve_expression()?;
            trace!("{}({})", function, argument);
            return Ok(function.apply(argument));
        }

        match self.scope.resolve(&name) {
            Some(value) => {
                trace!("variable {} = {}", name, value);
                Ok(value)
            }
            None => {
                debug!("Unknown symbol: {}", name);
                Err(SolveError::UnknownSymbol(name))
            }
        }
    }
}
