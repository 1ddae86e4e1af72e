use thiserror::Error;

/// Everything that can abort a call to [`ExpressionSolver::solve`].
///
/// Offsets count characters from the start of the expression, not bytes.
///
/// [`ExpressionSolver::solve`]: crate::ExpressionSolver::solve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A run of digits and dots did not parse as a floating point literal.
    #[error("wrong number format at {offset}")]
    NumberFormat { offset: usize },

    /// A closing parenthesis was required but something else was found.
    #[error("expected ')', instead found '{found}' at {offset}")]
    UnexpectedCharacter { found: char, offset: usize },

    /// An identifier is neither a built-in function nor a variable, and the
    /// solver has no variable table to fall back on.
    #[error("there is no function or variable with name {0}")]
    UnknownSymbol(String),

    /// A valid expression was parsed but characters remain after it.
    #[error("unexpected trailing input at {offset}")]
    TrailingInput { offset: usize },

    /// The input ended where an operand or a closing parenthesis was expected.
    #[error("unexpected end of expression at {offset}")]
    UnexpectedEndOfInput { offset: usize },
}

impl SolveError {
    /// Character offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            SolveError::NumberFormat { offset }
            | SolveError::UnexpectedCharacter { offset, .. }
            | SolveError::TrailingInput { offset }
            | SolveError::UnexpectedEndOfInput { offset } => Some(*offset),
            SolveError::UnknownSymbol(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SolveError::NumberFormat { offset: 3 }.to_string(),
            "wrong number format at 3"
        );
        assert_eq!(
            SolveError::UnexpectedCharacter {
                found: ']',
                offset: 4
            }
            .to_string(),
            "expected ')', instead found ']' at 4"
        );
        assert_eq!(
            SolveError::UnknownSymbol("foo".to_string()).to_string(),
            "there is no function or variable with name foo"
        );
        assert_eq!(
            SolveError::UnexpectedEndOfInput { offset: 2 }.to_string(),
            "unexpected end of expression at 2"
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(SolveError::TrailingInput { offset: 2 }.offset(), Some(2));
        assert_eq!(SolveError::UnknownSymbol("x".to_string()).offset(), None);
    }
}
