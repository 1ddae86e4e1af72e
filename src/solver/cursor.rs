use crate::solver::{Result, SolveError};

/// Read position over the characters of one expression.
///
/// The cursor only ever moves forward and never goes past the end of the
/// buffer.
#[derive(Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\0')
}

/// Identifiers are made of lowercase ASCII letters only.
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub(crate) fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

impl Cursor {
    pub fn new(expression: &str) -> Self {
        Self {
            chars: expression.chars().collect(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Character under the cursor, or `None` at the end of input.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek(&self) -> Result<char> {
        self.current()
            .ok_or(SolveError::UnexpectedEndOfInput { offset: self.pos })
    }

    /// Skips whitespace and consumes `expected` if it comes next.
    ///
    /// Skipped whitespace stays skipped when `expected` does not match.
    pub fn try_consume(&mut self, expected: char) -> bool {
        if self.at_end() {
            return false;
        }

        while self.current().is_some_and(is_space) {
            self.pos += 1;
        }

        if self.current() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of digits and dots and parses it as `f64`.
    ///
    /// The run is not validated, so `1.2.3` is captured whole and rejected by
    /// the float parser.
    pub fn parse_number(&mut self) -> Result<f64> {
        let start = self.pos;
        let literal = self.take_while(is_numeric);

        literal
            .parse::<f64>()
            .map_err(|_| SolveError::NumberFormat { offset: start })
    }

    /// Consumes the longest run of lowercase letters.
    pub fn parse_identifier(&mut self) -> String {
        self.take_while(is_letter)
    }

    fn take_while(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.pos;
        while self.current().is_some_and(accept) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        for c in [' ', '\n', '\t', '\0'] {
            assert!(is_space(c));
        }
        assert!(!is_space('\r'));

        assert!(is_letter('a') && is_letter('z'));
        assert!(!is_letter('A'));
        assert!(!is_letter('_'));
        assert!(!is_letter('1'));

        assert!(is_numeric('0') && is_numeric('9') && is_numeric('.'));
        assert!(!is_numeric('e'));
    }

    #[test]
    fn test_try_consume_skips_whitespace() {
        let mut cursor = Cursor::new("  \t+");
        assert!(cursor.try_consume('+'));
        assert_eq!(cursor.position(), 4);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_try_consume_keeps_skip_on_mismatch() {
        let mut cursor = Cursor::new("   -");
        assert!(!cursor.try_consume('+'));
        assert_eq!(cursor.position(), 3);
        assert!(cursor.try_consume('-'));
    }

    #[test]
    fn test_try_consume_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.try_consume('+'));
        assert_eq!(cursor.position(), 0);

        // Whitespace running into the end of input stops at the end.
        let mut cursor = Cursor::new("1  ");
        cursor.parse_number().unwrap();
        assert!(!cursor.try_consume('^'));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_peek() {
        let cursor = Cursor::new("x");
        assert_eq!(cursor.peek(), Ok('x'));

        let cursor = Cursor::new("");
        assert_eq!(
            cursor.peek(),
            Err(SolveError::UnexpectedEndOfInput { offset: 0 })
        );
    }

    #[test]
    fn test_parse_number() {
        let mut cursor = Cursor::new("12.5+1");
        assert_eq!(cursor.parse_number(), Ok(12.5));
        assert_eq!(cursor.current(), Some('+'));

        assert_eq!(Cursor::new(".5").parse_number(), Ok(0.5));
        assert_eq!(Cursor::new("3.").parse_number(), Ok(3.0));
    }

    #[test]
    fn test_parse_number_rejects_malformed_runs() {
        let mut cursor = Cursor::new("1.2.3");
        assert_eq!(
            cursor.parse_number(),
            Err(SolveError::NumberFormat { offset: 0 })
        );
        assert!(cursor.at_end());

        assert_eq!(
            Cursor::new(".").parse_number(),
            Err(SolveError::NumberFormat { offset: 0 })
        );
    }

    #[test]
    fn test_parse_identifier_stops_at_digit() {
        let mut cursor = Cursor::new("abc2");
        assert_eq!(cursor.parse_identifier(), "abc");
        assert_eq!(cursor.current(), Some('2'));

        let mut cursor = Cursor::new("sqrtX");
        assert_eq!(cursor.parse_identifier(), "sqrt");
        assert_eq!(cursor.current(), Some('X'));
    }
}
