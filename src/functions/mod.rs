use std::fmt;

/// Built-in single-argument functions.
///
/// The set is closed: an identifier either names one of these or it does
/// not, so there is no way to apply an unknown function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Sqrt,
    /// Natural logarithm.
    Log,
    Abs,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::Sin,
        Function::Cos,
        Function::Sqrt,
        Function::Log,
        Function::Abs,
    ];

    /// Looks up a function by the name used in expressions.
    pub fn lookup(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "sqrt" => Some(Function::Sqrt),
            "log" => Some(Function::Log),
            "abs" => Some(Function::Abs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Sqrt => "sqrt",
            Function::Log => "log",
            Function::Abs => "abs",
        }
    }

    /// Domain errors follow IEEE-754: `sqrt(-1)` and `log(-1)` are NaN,
    /// `log(0)` is negative infinity.
    pub fn apply(&self, argument: f64) -> f64 {
        match self {
            Function::Sin => argument.sin(),
            Function::Cos => argument.cos(),
            Function::Sqrt => argument.sqrt(),
            Function::Log => argument.ln(),
            Function::Abs => argument.abs(),
        }
    }
}

impl TryFrom<&str> for Function {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Function::lookup(value).ok_or_else(|| format!("Unknown function: {}", value))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
