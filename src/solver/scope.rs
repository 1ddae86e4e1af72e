use std::collections::HashMap;

/// How identifiers that are not built-in functions get resolved.
#[derive(Debug, Clone, Copy, Default)]
pub enum Scope<'a> {
    /// No variables: any identifier that is not a function is an error.
    #[default]
    Strict,
    /// Identifiers resolve against the table. Names missing from the table
    /// evaluate to `0.0`.
    Variables(&'a HashMap<String, f64>),
}

impl<'a> Scope<'a> {
    /// Resolves a variable, or `None` if this scope has no table at all.
    pub fn resolve(&self, name: &str) -> Option<f64> {
        match self {
            Scope::Strict => None,
            Scope::Variables(table) => Some(table.get(name).copied().unwrap_or(0.0)),
        }
    }
}

impl<'a> From<&'a HashMap<String, f64>> for Scope<'a> {
    fn from(table: &'a HashMap<String, f64>) -> Self {
        Scope::Variables(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_scope_resolves_nothing() {
        assert_eq!(Scope::Strict.resolve("x"), None);
        assert!(matches!(Scope::default(), Scope::Strict));
    }

    #[test]
    fn test_variables_default_to_zero() {
        let table = HashMap::from([("x".to_string(), 5.0)]);
        let scope = Scope::from(&table);

        assert_eq!(scope.resolve("x"), Some(5.0));
        assert_eq!(scope.resolve("y"), Some(0.0));
    }
}
