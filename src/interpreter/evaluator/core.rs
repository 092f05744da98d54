use std::collections::{HashMap, hash_map};

use log::debug;

use crate::{
    ast::{Assignment, Expr},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Maps variable names to their current values.
///
/// The table is owned by the caller and may already hold variables before a
/// program runs. Only successful assignments change it; when a statement
/// fails, everything stored before it is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    variables: HashMap<String, i64>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, returning the previous value if there was
    /// one.
    pub fn assign(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.variables.insert(name.into(), value)
    }

    /// Returns `true` if the variable has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Consumes the table and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, i64> {
        self.variables
    }

    /// Evaluates an expression against the current variables.
    ///
    /// Operands are evaluated left to right; the first failure is returned.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The integer value of the expression.
    ///
    /// # Errors
    /// - `EvalError::UndefinedVariable` for a variable that is not in the
    ///   table.
    /// - `EvalError::Overflow` if an intermediate result leaves the `i64`
    ///   range.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::Expr, interpreter::evaluator::core::SymbolTable};
    ///
    /// let mut table = SymbolTable::new();
    /// table.assign("x", 7);
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 1, };
    /// assert_eq!(table.eval(&expr), Ok(7));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => {
                self.get(name)
                    .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone(),
                                                                  line: *line, })
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Evaluates an assignment and stores its value.
    ///
    /// The right-hand side sees the table as it is before the assignment, so
    /// `x = x + 1;` reads the previous `x`.
    ///
    /// # Returns
    /// The value that was stored.
    ///
    /// # Errors
    /// Any error from [`SymbolTable::eval`]; the table is left untouched.
    pub fn eval_assignment(&mut self, assignment: &Assignment) -> EvalResult<i64> {
        let value = self.eval(&assignment.value)?;
        debug!("line {}: {} = {value}", assignment.line, assignment.name);
        self.assign(assignment.name.clone(), value);
        Ok(value)
    }
}

impl From<HashMap<String, i64>> for SymbolTable {
    fn from(variables: HashMap<String, i64>) -> Self {
        Self { variables }
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        Self { variables: iter.into_iter()
                              .map(|(name, value)| (name.into(), value))
                              .collect(), }
    }
}

impl IntoIterator for SymbolTable {
    type IntoIter = hash_map::IntoIter<String, i64>;
    type Item = (String, i64);

    fn into_iter(self) -> Self::IntoIter {
        self.variables.into_iter()
    }
}

/// Lists the variables one per line as `name = value`, sorted by name.
impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut variables: Vec<_> = self.iter().collect();
        variables.sort_unstable_by_key(|(name, _)| *name);

        for (name, value) in variables {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
