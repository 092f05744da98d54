use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, SymbolTable},
};

impl SymbolTable {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Negate`: arithmetic negation.
    ///
    /// # Errors
    /// `EvalError::Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::UnaryOperator, interpreter::evaluator::core::SymbolTable};
    ///
    /// assert_eq!(SymbolTable::eval_unary(UnaryOperator::Negate, 5, 1), Ok(-5));
    /// assert_eq!(SymbolTable::eval_unary(UnaryOperator::Plus, -5, 1), Ok(-5));
    /// assert!(SymbolTable::eval_unary(UnaryOperator::Negate, i64::MIN, 1).is_err());
    /// ```
    pub const fn eval_unary(op: UnaryOperator, value: i64, line: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value.checked_neg() {
                Some(v) => Ok(v),
                None => Err(EvalError::Overflow { line }),
            },
        }
    }
}
