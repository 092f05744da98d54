use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, SymbolTable},
};

impl SymbolTable {
    /// Evaluates a binary operation between two values.
    ///
    /// All operations are checked; a result outside the `i64` range is an
    /// error rather than a wrapped value.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `EvalError::Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::BinaryOperator, interpreter::evaluator::core::SymbolTable};
    ///
    /// assert_eq!(SymbolTable::eval_binary(BinaryOperator::Sub, 3, 4, 1), Ok(-1));
    /// assert!(SymbolTable::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 1).is_err());
    /// ```
    pub const fn eval_binary(op: BinaryOperator,
                             left: i64,
                             right: i64,
                             line: usize)
                             -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
        };

        match result {
            Some(v) => Ok(v),
            None => Err(EvalError::Overflow { line }),
        }
    }
}
