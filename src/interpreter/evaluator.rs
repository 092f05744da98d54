/// Core evaluation logic and the symbol table.
///
/// Contains the variable store, the main evaluation engine and assignment
/// handling.
pub mod core;

/// Unary operator evaluation.
///
/// Implements unary plus and arithmetic negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked addition, subtraction and multiplication.
pub mod binary;
