/// The evaluator module reduces expression trees to values.
///
/// The evaluator walks the AST with a single exhaustive match, resolves
/// variables in the symbol table, and performs checked integer arithmetic.
///
/// # Responsibilities
/// - Owns the [`evaluator::core::SymbolTable`] variable store.
/// - Evaluates literals, variables, unary and binary operations.
/// - Reports undefined variables and integer overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each pairing a kind with its literal text. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Skips whitespace.
/// - Reports lexical errors: leading zeroes and illegal characters.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser processes the token stream produced by the lexer by recursive
/// descent, one precedence level per function.
///
/// # Responsibilities
/// - Converts tokens into assignment statements and expression trees.
/// - Encodes precedence and associativity in the grammar layering.
/// - Reports syntax errors with the offending token and line.
pub mod parser;
