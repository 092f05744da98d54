use std::collections::HashMap;

use tally::{
    Error, SymbolTable,
    error::{EvalError, LexError, ParseError},
    evaluate, run, tokenize,
};

fn error_of(src: &str) -> Error {
    evaluate(src, &mut SymbolTable::new()).expect_err("program should fail")
}

fn found(token: &str) -> Option<String> {
    Some(token.to_string())
}

#[test]
fn leading_zero() {
    assert_eq!(error_of("x = 007;"),
               Error::Lex(LexError::LeadingZero { literal:  "007".to_string(),
                                                  position: 4,
                                                  line:     1, }));
    assert_eq!(error_of("x = 1;\ny = 00;"),
               Error::Lex(LexError::LeadingZero { literal:  "00".to_string(),
                                                  position: 11,
                                                  line:     2, }));
}

#[test]
fn lex_errors_are_reported_before_anything_runs() {
    let mut table = SymbolTable::new();
    assert!(matches!(evaluate("a = 1; b = 2 $ 3;", &mut table),
                     Err(Error::Lex(LexError::InvalidCharacter { character: '$', .. }))));
    assert!(table.is_empty());
}

#[test]
fn invalid_character() {
    assert_eq!(error_of("x = 4 / 2;"),
               Error::Lex(LexError::InvalidCharacter { character: '/',
                                                       position:  6,
                                                       line:      1, }));
    assert_eq!(error_of("x = 1.5;"),
               Error::Lex(LexError::InvalidCharacter { character: '.',
                                                       position:  5,
                                                       line:      1, }));
}

#[test]
fn missing_semicolon() {
    assert_eq!(error_of("x = 5"),
               Error::Parse(ParseError::ExpectedSemicolon { found: None, line: 1 }));
    assert_eq!(error_of("x = 5\ny = 6;"),
               Error::Parse(ParseError::ExpectedSemicolon { found: found("y"),
                                                            line:  2, }));
}

#[test]
fn semicolon_is_checked_before_evaluation() {
    assert_eq!(error_of("y = x + 1"),
               Error::Parse(ParseError::ExpectedSemicolon { found: None, line: 1 }));
}

#[test]
fn double_semicolon_is_an_empty_statement() {
    assert_eq!(error_of("x = 5;; y = 5;"),
               Error::Parse(ParseError::ExpectedIdentifier { found: found(";"),
                                                             line:  1, }));
}

#[test]
fn statement_must_start_with_identifier() {
    assert_eq!(error_of("5 = x;"),
               Error::Parse(ParseError::ExpectedIdentifier { found: found("5"),
                                                             line:  1, }));
    assert_eq!(error_of("(x) = 1;"),
               Error::Parse(ParseError::ExpectedIdentifier { found: found("("),
                                                             line:  1, }));
}

#[test]
fn missing_assignment_operator() {
    assert_eq!(error_of("x 5;"),
               Error::Parse(ParseError::ExpectedAssignment { found: found("5"),
                                                             line:  1, }));
    assert_eq!(error_of("a = 1;\nx"),
               Error::Parse(ParseError::ExpectedAssignment { found: None, line: 2 }));
}

#[test]
fn invalid_expression() {
    assert_eq!(error_of("x = * 2;"),
               Error::Parse(ParseError::InvalidExpression { found: found("*"),
                                                            line:  1, }));
    assert_eq!(error_of("x = ;"),
               Error::Parse(ParseError::InvalidExpression { found: found(";"),
                                                            line:  1, }));
    assert_eq!(error_of("x = ();"),
               Error::Parse(ParseError::InvalidExpression { found: found(")"),
                                                            line:  1, }));
    assert_eq!(error_of("x ="),
               Error::Parse(ParseError::InvalidExpression { found: None, line: 1 }));
}

#[test]
fn unmatched_parenthesis() {
    assert_eq!(error_of("x = (1 + 2;"),
               Error::Parse(ParseError::ExpectedRightParen { found: found(";"),
                                                             line:  1, }));
    assert_eq!(error_of("x = ((1)"),
               Error::Parse(ParseError::ExpectedRightParen { found: None, line: 1 }));
}

#[test]
fn extra_closing_parenthesis() {
    assert_eq!(error_of("x = (1));"),
               Error::Parse(ParseError::ExpectedSemicolon { found: found(")"),
                                                            line:  1, }));
}

#[test]
fn literal_too_large() {
    assert_eq!(error_of("x = 9223372036854775808;"),
               Error::Parse(ParseError::LiteralTooLarge { literal:
                                                              "9223372036854775808".to_string(),
                                                          line:    1, }));
}

#[test]
fn deeply_nested_unary_is_an_error() {
    assert_eq!(error_of(&format!("x = {}1;", "-".repeat(200_000))),
               Error::Parse(ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn deeply_nested_parentheses_are_an_error() {
    let src = format!("a = {}1{};", "(".repeat(50_000), ")".repeat(50_000));
    assert_eq!(error_of(&src),
               Error::Parse(ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn long_operator_chains_are_an_error() {
    let src = format!("a = 1{};", " + 1".repeat(100_000));
    assert_eq!(error_of(&src),
               Error::Parse(ParseError::NestingTooDeep { line: 1 }));

    let src = format!("a = 2{};", " * 1".repeat(100_000));
    assert_eq!(error_of(&src),
               Error::Parse(ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn moderate_nesting_still_evaluates() {
    let mut table = SymbolTable::new();
    let src = format!("a = {}1{};
b = -{}a;
c = 0{};",
                      "(".repeat(100),
                      ")".repeat(100),
                      "-".repeat(99),
                      " + 1".repeat(200));
    evaluate(&src, &mut table).unwrap();

    assert_eq!(table.get("a"), Some(1));
    assert_eq!(table.get("b"), Some(1));
    assert_eq!(table.get("c"), Some(200));
}

#[test]
fn nesting_error_keeps_prior_assignments() {
    let mut table = SymbolTable::new();
    let src = format!("ok = 1;
bad = {}1;", "+".repeat(10_000));
    assert_eq!(evaluate(&src, &mut table),
               Err(Error::Parse(ParseError::NestingTooDeep { line: 2 })));
    assert_eq!(table.get("ok"), Some(1));
    assert_eq!(table.len(), 1);
}

#[test]
fn undefined_variable() {
    assert_eq!(error_of("y = x + 1;"),
               Error::Eval(EvalError::UndefinedVariable { name: "x".to_string(),
                                                          line: 1, }));
}

#[test]
fn no_forward_references() {
    assert_eq!(error_of("a = b;\nb = 1;"),
               Error::Eval(EvalError::UndefinedVariable { name: "b".to_string(),
                                                          line: 1, }));
}

#[test]
fn overflow() {
    assert_eq!(error_of("x = 9223372036854775807 + 1;"),
               Error::Eval(EvalError::Overflow { line: 1 }));
    assert_eq!(error_of("x = 9223372036854775807;\ny = x * 2;"),
               Error::Eval(EvalError::Overflow { line: 2 }));
    assert_eq!(error_of("x = -9223372036854775807 - 1; y = -x;"),
               Error::Eval(EvalError::Overflow { line: 1 }));
}

#[test]
fn prior_assignments_are_kept_after_an_error() {
    let mut table = SymbolTable::new();
    let result = evaluate("a = 1; b = a + 1; c = missing; d = 4;", &mut table);

    assert!(matches!(result, Err(Error::Eval(EvalError::UndefinedVariable { .. }))));
    assert_eq!(table.get("a"), Some(1));
    assert_eq!(table.get("b"), Some(2));
    assert!(!table.contains("c"));
    assert!(!table.contains("d"));
}

#[test]
fn parsing_stops_at_first_error() {
    let mut table = SymbolTable::new();
    let result = evaluate("a = 1; b = ; c = 3;", &mut table);

    assert!(matches!(result, Err(Error::Parse(ParseError::InvalidExpression { .. }))));
    assert_eq!(table.get("a"), Some(1));
    assert_eq!(table.len(), 1);
}

#[test]
fn prepopulated_table_is_used_and_kept() {
    let mut table = SymbolTable::from(HashMap::from([("base".to_string(), 40),
                                                     ("unused".to_string(), -1)]));
    evaluate("answer = base + 2;", &mut table).unwrap();

    assert_eq!(table.get("answer"), Some(42));
    assert_eq!(table.get("unused"), Some(-1));
    assert_eq!(table.into_inner().len(), 3);
}

#[test]
fn run_accepts_tokens_from_tokenize() {
    let tokens = tokenize("x = 2; x = x * x * x;").unwrap();
    let mut table = SymbolTable::new();
    run(&tokens, &mut table).unwrap();
    assert_eq!(table.get("x"), Some(8));
}

#[test]
fn errors_display_line_and_token() {
    assert_eq!(error_of("x = 5").to_string(),
               "Error on line 1: Expected ';' after expression, found end of input.");
    assert_eq!(error_of("x = 1;\ny = z;").to_string(),
               "Error on line 2: Undefined variable 'z'.");
    assert_eq!(error_of("x = 007;").to_string(),
               "Error on line 1: Leading zeroes are not allowed: '007' at position 4.");
}

#[test]
fn errors_expose_their_source() {
    use std::error::Error as _;

    let error = error_of("y = x;");
    let source = error.source().expect("stage error");
    assert_eq!(source.to_string(), error.to_string());
}
