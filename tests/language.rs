use minicalc::{
    Evaluation,
    error::{Diagnostic, ParseError},
    interpreter::{
        evaluator::Interpreter,
        lexer::{Lexer, Token},
    },
    parse, run,
};

fn eval(source: &str) -> f64 {
    let mut interpreter = Interpreter::new();
    eval_with(&mut interpreter, source).value
                                       .expect("no value produced")
}

fn eval_with(interpreter: &mut Interpreter, source: &str) -> Evaluation {
    match run(source, interpreter) {
        Ok(evaluation) => evaluation,
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval("2 + 3 * 4"), 14.0);
    assert_eq!(eval("(2 + 3) * 4"), 20.0);
    assert_eq!(eval("2 * 3 + 4"), 10.0);
    assert_eq!(eval("100 / (2 + 3)"), 20.0);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(eval("10 - 2 - 3"), 5.0);
    assert_eq!(eval("24 / 4 / 2"), 3.0);
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-5 + 3"), -2.0);
    assert_eq!(eval("+5"), 5.0);
    assert_eq!(eval("2 * -3"), -6.0);
    assert_eq!(eval("--4"), 4.0);
}

#[test]
fn unary_minus_desugars_to_zero_minus_operand() {
    let statements = parse("-5").unwrap();
    assert_eq!(statements[0].render_tree(),
               "BinaryOp: -\n  Number: 0\n  Number: 5\n");
}

#[test]
fn assignment_persists_across_statements() {
    let mut interpreter = Interpreter::new();

    let first = eval_with(&mut interpreter, "x = 7");
    assert_eq!(first.value, Some(7.0));

    let second = eval_with(&mut interpreter, "x + 1");
    assert_eq!(second.value, Some(8.0));

    assert_eq!(interpreter.get_variable("x"), Some(7.0));
}

#[test]
fn multi_statement_buffers() {
    assert_eq!(eval("x = 2; y = x * 3; y + 1"), 7.0);
    assert_eq!(eval("4 * 2;"), 8.0);
}

#[test]
fn empty_input_produces_no_value() {
    let mut interpreter = Interpreter::new();
    let evaluation = eval_with(&mut interpreter, "");
    assert_eq!(evaluation.value, None);
    assert!(evaluation.diagnostics.is_empty());
}

#[test]
fn division_by_zero_yields_zero_with_diagnostic() {
    let mut interpreter = Interpreter::new();
    let evaluation = eval_with(&mut interpreter, "5 / 0");

    assert_eq!(evaluation.value, Some(0.0));
    assert_eq!(evaluation.diagnostics.len(), 1);
    assert!(matches!(evaluation.diagnostics[0],
                     Diagnostic::DivisionByZero { .. }));
}

#[test]
fn undefined_variable_yields_zero_with_diagnostic() {
    let mut interpreter = Interpreter::new();
    let evaluation = eval_with(&mut interpreter, "y + 1");

    assert_eq!(evaluation.value, Some(1.0));
    assert_eq!(evaluation.diagnostics.len(), 1);
    assert!(matches!(&evaluation.diagnostics[0],
                     Diagnostic::UnknownVariable { name, .. } if name == "y"));
}

#[test]
fn unrecognized_character_is_skipped_with_diagnostic() {
    let mut interpreter = Interpreter::new();
    let evaluation = eval_with(&mut interpreter, "2 + $3");

    assert_eq!(evaluation.value, Some(5.0));
    assert_eq!(evaluation.diagnostics.len(), 1);
    assert!(matches!(evaluation.diagnostics[0],
                     Diagnostic::UnrecognizedCharacter { character: '$', .. }));
}

#[test]
fn malformed_statement_is_fatal_but_session_recovers() {
    let mut interpreter = Interpreter::new();
    interpreter.set_variable("x", 3.0);

    let error = run("2 + * 3", &mut interpreter).unwrap_err();
    match error {
        ParseError::UnexpectedToken { found, position, .. } => {
            assert_eq!(found, "'*'");
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 5);
        },
        other => panic!("Expected UnexpectedToken, got {other:?}"),
    }

    // The failed statement must not corrupt interpreter state.
    assert_eq!(interpreter.get_variable("x"), Some(3.0));
    assert_eq!(eval_with(&mut interpreter, "x + 1").value, Some(4.0));
}

#[test]
fn missing_closing_paren_names_both_tags() {
    let error = parse("(1 + 2").unwrap_err();
    match error {
        ParseError::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, "')'");
            assert_eq!(found, "end of input");
        },
        other => panic!("Expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn parse_error_positions_cross_lines() {
    let error = parse("1 +\n*").unwrap_err();
    match error {
        ParseError::UnexpectedToken { position, .. } => {
            assert_eq!(position.line, 2);
            assert_eq!(position.column, 1);
        },
        other => panic!("Expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn second_dot_terminates_number_token() {
    // The original lexer stops a number at a second dot; `1.2.3` is two
    // literals, not one malformed token.
    let mut lexer = Lexer::new("1.2.3");
    assert_eq!(lexer.next_token().0, Token::Number("1.2".to_string()));
    assert_eq!(lexer.next_token().0, Token::Number(".3".to_string()));
    assert_eq!(lexer.next_token().0, Token::EndOfInput);

    // As a buffer that is two statements, the last one wins.
    assert_eq!(eval("1.2.3"), 0.3);
}

#[test]
fn dotted_number_literals() {
    assert_eq!(eval(".5 * 2"), 1.0);
    assert_eq!(eval("2. + 1"), 3.0);
}

#[test]
fn lone_dot_is_an_invalid_number() {
    let error = parse(".").unwrap_err();
    assert!(matches!(error, ParseError::InvalidNumber { ref literal, .. } if literal == "."));
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("");
    let (first, position) = lexer.next_token();
    assert_eq!(first, Token::EndOfInput);
    assert_eq!(position.line, 1);
    assert_eq!(position.column, 1);
    assert_eq!(lexer.next_token().0, Token::EndOfInput);
}

#[test]
fn reevaluating_an_ast_without_assignments_is_idempotent() {
    let statements = parse("2 * 3 + x").unwrap();
    assert_eq!(statements.len(), 1);

    let mut interpreter = Interpreter::new();
    interpreter.set_variable("x", 4.0);

    assert_eq!(interpreter.evaluate(&statements[0]), 10.0);
    assert_eq!(interpreter.evaluate(&statements[0]), 10.0);
    assert_eq!(interpreter.get_variable("x"), Some(4.0));
    assert!(interpreter.take_diagnostics().is_empty());
}

#[test]
fn latest_set_wins_in_the_environment() {
    let mut interpreter = Interpreter::new();
    interpreter.set_variable("a", 1.0);
    interpreter.set_variable("a", 2.0);
    assert_eq!(interpreter.get_variable("a"), Some(2.0));
    assert_eq!(interpreter.get_variable("b"), None);
}

#[test]
fn assignment_side_effects_apply_in_statement_order() {
    let mut interpreter = Interpreter::new();
    let evaluation = eval_with(&mut interpreter, "x = 2\nx = x * x\nx + 1");
    assert_eq!(evaluation.value, Some(5.0));
    assert!(evaluation.diagnostics.is_empty());
}

#[test]
fn render_tree_matches_parsed_structure() {
    let statements = parse("x = 1 + 2 * y").unwrap();
    assert_eq!(statements[0].render_tree(),
               "Assignment: x\n  BinaryOp: +\n    Number: 1\n    BinaryOp: *\n      Number: 2\n      Variable: y\n");
}
