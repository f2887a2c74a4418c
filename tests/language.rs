use infixcalc::{Number, evaluate_expression, repl};

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true)
                                 .filter_level(log::LevelFilter::Trace)
                                 .try_init();
}

fn assert_value(src: &str, expected: Number) {
    init_test_logger();
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "expression: {src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Number::Integer(expected));
}

fn assert_real(src: &str, expected: f64) {
    assert_value(src, Number::Real(expected));
}

fn assert_error(src: &str, expected: &str) {
    init_test_logger();
    match evaluate_expression(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(message) => assert_eq!(message, expected, "expression: {src}"),
    }
}

fn assert_failure(src: &str) {
    init_test_logger();
    if let Ok(value) = evaluate_expression(src) {
        panic!("Expression {src:?} succeeded with {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_int("2+3*4", 14);
    assert_int("(2+3)*4", 20);
    assert_int("2^3^2", 512);
    assert_int("8 - 3 - 2", 3);
    assert_int("2 * 3 ^ 2", 18);
    assert_int("17 % 5 * 2", 4);
    assert_int("1 + 2 ^ 3 * 4 - 5", 28);
}

#[test]
fn word_aliases() {
    assert_int("2 add 3", 5);
    assert_int("9 sub 4", 5);
    assert_int("6 mul 7", 42);
    assert_real("7 div 2", 3.5);
    assert_int("7 mod 4", 3);
    assert_int("2 pow 3 pow 2", 512);
    assert_int("(2 add 3) mul 4", 20);
    assert_int("2 add 3*4 sub 1", 13);
}

#[test]
fn nested_parentheses() {
    assert_int("((1+2)*(3+4))", 21);
    assert_int("((((((7))))))", 7);
    assert_int("(2*(3+(4*(5-1))))", 38);
    assert_int("(1+2)^(1+1)", 9);
}

#[test]
fn unary_minus_and_plus() {
    assert_int("-5+3", -2);
    assert_int("2*-3", -6);
    assert_int("5--3", 8);
    assert_int("-(2+3)", -5);
    assert_int("-(2)^2", -4);
    assert_int("+(4)*2", 8);
    assert_int("-2^2", 4);
    assert_int("(-3)*(-3)", 9);
}

#[test]
fn numeric_promotion() {
    assert_real("10/2", 5.0);
    assert_real("1.5+1.5", 3.0);
    assert_real("2^-1", 0.5);
    assert_real("2.5*2", 5.0);
    assert_int("9223372036854775806 + 1", i64::MAX);
    assert_real("9223372036854775807 + 1", 9_223_372_036_854_775_808.0);
}

#[test]
fn modulo_follows_the_divisor_sign() {
    assert_int("-7 % 3", 2);
    assert_int("7 % -3", -2);
    assert_real("5.5 mod 2", 1.5);
}

#[test]
fn rendering() {
    let render = |src: &str| evaluate_expression(src).map(|value| value.to_string());
    assert_eq!(render("2+3"), Ok("5".to_string()));
    assert_eq!(render("10/4"), Ok("2.5".to_string()));
    assert_eq!(render("10/5"), Ok("2.0".to_string()));
    assert_eq!(render("-1.25*2"), Ok("-2.5".to_string()));
}

#[test]
fn division_by_zero() {
    assert_error("10 div 0", "Error: Division by zero");
    assert_error("10 / 0.0", "Error: Division by zero");
    assert_error("10 % (2 - 2)", "Error: Division by zero");
    assert_error("10 mod 0", "Error: Division by zero");
    assert_error("0 ^ -1", "Error: Division by zero");
}

#[test]
fn unmatched_parentheses_fail_before_arithmetic() {
    assert_error("(1+2", "Error: Unmatched parenthesis");
    assert_error("1+2)", "Error: Unmatched parenthesis");
    assert_error(")1+2(", "Error: Unmatched parenthesis");
    assert_error("(1/0", "Error: Unmatched parenthesis");
    assert_error("1 plus 2)", "Error: Unmatched parenthesis");
}

#[test]
fn invalid_operators_and_numbers() {
    assert_error("2 plus 3", "Error: Invalid operator \"plus\"");
    assert_error("2 $ 3", "Error: Invalid operator \"$\"");
    assert_error("2 add+ 3", "Error: Invalid operator \"add+\"");
    assert_error("1.2.3 + 1", "Error: Invalid number \"1.2.3\"");
    assert_error("2 ** 3", "Error: Failed to structure \"2 * * 3\"");
}

#[test]
fn malformed_expressions() {
    assert_error("2+", "Error: Failed to structure \"2 +\"");
    assert_error("", "Error: Failed to structure \"\"");
    assert_error("()", "Error: Failed to structure \"()\"");
    assert_failure("+");
    assert_failure("(2)(3)");
    assert_failure("1 + * 2");
}

#[test]
fn leading_binary_only_operators_fail() {
    for src in ["*5", "/5", "%5", "^5", "mul 5", "pow(2)"] {
        assert_error(src, "Error: This operator requires two numbers");
    }
}

#[test]
fn non_real_and_out_of_range_powers() {
    assert_error("(-8) ^ 0.5", "Error: Invalid number \"-8 ^ 0.5\"");
    assert_error("10.0 ^ 400", "Error: Numerical result out of range");
}

#[test]
fn repeated_evaluation_is_stable() {
    for src in ["2+3*4", "10 div 0", "(1+2", "-(2)^2", "7/3"] {
        assert_eq!(evaluate_expression(src), evaluate_expression(src));
    }
}

#[test]
fn deep_nesting_is_an_error() {
    let nested = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_error(&nested, "Error: Maximum nesting depth exceeded");
    assert_int(&format!("{}1{}", "(".repeat(200), ")".repeat(200)), 1);
}

#[test]
fn long_chains_are_an_error() {
    assert_error(&vec!["1"; 200_000].join("+"), "Error: Maximum operator count exceeded");
    assert_error(&vec!["1"; 100_000].join("^"), "Error: Maximum operator count exceeded");
    assert_int(&vec!["1"; 500].join("+"), 500);
}

#[test]
fn session_continues_after_oversized_input() {
    let deep = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    let input = format!("{deep}\n2+3\nq\n");
    let mut output = Vec::new();
    repl::run(&mut input.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error: Maximum nesting depth exceeded\n"), "{output}");
    assert!(output.contains("5\n"), "{output}");
}
