use std::fs;

use luma::{
    evaluate_source,
    interpreter::{evaluator::core::Environment, value::core::Value},
};
use walkdir::WalkDir;

fn eval_in(env: &mut Environment, source: &str) -> Option<Value> {
    evaluate_source(source, env).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn eval_one(source: &str) -> Option<Value> {
    eval_in(&mut Environment::new(), source)
}

fn assert_failure(source: &str) {
    if evaluate_source(source, &mut Environment::new()).is_ok() {
        panic!("Script succeeded but was expected to fail: {source}")
    }
}

fn stored(env: &Environment, name: &str) -> Value {
    *env.get(name)
        .unwrap_or_else(|| panic!("Variable {name} is not defined"))
}

#[test]
fn assignment_and_basic_arithmetic() {
    let mut env = Environment::new();

    eval_in(&mut env, "x := 1 + 2");
    assert_eq!(stored(&env, "x"), Value::Integer(3));

    eval_in(&mut env, "x := 7 * 9");
    assert_eq!(stored(&env, "x"), Value::Integer(63));

    eval_in(&mut env, "x := 8 - 5");
    assert_eq!(stored(&env, "x"), Value::Integer(3));

    eval_in(&mut env, "x := 1 + 2 * 3");
    assert_eq!(stored(&env, "x"), Value::Integer(7));

    eval_in(&mut env, "x := -(2 + 3)");
    assert_eq!(stored(&env, "x"), Value::Integer(-5));

    eval_in(&mut env, "x := +4");
    assert_eq!(stored(&env, "x"), Value::Integer(4));
}

#[test]
fn division_always_yields_a_real() {
    assert_eq!(eval_one("10 / 2"), Some(Value::Real(5.0)));
    assert_eq!(eval_one("10 / 4"), Some(Value::Real(2.5)));
    assert_eq!(eval_one("1 / 0"), Some(Value::Real(f64::INFINITY)));
}

#[test]
fn exponentiation() {
    assert_eq!(eval_one("2 ^ 10"), Some(Value::Integer(1024)));
    assert_eq!(eval_one("2 ^ -1"), Some(Value::Real(0.5)));
    assert_eq!(eval_one("2 ^ 3 ^ 2"), Some(Value::Integer(512)));
    assert_eq!(eval_one("2.0 ^ 3"), Some(Value::Real(8.0)));
}

#[test]
fn hex_and_decimal_numerals_agree() {
    assert_eq!(eval_one("0x10"), Some(Value::Integer(16)));
    assert_eq!(eval_one("16"), Some(Value::Integer(16)));
    assert_eq!(eval_one("0x10 == 16"), Some(Value::Bool(true)));
    assert_eq!(eval_one("0xff"), Some(Value::Integer(255)));
    assert_eq!(eval_one("0x1.8"), Some(Value::Real(1.5)));
}

#[test]
fn store_round_trip_and_nil_removal() {
    let mut env = Environment::new();

    eval_in(&mut env, "x := 5");
    assert_eq!(eval_in(&mut env, "x"), Some(Value::Integer(5)));

    eval_in(&mut env, "x := nil");
    assert_eq!(env.get("x"), None);
    assert!(env.is_empty());
}

#[test]
fn absent_values_propagate() {
    assert_eq!(eval_one("y + 1"), None);
    assert_eq!(eval_one("y * 2"), None);
    assert_eq!(eval_one("1 + nil"), None);
    assert_eq!(eval_one("y == 1"), None);
    assert_eq!(eval_one("y < 1"), None);
    assert_eq!(eval_one("-y"), None);
}

#[test]
fn and_or_short_circuit() {
    assert_eq!(eval_one("true or (1 / 0)"), Some(Value::Bool(true)));

    // The skipped operand would be a type error if it were evaluated.
    assert_eq!(eval_one("true or (true + 1)"), Some(Value::Bool(true)));
    assert_eq!(eval_one("false and (true + 1)"), Some(Value::Bool(false)));
    assert_failure("false or (true + 1)");

    assert_eq!(eval_one("false or 3"), Some(Value::Integer(3)));
    assert_eq!(eval_one("true and 3"), Some(Value::Integer(3)));
    assert_eq!(eval_one("nil or 2"), Some(Value::Integer(2)));
    assert_eq!(eval_one("nil and 2"), None);
}

#[test]
fn truthiness_counts_zero_as_true() {
    let mut env = Environment::new();

    eval_in(&mut env, "if 0 then x := 1 else x := 2 end");
    assert_eq!(stored(&env, "x"), Value::Integer(1));

    eval_in(&mut env, "if nil then x := 1 else x := 2 end");
    assert_eq!(stored(&env, "x"), Value::Integer(2));

    assert_eq!(eval_one("not nil"), Some(Value::Bool(true)));
    assert_eq!(eval_one("not 0"), Some(Value::Bool(false)));
}

#[test]
fn while_counts_to_three() {
    let mut env = Environment::new();

    eval_in(&mut env, "x := 0 while (x < 3) do x := x + 1 end");
    assert_eq!(stored(&env, "x"), Value::Integer(3));
}

#[test]
fn while_yields_the_final_body_result() {
    assert_eq!(eval_one("x := 0 while (x < 3) do x := x + 1 x end"),
               Some(Value::Integer(3)));

    // A loop whose body never runs yields the absent value.
    assert_eq!(eval_one("while false do 1 end"), None);
}

#[test]
fn cascading_conditionals_take_one_branch() {
    let mut env = Environment::new();

    eval_in(&mut env,
            "x := 2 if (x == 1) then y := 1 elseif (x == 2) then y := 2 else y := 3 end");
    assert_eq!(stored(&env, "y"), Value::Integer(2));

    let mut env = Environment::new();
    eval_in(&mut env,
            "a := 0 b := 0 if (1 == 1) then a := 9 elseif (1 == 1) then b := 9 end");
    assert_eq!(stored(&env, "a"), Value::Integer(9));
    assert_eq!(stored(&env, "b"), Value::Integer(0));
}

#[test]
fn program_result_is_last_statement() {
    assert_eq!(eval_one("1 + 1 2 + 2"), Some(Value::Integer(4)));
    assert_eq!(eval_one("x := 5"), None);
    assert_eq!(eval_one("x := 5 x"), Some(Value::Integer(5)));
}

#[test]
fn comparisons() {
    assert_eq!(eval_one("1 == 1.0"), Some(Value::Bool(true)));
    assert_eq!(eval_one("1 ~= 2"), Some(Value::Bool(true)));
    assert_eq!(eval_one("2 <= 2"), Some(Value::Bool(true)));
    assert_eq!(eval_one("3 > 2.5"), Some(Value::Bool(true)));
    assert_eq!(eval_one("true == true"), Some(Value::Bool(true)));
    assert_eq!(eval_one("true == 1"), Some(Value::Bool(false)));
    assert_eq!(eval_one("true ~= 1"), Some(Value::Bool(true)));
}

#[test]
fn ordering_booleans_is_an_error() {
    assert_failure("true < 1");
    assert_failure("false >= false");
}

#[test]
fn arithmetic_on_booleans_is_an_error() {
    assert_failure("true + 1");
    assert_failure("-true");
}

#[test]
fn integer_overflow_is_an_error() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("2 ^ 200");
}

#[test]
fn comments_are_transparent() {
    assert_eq!(eval_one("-- intro\n1 + 1 --[[ block\nstill comment --]] + 1"),
               Some(Value::Integer(3)));
}

#[test]
fn print_yields_the_absent_value() {
    assert_eq!(eval_one("print 40 + 2"), None);
    assert_eq!(eval_one("print nil"), None);
}

#[test]
fn strings_are_not_runtime_values() {
    assert_failure("x := 'hi'");
}

#[test]
fn sample_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "luma"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut env = Environment::new();
        if let Err(e) = evaluate_source(&content, &mut env) {
            panic!("Sample script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No sample scripts found in scripts/");
}
