use std::fs;

use monkey::{
    error::ProgramError,
    eval_source,
    interpreter::value::{
        core::{FALSE, TRUE, Value},
        environment::Environment,
        hash_key::HashKey,
    },
};
use walkdir::WalkDir;

fn run(source: &str) -> Result<Option<Value>, ProgramError> {
    eval_source(source, &Environment::new())
}

fn eval(source: &str) -> Value {
    run(source).unwrap_or_else(|error| panic!("program failed: {source}\n{error}"))
               .unwrap_or_else(|| panic!("program produced no value: {source}"))
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval(source), Value::Integer(expected), "input: {source}");
}

fn assert_boolean(source: &str, expected: bool) {
    assert_eq!(eval(source), Value::Boolean(expected), "input: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval(source), Value::Null, "input: {source}");
}

fn assert_runtime_error(source: &str, expected: &str) {
    match run(source) {
        Err(ProgramError::Runtime(error)) => {
            assert_eq!(error.to_string(), expected, "input: {source}");
        },
        other => panic!("expected runtime error for {source}, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    let tests = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("5 ^ 2", 25),
                 ("5 ^ -1", 0),
                 ("5 ^ 1 + 5", 10),
                 ("5 * 5 ^ 0", 5),
                 ("2 % 4", 2),
                 ("9 % 4", 1)];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn integer_division_by_zero_is_nan() {
    assert_eq!(eval("1 / 0"), Value::Nan);
    assert_eq!(eval("type(1 / 0)"), Value::from("nan"));
    assert_boolean("1 / 0 == 1 / 0", true);
}

#[test]
fn boolean_expressions() {
    let tests = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 > 1", false),
                 ("1 <= 1", true),
                 ("1 >= 2", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("false != true", true),
                 ("(1 < 2) == true", true),
                 ("(1 < 2) == false", false),
                 ("(1 > 2) == true", false),
                 ("(1 > 2) == false", true),
                 ("true && true", true),
                 ("true && !true", false),
                 ("true && false", false),
                 ("!true && true", false),
                 ("true || true", true),
                 ("true || !true", true),
                 ("true || false", true),
                 ("!true || true", true),
                 ("true || 2 % 4 * 5^2 >= 2 % 4 * 5^0", true),
                 ("!nil", true),
                 ("!!nil", false),
                 ("nil == nil", true),
                 ("nil != nil", false)];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn compound_assignment_writes_back() {
    let tests = [("let x = 1;x += 2; x == 3", true),
                 ("let x = 1;x += x; x == 2", true),
                 ("let x = 1;x += 2; x *= x; x == 9", true),
                 ("let x = 1;x -= 2; x == -1", true),
                 ("let x = 1;x -= x; x == 0", true),
                 ("let x = 1;x -= 2; x *= x; x == 1", true),
                 ("let x = 1;x *= 2; x == 2", true),
                 ("let x = 1;x *= x; x == 1", true),
                 ("let x = 1;x *= 2; x *= x; x == 4", true),
                 ("let x = 4;x /= 2; x == 2", true),
                 ("let x = 4;x *= x; x == 16", true),
                 ("let x = 4;x *= 2; x *= x; x == 64", true),
                 ("let x = 1.0;x += 2.0; x == 3.0", true),
                 ("let x = 1.0;x += x; x == 2.0", true),
                 ("let x = 1.0;x -= 2.0; x == -1.0", true),
                 ("let x = 1.0;x *= 2.0; x == 2.0", true),
                 ("let x = 4.0;x /= 2.0; x == 2.0", true),
                 ("let s = \"Hello\"; s += \" World\"; s == \"Hello World\"", true)];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn compound_assignment_itself_produces_no_value() {
    assert_eq!(run("let x = 1; x += 2;").unwrap(), None);
}

#[test]
fn compound_assignment_in_a_call_shadows_the_outer_binding() {
    // The write-back lands in the current environment, so a nested scope
    // shadows the outer binding instead of mutating it.
    assert_integer("let x = 1; let f = fn() { x += 2; x }; f()", 3);
    assert_integer("let x = 1; let f = fn() { x += 2; x }; f(); x", 1);
}

#[test]
fn stepper_operators() {
    let tests = [("let x = 1.0;x++; x == 2.0", true),
                 ("let x = 1.0;++x; x == 2.0", true),
                 ("let x = 1.0;x++ == 1.0", true),
                 ("let x = 1.0;++x == 2.0", true),
                 ("let x = 1.0;x--; x == 0.0", true),
                 ("let x = 1.0;--x; x == 0.0", true),
                 ("let x = 1.0;x-- == 1.0", true),
                 ("let x = 1.0;--x == 0.0", true),
                 ("let x = 1;x++; x == 2", true),
                 ("let x = 1;x++ == 1", true),
                 ("let x = 1;++x == 2", true),
                 ("let x = 1;x-- == 1", true),
                 ("let x = 1;--x == 0", true)];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn mixed_numeric_expressions() {
    let tests = [("let x = 4.0;x ^ 2.0 == 16.0", true),
                 ("let x = 4.0;x ^ 2 == 16.0", true),
                 ("let x = 4;x ^ 2.0 == 16.0", true),
                 ("let x = 4;4.0 + x ^ 2.0 == 4.0 ^ 2.0 + 4.0", true),
                 ("let x = 4.0;x % 2.0 == 0.0", true),
                 ("2 % 4 * 5^2 - 2 / 4 == 50", true),
                 ("2 % 4 * 5^2 - 2 / 4.0 == 49.5", true),
                 ("2 % 4 * 5^2 - 2.0 / 4 == 49.5", true),
                 ("2 % 4 * 5^2.0 - 2 / 4 == 50", true),
                 ("2 % 4 * 5.0^2 - 2 / 4 == 50", true),
                 ("2 % 4.0 * 5^2 - 2 / 4 == 50", true),
                 ("2.0 % 4 * 5^2 - 2 / 4 == 50", true),
                 ("2.0 % 4.0 * 5.0^2.0 - 2.0 / 4.0 == 49.5", true),
                 ("1 == 1.0", true),
                 ("1 < 1.5", true)];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn double_precision_tracking() {
    assert_eq!(eval("2.5 + 1.25"), Value::Double { value: 3.75, precision: 2 });
    assert_eq!(eval("0.1 + 0.2"),
               Value::Double { value: 0.1 + 0.2, precision: 1 });
    assert_eq!(eval("2.0 * 3.0"), Value::Double { value: 6.0, precision: 1 });
    assert_eq!(eval("1.0 / 4.0"), Value::Double { value: 0.25, precision: 2 });

    assert_eq!(eval("0.1 + 0.2").to_string(), "0.3");
    assert_eq!(eval("1.0 / 4.0").to_string(), "0.25");
    assert_eq!(eval("4.0 ^ 2").to_string(), "16");
    assert_eq!(eval("2.50").to_string(), "2.50");
    assert_eq!(eval("-2.5").to_string(), "-2.5");
}

#[test]
fn bang_operator() {
    let tests = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true)];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn if_else_expressions() {
    let tests = [("if (true) { 10 }", Some(10)),
                 ("if (false) { 10 }", None),
                 ("let x = 1; if (x == 1) { 10 }", Some(10)),
                 ("let x = 1; if (x++ == 1) { 10 }", Some(10)),
                 ("let x = 1; if (++x == 2) { 10 }", Some(10)),
                 ("let x = 1; if (x-- == 1) { 10 }", Some(10)),
                 ("let x = 1; if (--x == 0) { 10 }", Some(10)),
                 ("let x = 1; x++; if (x == 2) { 10 }", Some(10)),
                 ("let x = 1; x--; if (x == 0) { 10 }", Some(10)),
                 ("if (1) { 10 }", Some(10)),
                 ("if (1 < 2) { 10 }", Some(10)),
                 ("if (1 > 2) { 10 }", None),
                 ("if (1 > 2) { 10 } else { 20 }", Some(20)),
                 ("if (1 < 2) { 10 } else { 20 }", Some(10))];

    for (input, expected) in tests {
        match expected {
            Some(value) => assert_integer(input, value),
            None => assert_null(input),
        }
    }
}

#[test]
fn return_statements_unwind_once() {
    let tests = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) {
                       if (10 > 1) {
                           return 10;
                       }

                       return 1;
                   }",
                  10),
                 ("let addTwo = fn(x) { x + 2; }; addTwo(2);", 4),
                 ("let multiply = fn(x, y) { x * y }; multiply(50 / 2, 1 * 2);", 50),
                 ("let pow = fn(x) { x * x }; pow(5);", 25)];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn let_statements() {
    let tests = [("let a = 5; a;", 5),
                 ("let a = 5 * 5; a;", 25),
                 ("let a = 5; let b = a; b;", 5),
                 ("let a = 5; let b = a; let c = a + b + 5; c;", 15)];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn runtime_errors_short_circuit() {
    let tests = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) {
                       if (10 > 1) {
                           return true + false;
                       };
                       return 1;
                   }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
                 (r#""Hello" < "World""#, "unknown operator: STRING < STRING"),
                 ("[1, 2, 3][3]", "array index out of bounds[0, 2]: 3"),
                 ("[1, 2, 3][-1]", "array index out of bounds[0, 2]: -1"),
                 ("[][0]", "array index out of bounds[0, -1]: 0"),
                 (r#"{"name": "Monkey"}[fn(x) { x }];"#, "unusable as hash key: FUNCTION"),
                 ("{[1]: 2}", "unusable as hash key: ARRAY"),
                 ("5[0]", "index operator not supported: INTEGER"),
                 ("5 ^ true;", "type mismatch: INTEGER ^ BOOLEAN"),
                 (r#"5 ^ "hello";"#, "type mismatch: INTEGER ^ STRING"),
                 (r#"let x = 5; x += "Hello";"#, "type mismatch: INTEGER += STRING"),
                 ("true && 1", "type mismatch: BOOLEAN && INTEGER"),
                 ("1 && 2", "unknown operator: INTEGER && INTEGER"),
                 (r#"let x = "5"; ++x;"#, "unknown operator: ++STRING"),
                 (r#"let x = "5"; --x;"#, "unknown operator: --STRING"),
                 (r#"let x = "5"; x++;"#, "unknown operator: STRING++"),
                 (r#"let x = "5"; x--;"#, "unknown operator: STRING--"),
                 ("let x = true; ++x;", "unknown operator: ++BOOLEAN"),
                 ("let x = true; x--;", "unknown operator: BOOLEAN--"),
                 ("let x = []; ++x;", "unknown operator: ++ARRAY"),
                 ("let x = []; x++;", "unknown operator: ARRAY++"),
                 ("let x = {}; --x;", "unknown operator: --HASH"),
                 ("let x = {}; x--;", "unknown operator: HASH--"),
                 ("++5", "unknown operator: ++INTEGER"),
                 ("5()", "not a function: INTEGER"),
                 ("let len = 5; len(1)", "not a function: INTEGER")];

    for (input, expected) in tests {
        assert_runtime_error(input, expected);
    }
}

#[test]
fn an_error_never_mutates_the_environment() {
    // The let binding must not land once its right side errors out.
    assert_runtime_error("let x = 5 + true; x", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("let ok = 1; let x = foo; 2", "identifier not found: foo");
}

#[test]
fn function_values_carry_parameters_and_body() {
    let Value::Function(function) = eval("fn(x) { x + 2; };") else {
        panic!("expected a function value");
    };

    assert_eq!(function.parameters, vec!["x".to_string()]);
    assert_eq!(function.body.to_string(), "(x + 2)");
}

#[test]
fn function_application() {
    let tests = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x; }(5)", 5)];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn wrong_arity_is_an_error() {
    assert_runtime_error("let identity = fn(x) { x; }; identity();",
                         "wrong number of arguments. got=0, want=1");
    assert_runtime_error("let identity = fn(x) { x; }; identity(1, 2);",
                         "wrong number of arguments. got=2, want=1");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); \
                    addTwo(3);",
                   5);
    assert_boolean("let counter = fn(x) { if (x > 3) { return true; } else { counter(x + 1); } \
                    }; counter(0);",
                   true);
    assert_integer("let five = 5; let ten = 10; let add = fn(x, y) { x + y; }; add(five, ten);",
                   15);
}

#[test]
fn later_assignments_stay_visible_to_closures() {
    assert_integer("let f = fn() { x }; let x = 41; f() + 1", 42);
}

#[test]
fn string_literals_and_concatenation() {
    assert_eq!(eval(r#""Hello World!""#), Value::from("Hello World!"));
    assert_eq!(eval(r#""Hello" + " " + "World!""#), Value::from("Hello World!"));
    assert_eq!(eval(r#""say \"hi\"\n""#), Value::from("say \"hi\"\n"));
}

#[test]
fn string_comparison() {
    let tests = [(r#""x" == "x""#, true),
                 (r#""x" != "x""#, false),
                 (r#"let x = "12345"; x == "12345""#, true),
                 (r#"let x = "Hello"; let y = " World"; x + y == "Hello World""#, true),
                 (r#"let x = "Hello"; let y = " World"; x += y; x == "Hello World""#, true),
                 (r#"let x = "Hello"; x == x"#, true),
                 (r#"let x = "Hello"; let y = "World"; x == y"#, false),
                 (r#"let x = "Hello"; let y = "World"; x != y"#, true)];

    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn equality_on_containers_is_identity() {
    assert_boolean("[1, 2] == [1, 2]", false);
    assert_boolean("let a = [1, 2]; a == a", true);
    assert_boolean("let a = [1]; let b = a; a == b", true);
    assert_boolean("{} == {}", false);
    assert_boolean("let h = {}; h == h", true);
    assert_boolean("5 == true", false);
    assert_boolean(r#"5 != "5""#, true);
}

#[test]
fn builtin_functions() {
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("four")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);

    assert_runtime_error("len(1)",
                         "argument to `len` not supported, got INTEGER, want STRING or ARRAY");
    assert_runtime_error("len(true)",
                         "argument to `len` not supported, got BOOLEAN, want STRING or ARRAY");
    assert_runtime_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");

    assert_integer("first([1, 2, 3])", 1);
    assert_null("first([])");
    assert_runtime_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");

    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_runtime_error(r#"last("abc")"#, "argument to `last` must be ARRAY, got STRING");

    assert_eq!(eval("let a = [1, 2, 3, 4]; rest(a)"),
               Value::from(vec![Value::Integer(2), Value::Integer(3), Value::Integer(4)]));
    assert_eq!(eval("let a = [1, 2, 3, 4]; rest(rest(a))"),
               Value::from(vec![Value::Integer(3), Value::Integer(4)]));
    assert_null("rest([])");
    assert_runtime_error("rest(nil)", "argument to `rest` must be ARRAY, got NULL");

    assert_eq!(eval("let a = [1, 2, 3, 4]; let b = push(a, 5); a;"),
               Value::from(vec![Value::Integer(1),
                                Value::Integer(2),
                                Value::Integer(3),
                                Value::Integer(4)]));
    assert_eq!(eval("let a = [1, 2, 3, 4]; let b = push(a, 5); b;"),
               Value::from(vec![Value::Integer(1),
                                Value::Integer(2),
                                Value::Integer(3),
                                Value::Integer(4),
                                Value::Integer(5)]));
    assert_runtime_error("push(1, 2)", "argument to `push` must be ARRAY, got INTEGER");

    assert_eq!(eval(r#"puts("a", 1, [1, 2])"#), Value::from("a\n1\n[1, 2]"));
    assert_eq!(eval("puts()"), Value::from(""));

    assert_eq!(eval("type(1)"), Value::from("integer"));
    assert_eq!(eval("type(1.5)"), Value::from("double"));
    assert_eq!(eval(r#"type("x")"#), Value::from("string"));
    assert_eq!(eval("type(true)"), Value::from("boolean"));
    assert_eq!(eval("type(nil)"), Value::from("null"));
    assert_eq!(eval("type([])"), Value::from("array"));
    assert_eq!(eval("type({})"), Value::from("hash"));
    assert_eq!(eval("type(fn(x) { x })"), Value::from("function"));
    assert_eq!(eval("type(len)"), Value::from("builtin"));
}

#[test]
fn builtins_compose_into_higher_order_functions() {
    let map = "
        let map = fn(arr, f) {
            let iter = fn(a, acc) {
                if (len(a) == 0) {
                    acc
                } else {
                    iter(rest(a), push(acc, f(first(a))));
                }
            };
            iter(arr, []);
        };
        map([1, 2, 3], fn(x) { x * 2 });";
    assert_eq!(eval(map),
               Value::from(vec![Value::Integer(2), Value::Integer(4), Value::Integer(6)]));

    let reduce = "
        let reduce = fn(arr, initial, f) {
            let iter = fn(a, result) {
                if (len(a) == 0) {
                    result
                } else {
                    iter(rest(a), f(result, first(a)));
                }
            };
            iter(arr, initial);
        };
        let sum = fn(arr) { reduce(arr, 0, fn(acc, el) { acc + el }); };
        sum([1, 2, 3, 4, 5]);";
    assert_integer(reduce, 15);
}

#[test]
fn builtins_can_be_shadowed() {
    assert_integer("let len = 5; len", 5);
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
    assert_eq!(eval("[]"), Value::from(Vec::<Value>::new()));

    let tests = [("[1, 2, 3][0]", 1),
                 ("[1, 2, 3][1]", 2),
                 ("[1, 2, 3][2]", 3),
                 ("let i = 0; [1][i];", 1),
                 ("[1, 2, 3][1 + 1];", 3),
                 ("let myArray = [1, 2, 3]; myArray[2];", 3),
                 ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6),
                 ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2)];

    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn hash_literals_evaluate_keys_and_values() {
    let evaluated = eval(r#"let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }"#);

    let Value::Hash(pairs) = evaluated else {
        panic!("expected a hash value");
    };
    assert_eq!(pairs.len(), 6);

    let expected = [(Value::from("one"), 1),
                    (Value::from("two"), 2),
                    (Value::from("three"), 3),
                    (Value::Integer(4), 4),
                    (TRUE, 5),
                    (FALSE, 6)];

    for (key, want) in expected {
        let hash_key = HashKey::from_value(&key).unwrap();
        let pair = pairs.get(&hash_key).unwrap_or_else(|| panic!("no pair for key {key}"));
        assert_eq!(pair.value, Value::Integer(want));
    }
}

#[test]
fn hash_indexing() {
    let tests = [(r#"{"foo": 5}["foo"]"#, Some(5)),
                 (r#"{"foo": 5}["bar"]"#, None),
                 (r#"let key = "foo"; {"foo": 5}[key]"#, Some(5)),
                 (r#"{}["foo"]"#, None),
                 ("{5: 5}[5]", Some(5)),
                 ("{true: 5}[true]", Some(5)),
                 ("{false: 5}[false]", Some(5)),
                 ("{1.0: 10}[1.0]", Some(10)),
                 ("{2^2: 16}[4]", Some(16)),
                 ("{-2^2: 16}[4]", Some(16)),
                 ("{-2^3: 16}[-8]", Some(16)),
                 ("{-(2^3): 16}[-8]", Some(16)),
                 ("{-(2^3): 16}[-8] + 4", Some(20))];

    for (input, expected) in tests {
        match expected {
            Some(value) => assert_integer(input, value),
            None => assert_null(input),
        }
    }
}

#[test]
fn hashes_nest_inside_arrays() {
    assert_integer(r#"let people = [{"name": "Alice", "age": 24}, {"name": "Anna", "age": 28}];
                      let n = "name"; let z = 0; len(people[z][n])"#,
                   5);
    assert_integer(r#"let people = [{"name": "Alice", "age": 24}, {"name": "Anna", "age": 28}];
                      people[1]["age"]"#,
                   28);
    assert_integer(r#"let getAge = fn(person) { person["age"]; };
                      getAge({"name": "Alice", "age": 24}) + getAge({"name": "Anna", "age": 28});"#,
                   52);
}

#[test]
fn hash_rendering_is_deterministic() {
    assert_eq!(eval(r#"{2: "b", 1: "a"}"#).to_string(), "{1: a, 2: b}");
}

#[test]
fn null_coalescing() {
    assert_integer("nil ?? 42", 42);
    assert_integer("0 ?? 42", 0);
    assert_boolean("false ?? false", false);
    assert_boolean("true ?? true", true);
    assert_boolean("false ?? true", false);
    assert_boolean("let x = true; x ?? false", true);
    assert_boolean("let x = nil; x ?? true", true);
    assert_boolean("let x = nil; x ?? false", false);
    assert_null("nil ?? nil");
    assert_integer("(1+1) ?? nil", 2);
    assert_integer("100 ?? nil", 100);
}

#[test]
fn hash_lookup_feeds_arithmetic() {
    assert_integer(r#"{"name":"Alice","age":24}["age"] + 1"#, 25);
}

#[test]
fn comments_are_ignored_by_evaluation() {
    assert_integer("let x = 5; // the five\nx", 5);
    assert_integer("// leading comment\n1 + 2", 3);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let source = r#"let map = fn(arr,f){ let iter = fn(a,acc){ if(len(a)==0){ acc } else {
        iter(rest(a), push(acc, f(first(a)))) } }; iter(arr, []) };
        map([1,2,3], fn(x){ x*2 })"#;

    assert_eq!(eval(source), eval(source));
    assert_eq!(eval(source),
               Value::from(vec![Value::Integer(2), Value::Integer(4), Value::Integer(6)]));
}

#[test]
fn script_corpus_runs_clean() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "monkey")
                                              })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        match run(&source) {
            Ok(Some(value)) => {
                assert_eq!(value,
                           Value::Boolean(true),
                           "final check of {path:?} did not hold");
            },
            other => panic!("script {path:?} failed: {other:?}"),
        }
    }

    assert!(count > 0, "no scripts found in tests/scripts");
}
