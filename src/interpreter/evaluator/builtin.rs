use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{BuiltinDef, NULL, Value},
    },
};

/// The fixed builtin table.
///
/// Builtins resolve after the environment chain, so a user binding named
/// `len` shadows the builtin.
pub static BUILTINS: &[BuiltinDef] = &[BuiltinDef { name: "len", func: len },
                                       BuiltinDef { name: "first", func: first },
                                       BuiltinDef { name: "last", func: last },
                                       BuiltinDef { name: "rest", func: rest },
                                       BuiltinDef { name: "push", func: push },
                                       BuiltinDef { name: "puts", func: puts },
                                       BuiltinDef { name: "type", func: type_of }];

/// Looks up a builtin by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// Checks the exact argument count every builtin but `puts` demands.
const fn check_arity(args: &[Value], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want })
    }
}

/// `len(v)`: the byte length of a string or the element count of an array.
#[allow(clippy::cast_possible_wrap)]
fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Str(text) => Ok(Value::Integer(text.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::ArgumentNotSupported { builtin: "len",
                                                         got:     other.type_name(),
                                                         want:    ("STRING", "ARRAY"), }),
    }
}

/// `first(a)`: the first element of an array, or `null` when it is empty.
fn first(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(NULL)),
        other => Err(RuntimeError::ArgumentMustBeArray { builtin: "first",
                                                        got:     other.type_name(), }),
    }
}

/// `last(a)`: the last element of an array, or `null` when it is empty.
fn last(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(NULL)),
        other => Err(RuntimeError::ArgumentMustBeArray { builtin: "last",
                                                        got:     other.type_name(), }),
    }
}

/// `rest(a)`: a fresh array holding everything but the first element, or
/// `null` when the array is empty.
fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(NULL)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(RuntimeError::ArgumentMustBeArray { builtin: "rest",
                                                        got:     other.type_name(), }),
    }
}

/// `push(a, v)`: a fresh array equal to `a` with `v` appended. The source
/// array is untouched.
fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut pushed = elements.as_ref().clone();
            pushed.push(args[1].clone());
            Ok(Value::Array(Rc::new(pushed)))
        },
        other => Err(RuntimeError::ArgumentMustBeArray { builtin: "push",
                                                        got:     other.type_name(), }),
    }
}

/// `puts(...)`: the newline-joined `Inspect` renderings of the arguments.
/// Pure; nothing is written anywhere.
fn puts(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Str(args.iter()
                      .map(ToString::to_string)
                      .collect::<Vec<_>>()
                      .join("\n")))
}

/// `type(v)`: the value's type tag, lowercased.
fn type_of(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    Ok(Value::Str(args[0].type_name().to_lowercase()))
}
