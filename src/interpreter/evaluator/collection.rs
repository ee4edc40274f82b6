use std::{collections::BTreeMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_value},
        value::{
            core::{HashPair, NULL, Value},
            environment::Env,
            hash_key::HashKey,
        },
    },
};

/// Evaluates an array literal: elements evaluate in source order.
pub fn eval_array_literal(elements: &[Expression], env: &Env) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(eval_value(element, env)?);
    }

    Ok(Value::Array(Rc::new(values)))
}

/// Evaluates a hash literal.
///
/// For each pair the key evaluates first and must be hashable (integer,
/// double, boolean or string); then the value evaluates. A later duplicate
/// key overwrites the earlier pair.
pub fn eval_hash_literal(pairs: &[(Expression, Expression)], env: &Env) -> EvalResult<Value> {
    let mut map = BTreeMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_value(key_expression, env)?;
        let hash_key = HashKey::from_value(&key).ok_or_else(|| {
                           RuntimeError::UnusableHashKey { kind: key.type_name(), }
                       })?;

        let value = eval_value(value_expression, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}

/// Evaluates an index expression.
///
/// Arrays take an integer index checked against `[0, len - 1]`; negative
/// indices are out of bounds, not wrap-around. Hashes take any hashable
/// index and yield `null` for a missing key. Anything else does not support
/// indexing.
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
pub fn eval_index(left: &Expression, index: &Expression, env: &Env) -> EvalResult<Value> {
    let left = eval_value(left, env)?;
    let index = eval_value(index, env)?;

    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            let max = elements.len() as i64 - 1;
            if *i < 0 || *i > max {
                return Err(RuntimeError::IndexOutOfBounds { max, index: *i });
            }
            Ok(elements[*i as usize].clone())
        },
        (Value::Hash(pairs), _) => {
            let key = HashKey::from_value(&index).ok_or_else(|| {
                          RuntimeError::UnusableHashKey { kind: index.type_name(), }
                      })?;
            Ok(pairs.get(&key).map_or(NULL, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name(), }),
    }
}
