use std::rc::Rc;

use crate::{
    ast::{Expression, InfixOperator, PrefixOperator, SuffixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_value, is_truthy},
        value::{
            core::{NAN, Value},
            environment::Env,
        },
    },
    util::num::printed_precision,
};

/// Evaluates a prefix operation.
///
/// `!` inverts truthiness and `-` negates numbers. The steppers `++`/`--`
/// only apply to an identifier naming a numeric value: they compute the new
/// value, write it back to the current environment, and return the **new**
/// value.
pub fn eval_prefix(operator: PrefixOperator,
                   operand: &Expression,
                   env: &Env)
                   -> EvalResult<Value> {
    let value = eval_value(operand, env)?;

    match operator {
        PrefixOperator::Bang => Ok(Value::from(!is_truthy(&value))),
        PrefixOperator::Minus => match value {
            Value::Integer(i) => Ok(Value::Integer(i.wrapping_neg())),
            Value::Double { value, precision } => Ok(Value::Double { value: -value,
                                                                    precision }),
            other => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                               operand:  other.type_name(), }),
        },
        PrefixOperator::Increment | PrefixOperator::Decrement => {
            let Expression::Identifier(name) = operand else {
                return Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                                 operand:  value.type_name(), });
            };

            let delta = if operator == PrefixOperator::Increment { 1 } else { -1 };
            let stepped = step_numeric(&value, delta).ok_or_else(|| {
                              RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                                    operand:  value.type_name(), }
                          })?;

            env.borrow_mut().set(name, stepped.clone());
            Ok(stepped)
        },
    }
}

/// Evaluates a suffix operation (`x++`, `x--`).
///
/// Same write-back as the prefix steppers, but the returned value is the
/// operand's value *before* the update.
pub fn eval_suffix(operator: SuffixOperator,
                   operand: &Expression,
                   env: &Env)
                   -> EvalResult<Value> {
    let value = eval_value(operand, env)?;

    let Expression::Identifier(name) = operand else {
        return Err(RuntimeError::UnknownSuffixOperator { operand:  value.type_name(),
                                                         operator: operator.to_string(), });
    };

    let delta = if operator == SuffixOperator::Increment { 1 } else { -1 };
    let stepped = step_numeric(&value, delta).ok_or_else(|| {
                      RuntimeError::UnknownSuffixOperator { operand:  value.type_name(),
                                                            operator: operator.to_string(), }
                  })?;

    env.borrow_mut().set(name, stepped);
    Ok(value)
}

/// Steps a numeric value by `delta`, preserving a double's precision.
#[allow(clippy::cast_precision_loss)]
fn step_numeric(value: &Value, delta: i64) -> Option<Value> {
    match value {
        Value::Integer(i) => Some(Value::Integer(i.wrapping_add(delta))),
        Value::Double { value, precision } => Some(Value::Double { value:     value
                                                                              + delta as f64,
                                                                   precision: *precision, }),
        _ => None,
    }
}

/// Evaluates an infix operation.
///
/// Operands evaluate left to right and errors short-circuit. The in-place
/// forms additionally write the result back to the left-hand binding in the
/// current environment and yield nothing; every other operator yields its
/// result.
pub fn eval_infix(operator: InfixOperator,
                  left: &Expression,
                  right: &Expression,
                  env: &Env)
                  -> EvalResult<Option<Value>> {
    let left_value = eval_value(left, env)?;
    let right_value = eval_value(right, env)?;

    let result = apply_infix(operator, &left_value, &right_value)?;

    if operator.is_compound() {
        if let Expression::Identifier(name) = left {
            env.borrow_mut().set(name, result);
        }
        return Ok(None);
    }

    Ok(Some(result))
}

/// Applies an infix operator to two already-evaluated values.
///
/// Dispatch by operand type pair: same-typed integers, doubles, booleans
/// and strings each have their own table; a mixed integer/double pair
/// widens to doubles for the arithmetic and comparison operators; `==` and
/// `!=` on anything else compare identity; the rest is a type mismatch.
pub(in crate::interpreter::evaluator) fn apply_infix(operator: InfixOperator,
                                                     left: &Value,
                                                     right: &Value)
                                                     -> EvalResult<Value> {
    match operator {
        InfixOperator::NullOr => {
            // Only NULL coalesces; both operands were already evaluated.
            if matches!(left, Value::Null) {
                Ok(right.clone())
            } else {
                Ok(left.clone())
            }
        },
        InfixOperator::Power | InfixOperator::Modulus => match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => integer_infix(operator, *l, *r),
            _ => match (left.as_numeric_f64(), right.as_numeric_f64()) {
                (Some(l), Some(r)) => Ok(float_result(operator, l, r)),
                _ => Err(type_mismatch(operator, left, right)),
            },
        },
        _ => match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => integer_infix(operator, *l, *r),
            (Value::Double { value: lv, precision: lp },
             Value::Double { value: rv, precision: rp }) => {
                double_infix(operator, *lv, *lp, *rv, *rp)
            },
            (Value::Boolean(l), Value::Boolean(r)) => boolean_infix(operator, *l, *r),
            (Value::Str(l), Value::Str(r)) => string_infix(operator, l, r),
            #[allow(clippy::cast_precision_loss)]
            (Value::Integer(l), Value::Double { value: rv, precision: rp })
                if operator.widens() =>
            {
                double_infix(operator, *l as f64, 0, *rv, *rp)
            },
            #[allow(clippy::cast_precision_loss)]
            (Value::Double { value: lv, precision: lp }, Value::Integer(r))
                if operator.widens() =>
            {
                double_infix(operator, *lv, *lp, *r as f64, 0)
            },
            _ => {
                if operator.widens() {
                    match operator {
                        InfixOperator::Equal => Ok(Value::from(identity_eq(left, right))),
                        InfixOperator::NotEqual => Ok(Value::from(!identity_eq(left, right))),
                        _ => Err(type_mismatch(operator, left, right)),
                    }
                } else if left.type_name() == right.type_name() {
                    Err(unknown_infix(operator, left, right))
                } else {
                    Err(type_mismatch(operator, left, right))
                }
            },
        },
    }
}

#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
fn integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match operator {
        InfixOperator::Plus | InfixOperator::PlusAssign => {
            Ok(Value::Integer(left.wrapping_add(right)))
        },
        InfixOperator::Minus | InfixOperator::MinusAssign => {
            Ok(Value::Integer(left.wrapping_sub(right)))
        },
        InfixOperator::Asterisk | InfixOperator::AsteriskAssign => {
            Ok(Value::Integer(left.wrapping_mul(right)))
        },
        InfixOperator::Slash | InfixOperator::SlashAssign => {
            // Division by zero is NAN, not an error.
            if right == 0 {
                Ok(NAN)
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        },
        InfixOperator::LessThan => Ok(Value::from(left < right)),
        InfixOperator::LessEqual => Ok(Value::from(left <= right)),
        InfixOperator::GreaterThan => Ok(Value::from(left > right)),
        InfixOperator::GreaterEqual => Ok(Value::from(left >= right)),
        InfixOperator::Equal => Ok(Value::from(left == right)),
        InfixOperator::NotEqual => Ok(Value::from(left != right)),
        InfixOperator::Power => Ok(Value::Integer((left as f64).powf(right as f64) as i64)),
        InfixOperator::Modulus => Ok(Value::Integer((left as f64 % right as f64) as i64)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "INTEGER",
                                                      operator: operator.to_string(),
                                                      right:    "INTEGER", }),
    }
}

fn double_infix(operator: InfixOperator,
                left: f64,
                left_precision: u32,
                right: f64,
                right_precision: u32)
                -> EvalResult<Value> {
    let precision = left_precision.max(right_precision);

    match operator {
        InfixOperator::Plus | InfixOperator::PlusAssign => Ok(Value::Double { value: left + right,
                                                                              precision }),
        InfixOperator::Minus | InfixOperator::MinusAssign => {
            Ok(Value::Double { value: left - right,
                               precision })
        },
        InfixOperator::Asterisk | InfixOperator::AsteriskAssign => {
            // Products widen to the precision the result actually prints with.
            let value = left * right;
            Ok(Value::Double { value,
                               precision: precision.max(printed_precision(value)), })
        },
        InfixOperator::Slash | InfixOperator::SlashAssign => {
            let value = left / right;
            Ok(Value::Double { value,
                               precision: precision.max(printed_precision(value)), })
        },
        InfixOperator::LessThan => Ok(Value::from(left < right)),
        InfixOperator::LessEqual => Ok(Value::from(left <= right)),
        InfixOperator::GreaterThan => Ok(Value::from(left > right)),
        InfixOperator::GreaterEqual => Ok(Value::from(left >= right)),
        InfixOperator::Equal => Ok(Value::from(left == right)),
        InfixOperator::NotEqual => Ok(Value::from(left != right)),
        InfixOperator::Power | InfixOperator::Modulus => Ok(float_result(operator, left, right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "DOUBLE",
                                                      operator: operator.to_string(),
                                                      right:    "DOUBLE", }),
    }
}

/// Power and modulus through float math; the result's precision is
/// whatever it prints with.
fn float_result(operator: InfixOperator, left: f64, right: f64) -> Value {
    let value = match operator {
        InfixOperator::Power => left.powf(right),
        _ => left % right,
    };
    Value::Double { value,
                    precision: printed_precision(value), }
}

fn boolean_infix(operator: InfixOperator, left: bool, right: bool) -> EvalResult<Value> {
    match operator {
        InfixOperator::Equal => Ok(Value::from(left == right)),
        InfixOperator::NotEqual => Ok(Value::from(left != right)),
        InfixOperator::And => Ok(Value::from(left && right)),
        InfixOperator::Or => Ok(Value::from(left || right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "BOOLEAN",
                                                      operator: operator.to_string(),
                                                      right:    "BOOLEAN", }),
    }
}

fn string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Equal => Ok(Value::from(left == right)),
        InfixOperator::NotEqual => Ok(Value::from(left != right)),
        InfixOperator::Plus | InfixOperator::PlusAssign => {
            Ok(Value::Str(format!("{left}{right}")))
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                      operator: operator.to_string(),
                                                      right:    "STRING", }),
    }
}

/// Equality for operand pairs outside the typed tables.
///
/// Singletons compare by value; containers and functions compare by
/// identity, so two separately built arrays are never equal while an array
/// is always equal to itself.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) | (Value::Nan, Value::Nan) => true,
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Hash(l), Value::Hash(r)) => Rc::ptr_eq(l, r),
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        (Value::Builtin(l), Value::Builtin(r)) => std::ptr::eq(*l, *r),
        _ => false,
    }
}

fn type_mismatch(operator: InfixOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch { left:     left.type_name(),
                                 operator: operator.to_string(),
                                 right:    right.type_name(), }
}

fn unknown_infix(operator: InfixOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                         operator: operator.to_string(),
                                         right:    right.type_name(), }
}
