use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, collection, function, operator},
        value::{
            core::{FunctionValue, NULL, Value},
            environment::Env,
        },
    },
};

/// Result type used by the evaluator.
///
/// Every evaluation function returns either a `T` or a [`RuntimeError`];
/// the `?` operator gives the language its error short-circuiting: the
/// first error unwinds the whole program and no binding written after it
/// ever lands.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in source order. A `return` anywhere in the program
/// unwraps its value and ends evaluation. The program's value is the value
/// of its final statement, or `None` when that statement produces nothing
/// (a `let`, for example).
///
/// # Errors
/// Returns the first runtime error any statement produces.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::core::eval,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::{core::Value, environment::Environment},
/// };
///
/// let mut parser = Parser::new(Lexer::new("let x = 5; x + 3"));
/// let program = parser.parse_program();
/// let env = Environment::new();
///
/// let result = eval(&program, &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(8)));
/// ```
pub fn eval(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::ReturnValue(value)) => return Ok(Some(*value)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval`], a block does **not** unwrap a `return` result: the
/// wrapped value propagates outward untouched so that the enclosing
/// function call (or the program) unwraps it exactly once, however deeply
/// the blocks nest.
pub(in crate::interpreter::evaluator) fn eval_block(block: &BlockStatement,
                                                   env: &Env)
                                                   -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Some(Value::ReturnValue(_))) {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_value(value, env)?;
            env.borrow_mut().set(name, value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_value(value, env)?;
            Ok(Some(Value::ReturnValue(Box::new(value))))
        },
        Statement::Expression { expression } => eval_expression(expression, env),
        // The parser strips comments; a hand-built tree evaluates them to
        // nothing.
        Statement::Comment { .. } => Ok(None),
    }
}

/// Evaluates a single expression.
///
/// Almost every expression produces a value; the in-place assignment forms
/// (`x += 1`) are the exception and yield `None`, which is why the REPL
/// prints nothing for them.
pub(in crate::interpreter::evaluator) fn eval_expression(expression: &Expression,
                                                        env: &Env)
                                                        -> EvalResult<Option<Value>> {
    match expression {
        Expression::Identifier(name) => eval_identifier(name, env).map(Some),
        Expression::IntegerLiteral(value) => Ok(Some(Value::Integer(*value))),
        Expression::DoubleLiteral { value, precision } => {
            Ok(Some(Value::Double { value:     *value,
                                    precision: *precision, }))
        },
        Expression::StringLiteral(text) => Ok(Some(Value::Str(text.clone()))),
        Expression::BooleanLiteral(value) => Ok(Some(Value::from(*value))),
        Expression::NullLiteral => Ok(Some(NULL)),
        Expression::CommentLiteral(_) => Ok(None),
        Expression::Prefix { operator, right } => {
            operator::eval_prefix(*operator, right, env).map(Some)
        },
        Expression::Suffix { operator, left } => {
            operator::eval_suffix(*operator, left, env).map(Some)
        },
        Expression::Infix { operator, left, right } => {
            operator::eval_infix(*operator, left, right, env)
        },
        Expression::If { condition, consequence, alternative } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Ok(Some(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                            body:       body.clone(),
                                                            env:        Rc::clone(env), }))))
        },
        Expression::Call { function, arguments } => function::eval_call(function, arguments, env),
        Expression::ArrayLiteral(elements) => {
            collection::eval_array_literal(elements, env).map(Some)
        },
        Expression::HashLiteral(pairs) => collection::eval_hash_literal(pairs, env).map(Some),
        Expression::Index { left, index } => collection::eval_index(left, index, env).map(Some),
    }
}

/// Evaluates a subexpression that must produce a value.
///
/// Operand positions, list elements, bindings and arguments all require a
/// value; an in-place assignment used there reports [`RuntimeError::MissingValue`].
pub(in crate::interpreter::evaluator) fn eval_value(expression: &Expression,
                                                    env: &Env)
                                                    -> EvalResult<Value> {
    eval_expression(expression, env)?.ok_or(RuntimeError::MissingValue)
}

/// Resolves a name against the environment chain, then the builtin table.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string(), })
}

fn eval_if(condition: &Expression,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &Env)
           -> EvalResult<Option<Value>> {
    let condition = eval_value(condition, env)?;

    if is_truthy(&condition) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Some(NULL))
    }
}

/// The truthiness rule shared by `if` and `!`: only `null` and `false` are
/// falsy.
pub(in crate::interpreter::evaluator) const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}
