use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block, eval_value},
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Evaluates a call expression.
///
/// The callee evaluates first, then the arguments left to right; the first
/// error wins. The call itself may produce nothing when the function body
/// ends in a statement without a value.
pub fn eval_call(function: &Expression,
                 arguments: &[Expression],
                 env: &Env)
                 -> EvalResult<Option<Value>> {
    let callee = eval_value(function, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_value(argument, env)?);
    }

    apply_function(&callee, &args)
}

/// Applies a callable value to already-evaluated arguments.
///
/// User functions run their body in a fresh environment enclosing the one
/// they captured at definition; each parameter binds to its argument by
/// position, and a `return` from the body is unwrapped here, exactly once.
pub(in crate::interpreter::evaluator) fn apply_function(callee: &Value,
                                                        args: &[Value])
                                                        -> EvalResult<Option<Value>> {
    match callee {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                              want: function.parameters.len(), });
            }

            let call_env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(args) {
                call_env.borrow_mut().set(parameter, argument.clone());
            }

            let result = eval_block(&function.body, &call_env)?;
            Ok(unwrap_return_value(result))
        },
        Value::Builtin(builtin) => (builtin.func)(args).map(Some),
        other => Err(RuntimeError::NotAFunction { kind: other.type_name(), }),
    }
}

/// Strips one `ReturnValue` wrapper, if present.
fn unwrap_return_value(result: Option<Value>) -> Option<Value> {
    match result {
        Some(Value::ReturnValue(value)) => Some(*value),
        other => other,
    }
}
