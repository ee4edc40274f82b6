use std::{collections::BTreeMap, fmt, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{
        evaluator::core::EvalResult,
        value::{environment::Env, hash_key::HashKey},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can produce. Containers are
/// shared through `Rc` so that passing arrays and hashes around stays cheap
/// and so that `==` can compare them by identity, the way the language
/// defines it.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float together with its display precision, the number of
    /// fractional digits `Inspect` renders.
    Double {
        /// The numeric value.
        value:     f64,
        /// Fractional digits shown when printing.
        precision: u32,
    },
    /// An owned string.
    Str(String),
    /// A boolean value. The evaluator hands out the [`TRUE`] and [`FALSE`]
    /// singletons rather than building fresh instances.
    Boolean(bool),
    /// The null value; a real value, distinct from "nothing to return".
    Null,
    /// Not-a-number, produced by integer division by zero.
    Nan,
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash map from [`HashKey`] to its key/value pair. Pairs are kept in
    /// key order so rendering is deterministic.
    Hash(Rc<BTreeMap<HashKey, HashPair>>),
    /// A `return` result in flight: transports the wrapped value up through
    /// nested blocks until the enclosing program or call unwraps it once.
    ReturnValue(Box<Self>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A built-in function.
    Builtin(&'static BuiltinDef),
}

/// The boolean `true` singleton.
pub const TRUE: Value = Value::Boolean(true);
/// The boolean `false` singleton.
pub const FALSE: Value = Value::Boolean(false);
/// The null singleton.
pub const NULL: Value = Value::Null;
/// The not-a-number singleton.
pub const NAN: Value = Value::Nan;

/// One entry of a hash value.
///
/// The original key value rides along with the stored value so hashes can
/// render their keys, not just their hashes.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

/// A user-defined function: parameters, body, and the environment captured
/// at the definition site.
pub struct FunctionValue {
    /// Parameter names in order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment the function closes over.
    pub env:        Env,
}

impl fmt::Debug for FunctionValue {
    // The captured environment is skipped: it routinely points back at the
    // function itself, and a derive would chase that cycle forever.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body.to_string())
         .finish_non_exhaustive()
    }
}

/// The signature shared by all built-in functions.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A built-in function table entry.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The implementation.
    pub func: BuiltinFn,
}

impl Value {
    /// Returns the value's type tag as used in error messages.
    ///
    /// The [`type`](crate::interpreter::evaluator::builtin) builtin returns
    /// the same tag lowercased.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Double { .. } => "DOUBLE",
            Self::Str(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Nan => "NAN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Returns the value as `f64` when it is numeric, `None` otherwise.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_numeric_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Double { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl PartialEq for Value {
    // Structural equality for data, pointer identity for functions. The
    // captured environment must never be compared: closure environments can
    // be cyclic.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Double { value: lv, precision: lp },
             Self::Double { value: rv, precision: rp }) => lv == rv && lp == rp,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Null, Self::Null) | (Self::Nan, Self::Nan) => true,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            (Self::ReturnValue(l), Self::ReturnValue(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => std::ptr::eq(*l, *r),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value the way the REPL shows it.
    ///
    /// Doubles print with exactly their display precision, hashes print in
    /// key order so output is deterministic, and functions print their
    /// source-shaped form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Double { value, precision } => {
                write!(f, "{:.*}", *precision as usize, value)
            },
            Self::Str(text) => write!(f, "{text}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Nan => write!(f, "NAN"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
