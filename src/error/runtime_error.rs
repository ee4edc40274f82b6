#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Each variant renders one of the stable message formats of the language;
/// tests match on the rendered strings byte for byte.
pub enum RuntimeError {
    /// A name resolved to neither a binding nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A prefix operator was applied to an unsupported operand.
    UnknownPrefixOperator {
        /// The operator text (`!`, `-`, `++`, `--`).
        operator: String,
        /// The operand's type tag.
        operand:  &'static str,
    },
    /// A suffix operator was applied to an unsupported operand.
    UnknownSuffixOperator {
        /// The operand's type tag.
        operand:  &'static str,
        /// The operator text (`++`, `--`).
        operator: String,
    },
    /// An infix operator is not defined for two same-typed operands.
    UnknownInfixOperator {
        /// Left operand type tag.
        left:     &'static str,
        /// The operator text.
        operator: String,
        /// Right operand type tag.
        right:    &'static str,
    },
    /// An infix operator was applied to incompatible operand types.
    TypeMismatch {
        /// Left operand type tag.
        left:     &'static str,
        /// The operator text.
        operator: String,
        /// Right operand type tag.
        right:    &'static str,
    },
    /// An array was indexed outside `[0, len - 1]`.
    IndexOutOfBounds {
        /// The largest valid index (`-1` for an empty array).
        max:   i64,
        /// The index that was requested.
        index: i64,
    },
    /// A value that does not support hashing was used as a hash key.
    UnusableHashKey {
        /// The offending value's type tag.
        kind: &'static str,
    },
    /// The index operator was applied to something that is neither an array
    /// nor a hash.
    IndexNotSupported {
        /// The indexed value's type tag.
        kind: &'static str,
    },
    /// A call expression's callee is not callable.
    NotAFunction {
        /// The callee's type tag.
        kind: &'static str,
    },
    /// A function or builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the callee accepts.
        want: usize,
    },
    /// A builtin received an argument of a type it cannot work with, where
    /// two types would have been acceptable.
    ArgumentNotSupported {
        /// The builtin's name.
        builtin: &'static str,
        /// The supplied argument's type tag.
        got:     &'static str,
        /// The two acceptable type tags.
        want:    (&'static str, &'static str),
    },
    /// A builtin that only works on arrays received something else.
    ArgumentMustBeArray {
        /// The builtin's name.
        builtin: &'static str,
        /// The supplied argument's type tag.
        got:     &'static str,
    },
    /// A subexpression that had to produce a value produced nothing (an
    /// in-place assignment used where a value was required).
    MissingValue,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownSuffixOperator { operand, operator } => {
                write!(f, "unknown operator: {operand}{operator}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::IndexOutOfBounds { max, index } => {
                write!(f, "array index out of bounds[0, {max}]: {index}")
            },
            Self::UnusableHashKey { kind } => {
                write!(f, "unusable as hash key: {kind}")
            },
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::NotAFunction { kind } => {
                write!(f, "not a function: {kind}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::ArgumentNotSupported { builtin, got, want } => {
                write!(f,
                       "argument to `{builtin}` not supported, got {got}, want {} or {}",
                       want.0, want.1)
            },
            Self::ArgumentMustBeArray { builtin, got } => {
                write!(f, "argument to `{builtin}` must be ARRAY, got {got}")
            },
            Self::MissingValue => {
                write!(f, "expression produced no value")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
