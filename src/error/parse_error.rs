#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The rendered messages are part of the interpreter's contract; callers and
/// tests match on them byte for byte.
pub enum ParseError {
    /// The one-token lookahead did not hold the expected token kind.
    UnexpectedToken {
        /// The kind tag that was expected.
        expected: String,
        /// The kind tag that was found instead.
        found:    String,
    },
    /// No prefix parser exists for the current token kind.
    NoPrefixParseFn {
        /// The kind tag of the offending token.
        kind: String,
    },
    /// An integer literal did not fit a signed 64-bit value.
    InvalidIntegerLiteral {
        /// The offending literal text.
        literal: String,
    },
    /// A double literal could not be parsed as a 64-bit float.
    InvalidDoubleLiteral {
        /// The offending literal text.
        literal: String,
    },
    /// An in-place operator (`+=`, `-=`, `*=`, `/=`) was applied to a
    /// left-hand side that is not an identifier.
    InfixRequiresIdentifier {
        /// The operator text.
        operator: String,
        /// The kind tag of what was found on the left.
        found:    String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::InvalidDoubleLiteral { literal } => {
                write!(f, "could not parse {literal:?} as double")
            },
            Self::InfixRequiresIdentifier { operator, found } => {
                write!(f,
                       "the infix operator {operator} requires IDENTIFIER on the left, {found} \
                        found")
            },
        }
    }
}

impl std::error::Error for ParseError {}
