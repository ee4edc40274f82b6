/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an AST.
/// Parse errors accumulate inside the parser; parsing itself never aborts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. A runtime
/// error short-circuits the rest of the program and never mutates the
/// environment.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A failure while running a whole program: either the parser rejected the
/// source, or evaluation stopped on a runtime error.
#[derive(Debug)]
pub enum ProgramError {
    /// Every error the parser accumulated, in discovery order.
    Parse(Vec<ParseError>),
    /// The runtime error that stopped evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                let rendered = errors.iter()
                                     .map(ToString::to_string)
                                     .collect::<Vec<_>>()
                                     .join("\n");
                write!(f, "{rendered}")
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for ProgramError {}
