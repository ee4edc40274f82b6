/// Parser core: token plumbing and the Pratt expression loop.
///
/// Holds the `Parser` struct, its one-token lookahead, the precedence
/// ladder, error accumulation, and `parse_program`.
pub mod core;

/// Statement parsing.
///
/// Implements `let`, `return`, expression statements, blocks, and the
/// stripping of comment tokens.
pub mod statement;

/// Prefix parsing.
///
/// Covers literals, identifiers (with suffix synthesis), grouped
/// expressions, arrays, hashes, `if` expressions, and function literals.
pub mod expression;

/// Infix and suffix parsing.
///
/// Maps operator tokens to AST operators, builds infix and suffix nodes,
/// enforces the identifier-only rule for in-place operators, and parses
/// calls and index expressions.
pub mod operator;
