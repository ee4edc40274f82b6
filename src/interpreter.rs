/// The evaluator module executes AST nodes and computes values.
///
/// The evaluator walks the AST, threads the environment chain through every
/// node, applies operators, calls functions and builtins, and produces
/// runtime values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions against an environment.
/// - Transports `return` results up through nested blocks and unwraps them
///   exactly once.
/// - Short-circuits on runtime errors without mutating the environment.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces the token stream the parser
/// consumes: identifiers, keywords, numbers, strings, comments, operators
/// and punctuation. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Normalizes line endings, skips whitespace, and classifies characters.
/// - Resolves string escapes and captures comments verbatim.
/// - Emits `ILLEGAL` tokens instead of failing on unknown input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: each token kind may carry a prefix parser
/// and an infix parser, and a precedence ladder decides how far each infix
/// loop extends. Errors accumulate; parsing never aborts.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Applies operator precedence and left-associativity.
/// - Records every syntax error with its stable message format.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum and its supporting types: the environment
/// chain that gives closures their lexical scope, and the hash keys that
/// let values serve as hash-map keys.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Renders values in their canonical `Inspect` form.
/// - Provides scoped, shared variable storage.
pub mod value;
