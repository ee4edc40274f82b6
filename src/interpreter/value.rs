/// Core runtime value definitions.
///
/// Declares the `Value` enum with all variants the evaluator can produce,
/// their type tags, and the canonical `Inspect` rendering.
pub mod core;

/// Lexically scoped variable storage.
///
/// Provides the environment chain: lookups walk outward through enclosing
/// scopes, writes land in the innermost scope.
pub mod environment;

/// Hash keys for hash-map values.
///
/// Maps hashable values onto a `(type tag, u64)` pair so that equal values
/// share a slot and distinct-typed values never collide by accident.
pub mod hash_key;
