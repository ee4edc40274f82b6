/// Numeric formatting helpers.
///
/// Contains the fractional-digit counting routines used to track and render
/// the display precision of double values.
pub mod num;
