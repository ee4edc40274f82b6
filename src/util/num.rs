/// Counts the fractional digits of a numeric literal.
///
/// The count is the number of characters after the first `.` in the text.
/// Text without a `.` has zero fractional digits.
///
/// This drives the display precision of doubles: a literal like `13434.56`
/// produces a value that prints with two fractional digits.
///
/// # Parameters
/// - `literal`: The numeric text to inspect.
///
/// # Returns
/// The number of fractional digits.
///
/// # Example
/// ```
/// use monkey::util::num::fractional_digits;
///
/// assert_eq!(fractional_digits("13434.56"), 2);
/// assert_eq!(fractional_digits("5.0"), 1);
/// assert_eq!(fractional_digits("42"), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fractional_digits(literal: &str) -> u32 {
    literal.find('.')
           .map_or(0, |position| (literal.len() - position - 1) as u32)
}

/// Counts the fractional digits a value shows when printed.
///
/// Multiplication, division, power and modulus results widen their display
/// precision to whatever the computed value actually needs, so that
/// `1.0 / 4.0` prints as `0.25` rather than `0.2`.
///
/// # Parameters
/// - `value`: The computed value.
///
/// # Returns
/// The number of fractional digits in the shortest decimal rendering.
///
/// # Example
/// ```
/// use monkey::util::num::printed_precision;
///
/// assert_eq!(printed_precision(0.25), 2);
/// assert_eq!(printed_precision(6.0), 0);
/// assert_eq!(printed_precision(49.5), 1);
/// ```
#[must_use]
pub fn printed_precision(value: f64) -> u32 {
    fractional_digits(&value.to_string())
}
