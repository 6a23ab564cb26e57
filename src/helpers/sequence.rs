//! Sequence builders and conversions.

use std::cmp::Ordering;

use crate::collection::{CollectionError, Container};
use crate::value::{Value, format_number};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns `0, 1, ..., stop - 1`.
///
/// Empty when `stop` is not positive.
///
/// ```
/// use gunderscore::helpers::range;
///
/// assert_eq!(range(4.0), vec![0.0, 1.0, 2.0, 3.0]);
/// assert!(range(-1.0).is_empty());
/// ```
pub fn range(stop: f64) -> Vec<f64> {
    if stop.is_finite() {
        range_step(0.0, stop, 1.0).unwrap_or_default()
    } else {
        Vec::new()
    }
}

/// Returns `start, start + step, ...` for every value below `stop`.
///
/// The range is half-open and each value is the previous one plus `step`,
/// so fractional steps accumulate rounding the same way a counting loop
/// does.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if `step` is not positive,
/// if a non-empty range has an infinite bound, or if `step` is too small
/// to advance past `start`.
///
/// # Examples
///
/// ```
/// use gunderscore::helpers::range_step;
///
/// assert_eq!(range_step(1.0, 10.0, 3.0).unwrap(), vec![1.0, 4.0, 7.0]);
/// assert!(range_step(5.0, 1.0, 1.0).unwrap().is_empty());
/// assert!(range_step(0.0, 1.0, 0.0).is_err());
/// ```
pub fn range_step(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, CollectionError> {
    if step.is_nan() || step <= 0.0 {
        return Err(CollectionError::invalid_argument("range", "step must be positive"));
    }
    if start.partial_cmp(&stop) != Some(Ordering::Less) {
        return Ok(Vec::new());
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(CollectionError::invalid_argument("range", "bounds must be finite"));
    }

    let mut result = Vec::new();
    let mut current = start;
    while current < stop {
        result.push(current);
        let next = current + step;
        if next <= current {
            return Err(CollectionError::invalid_argument(
                "range",
                "step is too small to advance",
            ));
        }
        current = next;
    }
    Ok(result)
}

/// Calls `function` with each index in `0..count`.
///
/// ```
/// use gunderscore::helpers::times;
///
/// let mut squares = Vec::new();
/// times(4, |index| squares.push(index * index));
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn times<F>(count: usize, function: F)
where
    F: FnMut(usize),
{
    (0..count).for_each(function);
}

/// Copies the elements of any container into a new vector.
///
/// Strings become vectors of one-character strings; mappings contribute
/// their values in key order.
///
/// # Errors
///
/// Returns [`CollectionError::NotAContainer`] if `collection` is a boolean
/// or a number.
pub fn to_array(collection: &Value) -> Result<Vec<Value>, CollectionError> {
    let container = Container::classify("to_array", collection)?;
    let mut result = Vec::with_capacity(container.len());
    result.extend(container.elements().map(|(_, element)| element.into_owned()));
    Ok(result)
}

/// Formats `number` in base 16, fractional digits included.
///
/// The fraction is written with the fewest digits that still identify the
/// number, rounding the last digit half to even. Non-finite numbers use
/// their usual names.
///
/// ```
/// use gunderscore::helpers::to_hexadecimal;
///
/// assert_eq!(to_hexadecimal(255.0), "ff");
/// assert_eq!(to_hexadecimal(-3.75), "-3.c");
/// assert_eq!(to_hexadecimal(0.1), "0.1999999999999a");
/// assert_eq!(to_hexadecimal(f64::INFINITY), "Infinity");
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_hexadecimal(number: f64) -> String {
    if !number.is_finite() {
        return format_number(number);
    }

    let magnitude = number.abs();
    let mut integer = magnitude.floor();
    let mut fraction = magnitude - integer;

    // Half the gap to the next representable number bounds the digits needed.
    let mut delta = (0.5 * (magnitude.next_up() - magnitude)).max(0.0_f64.next_up());
    let mut fraction_digits: Vec<u8> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= 16.0;
            delta *= 16.0;
            let digit = fraction.trunc() as u8;
            fraction_digits.push(digit);
            fraction -= f64::from(digit);
            let rounds_up = fraction > 0.5 || (fraction == 0.5 && digit % 2 == 1);
            if rounds_up && fraction + delta > 1.0 {
                round_up(&mut fraction_digits, &mut integer);
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    let mut integer_digits = Vec::new();
    loop {
        let remainder = integer % 16.0;
        integer_digits.push(remainder as u8);
        integer = (integer - remainder) / 16.0;
        if integer <= 0.0 {
            break;
        }
    }

    let mut text = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if number < 0.0 {
        text.push('-');
    }
    text.extend(
        integer_digits
            .iter()
            .rev()
            .map(|&digit| char::from(HEX_DIGITS[usize::from(digit)])),
    );
    if !fraction_digits.is_empty() {
        text.push('.');
        text.extend(
            fraction_digits
                .iter()
                .map(|&digit| char::from(HEX_DIGITS[usize::from(digit)])),
        );
    }
    text
}

/// Adds one unit in the last fractional place, carrying into the integer part.
fn round_up(fraction_digits: &mut Vec<u8>, integer: &mut f64) {
    while let Some(last) = fraction_digits.pop() {
        if last < 15 {
            fraction_digits.push(last + 1);
            return;
        }
    }
    *integer += 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, object};
    use rstest::rstest;

    #[rstest]
    fn test_range_fractional_step_accumulates() {
        let values = range_step(0.0, 0.35, 0.1).unwrap();
        assert_eq!(values.len(), 4);
        assert!((values[3] - 0.3).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::NAN)]
    fn test_range_rejects_non_positive_step(#[case] step: f64) {
        assert_eq!(
            range_step(0.0, 3.0, step).unwrap_err(),
            CollectionError::InvalidArgument {
                operation: "range",
                reason: "step must be positive"
            }
        );
    }

    #[rstest]
    fn test_range_rejects_infinite_bound() {
        assert!(range_step(0.0, f64::INFINITY, 1.0).is_err());
        assert!(range(f64::INFINITY).is_empty());
    }

    #[rstest]
    fn test_range_rejects_stalled_step() {
        assert!(range_step(1e17, 1e17 + 64.0, 1.0).is_err());
    }

    #[rstest]
    fn test_range_with_fractional_stop() {
        assert_eq!(range(2.5), vec![0.0, 1.0, 2.0]);
    }

    #[rstest]
    fn test_times_zero_never_calls() {
        let mut calls = 0;
        times(0, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    #[case(Value::from("ab"), vec![Value::from("a"), Value::from("b")])]
    #[case(object! { "y" => 2, "x" => 1 }, vec![Value::from(1), Value::from(2)])]
    #[case(array![Value::Null], vec![Value::Null])]
    #[case(Value::Undefined, vec![])]
    fn test_to_array(#[case] collection: Value, #[case] expected: Vec<Value>) {
        assert_eq!(to_array(&collection).unwrap(), expected);
    }

    #[rstest]
    fn test_to_array_rejects_boolean() {
        assert!(to_array(&Value::Bool(true)).is_err());
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(-0.0, "0")]
    #[case(16.0, "10")]
    #[case(0.5, "0.8")]
    #[case(-255.5, "-ff.8")]
    #[case(4_294_967_296.0, "100000000")]
    #[case(f64::NAN, "NaN")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    fn test_to_hexadecimal(#[case] number: f64, #[case] expected: &str) {
        assert_eq!(to_hexadecimal(number), expected);
    }

    #[rstest]
    fn test_to_hexadecimal_fraction_is_bounded() {
        let text = to_hexadecimal(0.123_456_789);
        assert!(text.starts_with("0.1f9add3"));
        assert!(text.len() < 20);
    }
}
