//! JavaScript-compatible coercions of [`Value`] to strings and numbers.
//!
//! `Display` renders a value the way `String(value)` does, which is how
//! [`invert`](crate::collection::invert) turns values into keys and how
//! memoized calls build their cache keys. [`Value::to_number`] follows
//! `Number(value)`.

use std::fmt;

use super::Value;

/// Formats a number the way JavaScript's `String(number)` does for integral
/// and ordinary fractional values.
///
/// # Examples
///
/// ```rust
/// use gunderscore::value::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        let text = if number > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if number == 0.0 {
        "0".to_string()
    } else {
        format!("{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Number(number) => formatter.write_str(&format_number(*number)),
            Self::String(text) => formatter.write_str(text),
            Self::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    // Absent elements render as empty strings inside arrays.
                    if !element.is_absent() {
                        write!(formatter, "{element}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
        }
    }
}

impl Value {
    /// Converts this value to a number the way `Number(value)` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gunderscore::array;
    /// use gunderscore::value::Value;
    ///
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert_eq!(Value::from(" 42 ").to_number(), 42.0);
    /// assert_eq!(Value::from("0x1f").to_number(), 31.0);
    /// assert_eq!(array![7].to_number(), 7.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// assert!(Value::from("4 apples").to_number().is_nan());
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Object(_) => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Number(number) => *number,
            Self::String(text) => parse_number(text),
            Self::Array(_) => parse_number(&self.to_string()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix_digits = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_digits {
        return u64::from_str_radix(digits, radix).map_or(f64::NAN, |number| number as f64);
    }
    // Rust also accepts "inf" and "nan", which JavaScript does not.
    if trimmed
        .chars()
        .all(|character| character.is_ascii_digit() || "+-.eE".contains(character))
    {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}
