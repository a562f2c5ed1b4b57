//! Number predicates and JavaScript-style number formatting.
//!
//! Exercise transcripts hard-code numeric output, so conversion must be
//! deterministic: integer-valued doubles print without a decimal point and
//! everything else prints in the shortest round-trip form.

use crate::error::{EsError, EsResult};

/// `Number.isInteger` semantics: finite and equal to its truncation.
///
/// Fractions are not integers, so `5.6` and `3.14` fail while `42.0`
/// passes.
///
/// # Examples
///
/// ```
/// use es_values::is_integer;
///
/// assert!(is_integer(42.0));
/// assert!(is_integer(-9.0));
/// assert!(!is_integer(5.6));
/// assert!(!is_integer(f64::NAN));
/// assert!(!is_integer(f64::INFINITY));
/// ```
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.trunc() == value
}

/// Convert a double to a string following JavaScript's `String()` rules.
///
/// - `NaN`, `Infinity` and `-Infinity` are spelled out
/// - integer-valued doubles below 1e15 print without a decimal point
/// - other finite doubles print the shortest round-trip representation
/// - negative zero prints as `0`
///
/// # Examples
///
/// ```
/// use es_values::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(3.14), "3.14");
/// assert_eq!(format_number(-0.75), "-0.75");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        // Covers -0 as well: String(-0) is "0"
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}

/// `Number.prototype.toFixed(digits)`: fixed-point notation.
///
/// # Errors
///
/// Returns a `RangeError` when `digits` exceeds 100, matching the
/// JavaScript bound.
///
/// # Examples
///
/// ```
/// use es_values::to_fixed;
///
/// assert_eq!(to_fixed(24.444444444444443, 2).unwrap(), "24.44");
/// assert_eq!(to_fixed(26.0, 2).unwrap(), "26.00");
/// assert_eq!(to_fixed(3.14159, 0).unwrap(), "3");
/// ```
pub fn to_fixed(value: f64, digits: u32) -> EsResult<String> {
    if digits > 100 {
        return Err(EsError::range_error(
            "toFixed() digits argument must be between 0 and 100",
        ));
    }
    Ok(format!("{:.*}", digits as usize, value))
}
