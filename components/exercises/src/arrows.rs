//! Arrow functions: closures passed to higher-order functions.

use chrono::{LocalResult, TimeZone, Utc};
use es_values::{is_integer, EsError, EsResult};

/// Square the positive integers in a list of reals.
///
/// Fractions are not integers, so `5.6`, `-9.8`, `3.14` and `8.34` are
/// filtered out along with negatives. The closest thing to a computation
/// in the whole collection, at O(n) over at most 7 elements.
///
/// # Examples
///
/// ```
/// use exercises::square_list;
///
/// let real_number_array = [4.0, 5.6, -9.8, 3.14, 42.0, 6.0, 8.34];
/// assert_eq!(square_list(&real_number_array), vec![16.0, 1764.0, 36.0]);
/// ```
pub fn square_list(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .filter(|&&n| is_integer(n) && n > 0.0)
        .map(|&n| n * n)
        .collect()
}

/// Concatenate two lists into a new one, leaving both inputs untouched.
pub fn my_concat(first: &[f64], second: &[f64]) -> Vec<f64> {
    first.iter().chain(second.iter()).copied().collect()
}

/// The `new Date()` demonstration: milliseconds since the epoch, now.
pub fn magic() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// Render a timestamp the way `Date.prototype.toDateString` does.
///
/// # Errors
///
/// A non-finite timestamp or one outside the representable range is a
/// `RangeError`, matching an invalid `Date`.
///
/// # Examples
///
/// ```
/// use exercises::to_date_string;
///
/// assert_eq!(to_date_string(0.0).unwrap(), "Thu Jan 01 1970");
/// ```
pub fn to_date_string(ms: f64) -> EsResult<String> {
    if !ms.is_finite() {
        return Err(EsError::range_error("Invalid time value"));
    }
    match Utc.timestamp_millis_opt(ms as i64) {
        LocalResult::Single(datetime) => {
            Ok(datetime.format("%a %b %d %Y").to_string())
        }
        _ => Err(EsError::range_error("Invalid time value")),
    }
}
