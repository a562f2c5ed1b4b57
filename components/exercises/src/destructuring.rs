//! Destructuring assignment: tuples, rest patterns and nested fields.

/// Swap two bound values through destructuring assignment.
pub fn swap(pair: (f64, f64)) -> (f64, f64) {
    let (a, b) = pair;
    (b, a)
}

/// Bind everything past the first two elements through a rest pattern.
///
/// The source list is borrowed and never modified; the result is a new
/// sequence. Lists shorter than three elements yield an empty result.
pub fn remove_first_two(list: &[i64]) -> Vec<i64> {
    match list {
        [_, _, shorter @ ..] => shorter.to_vec(),
        _ => Vec::new(),
    }
}

/// The statistics record several exercises destructure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Largest observation
    pub max: f64,
    /// Standard deviation
    pub standard_deviation: f64,
    /// Median observation
    pub median: f64,
    /// Most frequent observation
    pub mode: f64,
    /// Smallest observation
    pub min: f64,
    /// Mean of the observations
    pub average: f64,
}

impl Stats {
    /// The demonstration data set.
    pub fn sample() -> Self {
        Stats {
            max: 56.78,
            standard_deviation: 4.34,
            median: 34.54,
            mode: 23.87,
            min: -0.75,
            average: 35.85,
        }
    }
}

/// Destructure only `max` and `min` and average them.
///
/// # Examples
///
/// ```
/// use exercises::{half, Stats};
///
/// assert_eq!(half(&Stats::sample()), 28.015);
/// ```
pub fn half(stats: &Stats) -> f64 {
    let Stats { max, min, .. } = *stats;
    (max + min) / 2.0
}

/// One day's temperature range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTemps {
    /// Low temperature
    pub low: f64,
    /// High temperature
    pub high: f64,
}

/// The local weather forecast with nested min/max fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    /// Yesterday's range
    pub yesterday: DayTemps,
    /// Today's range
    pub today: DayTemps,
    /// Tomorrow's range
    pub tomorrow: DayTemps,
}

impl Forecast {
    /// The demonstration forecast.
    pub fn local() -> Self {
        Forecast {
            yesterday: DayTemps { low: 61.0, high: 75.0 },
            today: DayTemps { low: 64.0, high: 77.0 },
            tomorrow: DayTemps { low: 68.0, high: 80.0 },
        }
    }
}

/// Extract today's low and high through a nested pattern.
pub fn today_span(forecast: &Forecast) -> (f64, f64) {
    let Forecast {
        today: DayTemps { low, high },
        ..
    } = *forecast;
    (low, high)
}
