//! Worked-example tests for the destructuring exercises.

use exercises::{half, remove_first_two, swap, today_span, DayTemps, Forecast, Stats};

#[test]
fn swap_matches_worked_example() {
    let (a, b) = swap((8.0, 6.0));
    assert_eq!(a, 6.0);
    assert_eq!(b, 8.0);
}

#[test]
fn swap_twice_is_identity() {
    assert_eq!(swap(swap((8.0, 6.0))), (8.0, 6.0));
}

#[test]
fn remove_first_two_matches_worked_example() {
    let source: Vec<i64> = (1..=10).collect();
    assert_eq!(remove_first_two(&source), (3..=10).collect::<Vec<i64>>());
    assert_eq!(source.len(), 10);
}

#[test]
fn remove_first_two_of_exactly_three() {
    assert_eq!(remove_first_two(&[1, 2, 3]), vec![3]);
}

#[test]
fn half_matches_worked_example() {
    // (56.78 + -0.75) / 2
    assert_eq!(half(&Stats::sample()), 28.015);
}

#[test]
fn half_ignores_the_other_fields() {
    let stats = Stats {
        max: 10.0,
        standard_deviation: 999.0,
        median: 999.0,
        mode: 999.0,
        min: 0.0,
        average: 999.0,
    };
    assert_eq!(half(&stats), 5.0);
}

#[test]
fn today_span_reads_only_today() {
    let forecast = Forecast {
        yesterday: DayTemps { low: 0.0, high: 0.0 },
        today: DayTemps { low: 64.0, high: 77.0 },
        tomorrow: DayTemps { low: 0.0, high: 0.0 },
    };
    assert_eq!(today_span(&forecast), (64.0, 77.0));
}
