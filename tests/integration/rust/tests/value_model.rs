//! Value Model Integration Tests
//!
//! Exercises the es_values semantics through the exercise functions that
//! depend on them: shared array handles, frozen objects and console
//! formatting.

use es_values::{Console, EsValue};
use exercises::{edit_in_place, freeze_constants, freeze_profile};

#[test]
fn test_edit_in_place_returns_the_same_handle_mutated() {
    let s = edit_in_place();
    assert_eq!(s.inspect(), "[2, 5, 7]");

    // Still a live shared handle after the exercise returns.
    let alias = s.clone();
    s.set_element(2, EsValue::number(45.0));
    assert_eq!(alias.inspect(), "[2, 5, 45]");
}

#[test]
fn test_freeze_constants_keeps_pi_through_the_caught_error() {
    let console = Console::captured();
    let pi = freeze_constants(&console);
    assert_eq!(pi, EsValue::number(3.14));
    assert_eq!(console.transcript().len(), 1);
    assert!(console.transcript()[0].starts_with("TypeError:"));
}

#[test]
fn test_freeze_profile_object_stays_frozen_after_the_exercise() {
    let console = Console::captured();
    let obj = freeze_profile(&console);
    assert!(obj.is_frozen());
    obj.set("review", EsValue::string("still ignored"));
    assert_eq!(obj.get("review"), Some(EsValue::string("Awesome")));
}

#[test]
fn test_console_formats_exercise_values_deterministically() {
    let console = Console::captured();
    console.log(&[
        EsValue::string("result:"),
        EsValue::from_numbers(&[16.0, 1764.0, 36.0]),
    ]);
    assert_eq!(console.transcript(), vec!["result: [16, 1764, 36]"]);
}
