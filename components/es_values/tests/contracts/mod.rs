//! Contract tests for the es_values component
//!
//! These tests verify the public surface the exercise modules and the
//! harness rely on: value constructors and accessors, freeze semantics,
//! error display, number formatting, and console transcripts.

use es_values::{format_number, is_integer, to_fixed, Console, ErrorKind, EsError, EsValue};

mod value_contract {
    use super::*;

    #[test]
    fn constructors_return_the_matching_variant() {
        assert!(EsValue::undefined().is_undefined());
        assert!(EsValue::null().is_null());
        assert!(EsValue::boolean(true).is_boolean());
        assert!(EsValue::number(1.0).is_number());
        assert!(EsValue::string("x").is_string());
        assert!(EsValue::array().is_array());
        assert!(EsValue::object().is_object());
    }

    #[test]
    fn array_clone_shares_the_handle() {
        let arr = EsValue::from_numbers(&[5.0, 7.0, 2.0]);
        let alias = arr.clone();
        arr.set_element(0, EsValue::number(2.0));
        assert_eq!(alias.element(0), Some(EsValue::number(2.0)));
        assert_eq!(arr, alias);
    }

    #[test]
    fn frozen_object_ignores_sloppy_writes_and_stays_frozen() {
        let obj = EsValue::object_from([("PI", EsValue::number(3.14))]);
        obj.freeze();
        obj.set("PI", EsValue::number(99.0));
        obj.set("newProp", EsValue::string("Test"));
        assert!(obj.is_frozen());
        assert_eq!(obj.get("PI"), Some(EsValue::number(3.14)));
        assert!(!obj.has_own("newProp"));
    }

    #[test]
    fn frozen_object_strict_write_returns_type_error() {
        let obj = EsValue::object_from([("PI", EsValue::number(3.14))]);
        obj.freeze();
        let error = obj.try_set("PI", EsValue::number(99.0)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }

    #[test]
    fn inspect_is_deterministic_and_insertion_ordered() {
        let obj = EsValue::object_from([
            ("name", EsValue::string("FreeCodeCamp")),
            ("review", EsValue::string("Awesome")),
        ]);
        assert_eq!(
            obj.inspect(),
            "{ name: \"FreeCodeCamp\", review: \"Awesome\" }"
        );
        assert_eq!(
            EsValue::from_numbers(&[16.0, 1764.0, 36.0]).inspect(),
            "[16, 1764, 36]"
        );
    }
}

mod error_contract {
    use super::*;

    #[test]
    fn display_matches_thrown_console_form() {
        let error = EsError::type_error("Assignment to constant variable.");
        assert_eq!(
            error.to_string(),
            "TypeError: Assignment to constant variable."
        );
    }

    #[test]
    fn es_error_is_a_std_error() {
        let error = EsError::reference_error("x is not defined");
        let _dyn_error: &dyn std::error::Error = &error;
    }
}

mod number_contract {
    use super::*;

    #[test]
    fn integer_valued_doubles_print_without_decimal_point() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1764.0), "1764");
    }

    #[test]
    fn fractions_print_shortest_round_trip_form() {
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(28.015), "28.015");
    }

    #[test]
    fn is_integer_matches_number_is_integer() {
        assert!(is_integer(42.0));
        assert!(!is_integer(5.6));
    }

    #[test]
    fn to_fixed_bounds_digits_at_100() {
        assert!(to_fixed(1.0, 100).is_ok());
        assert_eq!(
            to_fixed(1.0, 101).unwrap_err().kind,
            ErrorKind::RangeError
        );
    }
}

mod console_contract {
    use super::*;

    #[test]
    fn captured_console_records_without_printing() {
        let console = Console::captured();
        console.log(&[EsValue::string("hello")]);
        assert_eq!(console.transcript(), vec!["hello"]);
    }

    #[test]
    fn log_joins_arguments_with_single_spaces() {
        let console = Console::captured();
        console.log(&[
            EsValue::string("Block scope i is:"),
            EsValue::string("block scope"),
        ]);
        assert_eq!(console.transcript(), vec!["Block scope i is: block scope"]);
    }
}
