//! Mutation versus rebinding: const arrays and frozen objects.

use es_values::{Console, EsValue};

/// Mutate a const-bound array in place.
///
/// `s` is an immutable binding over a shared array handle, so the binding
/// can never point at a different array while the elements stay writable.
/// `[5, 7, 2]` becomes `[2, 5, 7]` through element assignment alone.
pub fn edit_in_place() -> EsValue {
    let s = EsValue::from_numbers(&[5.0, 7.0, 2.0]);
    s.set_element(0, EsValue::number(2.0));
    s.set_element(1, EsValue::number(5.0));
    s.set_element(2, EsValue::number(7.0));
    s
}

/// Freeze `MATH_CONSTANTS` and attempt a strict-mode write.
///
/// The write raises a `TypeError`, which is caught and logged the way the
/// demonstration catches and logs it. Returns the unchanged value of `PI`.
pub fn freeze_constants(console: &Console) -> EsValue {
    let math_constants = EsValue::object_from([("PI", EsValue::number(3.14))]);
    math_constants.freeze();

    if let Err(error) = math_constants.try_set("PI", EsValue::number(99.0)) {
        console.log_text(&error.to_string());
    }
    math_constants.get("PI").unwrap_or(EsValue::Undefined)
}

/// Freeze a profile object and attempt sloppy-mode writes.
///
/// Both the update of an existing property and the addition of a new one
/// are silently ignored; the object logs unchanged.
pub fn freeze_profile(console: &Console) -> EsValue {
    let obj = EsValue::object_from([
        ("name", EsValue::string("FreeCodeCamp")),
        ("review", EsValue::string("Awesome")),
    ]);
    obj.freeze();

    obj.set("review", EsValue::string("bad"));
    obj.set("newProp", EsValue::string("Test"));
    console.log(&[obj.clone()]);
    obj
}
