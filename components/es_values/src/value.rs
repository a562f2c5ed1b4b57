//! JavaScript-style value representation for the exercises.
//!
//! Primitives are stored inline while arrays and objects are shared
//! handles. That split is what several exercises demonstrate: a `const`
//! binding becomes an immutable Rust binding over an interior-mutable
//! handle, so the binding can never point elsewhere while elements and
//! properties stay writable — until the object is frozen.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{EsError, EsResult};
use crate::number::format_number;

/// Property storage for an object value.
///
/// Properties keep insertion order, which is the enumeration order the
/// exercises rely on when an object is logged.
#[derive(Debug, Clone, Default)]
pub struct ObjectData {
    /// Properties in insertion order
    pub entries: Vec<(String, EsValue)>,
    /// Whether the object has been frozen
    pub frozen: bool,
}

/// Element storage for an array value.
#[derive(Debug, Clone, Default)]
pub struct ArrayData {
    /// Array elements
    pub elements: Vec<EsValue>,
}

/// A JavaScript-style value.
///
/// # Examples
///
/// ```
/// use es_values::EsValue;
///
/// let s = EsValue::from_numbers(&[5.0, 7.0, 2.0]);
/// s.set_element(0, EsValue::number(2.0));
/// assert_eq!(s.element(0), Some(EsValue::number(2.0)));
/// assert_eq!(s.inspect(), "[2, 7, 2]");
/// ```
#[derive(Debug, Clone)]
pub enum EsValue {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Array behind a shared handle
    Array(Rc<RefCell<ArrayData>>),
    /// Object with ordered properties behind a shared handle
    Object(Rc<RefCell<ObjectData>>),
}

impl EsValue {
    /// Create undefined value.
    pub fn undefined() -> Self {
        EsValue::Undefined
    }

    /// Create null value.
    pub fn null() -> Self {
        EsValue::Null
    }

    /// Create boolean value.
    pub fn boolean(v: bool) -> Self {
        EsValue::Boolean(v)
    }

    /// Create number value.
    pub fn number(v: f64) -> Self {
        EsValue::Number(v)
    }

    /// Create string value.
    pub fn string(s: impl Into<String>) -> Self {
        EsValue::String(s.into())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        EsValue::Array(Rc::new(RefCell::new(ArrayData::default())))
    }

    /// Create an array from values.
    pub fn array_from(values: Vec<EsValue>) -> Self {
        EsValue::Array(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// Create an array of numbers.
    pub fn from_numbers(values: &[f64]) -> Self {
        EsValue::array_from(values.iter().map(|&n| EsValue::number(n)).collect())
    }

    /// Create an empty object.
    pub fn object() -> Self {
        EsValue::Object(Rc::new(RefCell::new(ObjectData::default())))
    }

    /// Create an object from key/value pairs, preserving their order.
    pub fn object_from<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, EsValue)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<Vec<_>>();
        EsValue::Object(Rc::new(RefCell::new(ObjectData {
            entries,
            frozen: false,
        })))
    }

    /// Check if value is undefined.
    pub fn is_undefined(&self) -> bool {
        matches!(self, EsValue::Undefined)
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, EsValue::Null)
    }

    /// Check if value is boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, EsValue::Boolean(_))
    }

    /// Check if value is number.
    pub fn is_number(&self) -> bool {
        matches!(self, EsValue::Number(_))
    }

    /// Check if value is string.
    pub fn is_string(&self) -> bool {
        matches!(self, EsValue::String(_))
    }

    /// Check if value is array.
    pub fn is_array(&self) -> bool {
        matches!(self, EsValue::Array(_))
    }

    /// Check if value is object.
    pub fn is_object(&self) -> bool {
        matches!(self, EsValue::Object(_))
    }

    /// Get as boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            EsValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    pub fn as_string(&self) -> Option<String> {
        match self {
            EsValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Get array length; 0 for non-arrays.
    pub fn array_length(&self) -> usize {
        match self {
            EsValue::Array(arr) => arr.borrow().elements.len(),
            _ => 0,
        }
    }

    /// Get an array element by index.
    pub fn element(&self, index: usize) -> Option<EsValue> {
        match self {
            EsValue::Array(arr) => arr.borrow().elements.get(index).cloned(),
            _ => None,
        }
    }

    /// Assign an array element by index.
    ///
    /// Writing past the end extends the array with undefined holes, the
    /// way `s[5] = x` does. Non-arrays ignore the write.
    pub fn set_element(&self, index: usize, value: EsValue) {
        if let EsValue::Array(arr) = self {
            let elements = &mut arr.borrow_mut().elements;
            if index >= elements.len() {
                elements.resize(index + 1, EsValue::Undefined);
            }
            elements[index] = value;
        }
    }

    /// Clone out the array elements; empty for non-arrays.
    pub fn elements(&self) -> Vec<EsValue> {
        match self {
            EsValue::Array(arr) => arr.borrow().elements.clone(),
            _ => Vec::new(),
        }
    }

    /// Get an object property.
    pub fn get(&self, key: &str) -> Option<EsValue> {
        match self {
            EsValue::Object(obj) => obj
                .borrow()
                .entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Assign an object property, sloppy-mode semantics.
    ///
    /// A write to a frozen object is silently ignored, whether it updates
    /// an existing property or would add a new one. Non-objects also
    /// ignore the write.
    pub fn set(&self, key: &str, value: EsValue) {
        if let EsValue::Object(obj) = self {
            let mut data = obj.borrow_mut();
            if data.frozen {
                return;
            }
            if let Some(entry) = data.entries.iter_mut().find(|(k, _)| k == key) {
                entry.1 = value;
            } else {
                data.entries.push((key.to_string(), value));
            }
        }
    }

    /// Assign an object property, strict-mode semantics.
    ///
    /// # Errors
    ///
    /// Writing to a frozen object raises a `TypeError` instead of being
    /// ignored; calling this on a non-object is also a `TypeError`.
    pub fn try_set(&self, key: &str, value: EsValue) -> EsResult<()> {
        match self {
            EsValue::Object(obj) => {
                let mut data = obj.borrow_mut();
                if data.frozen {
                    return Err(if data.entries.iter().any(|(k, _)| k == key) {
                        EsError::type_error(format!(
                            "Cannot assign to read only property '{}' of object",
                            key
                        ))
                    } else {
                        EsError::type_error(format!(
                            "Cannot add property {}, object is not extensible",
                            key
                        ))
                    });
                }
                if let Some(entry) = data.entries.iter_mut().find(|(k, _)| k == key) {
                    entry.1 = value;
                } else {
                    data.entries.push((key.to_string(), value));
                }
                Ok(())
            }
            _ => Err(EsError::type_error("Cannot set property of non-object")),
        }
    }

    /// Check if object has own property.
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            EsValue::Object(obj) => obj.borrow().entries.iter().any(|(k, _)| k == key),
            _ => false,
        }
    }

    /// Property names in insertion order; empty for non-objects.
    pub fn keys(&self) -> Vec<String> {
        match self {
            EsValue::Object(obj) => obj
                .borrow()
                .entries
                .iter()
                .map(|(k, _)| k.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Mark an object immutable. Idempotent; non-objects are unaffected.
    pub fn freeze(&self) {
        if let EsValue::Object(obj) = self {
            obj.borrow_mut().frozen = true;
        }
    }

    /// Whether the value is a frozen object.
    pub fn is_frozen(&self) -> bool {
        match self {
            EsValue::Object(obj) => obj.borrow().frozen,
            _ => false,
        }
    }

    /// Convert to a string following JavaScript's `String()` rules.
    ///
    /// Arrays join their elements with commas; plain objects collapse to
    /// `[object Object]`.
    pub fn to_js_string(&self) -> String {
        match self {
            EsValue::Undefined => "undefined".to_string(),
            EsValue::Null => "null".to_string(),
            EsValue::Boolean(b) => b.to_string(),
            EsValue::Number(n) => format_number(*n),
            EsValue::String(s) => s.clone(),
            EsValue::Array(arr) => {
                let parts: Vec<String> = arr
                    .borrow()
                    .elements
                    .iter()
                    .map(|e| e.to_js_string())
                    .collect();
                parts.join(",")
            }
            EsValue::Object(_) => "[object Object]".to_string(),
        }
    }

    /// Console form of the value.
    ///
    /// Unlike [`to_js_string`](Self::to_js_string) this keeps structure:
    /// arrays print as `[2, 5, 7]`, objects as
    /// `{ name: "FreeCodeCamp", review: "Awesome" }` in insertion order,
    /// and strings are quoted.
    pub fn inspect(&self) -> String {
        match self {
            EsValue::String(s) => format!("\"{}\"", s),
            EsValue::Array(arr) => {
                let parts: Vec<String> =
                    arr.borrow().elements.iter().map(|e| e.inspect()).collect();
                format!("[{}]", parts.join(", "))
            }
            EsValue::Object(obj) => {
                let data = obj.borrow();
                if data.entries.is_empty() {
                    return "{}".to_string();
                }
                let parts: Vec<String> = data
                    .entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.inspect()))
                    .collect();
                format!("{{ {} }}", parts.join(", "))
            }
            other => other.to_js_string(),
        }
    }

    /// Check equality: primitives by value, arrays and objects by handle
    /// identity. `NaN` is not equal to itself.
    pub fn equals(&self, other: &EsValue) -> bool {
        match (self, other) {
            (EsValue::Undefined, EsValue::Undefined) => true,
            (EsValue::Null, EsValue::Null) => true,
            (EsValue::Boolean(a), EsValue::Boolean(b)) => a == b,
            (EsValue::Number(a), EsValue::Number(b)) => a == b,
            (EsValue::String(a), EsValue::String(b)) => a == b,
            (EsValue::Array(a), EsValue::Array(b)) => Rc::ptr_eq(a, b),
            (EsValue::Object(a), EsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for EsValue {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for EsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_js_string())
    }
}
