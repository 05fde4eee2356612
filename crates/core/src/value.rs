//! Default payload type for the scoped store
//!
//! The store itself is generic over its payload and never inspects it.
//! [`Value`] is the tagged union used when callers do not bring their own
//! type. It bridges to `serde_json::Value` for adapters that exchange JSON.
//!
//! ## JSON bridging
//!
//! JSON cannot carry every `Value`, so two wrappers are used:
//! - `{"$bytes": "<base64>"}` for [`Value::Bytes`]
//! - `{"$f64": "NaN" | "+Inf" | "-Inf" | "-0.0"}` for special floats
//!
//! Both directions recognise the wrappers, so a `Value` survives a trip
//! through JSON unchanged. The `Serialize`/`Deserialize` impls go through
//! the same bridge.

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number};
use std::collections::HashMap;

/// Opaque payload stored by the scoped store
///
/// ## Equality Rules
///
/// - Different types are never equal (no type coercion)
/// - `Int(1)` != `Float(1.0)`
/// - `String("abc")` != `Bytes([97, 98, 99])`
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "serde_json::Value", from = "serde_json::Value")]
pub enum Value {
    /// JSON null / absence of value
    Null,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit IEEE-754 floating point
    Float(f64),
    /// UTF-8 encoded string
    String(String),
    /// Arbitrary binary data, distinct from String
    Bytes(Vec<u8>),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// String-keyed map of values
    Object(HashMap<String, Value>),
}

const BYTES_TAG: &str = "$bytes";
const F64_TAG: &str = "$f64";

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as array slice
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Convert into a JSON value, wrapping bytes and special floats
    pub fn into_json(self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(i) => Json::Number(i.into()),
            Value::Float(f) => match special_float_tag(f) {
                Some(tag) => wrapper(F64_TAG, tag.to_string()),
                // special_float_tag catches every non-finite value
                None => Number::from_f64(f).map(Json::Number).unwrap_or(Json::Null),
            },
            Value::String(s) => Json::String(s),
            Value::Bytes(b) => wrapper(
                BYTES_TAG,
                base64::engine::general_purpose::STANDARD.encode(b),
            ),
            Value::Array(items) => Json::Array(items.into_iter().map(Value::into_json).collect()),
            Value::Object(fields) => Json::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, v.into_json()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

fn wrapper(tag: &str, payload: String) -> serde_json::Value {
    let mut map = Map::with_capacity(1);
    map.insert(tag.to_string(), serde_json::Value::String(payload));
    serde_json::Value::Object(map)
}

fn special_float_tag(f: f64) -> Option<&'static str> {
    if f.is_nan() {
        Some("NaN")
    } else if f == f64::INFINITY {
        Some("+Inf")
    } else if f == f64::NEG_INFINITY {
        Some("-Inf")
    } else if f.to_bits() == (-0.0_f64).to_bits() {
        Some("-0.0")
    } else {
        None
    }
}

fn special_float_from_tag(tag: &str) -> Option<f64> {
    match tag {
        "NaN" => Some(f64::NAN),
        "+Inf" => Some(f64::INFINITY),
        "-Inf" => Some(f64::NEG_INFINITY),
        "-0.0" => Some(-0.0),
        _ => None,
    }
}

/// Decode a single-field `$bytes` / `$f64` wrapper
fn unwrap_tagged(map: &Map<String, serde_json::Value>) -> Option<Value> {
    if map.len() != 1 {
        return None;
    }
    let (tag, payload) = map.iter().next()?;
    let payload = payload.as_str()?;
    match tag.as_str() {
        BYTES_TAG => base64::engine::general_purpose::STANDARD
            .decode(payload)
            .ok()
            .map(Value::Bytes),
        F64_TAG => special_float_from_tag(payload).map(Value::Float),
        _ => None,
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => match unwrap_tagged(&map) {
                Some(value) => value,
                None => Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
            },
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.into_json()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(fields: HashMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,

            // Different types: never equal
            _ => false,
        }
    }
}
