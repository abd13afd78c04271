use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A flat, string-keyed container used as the serialization boundary format.
///
/// Design:
/// - Values are limited to what survives a primitive/dictionary boundary:
///   single strings and arrays of strings.
/// - The container is backed by a `serde_json` object and serializes
///   transparently, so a bundle embeds verbatim as a nested value inside a
///   larger serialized structure (e.g. under a parent key owned by the
///   containing styled-text span).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: Map<String, Value>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
        }
    }

    /// Store a single string value under `key`, replacing any previous entry.
    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Value::String(value.into()));
    }

    /// Store an array of strings under `key`, replacing any previous entry.
    pub fn put_string_array<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let array = values
            .into_iter()
            .map(|value| Value::String(value.into()))
            .collect();
        self.entries.insert(key.into(), Value::Array(array));
    }

    /// Read the string stored under `key`.
    ///
    /// Errors:
    /// - [`Error::MissingField`] if the key is absent
    /// - [`Error::InvalidArgument`] if the value is not a string
    pub fn string(&self, key: &str) -> Result<&str> {
        match self.entries.get(key) {
            None => Err(Error::missing_field(key)),
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(Error::invalid_argument(format!(
                "key {key:?}: expected a string, found {}",
                value_kind(other)
            ))),
        }
    }

    /// Read the string array stored under `key`.
    ///
    /// Errors:
    /// - [`Error::MissingField`] if the key is absent
    /// - [`Error::InvalidArgument`] if the value is not an array, or any
    ///   element of the array is not a string
    pub fn string_array(&self, key: &str) -> Result<Vec<String>> {
        let array = match self.entries.get(key) {
            None => return Err(Error::missing_field(key)),
            Some(Value::Array(array)) => array,
            Some(other) => {
                return Err(Error::invalid_argument(format!(
                    "key {key:?}: expected an array, found {}",
                    value_kind(other)
                )));
            }
        };

        let mut values = Vec::with_capacity(array.len());
        for element in array {
            match element {
                Value::String(value) => values.push(value.clone()),
                other => {
                    return Err(Error::invalid_argument(format!(
                        "key {key:?}: expected an array of strings, found {} element",
                        value_kind(other)
                    )));
                }
            }
        }
        Ok(values)
    }

    /// The number of entries in the bundle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the stable bundle key for an integer field identifier.
///
/// Field identifiers are rendered in base 36 (digits then lowercase letters),
/// matching the reference convention for compact, version-stable keys:
/// field 0 is `"0"`, field 1 is `"1"`, field 36 is `"10"`.
pub fn field_key(field: u32) -> String {
    let mut digits = Vec::new();
    let mut n = field;
    loop {
        let d = (n % 36) as u8;
        let c = if d < 10 { b'0' + d } else { b'a' + d - 10 };
        digits.push(c as char);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Human-readable name of a JSON value's shape, for error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
