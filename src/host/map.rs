use std::collections::BTreeMap;
use std::fmt;

use super::node::Node;

/// Type tag of a property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// Byte string.
    Data,
    /// Clip node.
    Node,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Data => "data",
            Self::Node => "clip",
        })
    }
}

/// One property value.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Byte string (paths, names).
    Data(Vec<u8>),
    /// Clip node.
    Node(Node),
}

impl Value {
    /// Type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Data(_) => ValueKind::Data,
            Self::Node(_) => ValueKind::Node,
        }
    }
}

/// Lookup failures on a [`Map`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PropError {
    /// The key is not present.
    #[error("property '{0}' is not set")]
    Unset(String),

    /// The key holds values of another type.
    #[error("property '{key}' holds {found} values, not {expected}")]
    Type {
        /// Key looked up.
        key: String,
        /// Requested type.
        expected: ValueKind,
        /// Stored type.
        found: ValueKind,
    },

    /// The key has fewer values than `index + 1`.
    #[error("property '{key}' has no element {index}")]
    Index {
        /// Key looked up.
        key: String,
        /// Requested element.
        index: usize,
    },
}

/// Ordered map of named, typed, multi-valued properties with an error slot.
///
/// Used for function arguments, function results, and per-frame properties. Every value stored
/// under one key has the same type.
#[derive(Clone, Debug, Default)]
pub struct Map {
    entries: BTreeMap<String, Vec<Value>>,
    error: Option<String>,
}

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values under `key`, or `None` when the key is absent.
    pub fn num_elements(&self, key: &str) -> Option<usize> {
        self.entries.get(key).map(Vec::len)
    }

    /// Type of the values under `key`.
    pub fn kind(&self, key: &str) -> Option<ValueKind> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(Value::kind)
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no keys are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn value(&self, key: &str, index: usize) -> Result<&Value, PropError> {
        let values = self
            .entries
            .get(key)
            .ok_or_else(|| PropError::Unset(key.to_string()))?;
        values.get(index).ok_or_else(|| PropError::Index {
            key: key.to_string(),
            index,
        })
    }

    /// Integer element `index` of `key`.
    pub fn get_int(&self, key: &str, index: usize) -> Result<i64, PropError> {
        match self.value(key, index)? {
            Value::Int(v) => Ok(*v),
            other => Err(type_error(key, ValueKind::Int, other)),
        }
    }

    /// Float element `index` of `key`.
    pub fn get_float(&self, key: &str, index: usize) -> Result<f64, PropError> {
        match self.value(key, index)? {
            Value::Float(v) => Ok(*v),
            other => Err(type_error(key, ValueKind::Float, other)),
        }
    }

    /// Data element `index` of `key`.
    pub fn get_data(&self, key: &str, index: usize) -> Result<&[u8], PropError> {
        match self.value(key, index)? {
            Value::Data(v) => Ok(v),
            other => Err(type_error(key, ValueKind::Data, other)),
        }
    }

    /// Node element `index` of `key`.
    pub fn get_node(&self, key: &str, index: usize) -> Result<&Node, PropError> {
        match self.value(key, index)? {
            Value::Node(v) => Ok(v),
            other => Err(type_error(key, ValueKind::Node, other)),
        }
    }

    /// Replace all values of `key` with `value`.
    pub fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), vec![value]);
    }

    /// Append `value` to `key`, replacing the entry if it held another type.
    pub fn append(&mut self, key: &str, value: Value) {
        let values = self.entries.entry(key.to_string()).or_default();
        if values.first().is_some_and(|v| v.kind() != value.kind()) {
            values.clear();
        }
        values.push(value);
    }

    /// Replace `key` with a single integer.
    pub fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, Value::Int(value));
    }

    /// Replace `key` with a single float.
    pub fn set_float(&mut self, key: &str, value: f64) {
        self.set(key, Value::Float(value));
    }

    /// Replace `key` with a single byte string.
    pub fn set_data(&mut self, key: &str, value: impl AsRef<[u8]>) {
        self.set(key, Value::Data(value.as_ref().to_vec()));
    }

    /// Replace `key` with a single node.
    pub fn set_node(&mut self, key: &str, node: Node) {
        self.set(key, Value::Node(node));
    }

    /// Append an integer to `key`.
    pub fn append_int(&mut self, key: &str, value: i64) {
        self.append(key, Value::Int(value));
    }

    /// Append a byte string to `key`.
    pub fn append_data(&mut self, key: &str, value: impl AsRef<[u8]>) {
        self.append(key, Value::Data(value.as_ref().to_vec()));
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Record an error. A map with an error carries no results.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.entries.clear();
        self.error = Some(msg.into());
    }

    /// Error message, if one was set.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn type_error(key: &str, expected: ValueKind, found: &Value) -> PropError {
    PropError::Type {
        key: key.to_string(),
        expected,
        found: found.kind(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/map.rs"]
mod tests;
