//! Parameter dictionaries attached to every project entity.
//!
//! A [`ParamArray`] is an insertion-ordered map from string keys to typed
//! [`ParamValue`]s. Nested dictionaries are addressed with dotted paths
//! (`"visibility.shadow"`).

use std::fmt;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f32),
    /// Free-form text, entity names and expressions.
    Text(String),
    /// Integer pair (resolutions, tile sizes).
    Int2([i32; 2]),
    /// Float pair (film dimensions).
    Float2([f32; 2]),
    /// Nested dictionary.
    Dict(ParamArray),
}

impl ParamValue {
    /// The value as text, if it is a [`ParamValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a float. Integers are widened.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    /// The value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a nested dictionary.
    pub fn as_dict(&self) -> Option<&ParamArray> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Int2([x, y]) => write!(f, "{x} {y}"),
            Self::Float2([x, y]) => write!(f, "{x} {y}"),
            Self::Dict(d) => write!(f, "{{{} entries}}", d.len()),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<[i32; 2]> for ParamValue {
    fn from(v: [i32; 2]) -> Self {
        Self::Int2(v)
    }
}

impl From<[f32; 2]> for ParamValue {
    fn from(v: [f32; 2]) -> Self {
        Self::Float2(v)
    }
}

impl From<ParamArray> for ParamValue {
    fn from(v: ParamArray) -> Self {
        Self::Dict(v)
    }
}

/// Insertion-ordered parameter dictionary.
///
/// Setting an existing key replaces its value in place, so the original
/// insertion position is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamArray {
    entries: Vec<(String, ParamValue)>,
}

impl ParamArray {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style [`set_path`](Self::set_path).
    #[must_use]
    pub fn insert_path(mut self, path: &str, value: impl Into<ParamValue>) -> Self {
        self.set_path(path, value);
        self
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set a value at a dotted path, creating intermediate dictionaries.
    ///
    /// A non-dictionary value found on the way is replaced by a dictionary.
    pub fn set_path(&mut self, path: &str, value: impl Into<ParamValue>) {
        match path.split_once('.') {
            None => self.set(path, value),
            Some((head, rest)) => {
                let child = self.dict_entry_mut(head);
                child.set_path(rest, value);
            }
        }
    }

    fn dict_entry_mut(&mut self, key: &str) -> &mut ParamArray {
        let index = match self.entries.iter().position(|(k, _)| k == key) {
            Some(i) => {
                if !matches!(self.entries[i].1, ParamValue::Dict(_)) {
                    self.entries[i].1 = ParamValue::Dict(ParamArray::new());
                }
                i
            }
            None => {
                self.entries
                    .push((key.to_string(), ParamValue::Dict(ParamArray::new())));
                self.entries.len() - 1
            }
        };
        match &mut self.entries[index].1 {
            ParamValue::Dict(d) => d,
            _ => unreachable!("entry was just made a dictionary"),
        }
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get the value stored at a dotted path.
    pub fn get_path(&self, path: &str) -> Option<&ParamValue> {
        match path.split_once('.') {
            None => self.get(path),
            Some((head, rest)) => self.get(head)?.as_dict()?.get_path(rest),
        }
    }

    /// Get a text value at a dotted path.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get_path(path)?.as_str()
    }

    /// Get a numeric value at a dotted path.
    pub fn get_f32(&self, path: &str) -> Option<f32> {
        self.get_path(path)?.as_f32()
    }

    /// Whether `key` is present at the top level.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Overwrite entries of `self` with the entries of `other`.
    pub fn merge(&mut self, other: ParamArray) {
        for (key, value) in other.entries {
            self.set(key, value);
        }
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
