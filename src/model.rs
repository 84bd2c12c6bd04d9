//! Named-parameter patch model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Text(String),
}

/// Flat mapping from parameter name to value
///
/// Serializes as a plain JSON object, e.g. `{"bank": 0, "name": "Init"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model {
    values: BTreeMap<String, Value>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer value of `key`, or 0 when missing or textual
    pub fn get(&self, key: &str) -> i32 {
        self.get_or(key, 0)
    }

    /// Integer value of `key`, or `default` when missing or textual
    pub fn get_or(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(Value::Int(v)) => *v,
            _ => default,
        }
    }

    /// Text value of `key`, or `default` when missing or numeric
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.values.get(key) {
            Some(Value::Text(s)) => s,
            _ => default,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        self.values.insert(key.into(), Value::Int(value));
    }

    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), Value::Text(value.into()));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameter names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clamp an integer parameter into `min..=max`, if present
    pub fn clamp(&mut self, key: &str, min: i32, max: i32) {
        if let Some(Value::Int(v)) = self.values.get_mut(key) {
            *v = (*v).clamp(min, max);
        }
    }
}
