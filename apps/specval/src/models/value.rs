//! Loosely-typed document tree for structured (YAML/JSON) documents.
//!
//! Both serializations are converted into the same `Value` so the checks
//! never depend on the parser that produced the tree. Lookups return `None`
//! on absence or on a shape mismatch; nothing here fails.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    /// Numbers keep their textual form.
    Number(String),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    /// Look up `key` when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(m) => m.get(key),
            _ => None,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_mapping(&self, key: &str) -> Option<&BTreeMap<String, Value>> {
        match self.get(key)? {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Textual form of a string or number scalar (`3.0` -> "3.0").
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Str(s)) | Value::Scalar(Scalar::Number(s)) => Some(s),
            _ => None,
        }
    }

    /// Emptiness in the loose sense: null, `false`, zero, `""`, `[]` and
    /// `{}` are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Scalar(Scalar::Bool(b)) => *b,
            Value::Scalar(Scalar::Number(n)) => n.parse::<f64>().map(|v| v != 0.0).unwrap_or(true),
            Value::Scalar(Scalar::Str(s)) => !s.is_empty(),
            Value::Sequence(items) => !items.is_empty(),
            Value::Mapping(m) => !m.is_empty(),
        }
    }
}

/// Truthiness of an optional lookup; absence is falsy.
pub fn truthy(v: Option<&Value>) -> bool {
    v.map(Value::is_truthy).unwrap_or(false)
}

impl From<serde_yaml::Value> for Value {
    fn from(v: serde_yaml::Value) -> Self {
        use serde_yaml::Value as Y;
        match v {
            Y::Null => Value::Null,
            Y::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            Y::Number(n) => Value::Scalar(Scalar::Number(n.to_string())),
            Y::String(s) => Value::Scalar(Scalar::Str(s)),
            Y::Sequence(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Y::Mapping(m) => Value::Mapping(
                m.into_iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|k| (k, Value::from(v))))
                    .collect(),
            ),
            Y::Tagged(t) => Value::from(t.value),
        }
    }
}

/// Scalar YAML keys become strings (`200:` -> "200"); complex keys are dropped.
fn yaml_key(k: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value as Y;
    match k {
        Y::String(s) => Some(s),
        Y::Number(n) => Some(n.to_string()),
        Y::Bool(b) => Some(b.to_string()),
        Y::Null => Some("null".to_string()),
        Y::Tagged(t) => yaml_key(t.value),
        Y::Sequence(_) | Y::Mapping(_) => None,
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match v {
            J::Null => Value::Null,
            J::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            J::Number(n) => Value::Scalar(Scalar::Number(n.to_string())),
            J::String(s) => Value::Scalar(Scalar::Str(s)),
            J::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            J::Object(m) => Value::Mapping(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}
