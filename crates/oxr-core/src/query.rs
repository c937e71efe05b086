//! Query parameter model and wire normalization.
//!
//! Values stay typed until [`QueryParams::encode`], which is the single place
//! that decides their string form: booleans become `true`/`false`, currency
//! lists are joined with commas into one value (an empty list still yields
//! the key with an empty value).

use crate::Currency;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Currencies(Vec<Currency>),
}

impl QueryValue {
    pub fn encode(&self) -> String {
        match self {
            Self::Str(value) => value.clone(),
            Self::Number(value) => value.to_string(),
            Self::Bool(true) => String::from("true"),
            Self::Bool(false) => String::from("false"),
            Self::Currencies(codes) => codes
                .iter()
                .map(Currency::as_str)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&Currency> for QueryValue {
    fn from(value: &Currency) -> Self {
        Self::Str(value.as_str().to_owned())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<Currency>> for QueryValue {
    fn from(value: Vec<Currency>) -> Self {
        Self::Currencies(value)
    }
}

/// Insertion-ordered parameter map. Setting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name` only when `value` is present.
    pub fn with_opt<V>(mut self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<QueryValue>,
    {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    /// Put `name` first, dropping any earlier value under the same key.
    pub fn prepend(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let name = name.into();
        self.pairs.retain(|(key, _)| *key != name);
        self.pairs.insert(0, (name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.clone(), value.encode()))
            .collect()
    }
}
