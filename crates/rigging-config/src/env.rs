//! Build invocation environment and mode selection.
//!
//! Bundlers hand the configuration function whatever the user passed with
//! `--env`: a mapping, a list of mappings when the flag is repeated, or
//! nothing at all. [`Environment::normalize`] flattens every one of those
//! shapes into a single mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Build mode. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// `Production` iff the environment carries a truthy `production` key.
    pub fn from_env(env: &Environment) -> Self {
        if env.get("production").is_some_and(is_truthy) {
            Mode::Production
        } else {
            Mode::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat key/value view of the invocation environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(IndexMap<String, Value>);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten an arbitrary environment value.
    ///
    /// Sequences fold left to right with later keys winning, mappings are
    /// copied shallowly and every other shape yields an empty environment.
    pub fn normalize(value: &Value) -> Self {
        match value {
            Value::Array(items) => items.iter().fold(Self::new(), |mut acc, item| {
                acc.0.extend(Self::normalize(item).0);
                acc
            }),
            Value::Object(map) => Self(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            _ => Self::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<&Value> for Environment {
    fn from(value: &Value) -> Self {
        Self::normalize(value)
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Truthiness as the bundler's host language defines it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
