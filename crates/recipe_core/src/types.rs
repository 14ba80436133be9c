use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lightweight catalog entry standing in for a full recipe until selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStub {
    pub title: String,
    /// Fetch path relative to the server root, e.g. `/recipes/apple-pie.json`.
    pub url: String,
}

impl RecipeStub {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientGroup {
    #[serde(default)]
    pub purpose: Option<String>,
    pub ingredients: Vec<String>,
}

/// Full recipe document served at `/recipes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub canonical_url: String,
    pub author: String,
    pub ingredient_groups: Vec<IngredientGroup>,
    pub instructions_list: Vec<String>,
    // Metadata below is display-only. A value of an unexpected JSON type reads
    // as absent instead of failing the whole document.
    #[serde(default, deserialize_with = "lenient::text")]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub yields: Option<String>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub total_time: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::nutrients")]
    pub nutrients: Option<BTreeMap<String, String>>,
}

mod lenient {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(scalar_text(Value::deserialize(deserializer)?))
    }

    /// Whole minutes; fractional values are rounded.
    pub fn minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.is_finite() && *value >= 0.0)
                    .map(|value| value.round() as u64)
            }),
            Value::String(text) => text.trim().parse::<u64>().ok(),
            _ => None,
        };
        Ok(minutes.and_then(|value| u32::try_from(value).ok()))
    }

    /// Keeps entries whose value is a string or a number; drops the rest.
    pub fn nutrients<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Value::Object(entries) = Value::deserialize(deserializer)? else {
            return Ok(None);
        };
        Ok(Some(
            entries
                .into_iter()
                .filter_map(|(name, value)| scalar_text(value).map(|value| (name, value)))
                .collect(),
        ))
    }
}

impl Recipe {
    /// All ingredient lines across groups, in document order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.ingredient_groups
            .iter()
            .flat_map(|group| group.ingredients.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Endpoint unreachable or answered with a non-success status.
    Network,
    /// Body was not in the expected shape.
    Parse,
}

/// Failure reported back to the state machine for a catalog or recipe load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
}

impl LoadError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: LoadErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: LoadErrorKind::Parse,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LoadErrorKind::Network => write!(f, "network error: {}", self.message),
            LoadErrorKind::Parse => write!(f, "parse error: {}", self.message),
        }
    }
}
