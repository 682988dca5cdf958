//! Item model files and their predicate overrides.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A parsed item model from models/item/*.json.
///
/// Only the override list matters for conversion; everything else in the
/// file is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemModel {
    #[serde(default)]
    pub overrides: Vec<ItemOverride>,
}

impl ItemModel {
    /// Parse an item model from JSON text.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Overrides that select a model by custom model data, in file order.
    pub fn custom_model_overrides(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.overrides.iter().filter_map(ItemOverride::custom_model_target)
    }
}

/// One entry in an item model's `overrides` list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemOverride {
    #[serde(default)]
    pub predicate: Map<String, Value>,
    #[serde(default)]
    pub model: Option<String>,
}

impl ItemOverride {
    /// The `custom_model_data` predicate value, if it is a whole number.
    pub fn custom_model_data(&self) -> Option<i64> {
        let value = self.predicate.get("custom_model_data")?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
    }

    /// `(custom_model_data, model_reference)` when both are present.
    pub fn custom_model_target(&self) -> Option<(i64, &str)> {
        let model = self.model.as_deref().filter(|m| !m.is_empty())?;
        Some((self.custom_model_data()?, model))
    }
}
