//! Java model parsing.
//!
//! Java models describe items as a list of cuboid elements in block space
//! (0-16 per axis), plus texture variables and per-context display transforms.

use crate::types::{DisplayTransform, ElementRotation, Vec3};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A parsed Java model from models/**/*.json.
///
/// Fields with an unexpected shape fall back to their defaults instead of
/// failing the model.
#[derive(Debug, Clone, Deserialize)]
pub struct JavaModel {
    /// Texture dimensions in pixels, `[width, height]`.
    #[serde(default = "default_texture_size", deserialize_with = "lenient_texture_size")]
    pub texture_size: [u32; 2],

    /// Texture variable definitions, in the order they were declared.
    #[serde(default, deserialize_with = "object_or_empty")]
    pub textures: Map<String, Value>,

    /// Model elements, kept raw so a malformed element only drops itself.
    #[serde(default, deserialize_with = "array_or_empty")]
    pub elements: Vec<Value>,

    /// Display transforms keyed by context, in declaration order.
    #[serde(default, deserialize_with = "ordered_display")]
    pub display: Vec<(String, DisplayTransform)>,
}

fn default_texture_size() -> [u32; 2] {
    [16, 16]
}

impl Default for JavaModel {
    fn default() -> Self {
        Self {
            texture_size: default_texture_size(),
            textures: Map::new(),
            elements: Vec::new(),
            display: Vec::new(),
        }
    }
}

/// Whole, non-negative numbers are kept per axis; anything else is 16.
fn lenient_texture_size<'de, D>(deserializer: D) -> Result<[u32; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let mut size = default_texture_size();
    if let Some(values) = raw.as_array() {
        for (slot, value) in size.iter_mut().zip(values) {
            match value.as_f64() {
                Some(n) if n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n) => {
                    *slot = n as u32
                }
                _ => tracing::debug!("Ignoring texture size component: {}", value),
            }
        }
    }
    Ok(size)
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn array_or_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(values),
        _ => Ok(Vec::new()),
    }
}

fn ordered_display<'de, D>(deserializer: D) -> Result<Vec<(String, DisplayTransform)>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(context, value)| {
            serde_json::from_value(value)
                .map(|transform| (context, transform))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

impl JavaModel {
    /// Parse a model from JSON text.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    /// Check if this model carries any display transforms.
    pub fn has_display(&self) -> bool {
        !self.display.is_empty()
    }

    /// Parse every element, yielding `None` for the ones that are malformed.
    pub fn parsed_elements(&self) -> impl Iterator<Item = Option<Element>> + '_ {
        self.elements.iter().map(Element::from_value)
    }
}

/// A cuboid element within a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// First corner (0-16 range), the block origin when omitted.
    #[serde(default)]
    pub from: Vec3,
    /// Opposite corner (0-16 range), a unit cube when omitted. Not checked
    /// against `from`.
    #[serde(default = "default_to")]
    pub to: Vec3,
    /// Face definitions keyed by face name.
    #[serde(default)]
    pub faces: BTreeMap<String, FaceUv>,
    /// Optional rotation.
    #[serde(default)]
    pub rotation: Option<ElementRotation>,
}

fn default_to() -> Vec3 {
    [1.0, 1.0, 1.0]
}

impl Element {
    /// Parse an element from its raw JSON value.
    pub fn from_value(value: &Value) -> Option<Self> {
        match Self::deserialize(value) {
            Ok(element) => Some(element),
            Err(e) => {
                tracing::debug!("Dropping malformed element: {}", e);
                None
            }
        }
    }

    /// Get the size of this element. Negative sizes pass through.
    pub fn size(&self) -> Vec3 {
        [
            self.to[0] - self.from[0],
            self.to[1] - self.from[1],
            self.to[2] - self.from[2],
        ]
    }
}

/// A face of a model element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceUv {
    /// UV coordinates [u0, v0, u1, v1] in the model's texture units.
    #[serde(default)]
    pub uv: Option<[f32; 4]>,
    /// Texture reference (e.g., "#0").
    #[serde(default)]
    pub texture: Option<String>,
}
