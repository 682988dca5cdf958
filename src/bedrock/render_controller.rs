//! Render controller documents.

use super::ModelIds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RENDER_CONTROLLER_FORMAT_VERSION: &str = "1.8.0";

/// Material bound to every bone.
pub const DEFAULT_MATERIAL: &str = "material.default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderController {
    pub geometry: String,
    pub materials: Vec<BTreeMap<String, String>>,
    pub textures: Vec<String>,
}

/// A `*.render_controller.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderControllerDocument {
    pub format_version: String,
    pub render_controllers: BTreeMap<String, RenderController>,
}

impl RenderControllerDocument {
    /// One controller binding the model's geometry, a wildcard default
    /// material and the resolved texture.
    pub fn new(ids: &ModelIds, texture_name: &str) -> Self {
        let controller = RenderController {
            geometry: ids.geometry(),
            materials: vec![BTreeMap::from([("*".to_string(), DEFAULT_MATERIAL.to_string())])],
            textures: vec![texture_name.to_string()],
        };

        Self {
            format_version: RENDER_CONTROLLER_FORMAT_VERSION.to_string(),
            render_controllers: BTreeMap::from([(ids.render_controller(), controller)]),
        }
    }

    pub fn controller(&self, identifier: &str) -> Option<&RenderController> {
        self.render_controllers.get(identifier)
    }
}
