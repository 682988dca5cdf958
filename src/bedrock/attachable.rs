//! Attachable documents binding a custom item to its geometry.

use super::ModelIds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ATTACHABLE_FORMAT_VERSION: &str = "1.10.0";

/// `default`/`enchanted` slot pair used for materials and textures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPair {
    pub default: String,
    pub enchanted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachableDescription {
    pub identifier: String,
    pub materials: SlotPair,
    pub textures: SlotPair,
    pub geometry: BTreeMap<String, String>,
    pub animations: BTreeMap<String, String>,
    pub render_controllers: Vec<String>,
    pub enable_attachables: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachable {
    pub description: AttachableDescription,
    pub components: BTreeMap<String, BTreeMap<String, String>>,
}

/// An `*.attachable.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachableDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:attachable")]
    pub attachable: Attachable,
}

impl AttachableDocument {
    /// Bind geometry, animation and render controller for one model.
    ///
    /// The enchanted slot reuses the item texture; no separate glint texture
    /// is generated.
    pub fn new(ids: &ModelIds, texture_name: &str) -> Self {
        let texture_path = format!("textures/{}", texture_name);
        let render_controller = ids.render_controller();

        let description = AttachableDescription {
            identifier: ids.attachable(),
            materials: SlotPair {
                default: "entity".to_string(),
                enchanted: "entity_emissive".to_string(),
            },
            textures: SlotPair {
                default: texture_path.clone(),
                enchanted: texture_path,
            },
            geometry: BTreeMap::from([("default".to_string(), ids.geometry())]),
            animations: BTreeMap::from([("wield".to_string(), ids.animation())]),
            render_controllers: vec![render_controller.clone()],
            enable_attachables: true,
        };

        let components = BTreeMap::from([(
            "minecraft:render_controllers".to_string(),
            BTreeMap::from([("default".to_string(), render_controller)]),
        )]);

        Self {
            format_version: ATTACHABLE_FORMAT_VERSION.to_string(),
            attachable: Attachable {
                description,
                components,
            },
        }
    }

    pub fn identifier(&self) -> &str {
        &self.attachable.description.identifier
    }
}
