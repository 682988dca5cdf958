//! Bedrock document generation.
//!
//! One converted Java model becomes a cluster of Bedrock documents that
//! refer to each other by identifiers derived from a single output name:
//! the geometry, a render controller, an animation and an attachable.

pub mod geometry;
pub mod render_controller;
pub mod animation;
pub mod attachable;
pub mod mapping;

pub use animation::AnimationDocument;
pub use attachable::AttachableDocument;
pub use geometry::{convert_element, translate_model, BedrockCube, GeometryDocument};
pub use mapping::{ConvertedItem, GeyserMapping, MappingEntry};
pub use render_controller::RenderControllerDocument;

use crate::resource_pack::JavaModel;

/// Namespace of generated item identifiers.
pub const CUSTOM_NAMESPACE: &str = "custom";

/// Identifiers shared by every document generated for one converted model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelIds {
    output_name: String,
}

impl ModelIds {
    pub fn new(output_name: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
        }
    }

    /// Output name for one override: `<item>_cmd<custom_model_data>`.
    pub fn for_override(item_name: &str, custom_model_data: i64) -> Self {
        Self::new(format!("{}_cmd{}", item_name, custom_model_data))
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// `geometry.<name>`
    pub fn geometry(&self) -> String {
        format!("geometry.{}", self.output_name)
    }

    /// `controller.render.<name>`
    pub fn render_controller(&self) -> String {
        format!("controller.render.{}", self.output_name)
    }

    /// `animation.<name>`
    pub fn animation(&self) -> String {
        format!("animation.{}", self.output_name)
    }

    /// `custom:<name>`
    pub fn attachable(&self) -> String {
        format!("{}:{}", CUSTOM_NAMESPACE, self.output_name)
    }
}

/// Every Bedrock document produced for one converted model.
#[derive(Debug, Clone)]
pub struct ModelAssets {
    pub ids: ModelIds,
    pub geometry: GeometryDocument,
    pub render_controller: RenderControllerDocument,
    pub animation: AnimationDocument,
    pub attachable: AttachableDocument,
}

impl ModelAssets {
    /// Translate a model and synthesize its sibling documents.
    pub fn generate(model: &JavaModel, ids: ModelIds, texture_name: &str) -> Self {
        let geometry = translate_model(model, &ids);
        let render_controller = RenderControllerDocument::new(&ids, texture_name);
        let animation = if model.has_display() {
            AnimationDocument::from_display(&ids, &model.display)
        } else {
            AnimationDocument::default_hand_pose(&ids)
        };
        let attachable = AttachableDocument::new(&ids, texture_name);

        Self {
            ids,
            geometry,
            render_controller,
            animation,
            attachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        let ids = ModelIds::for_override("sword", 1001);
        assert_eq!(ids.output_name(), "sword_cmd1001");
        assert_eq!(ids.geometry(), "geometry.sword_cmd1001");
        assert_eq!(ids.render_controller(), "controller.render.sword_cmd1001");
        assert_eq!(ids.animation(), "animation.sword_cmd1001");
        assert_eq!(ids.attachable(), "custom:sword_cmd1001");
    }

    #[test]
    fn test_distinct_custom_model_data_gives_distinct_ids() {
        let a = ModelIds::for_override("sword", 1001);
        let b = ModelIds::for_override("sword", 1002);
        assert_ne!(a.output_name(), b.output_name());
        assert_ne!(a.geometry(), b.geometry());
        assert_ne!(a.render_controller(), b.render_controller());
        assert_ne!(a.attachable(), b.attachable());
    }

    #[test]
    fn test_generate_cross_references() {
        let model = JavaModel::from_json(
            r#"{ "elements": [ { "from": [0, 0, 0], "to": [16, 16, 16] } ] }"#,
        )
        .unwrap();
        let assets = ModelAssets::generate(&model, ModelIds::new("axe_cmd7"), "item/axe");

        let geometry_id = assets.geometry.identifier().unwrap().to_string();
        let controller = assets
            .render_controller
            .controller(&assets.ids.render_controller())
            .unwrap();
        assert_eq!(controller.geometry, geometry_id);

        let description = &assets.attachable.attachable.description;
        assert_eq!(description.geometry["default"], geometry_id);
        assert_eq!(description.animations["wield"], assets.ids.animation());
        assert_eq!(description.render_controllers, vec![assets.ids.render_controller()]);
        assert!(assets.animation.animation(&assets.ids.animation()).is_some());
    }
}
