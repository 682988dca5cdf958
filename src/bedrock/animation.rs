//! Animation documents built from Java display transforms.

use super::ModelIds;
use crate::types::{DisplayTransform, Vec3};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const ANIMATION_FORMAT_VERSION: &str = "1.8.0";

/// Hand poses used when a model has no display transforms.
pub const DEFAULT_HAND_POSE: [(&str, Vec3); 4] = [
    ("thirdperson_righthand", [0.0, -90.0, 25.0]),
    ("thirdperson_lefthand", [0.0, 90.0, -25.0]),
    ("firstperson_righthand", [0.0, -90.0, 25.0]),
    ("firstperson_lefthand", [0.0, 90.0, -25.0]),
];

/// Transform applied to one bone. Values are copied without unit conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoneTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl From<&DisplayTransform> for BoneTransform {
    fn from(transform: &DisplayTransform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
            scale: transform.scale,
        }
    }
}

impl BoneTransform {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Bones in insertion order, written as a JSON object.
    #[serde(serialize_with = "serialize_bones")]
    pub bones: Vec<(String, BoneTransform)>,
}

fn serialize_bones<S>(bones: &[(String, BoneTransform)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(bones.iter().map(|(name, transform)| (name, transform)))
}

impl Animation {
    pub fn bone(&self, name: &str) -> Option<&BoneTransform> {
        self.bones.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    fn set_bone(&mut self, name: String, transform: BoneTransform) {
        match self.bones.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = transform,
            None => self.bones.push((name, transform)),
        }
    }
}

/// An `animation.*.json` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationDocument {
    pub format_version: String,
    pub animations: BTreeMap<String, Animation>,
}

impl AnimationDocument {
    fn with_animation(ids: &ModelIds, animation: Animation) -> Self {
        Self {
            format_version: ANIMATION_FORMAT_VERSION.to_string(),
            animations: BTreeMap::from([(ids.animation(), animation)]),
        }
    }

    /// One bone per display context, named after the lower-cased context.
    /// Contexts without any transform key are skipped.
    pub fn from_display(ids: &ModelIds, display: &[(String, DisplayTransform)]) -> Self {
        let mut animation = Animation {
            looping: true,
            bones: Vec::with_capacity(display.len()),
        };

        for (context, transform) in display {
            let bone = BoneTransform::from(transform);
            if !bone.is_empty() {
                animation.set_bone(context.to_lowercase(), bone);
            }
        }

        Self::with_animation(ids, animation)
    }

    /// Fixed hand poses for models without display transforms.
    pub fn default_hand_pose(ids: &ModelIds) -> Self {
        let bones = DEFAULT_HAND_POSE
            .iter()
            .map(|(name, rotation)| {
                (
                    name.to_string(),
                    BoneTransform {
                        rotation: Some(*rotation),
                        ..Default::default()
                    },
                )
            })
            .collect();

        Self::with_animation(
            ids,
            Animation {
                looping: true,
                bones,
            },
        )
    }

    pub fn animation(&self, identifier: &str) -> Option<&Animation> {
        self.animations.get(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_hand_pose() {
        let ids = ModelIds::new("sword_cmd1001");
        let doc = AnimationDocument::default_hand_pose(&ids);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "format_version": "1.8.0",
                "animations": {
                    "animation.sword_cmd1001": {
                        "loop": true,
                        "bones": {
                            "thirdperson_righthand": { "rotation": [0.0, -90.0, 25.0] },
                            "thirdperson_lefthand": { "rotation": [0.0, 90.0, -25.0] },
                            "firstperson_righthand": { "rotation": [0.0, -90.0, 25.0] },
                            "firstperson_lefthand": { "rotation": [0.0, 90.0, -25.0] }
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_single_display_context() {
        let ids = ModelIds::new("bow_cmd3");
        let display = vec![(
            "firstperson_righthand".to_string(),
            DisplayTransform {
                rotation: Some([1.0, 2.0, 3.0]),
                ..Default::default()
            },
        )];

        let doc = AnimationDocument::from_display(&ids, &display);
        let value = serde_json::to_value(&doc).unwrap();
        let bones = &value["animations"]["animation.bow_cmd3"]["bones"];
        assert_eq!(
            bones,
            &json!({ "firstperson_righthand": { "rotation": [1.0, 2.0, 3.0] } })
        );
        assert_eq!(value["animations"]["animation.bow_cmd3"]["loop"], json!(true));
    }

    #[test]
    fn test_display_keys_are_mapped() {
        let ids = ModelIds::new("axe_cmd1");
        let display = vec![
            (
                "ThirdPerson_RightHand".to_string(),
                DisplayTransform {
                    translation: Some([0.0, 4.0, 0.5]),
                    rotation: Some([0.0, 90.0, 55.0]),
                    scale: Some([0.85, 0.85, 0.85]),
                },
            ),
            ("gui".to_string(), DisplayTransform::default()),
        ];

        let doc = AnimationDocument::from_display(&ids, &display);
        let animation = doc.animation("animation.axe_cmd1").unwrap();
        assert_eq!(animation.bones.len(), 1);

        let bone = animation.bone("thirdperson_righthand").unwrap();
        assert_eq!(bone.position, Some([0.0, 4.0, 0.5]));
        assert_eq!(bone.rotation, Some([0.0, 90.0, 55.0]));
        assert_eq!(bone.scale, Some([0.85, 0.85, 0.85]));
        assert!(animation.bone("gui").is_none());
    }

    #[test]
    fn test_bone_order_follows_display_order() {
        let ids = ModelIds::new("x_cmd1");
        let scale = |s: f32| DisplayTransform {
            scale: Some([s, s, s]),
            ..Default::default()
        };
        let display = vec![
            ("head".to_string(), scale(1.0)),
            ("gui".to_string(), scale(0.5)),
            ("ground".to_string(), scale(0.25)),
        ];

        let doc = AnimationDocument::from_display(&ids, &display);
        let json = serde_json::to_string(&doc).unwrap();
        let head = json.find("\"head\"").unwrap();
        let gui = json.find("\"gui\"").unwrap();
        let ground = json.find("\"ground\"").unwrap();
        assert!(head < gui && gui < ground);
    }
}
