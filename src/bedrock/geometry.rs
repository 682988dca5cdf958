//! Bedrock geometry generation.
//!
//! Java elements live in block space with the origin at a block corner.
//! Bedrock attachable space is centered on the block in X and Z and mirrored
//! on X, so each element maps to a cube with:
//!
//! ```text
//! origin = [8 - to.x, from.y, from.z - 8]
//! size   = to - from
//! ```
//!
//! Rotation pivots follow the same mapping, and the mirror flips the sense
//! of X and Y rotations.

use super::ModelIds;
use crate::resource_pack::{Element, JavaModel};
use crate::types::{ElementRotation, Vec3};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Geometry file format version.
pub const GEOMETRY_FORMAT_VERSION: &str = "1.12.0";

/// Name of the single bone every element is placed in.
pub const MAIN_BONE: &str = "main";

/// Visible bounds sized for hand-held items; not derived from the cubes.
pub const VISIBLE_BOUNDS_WIDTH: f32 = 2.0;
pub const VISIBLE_BOUNDS_HEIGHT: f32 = 2.5;
pub const VISIBLE_BOUNDS_OFFSET: Vec3 = [0.0, 0.75, 0.0];

/// Map a Java block-space point into Bedrock space.
pub fn java_to_bedrock_point(point: Vec3) -> Vec3 {
    [-point[0] + 8.0, point[1], point[2] - 8.0]
}

/// Per-face UV box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceUvBox {
    pub uv: [f32; 2],
    pub uv_size: [f32; 2],
}

impl FaceUvBox {
    /// Convert a Java `[u0, v0, u1, v1]` rectangle.
    pub fn from_java(uv: [f32; 4]) -> Self {
        Self {
            uv: [uv[0], uv[1]],
            uv_size: [uv[2] - uv[0], uv[3] - uv[1]],
        }
    }
}

/// A cube in a Bedrock bone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedrockCube {
    pub origin: Vec3,
    pub size: Vec3,
    /// Only faces that had UVs in the source element.
    pub uv: BTreeMap<String, FaceUvBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
}

impl BedrockCube {
    /// Build the cube for a parsed Java element.
    pub fn from_element(element: &Element) -> Self {
        let origin = [-element.to[0] + 8.0, element.from[1], element.from[2] - 8.0];

        let uv = element
            .faces
            .iter()
            .filter_map(|(name, face)| face.uv.map(|uv| (name.clone(), FaceUvBox::from_java(uv))))
            .collect();

        let mut cube = Self {
            origin,
            size: element.size(),
            uv,
            pivot: None,
            rotation: None,
        };

        if let Some(rotation) = element.rotation.as_ref().filter(|r| !r.is_empty()) {
            cube.apply_rotation(rotation);
        }

        cube
    }

    fn apply_rotation(&mut self, rotation: &ElementRotation) {
        self.pivot = Some(java_to_bedrock_point(rotation.origin_or_default()));

        let mut angles = [0.0; 3];
        if let Some(axis) = rotation.axis_or_default() {
            angles[axis.index()] = axis.bedrock_angle_sign() * rotation.angle_or_default();
        }

        // A zero rotation is left out rather than written as [0, 0, 0].
        if angles.iter().any(|a| *a != 0.0) {
            self.rotation = Some(angles);
        }
    }
}

/// Convert one raw Java element; malformed elements yield `None`.
pub fn convert_element(element: &Value) -> Option<BedrockCube> {
    Element::from_value(element).map(|e| BedrockCube::from_element(&e))
}

/// A named group of cubes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    pub pivot: Vec3,
    pub cubes: Vec<BedrockCube>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDescription {
    pub identifier: String,
    pub texture_width: u32,
    pub texture_height: u32,
    pub visible_bounds_width: f32,
    pub visible_bounds_height: f32,
    pub visible_bounds_offset: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub description: GeometryDescription,
    pub bones: Vec<Bone>,
}

impl Geometry {
    /// Total cubes across all bones.
    pub fn cube_count(&self) -> usize {
        self.bones.iter().map(|b| b.cubes.len()).sum()
    }
}

/// A `*.geo.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDocument {
    pub format_version: String,
    #[serde(rename = "minecraft:geometry")]
    pub geometry: Vec<Geometry>,
}

impl GeometryDocument {
    /// The geometry identifier of the (single) geometry in this document.
    pub fn identifier(&self) -> Option<&str> {
        self.geometry.first().map(|g| g.description.identifier.as_str())
    }
}

/// Translate a Java model into a Bedrock geometry document.
///
/// All surviving elements go into one `main` bone. If no element survives
/// the document is still produced, with no bones.
pub fn translate_model(model: &JavaModel, ids: &ModelIds) -> GeometryDocument {
    let total = model.elements.len();
    let cubes: Vec<BedrockCube> = model
        .parsed_elements()
        .flatten()
        .map(|element| BedrockCube::from_element(&element))
        .collect();

    if cubes.len() < total {
        tracing::debug!(
            "{}: dropped {} of {} elements",
            ids.output_name(),
            total - cubes.len(),
            total
        );
    }

    let bones = if cubes.is_empty() {
        Vec::new()
    } else {
        vec![Bone {
            name: MAIN_BONE.to_string(),
            pivot: [0.0, 0.0, 0.0],
            cubes,
        }]
    };

    GeometryDocument {
        format_version: GEOMETRY_FORMAT_VERSION.to_string(),
        geometry: vec![Geometry {
            description: GeometryDescription {
                identifier: ids.geometry(),
                texture_width: model.texture_size[0],
                texture_height: model.texture_size[1],
                visible_bounds_width: VISIBLE_BOUNDS_WIDTH,
                visible_bounds_height: VISIBLE_BOUNDS_HEIGHT,
                visible_bounds_offset: VISIBLE_BOUNDS_OFFSET,
            },
            bones,
        }],
    }
}
