//! Transform types for Java element rotations and display contexts.

use super::{Axis, Vec3};
use serde::{Deserialize, Serialize};

/// Element-level rotation from a Java model element.
///
/// Every field is optional so that an empty `"rotation": {}` object can be
/// told apart from a rotation that only omits some keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRotation {
    /// Origin point for rotation (in 0-16 Minecraft coordinates).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Vec3>,
    /// Axis name as written. Anything other than `x`, `y` or `z` still
    /// counts as a present key but rotates around nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    /// Rotation angle in degrees (-45 to 45, in 22.5 increments).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
}

impl ElementRotation {
    /// Default pivot when the origin is omitted: the block center.
    pub const DEFAULT_ORIGIN: Vec3 = [8.0, 8.0, 8.0];

    /// True when the source object carried none of the rotation keys.
    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.axis.is_none() && self.angle.is_none()
    }

    pub fn origin_or_default(&self) -> Vec3 {
        self.origin.unwrap_or(Self::DEFAULT_ORIGIN)
    }

    /// The rotation axis, `y` when omitted. `None` for unrecognised names.
    pub fn axis_or_default(&self) -> Option<Axis> {
        self.axis.as_deref().unwrap_or("y").parse().ok()
    }

    pub fn angle_or_default(&self) -> f32 {
        self.angle.unwrap_or(0.0)
    }
}

/// A display transform for one rendering context (e.g. "firstperson_righthand").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayTransform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

impl DisplayTransform {
    /// Check if no transform key is present.
    pub fn is_empty(&self) -> bool {
        self.translation.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rotation_object() {
        let rotation: ElementRotation = serde_json::from_str("{}").unwrap();
        assert!(rotation.is_empty());
        assert_eq!(rotation.origin_or_default(), [8.0, 8.0, 8.0]);
        assert_eq!(rotation.axis_or_default(), Some(Axis::Y));
        assert_eq!(rotation.angle_or_default(), 0.0);
    }

    #[test]
    fn test_unknown_axis_is_kept() {
        let rotation: ElementRotation =
            serde_json::from_str(r#"{ "axis": "X", "angle": 45 }"#).unwrap();
        assert!(!rotation.is_empty());
        assert_eq!(rotation.axis_or_default(), None);
    }

    #[test]
    fn test_partial_display_transform() {
        let transform: DisplayTransform =
            serde_json::from_str(r#"{ "rotation": [1, 2, 3] }"#).unwrap();
        assert_eq!(transform.rotation, Some([1.0, 2.0, 3.0]));
        assert!(transform.translation.is_none());
        assert!(transform.scale.is_none());
        assert!(!transform.is_empty());
    }
}
