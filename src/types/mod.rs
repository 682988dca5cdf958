//! Shared types used throughout the library.

mod axis;
mod transform;

pub use axis::Axis;
pub use transform::{DisplayTransform, ElementRotation};

/// A 3-component vector in model units.
pub type Vec3 = [f32; 3];

/// Namespace used when a resource location has none.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Parse a resource location into namespace and path.
/// "minecraft:item/sword" -> ("minecraft", "item/sword")
/// "item/sword" -> ("minecraft", "item/sword")
pub fn parse_resource_location(resource_location: &str) -> (&str, &str) {
    if let Some((namespace, path)) = resource_location.split_once(':') {
        (namespace, path)
    } else {
        (DEFAULT_NAMESPACE, resource_location)
    }
}

/// Drop the `namespace:` prefix of a resource location, if any.
pub fn strip_namespace(resource_location: &str) -> &str {
    match resource_location.split_once(':') {
        Some((_, path)) => path,
        None => resource_location,
    }
}
