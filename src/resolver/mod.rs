//! Override resolution.
//!
//! This module finds custom model data overrides in item model files and
//! resolves each one to a model file and a texture name.

pub mod overrides;

pub use overrides::{
    extract_texture_name, resolve_override, scan, OverrideOutcome, OverrideRecord, OverrideScan,
    MISSING_TEXTURE,
};
