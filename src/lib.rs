//! # Geyser Pack Converter
//!
//! A Rust library for converting Java Edition resource packs that use custom
//! model data into Bedrock Edition add-on packs.
//!
//! ## Overview
//!
//! Each `custom_model_data` override in an item model is resolved to its
//! Java model. The model's cuboid elements are re-projected into Bedrock
//! geometry, and a render controller, animation and attachable are generated
//! alongside it. All converted items are collected into a
//! `geyser_mappings.json` file for the Geyser proxy.
//!
//! ## Quick Start
//!
//! ```ignore
//! use geyser_pack_converter::{ConverterConfig, PackConverter};
//!
//! let config = ConverterConfig::default().with_output_dir("converted_packs");
//! let output = PackConverter::new("my_pack.zip", config).convert()?;
//!
//! println!("converted {} items", output.report.converted.len());
//! ```
//!
//! ## Working with single models
//!
//! The geometry translation can be used without touching the filesystem:
//!
//! ```ignore
//! use geyser_pack_converter::{JavaModel, ModelAssets, ModelIds};
//!
//! let model = JavaModel::from_json(&json_text)?;
//! let assets = ModelAssets::generate(&model, ModelIds::for_override("sword", 1001), "fire_sword");
//! let geo_json = serde_json::to_string_pretty(&assets.geometry)?;
//! ```

pub mod error;
pub mod types;
pub mod resource_pack;
pub mod resolver;
pub mod bedrock;
pub mod export;
pub mod converter;

// Re-export main types for convenience
pub use error::{ConverterError, Result};
pub use types::{Axis, DisplayTransform, ElementRotation, Vec3};
pub use resource_pack::{Element, FaceUv, ItemModel, JavaModel, JavaPack, PackInfo};
pub use resolver::{OverrideOutcome, OverrideRecord};
pub use bedrock::{
    convert_element, translate_model, BedrockCube, ConvertedItem, GeometryDocument, GeyserMapping,
    ModelAssets, ModelIds,
};
pub use export::BedrockPack;
pub use converter::{
    batch_failed, convert_all, ConversionOutput, ConversionReport, ConverterConfig, PackConverter,
};

/// Load a Java resource pack from a path (ZIP or directory).
pub fn load_java_pack<P: AsRef<std::path::Path>>(path: P) -> Result<JavaPack> {
    resource_pack::loader::load_from_path(path)
}
