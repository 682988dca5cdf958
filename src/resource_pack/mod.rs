//! Java resource pack access.
//!
//! This module handles locating a Java resource pack on disk (directory or
//! extracted ZIP) and parsing the item and model files the converter reads.

pub mod loader;
pub mod item;
pub mod model;

pub use item::{ItemModel, ItemOverride};
pub use loader::PackInfo;
pub use model::{Element, FaceUv, JavaModel};

use crate::types::parse_resource_location;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Java resource pack rooted at a directory on disk.
///
/// When the pack came from a ZIP archive, the pack owns the temporary
/// extraction directory; it is removed when the pack is dropped.
#[derive(Debug)]
pub struct JavaPack {
    /// Path the pack was loaded from (ZIP file or directory).
    source: PathBuf,
    /// Directory containing `assets/` (and usually `pack.mcmeta`).
    root: PathBuf,
    /// Extraction directory for ZIP inputs.
    extracted: Option<TempDir>,
}

impl JavaPack {
    /// Use an existing directory as the pack root.
    pub fn from_directory(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source: root.clone(),
            root,
            extracted: None,
        }
    }

    pub(crate) fn from_extracted(source: PathBuf, root: PathBuf, extracted: TempDir) -> Self {
        Self {
            source,
            root,
            extracted: Some(extracted),
        }
    }

    /// Path the pack was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The resolved pack root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the pack lives in a temporary extraction directory.
    pub fn is_extracted(&self) -> bool {
        self.extracted.is_some()
    }

    /// The `assets` directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    /// All namespace directories under `assets/`, sorted by name.
    pub fn namespaces(&self) -> std::io::Result<Vec<String>> {
        let assets = self.assets_dir();
        if !assets.is_dir() {
            return Ok(Vec::new());
        }

        let mut namespaces = Vec::new();
        for entry in std::fs::read_dir(&assets)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                namespaces.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        namespaces.sort();
        Ok(namespaces)
    }

    /// `assets/<namespace>/models/item`.
    pub fn item_models_dir(&self, namespace: &str) -> PathBuf {
        self.assets_dir().join(namespace).join("models").join("item")
    }

    /// `assets/<namespace>/textures`.
    pub fn textures_dir(&self, namespace: &str) -> PathBuf {
        self.assets_dir().join(namespace).join("textures")
    }

    /// Path a model reference points at, whether or not it exists.
    /// "custom:sword_fire" -> assets/custom/models/sword_fire.json
    pub fn model_path(&self, model_reference: &str) -> PathBuf {
        let (namespace, path) = parse_resource_location(model_reference);
        self.assets_dir()
            .join(namespace)
            .join("models")
            .join(format!("{}.json", path))
    }

    /// Resolve a model reference to an existing file.
    pub fn find_model(&self, model_reference: &str) -> Option<PathBuf> {
        let path = self.model_path(model_reference);
        path.is_file().then_some(path)
    }

    /// `pack.png`, if the pack has one.
    pub fn pack_icon(&self) -> Option<PathBuf> {
        let path = self.root.join("pack.png");
        path.is_file().then_some(path)
    }

    /// Read name, description and format from the pack.
    pub fn pack_info(&self) -> PackInfo {
        loader::read_pack_info(self)
    }
}
