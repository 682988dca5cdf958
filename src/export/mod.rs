//! Bedrock pack output.
//!
//! This module lays out the Bedrock pack directory and writes the generated
//! documents, textures, manifest and `.mcpack` archive into it.

pub mod manifest;
pub mod mcpack;

pub use manifest::Manifest;
pub use mcpack::write_mcpack;

use crate::bedrock::{GeyserMapping, ModelAssets};
use crate::error::{ConverterError, Result};
use crate::resource_pack::JavaPack;
use crate::types::DEFAULT_NAMESPACE;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directories every generated pack contains.
pub const PACK_DIRECTORIES: [&str; 8] = [
    "textures",
    "textures/item",
    "models",
    "models/entity",
    "animations",
    "attachables",
    "render_controllers",
    "texts",
];

pub const MAPPINGS_FILE: &str = "geyser_mappings.json";

/// File counts for the conversion summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackContents {
    pub textures: usize,
    pub geometries: usize,
    pub animations: usize,
    pub attachables: usize,
}

/// A Bedrock pack directory being written.
#[derive(Debug)]
pub struct BedrockPack {
    root: PathBuf,
    pretty: bool,
}

impl BedrockPack {
    /// Create `<output_dir>/<name>_bedrock`, replacing any previous output.
    pub fn create(output_dir: &Path, name: &str, pretty: bool) -> Result<Self> {
        let root = output_dir.join(format!("{}_bedrock", name));
        if root.exists() {
            std::fs::remove_dir_all(&root)?;
        }

        for directory in PACK_DIRECTORIES {
            std::fs::create_dir_all(root.join(directory))?;
        }

        tracing::info!("Created Bedrock pack structure: {}", root.display());
        Ok(Self { root, pretty })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serialize a document to a path relative to the pack root.
    pub fn write_json<T: Serialize>(&self, relative: &str, document: &T) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write the geometry, render controller, animation and attachable of
    /// one converted model.
    pub fn write_model_assets(&self, assets: &ModelAssets) -> Result<()> {
        let name = assets.ids.output_name();
        self.write_json(&format!("models/entity/{}.geo.json", name), &assets.geometry)?;
        self.write_json(
            &format!("render_controllers/{}.render_controller.json", name),
            &assets.render_controller,
        )?;
        self.write_json(&format!("animations/animation.{}.json", name), &assets.animation)?;
        self.write_json(
            &format!("attachables/{}.attachable.json", name),
            &assets.attachable,
        )?;
        Ok(())
    }

    pub fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf> {
        self.write_json("manifest.json", manifest)
    }

    pub fn write_mapping(&self, mapping: &GeyserMapping) -> Result<PathBuf> {
        self.write_json(MAPPINGS_FILE, mapping)
    }

    /// Copy `pack.png` to `pack_icon.png`. Returns whether there was one.
    pub fn copy_pack_icon(&self, pack: &JavaPack) -> Result<bool> {
        match pack.pack_icon() {
            Some(icon) => {
                std::fs::copy(icon, self.root.join("pack_icon.png"))?;
                tracing::info!("Copied pack icon");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Copy every PNG under `assets/<ns>/textures`.
    ///
    /// `minecraft` textures land directly in `textures/`, other namespaces
    /// in `textures/<ns>/`.
    pub fn copy_textures(&self, pack: &JavaPack) -> Result<usize> {
        let mut copied = 0;

        for namespace in pack.namespaces()? {
            let source = pack.textures_dir(&namespace);
            if !source.is_dir() {
                continue;
            }

            let destination = if namespace == DEFAULT_NAMESPACE {
                self.root.join("textures")
            } else {
                self.root.join("textures").join(&namespace)
            };

            copied += copy_png_files_recursive(&source, &source, &destination)?;
        }

        tracing::info!("Copied {} textures", copied);
        Ok(copied)
    }

    /// Package the pack directory next to it as `<name>_bedrock.mcpack`.
    pub fn package(&self) -> Result<PathBuf> {
        let file_name = self
            .root
            .file_name()
            .ok_or_else(|| ConverterError::Export("pack directory has no name".to_string()))?;
        let parent = self.root.parent().unwrap_or_else(|| Path::new("."));
        let destination = parent.join(format!("{}.mcpack", file_name.to_string_lossy()));
        write_mcpack(&self.root, &destination)
    }

    /// Count generated files by kind.
    pub fn contents(&self) -> Result<PackContents> {
        Ok(PackContents {
            textures: count_files_recursive(&self.root.join("textures"), ".png")?,
            geometries: count_files(&self.root.join("models/entity"), ".geo.json")?,
            animations: count_files(&self.root.join("animations"), ".json")?,
            attachables: count_files(&self.root.join("attachables"), ".json")?,
        })
    }
}

/// Copy PNG files recursively, keeping paths relative to `base`.
fn copy_png_files_recursive(base: &Path, dir: &Path, destination: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            copied += copy_png_files_recursive(base, &path, destination)?;
        } else if path.extension().map(|e| e == "png").unwrap_or(false) {
            let relative = path
                .strip_prefix(base)
                .map_err(|e| ConverterError::Export(format!("{}: {}", path.display(), e)))?;
            let target = destination.join(relative);
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(&path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn count_files(dir: &Path, suffix: &str) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() && entry.file_name().to_string_lossy().ends_with(suffix) {
            count += 1;
        }
    }
    Ok(count)
}

fn count_files_recursive(dir: &Path, suffix: &str) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut count = count_files(dir, suffix)?;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            count += count_files_recursive(&entry.path(), suffix)?;
        }
    }
    Ok(count)
}
