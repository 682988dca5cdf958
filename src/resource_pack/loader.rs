//! Resource pack loading from ZIP files and directories.

use super::JavaPack;
use crate::error::{ConverterError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Description used when the pack does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "Converted from Java Edition";

/// Java `pack_format` assumed when `pack.mcmeta` has none.
pub const DEFAULT_PACK_FORMAT: i64 = 6;

/// Pack metadata used for naming the output and writing the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct PackInfo {
    pub name: String,
    pub description: String,
    pub format: i64,
}

/// What kind of input a path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Archive,
    Directory,
}

/// Check that a path can be converted.
///
/// Fails for missing paths, files that are not ZIP archives, and archives
/// that cannot be opened. A directory without `assets/` is accepted with a
/// warning.
pub fn validate_input(path: &Path) -> Result<InputKind> {
    if !path.exists() {
        return Err(ConverterError::InvalidInput(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }

    if path.is_file() {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "zip" => {}
            "rar" => {
                return Err(ConverterError::InvalidInput(format!(
                    "RAR files are not supported, extract and re-compress as ZIP: {}",
                    path.display()
                )));
            }
            _ => {
                return Err(ConverterError::InvalidInput(format!(
                    "Input file must be a ZIP archive: {}",
                    path.display()
                )));
            }
        }

        let file = std::fs::File::open(path)?;
        zip::ZipArchive::new(file).map_err(|e| {
            ConverterError::InvalidArchive(format!("{}: {}", path.display(), e))
        })?;
        Ok(InputKind::Archive)
    } else if path.is_dir() {
        if !path.join("assets").is_dir() {
            tracing::warn!(
                "Directory does not contain an 'assets' folder, this may not be a resource pack: {}",
                path.display()
            );
        }
        Ok(InputKind::Directory)
    } else {
        Err(ConverterError::InvalidInput(format!(
            "Input path is neither a file nor a directory: {}",
            path.display()
        )))
    }
}

/// Load a resource pack from a file path.
///
/// Directories are used in place; ZIP archives are extracted into a
/// temporary directory owned by the returned pack.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<JavaPack> {
    let path = path.as_ref();

    match validate_input(path)? {
        InputKind::Directory => {
            tracing::info!("Using directory: {}", path.display());
            Ok(JavaPack::from_directory(path))
        }
        InputKind::Archive => extract_archive(path),
    }
}

/// Extract a ZIP archive and locate the pack root inside it.
fn extract_archive(path: &Path) -> Result<JavaPack> {
    tracing::info!("Extracting ZIP file: {}", path.display());

    let temp_dir = tempfile::Builder::new().prefix("java_pack_").tempdir()?;

    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ConverterError::InvalidArchive(format!("{}: {}", path.display(), e)))?;
    archive
        .extract(temp_dir.path())
        .map_err(|e| ConverterError::InvalidArchive(format!("{}: {}", path.display(), e)))?;

    let root = find_pack_root(temp_dir.path())?;
    tracing::info!("Java pack directory: {}", root.display());

    Ok(JavaPack::from_extracted(path.to_path_buf(), root, temp_dir))
}

/// The directory holding `pack.mcmeta`, else the first subdirectory,
/// else the extraction directory itself.
fn find_pack_root(extracted: &Path) -> Result<PathBuf> {
    if let Some(mcmeta) = find_file_recursive(extracted, "pack.mcmeta")? {
        if let Some(parent) = mcmeta.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    let subdirs = sorted_subdirectories(extracted)?;
    Ok(subdirs
        .into_iter()
        .next()
        .unwrap_or_else(|| extracted.to_path_buf()))
}

/// Find a file by name, checking each directory before its children.
fn find_file_recursive(dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    let candidate = dir.join(name);
    if candidate.is_file() {
        return Ok(Some(candidate));
    }

    for subdir in sorted_subdirectories(dir)? {
        if let Some(found) = find_file_recursive(&subdir, name)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

fn sorted_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}

/// Read pack information from `pack.mcmeta`, with fallbacks.
pub fn read_pack_info(pack: &JavaPack) -> PackInfo {
    let source = pack.source();
    let stem = if source.is_file() {
        source.file_stem()
    } else {
        source.file_name()
    };
    let base_name = stem
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "resource_pack".to_string());

    let mut info = PackInfo {
        name: base_name,
        description: DEFAULT_DESCRIPTION.to_string(),
        format: DEFAULT_PACK_FORMAT,
    };

    let mcmeta_path = pack.root().join("pack.mcmeta");
    if !mcmeta_path.is_file() {
        return info;
    }

    let data: Value = match std::fs::read_to_string(&mcmeta_path)
        .map_err(ConverterError::from)
        .and_then(|contents| serde_json::from_str(&contents).map_err(ConverterError::from))
    {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Error reading pack.mcmeta: {}", e);
            return info;
        }
    };

    let pack_data = &data["pack"];
    if let Some(description) = pack_data["description"].as_str() {
        if let Some(name) = name_from_description(description) {
            info.name = name;
        }
        info.description = description.to_string();
    }
    if let Some(format) = pack_data["pack_format"].as_i64() {
        info.format = format;
    }

    info
}

/// Use a short, meaningful description as the pack name.
fn name_from_description(description: &str) -> Option<String> {
    if description.is_empty()
        || description == DEFAULT_DESCRIPTION
        || description.chars().count() >= 50
    {
        return None;
    }

    let clean = sanitize_name(description);
    let lowered = clean.to_lowercase();
    if clean.is_empty() || lowered == "converted from java edition" || lowered == "resource pack" {
        return None;
    }
    Some(clean)
}

/// Keep only characters that are safe in file names.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}
