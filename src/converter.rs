//! Pack conversion pipeline.
//!
//! Loads a Java pack, resolves its custom model data overrides, writes the
//! generated Bedrock documents and finishes with the Geyser mapping.

use crate::bedrock::{ConvertedItem, GeyserMapping};
use crate::error::{ConverterError, Result};
use crate::export::{BedrockPack, Manifest, PackContents};
use crate::resolver::{self, OverrideOutcome, OverrideScan};
use crate::resource_pack::loader::{load_from_path, sanitize_name};
use crate::resource_pack::{JavaPack, PackInfo};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Converter configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory the Bedrock pack and `.mcpack` are written to.
    pub output_dir: PathBuf,
    /// Package the result as a `.mcpack` archive.
    pub create_mcpack: bool,
    /// Copy the Java pack's PNG textures.
    pub copy_textures: bool,
    /// `min_engine_version` written to the manifest.
    pub min_engine_version: [u32; 3],
    /// Indent generated JSON.
    pub pretty_json: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("converted_packs"),
            create_mcpack: true,
            copy_textures: true,
            min_engine_version: [1, 16, 0],
            pretty_json: true,
        }
    }
}

impl ConverterConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_mcpack(mut self, create_mcpack: bool) -> Self {
        self.create_mcpack = create_mcpack;
        self
    }

    pub fn with_texture_copy(mut self, copy_textures: bool) -> Self {
        self.copy_textures = copy_textures;
        self
    }

    pub fn with_min_engine_version(mut self, version: [u32; 3]) -> Self {
        self.min_engine_version = version;
        self
    }
}

/// What happened to the overrides of one pack.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// Overrides found while scanning.
    pub overrides_found: usize,
    /// Successfully converted overrides, in discovery order.
    pub converted: Vec<ConvertedItem>,
    /// Model references that did not resolve to a file.
    pub missing_models: BTreeSet<String>,
    /// Models that existed but could not be converted.
    pub failed: Vec<(PathBuf, String)>,
}

impl ConversionReport {
    /// Fold the result of one override into the report.
    pub fn record(&mut self, outcome: RecordedOutcome) {
        match outcome {
            RecordedOutcome::Converted(item) => self.converted.push(item),
            RecordedOutcome::MissingModel(reference) => {
                self.missing_models.insert(reference);
            }
            RecordedOutcome::Failed { model_path, reason } => {
                self.failed.push((model_path, reason));
            }
        }
    }

    /// Add another report's contents after this one's.
    pub fn merge(&mut self, other: ConversionReport) {
        self.overrides_found += other.overrides_found;
        self.converted.extend(other.converted);
        self.missing_models.extend(other.missing_models);
        self.failed.extend(other.failed);
    }

    /// Build the Geyser mapping for everything converted so far.
    pub fn mapping(&self) -> GeyserMapping {
        GeyserMapping::aggregate(&self.converted)
    }
}

/// Outcome of one override after its documents were written.
#[derive(Debug, Clone)]
pub enum RecordedOutcome {
    Converted(ConvertedItem),
    MissingModel(String),
    Failed { model_path: PathBuf, reason: String },
}

/// Result of converting one pack.
#[derive(Debug)]
pub struct ConversionOutput {
    pub pack_info: PackInfo,
    pub bedrock_dir: PathBuf,
    pub mcpack: Option<PathBuf>,
    pub report: ConversionReport,
    pub contents: PackContents,
}

/// Converts one Java pack (ZIP or directory) into a Bedrock pack.
pub struct PackConverter {
    input: PathBuf,
    config: ConverterConfig,
}

impl PackConverter {
    pub fn new(input: impl Into<PathBuf>, config: ConverterConfig) -> Self {
        Self {
            input: input.into(),
            config,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the whole conversion.
    ///
    /// A ZIP input's extraction directory lives only as long as this call.
    pub fn convert(&self) -> Result<ConversionOutput> {
        tracing::info!("Starting pack conversion: {}", self.input.display());

        let java = load_from_path(&self.input)?;
        let pack_info = java.pack_info();

        let mut name = sanitize_name(&pack_info.name);
        if name.is_empty() {
            name = "resource_pack".to_string();
        }

        let bedrock = BedrockPack::create(&self.config.output_dir, &name, self.config.pretty_json)?;

        bedrock.write_manifest(&Manifest::for_pack(&pack_info, self.config.min_engine_version))?;
        tracing::info!("Generated manifest.json");

        bedrock.copy_pack_icon(&java)?;
        if self.config.copy_textures {
            bedrock.copy_textures(&java)?;
        }

        let scan = resolver::scan(&java)?;
        let report = if scan.is_empty() {
            tracing::warn!("No custom model data found");
            ConversionReport::default()
        } else {
            let report = convert_overrides(&java, &bedrock, &scan);
            let mapping = report.mapping();
            bedrock.write_mapping(&mapping)?;
            tracing::info!("Generated Geyser mappings for {} items", mapping.entry_count());
            report
        };

        let mcpack = if self.config.create_mcpack {
            Some(bedrock.package()?)
        } else {
            None
        };

        let contents = bedrock.contents()?;
        let output = ConversionOutput {
            pack_info,
            bedrock_dir: bedrock.root().to_path_buf(),
            mcpack,
            report,
            contents,
        };
        log_summary(&output);

        Ok(output)
    }
}

/// Resolve and write every scanned override.
///
/// A failing override never stops the others. Missing models are collected
/// and reported once at the end.
pub fn convert_overrides(java: &JavaPack, bedrock: &BedrockPack, scan: &OverrideScan) -> ConversionReport {
    let mut report = ConversionReport::default();

    for (item_name, records) in scan {
        tracing::info!("Processing item: {}", item_name);

        for record in records {
            report.overrides_found += 1;

            let recorded = match resolver::resolve_override(java, record) {
                OverrideOutcome::Converted { item, assets } => {
                    match bedrock.write_model_assets(&assets) {
                        Ok(()) => RecordedOutcome::Converted(item),
                        Err(e) => RecordedOutcome::Failed {
                            model_path: java.model_path(&record.model_reference),
                            reason: e.to_string(),
                        },
                    }
                }
                OverrideOutcome::MissingModel(reference) => RecordedOutcome::MissingModel(reference),
                OverrideOutcome::Failed { model_path, reason } => {
                    RecordedOutcome::Failed { model_path, reason }
                }
            };

            if let RecordedOutcome::Failed { model_path, reason } = &recorded {
                tracing::error!(
                    "{}",
                    ConverterError::ModelConversion {
                        path: model_path.clone(),
                        reason: reason.clone(),
                    }
                );
            }

            report.record(recorded);
        }
    }

    tracing::info!("Processed {} custom models", report.converted.len());
    if !report.missing_models.is_empty() {
        tracing::warn!(
            "{} model files were not found (normal for external dependencies)",
            report.missing_models.len()
        );
    }

    report
}

fn log_summary(output: &ConversionOutput) {
    tracing::info!("Conversion summary");
    tracing::info!("  Pack: {}", output.pack_info.name);
    tracing::info!("  Output: {}", output.bedrock_dir.display());
    if let Some(mcpack) = &output.mcpack {
        tracing::info!("  Bedrock pack: {}", mcpack.display());
    }
    tracing::info!("  Textures: {}", output.contents.textures);
    tracing::info!("  Models: {}", output.contents.geometries);
    tracing::info!("  Animations: {}", output.contents.animations);
    tracing::info!("  Attachables: {}", output.contents.attachables);
    tracing::info!("  Custom items: {}", output.report.converted.len());
    if !output.report.missing_models.is_empty() {
        tracing::info!(
            "  Missing models: {} (external dependencies)",
            output.report.missing_models.len()
        );
    }
}

/// Convert every `*.zip` directly inside `dir`, one pack at a time.
///
/// A pack that fails is logged and skipped; the returned list holds every
/// pack's result in file-name order.
pub fn convert_all(dir: &Path, config: &ConverterConfig) -> Result<Vec<(PathBuf, Result<ConversionOutput>)>> {
    if !dir.is_dir() {
        return Err(ConverterError::InvalidInput(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut archives = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_zip = path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("zip"))
            .unwrap_or(false);
        if path.is_file() && is_zip {
            archives.push(path);
        }
    }
    archives.sort();

    if archives.is_empty() {
        return Err(ConverterError::InvalidInput(format!(
            "No ZIP files found in {}",
            dir.display()
        )));
    }

    tracing::info!("Found {} ZIP files to convert", archives.len());

    let mut results = Vec::with_capacity(archives.len());
    for archive in archives {
        tracing::info!("Converting {}", archive.display());
        let result = PackConverter::new(&archive, config.clone()).convert();
        if let Err(e) = &result {
            tracing::error!("Conversion of {} failed: {}", archive.display(), e);
        }
        results.push((archive, result));
    }

    Ok(results)
}

/// True when a batch ran and none of its packs converted.
pub fn batch_failed(results: &[(PathBuf, Result<ConversionOutput>)]) -> bool {
    !results.is_empty() && results.iter().all(|(_, result)| result.is_err())
}
