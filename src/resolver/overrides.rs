//! Custom model data override discovery and resolution.

use crate::bedrock::{ConvertedItem, ModelAssets, ModelIds};
use crate::error::Result;
use crate::resource_pack::{ItemModel, JavaModel, JavaPack};
use crate::types::{strip_namespace, DEFAULT_NAMESPACE};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Texture name used when a model's textures cannot be read.
pub const MISSING_TEXTURE: &str = "missing_texture";

/// One qualifying override found in an item model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRecord {
    pub item_name: String,
    pub custom_model_data: i64,
    /// Model reference, `ns:path` or bare `path` (implies `minecraft`).
    pub model_reference: String,
    /// Namespace of the item model file, `None` for `minecraft`.
    pub namespace: Option<String>,
}

impl OverrideRecord {
    pub fn ids(&self) -> ModelIds {
        ModelIds::for_override(&self.item_name, self.custom_model_data)
    }
}

/// Overrides per item name, each list in file order.
pub type OverrideScan = BTreeMap<String, Vec<OverrideRecord>>;

/// Collect every custom model data override in the pack.
///
/// Reads `assets/<ns>/models/item/*.json` for every namespace. Unreadable
/// item files are logged and skipped.
pub fn scan(pack: &JavaPack) -> Result<OverrideScan> {
    let mut scan = OverrideScan::new();

    if !pack.assets_dir().is_dir() {
        tracing::warn!("No assets directory found");
        return Ok(scan);
    }

    for namespace in pack.namespaces()? {
        let items_dir = pack.item_models_dir(&namespace);
        if !items_dir.is_dir() {
            continue;
        }

        tracing::info!("Scanning namespace: {}", namespace);

        for item_file in json_files(&items_dir)? {
            let item_name = match item_file.file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => continue,
            };

            let item = match std::fs::read_to_string(&item_file)
                .map_err(crate::error::ConverterError::from)
                .and_then(|contents| ItemModel::from_json(&contents).map_err(Into::into))
            {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!("Error reading {}: {}", item_file.display(), e);
                    continue;
                }
            };

            for (custom_model_data, model_reference) in item.custom_model_overrides() {
                scan.entry(item_name.clone())
                    .or_default()
                    .push(OverrideRecord {
                        item_name: item_name.clone(),
                        custom_model_data,
                        model_reference: model_reference.to_string(),
                        namespace: (namespace != DEFAULT_NAMESPACE).then(|| namespace.clone()),
                    });
            }
        }
    }

    let total: usize = scan.values().map(Vec::len).sum();
    tracing::info!(
        "Found {} custom model data entries across {} items",
        total,
        scan.len()
    );

    Ok(scan)
}

/// `*.json` files directly inside a directory, sorted by path.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Pick the primary texture of a model file.
///
/// Preference: `layer0`, then `0`, then the first declared texture. The
/// namespace prefix is dropped. Unreadable files give [`MISSING_TEXTURE`].
pub fn extract_texture_name(model_path: &Path) -> String {
    match std::fs::read_to_string(model_path) {
        Ok(contents) => texture_name_from_json(&contents),
        Err(_) => MISSING_TEXTURE.to_string(),
    }
}

/// Same as [`extract_texture_name`], for already loaded JSON text.
pub fn texture_name_from_json(contents: &str) -> String {
    let Ok(model) = serde_json::from_str::<Value>(contents) else {
        return MISSING_TEXTURE.to_string();
    };
    let Some(root) = model.as_object() else {
        return MISSING_TEXTURE.to_string();
    };

    let textures = match root.get("textures") {
        None => return String::new(),
        Some(Value::Object(textures)) => textures,
        Some(_) => return MISSING_TEXTURE.to_string(),
    };

    let candidate = [textures.get("layer0"), textures.get("0")]
        .into_iter()
        .flatten()
        .find(|value| is_truthy(value))
        .or_else(|| textures.values().next());

    match candidate {
        None => String::new(),
        Some(Value::String(reference)) => strip_namespace(reference).to_string(),
        Some(_) => MISSING_TEXTURE.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Result of resolving one override.
#[derive(Debug, Clone)]
pub enum OverrideOutcome {
    /// The model was translated; its documents still need writing.
    Converted {
        item: ConvertedItem,
        assets: Box<ModelAssets>,
    },
    /// The referenced model file is not in this pack.
    MissingModel(String),
    /// The model file exists but could not be translated.
    Failed { model_path: PathBuf, reason: String },
}

/// Resolve an override's model and texture and generate its documents.
pub fn resolve_override(pack: &JavaPack, record: &OverrideRecord) -> OverrideOutcome {
    let Some(model_path) = pack.find_model(&record.model_reference) else {
        return OverrideOutcome::MissingModel(record.model_reference.clone());
    };

    let contents = match std::fs::read_to_string(&model_path) {
        Ok(contents) => contents,
        Err(e) => {
            return OverrideOutcome::Failed {
                model_path,
                reason: e.to_string(),
            }
        }
    };

    let texture = texture_name_from_json(&contents);

    let model = match JavaModel::from_json(&contents) {
        Ok(model) => model,
        Err(e) => {
            return OverrideOutcome::Failed {
                model_path,
                reason: e.to_string(),
            }
        }
    };

    let ids = record.ids();
    let item = ConvertedItem {
        output_name: ids.output_name().to_string(),
        base_item: record.item_name.clone(),
        custom_model_data: record.custom_model_data,
        texture: texture.clone(),
        namespace: record
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
    };
    let assets = ModelAssets::generate(&model, ids, &texture);

    OverrideOutcome::Converted {
        item,
        assets: Box::new(assets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_texture_priority() {
        assert_eq!(
            texture_name_from_json(r#"{"textures":{"0":"a:zero","layer0":"a:layer"}}"#),
            "layer"
        );
        assert_eq!(
            texture_name_from_json(r#"{"textures":{"particle":"p","0":"custom:zero"}}"#),
            "zero"
        );
        assert_eq!(
            texture_name_from_json(r#"{"textures":{"particle":"item/p","side":"s"}}"#),
            "item/p"
        );
        assert_eq!(
            texture_name_from_json(r#"{"textures":{"layer0":"","side":"s"}}"#),
            "s"
        );
    }

    #[test]
    fn test_texture_first_entry_uses_declared_order() {
        assert_eq!(
            texture_name_from_json(r#"{"textures":{"zeta":"z","alpha":"a"}}"#),
            "z"
        );
    }

    #[test]
    fn test_texture_fallbacks() {
        assert_eq!(texture_name_from_json("{}"), "");
        assert_eq!(texture_name_from_json(r#"{"textures":{}}"#), "");
        assert_eq!(texture_name_from_json("not json"), MISSING_TEXTURE);
        assert_eq!(texture_name_from_json("[1, 2]"), MISSING_TEXTURE);
        assert_eq!(texture_name_from_json(r#"{"textures":null}"#), MISSING_TEXTURE);
        assert_eq!(texture_name_from_json(r#"{"textures":{"layer0":5}}"#), MISSING_TEXTURE);
        assert_eq!(
            extract_texture_name(Path::new("/no/such/model.json")),
            MISSING_TEXTURE
        );
    }

    #[test]
    fn test_scan_collects_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "assets/minecraft/models/item/sword.json",
            r#"{
                "parent": "item/handheld",
                "overrides": [
                    { "predicate": { "custom_model_data": 1002 }, "model": "custom:sword_ice" },
                    { "predicate": { "custom_model_data": 1001 }, "model": "custom:sword_fire" },
                    { "predicate": { "damage": 0.5 }, "model": "item/sword_broken" }
                ]
            }"#,
        );
        write(
            root,
            "assets/extra/models/item/bow.json",
            r#"{ "overrides": [ { "predicate": { "custom_model_data": 3 }, "model": "bow_alt" } ] }"#,
        );
        write(root, "assets/extra/models/item/broken.json", "{ nope");
        write(root, "assets/extra/models/item/notes.txt", "ignored");

        let pack = JavaPack::from_directory(root);
        let scan = scan(&pack).unwrap();

        assert_eq!(scan.len(), 2);
        let swords = &scan["sword"];
        assert_eq!(swords.len(), 2);
        assert_eq!(swords[0].custom_model_data, 1002);
        assert_eq!(swords[1].model_reference, "custom:sword_fire");
        assert_eq!(swords[0].namespace, None);

        let bows = &scan["bow"];
        assert_eq!(bows[0].namespace.as_deref(), Some("extra"));
        assert_eq!(bows[0].ids().output_name(), "bow_cmd3");
    }

    #[test]
    fn test_scan_without_assets() {
        let dir = tempfile::tempdir().unwrap();
        let pack = JavaPack::from_directory(dir.path());
        assert!(scan(&pack).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let pack = JavaPack::from_directory(dir.path());
        let record = OverrideRecord {
            item_name: "sword".into(),
            custom_model_data: 1,
            model_reference: "othermod:thing".into(),
            namespace: None,
        };

        match resolve_override(&pack, &record) {
            OverrideOutcome::MissingModel(reference) => assert_eq!(reference, "othermod:thing"),
            other => panic!("expected missing model, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_malformed_model() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "assets/custom/models/bad.json", r#"{ "elements": [ "#);
        let pack = JavaPack::from_directory(dir.path());
        let record = OverrideRecord {
            item_name: "sword".into(),
            custom_model_data: 2,
            model_reference: "custom:bad".into(),
            namespace: None,
        };

        assert!(matches!(
            resolve_override(&pack, &record),
            OverrideOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_resolve_converted() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "assets/custom/models/sword_fire.json",
            r#"{
                "textures": { "layer0": "custom:fire_sword" },
                "elements": [ { "from": [0, 0, 0], "to": [16, 16, 16] } ]
            }"#,
        );
        let pack = JavaPack::from_directory(dir.path());
        let record = OverrideRecord {
            item_name: "sword".into(),
            custom_model_data: 1001,
            model_reference: "custom:sword_fire".into(),
            namespace: Some("custom".into()),
        };

        let OverrideOutcome::Converted { item, assets } = resolve_override(&pack, &record) else {
            panic!("expected conversion");
        };
        assert_eq!(item.output_name, "sword_cmd1001");
        assert_eq!(item.texture, "fire_sword");
        assert_eq!(item.namespace, "custom");
        assert_eq!(assets.attachable.identifier(), "custom:sword_cmd1001");
        assert_eq!(assets.geometry.geometry[0].cube_count(), 1);
    }

    #[test]
    fn test_resolve_with_malformed_textures() {
        let dir = tempfile::tempdir().unwrap();
        for (name, textures) in [("a", "null"), ("b", r#"["a"]"#), ("c", r#""a""#)] {
            write(
                dir.path(),
                &format!("assets/custom/models/{}.json", name),
                &format!(
                    r#"{{ "textures": {}, "elements": [ {{ "from": [0, 0, 0], "to": [16, 16, 16] }} ] }}"#,
                    textures
                ),
            );
        }
        let pack = JavaPack::from_directory(dir.path());

        for (cmd, name) in [(1, "a"), (2, "b"), (3, "c")] {
            let record = OverrideRecord {
                item_name: "sword".into(),
                custom_model_data: cmd,
                model_reference: format!("custom:{}", name),
                namespace: None,
            };
            let OverrideOutcome::Converted { item, assets } = resolve_override(&pack, &record)
            else {
                panic!("expected conversion for {}", name);
            };
            assert_eq!(item.texture, MISSING_TEXTURE);
            assert_eq!(assets.geometry.geometry[0].cube_count(), 1);
        }
    }

    #[test]
    fn test_resolve_with_null_elements() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "assets/custom/models/flat.json",
            r#"{ "textures": { "layer0": "custom:flat" }, "elements": null, "texture_size": [64.0, 64.0] }"#,
        );
        let pack = JavaPack::from_directory(dir.path());
        let record = OverrideRecord {
            item_name: "paper".into(),
            custom_model_data: 9,
            model_reference: "custom:flat".into(),
            namespace: None,
        };

        let OverrideOutcome::Converted { item, assets } = resolve_override(&pack, &record) else {
            panic!("expected conversion");
        };
        assert_eq!(item.texture, "flat");
        let geometry = &assets.geometry.geometry[0];
        assert!(geometry.bones.is_empty());
        assert_eq!(geometry.description.texture_width, 64);
    }
}
