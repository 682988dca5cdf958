//! Geyser item mappings.
//!
//! The proxy maps a Java item plus custom model data value to the Bedrock
//! custom item generated for it.

use super::ModelIds;
use crate::types::DEFAULT_NAMESPACE;
use serde::{Serialize, Serializer};

pub const MAPPING_FORMAT_VERSION: u32 = 2;

/// A successfully converted override, recorded once and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedItem {
    /// `<base_item>_cmd<custom_model_data>`.
    pub output_name: String,
    pub base_item: String,
    pub custom_model_data: i64,
    pub texture: String,
    /// Namespace the item model file was found in.
    pub namespace: String,
}

impl ConvertedItem {
    pub fn ids(&self) -> ModelIds {
        ModelIds::new(self.output_name.clone())
    }
}

/// One entry in a base item's mapping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub custom_model_data: String,
    pub bedrock_identifier: String,
    pub display_name: String,
    pub texture: String,
    pub geometry: String,
}

impl From<&ConvertedItem> for MappingEntry {
    fn from(item: &ConvertedItem) -> Self {
        let ids = item.ids();
        Self {
            custom_model_data: item.custom_model_data.to_string(),
            bedrock_identifier: ids.attachable(),
            display_name: display_name(&item.output_name),
            texture: item.texture.clone(),
            geometry: ids.geometry(),
        }
    }
}

/// The `geyser_mappings.json` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeyserMapping {
    pub format_version: u32,
    /// Entries grouped by Java item id, groups in first-seen order.
    #[serde(serialize_with = "serialize_groups")]
    pub items: Vec<(String, Vec<MappingEntry>)>,
}

fn serialize_groups<S>(groups: &[(String, Vec<MappingEntry>)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(groups.iter().map(|(item, entries)| (item, entries)))
}

impl GeyserMapping {
    /// Group converted items by `minecraft:<base_item>`, keeping discovery order.
    pub fn aggregate(items: &[ConvertedItem]) -> Self {
        let mut groups: Vec<(String, Vec<MappingEntry>)> = Vec::new();

        for item in items {
            let java_item = format!("{}:{}", DEFAULT_NAMESPACE, item.base_item);
            let entry = MappingEntry::from(item);
            match groups.iter_mut().find(|(id, _)| *id == java_item) {
                Some((_, entries)) => entries.push(entry),
                None => groups.push((java_item, vec![entry])),
            }
        }

        Self {
            format_version: MAPPING_FORMAT_VERSION,
            items: groups,
        }
    }

    pub fn entries(&self, java_item: &str) -> Option<&[MappingEntry]> {
        self.items
            .iter()
            .find(|(id, _)| id == java_item)
            .map(|(_, entries)| entries.as_slice())
    }

    /// Total number of mapped custom items.
    pub fn entry_count(&self) -> usize {
        self.items.iter().map(|(_, entries)| entries.len()).sum()
    }
}

/// Underscores become spaces; a letter is upper-cased when it starts a
/// word (follows a non-letter) and lower-cased otherwise.
/// "sword_cmd1001" -> "Sword Cmd1001"
pub fn display_name(output_name: &str) -> String {
    let mut result = String::with_capacity(output_name.len());
    let mut previous_is_letter = false;

    for c in output_name.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(base: &str, cmd: i64, texture: &str) -> ConvertedItem {
        ConvertedItem {
            output_name: format!("{}_cmd{}", base, cmd),
            base_item: base.to_string(),
            custom_model_data: cmd,
            texture: texture.to_string(),
            namespace: "minecraft".to_string(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("sword_cmd1001"), "Sword Cmd1001");
        assert_eq!(display_name("diamond_HOE_cmd2"), "Diamond Hoe Cmd2");
        assert_eq!(display_name("stick_cmd5x"), "Stick Cmd5X");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_aggregate_groups_in_discovery_order() {
        let items = vec![
            item("sword", 1001, "fire_sword"),
            item("bow", 7, "item/bow_a"),
            item("sword", 1002, "ice_sword"),
        ];

        let mapping = GeyserMapping::aggregate(&items);
        assert_eq!(mapping.entry_count(), 3);

        let groups: Vec<_> = mapping.items.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(groups, vec!["minecraft:sword", "minecraft:bow"]);

        let swords = mapping.entries("minecraft:sword").unwrap();
        let cmds: Vec<_> = swords.iter().map(|e| e.custom_model_data.as_str()).collect();
        assert_eq!(cmds, vec!["1001", "1002"]);
    }

    #[test]
    fn test_mapping_json() {
        let mapping = GeyserMapping::aggregate(&[item("sword", 1001, "fire_sword")]);
        assert_eq!(
            serde_json::to_value(&mapping).unwrap(),
            json!({
                "format_version": 2,
                "items": {
                    "minecraft:sword": [
                        {
                            "custom_model_data": "1001",
                            "bedrock_identifier": "custom:sword_cmd1001",
                            "display_name": "Sword Cmd1001",
                            "texture": "fire_sword",
                            "geometry": "geometry.sword_cmd1001"
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = GeyserMapping::aggregate(&[]);
        assert_eq!(
            serde_json::to_value(&mapping).unwrap(),
            json!({ "format_version": 2, "items": {} })
        );
    }
}
