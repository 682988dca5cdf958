//! Bedrock `manifest.json` generation.

use crate::resource_pack::PackInfo;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MANIFEST_FORMAT_VERSION: u32 = 2;
pub const PACK_VERSION: [u32; 3] = [1, 0, 0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub description: String,
    pub uuid: String,
    pub version: [u32; 3],
    pub min_engine_version: [u32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub module_type: String,
    pub uuid: String,
    pub version: [u32; 3],
}

/// A resource pack manifest with freshly generated UUIDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
}

impl Manifest {
    pub fn for_pack(info: &PackInfo, min_engine_version: [u32; 3]) -> Self {
        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            header: ManifestHeader {
                name: info.name.clone(),
                description: info.description.clone(),
                uuid: Uuid::new_v4().to_string(),
                version: PACK_VERSION,
                min_engine_version,
            },
            modules: vec![ManifestModule {
                module_type: "resources".to_string(),
                uuid: Uuid::new_v4().to_string(),
                version: PACK_VERSION,
            }],
        }
    }
}
