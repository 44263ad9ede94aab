//! JSON report of extracted zones (`zone_coordinates.json`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Vec3;
use crate::zone::ZoneRecord;

/// Default report file name
pub const REPORT_FILE: &str = "zone_coordinates.json";

pub const NOTE: &str = "Coordinates are converted from Blender to app coordinate system";

/// Decimal places kept for viewer-space positions
const POSITION_DECIMALS: i32 = 3;

/// Top-level report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReport {
    pub model_file: String,
    pub total_zones: usize,
    pub zones: Vec<ZoneEntry>,
    pub note: String,
}

/// One zone as written to the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub id: String,
    pub original_name: String,
    pub display_name: String,
    /// Viewer-space position, rounded
    pub position: Vec3,
    /// Editor-space translation, exactly as stored
    pub blender_coords: [f64; 3],
    pub rotation: [f64; 4],
    pub scale: [f64; 3],
}

impl From<&ZoneRecord> for ZoneEntry {
    fn from(zone: &ZoneRecord) -> Self {
        Self {
            id: zone.id.clone(),
            original_name: zone.original_name.clone(),
            display_name: zone.display_name.clone(),
            position: zone.position.rounded(POSITION_DECIMALS),
            blender_coords: zone.raw_position.to_array(),
            rotation: zone.rotation.to_array(),
            scale: zone.scale.to_array(),
        }
    }
}

impl ZoneReport {
    pub fn new(model_file: impl Into<String>, zones: &[ZoneRecord]) -> Self {
        Self {
            model_file: model_file.into(),
            total_zones: zones.len(),
            zones: zones.iter().map(ZoneEntry::from).collect(),
            note: NOTE.to_string(),
        }
    }

    /// Pretty-printed JSON, two-space indent, non-ASCII kept as-is
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
