//! Zone extraction from a decoded scene
//!
//! A zone is a node whose name starts with a fixed prefix (`ZONE_` unless
//! configured otherwise). Zones are numbered in the order they appear in the
//! node list; they are never re-sorted.
//!
//! Only the position is converted to viewer space. Rotation and scale are
//! copied through as stored in the scene, without the Y/Z swap.

use serde::Serialize;

use crate::scene::{Node, SceneDocument};
use crate::types::{Quat, Vec3};

/// Default name prefix marking a zone
pub const DEFAULT_PREFIX: &str = "ZONE_";

/// One extracted zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneRecord {
    /// `zone-<n>`, 1-based in discovery order
    pub id: String,
    pub original_name: String,
    pub display_name: String,
    /// Viewer-space position
    pub position: Vec3,
    /// Position as stored in the scene
    pub raw_position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl ZoneRecord {
    fn from_node(index: usize, name: &str, node: &Node, prefix: &str) -> Self {
        let raw_position = Vec3::from_array(node.translation);

        Self {
            id: zone_id(index),
            original_name: name.to_string(),
            display_name: display_name(name, prefix),
            position: raw_position.to_viewer(),
            raw_position,
            rotation: Quat::from_array(node.rotation),
            scale: Vec3::from_array(node.scale),
        }
    }
}

/// Zone id for the `index`-th match (0-based)
pub fn zone_id(index: usize) -> String {
    format!("zone-{}", index + 1)
}

/// Human-readable name: one leading `prefix` removed, underscores to spaces
///
/// ```
/// use glb_zones::display_name;
///
/// assert_eq!(display_name("ZONE_Main_Hall_2", "ZONE_"), "Main Hall 2");
/// assert_eq!(display_name("ZONE_", "ZONE_"), "");
/// ```
pub fn display_name(name: &str, prefix: &str) -> String {
    name.strip_prefix(prefix).unwrap_or(name).replace('_', " ")
}

/// Collect every node whose name starts with `prefix`, in document order
///
/// An empty result is not an error; callers decide how to report it.
pub fn extract(doc: &SceneDocument, prefix: &str) -> Vec<ZoneRecord> {
    let zones: Vec<ZoneRecord> = doc
        .named_with_prefix(prefix)
        .enumerate()
        .filter_map(|(index, node)| {
            let name = node.name.as_deref()?;
            Some(ZoneRecord::from_node(index, name, node, prefix))
        })
        .collect();

    tracing::debug!(
        nodes = doc.nodes.len(),
        zones = zones.len(),
        prefix,
        "Extracted zones"
    );

    zones
}
