//! Scene description decoded from the JSON chunk
//!
//! Only the parts of the glTF document needed to locate zones are modelled.
//! Everything else in the JSON is skipped during decoding.

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::FormatError;

/// Identity rotation quaternion in glTF `[x, y, z, w]` order
pub const IDENTITY_ROTATION: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Decoded scene description
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub asset: Option<Asset>,

    /// Default scene index
    #[serde(default)]
    pub scene: Option<u32>,

    /// Flat node list, in document order
    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub(crate) scenes: Vec<IgnoredAny>,

    #[serde(default)]
    pub(crate) meshes: Vec<IgnoredAny>,

    #[serde(default)]
    pub(crate) cameras: Vec<IgnoredAny>,
}

/// The `asset` block: exporter metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub generator: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// One entry of `nodes` with its local transform
///
/// Transform fields missing from the JSON take the glTF defaults.
/// `children` is not read; transforms are never composed through parents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub translation: [f64; 3],

    #[serde(default = "identity_rotation")]
    pub rotation: [f64; 4],

    #[serde(default = "unit_scale")]
    pub scale: [f64; 3],

    #[serde(default)]
    pub mesh: Option<u32>,

    #[serde(default)]
    pub camera: Option<u32>,
}

fn identity_rotation() -> [f64; 4] {
    IDENTITY_ROTATION
}

fn unit_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: None,
            translation: [0.0; 3],
            rotation: IDENTITY_ROTATION,
            scale: unit_scale(),
            mesh: None,
            camera: None,
        }
    }
}

impl SceneDocument {
    /// Decode the JSON chunk payload
    pub fn from_json(payload: &[u8]) -> Result<Self, FormatError> {
        let text = std::str::from_utf8(payload)?;
        Ok(serde_json::from_str(text)?)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Nodes whose name starts with `prefix`, in document order
    pub fn named_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes
            .iter()
            .filter(move |node| node.name.as_deref().is_some_and(|n| n.starts_with(prefix)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_defaults() {
        let doc = SceneDocument::from_json(br#"{"nodes":[{"name":"ZONE_A"}]}"#).unwrap();
        let node = &doc.nodes[0];

        assert_eq!(node.name.as_deref(), Some("ZONE_A"));
        assert_eq!(node.translation, [0.0, 0.0, 0.0]);
        assert_eq!(node.rotation, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(node.scale, [1.0, 1.0, 1.0]);
        assert_eq!(*node, Node { name: Some("ZONE_A".into()), ..Node::default() });
    }

    #[test]
    fn test_node_full_transform() {
        let json = br#"{"nodes":[{
            "name":"ZONE_B",
            "translation":[1,2.5,-3],
            "rotation":[0.0,0.7071,0.0,0.7071],
            "scale":[2,2,2],
            "children":[1],
            "extras":{"note":"ignored"}
        }]}"#;
        let doc = SceneDocument::from_json(json).unwrap();
        let node = &doc.nodes[0];

        assert_eq!(node.translation, [1.0, 2.5, -3.0]);
        assert_eq!(node.rotation, [0.0, 0.7071, 0.0, 0.7071]);
        assert_eq!(node.scale, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_missing_nodes_is_empty() {
        let doc = SceneDocument::from_json(br#"{"asset":{"version":"2.0"}}"#).unwrap();
        assert!(doc.nodes.is_empty());
        assert_eq!(doc.asset.unwrap().version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_counts() {
        let json = br#"{
            "scene":0,
            "scenes":[{"nodes":[0]}],
            "nodes":[{"mesh":0},{"camera":0}],
            "meshes":[{"primitives":[]}],
            "cameras":[{"type":"perspective"}]
        }"#;
        let doc = SceneDocument::from_json(json).unwrap();

        assert_eq!(doc.scene, Some(0));
        assert_eq!(doc.scene_count(), 1);
        assert_eq!(doc.mesh_count(), 1);
        assert_eq!(doc.camera_count(), 1);
        assert_eq!(doc.nodes[0].mesh, Some(0));
        assert_eq!(doc.nodes[1].camera, Some(0));
    }

    #[test]
    fn test_invalid_payloads() {
        assert!(matches!(
            SceneDocument::from_json(b"{\"nodes\": ["),
            Err(FormatError::InvalidJson(_))
        ));
        assert!(matches!(
            SceneDocument::from_json(&[0x7b, 0xff, 0x7d]),
            Err(FormatError::InvalidUtf8(_))
        ));
        // Wrong arity for a transform field
        assert!(SceneDocument::from_json(br#"{"nodes":[{"translation":[1,2]}]}"#).is_err());
    }

    #[test]
    fn test_named_with_prefix() {
        let json = br#"{"nodes":[{"name":"ZONE_A"},{},{"name":"zone_b"},{"name":"ZONE_C"}]}"#;
        let doc = SceneDocument::from_json(json).unwrap();

        let names: Vec<_> = doc
            .named_with_prefix("ZONE_")
            .filter_map(|n| n.name.as_deref())
            .collect();
        assert_eq!(names, vec!["ZONE_A", "ZONE_C"]);
    }
}
