//! Synthetic GLB builders for tests

use serde_json::json;

/// Build a GLB with a JSON chunk and an optional BIN chunk
///
/// The JSON payload is space-padded and the BIN payload zero-padded to
/// four-byte alignment, as a conforming writer would do.
pub fn build_glb_with_bin(json: &str, bin: Option<&[u8]>) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }

    let bin_bytes = bin.map(|data| {
        let mut data = data.to_vec();
        while data.len() % 4 != 0 {
            data.push(0);
        }
        data
    });

    let total = 12 + 8 + json_bytes.len() + bin_bytes.as_ref().map_or(0, |b| 8 + b.len());

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json_bytes);

    if let Some(bin) = bin_bytes {
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin);
    }

    out
}

pub fn build_glb(json: &str) -> Vec<u8> {
    build_glb_with_bin(json, None)
}

/// Scene JSON with one node per `(name, translation)` pair
pub fn scene_json(nodes: &[(&str, [f64; 3])]) -> String {
    let nodes: Vec<_> = nodes
        .iter()
        .map(|(name, t)| json!({ "name": name, "translation": t }))
        .collect();

    json!({
        "asset": { "version": "2.0", "generator": "test" },
        "nodes": nodes,
    })
    .to_string()
}

/// The four-node venue scene used across the pipeline tests
pub fn venue_glb() -> Vec<u8> {
    build_glb(&scene_json(&[
        ("Ground", [0.0, 0.0, 0.0]),
        ("ZONE_MainHall", [1.0, 2.0, 3.0]),
        ("Camera1", [5.0, 5.0, 5.0]),
        ("ZONE_HallA", [4.0, 0.0, 6.0]),
    ]))
}
