//! Inspect command handler

use anyhow::{Context, Result};
use std::fmt::Write;
use std::fs;
use std::path::Path;

use glb_zones::{ChunkType, Summary};

use crate::config::Config;

/// Handle `inspect` command
pub fn handle(input: &Path, prefix: Option<&str>) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let prefix = Config::load()?.resolve_prefix(prefix);

    let summary = Summary::from_bytes(&data)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    print!("{}", render(&summary, &prefix));
    Ok(())
}

fn chunk_label(kind: ChunkType) -> String {
    match kind {
        ChunkType::Json => "JSON".to_string(),
        ChunkType::Bin => "BIN".to_string(),
        ChunkType::Other(tag) => format!("unknown {}", glb_zones::Tag(tag)),
    }
}

/// Human-readable summary of the container and its scene
fn render(summary: &Summary, prefix: &str) -> String {
    let mut out = String::new();
    let header = summary.header;
    let doc = &summary.document;

    let _ = writeln!(out, "GLB version: {}", header.version);
    let _ = write!(out, "Declared length: {} bytes", header.length);
    if header.length as usize != summary.actual_length {
        let _ = write!(out, " (file is {} bytes)", summary.actual_length);
    }
    out.push('\n');

    let _ = writeln!(out, "Chunks:");
    for (i, chunk) in summary.chunks.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{}] {}: {} bytes",
            i,
            chunk_label(chunk.kind),
            chunk.length
        );
    }

    if let Some(asset) = &doc.asset {
        if let Some(version) = &asset.version {
            let _ = writeln!(out, "glTF asset version: {}", version);
        }
        if let Some(generator) = &asset.generator {
            let _ = writeln!(out, "Generator: {}", generator);
        }
        if let Some(copyright) = &asset.copyright {
            let _ = writeln!(out, "Copyright: {}", copyright);
        }
    }

    let _ = writeln!(
        out,
        "Scenes: {}, meshes: {}, cameras: {}",
        doc.scene_count(),
        doc.mesh_count(),
        doc.camera_count()
    );
    if let Some(scene) = doc.scene {
        let _ = writeln!(out, "Default scene: {}", scene);
    }
    let _ = writeln!(
        out,
        "Nodes: {} ({} with mesh, {} with camera)",
        doc.nodes.len(),
        doc.nodes.iter().filter(|node| node.mesh.is_some()).count(),
        doc.nodes.iter().filter(|node| node.camera.is_some()).count()
    );
    let _ = writeln!(
        out,
        "Zones ({}*): {}",
        prefix,
        doc.named_with_prefix(prefix).count()
    );

    out
}
