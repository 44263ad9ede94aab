//! Zone extraction command handler
//!
//! Reads a GLB model, extracts prefixed nodes and writes the JSON report
//! and the viewer's TypeScript snippet.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use glb_zones::{snippet, ZoneRecord, ZoneReport, REPORT_FILE, SNIPPET_FILE};

use crate::config::Config;

/// Resolved options for one extraction run
#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub json_only: bool,
}

/// Files produced by a run that found zones
#[derive(Debug)]
pub struct Written {
    pub zones: usize,
    pub report: PathBuf,
    pub snippet: Option<PathBuf>,
}

/// Handle `extract` command
pub fn handle(
    input: &Path,
    output_dir: Option<&Path>,
    prefix: Option<&str>,
    json_only: bool,
) -> Result<()> {
    let config = Config::load()?;
    let options = Options {
        input: input.to_path_buf(),
        output_dir: config.resolve_output_dir(output_dir),
        prefix: config.resolve_prefix(prefix),
        json_only,
    };

    if let Some(written) = run(&options)? {
        println!("Found {} zone(s)", written.zones);
        println!("Saved to: {}", written.report.display());
        if let Some(path) = written.snippet {
            println!("Saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Extract zones and write outputs; `None` when the model has no zones
pub fn run(options: &Options) -> Result<Option<Written>> {
    let input = &options.input;
    tracing::info!("Reading {}", input.display());

    let doc = glb_zones::read_file(input)
        .with_context(|| format!("Failed to read GLB model {}", input.display()))?;
    tracing::info!(
        "Found {} total nodes, looking for {} objects",
        doc.nodes.len(),
        options.prefix
    );

    let zones = glb_zones::extract(&doc, &options.prefix);
    for zone in &zones {
        log_zone(zone);
    }

    if zones.is_empty() {
        tracing::warn!("No {} objects found in {}", options.prefix, input.display());
        tracing::warn!(
            "Make sure marker empties are named like {}MainHall, {}HallA",
            options.prefix,
            options.prefix
        );
        return Ok(None);
    }

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("Failed to create output directory {}", options.output_dir.display())
    })?;

    let report_path = options.output_dir.join(REPORT_FILE);
    ZoneReport::new(model_file_name(input), &zones)
        .write(&report_path)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    let snippet_path = if options.json_only {
        None
    } else {
        let path = options.output_dir.join(SNIPPET_FILE);
        fs::write(&path, snippet::typescript(&zones))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Some(path)
    };

    Ok(Some(Written {
        zones: zones.len(),
        report: report_path,
        snippet: snippet_path,
    }))
}

fn log_zone(zone: &ZoneRecord) {
    let raw = zone.raw_position;
    tracing::info!(
        "Found {} ({}) at X={:.3}, Y={:.3}, Z={:.3}",
        zone.original_name,
        zone.id,
        raw.x,
        raw.y,
        raw.z
    );
}

/// File name recorded in the report, without the directory
fn model_file_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_glb(path: &Path, json: &str) {
        let mut payload = json.as_bytes().to_vec();
        while payload.len() % 4 != 0 {
            payload.push(b' ');
        }
        let total = 20 + payload.len();

        let mut data = Vec::with_capacity(total);
        data.extend_from_slice(b"glTF");
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&(total as u32).to_le_bytes());
        data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        data.extend_from_slice(b"JSON");
        data.extend_from_slice(&payload);
        fs::write(path, data).unwrap();
    }

    fn venue_json() -> String {
        json!({
            "nodes": [
                { "name": "Ground", "translation": [0, 0, 0] },
                { "name": "ZONE_MainHall", "translation": [1, 2, 3] },
                { "name": "Camera1", "translation": [5, 5, 5] },
                { "name": "ZONE_Hall_A", "translation": [4, 0, 6] }
            ]
        })
        .to_string()
    }

    fn options(dir: &Path, input: PathBuf) -> Options {
        Options {
            input,
            output_dir: dir.join("out"),
            prefix: glb_zones::DEFAULT_PREFIX.to_string(),
            json_only: false,
        }
    }

    #[test]
    fn test_run_writes_outputs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("SM_MFF.glb");
        write_glb(&input, &venue_json());

        let written = run(&options(temp_dir.path(), input)).unwrap().unwrap();
        assert_eq!(written.zones, 2);

        let report = ZoneReport::read(&written.report).unwrap();
        assert_eq!(report.model_file, "SM_MFF.glb");
        assert_eq!(report.zones[1].display_name, "Hall A");
        assert_eq!(report.zones[1].position, glb_zones::Vec3::new(4.0, 6.0, 0.0));

        let ts = fs::read_to_string(written.snippet.unwrap()).unwrap();
        assert!(ts.starts_with("export const zones: Zone[] = ["));
        assert!(ts.contains("name: 'Hall A'"));
        assert!(ts.contains("position: [1.0, 3.0, 2.0]"));
    }

    #[test]
    fn test_run_json_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("model.glb");
        write_glb(&input, &venue_json());

        let mut opts = options(temp_dir.path(), input);
        opts.json_only = true;

        let written = run(&opts).unwrap().unwrap();
        assert!(written.snippet.is_none());
        assert!(written.report.exists());
        assert!(!opts.output_dir.join(SNIPPET_FILE).exists());
    }

    #[test]
    fn test_run_no_zones_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("empty.glb");
        write_glb(&input, r#"{"nodes":[{"name":"Ground"}]}"#);

        let opts = options(temp_dir.path(), input);
        assert!(run(&opts).unwrap().is_none());
        assert!(!opts.output_dir.exists());
    }

    #[test]
    fn test_run_custom_prefix() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("model.glb");
        write_glb(&input, r#"{"nodes":[{"name":"ZONE_A"},{"name":"POI_Stage"}]}"#);

        let mut opts = options(temp_dir.path(), input);
        opts.prefix = "POI_".to_string();

        let written = run(&opts).unwrap().unwrap();
        assert_eq!(written.zones, 1);
    }

    #[test]
    fn test_run_errors() {
        let temp_dir = tempfile::tempdir().unwrap();

        let missing = temp_dir.path().join("missing.glb");
        let err = run(&options(temp_dir.path(), missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read GLB model"));

        let corrupt = temp_dir.path().join("corrupt.glb");
        fs::write(&corrupt, b"glTF\x02\x00").unwrap();
        let err = run(&options(temp_dir.path(), corrupt)).unwrap_err();
        let format = err
            .downcast_ref::<glb_zones::Error>()
            .expect("library error in chain");
        assert!(format.is_format());
    }

    #[test]
    fn test_model_file_name() {
        assert_eq!(model_file_name(Path::new("/models/SM_MFF.glb")), "SM_MFF.glb");
        assert_eq!(model_file_name(Path::new("venue.glb")), "venue.glb");
    }
}
