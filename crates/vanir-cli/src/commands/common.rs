//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use vanir_hal::ProgramInfo;

/// Load a compiled program from a file.
///
/// The payload stays opaque: JSON files are embedded as parsed JSON, any
/// other content as a string. The program name is the file stem.
pub fn load_program(path: &str) -> Result<ProgramInfo> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let name = path_obj.file_stem().map_or_else(
        || "program".to_string(),
        |s| s.to_string_lossy().to_string(),
    );

    let payload = serde_json::from_str(&contents)
        .unwrap_or_else(|_| serde_json::Value::String(contents));

    Ok(ProgramInfo::new(name, payload))
}
