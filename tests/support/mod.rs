use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn sample_catalog_text() -> String {
    let path = fixture_path("sample_catalog.json");
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("unable to read fixture {}: {err}", path.display()))
}

pub fn sample_document() -> Value {
    serde_json::from_str(&sample_catalog_text()).expect("fixture is valid JSON")
}

/// Write `document` to a temp file the caller keeps alive for the test.
pub fn write_temp_catalog(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer(&mut file, document)?;
    file.flush()?;
    Ok(file)
}

/// Path to a binary built from this package for the integration run.
pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "emoji-catalog" => PathBuf::from(env!("CARGO_BIN_EXE_emoji-catalog")),
        other => panic!("unknown helper binary {other}"),
    };
    assert!(path.is_file(), "helper {} not built", path.display());
    path
}

/// Run `cmd` to completion without requiring success.
pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

/// Write arbitrary JSON (a schema, a document) to a temp file.
pub fn write_temp_json(value: &Value) -> Result<NamedTempFile> {
    write_temp_catalog(value)
}
