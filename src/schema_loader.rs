//! JSON Schema shape check for raw catalog documents.
//!
//! The decoder stops at the first bad entry; this check walks the whole
//! document and reports every violation, which is what tooling wants when a
//! freshly fetched catalog fails to load.

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use log::debug;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const EMBEDDED_CATALOG_SCHEMA: &str = include_str!("../schema/emoji_catalog.schema.json");

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub title: Option<String>,
    pub compiled: JSONSchema,
}

/// Compile the schema shipped with the crate.
pub(crate) fn load_embedded_schema() -> Result<SchemaLoadResult> {
    let raw: Value =
        serde_json::from_str(EMBEDDED_CATALOG_SCHEMA).context("parsing embedded catalog schema")?;
    compile(raw, "embedded catalog schema")
}

/// Compile a schema read from disk.
pub(crate) fn load_json_schema(path: &Path) -> Result<SchemaLoadResult> {
    let raw: Value = serde_json::from_reader(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    )
    .with_context(|| format!("parsing schema {}", path.display()))?;
    compile(raw, &path.display().to_string())
}

fn compile(raw: Value, label: &str) -> Result<SchemaLoadResult> {
    let compiled =
        JSONSchema::compile(&raw).map_err(|err| anyhow!("compiling schema {label}: {err}"))?;
    let title = raw.get("title").and_then(Value::as_str).map(str::to_string);
    Ok(SchemaLoadResult { title, compiled })
}

fn violations(schema: &SchemaLoadResult, document: &Value) -> Vec<String> {
    debug!(
        "checking document against {}",
        schema.title.as_deref().unwrap_or("untitled schema")
    );
    match schema.compiled.validate(document) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|err| {
                let path = err.instance_path.to_string();
                let path = if path.is_empty() { "/".to_string() } else { path };
                format!("{path}: {err}")
            })
            .collect(),
    }
}

/// Validate a raw catalog document against the embedded schema.
///
/// Returns one `"<instance path>: <message>"` string per violation; an empty
/// vector means the document has the expected shape.
pub fn check_document_shape(document: &Value) -> Result<Vec<String>> {
    let schema = load_embedded_schema()?;
    Ok(violations(&schema, document))
}

/// Same as [`check_document_shape`] with a caller-supplied schema file.
pub fn check_document_shape_with(schema_path: &Path, document: &Value) -> Result<Vec<String>> {
    let schema = load_json_schema(schema_path)?;
    Ok(violations(&schema, document))
}
