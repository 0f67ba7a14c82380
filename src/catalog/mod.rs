//! Emoji catalog decoding and indexing.
//!
//! `model` turns raw JSON entries into `Emoji` records, `index` builds the
//! shortcode-keyed `Catalog` that keeps decode order, and `error` holds the
//! typed failures both report. `load_catalog_from_path` strings them together
//! for callers that start from a file.

pub mod error;
pub mod index;
pub mod model;

pub use error::{CatalogError, CatalogResult};
pub use index::{Catalog, build_catalog, description_by_short, lookup_by_short};
pub use model::{Emoji, check_pairing, decode_catalog, decode_catalog_str, decode_emoji};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read, decode, and index a catalog document from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let emojis =
        decode_catalog_str(&data).with_context(|| format!("decoding {}", path.display()))?;
    Ok(Catalog::build(emojis))
}
