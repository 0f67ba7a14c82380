//! Opt-in consistency checks over a decoded catalog.
//!
//! Decoding accepts any morph/color combination the code tables recognize.
//! These helpers let tooling report entries whose pairing is not allowed
//! without making the decoder stricter.

use crate::catalog::{Catalog, check_pairing};
use std::collections::BTreeSet;

/// One message per entry whose morph/color pairing is invalid.
pub fn validate_modifier_pairings(catalog: &Catalog) -> Vec<String> {
    // Collect every problem instead of stopping at the first so callers can
    // report the whole set at once.
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();
    for emoji in catalog.iter() {
        if !seen.insert(emoji.short.as_str()) {
            continue;
        }
        if let Err(err) = check_pairing(emoji) {
            errors.push(err.to_string());
        }
    }
    errors
}
