//! Mutant Standard emoji catalog.
//!
//! Decodes the published emoji metadata (a JSON array of entries) into typed
//! records, indexes them by shortcode while keeping decode order, and derives
//! a deduplicated, category-grouped picker view. Everything here is pure and
//! in-memory: fetching the JSON and rendering images are left to callers.
//!
//! Data flows one way: raw JSON → `Vec<Emoji>` → `Catalog` → `Picker`.

pub mod catalog;
pub mod modifiers;
pub mod picker;
pub mod query;
pub mod schema_loader;
pub mod validation;

pub use catalog::{
    Catalog, CatalogError, CatalogResult, Emoji, build_catalog, check_pairing, decode_catalog,
    decode_catalog_str, decode_emoji, description_by_short, load_catalog_from_path,
    lookup_by_short,
};
pub use modifiers::{Color, ColorModifier, Morph, Palette, is_valid_pairing};
pub use picker::{Picker, build_picker};
pub use query::{category_display_name, is_in_private_use_area, known_categories};
pub use schema_loader::{check_document_shape, check_document_shape_with};
pub use validation::validate_modifier_pairings;
