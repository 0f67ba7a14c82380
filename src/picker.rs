//! Category-grouped picker view derived from a catalog.
//!
//! Entries sharing a root collapse to the first one seen in catalog order, so
//! the picker shows each base emoji once. Modifiable roots are listed
//! separately so a UI can offer variant selection for them.

use crate::catalog::{Catalog, Emoji};
use crate::query::category_display_name;
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Serialize)]
/// Deduplicated, category-grouped view of a catalog.
pub struct Picker {
    /// Shortcodes of first-seen root entries that carry a modifier.
    pub modifiable_shorts: Vec<String>,
    /// Root shortcode to its first-seen entry.
    pub deduplicated_data: BTreeMap<String, Emoji>,
    /// Category to representative shortcodes, in first-seen order.
    ///
    /// Entries are the representative's own `short`, not keys of
    /// `deduplicated_data`: they differ from the root whenever the first entry
    /// seen for a root was a variant. Use [`Picker::representative`] to resolve.
    pub deduplicated_order: BTreeMap<String, Vec<String>>,
    /// Categories in first-seen order.
    pub cat_order: Vec<String>,
    #[serde(skip)]
    root_by_short: BTreeMap<String, String>,
}

impl Picker {
    /// Derive the picker in one pass over `catalog.order()`.
    pub fn build(catalog: &Catalog) -> Self {
        let mut picker = Picker::default();
        for short in catalog.order() {
            let Some(emoji) = catalog.lookup(short) else {
                warn!("catalog order references unknown shortcode '{short}'; skipping");
                continue;
            };
            if picker.deduplicated_data.contains_key(&emoji.root) {
                continue;
            }

            picker
                .deduplicated_data
                .insert(emoji.root.clone(), emoji.clone());
            picker
                .root_by_short
                .insert(emoji.short.clone(), emoji.root.clone());
            if emoji.is_modifiable() {
                picker.modifiable_shorts.push(emoji.short.clone());
            }
            if !picker.cat_order.contains(&emoji.cat) {
                picker.cat_order.push(emoji.cat.clone());
            }
            picker
                .deduplicated_order
                .entry(emoji.cat.clone())
                .or_default()
                .push(emoji.short.clone());
        }
        debug!(
            "built picker with {} roots across {} categories",
            picker.deduplicated_data.len(),
            picker.cat_order.len()
        );
        picker
    }

    /// Categories in display order with their title and entries.
    pub fn categories(
        &self,
    ) -> impl Iterator<Item = (&str, Option<&'static str>, Vec<&Emoji>)> + '_ {
        self.cat_order.iter().map(move |cat| {
            let emojis: Vec<&Emoji> = self
                .deduplicated_order
                .get(cat)
                .map(|shorts| {
                    shorts
                        .iter()
                        .filter_map(|short| self.representative(short))
                        .collect()
                })
                .unwrap_or_default();
            (cat.as_str(), category_display_name(cat), emojis)
        })
    }

    /// Resolve a bucket entry (a representative shortcode) to its record.
    pub fn representative(&self, short: &str) -> Option<&Emoji> {
        let root = self.root_by_short.get(short)?;
        self.deduplicated_data.get(root)
    }

    pub fn is_modifiable(&self, short: &str) -> bool {
        self.modifiable_shorts.iter().any(|candidate| candidate == short)
    }
}

/// Free-function form of [`Picker::build`].
pub fn build_picker(catalog: &Catalog) -> Picker {
    Picker::build(catalog)
}
