//! Indexed view of a decoded emoji list.
//!
//! `Catalog` keeps a shortcode-keyed map alongside the original decode order.
//! Duplicate shortcodes are not an error: the later entry replaces the earlier
//! one in the map, while `order` keeps one slot per input element.

use crate::catalog::model::Emoji;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
/// Emoji records keyed by shortcode plus their decode order.
pub struct Catalog {
    data: BTreeMap<String, Emoji>,
    order: Vec<String>,
}

impl Catalog {
    /// Build the index in one pass over `emojis`.
    pub fn build(emojis: Vec<Emoji>) -> Self {
        let mut data = BTreeMap::new();
        let mut order = Vec::with_capacity(emojis.len());
        for emoji in emojis {
            order.push(emoji.short.clone());
            if let Some(previous) = data.insert(emoji.short.clone(), emoji) {
                debug!("shortcode '{}' redefined; keeping later entry", previous.short);
            }
        }
        debug!(
            "built catalog with {} entries ({} unique shortcodes)",
            order.len(),
            data.len()
        );
        Self { data, order }
    }

    /// Resolve an entry by shortcode.
    pub fn lookup(&self, short: &str) -> Option<&Emoji> {
        self.data.get(short)
    }

    pub fn description(&self, short: &str) -> Option<&str> {
        self.lookup(short).map(|emoji| emoji.desc.as_str())
    }

    /// Shortcodes in decode order; duplicates appear once per occurrence.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Shortcode-keyed entries (last definition wins).
    pub fn data(&self) -> &BTreeMap<String, Emoji> {
        &self.data
    }

    /// Entries in decode order, each position resolved through the map.
    pub fn iter(&self) -> impl Iterator<Item = &Emoji> {
        self.order.iter().filter_map(|short| self.data.get(short))
    }

    /// Every distinct shortcode whose root is `root`, in first-seen order.
    pub fn variants<'a>(&'a self, root: &'a str) -> impl Iterator<Item = &'a Emoji> + 'a {
        let mut seen = BTreeSet::new();
        self.iter()
            .filter(move |&emoji| emoji.root == root && seen.insert(emoji.short.as_str()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Free-function form of [`Catalog::build`].
pub fn build_catalog(emojis: Vec<Emoji>) -> Catalog {
    Catalog::build(emojis)
}

pub fn lookup_by_short<'a>(short: &str, catalog: &'a Catalog) -> Option<&'a Emoji> {
    catalog.lookup(short)
}

pub fn description_by_short<'a>(short: &str, catalog: &'a Catalog) -> Option<&'a str> {
    catalog.description(short)
}
