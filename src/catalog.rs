//! Item catalog - the ordered, immutable list of selectable items.
//!
//! The catalog is generated once and shared behind an `Arc`. Positional
//! indices into it are the same indices the layout provider and the view use,
//! and the identity string is the only key the selection store ever sees.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub const SIZES: &[&str] = &["tiny", "small", "medium", "large", "huge"];

pub const FRUITS: &[&str] = &[
    "apple",
    "banana",
    "watermelon",
    "orange",
    "peach",
    "tangerine",
    "pear",
    "kiwi",
    "mango",
    "pineapple",
];

pub const COLORS: &[&str] = &[
    "navy", "blue", "aqua", "teal", "olive", "green", "lime", "yellow", "orange", "red", "maroon",
    "fuchsia", "purple", "silver", "gray", "black",
];

/// The fruit catalog, built on first access and shared for the process lifetime.
static FRUIT_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::fruits()));

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable name, e.g. "tiny navy apple"
    pub identity: String,
    /// Display attribute used for styling
    pub color_tag: String,
}

impl Item {
    pub fn new(identity: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            color_tag: color_tag.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_identity: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered item list.
    ///
    /// Identities must be unique; a later duplicate is dropped so that every
    /// identity maps to exactly one index.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            if catalog.by_identity.contains_key(&item.identity) {
                tracing::warn!(identity = %item.identity, "Dropping duplicate catalog identity");
                continue;
            }
            catalog
                .by_identity
                .insert(item.identity.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    /// Cartesian product size × fruit × color, named "size color fruit".
    pub fn fruits() -> Self {
        let items = SIZES.iter().flat_map(|size| {
            FRUITS.iter().flat_map(move |fruit| {
                COLORS
                    .iter()
                    .map(move |color| Item::new(format!("{size} {color} {fruit}"), *color))
            })
        });
        Self::new(items)
    }

    /// The shared fruit catalog.
    pub fn shared_fruits() -> Arc<Catalog> {
        Arc::clone(&FRUIT_CATALOG)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn index_of(&self, identity: &str) -> Option<usize> {
        self.by_identity.get(identity).copied()
    }

    pub fn find(&self, identity: &str) -> Option<&Item> {
        self.index_of(identity).and_then(|index| self.items.get(index))
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.by_identity.contains_key(identity)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.identity.as_str())
    }
}
