//! The kind catalog: mapping kind tags to variant builders.
//!
//! Definition documents name their variant by tag (`"llama"`, `"wither"`,
//! ...). The catalog resolves a tag to a builder that configures a fresh kind
//! instance from an attribute bag. Hosts can register additional variants
//! next to the built-in set.

use std::collections::BTreeMap;
use std::sync::Arc;

use bestiary_defs::attributes::AttributeBag;

use crate::kind::EntityKind;
use crate::kinds::{DonkeyKind, GenericKind, LlamaKind, ShulkerKind, WitherKind};

/// Builds a configured kind instance from an attribute bag.
pub type KindBuilder = fn(&AttributeBag) -> Arc<dyn EntityKind>;

fn build_generic(bag: &AttributeBag) -> Arc<dyn EntityKind> {
    Arc::new(GenericKind::configure(bag))
}

fn build_llama(bag: &AttributeBag) -> Arc<dyn EntityKind> {
    Arc::new(LlamaKind::configure(bag))
}

fn build_donkey(bag: &AttributeBag) -> Arc<dyn EntityKind> {
    Arc::new(DonkeyKind::configure(bag))
}

fn build_shulker(bag: &AttributeBag) -> Arc<dyn EntityKind> {
    Arc::new(ShulkerKind::configure(bag))
}

fn build_wither(bag: &AttributeBag) -> Arc<dyn EntityKind> {
    Arc::new(WitherKind::configure(bag))
}

// ---------------------------------------------------------------------------
// KindCatalog
// ---------------------------------------------------------------------------

/// Registry of kind builders, keyed by tag.
#[derive(Debug, Clone, Default)]
pub struct KindCatalog {
    builders: BTreeMap<String, KindBuilder>,
}

impl KindCatalog {
    /// An empty catalog with no variants at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog with the built-in variants registered.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.register("generic", build_generic);
        catalog.register("llama", build_llama);
        catalog.register("donkey", build_donkey);
        catalog.register("shulker", build_shulker);
        catalog.register("wither", build_wither);
        catalog
    }

    /// Register (or replace) the builder for a tag.
    pub fn register(&mut self, tag: impl Into<String>, builder: KindBuilder) {
        self.builders.insert(tag.into(), builder);
    }

    /// Whether a tag resolves to a known variant.
    pub fn knows(&self, tag: &str) -> bool {
        self.builders.contains_key(tag)
    }

    /// Build a configured kind for `tag`, `None` if the tag is unknown.
    pub fn build(&self, tag: &str, attributes: &AttributeBag) -> Option<Arc<dyn EntityKind>> {
        self.builders.get(tag).map(|builder| builder(attributes))
    }

    /// All registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
