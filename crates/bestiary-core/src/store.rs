//! The definition store: named, configured entity definitions.
//!
//! The store pairs the parsed document data from `bestiary-defs` with the
//! kind catalog. Loading parses the document (a malformed document aborts the
//! whole load and leaves the previous table in effect), configures a kind per
//! definition, skips definitions whose tag no variant answers to (with a
//! warning; the load otherwise proceeds), and then atomically swaps the
//! published table. Lookups hand out `Arc`s, so an in-flight spawn keeps
//! whatever snapshot it started with across a reload.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use bestiary_defs::attributes::AttributeBag;
use bestiary_defs::document::{fingerprint, DefinitionDocument};
use bestiary_defs::DefsError;

use crate::catalog::KindCatalog;
use crate::kind::EntityKind;

// ---------------------------------------------------------------------------
// StoredDefinition
// ---------------------------------------------------------------------------

/// One loaded, configured definition.
///
/// The entry owns the attribute bag; the kind instance borrowed it only
/// while configuring and is immutable afterwards, shared by every spawned
/// instance of this definition.
#[derive(Debug)]
pub struct StoredDefinition {
    pub name: String,
    pub tag: String,
    pub attributes: AttributeBag,
    pub kind: Arc<dyn EntityKind>,
}

// ---------------------------------------------------------------------------
// DefinitionTable
// ---------------------------------------------------------------------------

/// An immutable snapshot of every definition from one successful load.
#[derive(Debug, Default)]
pub struct DefinitionTable {
    defs: BTreeMap<String, Arc<StoredDefinition>>,
    fingerprint: String,
}

impl DefinitionTable {
    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<Arc<StoredDefinition>> {
        self.defs.get(name).map(Arc::clone)
    }

    /// Sorted definition names.
    pub fn names(&self) -> Vec<String> {
        self.defs.keys().cloned().collect()
    }

    /// BLAKE3 digest of the source this table was loaded from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// A uniformly chosen definition, `None` when the table is empty.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<Arc<StoredDefinition>> {
        if self.defs.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.defs.len());
        self.defs.values().nth(index).map(Arc::clone)
    }
}

// ---------------------------------------------------------------------------
// LoadSummary
// ---------------------------------------------------------------------------

/// A definition that was skipped because no variant answers to its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDefinition {
    pub name: String,
    pub tag: String,
}

/// Outcome of one successful load.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    /// Definitions now available for lookup.
    pub loaded: usize,
    /// Definitions excluded because their kind tag resolved to no variant.
    pub skipped: Vec<SkippedDefinition>,
    /// BLAKE3 digest of the loaded source.
    pub fingerprint: String,
}

// ---------------------------------------------------------------------------
// DefinitionStore
// ---------------------------------------------------------------------------

/// Loads and publishes entity definitions.
pub struct DefinitionStore {
    catalog: KindCatalog,
    table: Arc<DefinitionTable>,
}

impl DefinitionStore {
    /// A store with an empty table; call [`load`](Self::load) to populate it.
    pub fn new(catalog: KindCatalog) -> Self {
        Self {
            catalog,
            table: Arc::new(DefinitionTable::default()),
        }
    }

    /// Parse `source`, configure kinds, and atomically swap in the new table.
    ///
    /// A malformed document fails the whole call and leaves the previous
    /// table in effect. A definition with an unknown kind tag is skipped
    /// with a warning and the load proceeds without it.
    pub fn load(&mut self, source: &str) -> Result<LoadSummary, DefsError> {
        let document = DefinitionDocument::parse(source)?;
        let digest = fingerprint(source);

        let mut defs = BTreeMap::new();
        let mut skipped = Vec::new();
        for (name, raw) in document.iter() {
            let attributes = raw.attribute_bag();
            match self.catalog.build(&raw.kind, &attributes) {
                Some(kind) => {
                    defs.insert(
                        name.to_owned(),
                        Arc::new(StoredDefinition {
                            name: name.to_owned(),
                            tag: raw.kind.clone(),
                            attributes,
                            kind,
                        }),
                    );
                }
                None => {
                    warn!(name, tag = %raw.kind, "skipping definition with unknown kind");
                    skipped.push(SkippedDefinition {
                        name: name.to_owned(),
                        tag: raw.kind.clone(),
                    });
                }
            }
        }

        let loaded = defs.len();
        self.table = Arc::new(DefinitionTable {
            defs,
            fingerprint: digest.clone(),
        });
        info!(
            loaded,
            skipped = skipped.len(),
            fingerprint = %digest,
            "definition table published"
        );

        Ok(LoadSummary {
            loaded,
            skipped,
            fingerprint: digest,
        })
    }

    /// Look up a definition by name in the current table.
    pub fn get(&self, name: &str) -> Option<Arc<StoredDefinition>> {
        self.table.get(name)
    }

    /// Sorted names in the current table (the administrative listing).
    pub fn names(&self) -> Vec<String> {
        self.table.names()
    }

    /// A uniformly chosen definition from the current table.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<Arc<StoredDefinition>> {
        self.table.pick(rng)
    }

    /// Snapshot handle to the current table.
    pub fn table(&self) -> Arc<DefinitionTable> {
        Arc::clone(&self.table)
    }

    /// The catalog definitions are resolved against.
    pub fn catalog(&self) -> &KindCatalog {
        &self.catalog
    }

    /// Mutable catalog access, for hosts registering extra variants before a
    /// load.
    pub fn catalog_mut(&mut self) -> &mut KindCatalog {
        &mut self.catalog
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
