//! The live entity registry.
//!
//! The registry maps a spawned object's identity to the kind that governs it
//! and to its optional behavior state. An entry exists exactly while the
//! object is live in the simulation: entries are inserted on successful
//! spawn, removed on death notifications, and pruned by the entity clock
//! when a backing object silently disappears.
//!
//! All mutation happens from the single simulation thread (the registry is
//! the framework's only shared mutable state), so there is no internal
//! locking and read-after-write is always consistent. A reimplementation
//! that introduces threads must funnel every mutation through one
//! coordination point to keep that invariant.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bestiary_core::engine::ObjectId;
//! use bestiary_core::kind::EntityKind;
//! use bestiary_core::kinds::WitherKind;
//! use bestiary_core::registry::EntityRegistry;
//! use bestiary_defs::attributes::AttributeBag;
//!
//! let kind = Arc::new(WitherKind::configure(&AttributeBag::absent()));
//! let mut registry = EntityRegistry::new();
//! let id = ObjectId::new(1);
//!
//! registry.register(id, kind.clone(), kind.behavior());
//! assert!(registry.lookup(id).is_some());
//!
//! registry.unregister(id);
//! assert!(registry.lookup(id).is_none());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::active::ActiveBehavior;
use crate::engine::ObjectId;
use crate::kind::EntityKind;

// ---------------------------------------------------------------------------
// RegistryEntry
// ---------------------------------------------------------------------------

/// What the registry knows about one spawned entity.
#[derive(Debug)]
pub struct RegistryEntry {
    /// The shared, immutable kind that configured this entity.
    pub kind: Arc<dyn EntityKind>,
    /// Per-instance behavior state, present only for active entities.
    pub behavior: Option<Box<dyn ActiveBehavior>>,
}

impl RegistryEntry {
    /// Whether this entry participates in behavior passes.
    pub fn is_active(&self) -> bool {
        self.behavior.is_some()
    }
}

// ---------------------------------------------------------------------------
// EntityRegistry
// ---------------------------------------------------------------------------

/// Live mapping from spawned-object identity to governing kind and behavior.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entries: HashMap<ObjectId, RegistryEntry>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or overwrite) the entry for `id`.
    pub fn register(
        &mut self,
        id: ObjectId,
        kind: Arc<dyn EntityKind>,
        behavior: Option<Box<dyn ActiveBehavior>>,
    ) {
        self.entries.insert(id, RegistryEntry { kind, behavior });
    }

    /// Remove the entry for `id`. Idempotent: removing a missing id is a
    /// no-op and returns `false`.
    pub fn unregister(&mut self, id: ObjectId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Look up the entry for a live spawned object.
    pub fn lookup(&self, id: ObjectId) -> Option<&RegistryEntry> {
        self.entries.get(&id)
    }

    /// Mutable lookup, used by the clock and event bridge to drive behavior.
    pub fn lookup_mut(&mut self, id: ObjectId) -> Option<&mut RegistryEntry> {
        self.entries.get_mut(&id)
    }

    /// Lazy iteration over entries that carry behavior. Restarts per call.
    pub fn active(&self) -> impl Iterator<Item = (ObjectId, &RegistryEntry)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_active())
            .map(|(id, entry)| (*id, entry))
    }

    /// Snapshot of active ids, taken by the clock before a pass so entries
    /// can be pruned mid-pass without invalidating the iteration.
    pub fn active_ids(&self) -> Vec<ObjectId> {
        self.active().map(|(id, _)| id).collect()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Called on service teardown.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
