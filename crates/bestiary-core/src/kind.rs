//! The entity-kind contract.
//!
//! A kind is one variant of spawnable creature: it consumed an attribute bag
//! at configuration time, holds typed validated fields, and knows which
//! species to request from the engine and how to stamp its fields onto a
//! freshly instantiated object. Configured kinds are immutable and shared
//! (`Arc`) between the definition store and every spawned instance.

use std::fmt;

use crate::active::ActiveBehavior;
use crate::engine::{EngineObject, Species};

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// One configured entity-kind variant.
///
/// Implementations are constructed by a `configure(&AttributeBag)` associated
/// function (the bag is only borrowed for that call) and are read-only
/// afterwards, so a single instance may safely configure any number of
/// spawned objects.
pub trait EntityKind: fmt::Debug + 'static {
    /// The kind tag this variant answers to in definition documents.
    fn tag(&self) -> &'static str;

    /// Which species the engine should instantiate for this kind.
    fn species(&self) -> Species;

    /// Stamp this kind's typed fields onto a raw object.
    ///
    /// Variants that compose shared profiles call through to them here, so
    /// the object is fully configured when this returns.
    fn apply(&self, object: &mut dyn EngineObject);

    /// Fresh behavior state for one spawned instance, `None` when this kind
    /// has no ongoing behavior.
    fn behavior(&self) -> Option<Box<dyn ActiveBehavior>> {
        None
    }
}
