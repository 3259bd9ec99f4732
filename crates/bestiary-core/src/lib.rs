//! Bestiary Core -- the data-driven entity framework.
//!
//! This crate turns declarative definitions (from `bestiary-defs`) into
//! configured, spawnable entity kinds and tracks the live population. The
//! host game engine stays behind the narrow [`engine::HostEngine`] surface;
//! everything here orchestrates it rather than reimplementing it.
//!
//! # Quick Start
//!
//! ```
//! use bestiary_core::prelude::*;
//!
//! let mut store = DefinitionStore::new(KindCatalog::builtin());
//! store
//!     .load(r#"{ "fast_llama": { "kind": "llama", "attributes": { "strength": 9 } } }"#)
//!     .unwrap();
//!
//! let definition = store.get("fast_llama").unwrap();
//!
//! // Configure a world object through the in-memory reference engine.
//! let mut sim = SimWorld::new();
//! let mut raw = sim
//!     .instantiate(Location::default(), definition.kind.species())
//!     .unwrap();
//! definition.kind.apply(raw.as_mut());
//! let id = sim.release(raw).unwrap();
//!
//! // Strength 9 was clamped into the legal range.
//! assert_eq!(sim.record(id).unwrap().llama_strength, Some(5));
//! ```

#![deny(unsafe_code)]

pub mod active;
pub mod catalog;
pub mod engine;
pub mod kind;
pub mod kinds;
pub mod registry;
pub mod sim;
pub mod store;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::active::{ActiveBehavior, BehaviorSet, DamageShield, HookVerdict, MountRecovery};
    pub use crate::catalog::{KindBuilder, KindCatalog};
    pub use crate::engine::{
        DyeColor, EngineObject, HostEngine, InstantiationError, LlamaColor, Location, ObjectId,
        Species,
    };
    pub use crate::kind::EntityKind;
    pub use crate::kinds::{
        CommonProfile, DonkeyKind, GenericKind, LlamaKind, MountProfile, ShulkerKind, WitherKind,
    };
    pub use crate::registry::{EntityRegistry, RegistryEntry};
    pub use crate::sim::{SimObject, SimWorld};
    pub use crate::store::{
        DefinitionStore, DefinitionTable, LoadSummary, SkippedDefinition, StoredDefinition,
    };

    pub use bestiary_defs::attributes::{AttrValue, AttributeBag};
    pub use bestiary_defs::DefsError;
}
