//! The spawn request path.
//!
//! Spawning resolves a named definition, asks the engine for a raw object of
//! the definition's species, stamps the kind's fields onto it, releases it
//! into the live world, and only then records the registry entry -- a failed
//! attempt never leaves a partial entry behind. Spawns are one-shot: no step
//! is retried.

use rand::Rng;
use tracing::{debug, warn};

use bestiary_core::engine::{HostEngine, InstantiationError, Location, ObjectId};
use bestiary_core::registry::EntityRegistry;
use bestiary_core::store::{DefinitionStore, StoredDefinition};

// ---------------------------------------------------------------------------
// SpawnError
// ---------------------------------------------------------------------------

/// Why a spawn request produced no entity.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    /// No definition answers to the requested name. A normal negative
    /// result, surfaced to the caller.
    #[error("no entity definition named '{name}'")]
    NotFound {
        name: String,
    },

    /// The engine refused to create or release the object.
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),
}

// ---------------------------------------------------------------------------
// Spawn paths
// ---------------------------------------------------------------------------

/// Spawn the named definition at `location`.
pub fn spawn(
    engine: &mut dyn HostEngine,
    registry: &mut EntityRegistry,
    store: &DefinitionStore,
    name: &str,
    location: Location,
) -> Result<ObjectId, SpawnError> {
    let definition = store.get(name).ok_or_else(|| SpawnError::NotFound {
        name: name.to_owned(),
    })?;
    spawn_definition(engine, registry, &definition, location)
}

/// Spawn an already-resolved definition at `location`.
///
/// Callers that hold a definition snapshot (e.g. across a reload) spawn
/// against that snapshot regardless of what the store currently publishes.
pub fn spawn_definition(
    engine: &mut dyn HostEngine,
    registry: &mut EntityRegistry,
    definition: &StoredDefinition,
    location: Location,
) -> Result<ObjectId, SpawnError> {
    let mut object = engine.instantiate(location, definition.kind.species())?;
    definition.kind.apply(object.as_mut());
    let id = engine.release(object)?;

    registry.register(
        id,
        std::sync::Arc::clone(&definition.kind),
        definition.kind.behavior(),
    );
    debug!(%id, name = %definition.name, "spawned custom entity");
    Ok(id)
}

/// Spawn a uniformly chosen definition at `location` (ambient world spawns).
///
/// An empty definition table is a quiet no-op; a failed attempt is logged
/// and swallowed, since ambient spawning has no caller to answer to.
pub fn spawn_ambient<R: Rng>(
    engine: &mut dyn HostEngine,
    registry: &mut EntityRegistry,
    store: &DefinitionStore,
    rng: &mut R,
    location: Location,
) -> Option<ObjectId> {
    let definition = store.pick(rng)?;
    match spawn_definition(engine, registry, &definition, location) {
        Ok(id) => Some(id),
        Err(error) => {
            warn!(name = %definition.name, %error, "ambient spawn failed");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use bestiary_core::catalog::KindCatalog;
    use bestiary_core::engine::{EngineObject, Species};
    use bestiary_core::sim::SimWorld;
    use rand::SeedableRng;

    const DOC: &str = r#"{
        "fast_llama": { "kind": "llama", "attributes": { "strength": 9, "color": "BROWN" } },
        "plain_boss": { "kind": "wither" }
    }"#;

    fn loaded_store() -> DefinitionStore {
        let mut store = DefinitionStore::new(KindCatalog::builtin());
        store.load(DOC).unwrap();
        store
    }

    // -- 1. Happy path ---------------------------------------------------------

    #[test]
    fn spawn_configures_and_registers() {
        let mut sim = SimWorld::new();
        let mut registry = EntityRegistry::new();
        let store = loaded_store();

        let id = spawn(&mut sim, &mut registry, &store, "fast_llama", Location::default()).unwrap();

        let record = sim.record(id).unwrap();
        assert_eq!(record.species(), Species::Llama);
        assert_eq!(record.llama_strength, Some(5));

        let entry = registry.lookup(id).unwrap();
        assert!(Arc::ptr_eq(
            &entry.kind,
            &store.get("fast_llama").unwrap().kind
        ));
    }

    // -- 2. Unknown names are a negative result ---------------------------------

    #[test]
    fn unknown_name_is_not_found() {
        let mut sim = SimWorld::new();
        let mut registry = EntityRegistry::new();
        let store = loaded_store();

        let err = spawn(&mut sim, &mut registry, &store, "slow_llama", Location::default())
            .unwrap_err();
        assert!(matches!(err, SpawnError::NotFound { .. }));
        assert!(registry.is_empty());
    }

    // -- 3. Engine refusal leaves no partial entry -------------------------------

    #[test]
    fn instantiation_failure_registers_nothing() {
        let mut sim = SimWorld::new();
        sim.refuse(Species::Wither);
        let mut registry = EntityRegistry::new();
        let store = loaded_store();

        let err = spawn(&mut sim, &mut registry, &store, "plain_boss", Location::default())
            .unwrap_err();
        assert!(matches!(err, SpawnError::Instantiation(_)));
        assert!(registry.is_empty());
        assert_eq!(sim.live_count(), 0);
    }

    #[test]
    fn release_failure_registers_nothing() {
        let mut sim = SimWorld::new();
        sim.refuse_release(true);
        let mut registry = EntityRegistry::new();
        let store = loaded_store();

        let err = spawn(&mut sim, &mut registry, &store, "plain_boss", Location::default())
            .unwrap_err();
        assert!(matches!(err, SpawnError::Instantiation(_)));
        assert!(registry.is_empty());
    }

    // -- 4. Ambient spawning ------------------------------------------------------

    #[test]
    fn ambient_spawn_picks_a_definition() {
        let mut sim = SimWorld::new();
        let mut registry = EntityRegistry::new();
        let store = loaded_store();
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1);

        let id = spawn_ambient(&mut sim, &mut registry, &store, &mut rng, Location::default())
            .unwrap();
        assert!(registry.lookup(id).is_some());
    }

    #[test]
    fn ambient_spawn_on_empty_table_is_quiet() {
        let mut sim = SimWorld::new();
        let mut registry = EntityRegistry::new();
        let store = DefinitionStore::new(KindCatalog::builtin());
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1);

        assert!(
            spawn_ambient(&mut sim, &mut registry, &store, &mut rng, Location::default()).is_none()
        );
        assert!(registry.is_empty());
    }
}
