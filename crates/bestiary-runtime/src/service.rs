//! The entity service: everything a host embeds, wired together.
//!
//! [`EntityService`] owns the definition store, the live registry, the
//! entity clock and the ambient-spawn RNG, and exposes the handful of entry
//! points a host integration needs: the spawn paths, the administrative
//! surface (listing and reload), the event-bridge notifications, and the
//! engine tick boundary. The host engine itself is never owned -- every call
//! that touches the world borrows it for just that call.
//!
//! Lifecycle: [`start`](EntityService::start) once when the host enables the
//! extension, [`shutdown`](EntityService::shutdown) when it disables it
//! (stops the clock and empties the registry).

use rand::SeedableRng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use bestiary_core::active::HookVerdict;
use bestiary_core::catalog::KindCatalog;
use bestiary_core::engine::{HostEngine, Location, ObjectId};
use bestiary_core::registry::EntityRegistry;
use bestiary_core::store::{DefinitionStore, LoadSummary};
use bestiary_defs::DefsError;

use crate::bridge;
use crate::clock::{ClockConfig, EntityClock};
use crate::spawn::{self, SpawnError};

// ---------------------------------------------------------------------------
// ServiceConfig
// ---------------------------------------------------------------------------

/// Host-facing service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Engine ticks between behavior passes.
    pub clock_period: u32,
    /// Seed for the ambient-spawn RNG (deterministic across runs).
    pub ambient_seed: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            clock_period: 5,
            ambient_seed: 0x00b0_1dfa_ce5e_eded,
        }
    }
}

// ---------------------------------------------------------------------------
// EntityService
// ---------------------------------------------------------------------------

/// The assembled framework, one instance per host process.
pub struct EntityService {
    store: DefinitionStore,
    registry: EntityRegistry,
    clock: EntityClock,
    ambient_rng: Pcg64,
}

impl EntityService {
    /// A service with the built-in kind catalog.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_catalog(config, KindCatalog::builtin())
    }

    /// A service with a host-supplied catalog (extra variants registered).
    pub fn with_catalog(config: ServiceConfig, catalog: KindCatalog) -> Self {
        Self {
            store: DefinitionStore::new(catalog),
            registry: EntityRegistry::new(),
            clock: EntityClock::new(ClockConfig {
                period: config.clock_period,
            }),
            ambient_rng: Pcg64::seed_from_u64(config.ambient_seed),
        }
    }

    /// Load definitions and start the clock.
    ///
    /// A malformed document is surfaced to the caller, but the service still
    /// comes up (with an empty table) so a later [`reload`](Self::reload)
    /// can recover.
    pub fn start(&mut self, source: &str) -> Result<LoadSummary, DefsError> {
        info!("loading custom entities");
        let result = self.store.load(source);
        if let Err(error) = &result {
            error!(%error, "definition load failed; starting with no definitions");
        }
        self.clock.start();
        result
    }

    /// Stop the clock and drop every registry entry. Idempotent.
    pub fn shutdown(&mut self) {
        self.clock.stop();
        self.registry.clear();
        info!("entity service shut down");
    }

    // -- spawn requests -----------------------------------------------------

    /// Spawn the named definition at `location`.
    pub fn spawn(
        &mut self,
        engine: &mut dyn HostEngine,
        name: &str,
        location: Location,
    ) -> Result<ObjectId, SpawnError> {
        spawn::spawn(engine, &mut self.registry, &self.store, name, location)
    }

    /// Spawn a random definition at `location` (ambient world spawns).
    pub fn spawn_ambient(
        &mut self,
        engine: &mut dyn HostEngine,
        location: Location,
    ) -> Option<ObjectId> {
        spawn::spawn_ambient(
            engine,
            &mut self.registry,
            &self.store,
            &mut self.ambient_rng,
            location,
        )
    }

    // -- administrative surface ----------------------------------------------

    /// Sorted names of the currently loaded definitions.
    pub fn definition_names(&self) -> Vec<String> {
        self.store.names()
    }

    /// Re-load definitions, atomically swapping the published table.
    ///
    /// In-flight spawns complete against whichever snapshot they started
    /// with; a malformed document leaves the previous table in effect.
    pub fn reload(&mut self, source: &str) -> Result<LoadSummary, DefsError> {
        self.store.load(source)
    }

    // -- host notifications ---------------------------------------------------

    /// One engine tick boundary has passed.
    pub fn on_engine_tick(&mut self, engine: &mut dyn HostEngine) {
        self.clock.on_engine_tick(engine, &mut self.registry);
    }

    /// `attacker` is about to damage `victim`; returns whether the host
    /// should let the damage through.
    pub fn damage_occurred(
        &mut self,
        engine: &mut dyn HostEngine,
        attacker: ObjectId,
        victim: ObjectId,
    ) -> HookVerdict {
        bridge::damage_occurred(engine, &mut self.registry, attacker, victim)
    }

    /// `id` died or despawned.
    pub fn death_occurred(&mut self, id: ObjectId) {
        bridge::death_occurred(&mut self.registry, id);
    }

    // -- accessors -------------------------------------------------------------

    /// The live entity registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// The definition store.
    pub fn store(&self) -> &DefinitionStore {
        &self.store
    }

    /// Mutable store access (e.g. to register host kind variants before the
    /// initial load).
    pub fn store_mut(&mut self) -> &mut DefinitionStore {
        &mut self.store
    }

    /// The entity clock.
    pub fn clock(&self) -> &EntityClock {
        &self.clock
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
