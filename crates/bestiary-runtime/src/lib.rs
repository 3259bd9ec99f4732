//! Bestiary Runtime -- the service layer a game server embeds.
//!
//! This crate assembles the framework from `bestiary-core` into something a
//! host integration can drive: an [`EntityService`](service::EntityService)
//! owning the definition store, registry and entity clock, plus the event
//! bridge and spawn paths it delegates to.
//!
//! # Quick Start
//!
//! ```
//! use bestiary_runtime::prelude::*;
//!
//! let mut sim = SimWorld::new();
//! let mut service = EntityService::new(ServiceConfig::default());
//! service
//!     .start(r#"{ "fast_llama": { "kind": "llama", "attributes": { "strength": 9 } } }"#)
//!     .unwrap();
//!
//! let id = service.spawn(&mut sim, "fast_llama", Location::default()).unwrap();
//! assert!(service.registry().lookup(id).is_some());
//!
//! // The host reports tick boundaries; every fifth one runs a behavior pass.
//! service.on_engine_tick(&mut sim);
//! assert_eq!(service.clock().passes_run(), 1);
//!
//! service.shutdown();
//! ```

#![deny(unsafe_code)]

pub mod bridge;
pub mod clock;
pub mod service;
pub mod spawn;
pub mod telemetry;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the core crate for convenience.
pub use bestiary_core;

/// Re-export the definition-data crate for convenience.
pub use bestiary_defs;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    // Everything from the core prelude.
    pub use bestiary_core::prelude::*;

    // Runtime-specific exports.
    pub use crate::bridge::{damage_occurred, death_occurred};
    pub use crate::clock::{ClockConfig, ClockState, EntityClock};
    pub use crate::service::{EntityService, ServiceConfig};
    pub use crate::spawn::{spawn, spawn_ambient, spawn_definition, SpawnError};
}
