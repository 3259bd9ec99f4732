//! The event bridge: host notifications in, behavior hooks out.
//!
//! The host engine owns the subscription to its own event stream; it calls
//! these entry points synchronously, before the triggering event's outcome
//! is finalized. The bridge translates object identities into registry
//! lookups and hook invocations. Identities the registry does not know are
//! silently ignored -- they belong to objects this framework does not
//! govern.

use bestiary_core::active::HookVerdict;
use bestiary_core::engine::{HostEngine, ObjectId};
use bestiary_core::registry::EntityRegistry;
use tracing::{debug, warn};

/// Run one damage hook on one registered entity, if it has behavior and a
/// live object. Errors are logged and count as `Proceed`.
fn run_damage_hook(
    engine: &mut dyn HostEngine,
    registry: &mut EntityRegistry,
    id: ObjectId,
    other: ObjectId,
    attacking: bool,
) -> HookVerdict {
    let Some(entry) = registry.lookup_mut(id) else {
        return HookVerdict::Proceed;
    };
    let Some(behavior) = entry.behavior.as_mut() else {
        return HookVerdict::Proceed;
    };
    let Some(object) = engine.object_mut(id) else {
        return HookVerdict::Proceed;
    };
    let result = if attacking {
        behavior.on_attack(object, other)
    } else {
        behavior.on_damage(object, other)
    };
    match result {
        Ok(verdict) => verdict,
        Err(error) => {
            warn!(%id, %error, hook = if attacking { "on_attack" } else { "on_damage" }, "damage hook failed");
            HookVerdict::Proceed
        }
    }
}

/// A damage event was observed: `attacker` is about to damage `victim`.
///
/// Runs the attacker's `on_attack` and the victim's `on_damage`, in that
/// order. Returns [`HookVerdict::Cancel`] if either hook vetoed the event;
/// the host is expected to cancel the damage in that case.
pub fn damage_occurred(
    engine: &mut dyn HostEngine,
    registry: &mut EntityRegistry,
    attacker: ObjectId,
    victim: ObjectId,
) -> HookVerdict {
    let mut verdict = HookVerdict::Proceed;
    if run_damage_hook(engine, registry, attacker, victim, true) == HookVerdict::Cancel {
        verdict = HookVerdict::Cancel;
    }
    if run_damage_hook(engine, registry, victim, attacker, false) == HookVerdict::Cancel {
        verdict = HookVerdict::Cancel;
    }
    verdict
}

/// A death (or despawn) was observed for `id`.
///
/// Unregisters the entry; unknown identities are ignored.
pub fn death_occurred(registry: &mut EntityRegistry, id: ObjectId) {
    if registry.unregister(id) {
        debug!(%id, "entity removed on death notification");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
