//! The active-entity capability: hooks for ongoing behavior.
//!
//! A kind may give its spawned instances an [`ActiveBehavior`]: a per-tick
//! hook plus hooks that fire when the entity deals or receives damage. All
//! hooks run synchronously on the single simulation thread, before the
//! triggering event's outcome is finalized, so a damage hook can veto the
//! event by returning [`HookVerdict::Cancel`].
//!
//! Hook failures are values, not panics: a hook returns `anyhow::Result` and
//! the clock / event bridge logs the error against the offending entity and
//! moves on. One misbehaving entity never halts the pass.
//!
//! Hooks must not block; anything slow belongs on an asynchronous path
//! outside this framework.

use std::fmt;

use crate::engine::{EngineObject, ObjectId};

// ---------------------------------------------------------------------------
// HookVerdict
// ---------------------------------------------------------------------------

/// What a damage hook decided about the triggering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookVerdict {
    /// Let the event take its normal effect.
    Proceed,
    /// Veto the event (e.g. cancel the damage entirely).
    Cancel,
}

// ---------------------------------------------------------------------------
// ActiveBehavior
// ---------------------------------------------------------------------------

/// Behavior hooks for one spawned entity.
///
/// Every hook has a no-op default, so a behavior implements exactly the
/// subset it cares about. `object` is the entity's own live handle. The
/// relative order in which different entities' `on_tick` hooks run within a
/// pass is unspecified.
pub trait ActiveBehavior: fmt::Debug + 'static {
    /// Invoked once per clock period while the entity is live.
    fn on_tick(&mut self, _object: &mut dyn EngineObject) -> anyhow::Result<()> {
        Ok(())
    }

    /// Invoked when this entity damages `victim`.
    fn on_attack(
        &mut self,
        _object: &mut dyn EngineObject,
        _victim: ObjectId,
    ) -> anyhow::Result<HookVerdict> {
        Ok(HookVerdict::Proceed)
    }

    /// Invoked when this entity is damaged by `attacker`.
    fn on_damage(
        &mut self,
        _object: &mut dyn EngineObject,
        _attacker: ObjectId,
    ) -> anyhow::Result<HookVerdict> {
        Ok(HookVerdict::Proceed)
    }
}

// ---------------------------------------------------------------------------
// BehaviorSet
// ---------------------------------------------------------------------------

/// Ordered composition of behaviors, itself a behavior.
///
/// Kinds assemble one from their composed profiles (shared mount behavior,
/// invulnerability shield, ...). Every member runs on every hook; for damage
/// hooks a single [`HookVerdict::Cancel`] outvotes any number of `Proceed`s.
#[derive(Debug)]
pub struct BehaviorSet {
    members: Vec<Box<dyn ActiveBehavior>>,
}

impl BehaviorSet {
    pub fn new(members: Vec<Box<dyn ActiveBehavior>>) -> Self {
        Self { members }
    }

    /// Collapse a member list into an optional behavior: `None` when empty,
    /// the single member unwrapped, a set otherwise.
    pub fn compose(mut members: Vec<Box<dyn ActiveBehavior>>) -> Option<Box<dyn ActiveBehavior>> {
        match members.len() {
            0 => None,
            1 => members.pop(),
            _ => Some(Box::new(Self::new(members))),
        }
    }
}

impl ActiveBehavior for BehaviorSet {
    fn on_tick(&mut self, object: &mut dyn EngineObject) -> anyhow::Result<()> {
        for member in &mut self.members {
            member.on_tick(object)?;
        }
        Ok(())
    }

    fn on_attack(
        &mut self,
        object: &mut dyn EngineObject,
        victim: ObjectId,
    ) -> anyhow::Result<HookVerdict> {
        let mut verdict = HookVerdict::Proceed;
        for member in &mut self.members {
            if member.on_attack(object, victim)? == HookVerdict::Cancel {
                verdict = HookVerdict::Cancel;
            }
        }
        Ok(verdict)
    }

    fn on_damage(
        &mut self,
        object: &mut dyn EngineObject,
        attacker: ObjectId,
    ) -> anyhow::Result<HookVerdict> {
        let mut verdict = HookVerdict::Proceed;
        for member in &mut self.members {
            if member.on_damage(object, attacker)? == HookVerdict::Cancel {
                verdict = HookVerdict::Cancel;
            }
        }
        Ok(verdict)
    }
}

// ---------------------------------------------------------------------------
// Shipped behaviors
// ---------------------------------------------------------------------------

/// Cancels all incoming damage. Attached when a definition marks the entity
/// invulnerable (engine-level invulnerability flags are unreliable for some
/// damage sources, so the veto happens at the event).
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageShield;

impl ActiveBehavior for DamageShield {
    fn on_damage(
        &mut self,
        _object: &mut dyn EngineObject,
        _attacker: ObjectId,
    ) -> anyhow::Result<HookVerdict> {
        Ok(HookVerdict::Cancel)
    }
}

/// Shared mount-base tick behavior: restore a sliver of health each pass, up
/// to the object's health ceiling.
#[derive(Debug, Clone, Copy)]
pub struct MountRecovery {
    per_tick: f64,
}

impl MountRecovery {
    /// Health restored per clock pass.
    pub const DEFAULT_PER_TICK: f64 = 0.25;

    pub fn new(per_tick: f64) -> Self {
        Self { per_tick }
    }
}

impl Default for MountRecovery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PER_TICK)
    }
}

impl ActiveBehavior for MountRecovery {
    fn on_tick(&mut self, object: &mut dyn EngineObject) -> anyhow::Result<()> {
        let health = object.health();
        let ceiling = object.max_health();
        if health < ceiling {
            object.set_health((health + self.per_tick).min(ceiling));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
