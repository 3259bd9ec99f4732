//! The entity clock: a fixed-period behavior pass over the live population.
//!
//! The host engine drives all execution through one logical simulation
//! thread and reports every tick boundary to the clock. While running, the
//! clock executes a behavior pass on the first boundary after start and on
//! every `period`-th boundary after that.
//!
//! A pass snapshots the registry's active ids, then visits each one. An
//! entry whose backing object the engine can no longer resolve is
//! unregistered on the spot, before any hook would run -- the clock is the
//! registry's garbage collector. A hook error is logged against the
//! offending entity and the pass continues; one misbehaving entity never
//! stalls the rest.
//!
//! Stopping is terminal: once [`EntityClock::stop`] is called no further
//! passes run. A pass already underway is never interrupted (there is no
//! suspension point inside a pass).

use bestiary_core::engine::HostEngine;
use bestiary_core::registry::EntityRegistry;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// ClockState
// ---------------------------------------------------------------------------

/// Lifecycle of the clock: `Idle` until started, `Running` while ticking,
/// `Stopped` forever after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running,
    Stopped,
}

// ---------------------------------------------------------------------------
// ClockConfig
// ---------------------------------------------------------------------------

/// Clock configuration. `period` is measured in engine ticks.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Engine ticks between behavior passes. Must be at least 1.
    pub period: u32,
}

impl Default for ClockConfig {
    /// Defaults to a pass every 5 engine ticks.
    fn default() -> Self {
        Self { period: 5 }
    }
}

// ---------------------------------------------------------------------------
// EntityClock
// ---------------------------------------------------------------------------

/// Fixed-period scheduler for active-entity behavior.
#[derive(Debug)]
pub struct EntityClock {
    config: ClockConfig,
    state: ClockState,
    ticks_seen: u64,
    passes: u64,
}

impl EntityClock {
    /// Create an idle clock.
    ///
    /// # Panics
    ///
    /// Panics if the configured period is zero.
    pub fn new(config: ClockConfig) -> Self {
        assert!(
            config.period >= 1,
            "clock period must be at least one engine tick, got {}",
            config.period
        );
        Self {
            config,
            state: ClockState::Idle,
            ticks_seen: 0,
            passes: 0,
        }
    }

    /// Begin running. The first engine tick after this runs a pass
    /// immediately. Only valid from `Idle`; anything else is ignored with a
    /// warning.
    pub fn start(&mut self) {
        match self.state {
            ClockState::Idle => {
                self.state = ClockState::Running;
                self.ticks_seen = 0;
                debug!(period = self.config.period, "entity clock started");
            }
            _ => warn!(state = ?self.state, "entity clock can only start from idle"),
        }
    }

    /// Stop permanently. No further passes run; a pass in progress (there
    /// is none, since this executes on the same thread) is never cut short.
    pub fn stop(&mut self) {
        if self.state != ClockState::Stopped {
            self.state = ClockState::Stopped;
            debug!(passes = self.passes, "entity clock stopped");
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Number of behavior passes executed so far.
    pub fn passes_run(&self) -> u64 {
        self.passes
    }

    /// Report one engine tick boundary. Runs a behavior pass when one is
    /// due; otherwise just advances the phase counter.
    pub fn on_engine_tick(&mut self, engine: &mut dyn HostEngine, registry: &mut EntityRegistry) {
        if self.state != ClockState::Running {
            return;
        }
        let due = self.ticks_seen % u64::from(self.config.period) == 0;
        self.ticks_seen += 1;
        if due {
            self.run_pass(engine, registry);
        }
    }

    /// One behavior pass: prune stale entries, tick the rest. Visit order
    /// within a pass is unspecified.
    fn run_pass(&mut self, engine: &mut dyn HostEngine, registry: &mut EntityRegistry) {
        for id in registry.active_ids() {
            let Some(object) = engine.object_mut(id) else {
                // Backing object left the simulation without a death
                // notification; drop the entry before any hook could run.
                registry.unregister(id);
                debug!(%id, "pruned stale registry entry");
                continue;
            };
            let Some(entry) = registry.lookup_mut(id) else {
                continue;
            };
            let Some(behavior) = entry.behavior.as_mut() else {
                continue;
            };
            if let Err(error) = behavior.on_tick(object) {
                warn!(%id, %error, "tick hook failed");
            }
        }
        self.passes += 1;
    }
}

impl Default for EntityClock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
