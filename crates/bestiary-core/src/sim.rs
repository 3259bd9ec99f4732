//! An in-memory reference engine.
//!
//! [`SimWorld`] implements [`HostEngine`] over a plain map of property
//! records. It exists so the framework can be exercised end-to-end without a
//! real game engine attached: tests and examples instantiate, configure,
//! release and kill objects and then assert on exactly which properties were
//! set. Enumerated properties start as `None`, so "the engine default was
//! left in place" is directly observable.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::engine::{
    DyeColor, EngineObject, HostEngine, InstantiationError, LlamaColor, Location, ObjectId,
    Species,
};

// ---------------------------------------------------------------------------
// SimObject
// ---------------------------------------------------------------------------

/// Property record for one simulated object.
#[derive(Debug, Clone, PartialEq)]
pub struct SimObject {
    id: ObjectId,
    species: Species,
    pub location: Location,
    pub display_name: Option<String>,
    pub invulnerable: bool,
    pub glowing: bool,
    pub silent: bool,
    pub gravity: bool,
    pub max_health: f64,
    pub health: f64,
    pub tamed: bool,
    pub jump_strength: Option<f64>,
    pub carrying_chest: bool,
    pub llama_strength: Option<i32>,
    pub llama_color: Option<LlamaColor>,
    pub dye_color: Option<DyeColor>,
}

impl SimObject {
    fn new(id: ObjectId, species: Species, location: Location) -> Self {
        Self {
            id,
            species,
            location,
            display_name: None,
            invulnerable: false,
            glowing: false,
            silent: false,
            gravity: true,
            max_health: 20.0,
            health: 20.0,
            tamed: false,
            jump_strength: None,
            carrying_chest: false,
            llama_strength: None,
            llama_color: None,
            dye_color: None,
        }
    }
}

impl EngineObject for SimObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn species(&self) -> Species {
        self.species
    }

    fn health(&self) -> f64 {
        self.health
    }

    fn max_health(&self) -> f64 {
        self.max_health
    }

    fn set_health(&mut self, value: f64) {
        self.health = value;
    }

    fn set_display_name(&mut self, name: &str) {
        self.display_name = Some(name.to_owned());
    }

    fn set_invulnerable(&mut self, flag: bool) {
        self.invulnerable = flag;
    }

    fn set_glowing(&mut self, flag: bool) {
        self.glowing = flag;
    }

    fn set_silent(&mut self, flag: bool) {
        self.silent = flag;
    }

    fn set_gravity(&mut self, flag: bool) {
        self.gravity = flag;
    }

    fn set_max_health(&mut self, value: f64) {
        self.max_health = value;
    }

    fn set_tamed(&mut self, flag: bool) {
        self.tamed = flag;
    }

    fn set_jump_strength(&mut self, value: f64) {
        self.jump_strength = Some(value);
    }

    fn set_carrying_chest(&mut self, flag: bool) {
        self.carrying_chest = flag;
    }

    fn set_llama_strength(&mut self, value: i32) {
        self.llama_strength = Some(value);
    }

    fn set_llama_color(&mut self, color: LlamaColor) {
        self.llama_color = Some(color);
    }

    fn set_dye_color(&mut self, color: DyeColor) {
        self.dye_color = Some(color);
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }
}

// ---------------------------------------------------------------------------
// SimWorld
// ---------------------------------------------------------------------------

/// In-memory [`HostEngine`] implementation.
///
/// Ids are allocated sequentially. [`SimWorld::kill`] takes an object out of
/// the live set, which is how tests exercise the registry's stale-entry
/// pruning. [`SimWorld::refuse`] marks a species the engine will decline to
/// instantiate, which is how tests exercise the instantiation-failure path.
#[derive(Debug, Default)]
pub struct SimWorld {
    next_id: u64,
    objects: BTreeMap<ObjectId, SimObject>,
    refused: BTreeSet<Species>,
    refuse_release: bool,
}

impl SimWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decline all future instantiations of `species`.
    pub fn refuse(&mut self, species: Species) {
        self.refused.insert(species);
    }

    /// Make every future release fail (engine-side commit refusal).
    pub fn refuse_release(&mut self, flag: bool) {
        self.refuse_release = flag;
    }

    /// Remove an object from the live set, as a death or unload would.
    pub fn kill(&mut self, id: ObjectId) {
        self.objects.remove(&id);
    }

    /// Number of live objects.
    pub fn live_count(&self) -> usize {
        self.objects.len()
    }

    /// Direct access to a live object's property record.
    pub fn record(&self, id: ObjectId) -> Option<&SimObject> {
        self.objects.get(&id)
    }
}

impl HostEngine for SimWorld {
    fn instantiate(
        &mut self,
        location: Location,
        species: Species,
    ) -> Result<Box<dyn EngineObject>, InstantiationError> {
        if self.refused.contains(&species) {
            return Err(InstantiationError {
                species,
                location,
                details: "species refused by simulation".to_owned(),
            });
        }
        self.next_id += 1;
        let id = ObjectId::new(self.next_id);
        Ok(Box::new(SimObject::new(id, species, location)))
    }

    fn release(&mut self, object: Box<dyn EngineObject>) -> Result<ObjectId, InstantiationError> {
        let species = object.species();
        let id = object.id();
        let concrete = object
            .into_any()
            .downcast::<SimObject>()
            .map_err(|_| InstantiationError {
                species,
                location: Location::default(),
                details: "foreign object handle".to_owned(),
            })?;
        if self.refuse_release {
            return Err(InstantiationError {
                species,
                location: concrete.location,
                details: "release refused by simulation".to_owned(),
            });
        }
        self.objects.insert(id, *concrete);
        Ok(id)
    }

    fn object(&self, id: ObjectId) -> Option<&dyn EngineObject> {
        self.objects.get(&id).map(|o| o as &dyn EngineObject)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut dyn EngineObject> {
        self.objects
            .get_mut(&id)
            .map(|o| o as &mut dyn EngineObject)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_release_lookup() {
        let mut sim = SimWorld::new();
        let raw = sim
            .instantiate(Location::new(1.0, 2.0, 3.0), Species::Llama)
            .unwrap();
        let id = raw.id();
        assert!(sim.object(id).is_none(), "not live before release");

        sim.release(raw).unwrap();
        let obj = sim.object(id).unwrap();
        assert_eq!(obj.species(), Species::Llama);
        assert_eq!(sim.live_count(), 1);
    }

    #[test]
    fn kill_removes_from_live_set() {
        let mut sim = SimWorld::new();
        let raw = sim.instantiate(Location::default(), Species::Pig).unwrap();
        let id = raw.id();
        sim.release(raw).unwrap();

        sim.kill(id);
        assert!(sim.object(id).is_none());
        assert_eq!(sim.live_count(), 0);
    }

    #[test]
    fn refused_species_fails_instantiation() {
        let mut sim = SimWorld::new();
        sim.refuse(Species::Wither);
        let err = sim
            .instantiate(Location::default(), Species::Wither)
            .err()
            .unwrap();
        assert_eq!(err.species, Species::Wither);
        // Other species are unaffected.
        assert!(sim.instantiate(Location::default(), Species::Pig).is_ok());
    }

    #[test]
    fn refused_release_keeps_object_out_of_world() {
        let mut sim = SimWorld::new();
        let raw = sim.instantiate(Location::default(), Species::Pig).unwrap();
        let id = raw.id();
        sim.refuse_release(true);
        assert!(sim.release(raw).is_err());
        assert!(sim.object(id).is_none());
    }

    #[test]
    fn ids_are_unique_and_sequentialish() {
        let mut sim = SimWorld::new();
        let a = sim.instantiate(Location::default(), Species::Pig).unwrap();
        let b = sim.instantiate(Location::default(), Species::Pig).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
