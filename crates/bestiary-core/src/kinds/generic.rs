//! The generic kind: default behavior for any species, configured entirely
//! by the common profile.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, BehaviorSet};
use crate::engine::{EngineObject, Species};
use crate::kind::EntityKind;
use crate::kinds::common::CommonProfile;

/// Catch-all variant: the definition picks the species via the `species`
/// attribute (unrecognized names fall back to [`Species::Pig`]) and only the
/// common fields are applied.
#[derive(Debug, Clone)]
pub struct GenericKind {
    species: Species,
    common: CommonProfile,
}

impl GenericKind {
    pub fn configure(attributes: &AttributeBag) -> Self {
        let name = attributes.get_str("species", Species::Pig.name());
        Self {
            species: Species::from_name(name).unwrap_or(Species::Pig),
            common: CommonProfile::configure(attributes),
        }
    }
}

impl EntityKind for GenericKind {
    fn tag(&self) -> &'static str {
        "generic"
    }

    fn species(&self) -> Species {
        self.species
    }

    fn apply(&self, object: &mut dyn EngineObject) {
        self.common.apply(object);
    }

    fn behavior(&self) -> Option<Box<dyn ActiveBehavior>> {
        let mut members = Vec::new();
        self.common.behaviors(&mut members);
        BehaviorSet::compose(members)
    }
}
