//! The donkey kind: a plain mount with no fields of its own.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, BehaviorSet};
use crate::engine::{EngineObject, Species};
use crate::kind::EntityKind;
use crate::kinds::common::CommonProfile;
use crate::kinds::mount::MountProfile;

/// A mount species configured entirely by the shared mount base plus the
/// common profile.
#[derive(Debug, Clone)]
pub struct DonkeyKind {
    mount: MountProfile,
    common: CommonProfile,
}

impl DonkeyKind {
    pub fn configure(attributes: &AttributeBag) -> Self {
        Self {
            mount: MountProfile::configure(attributes),
            common: CommonProfile::configure(attributes),
        }
    }
}

impl EntityKind for DonkeyKind {
    fn tag(&self) -> &'static str {
        "donkey"
    }

    fn species(&self) -> Species {
        Species::Donkey
    }

    fn apply(&self, object: &mut dyn EngineObject) {
        self.mount.apply(object);
        self.common.apply(object);
    }

    fn behavior(&self) -> Option<Box<dyn ActiveBehavior>> {
        let mut members = Vec::new();
        self.mount.behaviors(&mut members);
        self.common.behaviors(&mut members);
        BehaviorSet::compose(members)
    }
}
