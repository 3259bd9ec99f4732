//! The wither kind: a boss creature with no attributes beyond the common
//! profile.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, BehaviorSet};
use crate::engine::{EngineObject, Species};
use crate::kind::EntityKind;
use crate::kinds::common::CommonProfile;

#[derive(Debug, Clone)]
pub struct WitherKind {
    common: CommonProfile,
}

impl WitherKind {
    pub fn configure(attributes: &AttributeBag) -> Self {
        Self {
            common: CommonProfile::configure(attributes),
        }
    }
}

impl EntityKind for WitherKind {
    fn tag(&self) -> &'static str {
        "wither"
    }

    fn species(&self) -> Species {
        Species::Wither
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
