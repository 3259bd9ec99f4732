//! The shulker kind: a stationary creature whose only extra field is a dye
//! color.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, BehaviorSet};
use crate::engine::{DyeColor, EngineObject, Species};
use crate::kind::EntityKind;
use crate::kinds::common::CommonProfile;

#[derive(Debug, Clone)]
pub struct ShulkerKind {
    color: Option<DyeColor>,
    common: CommonProfile,
}

impl ShulkerKind {
    pub fn configure(attributes: &AttributeBag) -> Self {
        Self {
            color: DyeColor::from_name(attributes.get_str("color", "")),
            common: CommonProfile::configure(attributes),
        }
    }

    /// Resolved shell color, if a recognized one was configured.
    pub fn color(&self) -> Option<DyeColor> {
        self.color
    }
}

impl EntityKind for ShulkerKind {
    fn tag(&self) -> &'static str {
        "shulker"
    }

    fn species(&self) -> Species {
        Species::Shulker
    }

    fn apply(&self, object: &mut dyn EngineObject) {
        if let Some(color) = self.color {
            object.set_dye_color(color);
        }
        self.common.apply(object);
    }

    fn behavior(&self) -> Option<Box<dyn ActiveBehavior>> {
        let mut members = Vec::new();
        self.common.behaviors(&mut members);
        BehaviorSet::compose(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{HostEngine, Location};
    use crate::sim::SimWorld;
    use bestiary_defs::attributes::AttrValue;

    fn color_bag(name: &str) -> AttributeBag {
        AttributeBag::from_pairs(vec![("color".to_owned(), AttrValue::Str(name.to_owned()))])
    }

    #[test]
    fn recognized_color_applies() {
        let kind = ShulkerKind::configure(&color_bag("PURPLE"));
        let mut sim = SimWorld::new();
        let mut raw = sim.instantiate(Location::default(), kind.species()).unwrap();
        kind.apply(raw.as_mut());
        let id = sim.release(raw).unwrap();
        assert_eq!(sim.record(id).unwrap().dye_color, Some(DyeColor::Purple));
    }

    #[test]
    fn unknown_color_leaves_engine_default() {
        let kind = ShulkerKind::configure(&color_bag("POLKADOT"));
        assert_eq!(kind.color(), None);

        let mut sim = SimWorld::new();
        let mut raw = sim.instantiate(Location::default(), kind.species()).unwrap();
        kind.apply(raw.as_mut());
        let id = sim.release(raw).unwrap();
        assert_eq!(sim.record(id).unwrap().dye_color, None);
    }

    #[test]
    fn no_behavior_unless_common_contributes_one() {
        let plain = ShulkerKind::configure(&AttributeBag::absent());
        assert!(plain.behavior().is_none());

        let shielded = ShulkerKind::configure(&AttributeBag::from_pairs(vec![(
            "invulnerable".to_owned(),
            AttrValue::Bool(true),
        )]));
        assert!(shielded.behavior().is_some());
    }
}
