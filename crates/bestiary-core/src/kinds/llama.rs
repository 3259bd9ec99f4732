//! The llama kind: a pack mount with strength and coat color.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, BehaviorSet};
use crate::engine::{EngineObject, LlamaColor, Species};
use crate::kind::EntityKind;
use crate::kinds::common::CommonProfile;
use crate::kinds::mount::MountProfile;

/// Llama strength (pack capacity) is clamped into this range.
const STRENGTH_RANGE: (i64, i64) = (1, 5);

/// A four-legged pack mount. Composes the mount base and adds a strength
/// value (clamped, unset leaves the engine default) and a coat color
/// (unrecognized names are ignored).
#[derive(Debug, Clone)]
pub struct LlamaKind {
    strength: Option<i32>,
    color: Option<LlamaColor>,
    mount: MountProfile,
    common: CommonProfile,
}

impl LlamaKind {
    pub fn configure(attributes: &AttributeBag) -> Self {
        let strength = attributes.get_int("strength", -1);
        let color = attributes.get_str("color", "");
        Self {
            strength: (strength != -1)
                .then(|| strength.clamp(STRENGTH_RANGE.0, STRENGTH_RANGE.1) as i32),
            color: LlamaColor::from_name(color),
            mount: MountProfile::configure(attributes),
            common: CommonProfile::configure(attributes),
        }
    }

    /// Effective strength after clamping, if configured.
    pub fn strength(&self) -> Option<i32> {
        self.strength
    }

    /// Resolved coat color, if a recognized one was configured.
    pub fn color(&self) -> Option<LlamaColor> {
        self.color
    }
}

impl EntityKind for LlamaKind {
    fn tag(&self) -> &'static str {
        "llama"
    }

    fn species(&self) -> Species {
        Species::Llama
    }

    fn apply(&self, object: &mut dyn EngineObject) {
        if let Some(strength) = self.strength {
            object.set_llama_strength(strength);
        }
        if let Some(color) = self.color {
            object.set_llama_color(color);
        }
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
