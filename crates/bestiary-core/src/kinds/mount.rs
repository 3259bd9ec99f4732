//! The rideable-creature base shared by mount species.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, MountRecovery};
use crate::engine::EngineObject;

/// Jump strength is clamped into this range when a definition sets one.
const JUMP_RANGE: (f64, f64) = (0.0, 2.0);

/// Fields common to every mount: taming, jump strength, and whether the
/// creature carries a storage chest.
///
/// Mount kinds compose this profile and call through to it from their own
/// `configure` / `apply` steps. The profile also supplies the shared mount
/// tick behavior (slow health recovery between fights).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountProfile {
    pub tamed: bool,
    pub jump_strength: Option<f64>,
    pub carrying_chest: bool,
}

impl MountProfile {
    /// Extract the mount fields from an attribute bag.
    pub fn configure(attributes: &AttributeBag) -> Self {
        let jump = attributes.get_real("jump_strength", -1.0);
        Self {
            tamed: attributes.get_bool("tamed", false),
            jump_strength: (jump >= 0.0).then(|| jump.clamp(JUMP_RANGE.0, JUMP_RANGE.1)),
            carrying_chest: attributes.get_bool("is_carrying_chest", false),
        }
    }

    /// Stamp the mount fields onto a raw object.
    pub fn apply(&self, object: &mut dyn EngineObject) {
        object.set_tamed(self.tamed);
        if let Some(jump) = self.jump_strength {
            object.set_jump_strength(jump);
        }
        object.set_carrying_chest(self.carrying_chest);
    }

    /// Contribute the shared mount behaviors to a kind's behavior list.
    pub fn behaviors(&self, members: &mut Vec<Box<dyn ActiveBehavior>>) {
        members.push(Box::new(MountRecovery::default()));
    }
}
