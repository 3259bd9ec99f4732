//! Fields every kind shares, as a composable profile.

use bestiary_defs::attributes::AttributeBag;

use crate::active::{ActiveBehavior, DamageShield};
use crate::engine::EngineObject;

/// Health values are clamped into this range when a definition sets one.
const HEALTH_RANGE: (f64, f64) = (1.0, 1024.0);

/// Configuration common to all creatures: naming, visibility flags,
/// invulnerability and an optional health override.
///
/// Composed (never inherited) by every kind variant; each variant's `apply`
/// calls [`CommonProfile::apply`] after stamping its own fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonProfile {
    pub display_name: Option<String>,
    pub invulnerable: bool,
    pub glowing: bool,
    pub silent: bool,
    pub gravity: bool,
    pub health: Option<f64>,
}

impl CommonProfile {
    /// Extract the common fields from an attribute bag.
    pub fn configure(attributes: &AttributeBag) -> Self {
        let name = attributes.get_str("name", "");
        let health = attributes.get_real("health", -1.0);
        Self {
            display_name: (!name.is_empty()).then(|| name.to_owned()),
            invulnerable: attributes.get_bool("invulnerable", false),
            glowing: attributes.get_bool("glowing", false),
            silent: attributes.get_bool("silent", false),
            gravity: attributes.get_bool("gravity", true),
            health: (health >= 0.0).then(|| health.clamp(HEALTH_RANGE.0, HEALTH_RANGE.1)),
        }
    }

    /// Stamp the common fields onto a raw object.
    pub fn apply(&self, object: &mut dyn EngineObject) {
        if let Some(name) = &self.display_name {
            object.set_display_name(name);
        }
        object.set_invulnerable(self.invulnerable);
        object.set_glowing(self.glowing);
        object.set_silent(self.silent);
        object.set_gravity(self.gravity);
        if let Some(health) = self.health {
            object.set_max_health(health);
            object.set_health(health);
        }
    }

    /// Contribute common behaviors to a kind's behavior list.
    pub fn behaviors(&self, members: &mut Vec<Box<dyn ActiveBehavior>>) {
        if self.invulnerable {
            members.push(Box::new(DamageShield));
        }
    }
}
