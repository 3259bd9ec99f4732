//! The host-engine capability surface.
//!
//! The framework never talks to a game engine directly; it drives the narrow
//! surface defined here. [`HostEngine`] covers instantiation and lookup of
//! world objects, [`EngineObject`] is the handle to one such object between
//! instantiation and release (and afterwards, via lookup). Engines implement
//! only the property setters their species actually support; everything else
//! stays a no-op and the corresponding configuration is silently dropped,
//! exactly as a definition author would expect.
//!
//! Object identity ([`ObjectId`]) is opaque to the framework: the engine
//! allocates it, the registry keys on it, and a failed lookup is the one and
//! only signal that an object has left the simulation.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ObjectId
// ---------------------------------------------------------------------------

/// Opaque identity of a spawned world object, allocated by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Construct an id from the engine's raw value.
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw engine-side value.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A point in the simulation where an object can be instantiated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Creature species the framework can ask the engine to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Pig,
    Llama,
    Donkey,
    Mule,
    Shulker,
    Wither,
}

impl Species {
    /// Resolve a species from its lowercase name, `None` if unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pig" => Some(Species::Pig),
            "llama" => Some(Species::Llama),
            "donkey" => Some(Species::Donkey),
            "mule" => Some(Species::Mule),
            "shulker" => Some(Species::Shulker),
            "wither" => Some(Species::Wither),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Species::Pig => "pig",
            Species::Llama => "llama",
            Species::Donkey => "donkey",
            Species::Mule => "mule",
            Species::Shulker => "shulker",
            Species::Wither => "wither",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Enumerated engine properties
// ---------------------------------------------------------------------------

/// Coat colors a llama can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlamaColor {
    Creamy,
    White,
    Brown,
    Gray,
}

impl LlamaColor {
    /// Resolve a color from its name, case-insensitively. `None` for
    /// unrecognized names (the caller ignores those and keeps the engine
    /// default).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "CREAMY" => Some(LlamaColor::Creamy),
            "WHITE" => Some(LlamaColor::White),
            "BROWN" => Some(LlamaColor::Brown),
            "GRAY" => Some(LlamaColor::Gray),
            _ => None,
        }
    }
}

/// The sixteen dye colors used by dyeable species (e.g. shulkers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    /// Resolve a dye color from its name, case-insensitively. `None` for
    /// unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "WHITE" => Some(DyeColor::White),
            "ORANGE" => Some(DyeColor::Orange),
            "MAGENTA" => Some(DyeColor::Magenta),
            "LIGHT_BLUE" => Some(DyeColor::LightBlue),
            "YELLOW" => Some(DyeColor::Yellow),
            "LIME" => Some(DyeColor::Lime),
            "PINK" => Some(DyeColor::Pink),
            "GRAY" => Some(DyeColor::Gray),
            "LIGHT_GRAY" => Some(DyeColor::LightGray),
            "CYAN" => Some(DyeColor::Cyan),
            "PURPLE" => Some(DyeColor::Purple),
            "BLUE" => Some(DyeColor::Blue),
            "BROWN" => Some(DyeColor::Brown),
            "GREEN" => Some(DyeColor::Green),
            "RED" => Some(DyeColor::Red),
            "BLACK" => Some(DyeColor::Black),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// InstantiationError
// ---------------------------------------------------------------------------

/// The engine refused to create the requested species at the given location.
///
/// Fatal to the single spawn attempt that triggered it, nothing else.
#[derive(Debug, thiserror::Error)]
#[error("engine refused to instantiate {species} at {location:?}: {details}")]
pub struct InstantiationError {
    pub species: Species,
    pub location: Location,
    pub details: String,
}

// ---------------------------------------------------------------------------
// EngineObject
// ---------------------------------------------------------------------------

/// Handle to one world object.
///
/// Between [`HostEngine::instantiate`] and [`HostEngine::release`] the
/// framework owns the handle exclusively and uses it to apply a kind's typed
/// fields. After release the engine owns the object and hands out borrows
/// through [`HostEngine::object`] / [`HostEngine::object_mut`].
///
/// All property setters default to no-ops: an engine implements the subset
/// its object model supports, and configuration aimed at an unsupported
/// property simply does not take effect.
pub trait EngineObject: 'static {
    /// This object's identity.
    fn id(&self) -> ObjectId;

    /// The species the object was instantiated as.
    fn species(&self) -> Species;

    /// Current health.
    fn health(&self) -> f64;

    /// Current health ceiling.
    fn max_health(&self) -> f64;

    /// Set current health.
    fn set_health(&mut self, value: f64);

    // -- optional property surface ------------------------------------------

    fn set_display_name(&mut self, _name: &str) {}

    fn set_invulnerable(&mut self, _flag: bool) {}

    fn set_glowing(&mut self, _flag: bool) {}

    fn set_silent(&mut self, _flag: bool) {}

    fn set_gravity(&mut self, _flag: bool) {}

    fn set_max_health(&mut self, _value: f64) {}

    fn set_tamed(&mut self, _flag: bool) {}

    fn set_jump_strength(&mut self, _value: f64) {}

    fn set_carrying_chest(&mut self, _flag: bool) {}

    fn set_llama_strength(&mut self, _value: i32) {}

    fn set_llama_color(&mut self, _color: LlamaColor) {}

    fn set_dye_color(&mut self, _color: DyeColor) {}

    /// Downcast support for engines that store concrete object types.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

// ---------------------------------------------------------------------------
// HostEngine
// ---------------------------------------------------------------------------

/// The narrow surface through which the framework drives the host engine.
pub trait HostEngine {
    /// Create a raw, not-yet-released object of the given species.
    fn instantiate(
        &mut self,
        location: Location,
        species: Species,
    ) -> Result<Box<dyn EngineObject>, InstantiationError>;

    /// Commit a fully-configured object into the live simulation.
    fn release(&mut self, object: Box<dyn EngineObject>) -> Result<ObjectId, InstantiationError>;

    /// Borrow a live object, `None` once it has left the simulation.
    fn object(&self, id: ObjectId) -> Option<&dyn EngineObject>;

    /// Mutably borrow a live object, `None` once it has left the simulation.
    fn object_mut(&mut self, id: ObjectId) -> Option<&mut dyn EngineObject>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_names_roundtrip() {
        for species in [
            Species::Pig,
            Species::Llama,
            Species::Donkey,
            Species::Mule,
            Species::Shulker,
            Species::Wither,
        ] {
            assert_eq!(Species::from_name(species.name()), Some(species));
        }
        assert_eq!(Species::from_name("dragon"), None);
        // Resolution is case-insensitive.
        assert_eq!(Species::from_name("LLAMA"), Some(Species::Llama));
    }

    #[test]
    fn llama_color_resolution() {
        assert_eq!(LlamaColor::from_name("BROWN"), Some(LlamaColor::Brown));
        assert_eq!(LlamaColor::from_name("brown"), Some(LlamaColor::Brown));
        assert_eq!(LlamaColor::from_name("chartreuse"), None);
    }

    #[test]
    fn dye_color_resolution() {
        assert_eq!(DyeColor::from_name("light_blue"), Some(DyeColor::LightBlue));
        assert_eq!(DyeColor::from_name("RED"), Some(DyeColor::Red));
        assert_eq!(DyeColor::from_name("ultraviolet"), None);
    }

    #[test]
    fn object_id_display() {
        assert_eq!(ObjectId::new(42).to_string(), "#42");
        assert_eq!(ObjectId::new(42).raw(), 42);
    }
}
