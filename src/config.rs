//! Machine settings, as written on a key sheet.

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::ReflectorKind;
use crate::rotor::RotorKind;

/// Which designator the right-hand rotor is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RightRotorSource {
    /// Reuse the middle rotor's designator (`rotors[1]`). This is the
    /// behaviour existing ciphertexts were produced with.
    #[default]
    MiddleDesignator,
    /// Use `rotors[2]`, as on the physical machine.
    OwnDesignator,
}

/// Everything needed to build a [`crate::Machine`].
///
/// Positions and ring settings are reduced modulo 26, so negative or large
/// values are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor designators, left to right.
    pub rotors: [String; 3],
    #[serde(default)]
    pub reflector: String,
    /// Initial rotor positions, left to right.
    pub positions: [i32; 3],
    /// Ring settings, left to right.
    pub rings: [i32; 3],
    #[serde(default)]
    pub plugboard: String,
    #[serde(default)]
    pub right_rotor: RightRotorSource,
}

impl MachineConfig {
    pub fn new(
        rotors: [&str; 3],
        reflector: &str,
        positions: [i32; 3],
        rings: [i32; 3],
        plugboard: &str,
    ) -> Self {
        Self {
            rotors: rotors.map(str::to_string),
            reflector: reflector.to_string(),
            positions,
            rings,
            plugboard: plugboard.to_string(),
            right_rotor: RightRotorSource::default(),
        }
    }

    /// Settings from a key sheet; these always use reflector B.
    pub fn from_key(
        rotors: [&str; 3],
        indicators: [i32; 3],
        rings: [i32; 3],
        plugboard: &str,
    ) -> Self {
        Self::new(rotors, "B", indicators, rings, plugboard)
    }

    pub fn with_right_rotor(mut self, source: RightRotorSource) -> Self {
        self.right_rotor = source;
        self
    }

    /// Designators for the left, middle and right rotor after applying
    /// [`RightRotorSource`].
    pub fn resolved_rotors(&self) -> [&str; 3] {
        let right = match self.right_rotor {
            RightRotorSource::MiddleDesignator => &self.rotors[1],
            RightRotorSource::OwnDesignator => &self.rotors[2],
        };
        [self.rotors[0].as_str(), self.rotors[1].as_str(), right.as_str()]
    }

    /// Rejects settings that the machine would otherwise silently replace
    /// with a fallback.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        for name in self.resolved_rotors() {
            if RotorKind::lookup(name).is_none() {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "Unknown rotor '{name}'"
                )));
            }
        }
        if ReflectorKind::lookup(&self.reflector).is_none() {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "Unknown reflector '{}'",
                self.reflector
            )));
        }
        Plugboard::try_new(&self.plugboard)?;
        Ok(())
    }
}
