//! Reflectors: the fixed wheel that turns the signal back.

use tracing::{event, Level};

use crate::error::EnigmaError;
use crate::wiring::Wiring;
use crate::Substitution;

const REFLECTOR_B: Wiring = Wiring::from_static(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");
const REFLECTOR_C: Wiring = Wiring::from_static(b"FVPJIAOYEDRZXWGCTKUQSBNMHL");
// Not a historical reflector, but i -> 25 - i is still an involution with
// no fixed points.
const REFLECTOR_REVERSE: Wiring = Wiring::from_static(b"ZYXWVUTSRQPONMLKJIHGFEDCBA");

/// The reflector catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorKind {
    B,
    C,
    ReverseIdentity,
}

impl ReflectorKind {
    /// Anything other than `"B"` or `"C"`, including the empty string, is
    /// the reverse-identity fallback.
    pub fn from_designator(designator: &str) -> Self {
        Self::lookup(designator).unwrap_or(ReflectorKind::ReverseIdentity)
    }

    pub fn lookup(designator: &str) -> Option<Self> {
        match designator {
            "B" => Some(ReflectorKind::B),
            "C" => Some(ReflectorKind::C),
            _ => None,
        }
    }

    pub fn wiring(self) -> Wiring {
        match self {
            ReflectorKind::B => REFLECTOR_B,
            ReflectorKind::C => REFLECTOR_C,
            ReflectorKind::ReverseIdentity => REFLECTOR_REVERSE,
        }
    }
}

/// Turns the signal back through the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Builds a reflector from a custom wiring. The wiring must be a
    /// permutation; being an involution without fixed points is not checked,
    /// but a warning is logged when it is not.
    pub fn new(wiring_spec: &str) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring_spec)?;
        if !wiring.is_involution() || !wiring.fixed_points().is_empty() {
            event!(
                Level::WARN,
                "reflector wiring {} is not a fixed-point-free involution; messages will not decipher reciprocally",
                wiring_spec
            );
        }
        Ok(Reflector { wiring })
    }

    pub fn from_catalog(kind: ReflectorKind) -> Self {
        Reflector {
            wiring: kind.wiring(),
        }
    }

    pub fn from_designator(designator: &str) -> Self {
        Self::from_catalog(ReflectorKind::from_designator(designator))
    }
}

impl Substitution for Reflector {
    fn forward(&self, c_idx: usize) -> usize {
        self.wiring.forward(c_idx)
    }
}
