//! The assembled machine: stepping and the signal path.

use tracing::{event, Level};

use crate::alphabet::{self, wrap};
use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, ReflectorKind};
use crate::rotor::{Rotor, RotorKind};
use crate::Substitution;

/// Three rotors, a reflector and a plugboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Builds a machine, replacing unknown designators and a malformed
    /// plugboard with their fallbacks (identity rotor, reverse-identity
    /// reflector, unplugged board).
    pub fn new(config: &MachineConfig) -> Self {
        let names = config.resolved_rotors();
        let rotors: [Rotor; 3] = std::array::from_fn(|i| {
            if RotorKind::lookup(names[i]).is_none() {
                event!(
                    Level::WARN,
                    "unknown rotor {:?}, using the identity rotor",
                    names[i]
                );
            }
            Rotor::from_catalog(
                RotorKind::from_designator(names[i]),
                wrap(config.positions[i]),
                wrap(config.rings[i]),
            )
        });
        if ReflectorKind::lookup(&config.reflector).is_none() {
            event!(
                Level::WARN,
                "unknown reflector {:?}, using the reverse-identity reflector",
                config.reflector
            );
        }

        let [left, middle, right] = rotors;
        let machine = Self::from_parts(
            left,
            middle,
            right,
            Reflector::from_designator(&config.reflector),
            Plugboard::new(&config.plugboard),
        );
        event!(
            Level::DEBUG,
            "machine built with rotors {:?} at {:?}",
            machine.rotor_names(),
            machine.positions()
        );
        machine
    }

    /// Builds a machine, rejecting any setting [`Machine::new`] would
    /// replace with a fallback.
    pub fn try_new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Assembles a machine from already built components.
    pub fn from_parts(
        left: Rotor,
        middle: Rotor,
        right: Rotor,
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Self {
        Self {
            left,
            middle,
            right,
            reflector,
            plugboard,
        }
    }

    /// Current left, middle and right rotor positions.
    pub fn positions(&self) -> [usize; 3] {
        [
            self.left.position(),
            self.middle.position(),
            self.right.position(),
        ]
    }

    pub fn rotor_names(&self) -> [&str; 3] {
        [self.left.name(), self.middle.name(), self.right.name()]
    }

    /// Steps the rotors once, including the middle rotor's double step.
    /// Notches are checked before anything moves.
    pub fn rotate(&mut self) {
        if self.middle.is_at_notch() {
            self.middle.turnover();
            self.left.turnover();
        } else if self.right.is_at_notch() {
            self.middle.turnover();
        }
        self.right.turnover();
        event!(Level::TRACE, "rotors stepped to {:?}", self.positions());
    }

    /// Enciphers one letter code, stepping the rotors first.
    pub fn encipher_letter(&mut self, c_idx: usize) -> Result<usize, EnigmaError> {
        let c_idx = alphabet::check_code(c_idx)?;
        Ok(self.encipher_index(c_idx))
    }

    pub fn encipher_char(&mut self, c: char) -> Result<char, EnigmaError> {
        let c_idx = alphabet::to_index(c)?;
        Ok(alphabet::to_char(self.encipher_index(c_idx)))
    }

    /// Enciphers a message of uppercase letters. The whole message is
    /// checked first, so on error the rotors have not moved.
    pub fn encipher_text(&mut self, text: &str) -> Result<String, EnigmaError> {
        let letters = text
            .chars()
            .map(alphabet::to_index)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(letters
            .into_iter()
            .map(|c_idx| alphabet::to_char(self.encipher_index(c_idx)))
            .collect())
    }

    fn encipher_index(&mut self, c_idx: usize) -> usize {
        self.rotate();

        let x = self.plugboard.forward(c_idx);
        let x = self.right.forward(x);
        let x = self.middle.forward(x);
        let x = self.left.forward(x);

        let x = self.reflector.forward(x);

        let x = self.left.backward(x);
        let x = self.middle.backward(x);
        let x = self.right.backward(x);

        self.plugboard.forward(x)
    }
}

impl From<&MachineConfig> for Machine {
    fn from(config: &MachineConfig) -> Self {
        Machine::new(config)
    }
}
