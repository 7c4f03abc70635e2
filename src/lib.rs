//! Enigma rotor cipher machine.
//!
//! A [`Machine`] holds three [`Rotor`]s, a [`Reflector`] and a
//! [`Plugboard`]. Every letter first steps the rotors, then travels
//!
//! ```text
//! plugboard -> right -> middle -> left -> reflector
//!           -> left -> middle -> right -> plugboard
//! ```
//!
//! Because the reflector is an involution, a machine set up the same way
//! deciphers what it enciphered.
//!
//! ```
//! use enigma::{Machine, MachineConfig};
//!
//! let config = MachineConfig::new(["II", "V", "III"], "B", [7, 4, 19], [12, 2, 20], "AFTVKOBLRW");
//! let ciphertext = Machine::new(&config).encipher_text("HELLOWORLD").unwrap();
//! let plaintext = Machine::new(&config).encipher_text(&ciphertext).unwrap();
//! assert_eq!(plaintext, "HELLOWORLD");
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod wiring;

pub use config::{MachineConfig, RightRotorSource};
pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorKind};
pub use rotor::{Rotor, RotorKind};
pub use wiring::Wiring;

/// A fixed letter-for-letter substitution, seen from the entry side.
pub trait Substitution {
    fn forward(&self, c_idx: usize) -> usize;
}
