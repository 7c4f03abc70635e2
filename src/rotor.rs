//! Rotors: the stepping wheels of the machine.

use std::fmt;

use crate::alphabet::ALPHABET_SIZE;
use crate::error::EnigmaError;
use crate::wiring::Wiring;
use crate::Substitution;

const ROTOR_I: Wiring = Wiring::from_static(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
const ROTOR_II: Wiring = Wiring::from_static(b"AJDKSIRUXBLHWTMCQGZNPYFVOE");
const ROTOR_III: Wiring = Wiring::from_static(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");
const ROTOR_IV: Wiring = Wiring::from_static(b"ESOVPZJAYQUIRHXLNFTGKDCMWB");
const ROTOR_V: Wiring = Wiring::from_static(b"VZBRGITYUPSDNHLXAWMJQOFECK");
const ROTOR_VI: Wiring = Wiring::from_static(b"JPGVOUMFYQBENHZRDKASXLICTW");
const ROTOR_VII: Wiring = Wiring::from_static(b"NZJHGRCXMYSWBOUFAIVLPEKQDT");
const ROTOR_VIII: Wiring = Wiring::from_static(b"FKQHTLXOCBJSPDZRAMEWNIUYGV");
const ROTOR_IDENTITY: Wiring = Wiring::from_static(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// Positions at which the double-notched naval rotors carry.
const DOUBLE_NOTCHES: [usize; 2] = [12, 25];

/// The rotor catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Identity,
}

impl RotorKind {
    pub const ALL: [RotorKind; 9] = [
        RotorKind::I,
        RotorKind::II,
        RotorKind::III,
        RotorKind::IV,
        RotorKind::V,
        RotorKind::VI,
        RotorKind::VII,
        RotorKind::VIII,
        RotorKind::Identity,
    ];

    /// Looks up a designator. Anything outside `"I"..="VIII"` is the
    /// identity rotor.
    pub fn from_designator(designator: &str) -> Self {
        Self::lookup(designator).unwrap_or(RotorKind::Identity)
    }

    /// Like [`RotorKind::from_designator`] but `None` for unknown names.
    pub fn lookup(designator: &str) -> Option<Self> {
        match designator {
            "I" => Some(RotorKind::I),
            "II" => Some(RotorKind::II),
            "III" => Some(RotorKind::III),
            "IV" => Some(RotorKind::IV),
            "V" => Some(RotorKind::V),
            "VI" => Some(RotorKind::VI),
            "VII" => Some(RotorKind::VII),
            "VIII" => Some(RotorKind::VIII),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RotorKind::I => "I",
            RotorKind::II => "II",
            RotorKind::III => "III",
            RotorKind::IV => "IV",
            RotorKind::V => "V",
            RotorKind::VI => "VI",
            RotorKind::VII => "VII",
            RotorKind::VIII => "VIII",
            RotorKind::Identity => "Identity",
        }
    }

    pub fn wiring(self) -> Wiring {
        match self {
            RotorKind::I => ROTOR_I,
            RotorKind::II => ROTOR_II,
            RotorKind::III => ROTOR_III,
            RotorKind::IV => ROTOR_IV,
            RotorKind::V => ROTOR_V,
            RotorKind::VI => ROTOR_VI,
            RotorKind::VII => ROTOR_VII,
            RotorKind::VIII => ROTOR_VIII,
            RotorKind::Identity => ROTOR_IDENTITY,
        }
    }

    /// Notch position recorded in the catalog. Zero for VI, VII and VIII,
    /// which carry at [`DOUBLE_NOTCHES`] instead.
    pub fn notch(self) -> usize {
        match self {
            RotorKind::I => 16,
            RotorKind::II => 4,
            RotorKind::III => 21,
            RotorKind::IV => 9,
            RotorKind::V => 25,
            RotorKind::VI | RotorKind::VII | RotorKind::VIII | RotorKind::Identity => 0,
        }
    }
}

impl fmt::Display for RotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wheel with fixed wiring and a mutable rotational position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Wiring,
    position: usize,
    notch: usize,
    ring_setting: usize,
    double_notch: bool,
}

impl Rotor {
    /// Builds a rotor from an arbitrary wiring spec. Rotors named `VI`,
    /// `VII` or `VIII` carry at the double notches regardless of `notch`.
    pub fn new(
        name: &str,
        wiring_spec: &str,
        position: usize,
        notch: usize,
        ring_setting: usize,
    ) -> Result<Self, EnigmaError> {
        let wiring = Wiring::parse(wiring_spec)?;
        Ok(Self::with_wiring(name, wiring, position, notch, ring_setting))
    }

    /// Builds a catalog rotor.
    pub fn from_catalog(kind: RotorKind, position: usize, ring_setting: usize) -> Self {
        Self::with_wiring(kind.name(), kind.wiring(), position, kind.notch(), ring_setting)
    }

    fn with_wiring(
        name: &str,
        wiring: Wiring,
        position: usize,
        notch: usize,
        ring_setting: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            wiring,
            position: position % ALPHABET_SIZE,
            notch: notch % ALPHABET_SIZE,
            ring_setting: ring_setting % ALPHABET_SIZE,
            double_notch: matches!(name, "VI" | "VII" | "VIII"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn notch_position(&self) -> usize {
        self.notch
    }

    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Whether advancing this rotor from its current position carries
    /// into the next rotor.
    pub fn is_at_notch(&self) -> bool {
        if self.double_notch {
            DOUBLE_NOTCHES.contains(&self.position)
        } else {
            self.position == self.notch
        }
    }

    /// Signal path from the contacts back towards the entry wheel.
    pub fn backward(&self, c_idx: usize) -> usize {
        self.encipher(c_idx, |i| self.wiring.backward(i))
    }

    pub fn turnover(&mut self) {
        self.position = (self.position + 1) % ALPHABET_SIZE;
    }

    // The wired core sits `position - ring_setting` contacts away from the
    // letter ring; enter shifted, map, then shift back.
    fn encipher(&self, c_idx: usize, mapping: impl Fn(usize) -> usize) -> usize {
        let size = ALPHABET_SIZE;
        let shift = (self.position + size - self.ring_setting) % size;
        let mapped = mapping((c_idx + shift) % size);
        (mapped + size - shift) % size
    }
}

impl Substitution for Rotor {
    fn forward(&self, c_idx: usize) -> usize {
        self.encipher(c_idx, |i| self.wiring.forward(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(RotorKind::from_designator("IV"), RotorKind::IV);
        assert_eq!(RotorKind::from_designator("IX"), RotorKind::Identity);
        assert_eq!(RotorKind::from_designator(""), RotorKind::Identity);
        assert_eq!(RotorKind::lookup("iv"), None);
    }

    #[test]
    fn test_catalog_wirings_are_permutations() {
        for kind in RotorKind::ALL {
            let w = kind.wiring();
            let mut seen = [false; ALPHABET_SIZE];
            for i in 0..ALPHABET_SIZE {
                seen[w.forward(i)] = true;
            }
            assert!(seen.iter().all(|&s| s), "rotor {kind} is not a bijection");
        }
    }

    #[test]
    fn test_rotor_i_at_origin() {
        let rotor = Rotor::from_catalog(RotorKind::I, 0, 0);
        assert_eq!(rotor.forward(0), 4); // A -> E
        assert_eq!(rotor.backward(4), 0);
    }

    #[test]
    fn test_position_offsets_the_core() {
        // Rotor I at B: A enters contact B, which is wired to K, and leaves at J.
        let rotor = Rotor::from_catalog(RotorKind::I, 1, 0);
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn test_ring_setting_cancels_position() {
        let at_origin = Rotor::from_catalog(RotorKind::III, 0, 0);
        let shifted = Rotor::from_catalog(RotorKind::III, 7, 7);
        for c in 0..ALPHABET_SIZE {
            assert_eq!(at_origin.forward(c), shifted.forward(c));
        }
    }

    #[test]
    fn test_turnover_wraps() {
        let mut rotor = Rotor::from_catalog(RotorKind::II, 25, 0);
        rotor.turnover();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_single_notch() {
        let mut rotor = Rotor::from_catalog(RotorKind::II, 3, 0);
        assert!(!rotor.is_at_notch());
        rotor.turnover();
        assert!(rotor.is_at_notch());
        rotor.turnover();
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn test_double_notch_ignores_catalog_notch() {
        for kind in [RotorKind::VI, RotorKind::VII, RotorKind::VIII] {
            let notched: Vec<usize> = (0..ALPHABET_SIZE)
                .filter(|&p| Rotor::from_catalog(kind, p, 0).is_at_notch())
                .collect();
            assert_eq!(notched, vec![12, 25], "rotor {kind}");
        }
    }

    #[test]
    fn test_identity_rotor_notch_at_zero() {
        let rotor = Rotor::from_catalog(RotorKind::Identity, 0, 0);
        assert_eq!(rotor.name(), "Identity");
        assert!(rotor.is_at_notch());
        assert_eq!(rotor.forward(5), 5);
    }

    #[test]
    fn test_custom_rotor_named_vi_is_double_notched() {
        let rotor = Rotor::new("VI", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", 12, 3, 0).unwrap();
        assert!(rotor.is_at_notch());
    }

    #[test]
    fn test_custom_rotor_rejects_bad_wiring() {
        assert!(Rotor::new("X", "ABCDEFGHIJKLMNOPQRSTUVWXYY", 0, 0, 0).is_err());
        assert!(matches!(
            Rotor::new("X", "abcdefghijklmnopqrstuvwxyz", 0, 0, 0),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_settings_reduced_modulo_26() {
        let rotor = Rotor::from_catalog(RotorKind::I, 27, 53);
        assert_eq!(rotor.position(), 1);
        assert_eq!(rotor.ring_setting(), 1);
    }
}
