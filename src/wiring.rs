//! Fixed substitution tables.

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::EnigmaError;

/// A bijection over letter codes together with its inverse.
///
/// Tables are plain `Copy` data, so the catalog entries below are built once
/// at compile time and every rotor or reflector just carries a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [u8; ALPHABET_SIZE],
    backward: [u8; ALPHABET_SIZE],
}

impl Wiring {
    /// Builds a table from a trusted 26-letter literal. Only used for the
    /// historical catalogs; a bad literal fails const evaluation.
    pub(crate) const fn from_static(spec: &[u8; ALPHABET_SIZE]) -> Self {
        let mut forward = [0u8; ALPHABET_SIZE];
        let mut backward = [0u8; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let mapped = spec[i] - b'A';
            forward[i] = mapped;
            backward[mapped as usize] = i as u8;
            i += 1;
        }
        Wiring { forward, backward }
    }

    /// Builds a table from a mapping already known to be a permutation.
    pub(crate) fn from_mapping(forward: [u8; ALPHABET_SIZE]) -> Self {
        let mut backward = [0u8; ALPHABET_SIZE];
        for (i, &mapped) in forward.iter().enumerate() {
            backward[mapped as usize] = i as u8;
        }
        Wiring { forward, backward }
    }

    pub fn identity() -> Self {
        Self::from_static(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ")
    }

    /// Parses a wiring such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`: the letter at
    /// index `i` is where contact `i` is wired to.
    pub fn parse(spec: &str) -> Result<Self, EnigmaError> {
        if spec.chars().count() != ALPHABET_SIZE {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "Wiring '{spec}' must have exactly {ALPHABET_SIZE} letters"
            )));
        }

        let mut forward = [0u8; ALPHABET_SIZE];
        let mut used = [false; ALPHABET_SIZE];
        for (i, wc) in spec.chars().enumerate() {
            let idx = alphabet::to_index(wc).map_err(|_| {
                EnigmaError::InvalidConfiguration(format!(
                    "Letter '{wc}' in wiring '{spec}' is not in A-Z"
                ))
            })?;
            if used[idx] {
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "Duplicate letter '{wc}' in wiring '{spec}'"
                )));
            }
            used[idx] = true;
            forward[i] = idx as u8;
        }

        Ok(Self::from_mapping(forward))
    }

    pub fn forward(&self, c_idx: usize) -> usize {
        self.forward[c_idx] as usize
    }

    pub fn backward(&self, c_idx: usize) -> usize {
        self.backward[c_idx] as usize
    }

    /// True when the table is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.backward
    }

    /// Letter codes that the table maps onto themselves.
    pub fn fixed_points(&self) -> Vec<usize> {
        (0..ALPHABET_SIZE)
            .filter(|&i| self.forward(i) == i)
            .collect()
    }
}

impl Default for Wiring {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_inverse() {
        let w = Wiring::parse("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert_eq!(w.forward(0), 4);
        assert_eq!(w.backward(4), 0);
        for i in 0..ALPHABET_SIZE {
            assert_eq!(w.backward(w.forward(i)), i);
        }
    }

    #[test]
    fn test_parse_matches_static() {
        let parsed = Wiring::parse("BDFHJLCPRTXVZNYEIWGAKMUSQO").unwrap();
        let fixed = Wiring::from_static(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");
        assert_eq!(parsed, fixed);
    }

    #[test]
    fn test_parse_rejects_short_spec() {
        assert!(matches!(
            Wiring::parse("ABC"),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate() {
        assert!(matches!(
            Wiring::parse("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(EnigmaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_parse_rejects_lowercase() {
        assert_eq!(
            Wiring::parse("aBCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(EnigmaError::InvalidConfiguration(
                "Letter 'a' in wiring 'aBCDEFGHIJKLMNOPQRSTUVWXYZ' is not in A-Z".into()
            ))
        );
    }

    #[test]
    fn test_identity_is_all_fixed_points() {
        let w = Wiring::identity();
        assert!(w.is_involution());
        assert_eq!(w.fixed_points().len(), ALPHABET_SIZE);
    }
}
