//! The plugboard: letter swaps at the entry and exit of the rotor stack.

use tracing::{event, Level};

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::EnigmaError;
use crate::Substitution;

/// Swaps pairs of letters on the way into and out of the rotor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; ALPHABET_SIZE],
}

impl Plugboard {
    /// Wires the plugboard from a pairing string such as `"AFTVKOBLRW"`.
    ///
    /// A malformed string (odd length, a letter outside `A..=Z`, or any
    /// letter plugged twice) leaves the whole board unplugged. Use
    /// [`Plugboard::try_new`] to get the reason as an error instead.
    pub fn new(pairs: &str) -> Self {
        match Self::try_new(pairs) {
            Ok(plugboard) => plugboard,
            Err(err) => {
                event!(
                    Level::WARN,
                    "ignoring plugboard {:?}, falling back to identity: {}",
                    pairs,
                    err
                );
                Self::identity()
            }
        }
    }

    /// Strict variant of [`Plugboard::new`].
    pub fn try_new(pairs: &str) -> Result<Self, EnigmaError> {
        let letters = pairs
            .chars()
            .map(|c| {
                alphabet::to_index(c).map_err(|_| {
                    EnigmaError::InvalidConfiguration(format!(
                        "Plug '{c}' in plugboard '{pairs}' is not in A-Z"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if letters.len() % 2 != 0 {
            return Err(EnigmaError::InvalidConfiguration(format!(
                "Plugboard '{pairs}' has an unpaired letter"
            )));
        }

        let mut mapping = identity_mapping();
        let mut plugged = [false; ALPHABET_SIZE];
        for pair in letters.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            // "AA" plugs A twice as well.
            if plugged[a] || plugged[b] || a == b {
                let reused = if plugged[a] || a == b { a } else { b };
                return Err(EnigmaError::InvalidConfiguration(format!(
                    "Letter '{}' is plugged more than once",
                    alphabet::to_char(reused)
                )));
            }
            plugged[a] = true;
            plugged[b] = true;
            mapping[a] = b as u8;
            mapping[b] = a as u8;
        }

        Ok(Plugboard { mapping })
    }

    pub fn identity() -> Self {
        Plugboard {
            mapping: identity_mapping(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.mapping == identity_mapping()
    }

    /// Letter codes without a plug.
    pub fn unplugged(&self) -> Vec<usize> {
        (0..ALPHABET_SIZE)
            .filter(|&c| self.mapping[c] as usize == c)
            .collect()
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Substitution for Plugboard {
    fn forward(&self, c_idx: usize) -> usize {
        self.mapping[c_idx] as usize
    }
}

fn identity_mapping() -> [u8; ALPHABET_SIZE] {
    let mut mapping = [0u8; ALPHABET_SIZE];
    for (i, m) in mapping.iter_mut().enumerate() {
        *m = i as u8;
    }
    mapping
}
