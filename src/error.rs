use thiserror::Error;

/// Errors that can occur while configuring or running the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    #[error("Character '{0}' is not an uppercase letter A-Z.")]
    InvalidCharacter(char),
    #[error("Letter code {0} is outside 0..26.")]
    InvalidLetterCode(usize),
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_character() {
        let err = EnigmaError::InvalidCharacter('a');
        assert_eq!(
            err.to_string(),
            "Character 'a' is not an uppercase letter A-Z."
        );
    }

    #[test]
    fn test_display_invalid_configuration() {
        let err = EnigmaError::InvalidConfiguration("Duplicate plug 'A'".into());
        assert_eq!(err.to_string(), "Configuration error: Duplicate plug 'A'");
    }
}
