//! Generator configuration

use super::Alphabet;

/// Default minimum answer length
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default number of letter sets drawn per search
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Tunables for one puzzle search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Shortest word counted as an answer
    pub min_length: usize,
    /// Letter sets drawn; each is evaluated under all seven centers
    pub max_attempts: usize,
    /// Source alphabet for draws
    pub alphabet: Alphabet,
}

impl GeneratorConfig {
    /// Create a config with the default alphabet
    ///
    /// # Parameters
    /// - `min_length`: shortest answer length (default: 4)
    /// - `max_attempts`: letter sets drawn per search (default: 10)
    #[must_use]
    pub fn new(min_length: usize, max_attempts: usize) -> Self {
        Self {
            min_length,
            max_attempts,
            alphabet: Alphabet::default(),
        }
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_length, 4);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.alphabet, Alphabet::default());
    }

    #[test]
    fn with_alphabet_replaces_source() {
        let alphabet = Alphabet::new("EEEAASTRNL").unwrap();
        let config = GeneratorConfig::new(5, 3).with_alphabet(alphabet.clone());
        assert_eq!(config.min_length, 5);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.alphabet, alphabet);
    }
}
