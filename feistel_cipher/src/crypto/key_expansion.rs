use crate::crypto::cipher_types::{RoundKeys, Word};

/// Key schedule strategy. Receives key words that were already validated against the config.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key_words: &[Word]) -> RoundKeys;
}
