use crate::crypto::cipher_types::Word;

/// Feistel round function `F(half, round_key)`. Does not need to be invertible; the result
/// is masked to the word size by the network.
pub trait EncryptionTransformation {
    fn transform(&self, half: Word, round_key: Word) -> Word;
}
