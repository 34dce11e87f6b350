use crate::crypto::cipher_config::CipherConfig;
use crate::crypto::cipher_types::{Block, RoundKeys, Word};
use crate::crypto::error::{CipherError, CipherResult};

/// Extension points a concrete cipher implements to plug into [`CipherContext`].
///
/// `decrypt_block(encrypt_block(b, k), k) == b` must hold for every block and every key
/// schedule, the context relies on it to reassemble text.
///
/// [`CipherContext`]: crate::crypto::cipher_context::CipherContext
pub trait FeistelCipher {
    /// Word size and key shape the cipher was built for, if it is tied to one.
    fn cipher_config(&self) -> Option<&CipherConfig> {
        None
    }

    /// Derives round keys from validated key words. Defaults to using the key words as is.
    fn expand_key(&self, key_words: &[Word]) -> CipherResult<RoundKeys> {
        Ok(key_words.to_vec())
    }

    fn encrypt_block(&self, _block: Block, _round_keys: &[Word]) -> CipherResult<Block> {
        Err(CipherError::NotImplemented("encrypt_block"))
    }

    fn decrypt_block(&self, _block: Block, _round_keys: &[Word]) -> CipherResult<Block> {
        Err(CipherError::NotImplemented("decrypt_block"))
    }
}
