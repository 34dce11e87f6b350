use crate::crypto::block_segmenter::{blocks_to_words, words_to_blocks};
use crate::crypto::cipher_config::CipherConfig;
use crate::crypto::cipher_traits::FeistelCipher;
use crate::crypto::cipher_types::{Block, RoundKeys, Word, ALPHABET_SIZE};
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::utils::{
    ascii_to_bytes, bits_to_bytes, bits_to_words, bytes_to_ascii, bytes_to_bits, lcm,
    words_to_bits, zero_extend,
};
use rayon::prelude::*;
use std::sync::Arc;

/// Block count from which blocks are transformed on the rayon pool.
pub const PARALLELISM_THRESHOLD: usize = 4096;

/// Text facade over a [`FeistelCipher`]: text -> bits -> words -> blocks and back.
///
/// Holds no per-call state, so a context can be shared between threads and reused freely.
#[derive(Clone)]
pub struct CipherContext {
    config: CipherConfig,
    algorithm: Arc<dyn FeistelCipher + Send + Sync>,
}

impl CipherContext {
    /// Fails when `algorithm` reports a config other than `config`.
    pub fn new(
        config: CipherConfig,
        algorithm: Arc<dyn FeistelCipher + Send + Sync>,
    ) -> CipherResult<Self> {
        if let Some(own) = algorithm.cipher_config() {
            if *own != config {
                log::warn!("cipher built for {:?} paired with context {:?}", own, config);
                return Err(CipherError::Configuration {
                    word_size: own.word_size(),
                    key_words: own.key_words(),
                });
            }
        }

        log::info!(
            "creating block cipher with block size: {} key size: {}",
            config.block_bits(),
            config.key_bits()
        );
        Ok(Self { config, algorithm })
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    pub fn encrypt_ascii(&self, text: Option<&str>, key_words: &[Word]) -> CipherResult<String> {
        self.process_ascii(text, key_words, true)
    }

    /// Decryption returns every reassembled character, so the plaintext may come back
    /// followed by `'\0'` padding added during encryption.
    pub fn decrypt_ascii(&self, text: Option<&str>, key_words: &[Word]) -> CipherResult<String> {
        self.process_ascii(text, key_words, false)
    }

    pub fn encrypt_bytes(&self, data: &[u8], key_words: &[Word]) -> CipherResult<Vec<u8>> {
        self.process_bytes(data, key_words, true)
    }

    /// May return trailing zero bytes added as padding during encryption.
    pub fn decrypt_bytes(&self, data: &[u8], key_words: &[Word]) -> CipherResult<Vec<u8>> {
        self.process_bytes(data, key_words, false)
    }

    pub fn text_to_blocks(&self, text: &str) -> CipherResult<Vec<Block>> {
        self.bytes_to_blocks(&ascii_to_bytes(text)?)
    }

    /// Splits bytes into blocks of two `n`-bit words.
    ///
    /// The bit stream is zero extended to a multiple of `lcm(n, 8)` so the last word is
    /// never short, then an odd word count gets one zero word. Every result therefore
    /// reassembles into whole characters.
    pub fn bytes_to_blocks(&self, data: &[u8]) -> CipherResult<Vec<Block>> {
        let word_size = self.config.word_size();
        let multiple =
            lcm(word_size, ALPHABET_SIZE).ok_or(CipherError::BitWidth(word_size))?;
        let mut bits = bytes_to_bits(data);
        zero_extend(&mut bits, multiple)?;

        let words = bits_to_words(&bits, word_size)?;
        Ok(words_to_blocks(&words))
    }

    pub fn blocks_to_text(&self, words: &[Word]) -> CipherResult<String> {
        Ok(bytes_to_ascii(&self.blocks_to_bytes(words)?))
    }

    pub fn blocks_to_bytes(&self, words: &[Word]) -> CipherResult<Vec<u8>> {
        let bits = words_to_bits(words, self.config.word_size())?;
        bits_to_bytes(&bits)
    }

    fn process_ascii(
        &self,
        text: Option<&str>,
        key_words: &[Word],
        encrypt: bool,
    ) -> CipherResult<String> {
        let text = text.ok_or_else(|| CipherError::Input("text is missing".to_string()))?;
        let data = ascii_to_bytes(text)?;

        let output = self.process_bytes(&data, key_words, encrypt)?;
        Ok(bytes_to_ascii(&output))
    }

    fn process_bytes(
        &self,
        data: &[u8],
        key_words: &[Word],
        encrypt: bool,
    ) -> CipherResult<Vec<u8>> {
        let round_keys = self.prepare_round_keys(key_words)?;
        let blocks = self.bytes_to_blocks(data)?;
        let words = self.process_blocks(&blocks, &round_keys, encrypt)?;
        self.blocks_to_bytes(&words)
    }

    fn prepare_round_keys(&self, key_words: &[Word]) -> CipherResult<RoundKeys> {
        self.config.validate_key_words(key_words)?;
        let round_keys = self.algorithm.expand_key(key_words)?;
        log::debug!(
            "expanded {} key words into {} round keys",
            key_words.len(),
            round_keys.len()
        );
        Ok(round_keys)
    }

    fn process_blocks(
        &self,
        blocks: &[Block],
        round_keys: &[Word],
        encrypt: bool,
    ) -> CipherResult<Vec<Word>> {
        let transform = |block: &Block| {
            log::trace!("block {:?} (encrypt: {})", block, encrypt);
            if encrypt {
                self.algorithm.encrypt_block(*block, round_keys)
            } else {
                self.algorithm.decrypt_block(*block, round_keys)
            }
        };

        let parallel = blocks.len() >= PARALLELISM_THRESHOLD;
        log::debug!("processing {} blocks (parallel: {})", blocks.len(), parallel);

        // collect keeps input order on both paths
        let processed: Vec<Block> = if parallel {
            blocks.par_iter().map(transform).collect::<CipherResult<_>>()?
        } else {
            blocks.iter().map(transform).collect::<CipherResult<_>>()?
        };

        Ok(blocks_to_words(&processed))
    }
}
