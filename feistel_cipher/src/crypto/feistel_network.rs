use crate::crypto::cipher_config::CipherConfig;
use crate::crypto::cipher_traits::FeistelCipher;
use crate::crypto::cipher_types::{Block, RoundKeys, Word};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

/// Balanced two-branch Feistel network over `n`-bit words.
///
/// Round `i` maps `(L, R)` to `(R, L ^ F(R, k_i))`. Decryption walks the round keys
/// backwards, so any round function yields an invertible cipher.
#[derive(Clone)]
pub struct FeistelNetwork {
    config: CipherConfig,
    num_round: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        config: CipherConfig,
        num_round: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            config,
            num_round,
            key_expansion,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    fn split_block(&self, block: Block, round_keys: &[Word]) -> CipherResult<(Word, Word)> {
        if round_keys.len() < self.num_round {
            return Err(CipherError::RoundKeyCount {
                expected: self.num_round,
                actual: round_keys.len(),
            });
        }
        Ok((
            self.config.check_word(block.left)?,
            self.config.check_word(block.right)?,
        ))
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: Block,
        round_keys: &[Word],
    ) -> CipherResult<Block> {
        let (mut left, mut right) = self.split_block(block, round_keys)?;
        let mask = self.config.word_mask();

        for &round_key in &round_keys[..self.num_round] {
            let feistel_out = self.transformation.transform(right, round_key) & mask;
            let new_right = left ^ feistel_out;
            left = right;
            right = new_right;
        }

        Ok(Block::new(left, right))
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: Block,
        round_keys: &[Word],
    ) -> CipherResult<Block> {
        let (mut left, mut right) = self.split_block(block, round_keys)?;
        let mask = self.config.word_mask();

        for &round_key in round_keys[..self.num_round].iter().rev() {
            let feistel_out = self.transformation.transform(left, round_key) & mask;
            let new_left = right ^ feistel_out;
            right = left;
            left = new_left;
        }

        Ok(Block::new(left, right))
    }
}

impl FeistelCipher for FeistelNetwork {
    fn cipher_config(&self) -> Option<&CipherConfig> {
        Some(&self.config)
    }

    fn expand_key(&self, key_words: &[Word]) -> CipherResult<RoundKeys> {
        Ok(self.key_expansion.generate_round_keys(key_words))
    }

    fn encrypt_block(&self, block: Block, round_keys: &[Word]) -> CipherResult<Block> {
        self.encrypt_with_round_keys(block, round_keys)
    }

    fn decrypt_block(&self, block: Block, round_keys: &[Word]) -> CipherResult<Block> {
        self.decrypt_with_round_keys(block, round_keys)
    }
}
