pub mod block_segmenter;
pub mod cipher_config;
pub mod cipher_context;
pub mod cipher_traits;
pub mod cipher_types;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod utils;

use crate::crypto::cipher_types::{RoundKeys, Word};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

impl KeyExpansion for Arc<dyn KeyExpansion + Send + Sync> {
    fn generate_round_keys(&self, key_words: &[Word]) -> RoundKeys {
        (**self).generate_round_keys(key_words)
    }
}

impl EncryptionTransformation for Arc<dyn EncryptionTransformation + Send + Sync> {
    fn transform(&self, half: Word, round_key: Word) -> Word {
        (**self).transform(half, round_key)
    }
}
