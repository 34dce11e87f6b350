use std::sync::Arc;

use feistel_cipher::crypto::cipher_config::CipherConfig;
use feistel_cipher::crypto::cipher_context::CipherContext;
use feistel_cipher::crypto::cipher_types::{RoundKeys, Word};
use feistel_cipher::crypto::encryption_transformation::EncryptionTransformation;
use feistel_cipher::crypto::error::CipherResult;
use feistel_cipher::crypto::feistel_network::FeistelNetwork;
use feistel_cipher::crypto::key_expansion::KeyExpansion;

/// Toy schedule: round i uses key word i mod m rotated by i bits within the word.
struct RotatingKeyExpansion {
    word_size: u32,
    rounds: usize,
}

impl KeyExpansion for RotatingKeyExpansion {
    fn generate_round_keys(&self, key_words: &[Word]) -> RoundKeys {
        let mask = Word::MAX >> (Word::BITS - self.word_size);
        (0..self.rounds)
            .map(|i| {
                let key = key_words[i % key_words.len()];
                let shift = i as u32 % self.word_size;
                if shift == 0 {
                    key
                } else {
                    ((key << shift) | (key >> (self.word_size - shift))) & mask
                }
            })
            .collect()
    }
}

/// Toy round function: add, then xor with the key.
struct AddXorTransformation;

impl EncryptionTransformation for AddXorTransformation {
    fn transform(&self, half: Word, round_key: Word) -> Word {
        half.wrapping_add(round_key) ^ round_key.rotate_left(3)
    }
}

fn main() -> CipherResult<()> {
    env_logger::init();

    let word_size = 16;
    let rounds = 12;
    let config = CipherConfig::new(word_size, 4)?;
    let network = FeistelNetwork::new(
        config,
        rounds,
        Arc::new(RotatingKeyExpansion {
            word_size: word_size as u32,
            rounds,
        }),
        Arc::new(AddXorTransformation),
    );
    let ctx = CipherContext::new(config, Arc::new(network))?;

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let key_words = [0x1A2B, 0x3C4D, 0x5E6F, 0x7081];

    let encrypted = ctx.encrypt_ascii(Some(text), &key_words)?;
    let decrypted = ctx.decrypt_ascii(Some(encrypted.as_str()), &key_words)?;

    println!("plain:     {text}");
    println!(
        "encrypted: {}",
        encrypted
            .chars()
            .map(|c| format!("{:02x}", u32::from(c)))
            .collect::<String>()
    );
    println!("decrypted: {}", decrypted.trim_end_matches('\0'));

    assert_eq!(decrypted.trim_end_matches('\0'), text);
    println!("Feistel n={word_size} rounds={rounds} OK");

    Ok(())
}
