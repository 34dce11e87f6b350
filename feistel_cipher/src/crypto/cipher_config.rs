use crate::crypto::cipher_types::{Word, ALPHABET_SIZE};
use crate::crypto::error::{CipherError, CipherResult};
use num_bigint::BigUint;
use num_traits::One;

/// Widest supported half-block, bounded by [`Word`].
pub const MAX_WORD_SIZE: usize = Word::BITS as usize;

/// Upper bound on `m`, keeps `max_key` at most a few hundred KiB.
pub const MAX_KEY_WORDS: usize = 1 << 16;

/// Word size `n` and key word count `m`, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfig {
    word_size: usize,
    key_words: usize,
}

impl CipherConfig {
    pub fn new(word_size: usize, key_words: usize) -> CipherResult<Self> {
        if !(1..=MAX_WORD_SIZE).contains(&word_size)
            || !(1..=MAX_KEY_WORDS).contains(&key_words)
        {
            return Err(CipherError::Configuration {
                word_size,
                key_words,
            });
        }
        Ok(Self {
            word_size,
            key_words,
        })
    }

    pub fn word_size(&self) -> usize {
        self.word_size
    }

    pub fn key_words(&self) -> usize {
        self.key_words
    }

    pub fn block_bits(&self) -> usize {
        2 * self.word_size
    }

    pub fn key_bits(&self) -> usize {
        self.word_size * self.key_words
    }

    pub fn alphabet_size(&self) -> usize {
        ALPHABET_SIZE
    }

    /// `2^n`, the exclusive upper bound of a word.
    pub fn max_word(&self) -> u128 {
        1u128 << self.word_size
    }

    /// `2^(m*n)`, the exclusive upper bound of the whole key.
    pub fn max_key(&self) -> BigUint {
        BigUint::one() << self.key_bits()
    }

    pub fn word_mask(&self) -> Word {
        (self.max_word() - 1) as Word
    }

    /// Checks that exactly `m` key words were given and each one is below `2^n`.
    pub fn validate_key_words(&self, key_words: &[Word]) -> CipherResult<()> {
        if key_words.len() != self.key_words {
            return Err(CipherError::KeyFormat {
                expected: self.key_words,
                actual: key_words.len(),
            });
        }

        let max_word = self.max_word();
        for (index, &value) in key_words.iter().enumerate() {
            if u128::from(value) >= max_word {
                return Err(CipherError::KeyRange {
                    index,
                    value,
                    max_word,
                });
            }
        }
        Ok(())
    }

    pub fn check_word(&self, value: Word) -> CipherResult<Word> {
        if u128::from(value) >= self.max_word() {
            return Err(CipherError::WordRange {
                value,
                word_size: self.word_size,
            });
        }
        Ok(value)
    }
}
