use crate::crypto::cipher_types::Word;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid cipher configuration: word size {word_size} (1..=64), key words {key_words} (1..=65536)")]
    Configuration { word_size: usize, key_words: usize },

    #[error("bad key words: expected {expected}, got {actual}")]
    KeyFormat { expected: usize, actual: usize },

    #[error("bad key word at index {index}: {value} is not below {max_word}")]
    KeyRange {
        index: usize,
        value: Word,
        max_word: u128,
    },

    #[error("bad input: {0}")]
    Input(String),

    #[error("{bits} bits cannot be split into {alphabet}-bit characters")]
    CodecAlignment { bits: usize, alphabet: usize },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("bit width {0} is outside 1..=64")]
    BitWidth(usize),

    #[error("word {value} does not fit in {word_size} bits")]
    WordRange { value: Word, word_size: usize },

    #[error("expected at least {expected} round keys, got {actual}")]
    RoundKeyCount { expected: usize, actual: usize },
}

pub type CipherResult<T> = Result<T, CipherError>;
