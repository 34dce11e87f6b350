use feistel_cipher::crypto::cipher_config::{CipherConfig, MAX_KEY_WORDS, MAX_WORD_SIZE};
use feistel_cipher::crypto::error::CipherError;
use num_bigint::BigUint;

#[test]
fn test_new_rejects_zero_parameters() {
    assert_eq!(
        CipherConfig::new(0, 2),
        Err(CipherError::Configuration {
            word_size: 0,
            key_words: 2
        })
    );
    assert_eq!(
        CipherConfig::new(8, 0),
        Err(CipherError::Configuration {
            word_size: 8,
            key_words: 0
        })
    );
}

#[test]
fn test_new_rejects_words_wider_than_u64() {
    assert!(CipherConfig::new(MAX_WORD_SIZE, 1).is_ok());
    assert!(matches!(
        CipherConfig::new(MAX_WORD_SIZE + 1, 1),
        Err(CipherError::Configuration { .. })
    ));
}

#[test]
fn test_new_caps_key_word_count() {
    let widest = CipherConfig::new(MAX_WORD_SIZE, MAX_KEY_WORDS).unwrap();
    assert_eq!(widest.key_bits(), 64 * 65536);
    assert_eq!(widest.max_key().bits(), 64 * 65536 + 1);
    assert_eq!(
        CipherConfig::new(MAX_WORD_SIZE, MAX_KEY_WORDS + 1),
        Err(CipherError::Configuration {
            word_size: 64,
            key_words: MAX_KEY_WORDS + 1
        })
    );
    assert!(CipherConfig::new(8, usize::MAX).is_err());
}

#[test]
fn test_derived_maxima() {
    let config = CipherConfig::new(16, 4).unwrap();
    assert_eq!(config.word_size(), 16);
    assert_eq!(config.key_words(), 4);
    assert_eq!(config.block_bits(), 32);
    assert_eq!(config.key_bits(), 64);
    assert_eq!(config.alphabet_size(), 8);
    assert_eq!(config.max_word(), 65536);
    assert_eq!(config.word_mask(), 0xFFFF);
    assert_eq!(config.max_key(), BigUint::from(1u128 << 64));
}

#[test]
fn test_max_key_beyond_machine_words() {
    let config = CipherConfig::new(64, 3).unwrap();
    assert_eq!(config.max_word(), 1u128 << 64);
    assert_eq!(config.word_mask(), u64::MAX);
    assert_eq!(config.max_key().bits(), 193);
}

#[test]
fn test_validate_key_words_count() {
    let config = CipherConfig::new(8, 2).unwrap();
    assert_eq!(
        config.validate_key_words(&[1]),
        Err(CipherError::KeyFormat {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        config.validate_key_words(&[1, 2, 3]),
        Err(CipherError::KeyFormat {
            expected: 2,
            actual: 3
        })
    );
    assert!(config.validate_key_words(&[1, 2]).is_ok());
}

#[test]
fn test_validate_key_words_boundary() {
    let config = CipherConfig::new(8, 2).unwrap();
    assert!(config.validate_key_words(&[0, 255]).is_ok());
    assert_eq!(
        config.validate_key_words(&[0, 256]),
        Err(CipherError::KeyRange {
            index: 1,
            value: 256,
            max_word: 256
        })
    );
}

#[test]
fn test_validate_key_words_full_width() {
    let config = CipherConfig::new(64, 1).unwrap();
    assert!(config.validate_key_words(&[u64::MAX]).is_ok());
}

#[test]
fn test_check_word() {
    let config = CipherConfig::new(4, 1).unwrap();
    assert_eq!(config.check_word(15), Ok(15));
    assert_eq!(
        config.check_word(16),
        Err(CipherError::WordRange {
            value: 16,
            word_size: 4
        })
    );
}
