use crate::crypto::cipher_types::{Word, ALPHABET_SIZE};
use crate::crypto::error::{CipherError, CipherResult};
use bitvec::prelude::{BitSlice, BitVec};

/// Accepts word widths a [`Word`] can hold.
pub fn check_width(width: usize) -> CipherResult<usize> {
    if width == 0 || width > Word::BITS as usize {
        return Err(CipherError::BitWidth(width));
    }
    Ok(width)
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * ALPHABET_SIZE);
    for &byte in input {
        for i in (0..ALPHABET_SIZE).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Packs bits back into bytes. Fails unless the length is a whole number of characters.
pub fn bits_to_bytes(bits: &BitSlice) -> CipherResult<Vec<u8>> {
    if bits.len() % ALPHABET_SIZE != 0 {
        return Err(CipherError::CodecAlignment {
            bits: bits.len(),
            alphabet: ALPHABET_SIZE,
        });
    }

    let mut bytes = Vec::with_capacity(bits.len() / ALPHABET_SIZE);
    for chunk in bits.chunks(ALPHABET_SIZE) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (ALPHABET_SIZE - 1 - i);
            }
        }
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Maps each character to its 8-bit code. Code points above U+00FF are rejected.
pub fn ascii_to_bytes(text: &str) -> CipherResult<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, c)| {
            u8::try_from(u32::from(c)).map_err(|_| {
                CipherError::Input(format!(
                    "character {c:?} at position {position} is outside the 8-bit alphabet"
                ))
            })
        })
        .collect()
}

pub fn bytes_to_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn ascii_to_bits(text: &str) -> CipherResult<BitVec> {
    Ok(bytes_to_bits(&ascii_to_bytes(text)?))
}

pub fn bits_to_ascii(bits: &BitSlice) -> CipherResult<String> {
    Ok(bytes_to_ascii(&bits_to_bytes(bits)?))
}

/// Splits `bits` into consecutive `width`-bit chunks. The last chunk may be shorter.
pub fn chop_bits(
    bits: &BitSlice,
    width: usize,
) -> CipherResult<impl Iterator<Item = &BitSlice> + '_> {
    Ok(bits.chunks(check_width(width)?))
}

/// Reads a chunk as an unsigned integer, most significant bit first.
pub fn bits_to_word(chunk: &BitSlice) -> Word {
    chunk
        .iter()
        .by_vals()
        .fold(0, |acc, bit| (acc << 1) | Word::from(bit))
}

/// Renders `word` as exactly `width` bits, zero padded on the left.
pub fn word_to_bits(word: Word, width: usize) -> CipherResult<BitVec> {
    check_width(width)?;
    if width < Word::BITS as usize && word >> width != 0 {
        return Err(CipherError::WordRange {
            value: word,
            word_size: width,
        });
    }

    let mut bits = BitVec::with_capacity(width);
    for i in (0..width).rev() {
        bits.push((word >> i) & 1 != 0);
    }
    Ok(bits)
}

/// Chops `bits` into `width`-bit words. A short final chunk keeps its bits in the high
/// positions, as if it had been zero padded on the right.
pub fn bits_to_words(bits: &BitSlice, width: usize) -> CipherResult<Vec<Word>> {
    Ok(chop_bits(bits, width)?
        .map(|chunk| bits_to_word(chunk) << (width - chunk.len()))
        .collect())
}

pub fn words_to_bits(words: &[Word], width: usize) -> CipherResult<BitVec> {
    check_width(width)?;
    let mut bits = BitVec::with_capacity(words.len() * width);
    for &word in words {
        bits.extend(word_to_bits(word, width)?.iter().by_vals());
    }
    Ok(bits)
}

/// Appends zero bits until the length is a multiple of `multiple`.
pub fn zero_extend(bits: &mut BitVec, multiple: usize) -> CipherResult<()> {
    if multiple == 0 {
        return Err(CipherError::BitWidth(multiple));
    }
    let remainder = bits.len() % multiple;
    if remainder != 0 {
        bits.resize(bits.len() + multiple - remainder, false);
    }
    Ok(())
}

pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `None` when either side is zero or the result overflows.
pub fn lcm(a: usize, b: usize) -> Option<usize> {
    if a == 0 || b == 0 {
        return None;
    }
    (a / gcd(a, b)).checked_mul(b)
}
