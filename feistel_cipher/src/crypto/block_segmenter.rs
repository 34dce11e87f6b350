use crate::crypto::cipher_types::{Block, Word};

/// Pairs consecutive words into blocks. An odd trailing word is paired with a zero word.
pub fn words_to_blocks(words: &[Word]) -> Vec<Block> {
    if words.len() % 2 != 0 {
        log::trace!("odd word count {}, padding with a zero word", words.len());
    }

    words
        .chunks(2)
        .map(|pair| Block::new(pair[0], pair.get(1).copied().unwrap_or(0)))
        .collect()
}

pub fn blocks_to_words(blocks: &[Block]) -> Vec<Word> {
    blocks.iter().flat_map(Block::words).collect()
}
